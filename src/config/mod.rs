pub mod constants;
pub mod credentials;
pub mod lib;
pub mod models;

pub use lib::load_config;
