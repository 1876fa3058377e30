pub mod capabilities;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod routes;
pub mod state;

pub use axum;
pub use reqwest;
pub use serde;
pub use serde_json;
