pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const TRANSCRIPTION_MODEL: &str = "whisper-1";
pub const IMAGE_ANALYSIS_MODEL: &str = "llama3-70b-8192";

// Groq caps audio uploads at 25 MB; the request body limit mirrors it.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
