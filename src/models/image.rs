use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysisRequest {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub prompt: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ImageAnalysis {
    pub content: String,
}
