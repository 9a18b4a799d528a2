use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SymptomRequest {
    pub symptoms: String,
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct EmotionRequest {
    pub emotions: String,
    pub language: String,
}
