use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponseDto {
    pub message: String,
}

impl MessageResponseDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
