use serde::{Deserialize, Serialize};

// Decision request format
#[derive(Deserialize, Serialize, Clone)]
pub struct CheckRequest {
    // caller identity the count is tracked under (user id, IP, ...)
    pub key: String,
}

// Decision response format
#[derive(Deserialize, Serialize, Clone)]
pub struct CheckResponse {
    pub key: String,
    pub allowed: bool,
}
