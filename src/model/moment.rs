use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateMomentDto {
    pub thumbnail_url: String,
    pub recipients: Vec<i64>,
    pub overlays: Option<serde_json::Value>,
}

/// Echo of the accepted moment payload. The moments endpoint is a local
/// acceptance stub with no persistence.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MomentAcceptedDto {
    pub thumbnail_url: String,
    pub recipients: Vec<i64>,
    pub overlays: Option<serde_json::Value>,
}
