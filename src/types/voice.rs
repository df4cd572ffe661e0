//! Voice catalog types (`/voices` endpoint).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One entry from the backend's voice catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub gender: VoiceGender,
    pub language: String,
}

/// Voice gender as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VoiceGender {
    Male,
    Female,
}

/// Wire shape of the `/voices` response body.
#[derive(Debug, Deserialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceInfo>,
}
