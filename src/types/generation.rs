//! Request and response types for the `/generate` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::VoxformError;

/// One speech-generation request, assembled fresh on every submit.
///
/// Serializes to the exact wire shape the backend expects:
/// `{ text, language, gender, pitch, speed }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationRequest {
    pub text: String,
    pub language: String,
    pub gender: String,
    pub pitch: i32,
    pub speed: i32,
}

/// Successful generation outcome: where the audio lives and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAudio {
    /// URL the audio element and download link should point at.
    pub file_url: String,
    /// Suggested filename for the download attribute.
    pub filename: String,
}

/// Wire shape of the `/generate` response body.
///
/// The backend owns this contract; the controller only reads the `success`
/// flag and the fields that go with it.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub file_url: Option<String>,
    pub filename: Option<String>,
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Fold the flag-plus-optional-fields shape into a typed result.
    pub fn into_result(self) -> Result<GeneratedAudio, VoxformError> {
        if !self.success {
            return Err(VoxformError::Backend {
                message: self.error,
            });
        }
        let file_url = self.file_url.ok_or_else(|| {
            VoxformError::InvalidState("Success response missing file_url".to_string())
        })?;
        let filename = self.filename.ok_or_else(|| {
            VoxformError::InvalidState("Success response missing filename".to_string())
        })?;
        Ok(GeneratedAudio { file_url, filename })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_folds_to_audio() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"success":true,"file_url":"/f.mp3","filename":"out.mp3"}"#)
                .unwrap();
        let audio = response.into_result().unwrap();
        assert_eq!(audio.file_url, "/f.mp3");
        assert_eq!(audio.filename, "out.mp3");
    }

    #[test]
    fn failure_response_carries_server_message() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"success":false,"error":"bad input"}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.backend_message(), Some("bad input"));
    }

    #[test]
    fn failure_response_without_message_is_still_backend() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"success":false}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(matches!(err, VoxformError::Backend { message: None }));
    }

    #[test]
    fn success_response_missing_url_is_invalid_state() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"success":true,"filename":"out.mp3"}"#).unwrap();
        assert!(matches!(
            response.into_result(),
            Err(VoxformError::InvalidState(_))
        ));
    }
}
