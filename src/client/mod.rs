//! HTTP client for the generation backend.

pub mod http;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Result, VoxformError};
use crate::types::{GenerateResponse, GeneratedAudio, GenerationRequest, VoiceInfo, VoicesResponse};
use crate::util::timeout::with_timeout;

use http::{shared_client, trim_trailing_slash};

/// Trait for speech-generation backends.
///
/// The controller depends on this seam rather than on a concrete HTTP
/// client, so hosts can substitute a fake or an in-process engine.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Generate speech audio for one request.
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedAudio>;
}

/// Client for the demo backend's `/generate` and `/voices` endpoints.
///
/// Failures are terminal: no retry is attempted, and no deadline is applied
/// unless one is configured with [`with_timeout`](Self::with_timeout).
#[derive(Debug, Clone)]
pub struct GenerateClient {
    base_url: String,
    timeout: Option<Duration>,
}

impl GenerateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Apply a deadline to each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Issue exactly one generation request.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedAudio> {
        let url = format!("{}/generate", trim_trailing_slash(&self.base_url));
        tracing::debug!(
            language = %request.language,
            pitch = request.pitch,
            speed = request.speed,
            text_chars = request.text.chars().count(),
            "Issuing generation request"
        );

        let result = self
            .run(async {
                let response = shared_client().post(&url).json(request).send().await?;
                parse_generate_response(response).await
            })
            .await;

        if let Err(error) = &result {
            tracing::warn!(error = %error, "Generation request failed");
        }
        result
    }

    /// Fetch the backend's voice catalog.
    pub async fn voices(&self) -> Result<Vec<VoiceInfo>> {
        let url = format!("{}/voices", trim_trailing_slash(&self.base_url));

        self.run(async {
            let response = shared_client().get(&url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            if !(200..300).contains(&status) {
                return Err(VoxformError::api(status, body));
            }
            let parsed: VoicesResponse = serde_json::from_str(&body)?;
            Ok(parsed.voices)
        })
        .await
    }

    async fn run<T>(&self, future: impl std::future::Future<Output = Result<T>>) -> Result<T> {
        match self.timeout {
            Some(duration) => with_timeout(duration, future).await,
            None => future.await,
        }
    }
}

#[async_trait]
impl SpeechBackend for GenerateClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedAudio> {
        GenerateClient::generate(self, request).await
    }
}

/// Any JSON-parseable body is interpreted per its `success` flag, regardless
/// of status code. A non-JSON body on a failure status becomes an API error.
async fn parse_generate_response(response: reqwest::Response) -> Result<GeneratedAudio> {
    let status = response.status().as_u16();
    let body = response.text().await?;

    match serde_json::from_str::<GenerateResponse>(&body) {
        Ok(parsed) => parsed.into_result(),
        Err(error) => {
            if !(200..300).contains(&status) {
                return Err(VoxformError::api(status, body));
            }
            Err(error.into())
        }
    }
}
