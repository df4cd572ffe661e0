//! Convenience re-exports for common use.

pub use crate::client::{GenerateClient, SpeechBackend};
pub use crate::controller::{FormController, GENERIC_FAILURE_MESSAGE};
pub use crate::error::{Result, VoxformError};
pub use crate::policy::{CounterState, FormPolicy, StylePreset, StyleSelection, PAUSE_MARKER};
pub use crate::types::{GeneratedAudio, GenerationRequest, VoiceInfo};
pub use crate::ui::{FormEvent, FormSurface};
