//! The form controller: wires events to policy, surface, and client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::SpeechBackend;
use crate::error::VoxformError;
use crate::policy::{insert_pause, FormPolicy, StyleSelection};
use crate::types::GenerationRequest;
use crate::ui::{FormEvent, FormSurface};

/// Fallback shown when a failure carries no server-supplied message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong!";

/// Drives a [`FormSurface`] according to the form policy, issuing at most one
/// generation request at a time.
///
/// The surface is injected at construction; the controller performs no global
/// lookup of any kind. Hosts forward their native events through
/// [`handle`](Self::handle).
pub struct FormController<S: FormSurface> {
    surface: Arc<S>,
    policy: FormPolicy,
    backend: Arc<dyn SpeechBackend>,
    in_flight: AtomicBool,
}

impl<S: FormSurface> FormController<S> {
    pub fn new(surface: Arc<S>, policy: FormPolicy, backend: Arc<dyn SpeechBackend>) -> Self {
        Self {
            surface,
            policy,
            backend,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn policy(&self) -> &FormPolicy {
        &self.policy
    }

    /// Whether a generation request is currently awaiting its response.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Dispatch one host event.
    pub async fn handle(&self, event: FormEvent) {
        match event {
            FormEvent::TextChanged => self.text_changed(),
            FormEvent::PauseClicked => self.pause_clicked(),
            FormEvent::PitchChanged | FormEvent::SpeedChanged => self.refresh_slider_labels(),
            FormEvent::StyleChanged => self.style_changed(),
            FormEvent::GenerateClicked => self.generate().await,
        }
    }

    /// Recompute the character counter from the current text.
    pub fn text_changed(&self) {
        let len = self.surface.text().chars().count();
        self.surface
            .set_counter(&self.policy.counter_label(len), self.policy.counter_state(len));
    }

    /// Splice the pause marker at the caret and put the caret after it.
    pub fn pause_clicked(&self) {
        let spliced = insert_pause(&self.surface.text(), self.surface.caret());
        self.surface.set_text(&spliced.text);
        self.surface.focus_text();
        self.surface.set_caret(spliced.caret);
    }

    /// Mirror both slider values verbatim into their labels.
    pub fn refresh_slider_labels(&self) {
        self.surface
            .set_pitch_label(&self.surface.pitch().to_string());
        self.surface
            .set_speed_label(&self.surface.speed().to_string());
    }

    /// Apply the style preset for the current selection. Absolute values:
    /// prior manual slider adjustments are discarded.
    pub fn style_changed(&self) {
        let selection = StyleSelection::parse(&self.surface.language());
        let preset = self.policy.preset_for(&selection);

        self.surface.set_gender_enabled(!preset.gender_locked);
        self.surface.set_style_note_visible(preset.gender_locked);
        self.surface.set_pitch(preset.pitch);
        self.surface.set_speed(preset.speed);
        self.refresh_slider_labels();
    }

    /// Validate, enter the busy state, and issue exactly one request.
    pub async fn generate(&self) {
        let text = self.surface.text();
        if let Err(error) = self.policy.validate(&text) {
            if let VoxformError::InvalidArgument(message) = error {
                self.surface.notify(&message);
            }
            return;
        }

        // Explicit single-flight token. A lost race is a silent no-op; the
        // disabled submit control makes this unreachable for well-behaved
        // hosts.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Submission ignored, request already in flight");
            return;
        }

        let _guard = BusyGuard::enter(&*self.surface, &self.in_flight);

        let request = GenerationRequest {
            text,
            language: self.surface.language(),
            gender: self.surface.gender(),
            pitch: self.surface.pitch(),
            speed: self.surface.speed(),
        };

        match self.backend.generate(&request).await {
            Ok(audio) => {
                self.surface.set_audio_source(&audio.file_url);
                self.surface.set_download_target(&audio.file_url, &audio.filename);
                self.surface.set_result_visible(true);
                self.surface.play_audio();
            }
            Err(VoxformError::Backend {
                message: Some(message),
            }) => self.surface.notify(&message),
            Err(_) => self.surface.notify(GENERIC_FAILURE_MESSAGE),
        }
    }
}

/// Busy-state scope: shows the loading indicator, hides any previous result,
/// and disables the submit control on entry; undoes all of it and clears the
/// in-flight token on drop, so cleanup runs on every exit path.
struct BusyGuard<'a> {
    surface: &'a dyn FormSurface,
    in_flight: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn enter(surface: &'a dyn FormSurface, in_flight: &'a AtomicBool) -> Self {
        surface.set_loading_visible(true);
        surface.set_result_visible(false);
        surface.set_submit_enabled(false);
        Self { surface, in_flight }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.surface.set_loading_visible(false);
        self.surface.set_submit_enabled(true);
        self.in_flight.store(false, Ordering::Release);
    }
}
