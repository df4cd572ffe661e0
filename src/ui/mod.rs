//! Abstract UI surface the controller drives.
//!
//! The controller never looks elements up in any global document. Whatever
//! toolkit hosts the form (DOM via wasm, a webview bridge, a TUI) implements
//! [`FormSurface`] and forwards its native events as [`FormEvent`]s.

use crate::policy::CounterState;

/// Capability set of the form's UI elements: get/set value, enable/disable,
/// show/hide, focus, notify. All methods take `&self`; implementations own
/// whatever interior mutability their toolkit needs.
pub trait FormSurface: Send + Sync {
    // Text field.
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// Caret position in chars.
    fn caret(&self) -> usize;
    fn set_caret(&self, caret: usize);
    fn focus_text(&self);

    // Character counter badge.
    fn set_counter(&self, label: &str, state: CounterState);

    // Sliders and their mirror labels.
    fn pitch(&self) -> i32;
    fn speed(&self) -> i32;
    fn set_pitch(&self, value: i32);
    fn set_speed(&self, value: i32);
    fn set_pitch_label(&self, label: &str);
    fn set_speed_label(&self, label: &str);

    // Language/style and gender selects.
    fn language(&self) -> String;
    fn gender(&self) -> String;
    fn set_gender_enabled(&self, enabled: bool);
    fn set_style_note_visible(&self, visible: bool);

    // Busy state.
    fn set_loading_visible(&self, visible: bool);
    fn set_submit_enabled(&self, enabled: bool);

    // Result area.
    fn set_result_visible(&self, visible: bool);
    fn set_audio_source(&self, url: &str);
    fn set_download_target(&self, url: &str, filename: &str);
    fn play_audio(&self);

    /// Blocking user notification (the demo's `alert`).
    fn notify(&self, message: &str);
}

/// Events a host toolkit forwards to the controller. This is the
/// {onInput, onClick, onChange} subscription set as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Text input changed (onInput).
    TextChanged,
    /// Insert-pause button activated (onClick).
    PauseClicked,
    /// Pitch slider moved (onInput).
    PitchChanged,
    /// Speed slider moved (onInput).
    SpeedChanged,
    /// Language/style selection changed (onChange).
    StyleChanged,
    /// Submit control activated (onClick).
    GenerateClicked,
}
