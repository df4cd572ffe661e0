//! Shared test helpers: a recording mock surface.

use std::sync::Mutex;

use voxform::policy::CounterState;
use voxform::ui::FormSurface;

/// Mutable element state behind the mock surface.
#[derive(Debug)]
pub struct SurfaceState {
    pub text: String,
    pub caret: usize,
    pub focused: bool,
    pub counter_label: String,
    pub counter_state: CounterState,
    pub pitch: i32,
    pub speed: i32,
    pub pitch_label: String,
    pub speed_label: String,
    pub language: String,
    pub gender: String,
    pub gender_enabled: bool,
    pub style_note_visible: bool,
    pub loading_visible: bool,
    pub submit_enabled: bool,
    pub result_visible: bool,
    pub audio_source: Option<String>,
    pub download_url: Option<String>,
    pub download_filename: Option<String>,
    pub play_count: u32,
    pub notifications: Vec<String>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            text: String::new(),
            caret: 0,
            focused: false,
            counter_label: String::new(),
            counter_state: CounterState::Normal,
            pitch: 0,
            speed: 0,
            pitch_label: String::new(),
            speed_label: String::new(),
            language: "en-US".to_string(),
            gender: "female".to_string(),
            gender_enabled: true,
            style_note_visible: false,
            loading_visible: false,
            submit_enabled: true,
            result_visible: false,
            audio_source: None,
            download_url: None,
            download_filename: None,
            play_count: 0,
            notifications: Vec::new(),
        }
    }
}

/// A [`FormSurface`] backed by plain state, recording everything the
/// controller does to it.
#[derive(Debug, Default)]
pub struct MockSurface {
    state: Mutex<SurfaceState>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let surface = Self::new();
        surface.update(|state| state.text = text.to_string());
        surface
    }

    /// Mutate the element state directly, as a user interaction would.
    pub fn update(&self, mutate: impl FnOnce(&mut SurfaceState)) {
        mutate(&mut self.state.lock().unwrap());
    }

    /// Read a snapshot of one field.
    pub fn read<T>(&self, extract: impl FnOnce(&SurfaceState) -> T) -> T {
        extract(&self.state.lock().unwrap())
    }

    pub fn last_notification(&self) -> Option<String> {
        self.read(|state| state.notifications.last().cloned())
    }
}

impl FormSurface for MockSurface {
    fn text(&self) -> String {
        self.read(|state| state.text.clone())
    }

    fn set_text(&self, text: &str) {
        self.update(|state| state.text = text.to_string());
    }

    fn caret(&self) -> usize {
        self.read(|state| state.caret)
    }

    fn set_caret(&self, caret: usize) {
        self.update(|state| state.caret = caret);
    }

    fn focus_text(&self) {
        self.update(|state| state.focused = true);
    }

    fn set_counter(&self, label: &str, counter_state: CounterState) {
        self.update(|state| {
            state.counter_label = label.to_string();
            state.counter_state = counter_state;
        });
    }

    fn pitch(&self) -> i32 {
        self.read(|state| state.pitch)
    }

    fn speed(&self) -> i32 {
        self.read(|state| state.speed)
    }

    fn set_pitch(&self, value: i32) {
        self.update(|state| state.pitch = value);
    }

    fn set_speed(&self, value: i32) {
        self.update(|state| state.speed = value);
    }

    fn set_pitch_label(&self, label: &str) {
        self.update(|state| state.pitch_label = label.to_string());
    }

    fn set_speed_label(&self, label: &str) {
        self.update(|state| state.speed_label = label.to_string());
    }

    fn language(&self) -> String {
        self.read(|state| state.language.clone())
    }

    fn gender(&self) -> String {
        self.read(|state| state.gender.clone())
    }

    fn set_gender_enabled(&self, enabled: bool) {
        self.update(|state| state.gender_enabled = enabled);
    }

    fn set_style_note_visible(&self, visible: bool) {
        self.update(|state| state.style_note_visible = visible);
    }

    fn set_loading_visible(&self, visible: bool) {
        self.update(|state| state.loading_visible = visible);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.update(|state| state.submit_enabled = enabled);
    }

    fn set_result_visible(&self, visible: bool) {
        self.update(|state| state.result_visible = visible);
    }

    fn set_audio_source(&self, url: &str) {
        self.update(|state| state.audio_source = Some(url.to_string()));
    }

    fn set_download_target(&self, url: &str, filename: &str) {
        self.update(|state| {
            state.download_url = Some(url.to_string());
            state.download_filename = Some(filename.to_string());
        });
    }

    fn play_audio(&self) {
        self.update(|state| state.play_count += 1);
    }

    fn notify(&self, message: &str) {
        self.update(|state| state.notifications.push(message.to_string()));
    }
}
