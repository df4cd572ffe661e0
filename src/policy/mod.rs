//! Form policy: character limit, style presets, counter and pause helpers.
//!
//! The two original demo pages disagreed on the character limit (5000 vs
//! 10000) and drifted on preset details. Everything policy-shaped lives here
//! as one configurable object so callers pick a single consistent variant.

use std::str::FromStr;

use strum::{Display, EnumString};

use crate::error::{Result, VoxformError};

/// Literal marker the backend recognizes as a scripted pause.
pub const PAUSE_MARKER: &str = " [pause] ";

/// Default character limit when none is configured.
pub const DEFAULT_MAX_CHARS: usize = 5000;

/// Env var overriding the character limit.
const MAX_CHARS_ENV: &str = "VOXFORM_MAX_CHARS";

/// Special voice styles that carry a preset and lock the gender control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VoiceStyle {
    Story,
    Horror,
    Cartoon,
    News,
}

/// A parsed language/style selection value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSelection {
    /// One of the four special styles.
    Style(VoiceStyle),
    /// A plain language identifier, passed through verbatim.
    Language(String),
}

impl StyleSelection {
    /// Parse a raw select value. Unknown values are plain languages.
    pub fn parse(raw: &str) -> Self {
        match VoiceStyle::from_str(raw) {
            Ok(style) => Self::Style(style),
            Err(_) => Self::Language(raw.to_string()),
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self, Self::Style(_))
    }
}

/// Absolute slider values and gender-control state applied on selection.
///
/// The mapping is absolute, not incremental: any manual slider adjustment is
/// discarded on every style switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    pub pitch: i32,
    pub speed: i32,
    /// When true the gender control is disabled and the explanatory note shown.
    pub gender_locked: bool,
}

impl StylePreset {
    /// Neutral preset for plain languages.
    pub const NEUTRAL: Self = Self {
        pitch: 0,
        speed: 0,
        gender_locked: false,
    };
}

/// Counter badge state derived from the current text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    Normal,
    Danger,
}

/// Result of splicing a pause marker into the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseInsertion {
    pub text: String,
    /// Caret position (in chars) just after the inserted marker.
    pub caret: usize,
}

/// The single configurable policy for the whole form.
#[derive(Debug, Clone)]
pub struct FormPolicy {
    max_chars: usize,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl FormPolicy {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Load the policy from the environment (`VOXFORM_MAX_CHARS`), falling
    /// back to the default limit. Reads `.env` if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let max_chars = std::env::var(MAX_CHARS_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_MAX_CHARS);
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Label text for the character counter: `"{len} / {max}"`.
    pub fn counter_label(&self, len: usize) -> String {
        format!("{len} / {}", self.max_chars)
    }

    /// Danger iff the text is strictly over the limit.
    pub fn counter_state(&self, len: usize) -> CounterState {
        if len > self.max_chars {
            CounterState::Danger
        } else {
            CounterState::Normal
        }
    }

    /// Pre-submit validation: empty text and over-limit text are rejected
    /// before any request is issued.
    pub fn validate(&self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(VoxformError::InvalidArgument(
                "Please type something!".to_string(),
            ));
        }
        if text.chars().count() > self.max_chars {
            return Err(VoxformError::InvalidArgument(
                "Text is too long!".to_string(),
            ));
        }
        Ok(())
    }

    /// The preset applied when `selection` is chosen.
    pub fn preset_for(&self, selection: &StyleSelection) -> StylePreset {
        match selection {
            StyleSelection::Style(VoiceStyle::Horror) => StylePreset {
                pitch: -20,
                speed: -10,
                gender_locked: true,
            },
            StyleSelection::Style(VoiceStyle::Cartoon) => StylePreset {
                pitch: 25,
                speed: 0,
                gender_locked: true,
            },
            StyleSelection::Style(VoiceStyle::Story) => StylePreset {
                pitch: -5,
                speed: -5,
                gender_locked: true,
            },
            StyleSelection::Style(VoiceStyle::News) => StylePreset {
                pitch: 0,
                speed: 10,
                gender_locked: true,
            },
            StyleSelection::Language(_) => StylePreset::NEUTRAL,
        }
    }
}

/// Insert [`PAUSE_MARKER`] at `caret` (a char index, clamped into range),
/// leaving the surrounding text untouched.
pub fn insert_pause(text: &str, caret: usize) -> PauseInsertion {
    let caret = caret.min(text.chars().count());
    let byte_offset = text
        .char_indices()
        .nth(caret)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len());

    let mut spliced = String::with_capacity(text.len() + PAUSE_MARKER.len());
    spliced.push_str(&text[..byte_offset]);
    spliced.push_str(PAUSE_MARKER);
    spliced.push_str(&text[byte_offset..]);

    PauseInsertion {
        text: spliced,
        caret: caret + PAUSE_MARKER.chars().count(),
    }
}
