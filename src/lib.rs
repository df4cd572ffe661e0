//! Voxform — form controller for a text-to-speech demo.
//!
//! The browser demo's form logic (character counter, pause insertion, style
//! presets, single-flight generation) reworked as a UI-toolkit-agnostic
//! library: the controller is handed an abstract [`ui::FormSurface`] and a
//! backend client instead of looking elements up in a global document.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use voxform::prelude::*;
//!
//! # async fn example(surface: Arc<impl FormSurface>) {
//! let controller = FormController::new(
//!     surface,
//!     FormPolicy::from_env(),
//!     Arc::new(GenerateClient::new("http://localhost:5000")),
//! );
//! controller.handle(FormEvent::GenerateClicked).await;
//! # }
//! ```

pub mod client;
pub mod controller;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod types;
pub mod ui;
pub mod util;
