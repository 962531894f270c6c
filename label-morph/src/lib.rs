//! Per-character morphing transitions for label text.
//!
//! When a label's text changes, [`diff::align`] maps every old character to
//! its fate in the new string (unchanged, moved, added, deleted, replaced),
//! and [`engine::MorphLabel`] turns that alignment plus clock ticks into a
//! per-frame draw list of [`limbo::CharLimbo`] records — position, opacity,
//! and font size for each character in flight.
//!
//! Rendering, text measurement, and the driving clock are host collaborators
//! behind the [`limbo::Renderer`], [`layout::TextMeasurer`], and
//! [`engine::Clock`] traits; the crate itself never draws or sleeps.

pub mod diff;
pub mod easing;
pub mod effect;
pub mod engine;
pub mod layout;
pub mod limbo;

pub use diff::{align, DiffKind, DiffRecord};
pub use effect::{EffectContext, EffectKind, MorphEffect};
pub use engine::{Clock, MorphConfig, MorphEvent, MorphLabel};
pub use layout::{char_rects, Rect, TextAlignment, TextMeasurer};
pub use limbo::{CharLimbo, Renderer};
