use serde::{Deserialize, Serialize};

use crate::easing::ease_out_quint;
use crate::layout::Rect;
use crate::limbo::CharLimbo;

/// Baseline geometry handed to effect overrides: the character's rect in the
/// relevant frame (old rects for disappear, new rects for appear) and the
/// configured font size.
#[derive(Debug, Clone, Copy)]
pub struct EffectContext {
    pub rect: Rect,
    pub font_size: f32,
}

/// Per-effect override set. Every method has a "not overridden" default, and
/// a miss always means "use the engine's built-in computation" rather than an
/// error. At most one effect is active per label.
pub trait MorphEffect {
    /// Return `true` to claim the transition start; the engine then skips
    /// its `Started` event.
    fn on_start(&self) -> bool {
        false
    }

    /// Full replacement for the default grow-in limbo of a new character.
    fn appear(
        &self,
        _ch: char,
        _index: usize,
        _progress: f32,
        _ctx: &EffectContext,
    ) -> Option<CharLimbo> {
        None
    }

    /// Full replacement for the default shrink-out limbo of a removed
    /// character.
    fn disappear(
        &self,
        _ch: char,
        _index: usize,
        _progress: f32,
        _ctx: &EffectContext,
    ) -> Option<CharLimbo> {
        None
    }

    /// Return `true` to take over drawing of this record; the engine then
    /// skips the renderer call for it.
    fn intercept_draw(&self, _limbo: &CharLimbo) -> bool {
        false
    }

    /// Per-character progress override, replacing the engine's staggered
    /// clamp of the session progress.
    fn progress(&self, _index: usize, _session_progress: f32, _is_new_char: bool) -> Option<f32> {
        None
    }

    /// Render throttle: `Some(k)` suppresses redraw requests until `k + 1`
    /// ticks accumulate. The progress clock is unaffected.
    fn skip_frames(&self) -> Option<u32> {
        None
    }
}

/// Selectable effect identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    #[default]
    Scale,
    Evaporate,
}

impl EffectKind {
    pub fn overrides(self) -> Box<dyn MorphEffect> {
        match self {
            Self::Scale => Box::new(Scale),
            Self::Evaporate => Box::new(Evaporate),
        }
    }
}

/// The stock effect. The engine's built-in shrink/grow computation *is* the
/// scale behavior, so this overrides nothing.
pub struct Scale;

impl MorphEffect for Scale {}

/// Removed characters sink and thin out at full size; new ones condense from
/// below. Progress is staggered in short waves instead of strictly left to
/// right.
pub struct Evaporate;

impl Evaporate {
    const DRIFT_FACTOR: f32 = 1.5;
    const WAVE: f32 = 0.01;
}

impl MorphEffect for Evaporate {
    fn progress(&self, index: usize, session_progress: f32, is_new_char: bool) -> Option<f32> {
        let wave = (index % 3) as f32 * Self::WAVE;
        let p = if is_new_char {
            session_progress - wave
        } else {
            session_progress + wave
        };

        Some(p.clamp(0.0, 1.0))
    }

    fn disappear(
        &self,
        ch: char,
        _index: usize,
        progress: f32,
        ctx: &EffectContext,
    ) -> Option<CharLimbo> {
        let drift = ease_out_quint(progress, 0.0, ctx.font_size * Self::DRIFT_FACTOR);

        Some(CharLimbo {
            ch,
            rect: ctx.rect.offset(0.0, drift),
            alpha: 1.0 - progress,
            size: ctx.font_size,
            drawing_progress: 0.0,
        })
    }

    fn appear(
        &self,
        ch: char,
        _index: usize,
        progress: f32,
        ctx: &EffectContext,
    ) -> Option<CharLimbo> {
        let total = ctx.font_size * Self::DRIFT_FACTOR;
        let drift = ease_out_quint(progress, total, -total);

        Some(CharLimbo {
            ch,
            rect: ctx.rect.offset(0.0, drift),
            alpha: progress,
            size: ctx.font_size,
            drawing_progress: 0.0,
        })
    }
}
