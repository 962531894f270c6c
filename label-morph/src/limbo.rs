use crate::layout::Rect;

/// Ephemeral per-character, per-frame render instruction. Rebuilt from the
/// diff records, session progress, and baseline rects on every frame; carries
/// no identity across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharLimbo {
    pub ch: char,
    pub rect: Rect,
    /// Opacity in `[0.0, 1.0]`.
    pub alpha: f32,
    /// Current font size. Never zero; degenerate sizes are floored.
    pub size: f32,
    /// Scratch scalar for effects that drive their own drawing.
    pub drawing_progress: f32,
}

/// Drawing collaborator. Called once per limbo record, in draw-list order.
pub trait Renderer {
    fn draw(&mut self, limbo: &CharLimbo);
}
