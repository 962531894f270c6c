use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in the host's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Paragraph alignment applied as a single horizontal shift of the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Font metrics collaborator. Implemented by the host, never by this crate.
pub trait TextMeasurer {
    /// Width and height of a single character at the given font size.
    fn measure(&self, ch: char, font_size: f32) -> (f32, f32);

    /// Height of one line at the given font size, for vertical centering.
    fn line_height(&self, font_size: f32) -> f32;
}

/// Per-character baseline rects: left-to-right advance by measured width,
/// line height centered vertically within `bounds`, then one alignment shift
/// applied to every rect.
///
/// Pure. Callers recompute and replace the whole array whenever text, font,
/// bounds, or alignment change; rects are never patched in place.
pub fn char_rects(
    text: &str,
    measurer: &impl TextMeasurer,
    font_size: f32,
    bounds: Rect,
    alignment: TextAlignment,
) -> Vec<Rect> {
    let line_height = measurer.line_height(font_size);
    let top_offset = (bounds.height - line_height) / 2.0;

    let mut rects = Vec::new();
    let mut advance = 0.0f32;

    for ch in text.chars() {
        let (width, height) = measurer.measure(ch, font_size);
        rects.push(Rect::new(advance, top_offset, width, height));
        advance += width;
    }

    let shift = match alignment {
        TextAlignment::Left => 0.0,
        TextAlignment::Center => (bounds.width - advance) / 2.0,
        TextAlignment::Right => bounds.width - advance,
    };

    rects
        .into_iter()
        .map(|r| r.offset(bounds.x + shift, bounds.y))
        .collect()
}
