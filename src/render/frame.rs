use crate::core::DrawingSurface;
use crate::error::PlaneResult;
use crate::render::{LineSegment, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one graph draw pass.
///
/// Renderers paint `rects`, then `lines` in order, then `texts`; later
/// entries land on top.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: DrawingSurface,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LineSegment>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: DrawingSurface) -> Self {
        Self {
            surface,
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_lines(mut self, lines: impl IntoIterator<Item = LineSegment>) -> Self {
        self.lines.extend(lines);
        self
    }

    #[must_use]
    pub fn with_texts(mut self, texts: impl IntoIterator<Item = TextPrimitive>) -> Self {
        self.texts.extend(texts);
        self
    }

    pub fn validate(&self) -> PlaneResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
