use super::{Color, PaintError, BLACK};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BRUSH_SIZE: u32 = 5;
/// Largest accepted brush size. Anything this big already covers the canvas.
pub const MAX_BRUSH_SIZE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushShape {
    #[default]
    Circle,
    Square,
    Line,
}

impl BrushShape {
    pub const ALL: [BrushShape; 3] = [BrushShape::Circle, BrushShape::Square, BrushShape::Line];

    pub fn name(self) -> &'static str {
        match self {
            BrushShape::Circle => "circle",
            BrushShape::Square => "square",
            BrushShape::Line => "line",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrushShape::Circle => "Circle",
            BrushShape::Square => "Square",
            BrushShape::Line => "Line",
        }
    }
}

impl fmt::Display for BrushShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrushShape {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrushShape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaintError::UnknownBrush(s.to_string()))
    }
}

/// Current shape, size and color used by every stamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    pub shape: BrushShape,
    /// Radius for circles, half-width for squares, stroke width for lines
    size: u32,
    pub color: Color,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            shape: BrushShape::default(),
            size: DEFAULT_BRUSH_SIZE,
            color: BLACK,
        }
    }
}

impl BrushState {
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Sets the size, clamped to `1..=MAX_BRUSH_SIZE`
    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(1, MAX_BRUSH_SIZE);
    }
}
