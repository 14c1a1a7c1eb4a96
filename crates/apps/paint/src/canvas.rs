//! Freehand drawing model: strokes recorded as line segments.

use platform_host::ColorPickerService;
use thiserror::Error;

/// Pen width in canvas pixels.
pub const PEN_WIDTH: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintError {
    #[error("color picker failed: {0}")]
    Picker(String),
    #[error("`{0}` is not a #rrggbb color")]
    InvalidColor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaintColor {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Parses `#rrggbb` (the `#` is optional).
    pub fn parse_hex(raw: &str) -> Result<Self, PaintError> {
        let invalid = || PaintError::InvalidColor(raw.to_string());
        let digits = raw.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: PaintColor,
    pub width: f64,
}

/// Drawing surface state. A stroke starts on pointer-down, adds one segment per pointer move,
/// and ends on pointer-up.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaintCanvas {
    segments: Vec<Segment>,
    pen: Option<Point>,
    color: PaintColor,
}

impl PaintCanvas {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn color(&self) -> PaintColor {
        self.color
    }

    pub fn set_color(&mut self, color: PaintColor) {
        self.color = color;
    }

    pub fn is_drawing(&self) -> bool {
        self.pen.is_some()
    }

    pub fn begin_stroke(&mut self, at: Point) {
        self.pen = Some(at);
    }

    /// Extends the active stroke to `to`; ignored when no stroke is active.
    pub fn extend_stroke(&mut self, to: Point) -> Option<Segment> {
        let from = self.pen.replace(to)?;
        let segment = Segment {
            from,
            to,
            color: self.color,
            width: PEN_WIDTH,
        };
        self.segments.push(segment);
        Some(segment)
    }

    pub fn end_stroke(&mut self) {
        self.pen = None;
    }

    /// Removes every segment. The pen color is kept.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.pen = None;
    }
}

/// Asks the picker for a new pen color.
///
/// Returns `Ok(None)` when the picker is cancelled, leaving the current color in place.
///
/// # Errors
///
/// Returns [`PaintError`] when the picker fails or answers with something that is not a color.
pub async fn choose_color(
    picker: &dyn ColorPickerService,
    current: PaintColor,
) -> Result<Option<PaintColor>, PaintError> {
    let picked = picker
        .pick_color(&current.to_hex())
        .await
        .map_err(PaintError::Picker)?;
    picked.as_deref().map(PaintColor::parse_hex).transpose()
}
