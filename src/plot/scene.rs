//! Backend-neutral draw list shared by the raster and vector backends.
//!
//! Coordinates are pixels with the origin at the top-left, y growing
//! downwards. Text `y` is the baseline. Wedge arcs are flattened into polygon
//! points at layout time, so backends only know how to fill polygons, stroke
//! lines, and place text.

// ----------------------------------------------------------------------------
// Color
// ----------------------------------------------------------------------------

/// RGBA fill/stroke color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xff }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }
}

// ----------------------------------------------------------------------------
// Primitives
// ----------------------------------------------------------------------------

/// Horizontal anchor of a text run relative to its `x` coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Filled polygon. Points form a closed ring.
    Polygon {
        points: Vec<(f32, f32)>,
        color: Color,
    },
    /// Stroked line segment.
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    },
    /// A single text run. `y` is the baseline.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        anchor: Anchor,
        bold: bool,
    },
}

// ----------------------------------------------------------------------------
// Scene
// ----------------------------------------------------------------------------

/// A complete chart, ready for rendering by any backend.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Scene { width, height, primitives: Vec::new() }
    }

    pub fn polygon(&mut self, points: Vec<(f32, f32)>, color: Color) {
        self.primitives.push(Primitive::Polygon { points, color });
    }

    /// Axis-aligned filled rectangle, as a 4-point polygon.
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.polygon(vec![(x, y), (x + w, y), (x + w, y + h), (x, y + h)], color);
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        self.primitives.push(Primitive::Line { from, to, width, color });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        anchor: Anchor,
        bold: bool,
    ) {
        self.primitives.push(Primitive::Text { text: text.into(), x, y, size, color, anchor, bold });
    }

    /// Count of filled polygons, used by layout tests to count bars/wedges.
    pub fn num_polygons(&self) -> usize {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Polygon { .. })).count()
    }
}
