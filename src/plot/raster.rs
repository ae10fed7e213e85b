//! PNG rendering backend, built on a raqote draw target.
//!
//! Text is rasterized glyph-by-glyph with rusttype, using the first TrueType
//! font found among well-known system locations (DejaVu Sans first, matching
//! the font the upstream pipeline renders with). Without any font, geometry
//! still renders and a single warning is logged.

use crate::plot::scene::{Anchor, Color, Primitive, Scene};
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use itertools::Itertools;
use log::warn;
use raqote::{DrawOptions, DrawTarget, PathBuilder, SolidSource, Source, StrokeStyle};
use rusttype::{point, Font, Scale};
use std::fmt::Debug;
use std::path::Path;
use std::sync::OnceLock;

/// Supersampling factor over scene pixels, the quality analog of a
/// high-dpi raster export.
const SCALE: f32 = 2.0;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// Render a scene to a png file.
pub fn render<P>(scene: &Scene, path: &P) -> Result<(), Report>
where
    P: AsRef<Path> + Debug,
{
    let mut dt =
        DrawTarget::new((scene.width * SCALE) as i32, (scene.height * SCALE) as i32);
    dt.clear(SolidSource::from_unpremultiplied_argb(0xff, 0xff, 0xff, 0xff));

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Polygon { points, color } => fill_polygon(&mut dt, points, *color),
            Primitive::Line { from, to, width, color } => {
                let mut pb = PathBuilder::new();
                pb.move_to(from.0 * SCALE, from.1 * SCALE);
                pb.line_to(to.0 * SCALE, to.1 * SCALE);
                dt.stroke(
                    &pb.finish(),
                    &solid(*color),
                    &StrokeStyle { width: width * SCALE, ..StrokeStyle::default() },
                    &DrawOptions::new(),
                );
            }
            Primitive::Text { text, x, y, size, color, anchor, bold: _ } => {
                draw_text(&mut dt, text, x * SCALE, y * SCALE, size * SCALE, *color, *anchor);
            }
        }
    }

    dt.write_png(path.as_ref()).wrap_err_with(|| eyre!("Failed to write png: {path:?}"))?;
    Ok(())
}

fn solid(color: Color) -> Source<'static> {
    Source::Solid(SolidSource::from_unpremultiplied_argb(color.a, color.r, color.g, color.b))
}

fn fill_polygon(dt: &mut DrawTarget, points: &[(f32, f32)], color: Color) {
    let Some(((x0, y0), rest)) = points.split_first() else {
        return;
    };
    let mut pb = PathBuilder::new();
    pb.move_to(x0 * SCALE, y0 * SCALE);
    rest.iter().for_each(|(x, y)| pb.line_to(x * SCALE, y * SCALE));
    pb.close();
    dt.fill(&pb.finish(), &solid(color), &DrawOptions::new());
}

/// The shared label font, loaded once per process.
fn font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| {
        for candidate in FONT_CANDIDATES {
            if let Ok(bytes) = std::fs::read(candidate) {
                if let Some(font) = Font::try_from_vec(bytes) {
                    return Some(font);
                }
            }
        }
        warn!("No TrueType font found; text labels will be skipped in png outputs.");
        None
    })
    .as_ref()
}

fn text_width(font: &Font, text: &str, scale: Scale) -> f32 {
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or_default()
}

fn draw_text(dt: &mut DrawTarget, text: &str, x: f32, y: f32, size: f32, color: Color, anchor: Anchor) {
    let Some(font) = font() else {
        return;
    };
    let scale = Scale::uniform(size);
    let x = match anchor {
        Anchor::Start => x,
        Anchor::Middle => x - text_width(font, text, scale) / 2.0,
        Anchor::End => x - text_width(font, text, scale),
    };

    let glyphs = font.layout(text, scale, point(x, y)).collect_vec();
    let (dt_w, dt_h) = (dt.width(), dt.height());
    let data = dt.get_data_mut();

    for glyph in glyphs {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = bb.min.x + gx as i32;
            let py = bb.min.y + gy as i32;
            if px < 0 || py < 0 || px >= dt_w || py >= dt_h || coverage <= 0.0 {
                return;
            }
            let i = (py * dt_w + px) as usize;
            data[i] = blend(data[i], color, coverage);
        });
    }
}

/// Source-over blend of a coverage-weighted color onto an opaque canvas
/// pixel (premultiplied ARGB, as raqote stores it).
fn blend(dst: u32, color: Color, coverage: f32) -> u32 {
    let a = coverage * color.a as f32 / 255.0;
    let channel = |d: u32, s: u8| -> u32 {
        let out = s as f32 * a + (d & 0xff) as f32 * (1.0 - a);
        (out.round() as u32).min(0xff)
    };
    (dst & 0xff00_0000)
        | (channel(dst >> 16, color.r) << 16)
        | (channel(dst >> 8, color.g) << 8)
        | channel(dst, color.b)
}
