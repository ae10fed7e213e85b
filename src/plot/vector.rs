//! PDF rendering backend, built on printpdf.
//!
//! The scene's y-down pixel space maps onto a PDF page at 100 px/inch, with
//! the y axis flipped to the PDF's bottom-left origin. Text uses the builtin
//! Helvetica faces, so the vector output never depends on system fonts.

use crate::plot::scene::{Anchor, Color, Primitive, Scene};
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Point, Polygon, Rgb,
};
use std::fmt::Debug;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Scene pixels per inch; fixes both the mm page size and the pt font size.
const PX_PER_INCH: f32 = 100.0;
const MM_PER_PX: f32 = 25.4 / PX_PER_INCH;
const PT_PER_PX: f32 = 72.0 / PX_PER_INCH;

/// Render a scene to a single-page pdf file.
pub fn render<P>(scene: &Scene, title: &str, path: &P) -> Result<(), Report>
where
    P: AsRef<Path> + Debug,
{
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(scene.width * MM_PER_PX), Mm(scene.height * MM_PER_PX), "chart");
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| eyre!("Failed to load builtin font: {e}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| eyre!("Failed to load builtin font: {e}"))?;

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Polygon { points, color } => {
                layer.set_fill_color(pdf_color(*color));
                layer.add_polygon(Polygon {
                    rings: vec![points.iter().map(|&p| (pdf_point(scene, p), false)).collect()],
                    mode: PaintMode::Fill,
                    winding_order: WindingOrder::NonZero,
                });
            }
            Primitive::Line { from, to, width, color } => {
                layer.set_outline_color(pdf_color(*color));
                layer.set_outline_thickness(width * PT_PER_PX);
                layer.add_line(printpdf::Line {
                    points: vec![(pdf_point(scene, *from), false), (pdf_point(scene, *to), false)],
                    is_closed: false,
                });
            }
            Primitive::Text { text, x, y, size, color, anchor, bold: is_bold } => {
                let font = match is_bold {
                    true => &bold,
                    false => &regular,
                };
                draw_text(&layer, scene, font, text, (*x, *y), *size, *color, *anchor);
            }
        }
    }

    let file = File::create(path.as_ref())
        .wrap_err_with(|| eyre!("Failed to create file: {path:?}"))?;
    doc.save(&mut BufWriter::new(file)).map_err(|e| eyre!("Failed to write pdf {path:?}: {e}"))?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    layer: &PdfLayerReference,
    scene: &Scene,
    font: &IndirectFontRef,
    text: &str,
    (x, y): (f32, f32),
    size: f32,
    color: Color,
    anchor: Anchor,
) {
    // Helvetica averages about half an em per glyph for mixed text; close
    // enough to anchor chart labels without embedding font metrics.
    let width = text.chars().count() as f32 * size * 0.5;
    let x = match anchor {
        Anchor::Start => x,
        Anchor::Middle => x - width / 2.0,
        Anchor::End => x - width,
    };
    layer.set_fill_color(pdf_color(color));
    layer.use_text(
        text,
        size * PT_PER_PX,
        Mm(x * MM_PER_PX),
        Mm((scene.height - y) * MM_PER_PX),
        font,
    );
}

/// Scene point (y-down px) to page point (y-up mm).
fn pdf_point(scene: &Scene, (x, y): (f32, f32)) -> Point {
    Point::new(Mm(x * MM_PER_PX), Mm((scene.height - y) * MM_PER_PX))
}

/// Alpha is approximated by blending toward the white page, since the pdf
/// path operators here carry no transparency state.
fn pdf_color(color: Color) -> printpdf::Color {
    let a = color.a as f32 / 255.0;
    let channel = |c: u8| (c as f32 / 255.0) * a + (1.0 - a);
    printpdf::Color::Rgb(Rgb::new(channel(color.r), channel(color.g), channel(color.b), None))
}
