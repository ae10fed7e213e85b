//! Pie chart of abundance share per virus type.

use crate::abundance::{TypeTotals, VirusType};
use crate::plot::scene::{Anchor, Color, Scene};
use itertools::Itertools;

pub const TITLE: &str = "Viral Type Proportion in Human Gut Virome";

/// Wedge palette, assigned in wedge order.
const PALETTE: [Color; 2] = [Color::rgb(0xff, 0x99, 0x99), Color::rgb(0x66, 0xb2, 0xff)];

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 800.0;
const CENTER: (f32, f32) = (400.0, 430.0);
const RADIUS: f32 = 260.0;

/// Fraction of the radius by which the first wedge is pulled out.
const EXPLODE: f32 = 0.05;

/// One pie wedge. Angles are degrees from east, counterclockwise;
/// `offset` is the explode displacement of the wedge center.
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    pub virus_type: VirusType,
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub percentage: f64,
    pub offset: (f32, f32),
    pub color: Color,
}

/// Laid-out pie chart: one wedge per virus type present in the input,
/// starting at 12 o'clock and proceeding counterclockwise.
#[derive(Clone, Debug, Default)]
pub struct PieChart {
    pub wedges: Vec<Wedge>,
}

impl PieChart {
    pub fn new(totals: &TypeTotals) -> Self {
        let mut start = 90.0_f32;
        let wedges = totals
            .summary()
            .into_iter()
            .enumerate()
            .map(|(i, (virus_type, _total, percentage))| {
                let sweep = (percentage / 100.0 * 360.0) as f32;
                let mid = (start + sweep / 2.0).to_radians();
                let wedge = Wedge {
                    virus_type,
                    start_deg: start,
                    sweep_deg: sweep,
                    percentage,
                    // only the first wedge is exploded
                    offset: match i {
                        0 => (EXPLODE * RADIUS * mid.cos(), -(EXPLODE * RADIUS * mid.sin())),
                        _ => (0.0, 0.0),
                    },
                    color: PALETTE[i % PALETTE.len()],
                };
                start += sweep;
                wedge
            })
            .collect_vec();

        PieChart { wedges }
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(WIDTH, HEIGHT);
        let (cx, cy) = CENTER;

        scene.text(TITLE, WIDTH / 2.0, 45.0, 22.0, Color::BLACK, Anchor::Middle, true);

        for wedge in &self.wedges {
            let (dx, dy) = wedge.offset;
            scene.polygon(wedge_points(cx + dx, cy + dy, RADIUS, wedge.start_deg, wedge.sweep_deg), wedge.color);

            let mid = (wedge.start_deg + wedge.sweep_deg / 2.0).to_radians();
            // percentage inside the wedge, type name outside
            scene.text(
                format!("{:.1}%", wedge.percentage),
                cx + dx + 0.6 * RADIUS * mid.cos(),
                cy + dy - 0.6 * RADIUS * mid.sin() + 6.0,
                17.0,
                Color::WHITE,
                Anchor::Middle,
                true,
            );
            scene.text(
                wedge.virus_type.to_string(),
                cx + dx + 1.15 * RADIUS * mid.cos(),
                cy + dy - 1.15 * RADIUS * mid.sin() + 6.0,
                17.0,
                Color::BLACK,
                Anchor::Middle,
                false,
            );
        }

        scene
    }
}

/// Flatten a wedge into a closed polygon: the center plus arc points in
/// one-degree steps. Screen y grows downwards, so counterclockwise angles
/// map through `-sin`.
fn wedge_points(cx: f32, cy: f32, r: f32, start_deg: f32, sweep_deg: f32) -> Vec<(f32, f32)> {
    let steps = (sweep_deg.ceil() as usize).max(2);
    let mut points = vec![(cx, cy)];
    points.extend((0..=steps).map(|i| {
        let deg = start_deg + sweep_deg * i as f32 / steps as f32;
        let rad = deg.to_radians();
        (cx + r * rad.cos(), cy - r * rad.sin())
    }));
    points
}
