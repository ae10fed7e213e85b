//! Horizontal bar chart of the top abundance records.

use crate::abundance::AbundanceRecord;
use crate::plot::scene::{Anchor, Color, Scene};
use itertools::Itertools;

pub const TITLE: &str = "Top 10 Viral Species Abundance in Human Gut Virome";
pub const X_LABEL: &str = "Sequence Abundance";

/// Bar fill, 80% alpha.
const BAR_COLOR: Color = Color::rgb(0x2e, 0x86, 0xab).with_alpha(0xcc);

const WIDTH: f32 = 1000.0;
const HEIGHT: f32 = 800.0;

// Plot area margins: species names on the left, title on top, axis label below.
const MARGIN_LEFT: f32 = 260.0;
const MARGIN_RIGHT: f32 = 90.0;
const MARGIN_TOP: f32 = 70.0;
const MARGIN_BOTTOM: f32 = 90.0;

/// One laid-out bar: pixel rectangle plus the labels it carries.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub name: String,
    pub value: u64,
}

/// Laid-out bar chart. Bars appear in record order, first record at the top;
/// the input arrives pre-sorted by descending abundance, so the highest bar
/// is visually first.
#[derive(Clone, Debug, Default)]
pub struct BarChart {
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn new(records: &[AbundanceRecord]) -> Self {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

        // value scale: full plot width at the largest abundance
        let max = records.iter().map(|r| r.abundance).max().unwrap_or_default().max(1);

        let row_h = plot_h / records.len().max(1) as f32;
        let bars = records
            .iter()
            .enumerate()
            .map(|(i, record)| Bar {
                x: MARGIN_LEFT,
                y: MARGIN_TOP + i as f32 * row_h + row_h * 0.1,
                w: (record.abundance as f64 / max as f64) as f32 * plot_w,
                h: row_h * 0.8,
                name: record.virus_name.clone(),
                value: record.abundance,
            })
            .collect_vec();

        BarChart { bars }
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(WIDTH, HEIGHT);
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_bottom = HEIGHT - MARGIN_BOTTOM;

        scene.text(TITLE, WIDTH / 2.0, 45.0, 22.0, Color::BLACK, Anchor::Middle, true);

        for bar in &self.bars {
            scene.rect(bar.x, bar.y, bar.w, bar.h, BAR_COLOR);
            let center = bar.y + bar.h / 2.0;
            // species name on the y axis
            scene.text(bar.name.as_str(), bar.x - 10.0, center + 5.0, 14.0, Color::BLACK, Anchor::End, false);
            // numeric value just past the end of the bar
            scene.text(
                bar.value.to_string(),
                bar.x + bar.w + plot_w * 0.01,
                center + 5.0,
                13.0,
                Color::BLACK,
                Anchor::Start,
                false,
            );
        }

        // left and bottom spines
        scene.line((MARGIN_LEFT, MARGIN_TOP), (MARGIN_LEFT, plot_bottom), 1.5, Color::BLACK);
        scene.line((MARGIN_LEFT, plot_bottom), (WIDTH - MARGIN_RIGHT, plot_bottom), 1.5, Color::BLACK);

        scene.text(
            X_LABEL,
            MARGIN_LEFT + plot_w / 2.0,
            HEIGHT - 35.0,
            16.0,
            Color::BLACK,
            Anchor::Middle,
            false,
        );

        scene
    }
}
