//! Chart layout and rendering.
//!
//! Layout is pure: [`BarChart`] and [`PieChart`] turn records into a
//! backend-neutral [`Scene`](scene::Scene), which is then rendered twice, as
//! vector pdf and raster png.

pub mod bar;
pub mod pie;
pub mod raster;
pub mod scene;
pub mod vector;

#[cfg(test)]
mod tests;

#[doc(inline)]
pub use bar::BarChart;
#[doc(inline)]
pub use pie::PieChart;

use color_eyre::eyre::{Report, Result};
use log::debug;
use scene::Scene;
use std::path::{Path, PathBuf};

/// Render one scene as pdf + png siblings: `<output_dir>/<basename>.{pdf,png}`.
///
/// Returns the paths written, pdf first.
pub fn render_chart(
    scene: &Scene,
    title: &str,
    output_dir: &Path,
    basename: &str,
) -> Result<Vec<PathBuf>, Report> {
    let pdf = output_dir.join(format!("{basename}.pdf"));
    vector::render(scene, title, &pdf)?;
    debug!("Wrote chart: {pdf:?}");

    let png = output_dir.join(format!("{basename}.png"));
    raster::render(scene, &png)?;
    debug!("Wrote chart: {png:?}");

    Ok(vec![pdf, png])
}
