//! Chart rendering for benchmark samples.

use crate::bench::Sample;
use anyhow::{anyhow, bail, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (800, 600);

/// Renders size-vs-time samples as a 2D line chart into an explicit
/// rendering target, either an SVG file on disk or an in-memory SVG
/// document.
pub struct Reporter {
    caption: String,
}

impl Reporter {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
        }
    }

    /// Write the chart to `path` as an SVG file.
    pub fn to_svg_file(&self, samples: &[Sample], path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        self.draw(samples, &root)
    }

    /// Render the chart into an in-memory SVG document. Useful where no
    /// filesystem or display is available, e.g. in tests.
    pub fn to_svg_string(&self, samples: &[Sample]) -> Result<String> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, CHART_SIZE).into_drawing_area();
            self.draw(samples, &root)?;
        }
        Ok(buffer)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        samples: &[Sample],
        root: &DrawingArea<DB, Shift>,
    ) -> Result<()> {
        if samples.is_empty() {
            bail!("no samples to plot");
        }

        let err = |e: DrawingAreaErrorKind<DB::ErrorType>| anyhow!("chart rendering failed: {}", e);

        let max_size = samples.iter().map(|s| s.size).max().unwrap_or(0) as f64;
        let max_time = samples
            .iter()
            .map(|s| s.elapsed.as_secs_f64())
            .fold(0.0_f64, f64::max);
        // Sub-microsecond runs would otherwise produce a degenerate y range.
        let y_end = if max_time > 0.0 { max_time } else { 1e-6 };

        root.fill(&WHITE).map_err(err)?;

        let mut chart = ChartBuilder::on(root)
            .caption(&self.caption, ("sans-serif", 24))
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(72)
            .build_cartesian_2d(0.0..max_size * 1.05, 0.0..y_end * 1.05)
            .map_err(err)?;

        chart
            .configure_mesh()
            .x_desc("Message Size (bytes)")
            .y_desc("Time (seconds)")
            .draw()
            .map_err(err)?;

        chart
            .draw_series(LineSeries::new(
                samples
                    .iter()
                    .map(|s| (s.size as f64, s.elapsed.as_secs_f64())),
                &BLUE,
            ))
            .map_err(err)?;

        root.present().map_err(err)?;
        Ok(())
    }
}
