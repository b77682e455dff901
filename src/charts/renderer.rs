//! Static Chart Renderer
//! Draws report charts into PNG images with plotters, for export.
//!
//! Every chart is rendered into an RGB buffer first and encoded with `image`,
//! so the caller decides where the bytes go.

use crate::charts::ChartPlotter;
use crate::error::RenderError;
use crate::pipeline::{CategorySection, CorrelationSection, TrendSection};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;

const FONT: &str = "sans-serif";
const LINE: RGBColor = RGBColor(99, 110, 250);

fn draw_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Correlation heatmap with each cell annotated.
    pub fn render_heatmap(
        section: &CorrelationSection,
        (width, height): (u32, u32),
    ) -> Result<Vec<u8>, RenderError> {
        let matrix = &section.matrix;
        let n = matrix.size() as i32;
        let names = matrix.columns.clone();
        let names_y = matrix.columns.clone();

        Self::render_png(width, height, |root| {
            let mut chart = ChartBuilder::on(root)
                .caption(&section.heading, (FONT, 26))
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(120)
                .build_cartesian_2d(0..n, 0..n)
                .map_err(draw_err)?;

            chart
                .configure_mesh()
                .disable_mesh()
                .x_labels(n as usize + 1)
                .y_labels(n as usize + 1)
                .x_label_formatter(&|i| names.get(*i as usize).cloned().unwrap_or_default())
                .y_label_formatter(&|i| {
                    // rows run top to bottom
                    let row = n - 1 - *i;
                    names_y.get(row as usize).cloned().unwrap_or_default()
                })
                .draw()
                .map_err(draw_err)?;

            let mut cells = Vec::new();
            for i in 0..n {
                for j in 0..n {
                    cells.push((j, n - 1 - i, i as usize, j as usize));
                }
            }

            chart
                .draw_series(cells.iter().map(|&(x, y, i, j)| {
                    let fill = ChartPlotter::coolwarm(matrix.values[i][j]);
                    Rectangle::new(
                        [(x, y), (x + 1, y + 1)],
                        RGBColor(fill.r(), fill.g(), fill.b()).filled(),
                    )
                }))
                .map_err(draw_err)?;

            chart
                .draw_series(cells.iter().map(|&(x, y, i, j)| {
                    Text::new(
                        matrix.label(i, j, section.precision),
                        (x, y + 1),
                        (FONT, 20).into_font().color(&BLACK),
                    )
                }))
                .map_err(draw_err)?;
            Ok(())
        })
    }

    /// Year/count line chart.
    pub fn render_trend(
        section: &TrendSection,
        (width, height): (u32, u32),
    ) -> Result<Vec<u8>, RenderError> {
        let points = &section.trend.points;
        let first = points.first().map(|p| p.0).unwrap_or(0);
        let last = points.last().map(|p| p.0).unwrap_or(first);
        let top = points.iter().map(|p| p.1).max().unwrap_or(0) as u64;

        Self::render_png(width, height, |root| {
            let mut chart = ChartBuilder::on(root)
                .caption(&section.heading, (FONT, 26))
                .margin(20)
                .x_label_area_size(45)
                .y_label_area_size(60)
                .build_cartesian_2d(first..last + 1, 0u64..top + top / 10 + 1)
                .map_err(draw_err)?;

            chart
                .configure_mesh()
                .x_desc(section.x_label.as_str())
                .y_desc(section.y_label.as_str())
                .x_label_formatter(&|year| year.to_string())
                .draw()
                .map_err(draw_err)?;

            let series = points.iter().map(|&(year, count)| (year, count as u64));
            chart
                .draw_series(LineSeries::new(series.clone(), LINE.stroke_width(2)))
                .map_err(draw_err)?;
            chart
                .draw_series(series.map(|p| Circle::new(p, 4, LINE.filled())))
                .map_err(draw_err)?;
            Ok(())
        })
    }

    /// Top values as vertical bars, labelled by value.
    pub fn render_categories(
        section: &CategorySection,
        (width, height): (u32, u32),
    ) -> Result<Vec<u8>, RenderError> {
        let labels: Vec<String> = section.counts.iter().map(|c| c.value.clone()).collect();
        let n = labels.len().max(1) as u32;
        let top = section.counts.iter().map(|c| c.count).max().unwrap_or(0) as u64;

        Self::render_png(width, height, |root| {
            let mut chart = ChartBuilder::on(root)
                .caption(&section.heading, (FONT, 26))
                .margin(20)
                .x_label_area_size(80)
                .y_label_area_size(60)
                .build_cartesian_2d((0u32..n).into_segmented(), 0u64..top + top / 10 + 1)
                .map_err(draw_err)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_desc(section.x_label.as_str())
                .y_desc(section.y_label.as_str())
                .x_labels(labels.len())
                .x_label_formatter(&|v| match v {
                    SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                        labels.get(*i as usize).cloned().unwrap_or_default()
                    }
                    SegmentValue::Last => String::new(),
                })
                .draw()
                .map_err(draw_err)?;

            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(LINE.filled())
                        .margin(12)
                        .data(
                            section
                                .counts
                                .iter()
                                .enumerate()
                                .map(|(i, c)| (i as u32, c.count as u64)),
                        ),
                )
                .map_err(draw_err)?;
            Ok(())
        })
    }

    /// Run a drawing closure on a white RGB canvas and encode it as PNG.
    fn render_png<F>(width: u32, height: u32, draw: F) -> Result<Vec<u8>, RenderError>
    where
        F: FnOnce(&DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>) -> Result<(), RenderError>,
    {
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;
            draw(&root)?;
            root.present().map_err(draw_err)?;
        }

        let img = RgbImage::from_raw(width, height, buffer).ok_or(RenderError::Buffer)?;
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }
}
