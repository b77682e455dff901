//! Chart Plotter Module
//! Draws report sections with egui and egui_plot.

use crate::pipeline::{CategorySection, CorrelationSection, TablePreview, TrendSection};
use crate::stats::{MissingCount, SummaryTable};
use egui::{Align2, Color32, FontId, RichText, Sense};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

pub const LINE_COLOR: Color32 = Color32::from_rgb(99, 110, 250);
pub const BAR_COLOR: Color32 = Color32::from_rgb(99, 110, 250);

// coolwarm anchors
const COOL: [f32; 3] = [59.0, 76.0, 192.0];
const NEUTRAL: [f32; 3] = [221.0, 221.0, 221.0];
const WARM: [f32; 3] = [180.0, 4.0, 38.0];

const PLOT_HEIGHT: f32 = 320.0;
const HEATMAP_CELL: f32 = 90.0;

/// Creates the dashboard widgets.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Map a correlation in [-1, 1] onto the coolwarm scale. NaN is grey.
    pub fn coolwarm(value: f64) -> Color32 {
        if value.is_nan() {
            return Color32::from_gray(160);
        }
        let t = value.clamp(-1.0, 1.0) as f32;
        let (from, to, frac) = if t < 0.0 {
            (COOL, NEUTRAL, t + 1.0)
        } else {
            (NEUTRAL, WARM, t)
        };
        let mix = |i: usize| (from[i] + (to[i] - from[i]) * frac).round() as u8;
        Color32::from_rgb(mix(0), mix(1), mix(2))
    }

    /// Text color readable on top of a heatmap cell.
    fn contrast(fill: Color32) -> Color32 {
        let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
        if luma > 150.0 {
            Color32::BLACK
        } else {
            Color32::WHITE
        }
    }

    /// Annotated heatmap with column names along both axes.
    pub fn draw_heatmap(ui: &mut egui::Ui, section: &CorrelationSection) {
        let matrix = &section.matrix;
        let n = matrix.size();

        egui::Grid::new(ui.make_persistent_id("correlation_heatmap"))
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                ui.label("");
                for name in &matrix.columns {
                    ui.label(RichText::new(name).strong().size(12.0));
                }
                ui.end_row();

                for i in 0..n {
                    ui.label(RichText::new(&matrix.columns[i]).strong().size(12.0));
                    for j in 0..n {
                        let fill = Self::coolwarm(matrix.values[i][j]);
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(HEATMAP_CELL, HEATMAP_CELL * 0.5),
                            Sense::hover(),
                        );
                        ui.painter().rect_filled(rect, 2.0, fill);
                        ui.painter().text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            matrix.label(i, j, section.precision),
                            FontId::proportional(13.0),
                            Self::contrast(fill),
                        );
                        response.on_hover_text(format!(
                            "{} × {}: {}",
                            matrix.columns[i],
                            matrix.columns[j],
                            matrix.label(i, j, 4)
                        ));
                    }
                    ui.end_row();
                }
            });
    }

    /// Year/count line chart.
    pub fn draw_trend(ui: &mut egui::Ui, section: &TrendSection) {
        let points: Vec<[f64; 2]> = section
            .trend
            .points
            .iter()
            .map(|&(year, count)| [year as f64, count as f64])
            .collect();

        Plot::new(format!("trend_{}", section.trend.column))
            .height(PLOT_HEIGHT)
            .x_axis_label(section.x_label.as_str())
            .y_axis_label(section.y_label.as_str())
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(|mark, _range| {
                if mark.value.fract() == 0.0 {
                    format!("{:.0}", mark.value)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(LINE_COLOR)
                        .width(2.0)
                        .name(section.y_label.as_str()),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(3.0)
                        .color(LINE_COLOR),
                );
            });
    }

    /// Bar chart of top values; bars are indexed and labelled on the x axis.
    pub fn draw_categories(ui: &mut egui::Ui, section: &CategorySection) {
        let labels: Vec<String> = section.counts.iter().map(|c| c.value.clone()).collect();
        let bars: Vec<Bar> = section
            .counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Bar::new(i as f64, c.count as f64)
                    .name(&c.value)
                    .width(0.7)
            })
            .collect();

        Plot::new(format!("categories_{}", section.x_label))
            .height(PLOT_HEIGHT)
            .x_axis_label(section.x_label.as_str())
            .y_axis_label(section.y_label.as_str())
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                if mark.value.fract() != 0.0 || mark.value < 0.0 {
                    return String::new();
                }
                labels.get(mark.value as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name(section.y_label.as_str()));
            });
    }

    /// First rows of the raw table.
    pub fn draw_preview(ui: &mut egui::Ui, preview: &TablePreview) {
        egui::ScrollArea::horizontal()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id("raw_preview"))
                    .striped(true)
                    .min_col_width(60.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("").size(11.0));
                        for name in &preview.columns {
                            ui.label(RichText::new(name).strong().size(11.0));
                        }
                        ui.end_row();

                        for (i, row) in preview.rows.iter().enumerate() {
                            ui.label(RichText::new(i.to_string()).size(11.0).color(Color32::GRAY));
                            for value in row {
                                ui.label(RichText::new(value).size(11.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    /// Missing value count per column.
    pub fn draw_missing(ui: &mut egui::Ui, missing: &[MissingCount]) {
        egui::Grid::new(ui.make_persistent_id("missing_values"))
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Column").strong().size(11.0));
                ui.label(RichText::new("Missing").strong().size(11.0));
                ui.end_row();

                for m in missing {
                    ui.label(RichText::new(&m.column).size(11.0));
                    let color = if m.missing > 0 {
                        Color32::from_rgb(220, 53, 69)
                    } else {
                        ui.visuals().text_color()
                    };
                    ui.label(RichText::new(m.missing.to_string()).size(11.0).color(color));
                    ui.end_row();
                }
            });
    }

    /// Summary statistics with one column per table column.
    pub fn draw_summary(ui: &mut egui::Ui, summary: &SummaryTable) {
        egui::ScrollArea::horizontal()
            .id_salt("summary_scroll")
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id("summary_stats"))
                    .striped(true)
                    .min_col_width(60.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("");
                        for name in summary.column_names() {
                            ui.label(RichText::new(name).strong().size(11.0));
                        }
                        ui.end_row();

                        for row in summary.rows() {
                            ui.label(RichText::new(row.label).strong().size(11.0));
                            for cell in &row.cells {
                                match cell {
                                    Some(text) => ui.label(RichText::new(text).size(11.0)),
                                    None => ui.label(
                                        RichText::new("NaN").size(11.0).color(Color32::GRAY),
                                    ),
                                };
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
