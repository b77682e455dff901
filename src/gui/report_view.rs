//! Report View Widget
//! Central scrollable page drawing one dashboard report top to bottom.

use crate::charts::ChartPlotter;
use crate::pipeline::{Insights, Report, ReportBody};
use egui::{Color32, RichText, ScrollArea};

const SECTION_SPACING: f32 = 18.0;
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const INFO_COLOR: Color32 = Color32::from_rgb(0, 123, 255);
const WARN_COLOR: Color32 = Color32::from_rgb(255, 193, 7);

pub struct ReportView;

impl ReportView {
    pub fn show(ui: &mut egui::Ui, report: &Report) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(RichText::new(&report.title).size(26.0).strong());
                ui.label(RichText::new(&report.caption).color(Color32::GRAY));
                ui.add_space(SECTION_SPACING);

                match &report.body {
                    ReportBody::Idle { message } => Self::banner(ui, "ℹ", message, INFO_COLOR),
                    ReportBody::Failed { message } => Self::banner(ui, "❌", message, ERROR_COLOR),
                    ReportBody::Ready(insights) => Self::draw_insights(ui, insights),
                }
            });
    }

    fn banner(ui: &mut egui::Ui, icon: &str, message: &str, color: Color32) {
        egui::Frame::none()
            .rounding(6.0)
            .stroke(egui::Stroke::new(1.5, color))
            .fill(color.gamma_multiply(0.15))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(format!("{} {}", icon, message)).size(15.0).color(color));
            });
    }

    fn subheader(ui: &mut egui::Ui, text: &str) {
        ui.add_space(SECTION_SPACING);
        ui.label(RichText::new(text).size(19.0).strong());
        ui.add_space(6.0);
    }

    fn draw_insights(ui: &mut egui::Ui, insights: &Insights) {
        ui.label(
            RichText::new(format!(
                "{}: {} rows, {} without missing values",
                insights.source, insights.row_count, insights.clean_row_count
            ))
            .size(12.0)
            .color(Color32::GRAY),
        );

        Self::subheader(ui, "📌 Raw Data");
        ChartPlotter::draw_preview(ui, &insights.preview);

        Self::subheader(ui, "🧹 Missing Values");
        ChartPlotter::draw_missing(ui, &insights.missing);

        Self::subheader(ui, "📊 Summary Stats");
        ChartPlotter::draw_summary(ui, &insights.summary);

        if let Some(section) = &insights.correlation {
            Self::subheader(ui, &format!("🔁 {}", section.heading));
            ChartPlotter::draw_heatmap(ui, section);
        }

        if let Some(section) = &insights.trend {
            Self::subheader(ui, &format!("📈 {}", section.heading));
            ChartPlotter::draw_trend(ui, section);
        }

        for section in &insights.categories {
            Self::subheader(ui, &format!("🌍 {}", section.heading));
            ChartPlotter::draw_categories(ui, section);
        }

        for notice in &insights.notices {
            ui.add_space(SECTION_SPACING);
            Self::banner(ui, "⚠", notice, WARN_COLOR);
        }

        ui.add_space(SECTION_SPACING);
    }
}
