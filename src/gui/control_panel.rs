//! Control Panel Widget
//! Left side panel: dashboard selection, data source actions and status.

use egui::{Color32, RichText};

/// The two dashboards hosted in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Catalog,
    Explorer,
}

/// Left side control panel with dashboard selection and file controls.
pub struct ControlPanel {
    pub page: Page,
    pub upload_name: Option<String>,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            page: Page::default(),
            upload_name: None,
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 CSV Insights")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Dashboard Section =====
        ui.label(RichText::new("🧭 Dashboard").size(14.0).strong());
        ui.add_space(5.0);

        let previous = self.page;
        ui.selectable_value(&mut self.page, Page::Catalog, "🎬 Netflix Insights");
        ui.selectable_value(&mut self.page, Page::Explorer, "🔎 CSV Explorer");
        if self.page != previous {
            action = ControlPanelAction::PageChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| match self.page {
                Page::Catalog => {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("netflix_titles.csv").size(12.0));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("🔄 Reload").clicked() {
                                action = ControlPanelAction::Reload;
                            }
                        });
                    });
                }
                Page::Explorer => {
                    ui.horizontal(|ui| {
                        let name = self
                            .upload_name
                            .clone()
                            .unwrap_or_else(|| "No file selected".to_string());
                        let color = if self.upload_name.is_some() {
                            ui.visuals().text_color()
                        } else {
                            Color32::GRAY
                        };
                        ui.label(RichText::new(name).size(12.0).color(color));

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("📂 Browse").clicked() {
                                action = ControlPanelAction::BrowseCsv;
                            }
                        });
                    });
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("🖼 Export Charts").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Export;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    PageChanged,
    Reload,
    BrowseCsv,
    Export,
}
