//! CSV Insights Main Application
//! Main window with control panel and the active dashboard report.

use crate::config::DashboardConfig;
use crate::data::Upload;
use crate::export::export_report;
use crate::gui::{ControlPanel, ControlPanelAction, Page, ReportView};
use crate::pipeline::{catalog, explorer, Report};
use egui::SidePanel;
use tracing::{error, info};

/// Main application window.
///
/// Each dashboard keeps only its latest report; a trigger (start, reload,
/// upload) recomputes the report from scratch on the UI thread.
pub struct DashboardApp {
    config: DashboardConfig,
    control_panel: ControlPanel,
    catalog_report: Report,
    explorer_report: Report,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let catalog_report = catalog::render(&config);
        let explorer_report = explorer::render(None, &config);
        let mut app = Self {
            config,
            control_panel: ControlPanel::new(),
            catalog_report,
            explorer_report,
        };
        app.sync_export_state();
        app
    }

    fn current_report(&self) -> &Report {
        match self.control_panel.page {
            Page::Catalog => &self.catalog_report,
            Page::Explorer => &self.explorer_report,
        }
    }

    fn sync_export_state(&mut self) {
        self.control_panel.export_enabled = self.current_report().insights().is_some();
    }

    fn handle_reload(&mut self) {
        info!("reloading catalog dashboard");
        self.catalog_report = catalog::render(&self.config);
        self.control_panel.set_status("Catalog reloaded");
    }

    /// Handle CSV file selection for the explorer.
    fn handle_browse_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        match Upload::from_path(&path) {
            Ok(upload) => {
                self.control_panel.upload_name = Some(upload.name.clone());
                self.explorer_report = explorer::render(Some(&upload), &self.config);
                self.control_panel.set_status("Upload analysed");
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "could not read upload");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    /// Export the visible dashboard's charts as PNG files plus report.json.
    fn handle_export(&mut self) {
        let Some(directory) = rfd::FileDialog::new()
            .set_title("Choose export folder")
            .pick_folder()
        else {
            return;
        };

        match export_report(self.current_report(), &directory, self.config.export_size) {
            Ok(summary) => {
                self.control_panel
                    .set_status(&format!("Exported {} files", summary.files.len()));
                if let Err(e) = open::that(&summary.directory) {
                    error!(error = %e, "could not open export folder");
                }
            }
            Err(e) => {
                error!(error = %e, "export failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::PageChanged => self.control_panel.set_status("Ready"),
                        ControlPanelAction::Reload => self.handle_reload(),
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::Export => self.handle_export(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        self.sync_export_state();

        egui::CentralPanel::default().show(ctx, |ui| {
            ReportView::show(ui, self.current_report());
        });
    }
}
