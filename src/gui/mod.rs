//! GUI module - User interface components

mod app;
mod control_panel;
mod report_view;

pub use app::DashboardApp;
pub use control_panel::{ControlPanel, ControlPanelAction, Page};
pub use report_view::ReportView;
