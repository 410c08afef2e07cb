mod dashboard_config;
mod dashboard_error;
mod dashboard_state;

pub use dashboard_config::DashboardConfig;
pub use dashboard_error::DashboardError;
pub use dashboard_state::Dashboard;
