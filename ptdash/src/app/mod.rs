mod cli_range;
mod dashboard_app;
mod dashboard_operation;
mod output_format;

pub use cli_range::{parse_month_range, parse_year_range};
pub use dashboard_app::DashboardApp;
pub use dashboard_operation::DashboardOperation;
pub use output_format::OutputFormat;
