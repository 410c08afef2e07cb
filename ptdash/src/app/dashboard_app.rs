use super::{DashboardOperation, OutputFormat};
use crate::dashboard::{Dashboard, DashboardConfig, DashboardError};
use clap::Parser;
use std::path::PathBuf;

/// command line tool for querying the bus routes, train status and train
/// ridership views of the public transportation dashboard
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct DashboardApp {
    #[command(subcommand)]
    pub op: DashboardOperation,
    /// dashboard configuration file (TOML or JSON). defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

impl DashboardApp {
    pub fn run(&self) -> Result<(), DashboardError> {
        let config = match &self.config {
            Some(path) => DashboardConfig::try_from(path.as_path())?,
            None => {
                log::info!("no configuration file provided, using defaults");
                DashboardConfig::default()
            }
        };
        let dashboard = Dashboard::new(config);
        self.op.run(&dashboard, self.output)
    }
}

#[cfg(test)]
mod test {
    use super::DashboardApp;
    use crate::app::{DashboardOperation, OutputFormat};
    use crate::query::StationSelection;
    use clap::Parser;

    #[test]
    fn test_parse_top_routes() {
        let app = DashboardApp::try_parse_from([
            "ptdash",
            "top-routes",
            "--origin",
            "Tel Aviv",
            "--years",
            "2022,2023",
            "--output",
            "csv",
        ])
        .expect("valid arguments");
        assert_eq!(app.output, OutputFormat::Csv);
        match app.op {
            DashboardOperation::TopRoutes { origin, years } => {
                assert_eq!(origin, "Tel Aviv");
                assert_eq!(years, vec![2022, 2023]);
            }
            _ => panic!("expected top-routes"),
        }
    }

    #[test]
    fn test_parse_ridership_defaults() {
        let app = DashboardApp::try_parse_from(["ptdash", "ridership"]).expect("valid arguments");
        assert_eq!(app.output, OutputFormat::Json);
        assert!(app.config.is_none());
        match app.op {
            DashboardOperation::Ridership { station, years } => {
                assert!(station.is_none());
                assert!(years.is_none());
            }
            _ => panic!("expected ridership"),
        }
    }

    #[test]
    fn test_parse_station_status() {
        let app = DashboardApp::try_parse_from([
            "ptdash",
            "--config",
            "ptdash.toml",
            "station-status",
            "--year",
            "2023",
            "--stations",
            "Sderot,Haifa Center",
            "--months",
            "1,3",
        ])
        .expect("valid arguments");
        match app.op {
            DashboardOperation::StationStatus {
                year,
                stations,
                months,
            } => {
                assert_eq!(year, Some(2023));
                assert_eq!(stations, vec!["Sderot", "Haifa Center"]);
                assert_eq!(months, Some(1..=3));
            }
            _ => panic!("expected station-status"),
        }
        assert!(DashboardApp::try_parse_from([
            "ptdash",
            "station-status",
            "--year",
            "2023",
            "--months",
            "0,13",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_ridership_station() {
        let app = DashboardApp::try_parse_from(["ptdash", "ridership", "--station", "All"])
            .expect("valid arguments");
        match app.op {
            DashboardOperation::Ridership { station, .. } => {
                assert_eq!(station, Some(StationSelection::All));
            }
            _ => panic!("expected ridership"),
        }
    }
}
