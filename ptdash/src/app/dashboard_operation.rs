use super::{cli_range, output_format::write_json, OutputFormat};
use crate::{
    dashboard::{Dashboard, DashboardError},
    query::StationSelection,
};
use clap::Subcommand;
use itertools::Itertools;
use std::{collections::HashSet, io, ops::RangeInclusive};

#[derive(Debug, Clone, Subcommand)]
pub enum DashboardOperation {
    /// busiest bus routes leaving an origin city
    TopRoutes {
        /// origin city as named in the bus dataset
        #[arg(long)]
        origin: String,
        /// comma-separated list of years, defaults to every year in the dataset
        #[arg(long, value_delimiter = ',')]
        years: Vec<i32>,
    },
    /// train departures by status category for a set of stations
    StationStatus {
        /// defaults to the configured default year, or the earliest year when absent
        #[arg(long)]
        year: Option<i32>,
        /// comma-separated list of stations, defaults to the busiest stations of the default year
        #[arg(long, value_delimiter = ',')]
        stations: Vec<String>,
        /// inclusive month range as lo,hi, defaults to every month in the dataset
        #[arg(long, value_parser = cli_range::parse_month_range)]
        months: Option<RangeInclusive<u32>>,
    },
    /// monthly train departures with event annotations
    Ridership {
        /// station name, or All to sum over every station. defaults to the
        /// configured default station when present in the dataset, else All
        #[arg(long)]
        station: Option<StationSelection>,
        /// inclusive year range as lo,hi, defaults to every year in the dataset
        #[arg(long, value_parser = cli_range::parse_year_range)]
        years: Option<RangeInclusive<i32>>,
    },
    /// values available for each selection, always printed as JSON
    Options,
}

impl DashboardOperation {
    pub fn run(&self, dashboard: &Dashboard, output: OutputFormat) -> Result<(), DashboardError> {
        let stdout = io::stdout().lock();
        match self {
            DashboardOperation::TopRoutes { origin, years } => {
                let years: HashSet<i32> = if years.is_empty() {
                    crate::query::available_years(dashboard.trips()?.as_ref())
                        .into_iter()
                        .collect()
                } else {
                    years.iter().copied().collect()
                };
                log::info!(
                    "top routes from '{origin}' in years [{}]",
                    years.iter().sorted().join(",")
                );
                let routes = dashboard.top_routes(&years, origin)?;
                output.write_rows(stdout, &routes)
            }
            DashboardOperation::StationStatus {
                year,
                stations,
                months,
            } => {
                let selection = stations.iter().cloned().collect::<HashSet<_>>();
                let selection = (!selection.is_empty()).then_some(&selection);
                let rows = dashboard.station_status(*year, selection, months.clone())?;
                output.write_rows(stdout, &rows)
            }
            DashboardOperation::Ridership { station, years } => {
                let series = dashboard.ridership(station.as_ref(), years.clone())?;
                match output {
                    OutputFormat::Json => write_json(stdout, &series),
                    OutputFormat::Csv => output.write_rows(stdout, &series.points),
                }
            }
            DashboardOperation::Options => {
                if output != OutputFormat::Json {
                    log::warn!("options are only available as json, ignoring '{output}'");
                }
                let options = dashboard.options()?;
                write_json(stdout, &options)
            }
        }
    }
}
