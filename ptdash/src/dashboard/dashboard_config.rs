use super::DashboardError;
use crate::{
    loader::TableSource,
    query::{RidershipViewConfig, RouteViewConfig, StatusViewConfig},
};
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// prefix of environment variables overriding file values, for example
/// `PTDASH__ROUTES__TOP_N=10`.
pub const ENV_PREFIX: &str = "PTDASH";
const ENV_SEPARATOR: &str = "__";

/// data sources and view settings of the dashboard. missing fields take the
/// values of [`DashboardConfig::default`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub bus_source: TableSource,
    pub train_source: TableSource,
    pub routes: RouteViewConfig,
    pub status: StatusViewConfig,
    pub ridership: RidershipViewConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bus_source: TableSource::partitioned("bus_data_splits"),
            train_source: TableSource::flat("timetable_train_database_preproccesed.csv"),
            routes: RouteViewConfig::default(),
            status: StatusViewConfig::default(),
            ridership: RidershipViewConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// resolves relative source paths against `base`.
    pub fn relative_to(self, base: &Path) -> DashboardConfig {
        DashboardConfig {
            bus_source: self.bus_source.relative_to(base),
            train_source: self.train_source.relative_to(base),
            ..self
        }
    }
}

impl TryFrom<&Path> for DashboardConfig {
    type Error = DashboardError;

    /// reads a TOML or JSON config file, layered with `PTDASH__*` environment
    /// variables. source paths are resolved against the directory of the file.
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        read_layered(path, ENV_PREFIX)
    }
}

fn read_layered(path: &Path, env_prefix: &str) -> Result<DashboardConfig, DashboardError> {
    if !path.is_file() {
        return Err(DashboardError::Configuration(format!(
            "config file not found: {}",
            path.display()
        )));
    }
    let filename = path.display().to_string();
    let config = Config::builder()
        .add_source(config::File::from(path))
        .add_source(
            Environment::with_prefix(env_prefix)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()
        .map_err(|e| {
            DashboardError::Configuration(format!("failure reading {filename}: {e}"))
        })?;
    let parsed: DashboardConfig = config.try_deserialize().map_err(|e| {
        DashboardError::Configuration(format!("failure decoding {filename}: {e}"))
    })?;
    log::debug!("loaded dashboard configuration from {filename}");
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(parsed.relative_to(base))
}
