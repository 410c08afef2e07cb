use crate::dashboard::DashboardError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// how query results are printed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// pretty-printed JSON
    Json,
    /// one CSV row per result row, with a header
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl OutputFormat {
    /// writes flat result rows in this format.
    pub fn write_rows<W, T>(&self, writer: W, rows: &[T]) -> Result<(), DashboardError>
    where
        W: Write,
        T: Serialize,
    {
        match self {
            OutputFormat::Json => write_json(writer, &rows),
            OutputFormat::Csv => {
                let mut csv_writer = csv::WriterBuilder::new()
                    .has_headers(true)
                    .from_writer(writer);
                for row in rows {
                    csv_writer
                        .serialize(row)
                        .map_err(|e| DashboardError::Output(e.to_string()))?;
                }
                csv_writer
                    .flush()
                    .map_err(|e| DashboardError::Output(e.to_string()))
            }
        }
    }
}

/// writes a nested value, which only has a JSON rendering.
pub(crate) fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<(), DashboardError> {
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| DashboardError::Output(e.to_string()))?;
    writeln!(writer).map_err(|e| DashboardError::Output(e.to_string()))
}

#[cfg(test)]
mod test {
    use super::OutputFormat;
    use crate::model::StatusCategory;
    use crate::query::AggregatedStationStatus;

    fn rows() -> Vec<AggregatedStationStatus> {
        vec![
            AggregatedStationStatus {
                station_name: String::from("Sderot"),
                status_category: StatusCategory::OnTime,
                status_count: 10,
            },
            AggregatedStationStatus {
                station_name: String::from("Sderot"),
                status_category: StatusCategory::Delayed,
                status_count: 12,
            },
        ]
    }

    #[test]
    fn test_write_csv() {
        let mut buffer = vec![];
        OutputFormat::Csv
            .write_rows(&mut buffer, &rows())
            .expect("write succeeds");
        let text = String::from_utf8(buffer).expect("utf-8 output");
        assert_eq!(
            text,
            "station_name,status_category,status_count\nSderot,on_time,10\nSderot,delayed,12\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut buffer = vec![];
        OutputFormat::Json
            .write_rows(&mut buffer, &rows())
            .expect("write succeeds");
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(parsed[1]["status_category"], "delayed");
        assert_eq!(parsed[1]["status_count"], 12);
    }
}
