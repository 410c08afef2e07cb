use super::{LoadError, TableSource};
use crate::model::{Record, Table};
use csv::StringRecord;
use itertools::Itertools;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

/// reads the full contents of a [`TableSource`]. implemented by the CSV
/// reader below, and by fakes in tests of the table cache.
pub trait TableLoader<R> {
    fn load(&self, source: &TableSource) -> Result<Table<R>, LoadError>;
}

/// loads tables from CSV files on the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvTableLoader;

impl<R> TableLoader<R> for CsvTableLoader
where
    R: Record + DeserializeOwned + Send,
{
    fn load(&self, source: &TableSource) -> Result<Table<R>, LoadError> {
        load_table(source)
    }
}

/// loads every row of a table source, unfiltered.
///
/// partitioned sources are read in file name order so that the same directory
/// always produces the same table. every partition must share the header of
/// the first partition. any unreadable partition fails the whole load.
pub fn load_table<R>(source: &TableSource) -> Result<Table<R>, LoadError>
where
    R: Record + DeserializeOwned + Send,
{
    match source {
        TableSource::Partitioned {
            directory,
            extension,
        } => load_partitions(directory, extension),
        TableSource::Flat { file } => {
            if !file.is_file() {
                return Err(LoadError::SourceNotFound(file.display().to_string()));
            }
            let (_, rows) = read_csv(file)?;
            log::info!("loaded {} rows from {}", rows.len(), file.display());
            Ok(Table::new(rows))
        }
    }
}

fn load_partitions<R>(directory: &Path, extension: &str) -> Result<Table<R>, LoadError>
where
    R: Record + DeserializeOwned + Send,
{
    let partitions = list_partitions(directory, extension)?;
    if partitions.is_empty() {
        return Err(LoadError::EmptySource(directory.display().to_string()));
    }

    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc(format!("reading {}", directory.display()))
            .total(partitions.len())
            .build()
            .map_err(|e| LoadError::ProgressBar(e.to_string()))?,
    ));
    let parsed = partitions
        .par_iter()
        .map(|path| {
            let result = read_csv::<R>(path);
            if let Ok(mut bar) = bar.lock() {
                let _ = bar.update(1);
            }
            result
        })
        .collect::<Result<Vec<_>, LoadError>>()?;
    eprintln!();

    let mut rows: Vec<R> = vec![];
    let mut expected: Option<StringRecord> = None;
    for (path, (headers, partition_rows)) in partitions.iter().zip(parsed) {
        if let Some(first) = &expected {
            if *first != headers {
                return Err(LoadError::SchemaMismatch {
                    path: path.display().to_string(),
                    expected: first.iter().join(","),
                    found: headers.iter().join(","),
                });
            }
        } else {
            expected = Some(headers);
        }
        rows.extend(partition_rows);
    }

    log::info!(
        "loaded {} rows from {} partitions in {}",
        rows.len(),
        partitions.len(),
        directory.display()
    );
    Ok(Table::new(rows))
}

/// lists the files in `directory` with the given extension, sorted by path.
fn list_partitions(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    if !directory.is_dir() {
        return Err(LoadError::SourceNotFound(directory.display().to_string()));
    }
    let io_error = |source: std::io::Error| LoadError::Io {
        path: directory.display().to_string(),
        source,
    };
    let mut partitions = vec![];
    for entry in std::fs::read_dir(directory).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let matches_extension = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or_default();
        if path.is_file() && matches_extension {
            partitions.push(path);
        }
    }
    partitions.sort();
    log::debug!(
        "found {} partitions in {}",
        partitions.len(),
        directory.display()
    );
    Ok(partitions)
}

/// reads one CSV file into typed records, validating each row.
/// row numbers in errors are 1-based and exclude the header.
fn read_csv<R>(path: &Path) -> Result<(StringRecord, Vec<R>), LoadError>
where
    R: Record + DeserializeOwned,
{
    let filename = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: filename.clone(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Malformed {
            path: filename.clone(),
            row: 0,
            source,
        })?
        .clone();

    let mut rows = vec![];
    for (idx, result) in reader.deserialize::<R>().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|source| LoadError::Malformed {
            path: filename.clone(),
            row,
            source,
        })?;
        record
            .validate()
            .map_err(|message| LoadError::InvalidRecord {
                path: filename.clone(),
                row,
                message,
            })?;
        rows.push(record);
    }
    log::debug!("read {} rows from {filename}", rows.len());
    Ok((headers, rows))
}

#[cfg(test)]
mod test {
    use super::load_table;
    use crate::loader::{LoadError, TableSource};
    use crate::model::{StatusCategory, StatusRecord, Table, TripRecord};
    use std::path::PathBuf;

    const BUS_HEADER: &str =
        "year,origin_yishuv_nm,destination_yishuv_nm,lat_origin,lon_origin,lat_dest,lon_dest,trips_count";

    fn test_resource(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("resources")
            .join("test")
            .join(name)
    }

    #[test]
    fn test_load_partitioned_merges_all_rows() {
        let source = TableSource::partitioned(test_resource("bus"));
        let table: Table<TripRecord> = load_table(&source).expect("bus partitions should load");
        assert_eq!(table.len(), 6);
        let total: u64 = table.iter().map(|r| r.trip_count).sum();
        assert_eq!(total, 255);
        // part_0.csv is read before part_1.csv
        assert_eq!(table.rows()[0].destination_city, "Haifa");
        assert_eq!(table.rows()[0].trip_count, 100);
        assert_eq!(table.rows()[3].trip_count, 50);
    }

    #[test]
    fn test_load_is_deterministic() {
        let source = TableSource::partitioned(test_resource("bus"));
        let a: Table<TripRecord> = load_table(&source).expect("first load");
        let b: Table<TripRecord> = load_table(&source).expect("second load");
        assert_eq!(a, b);
    }

    #[test]
    fn test_load_flat_renames_source_columns() {
        let source = TableSource::flat(test_resource("train.csv"));
        let table: Table<StatusRecord> = load_table(&source).expect("train file should load");
        assert_eq!(table.len(), 9);
        let first = &table.rows()[0];
        assert_eq!(first.year, 2023);
        assert_eq!(first.month, 1);
        assert_eq!(first.station_name, "Tel Aviv Savidor");
        assert_eq!(first.status_category, StatusCategory::OnTime);
        assert_eq!(table.rows()[4].status_category, StatusCategory::Early);
    }

    #[test]
    fn test_missing_source() {
        let source = TableSource::flat(test_resource("does_not_exist.csv"));
        let result: Result<Table<StatusRecord>, _> = load_table(&source);
        assert!(matches!(result, Err(LoadError::SourceNotFound(_))));

        let source = TableSource::partitioned(test_resource("no_such_directory"));
        let result: Result<Table<TripRecord>, _> = load_table(&source);
        assert!(matches!(result, Err(LoadError::SourceNotFound(_))));
    }

    #[test]
    fn test_empty_directory_is_empty_source() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("notes.txt"), "not a partition").expect("write");
        let source = TableSource::partitioned(dir.path());
        let result: Result<Table<TripRecord>, _> = load_table(&source);
        assert!(matches!(result, Err(LoadError::EmptySource(_))));
    }

    #[test]
    fn test_malformed_partition_fails_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let good = format!("{BUS_HEADER}\n2023,A,B,1.0,1.0,2.0,2.0,10\n");
        let bad = format!("{BUS_HEADER}\n2023,A,B,1.0,1.0,2.0,2.0,lots\n");
        std::fs::write(dir.path().join("a.csv"), good).expect("write");
        std::fs::write(dir.path().join("b.csv"), bad).expect("write");
        let source = TableSource::partitioned(dir.path());
        let result: Result<Table<TripRecord>, _> = load_table(&source);
        match result {
            Err(LoadError::Malformed { path, row, .. }) => {
                assert!(path.ends_with("b.csv"));
                assert_eq!(row, 1);
            }
            other => panic!("expected malformed error, found {other:?}"),
        }
    }

    #[test]
    fn test_negative_trip_count_is_malformed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let bad = format!("{BUS_HEADER}\n2023,A,B,1.0,1.0,2.0,2.0,-5\n");
        std::fs::write(dir.path().join("a.csv"), bad).expect("write");
        let result: Result<Table<TripRecord>, _> =
            load_table(&TableSource::partitioned(dir.path()));
        assert!(matches!(result, Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn test_schema_mismatch_between_partitions() {
        let dir = tempfile::tempdir().expect("temp dir");
        let first = format!("{BUS_HEADER}\n2023,A,B,1.0,1.0,2.0,2.0,10\n");
        let second = "year,origin_city,destination_city,origin_lat,origin_lon,dest_lat,dest_lon,trip_count\n2023,A,C,1.0,1.0,3.0,3.0,4\n";
        std::fs::write(dir.path().join("a.csv"), first).expect("write");
        std::fs::write(dir.path().join("b.csv"), second).expect("write");
        let result: Result<Table<TripRecord>, _> =
            load_table(&TableSource::partitioned(dir.path()));
        assert!(matches!(result, Err(LoadError::SchemaMismatch { .. })));
    }

    #[test]
    fn test_month_out_of_range_is_invalid_record() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("train.csv");
        let contents = "shana,hodesh,train_station_nm,station_status_nm,status_count\n2023,1,Sderot,בזמן,3\n2023,13,Sderot,בזמן,3\n";
        std::fs::write(&file, contents).expect("write");
        let result: Result<Table<StatusRecord>, _> = load_table(&TableSource::flat(&file));
        match result {
            Err(LoadError::InvalidRecord { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected invalid record error, found {other:?}"),
        }
    }

    #[test]
    fn test_unknown_status_category_is_malformed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("train.csv");
        let contents = "shana,hodesh,train_station_nm,station_status_nm,status_count\n2023,1,Sderot,cancelled,3\n";
        std::fs::write(&file, contents).expect("write");
        let result: Result<Table<StatusRecord>, _> = load_table(&TableSource::flat(&file));
        assert!(matches!(result, Err(LoadError::Malformed { .. })));
    }
}
