use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{AppError, Result};
use crate::format::NumberFormat;
use crate::models::{Dataset, ModeFigures, ReportRow, COLUMN_COUNT, DATASET_COLUMNS};

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Append-only CSV dataset of report rows.
///
/// Numeric fields are written pre-formatted by the store's [`NumberFormat`],
/// so a field like `1.234,50` is quoted by the CSV writer. Reading goes
/// through the same format.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    path: PathBuf,
    format: NumberFormat,
}

impl DatasetStore {
    pub fn new(path: impl Into<PathBuf>, format: NumberFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append rows, writing the header first if the dataset is new.
    ///
    /// The whole batch is serialized up front and written with a single call
    /// so a failed serialization never leaves a partial batch on disk.
    pub fn append(&self, rows: &[ReportRow]) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        // An existing file must be ours, and a missing final newline would
        // glue the first new row onto the last old one
        let needs_newline = if needs_header {
            false
        } else {
            self.check_header()?;
            !self.ends_with_newline()?
        };

        let mut buffer = Vec::new();
        if needs_newline {
            tracing::warn!(
                "Dataset {} does not end with a newline, starting a new line",
                self.path.display()
            );
            buffer.push(b'\n');
        }

        let mut writer = WriterBuilder::new().from_writer(buffer);
        if needs_header {
            writer.write_record(DATASET_COLUMNS)?;
        }
        for row in rows {
            writer.write_record(self.format_record(row))?;
        }
        let buffer = writer
            .into_inner()
            .map_err(|e| AppError::Persistence(e.into_error()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&buffer)?;
        file.flush()?;

        tracing::info!(
            path = %self.path.display(),
            rows = rows.len(),
            header = needs_header,
            "Appended {} rows to dataset {}",
            rows.len(),
            self.path.display()
        );

        Ok(rows.len())
    }

    /// Read every persisted row. A missing (or empty) file is an empty dataset.
    pub fn load(&self) -> Result<Dataset> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.len() == 0 => return Ok(Dataset::empty()),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "Dataset {} does not exist yet, returning empty dataset",
                    self.path.display()
                );
                return Ok(Dataset::empty());
            }
            Err(e) => return Err(e.into()),
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let headers = reader.headers().map_err(malformed)?.clone();
        self.validate_header(&headers)?;

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(malformed)?;
            // line 1 is the header
            rows.push(self.parse_record(&record, line + 2)?);
        }

        tracing::debug!(
            "Loaded {} rows from dataset {}",
            rows.len(),
            self.path.display()
        );

        Ok(Dataset::with_rows(rows))
    }

    fn check_header(&self) -> Result<()> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        let headers = reader.headers().map_err(malformed)?.clone();
        self.validate_header(&headers)
    }

    fn validate_header(&self, headers: &StringRecord) -> Result<()> {
        if headers.len() != COLUMN_COUNT
            || headers
                .iter()
                .zip(DATASET_COLUMNS.iter())
                .any(|(found, expected)| found.trim() != *expected)
        {
            return Err(AppError::MalformedDataset(format!(
                "unexpected header in {}: {:?}",
                self.path.display(),
                headers.iter().collect::<Vec<_>>()
            )));
        }
        Ok(())
    }

    fn ends_with_newline(&self) -> Result<bool> {
        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }

    // -----------------------------------------------------------------------
    // Row mapping
    // -----------------------------------------------------------------------

    fn format_record(&self, row: &ReportRow) -> [String; COLUMN_COUNT] {
        let fmt = &self.format;
        [
            row.route.clone(),
            row.origin.clone(),
            row.destination.clone(),
            fmt.format(row.distance_km),
            row.duration.clone(),
            fmt.format(row.diesel_price),
            fmt.format(row.weight_tonnes),
            fmt.format(row.diesel.emission_kg),
            fmt.format(row.hybrid.emission_kg),
            fmt.format(row.electric.emission_kg),
            fmt.format(row.diesel.consumption),
            fmt.format(row.hybrid.consumption),
            fmt.format(row.electric.consumption),
            fmt.format(row.diesel.cost),
            fmt.format(row.hybrid.cost),
            fmt.format(row.electric.cost),
        ]
    }

    fn parse_record(&self, record: &StringRecord, line: usize) -> Result<ReportRow> {
        if record.len() != COLUMN_COUNT {
            return Err(AppError::MalformedDataset(format!(
                "line {} has {} fields, expected {}",
                line,
                record.len(),
                COLUMN_COUNT
            )));
        }

        let text = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        let number = |idx: usize| -> Result<f64> {
            let field = record.get(idx).unwrap_or_default();
            self.format.parse(field).map_err(|e| {
                AppError::MalformedDataset(format!(
                    "line {}, column '{}': {}",
                    line, DATASET_COLUMNS[idx], e
                ))
            })
        };

        Ok(ReportRow {
            route: text(0),
            origin: text(1),
            destination: text(2),
            distance_km: number(3)?,
            duration: text(4),
            diesel_price: number(5)?,
            weight_tonnes: number(6)?,
            diesel: ModeFigures {
                emission_kg: number(7)?,
                consumption: number(10)?,
                cost: number(13)?,
            },
            hybrid: ModeFigures {
                emission_kg: number(8)?,
                consumption: number(11)?,
                cost: number(14)?,
            },
            electric: ModeFigures {
                emission_kg: number(9)?,
                consumption: number(12)?,
                cost: number(15)?,
            },
        })
    }
}

/// Structural CSV problems (ragged rows, bad UTF-8) mean the file is not ours
fn malformed(e: csv::Error) -> AppError {
    if matches!(e.kind(), csv::ErrorKind::Io(_)) {
        AppError::Csv(e)
    } else {
        AppError::MalformedDataset(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ecofrete-store-{}-{}.csv",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    fn make_row(route: &str, distance_km: f64) -> ReportRow {
        ReportRow {
            route: route.to_string(),
            origin: "Curitiba, PR".to_string(),
            destination: "Joinville, SC".to_string(),
            distance_km,
            duration: "1 Horas e 45 minutos".to_string(),
            diesel_price: 6.19,
            weight_tonnes: 12.0,
            diesel: ModeFigures {
                consumption: 1234.5,
                cost: 7641.56,
                emission_kg: 3333.15,
            },
            hybrid: ModeFigures {
                consumption: 20.0,
                cost: 123.8,
                emission_kg: 54.0,
            },
            electric: ModeFigures {
                consumption: 0.1,
                cost: 0.08,
                emission_kg: 0.01,
            },
        }
    }

    #[test]
    fn test_record_uses_brazilian_numbers() {
        let store = DatasetStore::new(temp_path("record"), NumberFormat::brazilian());
        let record = store.format_record(&make_row("Rota 1", 130.0));

        assert_eq!(record[0], "Rota 1");
        assert_eq!(record[3], "130,00");
        assert_eq!(record[4], "1 Horas e 45 minutos");
        assert_eq!(record[6], "12,00");
        assert_eq!(record[10], "1.234,50");
        assert_eq!(record[12], "0,10");
    }

    #[test]
    fn test_append_then_load() {
        let path = temp_path("append-load");
        let store = DatasetStore::new(&path, NumberFormat::brazilian());

        let rows = vec![make_row("Rota 1", 130.0), make_row("Rota 2", 142.5)];
        assert_eq!(store.append(&rows).unwrap(), 2);

        let dataset = store.load().unwrap();
        assert_eq!(dataset.rows, rows);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_nothing_does_not_create_file() {
        let path = temp_path("append-empty");
        let store = DatasetStore::new(&path, NumberFormat::brazilian());

        assert_eq!(store.append(&[]).unwrap(), 0);
        assert!(!store.exists());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let store = DatasetStore::new(temp_path("missing"), NumberFormat::brazilian());
        let dataset = store.load().unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.columns.len(), COLUMN_COUNT);
    }

    #[test]
    fn test_append_refuses_foreign_file() {
        let path = temp_path("append-foreign");
        fs::write(&path, "name,value\nfoo,1\n").unwrap();

        let store = DatasetStore::new(&path, NumberFormat::brazilian());
        assert!(matches!(
            store.append(&[make_row("Rota 1", 130.0)]),
            Err(AppError::MalformedDataset(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\nfoo,1\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_after_missing_final_newline() {
        let path = temp_path("append-newline");
        let store = DatasetStore::new(&path, NumberFormat::brazilian());
        store.append(&[make_row("Rota 1", 130.0)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        fs::write(&path, content.trim_end_matches('\n')).unwrap();

        store.append(&[make_row("Rota 2", 142.5)]).unwrap();

        let dataset = store.load().unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows[1].route, "Rota 2");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_foreign_header() {
        let path = temp_path("foreign");
        fs::write(&path, "name,value\nfoo,1\n").unwrap();

        let store = DatasetStore::new(&path, NumberFormat::brazilian());
        assert!(matches!(store.load(), Err(AppError::MalformedDataset(_))));

        fs::remove_file(&path).unwrap();
    }
}
