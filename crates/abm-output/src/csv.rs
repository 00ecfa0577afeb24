//! CSV output backend.

use std::fs::{self, File};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use abm_core::StatsRecord;
use csv::Writer;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes one `R` row per step to `<dir>/<name>.csv`.
pub struct CsvWriter<R> {
    rows:     Writer<File>,
    path:     PathBuf,
    finished: bool,
    _record:  PhantomData<fn(&R)>,
}

impl<R: StatsRecord> CsvWriter<R> {
    /// Create `dir` if needed, open `<dir>/<name>.csv`, and write the header row.
    pub fn create(dir: &Path, name: &str) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{name}.csv"));
        let mut rows = Writer::from_path(&path)?;
        rows.write_record(R::HEADER)?;
        Ok(Self {
            rows,
            path,
            finished: false,
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: StatsRecord> OutputWriter<R> for CsvWriter<R> {
    fn write_row(&mut self, row: &R) -> OutputResult<()> {
        self.rows.write_record(row.fields())?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
