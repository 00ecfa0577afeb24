//! Tests for abm-output.

use std::fs;

use abm_core::{RunState, StatsRecord, Step, StepObserver};
use abm_petrie::{PetrieStats, PopulationConfig, PopulationModel};
use abm_schelling::{GridModelBuilder, SchellingStats};
use tempfile::TempDir;

use crate::writer::OutputWriter;
use crate::{CsvWriter, OutputError, OutputResult, StatsObserver};

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn schelling_run_writes_one_row_per_step() {
        let dir = TempDir::new().unwrap();
        let mut model = GridModelBuilder::new(6, 6).density(0.7).seed(3).build().unwrap();

        let writer = CsvWriter::<SchellingStats>::create(dir.path(), "schelling").unwrap();
        let path = writer.path().to_path_buf();
        let mut obs = StatsObserver::<_, SchellingStats>::new(writer);
        model.run(25, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let lines = read_lines(&path);
        assert_eq!(lines[0], SchellingStats::HEADER.join(","));
        assert_eq!(lines.len() - 1, model.step_count().0 as usize);
        assert_eq!(obs.rows(), lines.len() - 1);
        assert!(lines[1].starts_with("1,"));
    }

    #[test]
    fn petrie_rows_have_header_width() {
        let dir = TempDir::new().unwrap();
        let mut model = PopulationModel::new(PopulationConfig::new(30, 0.5, 0.5).seed(2)).unwrap();

        let writer = CsvWriter::<PetrieStats>::create(&dir.path().join("nested"), "petrie").unwrap();
        let path = writer.path().to_path_buf();
        let mut obs = StatsObserver::<_, PetrieStats>::new(writer);
        model.run(10, &mut obs);
        assert!(obs.take_error().is_none());

        let lines = read_lines(&path);
        assert!(lines.len() >= 2);
        for line in &lines {
            assert_eq!(line.split(',').count(), PetrieStats::HEADER.len());
        }
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::<SchellingStats>::create(dir.path(), "s").unwrap();
        OutputWriter::<SchellingStats>::finish(&mut writer).unwrap();
        OutputWriter::<SchellingStats>::finish(&mut writer).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;

    struct Row(u32);

    impl StatsRecord for Row {
        const HEADER: &'static [&'static str] = &["n"];
        fn fields(&self) -> Vec<String> {
            vec![self.0.to_string()]
        }
    }

    /// Fails every write after the first `ok` rows.
    struct Flaky {
        ok:      usize,
        written: Vec<u32>,
    }

    impl OutputWriter<Row> for Flaky {
        fn write_row(&mut self, row: &Row) -> OutputResult<()> {
            if self.written.len() >= self.ok {
                return Err(OutputError::Io(std::io::Error::other(format!("row {} rejected", row.0))));
            }
            self.written.push(row.0);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_only() {
        let mut obs = StatsObserver::<Flaky, Row>::new(Flaky { ok: 1, written: vec![] });
        for n in 0..3 {
            obs.on_step_end(Step(n as u64 + 1), &Row(n));
        }
        obs.on_run_end(Step(3), RunState::Exhausted);

        assert_eq!(obs.rows(), 1);
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("row 1 rejected"), "got {err}");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().written, vec![0]);
    }
}
