//! Recorded time series of a finished run
//!
//! One `HistoryRecord` per step, holding copies of the drone position, the
//! net force and the per-axis PID components. Plotting and export code only
//! ever reads from here

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::states::NVec;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub t: f64,            // time stamp of the step
    pub position: NVec,    // position after the step
    pub net_force: NVec,   // PID force + disturbance applied during the step
    pub p: NVec,           // proportional components
    pub i: NVec,           // integral components
    pub d: NVec,           // derivative components
}

/// Which per-axis column to pull out of a history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Position,
    NetForce,
    Proportional,
    Integral,
    Derivative,
}

// longer runs grow the record list on demand
const PREALLOCATED_RECORDS: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    dimension: usize,
    desired_position: NVec,
    records: Vec<HistoryRecord>,
}

impl History {
    pub(crate) fn with_capacity(desired_position: NVec, steps: usize) -> Self {
        Self {
            dimension: desired_position.len(),
            desired_position,
            records: Vec::with_capacity(steps.min(PREALLOCATED_RECORDS)),
        }
    }

    pub(crate) fn push(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn desired_position(&self) -> &NVec {
        &self.desired_position
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryRecord> {
        self.records.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.t).collect()
    }

    /// One axis of one series over the whole run
    ///
    /// # Panics
    /// Panics if `axis >= self.dimension()`
    pub fn axis_series(&self, axis: usize, series: Series) -> Vec<f64> {
        assert!(axis < self.dimension, "axis {axis} out of range for {} dimensions", self.dimension);
        self.records
            .iter()
            .map(|r| match series {
                Series::Position => r.position[axis],
                Series::NetForce => r.net_force[axis],
                Series::Proportional => r.p[axis],
                Series::Integral => r.i[axis],
                Series::Derivative => r.d[axis],
            })
            .collect()
    }

    pub fn final_position(&self) -> Option<&NVec> {
        self.records.last().map(|r| &r.position)
    }

    /// desired - final position, per axis
    pub fn final_error(&self) -> Option<NVec> {
        self.final_position().map(|x| &self.desired_position - x)
    }

    /// Write one CSV row per step: `t, x0.., f0.., p0.., i0.., d0..`
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["t".to_string()];
        for prefix in ["x", "f", "p", "i", "d"] {
            header.extend((0..self.dimension).map(|k| format!("{prefix}{k}")));
        }
        wtr.write_record(&header)?;

        for r in &self.records {
            let mut row = Vec::with_capacity(1 + 5 * self.dimension);
            row.push(r.t.to_string());
            for v in [&r.position, &r.net_force, &r.p, &r.i, &r.d] {
                row.extend(v.iter().map(|c| c.to_string()));
            }
            wtr.write_record(&row)?;
        }

        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_path(&self, path: impl AsRef<Path>) -> csv::Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryRecord;
    type IntoIter = std::slice::Iter<'a, HistoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
