use itertools::Itertools;
use log::debug;

use crate::errors::*;
use crate::sampler::DecibelLookup;
use crate::utils;

/// Decibel range and resolution of a lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableParams {
    min_db: f64,
    max_db: f64,
    size: usize,
}

impl TableParams {
    pub fn new(min_db: f64, max_db: f64, size: usize) -> Result<TableParams, GenerationError> {
        range_check(min_db, max_db)?;
        let size = size_check(size)?;
        Ok(TableParams { min_db, max_db, size })
    }

    pub fn min_db(&self) -> f64 {
        self.min_db
    }

    pub fn max_db(&self) -> f64 {
        self.max_db
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn step(&self) -> f64 {
        (self.max_db - self.min_db) / (self.size - 1) as f64
    }

    pub fn decibels_at(&self, index: usize) -> f64 {
        self.min_db + index as f64 * self.step()
    }
}

impl Default for TableParams {
    fn default() -> Self {
        TableParams {
            min_db: crate::MIN_DB as f64,
            max_db: crate::MAX_DB as f64,
            size: crate::TABLE_SIZE,
        }
    }
}

/// Worst case deviation of the interpolated lookup from the exact curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorReport {
    pub max_abs_error: f64,
    pub max_rel_error: f64,
    pub worst_db: f64,
}

/// Gains sampled at every grid point of `TableParams`, kept in double
/// precision until they are emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    params: TableParams,
    entries: Vec<f64>,
}

impl Table {
    pub fn generate(params: TableParams) -> Table {
        let entries: Vec<f64> = (0..params.size)
            .map(|i| utils::dB_to_gain(params.decibels_at(i)))
            .collect();

        debug!("Generated {} gains from {} dB to {} dB, step {} dB",
               entries.len(), params.min_db, params.max_db, params.step());

        Table { params, entries }
    }

    pub fn params(&self) -> &TableParams {
        &self.params
    }

    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    /// `(decibels, gain)` for every entry in ascending order.
    pub fn samples<'a>(&'a self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.entries.iter().enumerate().map(move |(i, &gain)| (self.params.decibels_at(i), gain))
    }

    /// The entries at the precision they are stored in at runtime.
    pub fn to_f32(&self) -> Vec<f32> {
        self.entries.iter().map(|&gain| gain as f32).collect()
    }

    pub fn is_monotonic(&self) -> bool {
        self.to_f32().iter().tuple_windows().all(|(a, b)| a <= b)
    }

    /// Looks the stored table up at `oversampling` points per segment and
    /// compares against the exact gain of the same single precision input.
    pub fn measure_error(&self, oversampling: usize) -> ErrorReport {
        let data = self.to_f32();
        let lookup = DecibelLookup::new(self.params.min_db as f32, self.params.max_db as f32, &data);

        let points = (self.params.size - 1) * oversampling.max(1);
        let range = self.params.max_db - self.params.min_db;

        (0..=points)
            .map(|k| (self.params.min_db + range * k as f64 / points as f64) as f32)
            .fold(ErrorReport { max_abs_error: 0.0, max_rel_error: 0.0, worst_db: self.params.min_db },
                  |report, db| {
                      let exact = utils::dB_to_gain(db as f64);
                      let abs_error = (lookup.gain(db) as f64 - exact).abs();
                      let rel_error = abs_error / exact;
                      ErrorReport {
                          max_abs_error: report.max_abs_error.max(abs_error),
                          max_rel_error: report.max_rel_error.max(rel_error),
                          worst_db: if abs_error > report.max_abs_error { db as f64 } else { report.worst_db },
                      }
                  })
    }
}

pub fn generate_table(min_db: f64, max_db: f64, size: usize) -> Result<Table, GenerationError> {
    Ok(Table::generate(TableParams::new(min_db, max_db, size)?))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn reject_invalid_params() {
        assert_eq!(generate_table(12.0, -96.0, 2048), Err(GenerationError::invalid_range(12.0, -96.0)));
        assert_eq!(generate_table(0.0, 0.0, 2048), Err(GenerationError::invalid_range(0.0, 0.0)));
        assert_eq!(generate_table(-96.0, 12.0, 1), Err(GenerationError::invalid_size(1)));
        assert_eq!(generate_table(-96.0, 12.0, 0), Err(GenerationError::invalid_size(0)));
    }

    #[test]
    fn range_is_checked_before_size() {
        assert_eq!(generate_table(1.0, -1.0, 0), Err(GenerationError::invalid_range(1.0, -1.0)));
    }

    #[test]
    fn default_params() {
        let params = TableParams::default();
        assert_eq!(params, TableParams::new(-96.0, 12.0, 2048).unwrap());
        assert!((params.step() - 0.05276).abs() < 1e-5);
        assert_eq!(params.decibels_at(0), -96.0);
        assert!((params.decibels_at(2047) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn smallest_table() {
        let table = generate_table(-20.0, 0.0, 2).unwrap();
        assert_eq!(table.entries().len(), 2);
        assert!((table.entries()[0] - 0.1).abs() < 1e-12);
        assert_eq!(table.entries()[1], 1.0);
        assert_eq!(table.params().step(), 20.0);
    }

    #[test]
    fn entries_follow_curve() {
        let table = generate_table(-60.0, 0.0, 61).unwrap();
        for (db, gain) in table.samples() {
            assert_eq!(gain, utils::dB_to_gain(db));
        }
        let dbs: Vec<f64> = table.samples().map(|(db, _)| db).collect();
        assert_eq!(dbs.len(), 61);
        assert_eq!(dbs[0], -60.0);
        assert_eq!(dbs[20], -40.0);
        assert_eq!(dbs[60], 0.0);
    }

    #[test]
    fn default_table_boundaries() {
        let table = Table::generate(TableParams::default());
        let entries = table.entries();
        assert_eq!(entries.len(), 2048);
        assert!((entries[0] - 1.5849e-5).abs() < 1e-9);
        assert!((entries[2047] - 3.9811).abs() < 1e-4);
    }

    #[test]
    fn monotonic_and_positive() {
        let table = Table::generate(TableParams::default());
        assert!(table.is_monotonic());
        assert!(table.to_f32().iter().all(|&gain| gain > 0.0));

        let wide = generate_table(-700.0, 700.0, 4096).unwrap();
        assert!(wide.is_monotonic());
        assert!(wide.to_f32().iter().all(|&gain| gain > 0.0 && gain.is_finite()));
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_table(-96.0, 12.0, 2048).unwrap();
        let b = generate_table(-96.0, 12.0, 2048).unwrap();
        assert_eq!(a, b);
        assert!(a.to_f32().iter().zip(b.to_f32().iter()).all(|(x, y)| x.to_bits() == y.to_bits()));
    }

    #[test]
    fn default_table_error_bound() {
        let report = Table::generate(TableParams::default()).measure_error(16);
        assert!(report.max_abs_error < 1e-4, "{:?}", report);
        assert!(report.max_rel_error < 2e-5, "{:?}", report);
        assert!(report.worst_db > 0.0, "{:?}", report);
    }

    #[test]
    fn doubling_size_quarters_error() {
        let coarse = generate_table(-96.0, 12.0, 256).unwrap().measure_error(32);
        let fine = generate_table(-96.0, 12.0, 511).unwrap().measure_error(32);
        let ratio = coarse.max_rel_error / fine.max_rel_error;
        assert!(ratio > 3.5 && ratio < 4.5, "coarse {:?}, fine {:?}", coarse, fine);
    }
}
