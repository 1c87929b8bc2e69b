//! Decibel to linear gain conversion without calling `powf()` on the audio thread.
//!
//! The gain curve `10^(dB/20)` is sampled offline at `TABLE_SIZE` uniform
//! steps between `MIN_DB` and `MAX_DB` (see `table` and the `decibel-lut-gen`
//! tool) and embedded as a constant. At runtime `gain_from_decibels()`
//! interpolates linearly between the two nearest entries.
//!
//! 2048 entries take 8 KiB, two memory pages, and put the grid points
//! 0.0528 dB apart. The interpolation error of an exponential shrinks with
//! the square of the step, so the worst relative error is about 4.6e-6 and
//! the worst absolute error, just below `MAX_DB`, about 1.8e-5. Halving the
//! table would quadruple both.

extern crate itertools;
extern crate log;

pub mod emit;
pub mod errors;
pub mod sampler;
pub mod table;
pub mod utils;

mod lut_data;

pub use errors::{GenerationError, InvalidRangeError, InvalidSizeError};
pub use sampler::DecibelLookup;
pub use table::{generate_table, ErrorReport, Table, TableParams};

pub const MIN_DB: f32 = -96.0;
pub const MAX_DB: f32 = 12.0;
pub const TABLE_SIZE: usize = 2048;

static DB_LUT_DATA: [f32; TABLE_SIZE] = lut_data::DB_LUT_DATA;

pub static DB_LOOKUP: DecibelLookup<'static> = DecibelLookup::new(MIN_DB, MAX_DB, &DB_LUT_DATA);

/// Linear gain of `db`, clamped to the gains of `MIN_DB` and `MAX_DB`.
#[inline]
pub fn gain_from_decibels(db: f32) -> f32 {
    DB_LOOKUP.gain(db)
}

/// Linear gain of `db`, but silence below `MIN_DB`.
#[inline]
pub fn gain_from_decibels_or_silence(db: f32) -> f32 {
    DB_LOOKUP.gain_or_silence(db)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sampler::tests::f32_eq;

    use rand::Rng;
    use std::thread;

    fn exact(db: f32) -> f64 {
        utils::dB_to_gain(db as f64)
    }

    #[test]
    fn embedded_table_is_current() {
        let table = Table::generate(TableParams::default());
        assert_eq!(emit::table_source(&table, "DB_LUT_DATA"), include_str!("lut_data.rs"));
        assert_eq!(table.to_f32().as_slice(), &DB_LUT_DATA[..]);
    }

    #[test]
    fn embedded_table_is_monotonic() {
        assert!(DB_LUT_DATA[0] > 0.0);
        for i in 1..TABLE_SIZE {
            assert!(DB_LUT_DATA[i - 1] <= DB_LUT_DATA[i], "not monotonic at {}", i);
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(gain_from_decibels(MIN_DB), DB_LUT_DATA[0]);
        assert_eq!(gain_from_decibels(MAX_DB), DB_LUT_DATA[TABLE_SIZE - 1]);
        assert!((DB_LUT_DATA[0] - 1.5849e-5).abs() < 1e-9);
        assert!((DB_LUT_DATA[TABLE_SIZE - 1] - 3.9811).abs() < 1e-4);
    }

    #[test]
    fn unity_gain() {
        assert!((gain_from_decibels(0.0) - 1.0).abs() < 1e-3);
        assert!((gain_from_decibels(0.0) - 1.0).abs() < 1e-5);
        assert!((gain_from_decibels(-6.0) - 0.501_187).abs() < 1e-5);
    }

    #[test]
    fn clamping() {
        assert!(f32_eq(gain_from_decibels(MIN_DB - 1000.0), gain_from_decibels(MIN_DB)));
        assert!(f32_eq(gain_from_decibels(MAX_DB + 1000.0), gain_from_decibels(MAX_DB)));
        assert!(f32_eq(gain_from_decibels(f32::MIN), DB_LUT_DATA[0]));
        assert!(f32_eq(gain_from_decibels(f32::MAX), DB_LUT_DATA[TABLE_SIZE - 1]));

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let below = rng.gen_range(-1e6, MIN_DB);
            let above = rng.gen_range(MAX_DB, 1e6);
            assert_eq!(gain_from_decibels(below), DB_LUT_DATA[0]);
            assert_eq!(gain_from_decibels(above), DB_LUT_DATA[TABLE_SIZE - 1]);
        }
    }

    #[test]
    fn silence_below_floor() {
        assert_eq!(gain_from_decibels_or_silence(-200.0), 0.0);
        assert_eq!(gain_from_decibels_or_silence(MIN_DB - 0.01), 0.0);
        assert_eq!(gain_from_decibels_or_silence(MIN_DB), DB_LUT_DATA[0]);
        assert_eq!(gain_from_decibels_or_silence(-20.0), gain_from_decibels(-20.0));
        assert_eq!(gain_from_decibels_or_silence(100.0), DB_LUT_DATA[TABLE_SIZE - 1]);
    }

    #[test]
    fn continuous_at_grid_points() {
        let step = (MAX_DB - MIN_DB) / (TABLE_SIZE - 1) as f32;
        for &i in &[1usize, 10, 500, 1000, 1819, 2000, 2046] {
            let db = MIN_DB + i as f32 * step;
            let eps = 1e-3;
            let below = gain_from_decibels(db - eps);
            let above = gain_from_decibels(db + eps);
            assert!(below < above, "{} dB: {} >= {}", db, below, above);
            assert!((above as f64 - below as f64) < 3.0 * exact(db) * 0.1152 * eps as f64,
                    "jump at {} dB: {} -> {}", db, below, above);
        }
    }

    #[test]
    fn dense_accuracy() {
        let points = 200_000;
        let max_error = (0..=points)
            .map(|k| MIN_DB + (MAX_DB - MIN_DB) * k as f32 / points as f32)
            .map(|db| (gain_from_decibels(db) as f64 - exact(db)).abs())
            .fold(0.0, f64::max);
        assert!(max_error < 1e-4, "max error {}", max_error);
    }

    #[test]
    fn random_accuracy() {
        let mut rng = rand::thread_rng();
        for _ in 0..100_000 {
            let db: f32 = rng.gen_range(MIN_DB, MAX_DB);
            let gain = gain_from_decibels(db) as f64;
            assert!((gain - exact(db)).abs() / exact(db) < 2e-5, "{} dB: {} vs {}", db, gain, exact(db));
        }
    }

    #[test]
    fn monotonic_lookup() {
        let mut last = 0.0;
        let mut db = MIN_DB - 1.0;
        while db < MAX_DB + 1.0 {
            let gain = gain_from_decibels(db);
            assert!(gain >= last, "{} dB: {} < {}", db, gain, last);
            last = gain;
            db += 0.001;
        }
    }

    #[test]
    fn concurrent_lookups() {
        let handles: Vec<_> = (0..4)
            .map(|t| thread::spawn(move || {
                (0..10_000).map(|k| gain_from_decibels(-96.0 + (k * 4 + t) as f32 * 0.0027)).sum::<f32>()
            }))
            .collect();
        let single: f32 = (0..4)
            .map(|t| (0..10_000).map(|k| gain_from_decibels(-96.0 + (k * 4 + t) as f32 * 0.0027)).sum::<f32>())
            .sum();
        let threaded: f32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(single, threaded);
    }
}
