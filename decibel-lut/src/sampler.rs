/// Linear interpolating lookup over gains sampled at uniform decibel steps.
///
/// Entry `i` of `data` holds the gain at `min_db + i * step` with
/// `step = (max_db - min_db) / (data.len() - 1)`. Lookups never allocate,
/// block or loop, so they are safe to call from the audio thread.
#[derive(Clone, Copy)]
pub struct DecibelLookup<'a> {
    min_db: f32,
    max_db: f32,
    steps_per_db: f32,
    data: &'a [f32],
}

impl<'a> DecibelLookup<'a> {
    pub const fn new(min_db: f32, max_db: f32, data: &'a [f32]) -> Self {
        assert!(data.len() >= 2, "decibel lookup needs at least two entries");
        assert!(min_db < max_db, "decibel lookup range is flipped");

        DecibelLookup {
            min_db,
            max_db,
            steps_per_db: (data.len() - 1) as f32 / (max_db - min_db),
            data,
        }
    }

    pub fn min_db(&self) -> f32 {
        self.min_db
    }

    pub fn max_db(&self) -> f32 {
        self.max_db
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    /// Gain for `db`, saturating to the first and last entry outside of the
    /// table's range. `db` must be finite.
    #[inline]
    pub fn gain(&self, db: f32) -> f32 {
        debug_assert!(db.is_finite(), "non finite decibel value {}", db);

        let last = self.data.len() - 1;
        if db <= self.min_db {
            return self.data[0];
        }
        if db >= self.max_db {
            return self.data[last];
        }

        let pos = (db - self.min_db) * self.steps_per_db;
        // rounding can push pos onto the last entry just below max_db
        let i0 = (pos as usize).min(last);
        let i1 = (i0 + 1).min(last);
        let frac = pos - i0 as f32;

        self.data[i0] * (1.0 - frac) + self.data[i1] * frac
    }

    /// Like `gain()` but everything below the table's range is silent.
    #[inline]
    pub fn gain_or_silence(&self, db: f32) -> f32 {
        if db < self.min_db {
            0.0
        } else {
            self.gain(db)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {

    use super::*;

    pub(crate) fn f32_eq(a: f32, b: f32) -> bool {
        if (a - b).abs() > f32::EPSILON {
            println!("float equivalence check failed, a: {}, b: {}", a, b);
            false
        } else {
            true
        }
    }

    const RAMP: [f32; 5] = [0.0, 1.0, 2.0, 4.0, 8.0];

    fn ramp() -> DecibelLookup<'static> {
        DecibelLookup::new(-40.0, 0.0, &RAMP)
    }

    #[test]
    fn grid_points_hit_entries() {
        let lookup = ramp();
        assert!(f32_eq(lookup.gain(-40.0), 0.0));
        assert!(f32_eq(lookup.gain(-30.0), 1.0));
        assert!(f32_eq(lookup.gain(-20.0), 2.0));
        assert!(f32_eq(lookup.gain(-10.0), 4.0));
        assert!(f32_eq(lookup.gain(0.0), 8.0));
    }

    #[test]
    fn interpolate_between_entries() {
        let lookup = ramp();
        assert!(f32_eq(lookup.gain(-35.0), 0.5));
        assert!(f32_eq(lookup.gain(-15.0), 3.0));
        assert!(f32_eq(lookup.gain(-7.5), 5.0));
        assert!(f32_eq(lookup.gain(-2.5), 7.0));
    }

    #[test]
    fn clamp_out_of_range() {
        let lookup = ramp();
        assert!(f32_eq(lookup.gain(-41.0), 0.0));
        assert!(f32_eq(lookup.gain(-1e30), 0.0));
        assert!(f32_eq(lookup.gain(0.5), 8.0));
        assert!(f32_eq(lookup.gain(1e30), 8.0));
    }

    #[test]
    fn silence_below_floor() {
        const GAINS: [f32; 3] = [0.25, 0.5, 1.0];
        let lookup = DecibelLookup::new(-12.0, 0.0, &GAINS);
        assert!(f32_eq(lookup.gain_or_silence(-12.001), 0.0));
        assert!(f32_eq(lookup.gain_or_silence(-500.0), 0.0));
        assert!(f32_eq(lookup.gain_or_silence(-12.0), 0.25));
        assert!(f32_eq(lookup.gain_or_silence(-3.0), 0.75));
        assert!(f32_eq(lookup.gain_or_silence(3.0), 1.0));
    }

    #[test]
    fn two_entry_table() {
        const GAINS: [f32; 2] = [1.0, 3.0];
        let lookup = DecibelLookup::new(0.0, 1.0, &GAINS);
        assert!(f32_eq(lookup.gain(0.0), 1.0));
        assert!(f32_eq(lookup.gain(0.5), 2.0));
        assert!(f32_eq(lookup.gain(1.0), 3.0));
        assert!(f32_eq(lookup.gain(0.25), 1.5));
    }

    #[test]
    fn continuous_across_segments() {
        let lookup = ramp();
        for &db in &[-30.0, -20.0, -10.0] {
            let eps = 1e-4;
            let below = lookup.gain(db - eps);
            let above = lookup.gain(db + eps);
            assert!((above - below).abs() < 1e-3, "jump at {} dB: {} -> {}", db, below, above);
            assert!(below <= above);
        }
    }

    #[test]
    fn accessors() {
        let lookup = ramp();
        assert_eq!(lookup.min_db(), -40.0);
        assert_eq!(lookup.max_db(), 0.0);
        assert_eq!(lookup.len(), 5);
        assert!(!lookup.is_empty());
        assert_eq!(lookup.data(), &RAMP[..]);
    }

    #[test]
    #[should_panic]
    fn reject_flipped_range() {
        DecibelLookup::new(0.0, -40.0, &RAMP);
    }

    #[test]
    #[should_panic]
    fn reject_single_entry() {
        DecibelLookup::new(-40.0, 0.0, &RAMP[..1]);
    }
}
