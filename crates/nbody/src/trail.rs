//! Fixed-capacity position history for drawing orbit trails
//!
//! Each body owns a ring buffer of `MAX_HISTORY` samples stored as two
//! parallel coordinate buffers. Slots that were never written hold `NaN`
//! and are reported as `None`, so a renderer never joins a real sample to
//! an empty slot.
//!
//! Sampling is adaptive: the interval shrinks as speed grows, so points end
//! up roughly evenly spaced along the path instead of evenly spaced in time.

use nalgebra::Point2;

/// Maximum number of points kept in a trail
pub const MAX_HISTORY: usize = 150;

/// Base number of steps between samples at unit speed
pub const TRAIL_SAMPLE_STEPS: f64 = 1.0;

/// Speed scaling applied before rounding (AU/year)
pub const TRAIL_SPEED_FACTOR: f64 = 2.0;

/// Global stretch applied to the sampling interval
pub const AMPLIFY_TRAIL: f64 = 10.0;

const UNWRITTEN: f64 = f64::NAN;

/// Number of recorded steps between two samples for a body moving at `speed`.
///
/// A body at rest gets an interval of `u64::MAX` and is effectively never
/// sampled.
///
/// # Examples
///
/// ```
/// use nbody::trail::sample_interval;
///
/// // Earth moves at ~2π AU/year: round(2 / 6.28) = 0 -> clamped to 1 -> x10
/// assert_eq!(sample_interval(6.28), 10);
/// // Slow outer planet at 0.5 AU/year: round(4) x10
/// assert_eq!(sample_interval(0.5), 40);
/// ```
pub fn sample_interval(speed: f64) -> u64 {
    let base = (TRAIL_SAMPLE_STEPS / speed * TRAIL_SPEED_FACTOR)
        .round()
        .max(1.0);
    // `as` saturates: +inf becomes u64::MAX
    ((base * AMPLIFY_TRAIL).round() as u64).max(1)
}

/// Ring buffer of past positions with a write cursor
#[derive(Debug, Clone)]
pub struct Trail {
    xs: Box<[f64]>,
    ys: Box<[f64]>,
    cursor: usize,
    step_counter: u64,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            xs: vec![UNWRITTEN; MAX_HISTORY].into_boxed_slice(),
            ys: vec![UNWRITTEN; MAX_HISTORY].into_boxed_slice(),
            cursor: 0,
            step_counter: 0,
        }
    }

    /// Registers one integration step and samples `position` when the
    /// adaptive interval is due.
    ///
    /// Returns `true` if a sample was written.
    pub fn record(&mut self, position: Point2<f64>, speed: f64) -> bool {
        self.step_counter += 1;

        if self.step_counter % sample_interval(speed) != 0 {
            return false;
        }

        self.xs[self.cursor] = position.x;
        self.ys[self.cursor] = position.y;
        self.cursor = (self.cursor + 1) % MAX_HISTORY;
        true
    }

    /// Forgets every sample. Buffers are refilled in place, never reallocated.
    pub fn clear(&mut self) {
        self.xs.fill(UNWRITTEN);
        self.ys.fill(UNWRITTEN);
        self.cursor = 0;
        self.step_counter = 0;
    }

    /// Slot the next sample will be written to
    pub fn history_index(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    /// Raw x buffer, `NaN` marks unwritten slots
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Raw y buffer, `NaN` marks unwritten slots
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Sample stored in `slot`, if that slot has been written
    pub fn get(&self, slot: usize) -> Option<Point2<f64>> {
        let (x, y) = (*self.xs.get(slot)?, *self.ys.get(slot)?);
        if x.is_nan() || y.is_nan() {
            None
        } else {
            Some(Point2::new(x, y))
        }
    }

    /// Number of written slots
    pub fn len(&self) -> usize {
        self.xs.iter().filter(|x| !x.is_nan()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot contents ordered oldest → newest, including unwritten slots
    fn chronological(&self) -> impl Iterator<Item = Option<Point2<f64>>> + '_ {
        (self.cursor..self.capacity())
            .chain(0..self.cursor)
            .map(move |slot| self.get(slot))
    }

    /// Written samples, oldest first
    pub fn points(&self) -> impl Iterator<Item = Point2<f64>> + '_ {
        self.chronological().flatten()
    }

    /// Line segments between consecutive written samples, oldest first.
    ///
    /// A segment is only produced when both ends hold data.
    pub fn segments(&self) -> Vec<(Point2<f64>, Point2<f64>)> {
        let slots: Vec<Option<Point2<f64>>> = self.chronological().collect();
        slots
            .windows(2)
            .filter_map(|pair| match (pair[0], pair[1]) {
                (Some(a), Some(b)) => Some((a, b)),
                _ => None,
            })
            .collect()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
