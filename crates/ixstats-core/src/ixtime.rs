//! The IxTime clock: the in-fiction calendar and time-scaling convention.
//!
//! In-game time runs faster than real time. A fixed real-world epoch maps
//! to a fixed in-game epoch, and in-game time advances at
//! `multiplier x real time` from there (4.0 by default: four in-game days
//! per real day).
//!
//! # Design Principles
//!
//! - In-game instants are always derived from a real instant and the
//!   anchor pair -- never stored independently. The real clock is the
//!   source of truth.
//! - Multiplier changes (including pause, multiplier 0) re-anchor the
//!   clock at the instant of the change, so in-game time already elapsed
//!   never rewinds. Ix-time is monotone non-decreasing in real time for
//!   any multiplier >= 0.
//! - All conversions use checked arithmetic and reject pre-epoch inputs.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// The default time-scaling multiplier: four in-game days per real day.
pub const DEFAULT_MULTIPLIER: f64 = 4.0;

/// Milliseconds in one in-game year (365.25 days).
const MS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Errors that can occur during IxTime operations.
#[derive(Debug, thiserror::Error)]
pub enum IxTimeError {
    /// The multiplier is not a finite non-negative number.
    #[error("invalid multiplier {value}: must be finite and >= 0")]
    InvalidMultiplier {
        /// The rejected multiplier value.
        value: f64,
    },

    /// A real instant before the clock's anchor was supplied.
    #[error("instant {instant} predates the clock anchor {anchor}")]
    PreAnchor {
        /// The rejected instant.
        instant: DateTime<Utc>,
        /// The anchor it must not precede.
        anchor: DateTime<Utc>,
    },

    /// A scaled duration exceeded the representable range.
    #[error("scaled duration overflow")]
    Overflow,

    /// The clock is paused, so in-game instants have no unique real
    /// counterpart.
    #[error("clock is paused: ix-time cannot be inverted")]
    NotInvertible,
}

/// The real-world instant that anchors the IxTime calendar.
fn real_epoch() -> DateTime<Utc> {
    // 2020-10-04T00:00:00Z; the components are valid by construction.
    Utc.with_ymd_and_hms(2020, 10, 4, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The in-game instant the real epoch maps to.
fn ix_epoch() -> DateTime<Utc> {
    // 2028-01-01T00:00:00Z; the components are valid by construction.
    Utc.with_ymd_and_hms(2028, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The IxTime clock.
///
/// Holds the base multiplier from configuration, an optional operator
/// override, and the anchor pair the current segment is computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct IxClock {
    /// The configured base multiplier.
    base_multiplier: f64,
    /// Operator override (admin speed change or pause), if any.
    override_multiplier: Option<f64>,
    /// Real instant the current segment began.
    anchor_real: DateTime<Utc>,
    /// In-game instant at `anchor_real`.
    anchor_ix: DateTime<Utc>,
}

impl IxClock {
    /// Create a clock with the given base multiplier, anchored at the
    /// calendar epochs.
    ///
    /// # Errors
    ///
    /// Returns [`IxTimeError::InvalidMultiplier`] if the multiplier is
    /// negative, NaN, or infinite.
    pub fn new(base_multiplier: f64) -> Result<Self, IxTimeError> {
        validate_multiplier(base_multiplier)?;
        Ok(Self {
            base_multiplier,
            override_multiplier: None,
            anchor_real: real_epoch(),
            anchor_ix: ix_epoch(),
        })
    }

    /// Create a clock from explicit parts (state restoration, tests).
    ///
    /// # Errors
    ///
    /// Returns [`IxTimeError::InvalidMultiplier`] if either multiplier is
    /// invalid.
    pub fn from_parts(
        base_multiplier: f64,
        override_multiplier: Option<f64>,
        anchor_real: DateTime<Utc>,
        anchor_ix: DateTime<Utc>,
    ) -> Result<Self, IxTimeError> {
        validate_multiplier(base_multiplier)?;
        if let Some(m) = override_multiplier {
            validate_multiplier(m)?;
        }
        Ok(Self {
            base_multiplier,
            override_multiplier,
            anchor_real,
            anchor_ix,
        })
    }

    /// The multiplier currently in effect (override wins over base).
    pub fn multiplier(&self) -> f64 {
        self.override_multiplier.unwrap_or(self.base_multiplier)
    }

    /// Whether the clock is paused (multiplier 0).
    pub fn is_paused(&self) -> bool {
        // Multipliers are validated non-negative, so <= 0 means exactly 0.
        self.multiplier() <= 0.0
    }

    /// The in-game instant corresponding to the given real instant.
    ///
    /// # Errors
    ///
    /// Returns [`IxTimeError::PreAnchor`] if `now` precedes the current
    /// anchor, or [`IxTimeError::Overflow`] if the scaled span cannot be
    /// represented.
    pub fn ix_time(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, IxTimeError> {
        if now < self.anchor_real {
            return Err(IxTimeError::PreAnchor {
                instant: now,
                anchor: self.anchor_real,
            });
        }
        let scaled = scale_duration(now - self.anchor_real, self.multiplier())?;
        self.anchor_ix
            .checked_add_signed(scaled)
            .ok_or(IxTimeError::Overflow)
    }

    /// The real instant corresponding to the given in-game instant.
    ///
    /// # Errors
    ///
    /// Returns [`IxTimeError::NotInvertible`] while paused,
    /// [`IxTimeError::PreAnchor`] for instants before the current anchor,
    /// or [`IxTimeError::Overflow`] on unrepresentable spans.
    pub fn real_time(&self, ix: DateTime<Utc>) -> Result<DateTime<Utc>, IxTimeError> {
        let multiplier = self.multiplier();
        if multiplier <= 0.0 {
            return Err(IxTimeError::NotInvertible);
        }
        if ix < self.anchor_ix {
            return Err(IxTimeError::PreAnchor {
                instant: ix,
                anchor: self.anchor_ix,
            });
        }
        let scaled = scale_duration(ix - self.anchor_ix, multiplier.recip())?;
        self.anchor_real
            .checked_add_signed(scaled)
            .ok_or(IxTimeError::Overflow)
    }

    /// Apply an operator override, re-anchoring so elapsed in-game time is
    /// preserved across the change.
    ///
    /// # Errors
    ///
    /// Returns [`IxTimeError::InvalidMultiplier`] for invalid values, or a
    /// conversion error if `at` precedes the current anchor.
    pub fn set_override(&mut self, multiplier: f64, at: DateTime<Utc>) -> Result<(), IxTimeError> {
        validate_multiplier(multiplier)?;
        self.reanchor(at)?;
        self.override_multiplier = Some(multiplier);
        Ok(())
    }

    /// Remove the operator override and return to the base multiplier.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if `at` precedes the current anchor.
    pub fn clear_override(&mut self, at: DateTime<Utc>) -> Result<(), IxTimeError> {
        self.reanchor(at)?;
        self.override_multiplier = None;
        Ok(())
    }

    /// Pause the clock (override multiplier 0).
    ///
    /// # Errors
    ///
    /// Returns a conversion error if `at` precedes the current anchor.
    pub fn pause(&mut self, at: DateTime<Utc>) -> Result<(), IxTimeError> {
        self.set_override(0.0, at)
    }

    /// The in-game calendar year at the given real instant.
    ///
    /// # Errors
    ///
    /// Propagates conversion errors from [`IxClock::ix_time`].
    pub fn current_year(&self, now: DateTime<Utc>) -> Result<i32, IxTimeError> {
        Ok(self.ix_time(now)?.year())
    }

    /// Elapsed in-game years between two real instants, as a fraction.
    ///
    /// # Errors
    ///
    /// Propagates conversion errors; returns [`IxTimeError::PreAnchor`]
    /// if `to` precedes `from`.
    pub fn elapsed_ix_years(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<f64, IxTimeError> {
        if to < from {
            return Err(IxTimeError::PreAnchor {
                instant: to,
                anchor: from,
            });
        }
        let span = self.ix_time(to)? - self.ix_time(from)?;
        Ok(duration_as_ms(span) / MS_PER_YEAR)
    }

    /// Render an in-game instant in the dashboard's display format,
    /// e.g. `"12 January 2035, 14:05 ILT"`.
    pub fn format_ix(ix: DateTime<Utc>) -> String {
        ix.format("%-d %B %Y, %H:%M ILT").to_string()
    }

    /// Re-anchor the clock at the given real instant, freezing the
    /// in-game time elapsed so far into the anchor pair.
    fn reanchor(&mut self, at: DateTime<Utc>) -> Result<(), IxTimeError> {
        let ix_at = self.ix_time(at)?;
        self.anchor_real = at;
        self.anchor_ix = ix_at;
        Ok(())
    }
}

impl Default for IxClock {
    fn default() -> Self {
        Self {
            base_multiplier: DEFAULT_MULTIPLIER,
            override_multiplier: None,
            anchor_real: real_epoch(),
            anchor_ix: ix_epoch(),
        }
    }
}

/// Reject NaN, infinite, and negative multipliers.
fn validate_multiplier(value: f64) -> Result<(), IxTimeError> {
    if !value.is_finite() || value < 0.0 {
        return Err(IxTimeError::InvalidMultiplier { value });
    }
    Ok(())
}

/// Scale a non-negative duration by a non-negative factor, checked.
fn scale_duration(elapsed: Duration, factor: f64) -> Result<Duration, IxTimeError> {
    let ms = elapsed.num_milliseconds();
    if ms < 0 {
        return Err(IxTimeError::Overflow);
    }
    // Millisecond spans within the calendar's era fit comfortably in
    // f64's 53-bit mantissa.
    #[allow(clippy::cast_precision_loss)]
    let scaled = (ms as f64) * factor;
    if !scaled.is_finite() || scaled < 0.0 || scaled >= 9.0e18 {
        return Err(IxTimeError::Overflow);
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(Duration::milliseconds(scaled as i64))
}

/// A duration's length in milliseconds as a float.
fn duration_as_ms(span: Duration) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let ms = span.num_milliseconds() as f64;
    ms
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    /// Helper: a real instant a given number of whole days after the epoch.
    fn epoch_plus_days(days: i64) -> DateTime<Utc> {
        real_epoch() + Duration::days(days)
    }

    #[test]
    fn epoch_maps_to_epoch() {
        let clock = IxClock::default();
        let ix = clock.ix_time(real_epoch()).unwrap();
        assert_eq!(ix, ix_epoch());
    }

    #[test]
    fn one_real_day_is_four_ix_days() {
        let clock = IxClock::default();
        let ix = clock.ix_time(epoch_plus_days(1)).unwrap();
        assert_eq!(ix - ix_epoch(), Duration::days(4));
    }

    #[test]
    fn conversion_round_trips() {
        let clock = IxClock::default();
        let real = epoch_plus_days(100);
        let ix = clock.ix_time(real).unwrap();
        assert_eq!(clock.real_time(ix).unwrap(), real);
    }

    #[test]
    fn pre_epoch_instants_are_rejected() {
        let clock = IxClock::default();
        let before = real_epoch() - Duration::days(1);
        assert!(clock.ix_time(before).is_err());
    }

    #[test]
    fn invalid_multipliers_are_rejected() {
        assert!(IxClock::new(f64::NAN).is_err());
        assert!(IxClock::new(f64::INFINITY).is_err());
        assert!(IxClock::new(-1.0).is_err());
        assert!(IxClock::new(0.0).is_ok());
    }

    #[test]
    fn override_changes_speed_without_rewinding() {
        let mut clock = IxClock::default();
        let change_at = epoch_plus_days(10);
        let ix_before = clock.ix_time(change_at).unwrap();

        // Double speed from day 10.
        clock.set_override(8.0, change_at).unwrap();
        assert_eq!(clock.multiplier(), 8.0);

        // The instant of the change maps to the same ix time.
        assert_eq!(clock.ix_time(change_at).unwrap(), ix_before);

        // One more real day now advances eight ix days.
        let later = change_at + Duration::days(1);
        assert_eq!(clock.ix_time(later).unwrap() - ix_before, Duration::days(8));
    }

    #[test]
    fn pause_freezes_ix_time() {
        let mut clock = IxClock::default();
        let pause_at = epoch_plus_days(5);
        let frozen = clock.ix_time(pause_at).unwrap();

        clock.pause(pause_at).unwrap();
        assert!(clock.is_paused());

        let later = pause_at + Duration::days(30);
        assert_eq!(clock.ix_time(later).unwrap(), frozen);

        // A paused clock cannot be inverted.
        assert!(matches!(
            clock.real_time(frozen + Duration::days(1)),
            Err(IxTimeError::NotInvertible)
        ));
    }

    #[test]
    fn resume_after_pause_continues_forward() {
        let mut clock = IxClock::default();
        let pause_at = epoch_plus_days(5);
        let frozen = clock.ix_time(pause_at).unwrap();
        clock.pause(pause_at).unwrap();

        let resume_at = pause_at + Duration::days(3);
        clock.clear_override(resume_at).unwrap();
        assert_eq!(clock.multiplier(), DEFAULT_MULTIPLIER);

        // Ix time picks up from the frozen instant, not from where an
        // unpaused clock would have been.
        let later = resume_at + Duration::days(1);
        assert_eq!(clock.ix_time(later).unwrap() - frozen, Duration::days(4));
    }

    #[test]
    fn monotone_across_override_changes() {
        let mut clock = IxClock::default();
        let mut previous = clock.ix_time(real_epoch()).unwrap();

        clock.set_override(0.5, epoch_plus_days(1)).unwrap();
        let t1 = clock.ix_time(epoch_plus_days(2)).unwrap();
        assert!(t1 >= previous);
        previous = t1;

        clock.set_override(10.0, epoch_plus_days(3)).unwrap();
        let t2 = clock.ix_time(epoch_plus_days(4)).unwrap();
        assert!(t2 >= previous);
    }

    #[test]
    fn elapsed_ix_years_scales_with_multiplier() {
        let clock = IxClock::default();
        // 365.25 real days at 4x = 4 ix years.
        let from = real_epoch();
        let to = from + Duration::hours(365 * 24 + 6);
        let years = clock.elapsed_ix_years(from, to).unwrap();
        assert!((years - 4.0).abs() < 1e-9);
    }

    #[test]
    fn current_year_advances() {
        let clock = IxClock::default();
        assert_eq!(clock.current_year(real_epoch()).unwrap(), 2028);
        // 2028 is a leap year: 366 ix days at 4x is 91.5 real days.
        let later = real_epoch() + Duration::hours(2200);
        assert_eq!(clock.current_year(later).unwrap(), 2029);
    }

    #[test]
    fn format_is_dashboard_friendly() {
        let ix = Utc.with_ymd_and_hms(2035, 1, 12, 14, 5, 0).single().unwrap();
        assert_eq!(IxClock::format_ix(ix), "12 January 2035, 14:05 ILT");
    }

    #[test]
    fn from_parts_restores_state() {
        let anchor_real = epoch_plus_days(50);
        let anchor_ix = ix_epoch() + Duration::days(200);
        let clock = IxClock::from_parts(4.0, Some(2.0), anchor_real, anchor_ix).unwrap();
        assert_eq!(clock.multiplier(), 2.0);
        assert_eq!(clock.ix_time(anchor_real).unwrap(), anchor_ix);
    }
}
