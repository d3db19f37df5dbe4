//! Cycle arithmetic: total cycle duration and the offset of a query
//! instant within the looping sequence.

use chrono::{Duration, NaiveDateTime};

use crate::error::ScheduleError;
use crate::slideshow::SlideshowDefinition;

/// Where a query instant falls relative to the slideshow cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclePosition {
    /// Raw `now - start_time`. Negative when the query instant precedes
    /// the start; callers decide the pre-start policy, this value never
    /// guesses one for them.
    pub elapsed: Duration,
    /// Offset within one cycle, in `[0, cycle_length)`. `None` until the
    /// slideshow has started.
    pub offset: Option<Duration>,
}

impl CyclePosition {
    pub fn started(&self) -> bool {
        self.offset.is_some()
    }
}

/// Sum of all entry durations.
pub fn cycle_length(definition: &SlideshowDefinition) -> Duration {
    definition
        .entries()
        .iter()
        .fold(Duration::zero(), |total, entry| total + entry.duration())
}

/// Compute the cycle position of `now`.
///
/// Fails with [`ScheduleError::DegenerateCycle`] when the cycle length is
/// zero, since no offset within a zero-length cycle exists.
pub fn position(
    definition: &SlideshowDefinition,
    now: NaiveDateTime,
) -> Result<CyclePosition, ScheduleError> {
    let total = cycle_length(definition);
    if total <= Duration::zero() {
        return Err(ScheduleError::DegenerateCycle);
    }

    let elapsed = now - definition.start_time();
    if elapsed < Duration::zero() {
        return Ok(CyclePosition {
            elapsed,
            offset: None,
        });
    }

    // Integer milliseconds keep the modulo exact across many cycles.
    let offset_ms = elapsed
        .num_milliseconds()
        .rem_euclid(total.num_milliseconds());
    Ok(CyclePosition {
        elapsed,
        offset: Some(Duration::milliseconds(offset_ms)),
    })
}
