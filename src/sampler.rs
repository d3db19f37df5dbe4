//! The public query: which image, or blended pair of images, a slideshow
//! shows at a given instant.
//!
//! Sampling is a pure function of the definition and the instant. Nothing
//! is cached between queries, so repeated and concurrent calls are safe
//! and always agree.

use chrono::NaiveDateTime;

use crate::cycle;
use crate::error::ScheduleError;
use crate::locator;
use crate::slideshow::{Entry, SlideshowDefinition};

/// What should be on screen at the sampled instant.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState<'a> {
    /// The query instant precedes the slideshow start. Not an error; the
    /// caller picks a policy (show nothing, or the first image early).
    NotStarted,
    /// A single image.
    Static { filename: &'a str },
    /// A linear blend between two images. `fraction` is the weight toward
    /// `to`: 0 right as the transition begins, approaching 1 just before
    /// the cut completes.
    Transition {
        from: &'a str,
        to: &'a str,
        fraction: f64,
    },
}

/// Resolve the display state of `definition` at `now` (local wall-clock).
pub fn sample<'a>(
    definition: &'a SlideshowDefinition,
    now: NaiveDateTime,
) -> Result<DisplayState<'a>, ScheduleError> {
    let position = cycle::position(definition, now)?;
    let Some(offset) = position.offset else {
        return Ok(DisplayState::NotStarted);
    };

    let located =
        locator::locate(definition.entries(), offset).ok_or(ScheduleError::DegenerateCycle)?;

    match &definition.entries()[located.index] {
        Entry::Static { filename, .. } => Ok(DisplayState::Static { filename }),
        Entry::Transition { from, to, duration } => {
            // A zero-duration transition is an instant cut to `to`.
            let fraction = if duration.is_zero() {
                1.0
            } else {
                located.offset.num_milliseconds() as f64 / duration.num_milliseconds() as f64
            };
            Ok(DisplayState::Transition { from, to, fraction })
        }
    }
}
