//! `timedwall` — timed wallpaper slideshow scheduling.
//!
//! Given a parsed slideshow definition (a start time plus an ordered,
//! looping sequence of static display periods and image-to-image
//! cross-fades), [`sample`] resolves which image — or which blended pair
//! of images, with a blend fraction — belongs on screen at any local
//! wall-clock instant:
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use timedwall::{sample, DisplayState, Entry, SlideshowDefinition};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 6, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let definition = SlideshowDefinition::new(
//!     start,
//!     vec![
//!         Entry::Static {
//!             filename: "day.png".to_string(),
//!             duration: Duration::hours(12),
//!         },
//!         Entry::Transition {
//!             from: "day.png".to_string(),
//!             to: "night.png".to_string(),
//!             duration: Duration::minutes(30),
//!         },
//!     ],
//! )?;
//!
//! let state = sample(&definition, start + Duration::hours(3))?;
//! assert_eq!(state, DisplayState::Static { filename: "day.png" });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The crate also ships the `vram` binary, which reports the minimum
//! amount of VRAM across the machine's GPUs via [`gpu`].

pub mod cycle;
pub mod error;
pub mod gpu;
pub mod locator;
pub mod report;
pub mod sampler;
pub mod slideshow;

pub use error::{DefinitionError, GpuError, ScheduleError};
pub use sampler::{DisplayState, sample};
pub use slideshow::{Entry, SlideshowDefinition, StartTime, TimedWallpaper};
