//! Slideshow data model: start time, playback entries, and the wallpaper
//! record wrapping them.
//!
//! A [`SlideshowDefinition`] is built once by whatever parses the on-disk
//! format and is immutable afterwards, so any number of concurrent callers
//! may sample it without coordination.

use std::path::PathBuf;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::DefinitionError;

/// Raw local wall-clock start fields, exactly as the source format carries
/// them. Seconds are not part of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl StartTime {
    /// Resolve the fields into a local wall-clock timestamp.
    /// Returns `None` for calendar-invalid fields.
    pub fn resolve(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, 0)
    }
}

/// One step of the playback sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A fixed image shown for `duration`.
    Static { filename: String, duration: Duration },
    /// A linear cross-fade from one image to another over `duration`.
    Transition {
        from: String,
        to: String,
        duration: Duration,
    },
}

impl Entry {
    pub fn duration(&self) -> Duration {
        match self {
            Entry::Static { duration, .. } => *duration,
            Entry::Transition { duration, .. } => *duration,
        }
    }
}

/// A parsed timed-wallpaper slideshow: when it conceptually began, and the
/// ordered entries that loop forever after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowDefinition {
    start_time: NaiveDateTime,
    entries: Vec<Entry>,
}

impl SlideshowDefinition {
    /// Build a definition, rejecting malformed input up front: an empty
    /// entry list, a negative duration, or an empty filename.
    pub fn new(
        start_time: NaiveDateTime,
        entries: Vec<Entry>,
    ) -> Result<Self, DefinitionError> {
        if entries.is_empty() {
            return Err(DefinitionError::NoEntries);
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.duration() < Duration::zero() {
                return Err(DefinitionError::NegativeDuration { index });
            }
            let blank = match entry {
                Entry::Static { filename, .. } => filename.is_empty(),
                Entry::Transition { from, to, .. } => from.is_empty() || to.is_empty(),
            };
            if blank {
                return Err(DefinitionError::EmptyFilename { index });
            }
        }
        Ok(Self {
            start_time,
            entries,
        })
    }

    /// Build a definition from raw start fields as parsed out of the
    /// source format.
    pub fn from_start_fields(
        start: StartTime,
        entries: Vec<Entry>,
    ) -> Result<Self, DefinitionError> {
        let start_time = start.resolve().ok_or(DefinitionError::InvalidStartTime)?;
        Self::new(start_time, entries)
    }

    /// Local wall-clock instant the slideshow conceptually began.
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Entries in playback order. The sequence is cyclic: after the last
    /// entry, playback returns to the first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Every referenced filename, in entry order, first occurrence wins.
    /// Collaborators use this for pre-fetching; the scheduler itself never
    /// touches image bytes.
    pub fn images(&self) -> Vec<&str> {
        let mut filenames: Vec<&str> = Vec::new();
        for entry in &self.entries {
            match entry {
                Entry::Static { filename, .. } => push_unique(&mut filenames, filename),
                Entry::Transition { from, to, .. } => {
                    push_unique(&mut filenames, from);
                    push_unique(&mut filenames, to);
                }
            }
        }
        filenames
    }
}

fn push_unique<'a>(filenames: &mut Vec<&'a str>, filename: &'a str) {
    if !filenames.contains(&filename) {
        filenames.push(filename);
    }
}

/// A timed wallpaper as discovered on disk: the collection it belongs to,
/// the path of its definition file, and the parsed definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedWallpaper {
    /// Name of the collection this wallpaper belongs to, usually derived
    /// from the directory containing the definition file.
    pub collection_name: String,
    /// Full path to the definition file.
    pub path: PathBuf,
    pub definition: SlideshowDefinition,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 10, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn static_entry(filename: &str, secs: i64) -> Entry {
        Entry::Static {
            filename: filename.to_string(),
            duration: Duration::seconds(secs),
        }
    }

    fn transition(from: &str, to: &str, secs: i64) -> Entry {
        Entry::Transition {
            from: from.to_string(),
            to: to.to_string(),
            duration: Duration::seconds(secs),
        }
    }

    #[test]
    fn rejects_empty_entry_list() {
        let err = SlideshowDefinition::new(noon(), Vec::new()).unwrap_err();
        assert_eq!(err, DefinitionError::NoEntries);
    }

    #[test]
    fn rejects_negative_duration() {
        let entries = vec![static_entry("a.png", 10), static_entry("b.png", -1)];
        let err = SlideshowDefinition::new(noon(), entries).unwrap_err();
        assert_eq!(err, DefinitionError::NegativeDuration { index: 1 });
    }

    #[test]
    fn rejects_empty_filename() {
        let entries = vec![static_entry("a.png", 10), transition("a.png", "", 5)];
        let err = SlideshowDefinition::new(noon(), entries).unwrap_err();
        assert_eq!(err, DefinitionError::EmptyFilename { index: 1 });
    }

    #[test]
    fn rejects_invalid_start_fields() {
        let start = StartTime {
            year: 2022,
            month: 13,
            day: 1,
            hour: 0,
            minute: 0,
        };
        let err =
            SlideshowDefinition::from_start_fields(start, vec![static_entry("a.png", 10)])
                .unwrap_err();
        assert_eq!(err, DefinitionError::InvalidStartTime);
    }

    #[test]
    fn start_fields_resolve_to_local_timestamp() {
        let start = StartTime {
            year: 2022,
            month: 10,
            day: 1,
            hour: 12,
            minute: 0,
        };
        let def =
            SlideshowDefinition::from_start_fields(start, vec![static_entry("a.png", 10)])
                .unwrap();
        assert_eq!(def.start_time(), noon());
    }

    #[test]
    fn images_are_deduplicated_in_entry_order() {
        let entries = vec![
            static_entry("a.png", 600),
            transition("a.png", "b.png", 120),
            static_entry("b.png", 600),
            transition("b.png", "a.png", 120),
        ];
        let def = SlideshowDefinition::new(noon(), entries).unwrap();
        assert_eq!(def.images(), vec!["a.png", "b.png"]);
    }
}
