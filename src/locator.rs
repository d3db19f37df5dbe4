//! Maps an in-cycle offset to the entry that covers it.

use chrono::Duration;

use crate::slideshow::Entry;

/// An entry picked for an offset, with the offset's position inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub index: usize,
    pub offset: Duration,
}

/// Walk the entries in playback order and pick the one whose half-open
/// range `[running, running + duration)` contains `offset`.
///
/// The half-open ranges make boundaries unambiguous: an offset landing
/// exactly between two entries belongs to the later one, so a static
/// period's last instant is already part of the following transition.
/// Zero-duration entries have empty ranges and are stepped over.
///
/// Returns `None` for an empty entry slice. An offset at or past the
/// accumulated total clamps to the last entry's final instant; the cycle
/// modulo keeps that from happening in practice.
pub fn locate(entries: &[Entry], offset: Duration) -> Option<Located> {
    let mut running = Duration::zero();
    for (index, entry) in entries.iter().enumerate() {
        let end = running + entry.duration();
        if offset < end {
            return Some(Located {
                index,
                offset: offset - running,
            });
        }
        running = end;
    }

    let last = entries.last()?;
    Some(Located {
        index: entries.len() - 1,
        offset: last.duration(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn offset_inside_first_entry() {
        let entries = vec![static_entry("a.png", 600), transition("a.png", "b.png", 120)];
        let located = locate(&entries, Duration::seconds(300)).unwrap();
        assert_eq!(located.index, 0);
        assert_eq!(located.offset, Duration::seconds(300));
    }

    #[test]
    fn boundary_belongs_to_the_later_entry() {
        let entries = vec![static_entry("a.png", 600), transition("a.png", "b.png", 120)];
        let located = locate(&entries, Duration::seconds(600)).unwrap();
        assert_eq!(located.index, 1);
        assert_eq!(located.offset, Duration::zero());
    }

    #[test]
    fn zero_duration_entries_are_stepped_over() {
        let entries = vec![
            static_entry("a.png", 600),
            transition("a.png", "b.png", 0),
            static_entry("b.png", 300),
        ];
        let located = locate(&entries, Duration::seconds(600)).unwrap();
        assert_eq!(located.index, 2);
        assert_eq!(located.offset, Duration::zero());
    }

    #[test]
    fn overshoot_clamps_to_the_last_entry() {
        let entries = vec![static_entry("a.png", 600), transition("a.png", "b.png", 120)];
        let located = locate(&entries, Duration::seconds(900)).unwrap();
        assert_eq!(located.index, 1);
        assert_eq!(located.offset, Duration::seconds(120));
    }

    #[test]
    fn empty_slice_has_no_location() {
        assert_eq!(locate(&[], Duration::zero()), None);
    }
}
