//! Human-readable summaries of timed wallpapers.
//!
//! Formatting lives here instead of on the data model, which stays a plain
//! aggregate.

use std::fmt::Write as _;

use crate::slideshow::{Entry, TimedWallpaper};

/// Multi-line diagnostic dump of a timed wallpaper: where it came from,
/// when it starts, and which images it uses.
pub fn summary(wallpaper: &TimedWallpaper) -> String {
    let definition = &wallpaper.definition;
    let statics = definition
        .entries()
        .iter()
        .filter(|entry| matches!(entry, Entry::Static { .. }))
        .count();
    let transitions = definition.entries().len() - statics;

    let mut out = String::new();
    let _ = writeln!(out, "--- {} ---", wallpaper.collection_name);
    let _ = writeln!(out, "path               = {}", wallpaper.path.display());
    let _ = writeln!(
        out,
        "start time         = {}",
        definition.start_time().format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(out, "static entries     = {statics}");
    let _ = writeln!(out, "transition entries = {transitions}");
    let _ = writeln!(out, "uses these images:");
    for filename in definition.images() {
        let _ = writeln!(out, "\t{filename}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slideshow::SlideshowDefinition;
    use chrono::{Duration, NaiveDate};
    use std::path::PathBuf;

    #[test]
    fn summary_lists_counts_and_images() {
        let definition = SlideshowDefinition::new(
            NaiveDate::from_ymd_opt(2022, 10, 1)
                .unwrap()
                .and_hms_opt(6, 30, 0)
                .unwrap(),
            vec![
                Entry::Static {
                    filename: "dawn.png".to_string(),
                    duration: Duration::minutes(30),
                },
                Entry::Transition {
                    from: "dawn.png".to_string(),
                    to: "day.png".to_string(),
                    duration: Duration::minutes(5),
                },
            ],
        )
        .unwrap();
        let wallpaper = TimedWallpaper {
            collection_name: "mojave".to_string(),
            path: PathBuf::from("/usr/share/backgrounds/mojave/mojave.xml"),
            definition,
        };

        let text = summary(&wallpaper);
        assert!(text.starts_with("--- mojave ---"));
        assert!(text.contains("/usr/share/backgrounds/mojave/mojave.xml"));
        assert!(text.contains("start time         = 2022-10-01 06:30"));
        assert!(text.contains("static entries     = 1"));
        assert!(text.contains("transition entries = 1"));
        assert!(text.contains("\tdawn.png\n"));
        assert!(text.contains("\tday.png\n"));
    }
}
