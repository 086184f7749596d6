//! Data structures for watchtui
//!
//! `VideoSummary` is the normalized, display-ready representation of one
//! catalog record. Every field comes from exactly one raw wire field; the
//! catalog client never emits a partially populated summary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One video from the catalog, normalized for display.
///
/// Immutable once constructed. `published_at` is an opaque display string;
/// no date parsing or validation happens on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSummary {
    /// Opaque unique identifier, stable across refetches
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub view_count: u64,
    pub published_at: String,
    pub channel_name: String,
    pub channel_profile_image_url: String,
}

impl VideoSummary {
    /// Route to the per-video detail destination, keyed by id
    pub fn detail_path(&self) -> String {
        format!("/videos/{}", self.id)
    }
}

impl fmt::Display for VideoSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — {} · {} views · {}",
            self.title, self.channel_name, self.view_count, self.published_at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VideoSummary {
        VideoSummary {
            id: "30".into(),
            title: "CSS in 100 Seconds".into(),
            thumbnail_url: "https://i.ytimg.com/vi/OEV8gMkCHXQ/default.jpg".into(),
            view_count: 28,
            published_at: "Jun 19, 2021".into(),
            channel_name: "Fireship".into(),
            channel_profile_image_url: "https://yt3.ggpht.com/ytc/fireship.jpg".into(),
        }
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(sample().detail_path(), "/videos/30");
    }

    #[test]
    fn test_display_includes_title_and_channel() {
        let s = sample().to_string();
        assert!(s.contains("CSS in 100 Seconds"));
        assert!(s.contains("Fireship"));
        assert!(s.contains("28 views"));
    }
}
