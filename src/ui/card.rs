//! Video card rendering
//!
//! A card is a pure function of (video, palette): no state, no side effects.
//! Re-rendering with the other palette restyles every piece of text, which is
//! how a theme toggle re-themes the whole list on the next frame.

use ratatui::text::{Line, Span};

use crate::models::VideoSummary;
use crate::ui::theme::Palette;

/// Rows one card occupies in the list, including the trailing spacer
pub const CARD_HEIGHT: usize = 4;

/// Render one video card as styled lines.
///
/// Output covers the full per-field contract: title, channel name, view
/// count, publish date, thumbnail and channel profile image references.
/// Activating the card navigates to `video.detail_path()`.
pub fn card_lines<'a>(
    video: &'a VideoSummary,
    palette: &Palette,
    selected: bool,
) -> Vec<Line<'a>> {
    let marker = if selected { "▸ " } else { "  " };
    let title_style = if selected {
        palette.highlighted()
    } else {
        palette.heading()
    };

    let title = Line::from(vec![
        Span::styled(marker, palette.keybind()),
        Span::styled(video.title.as_str(), title_style),
    ]);

    let meta = Line::from(vec![
        Span::raw("  "),
        Span::styled(video.channel_name.as_str(), palette.text()),
        Span::styled(
            format!(" · {} views · {}", video.view_count, video.published_at),
            palette.muted(),
        ),
    ]);

    let images = Line::from(vec![
        Span::raw("  "),
        Span::styled(video.thumbnail_url.as_str(), palette.muted()),
        Span::raw("  "),
        Span::styled(video.channel_profile_image_url.as_str(), palette.muted()),
    ]);

    vec![title, meta, images, Line::from("")]
}
