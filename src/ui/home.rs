//! Home view rendering
//!
//! Lays out the header with the search box, the dismissible banner, the
//! content area, and the status bar. Content selection is an exhaustive
//! match over [`RenderedView`], so a new status variant cannot slip through
//! unrendered.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, InputMode, RenderedView};
use crate::models::VideoSummary;
use crate::ui::card::{card_lines, CARD_HEIGHT};
use crate::ui::theme::Palette;

/// Render the whole home view for the current frame
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let banner_height = if app.banner_visible { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(banner_height), // Banner
            Constraint::Min(1),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app, palette);
    if app.banner_visible {
        render_banner(frame, chunks[1], palette);
    }
    render_content(frame, chunks[2], app, palette);
    render_status_bar(frame, chunks[3], app, palette);
}

/// Header with logo and search box
fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(1)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("watch", palette.title()),
        Span::styled("tui", palette.heading()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    let search_text = if editing {
        let query = &app.search.query;
        let cursor = app.search.cursor.min(query.len());
        let (before, after) = query.split_at(cursor);
        format!("⌕ {}│{}", before, after)
    } else if app.search.query.is_empty() {
        "⌕ Type / to search...".to_string()
    } else {
        format!("⌕ {}", app.search.query)
    };

    let search_box = Paragraph::new(search_text)
        .style(palette.input())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if editing {
                    palette.border_focused()
                } else {
                    palette.border()
                })
                .title(Span::styled(" SEARCH ", palette.title())),
        );
    frame.render_widget(search_box, header_chunks[1]);
}

/// Promotional banner row with its dismissal hint
fn render_banner(frame: &mut Frame, area: Rect, palette: &Palette) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("Buy Watch Premium prepaid plans with UPI", palette.text()),
        Span::styled("   x:dismiss", palette.muted()),
    ]))
    .style(palette.banner())
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border()),
    );
    frame.render_widget(banner, area);
}

/// Content area, selected purely from fetch status
fn render_content(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    match app.view() {
        RenderedView::Nothing => {}
        RenderedView::Loading => render_loading(frame, area, palette),
        RenderedView::Videos(videos) => render_video_list(frame, area, app, videos, palette),
        RenderedView::NoResults => render_no_results(frame, area, palette),
        RenderedView::Failure => render_failure(frame, area, palette),
    }
}

fn content_block(palette: &Palette, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .title(Span::styled(format!(" {} ", title), palette.title()))
}

fn render_loading(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = content_block(palette, "VIDEOS");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let loading = Paragraph::new("⟳ Loading...")
        .style(palette.loading())
        .alignment(Alignment::Center);
    frame.render_widget(loading, inner);
}

fn render_video_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    videos: &[VideoSummary],
    palette: &Palette,
) {
    let block = content_block(palette, &format!("VIDEOS ({})", videos.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Viewport offset derived without mutating list state during render
    let visible = (inner.height as usize / CARD_HEIGHT).max(1);
    let selected = app.list.selected.min(videos.len().saturating_sub(1));
    let mut offset = app.list.offset.min(selected);
    if selected >= offset + visible {
        offset = selected + 1 - visible;
    }

    let lines: Vec<Line> = videos
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .flat_map(|(i, video)| card_lines(video, palette, i == selected))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_no_results(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = content_block(palette, "VIDEOS (0)");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No search results found", palette.heading())),
        Line::from(Span::styled(
            "Try different key words or remove search filter",
            palette.muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(" r  Retry ", palette.retry_button())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(view, inner);
}

fn render_failure(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = content_block(palette, "VIDEOS");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Oops! Something Went Wrong", palette.error())),
        Line::from(Span::styled(
            "We are having some trouble completing your request. Please try again.",
            palette.muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(" r  Retry ", palette.retry_button())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(view, inner);
}

/// Status bar with mode and keybind help
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(palette.background).bg(palette.accent),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(palette.background).bg(palette.error),
        ),
    };

    let theme_label = if app.theme.is_dark() { "dark" } else { "light" };

    // Selected card links to its per-video detail destination
    let destination = match app.view() {
        RenderedView::Videos(videos) => videos
            .get(app.list.selected)
            .map(|v| v.detail_path())
            .unwrap_or_default(),
        _ => String::new(),
    };

    let status_line = Line::from(vec![
        mode,
        Span::raw(" "),
        Span::styled(format!("theme:{}", theme_label), palette.muted()),
        Span::raw(" │ "),
        Span::styled(destination, palette.keybind()),
        Span::raw(" │ "),
        Span::styled(
            " q:quit  /:search  t:theme  x:banner  ↑↓:select ",
            palette.muted(),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line).style(palette.status_bar()), area);
}
