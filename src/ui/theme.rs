//! Light/dark theme for watchtui
//!
//! Two fixed palettes selected by a shared boolean flag. The flag is a
//! single-writer/multi-reader broadcast, modeled as an explicit observable
//! handed to whoever renders, never an ambient global.

use ratatui::style::{Color, Modifier, Style};
use std::sync::Arc;
use tokio::sync::watch;

// =============================================================================
// Theme Flag (broadcast observable)
// =============================================================================

/// Shared dark-theme flag.
///
/// Cheap to clone; every clone observes the same value. Renderers read the
/// flag on every draw, so a toggle re-themes the whole subtree on the next
/// frame.
#[derive(Debug, Clone)]
pub struct ThemeFlag {
    tx: Arc<watch::Sender<bool>>,
}

impl ThemeFlag {
    pub fn new(dark: bool) -> Self {
        let (tx, _rx) = watch::channel(dark);
        Self { tx: Arc::new(tx) }
    }

    pub fn is_dark(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn toggle(&self) {
        self.tx.send_modify(|dark| *dark = !*dark);
    }

    pub fn set(&self, dark: bool) {
        // send_replace updates even when no receiver is subscribed
        self.tx.send_replace(dark);
    }

    /// Subscribe to flag changes (for consumers that want to await a
    /// broadcast instead of polling per frame)
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Resolve the palette for the current flag value
    pub fn palette(&self) -> &'static Palette {
        Palette::select(self.is_dark())
    }
}

impl Default for ThemeFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

// =============================================================================
// Palettes
// =============================================================================

/// Color palette for one theme (dark or light)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    /// Panel/banner surface, one step off the background
    pub surface: Color,
    pub text: Color,
    pub heading: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub error: Color,
}

/// Dark palette: #181818 background, #f9f9f9 text
pub const DARK: Palette = Palette {
    background: Color::Rgb(0x18, 0x18, 0x18),
    surface: Color::Rgb(0x21, 0x21, 0x21),
    text: Color::Rgb(0xf9, 0xf9, 0xf9),
    heading: Color::Rgb(0xf1, 0xf5, 0xf9),
    muted: Color::Rgb(0x94, 0xa3, 0xb8),
    border: Color::Rgb(0x47, 0x55, 0x69),
    border_focused: Color::Rgb(0x3b, 0x82, 0xf6),
    accent: Color::Rgb(0x3b, 0x82, 0xf6),
    error: Color::Rgb(0xf8, 0x71, 0x71),
};

/// Light palette: #f9f9f9 background, #231f20 text
pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf9, 0xf9, 0xf9),
    surface: Color::Rgb(0xeb, 0xeb, 0xeb),
    text: Color::Rgb(0x23, 0x1f, 0x20),
    heading: Color::Rgb(0x1e, 0x29, 0x3b),
    muted: Color::Rgb(0x47, 0x55, 0x69),
    border: Color::Rgb(0xcb, 0xd5, 0xe1),
    border_focused: Color::Rgb(0x25, 0x63, 0xeb),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    error: Color::Rgb(0xdc, 0x26, 0x26),
};

impl Palette {
    /// Select the palette for a theme flag value
    pub fn select(dark: bool) -> &'static Palette {
        if dark {
            &DARK
        } else {
            &LIGHT
        }
    }

    // -------------------------------------------------------------------------
    // Style helpers
    // -------------------------------------------------------------------------

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.border_focused)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn banner(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn keybind(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn loading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Selected card row (inverted)
    pub fn highlighted(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn retry_button(&self) -> Style {
        Style::default()
            .fg(Color::Rgb(0xff, 0xff, 0xff))
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// Color utilities
// =============================================================================

/// Relative luminance of a color, per WCAG
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Contrast ratio between two colors: 1 (same) to 21 (black/white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG AA for normal text (>= 4.5:1)
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Extract RGB tuple from a ratatui Color (only the Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("palette colors should all be RGB")
    }

    #[test]
    fn test_flag_selects_palette() {
        assert_eq!(Palette::select(true), &DARK);
        assert_eq!(Palette::select(false), &LIGHT);
    }

    #[test]
    fn test_palettes_differ_on_text_color() {
        assert_ne!(DARK.text, LIGHT.text);
        assert_ne!(DARK.background, LIGHT.background);
    }

    #[test]
    fn test_theme_flag_toggle_broadcasts() {
        let flag = ThemeFlag::new(true);
        let observer = flag.clone();
        assert!(observer.is_dark());

        flag.toggle();
        assert!(!observer.is_dark());
        assert_eq!(observer.palette(), &LIGHT);

        flag.toggle();
        assert!(observer.is_dark());
        assert_eq!(observer.palette(), &DARK);
    }

    #[test]
    fn test_theme_flag_subscription_sees_change() {
        let flag = ThemeFlag::new(false);
        let mut rx = flag.subscribe();
        flag.set(true);
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update());
    }

    #[test]
    fn test_text_contrast_both_palettes() {
        for palette in [&DARK, &LIGHT] {
            let bg = rgb(palette.background);
            let text = rgb(palette.text);
            assert!(
                meets_wcag_aa(text, bg),
                "text on background should meet WCAG AA (got {:.2}:1)",
                contrast_ratio(text, bg)
            );

            let heading = rgb(palette.heading);
            assert!(
                meets_wcag_aa(heading, bg),
                "heading on background should meet WCAG AA (got {:.2}:1)",
                contrast_ratio(heading, bg)
            );
        }
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = contrast_ratio((0, 0, 0), (255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.1);
    }

    #[test]
    fn test_relative_luminance_bounds() {
        assert!(relative_luminance(0, 0, 0).abs() < 0.001);
        assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 0.001);
    }
}
