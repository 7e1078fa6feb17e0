//! Header presentation state.
//!
//! The header is transparent at the top of the page and switches to its
//! glassy (blurred, bordered) treatment once the page scrolls past a small
//! offset, or whenever the menu overlay is open. Glass and text color are
//! derived from (scroll, menu, active theme) on every render, never stored.

use crate::menu::MenuState;
use crate::theme::Theme;

/// Scroll offset in pixels past which the header turns glassy.
pub const SCROLL_GLASS_THRESHOLD_PX: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub scrolled: bool,
}

impl HeaderState {
    /// Applies a new vertical scroll offset.
    pub fn on_scroll(self, offset: f64) -> Self {
        HeaderState {
            scrolled: offset > SCROLL_GLASS_THRESHOLD_PX,
        }
    }

    /// Glassy iff scrolled past the threshold or the menu forces it.
    pub fn glassy(self, menu: MenuState) -> bool {
        self.scrolled || menu.is_open
    }
}

/// Header text/icon palette, derived per render from the active theme and
/// the menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Dark ink over a light section.
    Light,
    /// Light ink over dark sections or the glassy overlay.
    DarkOnGlass,
}

impl Palette {
    pub fn derive(active_theme: Theme, menu_open: bool) -> Self {
        if active_theme == Theme::Light && !menu_open {
            Palette::Light
        } else {
            Palette::DarkOnGlass
        }
    }

    /// CSS class selecting the ink color for this palette.
    pub fn text_class(self) -> &'static str {
        match self {
            Palette::Light => "ink-dark",
            Palette::DarkOnGlass => "ink-light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSED: MenuState = MenuState { is_open: false };
    const OPEN: MenuState = MenuState { is_open: true };

    #[test]
    fn starts_transparent() {
        assert!(!HeaderState::default().glassy(CLOSED));
    }

    #[test]
    fn scroll_past_threshold_turns_glassy_and_back() {
        let state = HeaderState::default().on_scroll(20.0);
        assert!(state.glassy(CLOSED));
        let state = state.on_scroll(0.0);
        assert!(!state.glassy(CLOSED));
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!HeaderState::default().on_scroll(12.0).glassy(CLOSED));
        assert!(HeaderState::default().on_scroll(12.1).glassy(CLOSED));
    }

    #[test]
    fn open_menu_forces_glassy_at_any_offset() {
        assert!(HeaderState::default().glassy(OPEN));
        assert!(HeaderState::default().on_scroll(0.0).glassy(OPEN));
    }

    #[test]
    fn palette_is_light_only_for_light_theme_with_menu_closed() {
        assert_eq!(Palette::derive(Theme::Light, false), Palette::Light);
        assert_eq!(Palette::derive(Theme::Light, true), Palette::DarkOnGlass);
        assert_eq!(Palette::derive(Theme::Dark, false), Palette::DarkOnGlass);
        assert_eq!(Palette::derive(Theme::Dark, true), Palette::DarkOnGlass);
    }
}
