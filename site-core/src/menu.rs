//! Menu overlay state.
//!
//! The overlay is a modal: visible iff open, closed by its toggle, Escape, a
//! pointer-down outside the panel, or selecting a navigation target.
//! Selection additionally yields a request to scroll the chosen section into
//! view; performing the scroll belongs to the rendering layer.

/// State shared by the header's menu button and the overlay. Starts closed;
/// nothing persists across a teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub is_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// The header's menu button.
    Toggle,
    Escape,
    /// Pointer-down outside the overlay panel while open.
    OutsideClick,
    /// A navigation target was chosen in the overlay.
    Select(String),
}

/// Ask the rendering surface to scroll a section into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRequest {
    pub region_id: String,
}

impl MenuState {
    /// Applies one user command, returning the next state and the navigation
    /// request to forward, if any. Close commands while already closed are
    /// no-ops.
    pub fn apply(self, command: MenuCommand) -> (MenuState, Option<NavRequest>) {
        match command {
            MenuCommand::Toggle => (
                MenuState {
                    is_open: !self.is_open,
                },
                None,
            ),
            MenuCommand::Escape | MenuCommand::OutsideClick => (MenuState { is_open: false }, None),
            MenuCommand::Select(region_id) => {
                (MenuState { is_open: false }, Some(NavRequest { region_id }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open);
    }

    #[test]
    fn toggle_opens_and_closes() {
        let (open, nav) = MenuState::default().apply(MenuCommand::Toggle);
        assert!(open.is_open);
        assert!(nav.is_none());
        let (closed, _) = open.apply(MenuCommand::Toggle);
        assert!(!closed.is_open);
    }

    #[test]
    fn escape_closes_when_open_and_is_noop_when_closed() {
        let open = MenuState { is_open: true };
        let (next, _) = open.apply(MenuCommand::Escape);
        assert!(!next.is_open);

        let (still_closed, nav) = MenuState::default().apply(MenuCommand::Escape);
        assert!(!still_closed.is_open);
        assert!(nav.is_none());
    }

    #[test]
    fn outside_click_closes() {
        let open = MenuState { is_open: true };
        let (next, nav) = open.apply(MenuCommand::OutsideClick);
        assert!(!next.is_open);
        assert!(nav.is_none());
    }

    #[test]
    fn selecting_a_target_closes_and_requests_navigation() {
        let open = MenuState { is_open: true };
        let (next, nav) = open.apply(MenuCommand::Select("contacto".to_owned()));
        assert!(!next.is_open);
        assert_eq!(
            nav,
            Some(NavRequest {
                region_id: "contacto".to_owned()
            })
        );
    }
}
