//! Chat widget state.
//!
//! The widget is scripted: a fixed exchange revealed in stages when the
//! panel opens, plus a draft input that is cleared on submit and sent
//! nowhere. Open/close mirrors the menu overlay (toggle, Escape, outside
//! pointer-down).

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatState {
    pub open: bool,
    pub hovered: bool,
    pub draft: String,
    /// How many scripted messages are currently shown.
    pub revealed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    ToggleBubble,
    Escape,
    OutsideClick,
    HoverStart,
    HoverEnd,
    EditDraft(String),
    Submit,
    /// Timer tick revealing the next scripted message, bounded by the script
    /// length.
    RevealNext { script_len: usize },
}

impl ChatState {
    pub fn apply(self, command: ChatCommand) -> ChatState {
        match command {
            ChatCommand::ToggleBubble => {
                let open = !self.open;
                ChatState {
                    open,
                    // Reopening replays the scripted reveal from the start.
                    revealed: 0,
                    ..self
                }
            }
            ChatCommand::Escape | ChatCommand::OutsideClick => ChatState {
                open: false,
                ..self
            },
            ChatCommand::HoverStart => ChatState {
                hovered: true,
                ..self
            },
            ChatCommand::HoverEnd => ChatState {
                hovered: false,
                ..self
            },
            ChatCommand::EditDraft(draft) => ChatState { draft, ..self },
            ChatCommand::Submit => ChatState {
                draft: String::new(),
                ..self
            },
            ChatCommand::RevealNext { script_len } => ChatState {
                revealed: (self.revealed + 1).min(script_len),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_empty_draft() {
        let state = ChatState::default();
        assert!(!state.open);
        assert!(!state.hovered);
        assert!(state.draft.is_empty());
        assert_eq!(state.revealed, 0);
    }

    #[test]
    fn toggle_opens_and_restarts_the_script() {
        let state = ChatState {
            revealed: 3,
            ..ChatState::default()
        };
        let state = state.apply(ChatCommand::ToggleBubble);
        assert!(state.open);
        assert_eq!(state.revealed, 0);
    }

    #[test]
    fn escape_and_outside_click_close_and_are_noops_when_closed() {
        let open = ChatState {
            open: true,
            ..ChatState::default()
        };
        assert!(!open.clone().apply(ChatCommand::Escape).open);
        assert!(!open.apply(ChatCommand::OutsideClick).open);

        let closed = ChatState::default().apply(ChatCommand::Escape);
        assert!(!closed.open);
    }

    #[test]
    fn submit_clears_draft_and_nothing_else() {
        let state = ChatState {
            open: true,
            draft: "una casa de piedra".to_owned(),
            revealed: 2,
            ..ChatState::default()
        };
        let state = state.apply(ChatCommand::Submit);
        assert!(state.draft.is_empty());
        assert!(state.open);
        assert_eq!(state.revealed, 2);
    }

    #[test]
    fn reveal_never_exceeds_script_length() {
        let mut state = ChatState::default().apply(ChatCommand::ToggleBubble);
        for _ in 0..10 {
            state = state.apply(ChatCommand::RevealNext { script_len: 3 });
        }
        assert_eq!(state.revealed, 3);
    }

    #[test]
    fn hover_flags_follow_pointer() {
        let state = ChatState::default().apply(ChatCommand::HoverStart);
        assert!(state.hovered);
        assert!(!state.apply(ChatCommand::HoverEnd).hovered);
    }
}
