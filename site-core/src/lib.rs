//! UI state machines for the Raccoon Builds site.
//!
//! Everything here is pure: state advances only through explicit commands or
//! event batches, so the whole crate runs under plain `cargo test` without a
//! browser. The `frontend` crate owns the wiring to real DOM events.

pub mod chat;
pub mod header;
pub mod menu;
pub mod teardown;
pub mod theme;
pub mod visibility;

pub use chat::{ChatCommand, ChatState};
pub use header::{HeaderState, Palette, SCROLL_GLASS_THRESHOLD_PX};
pub use menu::{MenuCommand, MenuState, NavRequest};
pub use teardown::Teardown;
pub use theme::Theme;
pub use visibility::{resolve, ActiveSection, VisibilityEvent, INTERSECTION_THRESHOLDS};
