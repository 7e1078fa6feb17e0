//! Active-section resolution.
//!
//! The observer layer reports, per section, how much of it is inside the
//! viewport each time that fraction crosses one of the watched thresholds.
//! `resolve` folds one batch of those reports into the single "active"
//! section the header and menu highlight.

use crate::theme::Theme;

/// Ratio thresholds the tracker watches. Three crossings per section give the
/// resolver enough samples to judge which section dominates the viewport,
/// instead of a single enter/exit signal.
pub const INTERSECTION_THRESHOLDS: [f64; 3] = [0.25, 0.55, 0.80];

/// One observation for one section, snapshotted at a threshold crossing.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEvent {
    /// The section's anchor id. Empty when the element carries none.
    pub region_id: String,
    /// Fraction of the section currently inside the viewport, in [0, 1].
    pub ratio: f64,
    pub is_intersecting: bool,
    /// The section's declared theme, if it declares one.
    pub theme: Option<Theme>,
}

/// The section currently in focus for navigation-highlight and theming.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSection {
    pub id: String,
    pub theme: Theme,
}

impl Default for ActiveSection {
    fn default() -> Self {
        ActiveSection {
            id: "hero".to_owned(),
            theme: Theme::Dark,
        }
    }
}

/// Folds one batch of visibility events into the next active section.
///
/// Non-intersecting entries are ignored. If nothing in the batch intersects,
/// the previous state is kept as-is ("last known good"); a full-height layout
/// never legitimately shows an empty viewport. Among intersecting entries the
/// greatest ratio wins; on equal ratios the earliest event in batch order
/// wins, so one resolution is always deterministic. A winner without an id
/// keeps the previous id, and a winner without a declared theme is dark.
pub fn resolve(current: &ActiveSection, batch: &[VisibilityEvent]) -> ActiveSection {
    let mut winner: Option<&VisibilityEvent> = None;
    for event in batch.iter().filter(|e| e.is_intersecting) {
        match winner {
            Some(best) if event.ratio <= best.ratio => {}
            _ => winner = Some(event),
        }
    }

    let Some(winner) = winner else {
        return current.clone();
    };

    let id = if winner.region_id.is_empty() {
        current.id.clone()
    } else {
        winner.region_id.clone()
    };
    let theme = winner.theme.unwrap_or(Theme::Dark);

    let next = ActiveSection { id, theme };
    if next != *current {
        log::debug!("active section: {} ({})", next.id, next.theme.as_str());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, ratio: f64, intersecting: bool, theme: Option<Theme>) -> VisibilityEvent {
        VisibilityEvent {
            region_id: id.to_owned(),
            ratio,
            is_intersecting: intersecting,
            theme,
        }
    }

    #[test]
    fn initial_state_is_hero_dark() {
        let state = ActiveSection::default();
        assert_eq!(state.id, "hero");
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn most_visible_intersecting_section_wins() {
        let state = ActiveSection::default();
        let batch = [
            event("hero", 0.3, true, Some(Theme::Dark)),
            event("catalogo", 0.6, true, Some(Theme::Light)),
        ];
        let next = resolve(&state, &batch);
        assert_eq!(next.id, "catalogo");
        assert_eq!(next.theme, Theme::Light);
    }

    #[test]
    fn non_intersecting_batch_keeps_previous_state() {
        let state = ActiveSection {
            id: "proceso".to_owned(),
            theme: Theme::Dark,
        };
        let batch = [event("hero", 0.3, false, Some(Theme::Dark))];
        assert_eq!(resolve(&state, &batch), state);
    }

    #[test]
    fn empty_batch_keeps_previous_state() {
        let state = ActiveSection::default();
        assert_eq!(resolve(&state, &[]), state);
    }

    #[test]
    fn non_intersecting_entries_never_win() {
        let state = ActiveSection::default();
        let batch = [
            event("sobre", 0.9, false, Some(Theme::Dark)),
            event("contacto", 0.3, true, Some(Theme::Light)),
        ];
        let next = resolve(&state, &batch);
        assert_eq!(next.id, "contacto");
        assert_eq!(next.theme, Theme::Light);
    }

    #[test]
    fn equal_ratios_resolve_to_earliest_in_batch_order() {
        let state = ActiveSection::default();
        let batch = [
            event("proceso", 0.55, true, Some(Theme::Dark)),
            event("sobre", 0.55, true, Some(Theme::Dark)),
        ];
        assert_eq!(resolve(&state, &batch).id, "proceso");

        let reversed = [
            event("sobre", 0.55, true, Some(Theme::Dark)),
            event("proceso", 0.55, true, Some(Theme::Dark)),
        ];
        assert_eq!(resolve(&state, &reversed).id, "sobre");
    }

    #[test]
    fn winner_without_id_keeps_previous_id() {
        let state = ActiveSection {
            id: "catalogo".to_owned(),
            theme: Theme::Light,
        };
        let batch = [event("", 0.8, true, Some(Theme::Dark))];
        let next = resolve(&state, &batch);
        assert_eq!(next.id, "catalogo");
        // Theme still comes from the winner: id and theme update together.
        assert_eq!(next.theme, Theme::Dark);
    }

    #[test]
    fn winner_without_theme_defaults_to_dark() {
        let state = ActiveSection::default();
        let batch = [event("contacto", 0.7, true, None)];
        assert_eq!(resolve(&state, &batch).theme, Theme::Dark);
    }

    #[test]
    fn id_and_theme_replace_atomically() {
        let state = ActiveSection::default();
        let batch = [
            event("catalogo", 0.6, true, Some(Theme::Light)),
            event("hero", 0.3, true, Some(Theme::Dark)),
        ];
        let next = resolve(&state, &batch);
        assert_eq!(
            next,
            ActiveSection {
                id: "catalogo".to_owned(),
                theme: Theme::Light,
            }
        );
    }
}
