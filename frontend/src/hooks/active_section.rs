//! Tracks which `[data-section]` region currently dominates the viewport.
//!
//! An `IntersectionObserver` watches every section at the fixed ratio
//! thresholds; each callback batch is converted to `VisibilityEvent`s and
//! folded through `site_core::resolve`. The observer is created once on
//! mount and disconnected exactly once on unmount.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use site_core::{resolve, ActiveSection, Teardown, Theme, VisibilityEvent, INTERSECTION_THRESHOLDS};

struct ActiveSectionStore(ActiveSection);

impl Reducible for ActiveSectionStore {
    type Action = Vec<VisibilityEvent>;

    fn reduce(self: Rc<Self>, batch: Self::Action) -> Rc<Self> {
        Rc::new(ActiveSectionStore(resolve(&self.0, &batch)))
    }
}

impl PartialEq for ActiveSectionStore {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

fn entry_to_event(entry: &IntersectionObserverEntry) -> VisibilityEvent {
    let element = entry.target();
    VisibilityEvent {
        region_id: element.id(),
        ratio: entry.intersection_ratio(),
        is_intersecting: entry.is_intersecting(),
        theme: element
            .get_attribute("data-theme")
            .map(|value| Theme::from_attr(&value)),
    }
}

/// Returns the active section (id + theme) for the current scroll position.
#[hook]
pub fn use_active_section() -> ActiveSection {
    let state = use_reducer(|| ActiveSectionStore(ActiveSection::default()));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let mut observer: Option<IntersectionObserver> = None;

                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, _observer: IntersectionObserver| {
                        let batch: Vec<VisibilityEvent> = entries
                            .iter()
                            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                            .map(|entry| entry_to_event(&entry))
                            .collect();
                        dispatcher.dispatch(batch);
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    if let Ok(sections) = document.query_selector_all("[data-section]") {
                        // No sections, no observation.
                        if sections.length() > 0 {
                            let thresholds = INTERSECTION_THRESHOLDS
                                .iter()
                                .copied()
                                .map(JsValue::from)
                                .collect::<js_sys::Array>();
                            let options = IntersectionObserverInit::new();
                            options.set_threshold(&thresholds);

                            if let Ok(created) = IntersectionObserver::new_with_options(
                                callback.as_ref().unchecked_ref(),
                                &options,
                            ) {
                                for index in 0..sections.length() {
                                    if let Some(element) = sections
                                        .item(index)
                                        .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                                    {
                                        created.observe(&element);
                                    }
                                }
                                log::debug!("observing {} sections", sections.length());
                                observer = Some(created);
                            }
                        }
                    }
                }

                let mut teardown = Teardown::new(move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    // The callback must outlive the observer.
                    drop(callback);
                });
                move || teardown.run()
            },
            (),
        );
    }

    state.0.clone()
}
