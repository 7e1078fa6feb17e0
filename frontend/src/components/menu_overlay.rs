use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use site_core::MenuCommand;

use crate::content::NAV_ITEMS;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct MenuOverlayProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub is_open: bool,
    pub active_id: String,
    /// The header button that toggles the overlay; pointer-downs on it are
    /// not outside-clicks, otherwise the button would close and reopen in
    /// one gesture.
    pub toggle_ref: NodeRef,
    pub on_command: Callback<MenuCommand>,
}

/// Full-screen navigation overlay. While open it watches for pointer-downs
/// outside its panel and reports them as `OutsideClick`; selecting a target
/// closes the overlay and scrolls to the section.
#[function_component(MenuOverlay)]
pub fn menu_overlay(props: &MenuOverlayProps) -> Html {
    let panel_ref = use_node_ref();

    {
        let panel_ref = panel_ref.clone();
        let toggle_ref = props.toggle_ref.clone();
        let on_command = props.on_command.clone();
        use_effect_with_deps(
            move |&is_open| {
                let mut registered = None;
                if is_open {
                    let document = web_sys::window().unwrap().document().unwrap();

                    let click_callback =
                        Closure::wrap(Box::new(move |event: web_sys::Event| {
                            let in_panel = dom::event_target_within(&event, panel_ref.cast());
                            let on_toggle = dom::event_target_within(&event, toggle_ref.cast());
                            if !in_panel && !on_toggle {
                                on_command.emit(MenuCommand::OutsideClick);
                            }
                        }) as Box<dyn FnMut(_)>);

                    document
                        .add_event_listener_with_callback(
                            "mousedown",
                            click_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    registered = Some((document, click_callback));
                }

                move || {
                    if let Some((document, click_callback)) = registered {
                        document
                            .remove_event_listener_with_callback(
                                "mousedown",
                                click_callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                    }
                }
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_command = props.on_command.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_command.emit(MenuCommand::Toggle);
        })
    };

    html! {
        <div id={props.id.clone()} class="menu-overlay" aria-hidden="false">
            <div class="menu-panel glass-panel" ref={panel_ref}>
                <div class="menu-panel-header">
                    <div>
                        <p class="menu-kicker">{"Navegación"}</p>
                        <h2 class="menu-title">{"Raccoon Builds"}</h2>
                    </div>
                    <button class="glass-button" onclick={close}>{"Cerrar"}</button>
                </div>
                <div class="menu-grid">
                    {
                        NAV_ITEMS.iter().enumerate().map(|(index, item)| {
                            let select = {
                                let on_command = props.on_command.clone();
                                let id = item.id;
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    on_command.emit(MenuCommand::Select(id.to_owned()));
                                })
                            };
                            html! {
                                <a
                                    key={item.id}
                                    href={format!("#{}", item.id)}
                                    onclick={select}
                                    class={classes!(
                                        "menu-item",
                                        (props.active_id == item.id).then_some("active"),
                                    )}
                                >
                                    <div class="menu-item-row">
                                        <span class="menu-item-label">{ item.label }</span>
                                        <span class="menu-item-index">{ index + 1 }</span>
                                    </div>
                                    <p class="menu-item-blurb">{ item.blurb }</p>
                                </a>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}
