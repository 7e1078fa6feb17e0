use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use site_core::{ActiveSection, HeaderState, MenuCommand, MenuState, Palette};

use crate::components::menu_overlay::MenuOverlay;
use crate::content::NAV_ITEMS;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: ActiveSection,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let header_state = use_state(HeaderState::default);
    let menu = use_state(MenuState::default);
    let toggle_ref = use_node_ref();

    // Every menu mutation goes through the state machine; a selection also
    // carries the scroll request to perform.
    let on_menu_command = {
        let menu = menu.clone();
        Callback::from(move |command: MenuCommand| {
            let (next, nav) = menu.apply(command);
            menu.set(next);
            if let Some(nav) = nav {
                dom::scroll_to_region(&nav.region_id);
            }
        })
    };

    {
        let header_state = header_state.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_for_offset = window.clone();

                // Seed from the current offset so a reload mid-page starts glassy.
                header_state.set(
                    HeaderState::default().on_scroll(window.scroll_y().unwrap_or_default()),
                );

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_for_offset.scroll_y().unwrap_or_default();
                    header_state.set(HeaderState::default().on_scroll(offset));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    {
        let on_menu_command = on_menu_command.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let key_callback =
                    Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                        if event.key() == "Escape" {
                            on_menu_command.emit(MenuCommand::Escape);
                        }
                    }) as Box<dyn FnMut(_)>);

                document
                    .add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let glassy = header_state.glassy(*menu);
    let palette = Palette::derive(props.active.theme, menu.is_open);

    let toggle_menu = {
        let on_menu_command = on_menu_command.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_menu_command.emit(MenuCommand::Toggle);
        })
    };

    html! {
        <>
            <header
                class={classes!("site-header", glassy.then_some("glassy"))}
                data-theme={props.active.theme.as_str()}
            >
                <div class="header-content">
                    <div class="brand">
                        <div class="brand-roundel glass-panel">
                            <span>{"RB"}</span>
                        </div>
                        <div class="brand-copy">
                            <p class={classes!("brand-name", palette.text_class())}>
                                {"Raccoon Builds"}
                            </p>
                            <p class="brand-tagline">{"Arquitectura precisa"}</p>
                        </div>
                    </div>
                    <nav class="desktop-nav">
                        {
                            NAV_ITEMS.iter().map(|item| {
                                let active = props.active.id == item.id;
                                html! {
                                    <a
                                        key={item.id}
                                        href={format!("#{}", item.id)}
                                        class={classes!(
                                            "nav-link",
                                            palette.text_class(),
                                            active.then_some("active"),
                                        )}
                                    >
                                        { item.label }
                                        { if active {
                                            html! { <span class="nav-underline" /> }
                                        } else {
                                            html! {}
                                        } }
                                    </a>
                                }
                            }).collect::<Html>()
                        }
                    </nav>
                    <button
                        ref={toggle_ref.clone()}
                        class="glass-button menu-button"
                        aria-expanded={menu.is_open.to_string()}
                        aria-controls="menu-overlay"
                        onclick={toggle_menu}
                    >
                        { if menu.is_open { "Cerrar" } else { "Menú" } }
                    </button>
                </div>
            </header>
            <MenuOverlay
                id="menu-overlay"
                is_open={menu.is_open}
                active_id={props.active.id.clone()}
                toggle_ref={toggle_ref}
                on_command={on_menu_command}
            />
        </>
    }
}
