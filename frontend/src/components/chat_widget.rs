use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use site_core::{ChatCommand, ChatState};

use crate::content::CHAT_SCRIPT;
use crate::dom;

/// Delay between scripted messages appearing, in milliseconds.
const REVEAL_INTERVAL_MS: u32 = 250;

struct ChatStore(ChatState);

impl Reducible for ChatStore {
    type Action = ChatCommand;

    fn reduce(self: Rc<Self>, action: ChatCommand) -> Rc<Self> {
        Rc::new(ChatStore(self.0.clone().apply(action)))
    }
}

impl PartialEq for ChatStore {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Floating chat bubble with a canned, scripted conversation. Nothing is
/// ever sent anywhere; the draft input only clears itself on submit.
#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let chat = use_reducer(|| ChatStore(ChatState::default()));
    let panel_ref = use_node_ref();
    let bubble_ref = use_node_ref();
    let input_ref = use_node_ref();

    // Close on Escape while open.
    {
        let dispatcher = chat.dispatcher();
        use_effect_with_deps(
            move |&open| {
                let mut registered = None;
                if open {
                    let document = web_sys::window().unwrap().document().unwrap();
                    let key_callback =
                        Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                            if event.key() == "Escape" {
                                dispatcher.dispatch(ChatCommand::Escape);
                            }
                        }) as Box<dyn FnMut(_)>);
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    registered = Some((document, key_callback));
                }
                move || {
                    if let Some((document, key_callback)) = registered {
                        document
                            .remove_event_listener_with_callback(
                                "keydown",
                                key_callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                    }
                }
            },
            chat.0.open,
        );
    }

    // Close on pointer-down outside both the panel and the bubble.
    {
        let dispatcher = chat.dispatcher();
        let panel_ref = panel_ref.clone();
        let bubble_ref = bubble_ref.clone();
        use_effect_with_deps(
            move |&open| {
                let mut registered = None;
                if open {
                    let document = web_sys::window().unwrap().document().unwrap();
                    let click_callback =
                        Closure::wrap(Box::new(move |event: web_sys::Event| {
                            let in_panel = dom::event_target_within(&event, panel_ref.cast());
                            let in_bubble = dom::event_target_within(&event, bubble_ref.cast());
                            if !in_panel && !in_bubble {
                                dispatcher.dispatch(ChatCommand::OutsideClick);
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
            chat.0.open,
        );
    }

    // Focus the draft input when the panel opens.
    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |&open| {
                if open {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                || ()
            },
            chat.0.open,
        );
    }

    // Reveal the scripted messages one by one while the panel is open.
    {
        let dispatcher = chat.dispatcher();
        use_effect_with_deps(
            move |&(open, revealed)| {
                let mut timeout = None;
                if open && revealed < CHAT_SCRIPT.len() {
                    timeout = Some(Timeout::new(REVEAL_INTERVAL_MS, move || {
                        dispatcher.dispatch(ChatCommand::RevealNext {
                            script_len: CHAT_SCRIPT.len(),
                        });
                    }));
                }
                // Dropping a pending timeout cancels it.
                move || drop(timeout)
            },
            (chat.0.open, chat.0.revealed),
        );
    }

    let toggle = {
        let dispatcher = chat.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ChatCommand::ToggleBubble))
    };
    let close = {
        let dispatcher = chat.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ChatCommand::ToggleBubble))
    };
    let hover_start = {
        let dispatcher = chat.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ChatCommand::HoverStart))
    };
    let hover_end = {
        let dispatcher = chat.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ChatCommand::HoverEnd))
    };
    let edit_draft = {
        let dispatcher = chat.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(ChatCommand::EditDraft(input.value()));
        })
    };
    let submit = {
        let dispatcher = chat.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(ChatCommand::Submit);
        })
    };

    let helper_line = if chat.0.hovered {
        "¿En qué te ayudo?"
    } else {
        "Responde en segundos"
    };

    html! {
        <div class="chat-widget">
            <button
                ref={bubble_ref}
                class="chat-bubble glass-panel"
                onclick={toggle}
                onmouseenter={hover_start}
                onmouseleave={hover_end}
                aria-expanded={chat.0.open.to_string()}
                aria-label="Abrir asistente de chat"
            >
                <Mascot waving={chat.0.hovered} />
                <div class="chat-bubble-copy">
                    <span class="chat-kicker">{"Asistente"}</span>
                    <span class="chat-name">{"Mapache en obra"}</span>
                    <span class="chat-helper">{ helper_line }</span>
                </div>
            </button>
            { if chat.0.open {
                html! {
                    <div ref={panel_ref} class="chat-panel glass-panel">
                        <div class="chat-panel-header">
                            <div>
                                <p class="chat-kicker">{"Chat"}</p>
                                <h3 class="chat-title">{"Raccoon Builds"}</h3>
                            </div>
                            <button class="chat-esc glass-button" onclick={close}>{"Esc"}</button>
                        </div>
                        <div class="chat-messages">
                            {
                                CHAT_SCRIPT.iter().take(chat.0.revealed).map(|message| {
                                    html! {
                                        <div class={classes!(
                                            "chat-message",
                                            if message.from_bot { "from-bot" } else { "from-user" },
                                        )}>
                                            <div class="chat-message-text">{ message.text }</div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                        <form class="chat-form" onsubmit={submit}>
                            <input
                                ref={input_ref}
                                type="text"
                                value={chat.0.draft.clone()}
                                oninput={edit_draft}
                                placeholder="Escribe tu idea..."
                            />
                            <button type="submit" class="glass-button">{"Enviar"}</button>
                        </form>
                    </div>
                }
            } else {
                html! {}
            } }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MascotProps {
    waving: bool,
}

/// The firm's raccoon-on-site mascot; the hard hat hand waves on hover.
#[function_component(Mascot)]
fn mascot(props: &MascotProps) -> Html {
    html! {
        <svg
            width="48"
            height="48"
            viewBox="0 0 128 128"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            class="chat-mascot"
        >
            <rect x="20" y="40" width="88" height="64" rx="28" fill="#1E293B" />
            <rect x="30" y="48" width="68" height="50" rx="20" fill="#0F172A" />
            <rect x="24" y="32" width="80" height="20" rx="6" fill="#38BDF8" />
            <path
                d="M64 70c-16 0-24-10-24-10s4-14 24-14 24 14 24 14-8 10-24 10Z"
                fill="#CBD5F5"
            />
            <circle cx="52" cy="56" r="6" fill="white" />
            <circle cx="76" cy="56" r="6" fill="white" />
            <circle cx="52" cy="56" r="3" fill="#0B1224" />
            <circle cx="76" cy="56" r="3" fill="#0B1224" />
            <rect x="54" y="74" width="20" height="8" rx="4" fill="#38BDF8" />
            <g class={classes!("mascot-hand", props.waving.then_some("waving"))}>
                <rect
                    x="92" y="62" width="16" height="28" rx="8"
                    fill="#FACC15" stroke="#0F172A" stroke-width="3"
                />
                <circle cx="100" cy="60" r="8" fill="#FACC15" stroke="#0F172A" stroke-width="3" />
            </g>
            <path d="M74 18c0-6-6-10-12-10s-12 4-12 10h24Z" fill="#0EA5E9" />
        </svg>
    }
}
