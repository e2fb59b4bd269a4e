//! Floating support chat: toggle button, panel, transcript and input row.

#[cfg(test)]
#[path = "support_chat_test.rs"]
mod support_chat_test;

use chatbot::conversation::is_submit_key;
use chatbot::{AppContext, ConversationState, Origin};
use leptos::prelude::*;

use crate::net::api::GlooTransport;
use crate::net::exchange::ExchangeScope;

const PANEL_TITLE: &str = "Gemini Chatbot";
const TYPING_TEXT: &str = "Typing...";

/// Row alignment class for a message bubble.
fn row_class(origin: Origin) -> &'static str {
    match origin {
        Origin::User => "chatbot__row chatbot__row--user",
        Origin::Assistant => "chatbot__row chatbot__row--assistant",
    }
}

/// Bubble class for a message.
fn bubble_class(origin: Origin) -> &'static str {
    match origin {
        Origin::User => "chatbot__bubble chatbot__bubble--user",
        Origin::Assistant => "chatbot__bubble chatbot__bubble--assistant",
    }
}

/// Support chat widget.
///
/// Owns one `ConversationState` for its lifetime. Each submission runs as a
/// local task inside an `ExchangeScope`; replies arriving after teardown are
/// discarded.
#[component]
pub fn Chatbot() -> impl IntoView {
    let app = expect_context::<RwSignal<AppContext>>();
    let endpoint = StoredValue::new(app.with_untracked(|ctx| ctx.config().chat_endpoint()));

    let chat = RwSignal::new(ConversationState::new());
    let root_ref = NodeRef::<leptos::html::Div>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let scope = ExchangeScope::new();
    let scope_cleanup = scope.clone();
    on_cleanup(move || scope_cleanup.close());
    let scope = StoredValue::new(scope);

    // Close on presses outside the widget. Released on teardown.
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            if !chat.with_untracked(|c| c.is_open) {
                return;
            }
            let inside = root_ref
                .get_untracked()
                .is_some_and(|root| crate::util::dom::event_within(&ev, &root));
            chat.update(|c| c.pointer_down(inside));
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages().len(), c.is_open));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                crate::util::dom::scroll_to_bottom(&el);
            }
        }
    });

    let do_send = move || {
        let Some(text) = chat.try_update(ConversationState::submit_draft).flatten() else {
            return;
        };
        let transport = GlooTransport::new(endpoint.get_value());
        let scope = scope.get_value();
        leptos::task::spawn_local(async move {
            if let Some(reply) = scope.run(&transport, &text).await {
                chat.try_update(|c| c.finish_exchange(reply));
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let toggle = move |_| chat.update(ConversationState::toggle_panel);

    view! {
        // Outside-click region is the whole container, toggle included, so a
        // press on the toggle never closes and then reopens the panel.
        <div class="chatbot" node_ref=root_ref>
            <button class="chatbot__toggle" aria-label="Open support chat" on:click=toggle>
                <span class="chatbot__toggle-icon"></span>
            </button>

            <Show when=move || chat.with(|c| c.is_open)>
                <div class="chatbot__panel">
                    <div class="chatbot__header">
                        <span class="chatbot__title">{PANEL_TITLE}</span>
                        <button class="chatbot__collapse" aria-label="Close support chat" on:click=toggle>
                            <span class="chatbot__collapse-icon"></span>
                        </button>
                    </div>

                    <div class="chatbot__messages" node_ref=messages_ref>
                        {move || {
                            chat.with(|c| {
                                c.messages()
                                    .iter()
                                    .map(|msg| {
                                        let text = msg.text.clone();
                                        view! {
                                            <div class=row_class(msg.origin)>
                                                <p class=bubble_class(msg.origin)>{text}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                        {move || {
                            chat.with(ConversationState::is_pending)
                                .then(|| {
                                    view! {
                                        <div class=row_class(Origin::Assistant)>
                                            <p class=bubble_class(Origin::Assistant)>{TYPING_TEXT}</p>
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <div class="chatbot__input-row">
                        <input
                            class="chatbot__input"
                            type="text"
                            placeholder="Type your message..."
                            prop:value=move || chat.with(|c| c.draft.clone())
                            on:input=move |ev| chat.update(|c| c.set_draft(event_target_value(&ev)))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary chatbot__send"
                            on:click=on_click
                            disabled=move || !chat.with(ConversationState::can_send)
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
