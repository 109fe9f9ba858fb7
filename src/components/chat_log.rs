//! Chat Log Component
//!
//! Fixed bottom-left overlay that replays the scripted chat on a loop.
//! The script state machine lives in core; this component owns the timer
//! that drives it and mirrors the visible window into a signal.

use dioxus::prelude::*;

use blockfolio_core::chat::ChatScript;
use blockfolio_core::content::CHAT_SCRIPT;
use blockfolio_core::types::ChatMessage;

#[component]
pub fn ChatLog() -> Element {
    let mut visible: Signal<Vec<&'static ChatMessage>> = use_signal(Vec::new);

    // One long-lived timer task per mount; the spawn is scope-owned so it
    // stops with the component.
    use_effect(move || {
        spawn(async move {
            let mut script = ChatScript::new(CHAT_SCRIPT);
            loop {
                tokio::time::sleep(script.delay()).await;
                if script.is_exhausted() {
                    script.reset();
                } else {
                    script.advance();
                }
                visible.set(script.visible().collect());
            }
        });
    });

    let messages = visible();
    let log_class = if messages.is_empty() { "chat-log empty" } else { "chat-log" };

    rsx! {
        div { class: "{log_class}",
            for message in messages {
                div {
                    key: "{message.id}",
                    class: "chat-line",
                    if message.is_system {
                        span { style: "color: {message.color};", "{message.text}" }
                    } else {
                        span { style: "color: {message.color};", "<{message.sender}> " }
                        span { class: "chat-text", "{message.text}" }
                    }
                }
            }
        }
    }
}
