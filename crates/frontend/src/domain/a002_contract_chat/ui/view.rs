//! Contract Chat - View Component

use super::transcript::ChatError;
use super::view_model::ContractChatVm;
use crate::shared::error_message::ErrorMessage;
use crate::shared::icons::icon;
use contracts::domain::a002_contract_chat::aggregate::MAX_QUESTION_CHARS;
use leptos::prelude::*;
use thaw::*;

fn chat_error_view(error: ChatError) -> AnyView {
    match error {
        ChatError::Api(err) => {
            view! { <ErrorMessage title="The AI could not answer" error=err /> }.into_any()
        }
        other => view! {
            <div role="alert" style="margin-top: 8px; color: var(--color-error, #b91c1c); font-size: 14px;">
                {other.to_string()}
            </div>
        }
        .into_any(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ContractChat() -> impl IntoView {
    let vm = use_context::<ContractChatVm>().expect("ContractChatVm not provided");
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    Effect::new(move |_| {
        let _ = vm.transcript.with(|t| t.messages().len());
        scroll_to_bottom();
    });

    let can_send = vm.can_send();
    let is_sending = vm.is_sending();
    let draft = vm.draft();

    view! {
        <div style="margin-top: 32px; padding: 16px; border: 1px solid var(--colorNeutralStroke2, #e2e8f0); border-radius: 8px; display: flex; flex-direction: column; gap: 12px;">
            <h2 style="font-size: 18px; font-weight: 600; margin: 0;">"Ask about this contract"</h2>

            <div
                node_ref=messages_container_ref
                style="max-height: 360px; overflow-y: auto; display: flex; flex-direction: column; gap: 10px; padding: 4px;"
            >
                <Show when=move || vm.transcript.with(|t| t.messages().is_empty())>
                    <p style="color: var(--colorNeutralForeground3, #94a3b8); text-align: center; margin: 16px 0;">
                        "Ask about the contract, its clauses, risks..."
                    </p>
                </Show>
                <For
                    each=move || vm.transcript.with(|t| t.messages().to_vec())
                    key=|msg| msg.id
                    let:msg
                >
                    {
                        let is_user = msg.is_user();
                        view! {
                            <div
                                style=if is_user {
                                    "align-self: flex-end; max-width: 75%;"
                                } else {
                                    "align-self: flex-start; max-width: 75%;"
                                }
                            >
                                <div
                                    style=if is_user {
                                        "background: var(--colorBrandBackground2, #dbeafe); padding: 10px 14px; border-radius: 12px;"
                                    } else {
                                        "background: var(--colorNeutralBackground2, #f1f5f9); padding: 10px 14px; border-radius: 12px;"
                                    }
                                >
                                    <div style="white-space: pre-wrap;">{msg.content.clone()}</div>
                                    <div style="font-size: 11px; opacity: 0.6; margin-top: 4px;">
                                        {msg.created_at.format("%H:%M").to_string()}
                                    </div>
                                </div>
                            </div>
                        }
                    }
                </For>
            </div>

            <Show when=move || is_sending.get()>
                <Spinner label="Getting an answer from the AI..." />
            </Show>

            {move || vm.transcript.with(|t| t.error().cloned()).map(chat_error_view)}

            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <textarea
                        style="box-sizing: border-box; width: 100%; min-height: 60px; max-height: 200px; padding: 8px; border: 1px solid var(--colorNeutralStroke2, #e2e8f0); border-radius: 6px; font: inherit; resize: vertical;"
                        placeholder=format!(
                            "Your question (up to {} characters, Enter to send, Shift+Enter for a new line)",
                            MAX_QUESTION_CHARS,
                        )
                        prop:value=move || draft.get()
                        disabled=move || is_sending.get()
                        on:input=move |ev| vm.set_draft(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                vm.send();
                            }
                        }
                    ></textarea>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_send.get())
                    on_click=move |_| vm.send()
                >
                    {icon("send")}
                    " Send"
                </Button>
            </Flex>
        </div>
    }
}
