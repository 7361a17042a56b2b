use super::model::fetch_list;
use crate::domain::a001_contract_analysis::ui::details::ContractAnalysisVm;
use crate::shared::api_error::ApiError;
use crate::shared::error_message::ErrorMessage;
use crate::shared::icons::icon;
use contracts::domain::a001_contract_analysis::aggregate::{short_hash, AnalysisListItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance, Spinner};

#[component]
#[allow(non_snake_case)]
pub fn AnalysisHistoryPage() -> impl IntoView {
    let analysis_vm = use_context::<ContractAnalysisVm>().expect("ContractAnalysisVm not provided");
    let navigate = StoredValue::new_local(use_navigate());

    let (items, set_items) = signal::<Vec<AnalysisListItem>>(Vec::new());
    let (error, set_error) = signal::<Option<ApiError>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let load = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_list().await {
                Ok(v) => {
                    log::debug!("loaded {} stored analyses", v.len());
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    let open = move |item: AnalysisListItem| {
        if analysis_vm.open_saved(item) {
            navigate.with_value(|navigate| navigate("/", Default::default()));
        }
    };

    load();

    view! {
        <div style="max-width: 860px; margin: 0 auto; padding: 32px 16px;">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <h1 style="font-size: 24px; font-weight: bold; display: flex; align-items: center; gap: 8px;">
                    {icon("history")}
                    "Saved analyses"
                </h1>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    "Refresh"
                </Button>
            </div>

            {move || error.get().map(|e| view! { <ErrorMessage title="Could not load history" error=e /> })}

            <Show when=move || is_loading.get()>
                <div style="display: flex; justify-content: center; padding: 24px 0;">
                    <Spinner label="Loading..." />
                </div>
            </Show>

            <Show when=move || !is_loading.get() && error.with(Option::is_none) && items.with(Vec::is_empty)>
                <p style="margin-top: 24px; text-align: center; color: var(--colorNeutralForeground3, #94a3b8);">
                    "No analyses yet. Upload a contract to get started."
                </p>
            </Show>

            <div style="margin-top: 16px; display: flex; flex-direction: column; gap: 8px;">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    let:item
                >
                    {{
                        let created = item.created_at.format("%Y-%m-%d %H:%M").to_string();
                        let hash = short_hash(&item.file_hash).to_string();
                        let preview = item.summary_preview.clone();
                        let label = item.label();
                        view! {
                            <div style="display: flex; align-items: center; justify-content: space-between; gap: 16px; padding: 12px 16px; border: 1px solid var(--colorNeutralStroke2, #e2e8f0); border-radius: 8px; background: var(--colorNeutralBackground1, #fff);">
                                <div style="min-width: 0;">
                                    <div style="font-weight: 600;">{label}</div>
                                    <div style="font-size: 12px; color: var(--colorNeutralForeground3, #94a3b8);">
                                        {created} " · " {hash}
                                    </div>
                                    <div style="margin-top: 4px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                        {preview}
                                    </div>
                                </div>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=analysis_vm.is_loading()
                                    on_click=move |_| open(item.clone())
                                >
                                    "Open"
                                </Button>
                            </div>
                        }
                    }}
                </For>
            </div>
        </div>
    }
}
