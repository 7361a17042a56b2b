//! Upload widget: drop zone, file picker and the selected-file chip

use super::gate::{select_first, DragPhase, DragState, UploadOutcome};
use crate::shared::icons::icon;
use contracts::domain::a001_contract_analysis::upload::{
    UploadCandidate, UploadPolicy, UploadRejection,
};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub fn candidate_from_file(file: &web_sys::File) -> UploadCandidate {
    UploadCandidate::new(file.name(), file.type_(), file.size() as u64)
}

fn files_of(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    list.map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}

#[component]
#[allow(non_snake_case)]
pub fn UploadWidget(
    /// Upload limit and accepted types
    policy: UploadPolicy,
    /// True while an analysis is running; disables the picker
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Called once per pick/drop with the accepted file
    on_file_selected: Callback<(web_sys::File, UploadCandidate)>,
) -> impl IntoView {
    let drag = RwSignal::new(DragState::default());
    let rejection = RwSignal::new(None::<UploadRejection>);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_files = move |files: Vec<web_sys::File>| {
        match select_first(files, is_loading.get_untracked(), &policy, candidate_from_file) {
            UploadOutcome::Accepted(file, candidate) => {
                log::info!(
                    "upload accepted: {} ({}, {} bytes)",
                    candidate.name,
                    candidate.mime_type,
                    candidate.size_bytes
                );
                rejection.set(None);
                on_file_selected.run((file, candidate));
            }
            UploadOutcome::Rejected(reason) => {
                log::warn!("upload rejected: {}", reason);
                rejection.set(Some(reason));
            }
            UploadOutcome::Ignored => {}
        }
    };

    let handle_drag = move |ev: ev::DragEvent, phase: DragPhase| {
        ev.prevent_default();
        ev.stop_propagation();
        drag.update(|d| d.apply(phase));
    };

    let handle_drop = move |ev: ev::DragEvent| {
        handle_drag(ev.clone(), DragPhase::Drop);
        let files = files_of(ev.data_transfer().and_then(|dt| dt.files()));
        handle_files(files);
    };

    let handle_change = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        handle_files(files_of(input.files()));
        // Allow picking the same file again
        input.set_value("");
    };

    let open_picker = move |_| {
        if is_loading.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div>
            <div
                class="drop-zone"
                class:drop-zone--active=move || drag.get().is_active()
                on:dragenter=move |ev| handle_drag(ev, DragPhase::Enter)
                on:dragover=move |ev| handle_drag(ev, DragPhase::Over)
                on:dragleave=move |ev| handle_drag(ev, DragPhase::Leave)
                on:drop=handle_drop
            >
                <div style="color: var(--colorNeutralForeground3, #94a3b8);">{icon("upload")}</div>
                <p style="margin-top: 16px; color: var(--colorNeutralForeground2, #64748b);">
                    "Drag and drop a file here, or "
                    <span
                        style="font-weight: 600; color: var(--colorBrandForeground1, #2563eb); cursor: pointer;"
                        on:click=open_picker
                    >
                        "choose a file"
                    </span>
                </p>
                <p style="font-size: 12px; color: var(--colorNeutralForeground3, #94a3b8);">
                    {format!("PDF, DOC or DOCX, up to {}MB", policy.limit_mb())}
                </p>
                <input
                    type="file"
                    node_ref=input_ref
                    accept=UploadPolicy::accept_attribute()
                    style="display: none;"
                    disabled=move || is_loading.get()
                    on:change=handle_change
                />
            </div>
            {move || {
                rejection
                    .get()
                    .map(|reason| {
                        view! {
                            <div role="alert" style="margin-top: 8px; color: var(--color-error, #b91c1c); font-size: 14px;">
                                {reason.to_string()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Selected file with its size and a remove button
#[component]
#[allow(non_snake_case)]
pub fn FileInfo(
    name: String,
    size_label: Option<String>,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; justify-content: space-between; margin-top: 16px; padding: 12px 16px; background: var(--colorNeutralBackground2, #f8fafc); border: 1px solid var(--colorNeutralStroke2, #e2e8f0); border-radius: 8px;">
            <div style="display: flex; align-items: center; gap: 12px; min-width: 0;">
                <span style="color: var(--colorBrandForeground1, #3b82f6);">{icon("paperclip")}</span>
                <span
                    style="font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; max-width: 320px;"
                    title=name.clone()
                >
                    {name.clone()}
                </span>
                {size_label.map(|size| view! {
                    <span style="font-size: 12px; color: var(--colorNeutralForeground3, #94a3b8);">{size}</span>
                })}
            </div>
            <button
                class="button button--icon"
                aria-label="Remove file"
                on:click=move |_| on_remove.run(())
            >
                {icon("close")}
            </button>
        </div>
    }
}
