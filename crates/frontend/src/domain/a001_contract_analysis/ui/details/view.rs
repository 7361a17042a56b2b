//! Contract analysis - page component

use super::state::AnalysisPhase;
use super::view_model::ContractAnalysisVm;
use crate::domain::a001_contract_analysis::ui::results::ResultsView;
use crate::domain::a001_contract_analysis::ui::upload::{FileInfo, UploadWidget};
use crate::domain::a002_contract_chat::ui::ContractChat;
use crate::shared::error_message::ErrorMessage;
use contracts::domain::a001_contract_analysis::upload::UploadCandidate;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ContractAnalysisPage() -> impl IntoView {
    let vm = use_context::<ContractAnalysisVm>().expect("ContractAnalysisVm not provided");

    let result = Memo::new(move |_| vm.session.with(|s| s.result().cloned()));

    let on_file_selected = Callback::new(move |(file, candidate): (web_sys::File, UploadCandidate)| {
        vm.select_file(file, candidate);
    });

    view! {
        <div style="max-width: 860px; margin: 0 auto; padding: 32px 16px;">
            <h1 style="font-size: 26px; font-weight: bold; text-align: center; margin-bottom: 8px;">
                "Contract Analysis & Summary"
            </h1>
            <p style="text-align: center; color: var(--colorNeutralForeground3, #64748b); margin-bottom: 24px;">
                "Upload a contract to get a summary, its key clauses and potential risks, then ask follow-up questions."
            </p>

            <UploadWidget
                policy=vm.policy
                is_loading=vm.is_loading()
                on_file_selected=on_file_selected
            />

            {move || {
                vm.session
                    .with(|s| s.document().map(|d| (d.label(), d.size_label())))
                    .map(|(name, size_label)| {
                        view! {
                            <FileInfo
                                name=name
                                size_label=size_label
                                on_remove=Callback::new(move |_| vm.remove())
                            />
                        }
                    })
            }}

            <Show when=move || vm.session.with(|s| s.phase() == AnalysisPhase::Uploading)>
                <div style="display: flex; flex-direction: column; align-items: center; padding: 32px 0;">
                    <Spinner label="Analyzing, please wait..." />
                </div>
            </Show>

            {move || {
                vm.session
                    .with(|s| s.error().cloned())
                    .map(|error| view! { <ErrorMessage title="Analysis failed" error=error /> })
            }}

            {move || {
                result
                    .get()
                    .map(|result| {
                        view! {
                            <ResultsView result=result />
                            <ContractChat />
                        }
                    })
            }}
        </div>
    }
}
