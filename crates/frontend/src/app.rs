use crate::domain::a001_contract_analysis::ui::details::{ContractAnalysisPage, ContractAnalysisVm};
use crate::domain::a002_contract_chat::ui::ContractChatVm;
use crate::domain::a003_analysis_history::ui::list::AnalysisHistoryPage;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!(
        "api base {}, upload limit {}MB",
        config.api_base,
        config.max_upload_mb
    );

    // One analysis session and one chat for the whole app, so switching
    // between pages keeps the current result.
    let analysis_vm = ContractAnalysisVm::new(&config);
    let chat_vm = ContractChatVm::new(analysis_vm.active_document(), analysis_vm.summary());
    provide_context(analysis_vm);
    provide_context(chat_vm);

    // The chat follows the active document even while it is not mounted
    Effect::new(move |_| chat_vm.sync());

    view! {
        <ConfigProvider>
            <Router>
                <header class="app-header">
                    <span class="app-header__brand">{icon("book")} "Documind"</span>
                    <nav class="app-header__nav">
                        <A href="/">"Analyze"</A>
                        <A href="/history">"History"</A>
                    </nav>
                </header>
                <main>
                    <Routes fallback=|| view! { <p style="padding: 32px; text-align: center;">"Page not found."</p> }>
                        <Route path=path!("/") view=ContractAnalysisPage />
                        <Route path=path!("/history") view=AnalysisHistoryPage />
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
