//! Contract analysis - View Model
//!
//! Reactive wrapper around [`AnalysisSession`]. Provided once at the app
//! root so the analysis page and the history page drive the same session.

use super::model::analyze;
use super::state::{ActiveDocument, AnalysisSession, AnalysisTicket};
use crate::domain::a003_analysis_history::ui::list::model::fetch_detail;
use crate::shared::api_error::ApiError;
use crate::shared::config::AppConfig;
use contracts::domain::a001_contract_analysis::aggregate::{AnalysisListItem, AnalysisResult};
use contracts::domain::a001_contract_analysis::upload::{UploadCandidate, UploadPolicy};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct ContractAnalysisVm {
    pub session: RwSignal<AnalysisSession>,
    pub policy: UploadPolicy,
    in_flight: StoredValue<Option<web_sys::AbortController>, LocalStorage>,
}

impl ContractAnalysisVm {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: RwSignal::new(AnalysisSession::new()),
            policy: config.upload_policy(),
            in_flight: StoredValue::new_local(None),
        }
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_loading()))
    }

    pub fn active_document(&self) -> Signal<Option<ActiveDocument>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.active_document()))
    }

    pub fn summary(&self) -> Signal<String> {
        let session = self.session;
        Signal::derive(move || {
            session.with(|s| s.result().map(|r| r.summary.clone()).unwrap_or_default())
        })
    }

    /// Submit an accepted upload (`Idle/Ready/Failed --selectFile--> Uploading`)
    pub fn select_file(&self, file: web_sys::File, candidate: UploadCandidate) {
        let Some(ticket) = self.session.try_update(|s| s.select_file(candidate)).flatten() else {
            log::debug!("analysis already running, selection ignored");
            return;
        };
        let abort = self.new_abort_signal();
        self.run(ticket, analyze(file, abort));
    }

    /// Load a stored analysis from history into the session. Returns `false`
    /// when another analysis is running and the item was not opened.
    pub fn open_saved(&self, item: AnalysisListItem) -> bool {
        let Some(ticket) = self
            .session
            .try_update(|s| s.open_saved(item.id, item.label()))
            .flatten()
        else {
            log::debug!("analysis already running, history item #{} ignored", item.id);
            return false;
        };
        let abort = self.new_abort_signal();
        self.run(ticket, async move {
            let detail = fetch_detail(item.id, abort).await?;
            Ok(detail.into_result(item.file_hash))
        });
        true
    }

    /// Drop the file and everything derived from it (`any --remove--> Idle`)
    pub fn remove(&self) {
        self.abort_in_flight();
        self.session.update(|s| s.remove());
    }

    fn run<Fut>(&self, ticket: AnalysisTicket, request: Fut)
    where
        Fut: Future<Output = Result<AnalysisResult, ApiError>> + 'static,
    {
        let session = self.session;
        let in_flight = self.in_flight;
        spawn_local(async move {
            let outcome = request.await;
            let failure = outcome.as_ref().err().cloned();
            let applied = session.try_update(|s| s.resolve(ticket, outcome)).unwrap_or(false);
            if !applied {
                log::debug!("stale analysis response discarded");
                return;
            }
            in_flight.set_value(None);
            if let Some(err) = failure {
                log::error!("analysis failed: {}", err);
            }
        });
    }

    fn new_abort_signal(&self) -> Option<web_sys::AbortSignal> {
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        self.in_flight.set_value(controller);
        signal
    }

    fn abort_in_flight(&self) {
        if let Some(controller) = self.in_flight.try_update_value(Option::take).flatten() {
            log::debug!("aborting in-flight analysis request");
            controller.abort();
        }
    }
}
