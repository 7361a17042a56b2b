//! Contract Chat - View Model

use super::model::ask;
use super::transcript::ChatTranscript;
use crate::domain::a001_contract_analysis::ui::details::state::ActiveDocument;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long an inline chat error stays visible
const ERROR_DISMISS_MS: u32 = 6000;

#[derive(Clone, Copy)]
pub struct ContractChatVm {
    pub transcript: RwSignal<ChatTranscript>,
    document: Signal<Option<ActiveDocument>>,
    context: Signal<String>,
}

impl ContractChatVm {
    /// `document` is the active analysis, `context` the summary sent along
    /// with every question
    pub fn new(document: Signal<Option<ActiveDocument>>, context: Signal<String>) -> Self {
        Self {
            transcript: RwSignal::new(ChatTranscript::new()),
            document,
            context,
        }
    }

    pub fn can_send(&self) -> Signal<bool> {
        let transcript = self.transcript;
        Signal::derive(move || transcript.with(|t| t.can_submit()))
    }

    pub fn draft(&self) -> Signal<String> {
        let transcript = self.transcript;
        Signal::derive(move || transcript.with(|t| t.draft().to_string()))
    }

    pub fn set_draft(&self, text: String) {
        self.transcript.update(|t| t.set_draft(text));
    }

    pub fn is_sending(&self) -> Signal<bool> {
        let transcript = self.transcript;
        Signal::derive(move || transcript.with(|t| t.is_sending()))
    }

    /// Bind the transcript to the current document; a new document clears it
    pub fn sync(&self) {
        let document = self.document.get();
        let reset = self
            .transcript
            .try_update(|t| t.sync_document(document.as_ref()))
            .unwrap_or(false);
        if reset {
            match &document {
                Some(doc) => log::debug!("chat bound to document {}", doc.hash),
                None => log::debug!("chat cleared"),
            }
        }
    }

    pub fn send(&self) {
        let begun = self.transcript.try_update(|t| t.send_draft());
        let ticket = match begun {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                log::debug!("question refused: {}", err);
                self.schedule_dismiss();
                return;
            }
            None => return,
        };

        let transcript = self.transcript;
        let context = self.context.get_untracked();
        let vm = *self;
        spawn_local(async move {
            let outcome = ask(ticket.document_hash(), &context, ticket.question()).await;
            if let Err(err) = &outcome {
                log::warn!("chat request failed: {}", err);
            }
            let applied = transcript.try_update(|t| t.resolve(ticket, outcome)).unwrap_or(false);
            if !applied {
                log::debug!("stale chat answer discarded");
                return;
            }
            vm.schedule_dismiss();
        });
    }

    /// Clear the current error after a delay unless a newer one replaced it
    fn schedule_dismiss(&self) {
        let Some(seq) = self
            .transcript
            .try_with_untracked(|t| t.error().is_some().then(|| t.error_seq()))
            .flatten()
        else {
            return;
        };
        let transcript = self.transcript;
        spawn_local(async move {
            TimeoutFuture::new(ERROR_DISMISS_MS).await;
            transcript.try_update(|t| t.dismiss_error(seq));
        });
    }
}
