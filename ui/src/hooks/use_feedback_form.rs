use api::{FeedbackConfig, HttpFeedbackService};
use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, info, warn};

use crate::flow::{self, FileSource};
use crate::state::{DragEvent, PreviewTicket, UploadState};

/// The form's state, holding browser (or webview) file handles.
pub type FormState = UploadState<FileData>;

/// Handle to the upload form's reactive state and the feedback service.
///
/// Every method is meant to be called from an event handler; the
/// asynchronous halves (reading files, waiting on the service) are spawned
/// onto the component's scope and write back into the same signal.
#[derive(Clone, Copy, PartialEq)]
pub struct FeedbackForm {
    state: Signal<FormState>,
    service: Signal<HttpFeedbackService>,
}

impl FeedbackForm {
    /// Call `.read()` on this in a component to subscribe to changes.
    pub fn state(&self) -> Signal<FormState> {
        self.state
    }

    /// A file chosen through the picker.
    pub fn pick(&mut self, file: FileData) {
        info!("selected {}", file.file_name());
        let ticket = self.state.write().select_file(file.clone());
        self.spawn_preview(ticket, file);
    }

    pub fn drag(&mut self, event: DragEvent) {
        self.state.write().drag(event);
    }

    /// A drop on the zone, with its first file if it carried any.
    pub fn drop_file(&mut self, file: Option<FileData>) {
        let ticket = self.state.write().drop_file(file.clone());
        if let (Some(ticket), Some(file)) = (ticket, file) {
            info!("dropped {}", file.file_name());
            self.spawn_preview(ticket, file);
        }
    }

    /// Sends the selected file for feedback. Does nothing without a file.
    pub fn submit(&mut self) {
        let Some(ticket) = self.state.write().begin_submit() else {
            debug!("submit ignored: no file selected");
            return;
        };

        let service = self.service.peek().clone();
        let mut state = self.state;
        spawn(async move {
            let outcome = flow::run_submission(&service, ticket).await;
            let generation = outcome.generation;
            if !state.write().complete_submit(outcome) {
                debug!("discarding superseded feedback #{generation}");
            }
        });
    }

    fn spawn_preview(&self, ticket: PreviewTicket, file: FileData) {
        let mut state = self.state;
        spawn(async move {
            match flow::load_preview(&file).await {
                Ok(data_uri) => {
                    if !state.write().finish_preview(ticket, data_uri) {
                        debug!("discarding preview of replaced {}", file.file_name());
                    }
                }
                Err(e) => {
                    warn!("could not preview {}: {e}", file.file_name());
                    state.write().fail_preview(ticket);
                }
            }
        });
    }
}

/// Creates the form state. Expects a [`FeedbackConfig`] in context.
pub fn use_feedback_form() -> FeedbackForm {
    let config = use_context::<FeedbackConfig>();
    let state = use_signal(FormState::new);
    let service = use_signal(|| HttpFeedbackService::new(&config));
    FeedbackForm { state, service }
}
