//! The upload form's state machine.
//!
//! Kept free of Dioxus types so every transition can be exercised directly.
//! The view wraps one [`UploadState`] in a `Signal` and calls these methods
//! from its event handlers.
//!
//! Both asynchronous steps (reading a preview, waiting for feedback) are
//! tagged with a generation number. Only the latest selection may publish a
//! preview and only the latest submission may publish feedback; anything
//! older that completes late is dropped.

use api::FeedbackError;

/// DOM drag events the drop zone reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
}

/// Issued by [`UploadState::select_file`]; redeemed by [`UploadState::finish_preview`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PreviewTicket {
    generation: u64,
}

/// Issued by [`UploadState::begin_submit`] with the file to upload.
#[derive(Clone, PartialEq, Debug)]
pub struct SubmitTicket<F> {
    pub generation: u64,
    pub file: F,
}

/// The result of one submission, ready to hand back to the state.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub generation: u64,
    pub result: Result<String, FeedbackError>,
}

/// Everything the upload view shows, parameterized over the file handle type.
#[derive(Clone, PartialEq, Debug)]
pub struct UploadState<F> {
    file: Option<F>,
    preview: Option<String>,
    feedback: String,
    loading: bool,
    drag_active: bool,
    selection_generation: u64,
    request_generation: u64,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            feedback: String::new(),
            loading: false,
            drag_active: false,
            selection_generation: 0,
            request_generation: 0,
        }
    }
}

impl<F: Clone> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// The `data:` URI of the most recent selection, once it has been read.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// The submit button is live only with a file and no request pending.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.loading
    }

    /// Whether the feedback panel should be on screen.
    pub fn shows_feedback_panel(&self) -> bool {
        self.loading || !self.feedback.is_empty()
    }

    /// Replaces the selected file. The caller must read it and hand the
    /// data URI back with the returned ticket.
    pub fn select_file(&mut self, file: F) -> PreviewTicket {
        self.file = Some(file);
        self.selection_generation += 1;
        PreviewTicket {
            generation: self.selection_generation,
        }
    }

    /// Publishes a preview. Returns `false` (and changes nothing) when a
    /// newer file has been selected since the ticket was issued.
    pub fn finish_preview(&mut self, ticket: PreviewTicket, data_uri: String) -> bool {
        if ticket.generation != self.selection_generation {
            return false;
        }
        self.preview = Some(data_uri);
        true
    }

    /// The current selection could not be read: clear the preview so it no
    /// longer shows the previous file. Stale tickets change nothing.
    pub fn fail_preview(&mut self, ticket: PreviewTicket) -> bool {
        if ticket.generation != self.selection_generation {
            return false;
        }
        self.preview = None;
        true
    }

    pub fn drag(&mut self, event: DragEvent) {
        self.drag_active = match event {
            DragEvent::Enter | DragEvent::Over => true,
            DragEvent::Leave => false,
        };
    }

    /// Ends a drag. A dropped file, if any, is selected in the same step.
    pub fn drop_file(&mut self, file: Option<F>) -> Option<PreviewTicket> {
        self.drag_active = false;
        file.map(|f| self.select_file(f))
    }

    /// Starts a submission. Returns `None` without touching any state when
    /// no file is selected.
    ///
    /// A submission started while another is pending supersedes it: the
    /// older one's outcome will be ignored.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket<F>> {
        let file = self.file.clone()?;
        self.loading = true;
        self.feedback.clear();
        self.request_generation += 1;
        Some(SubmitTicket {
            generation: self.request_generation,
            file,
        })
    }

    /// Publishes the outcome of the latest submission: the feedback text on
    /// success, the fixed error message on failure. Loading ends either way.
    ///
    /// Returns `false` for a superseded submission, whose outcome is dropped.
    pub fn complete_submit(&mut self, outcome: SubmitOutcome) -> bool {
        if outcome.generation != self.request_generation {
            return false;
        }
        self.feedback = match outcome.result {
            Ok(feedback) => feedback,
            Err(e) => e.user_message().to_string(),
        };
        self.loading = false;
        true
    }
}
