//! File selection controller.
//!
//! [`FileSelection`] owns the [`DropzoneState`] for one widget. Drag
//! events and picker completions are funneled through a single
//! processing pass: validate the batch, then either replace the file
//! list or record an error. Nothing is partially applied: a batch with
//! any rejection leaves the current files untouched.
//!
//! The controller is sans-IO. Browser events reach it through the
//! [`DragInput`] trait, and the file picker is described by a
//! [`PickerRequest`] that the I/O layer turns into a real control.

use crate::drag::{DragTracker, DragTransition};
use crate::types::{CandidateFile, DropzoneConfig, DropzoneState, Rejection};
use crate::validate::validate;

/// A drag event as seen by the controller.
pub trait DragInput {
    /// The host's file handle type.
    type File;

    /// Stop the host's default handling and further propagation.
    ///
    /// Without this the browser navigates to a dropped file.
    fn suppress_default(&self);

    /// Ask the host to show the "copy" drop cursor.
    fn show_copy_effect(&self);

    /// Files carried by the event. Only meaningful for `drop`.
    fn dropped_files(&self) -> Vec<Self::File>;
}

/// Files offered by one user action, tagged by where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFileList<F> {
    /// Files dropped onto the target.
    Dropped(Vec<F>),
    /// Files chosen in the picker dialog.
    Picked(Vec<F>),
}

impl<F> RawFileList<F> {
    /// Normalize into the batch to validate.
    ///
    /// An empty drop carries nothing worth processing and yields `None`.
    /// A picker selection always yields a batch, even when empty.
    #[must_use]
    pub fn into_batch(self) -> Option<Vec<F>> {
        match self {
            Self::Dropped(files) if files.is_empty() => None,
            Self::Dropped(files) | Self::Picked(files) => Some(files),
        }
    }
}

/// Description of the temporary file-picker control to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRequest {
    /// Value for the input's `accept` attribute.
    pub accept: String,
    /// Whether more than one file may be selected.
    pub multiple: bool,
}

/// How a picker interaction ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome<F> {
    /// The user confirmed a selection.
    Selected(Vec<F>),
    /// The user dismissed the dialog.
    Cancelled,
}

/// Handle returned by [`FileSelection::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<F> = Box<dyn FnMut(&DropzoneState<F>)>;

/// Callbacks fired by the controller on outcomes.
pub struct SelectionCallbacks<F> {
    on_files_change: Option<Box<dyn FnMut(&[F])>>,
    on_error: Option<Box<dyn FnMut(&str)>>,
}

impl<F> SelectionCallbacks<F> {
    /// No callbacks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on_files_change: None,
            on_error: None,
        }
    }

    /// Called with the new file list whenever it changes.
    #[must_use]
    pub fn on_files_change(mut self, callback: impl FnMut(&[F]) + 'static) -> Self {
        self.on_files_change = Some(Box::new(callback));
        self
    }

    /// Called with the message whenever an error is recorded.
    #[must_use]
    pub fn on_error(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }
}

impl<F> Default for SelectionCallbacks<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller for one dropzone widget.
pub struct FileSelection<F> {
    config: DropzoneConfig,
    state: DropzoneState<F>,
    drag: DragTracker,
    callbacks: SelectionCallbacks<F>,
    observers: Vec<(SubscriptionId, Observer<F>)>,
    next_subscription: u64,
}

impl<F: CandidateFile> FileSelection<F> {
    /// Create a controller with empty state.
    #[must_use]
    pub fn new(config: DropzoneConfig, callbacks: SelectionCallbacks<F>) -> Self {
        Self {
            config,
            state: DropzoneState::default(),
            drag: DragTracker::new(),
            callbacks,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ───────────────────────── Accessors ──────────────────────────

    /// Current observable state.
    #[must_use]
    pub const fn state(&self) -> &DropzoneState<F> {
        &self.state
    }

    /// The limits this controller validates against.
    #[must_use]
    pub const fn config(&self) -> &DropzoneConfig {
        &self.config
    }

    /// Currently accepted files.
    #[must_use]
    pub fn files(&self) -> &[F] {
        &self.state.files
    }

    /// Most recent error message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Whether a drag is hovering over the target.
    #[must_use]
    pub const fn is_drag_active(&self) -> bool {
        self.state.is_drag_active
    }

    /// Whether a batch is being processed.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// MIME types the validator accepts.
    #[must_use]
    pub fn accepted_types(&self) -> &[String] {
        self.config.accepted_types()
    }

    /// Largest accepted file, in bytes.
    #[must_use]
    pub const fn max_file_size(&self) -> u64 {
        self.config.max_file_size()
    }

    /// Most files accepted in one batch.
    #[must_use]
    pub const fn max_files(&self) -> usize {
        self.config.max_files()
    }

    /// Current drag nesting depth.
    #[must_use]
    pub const fn drag_depth(&self) -> u32 {
        self.drag.depth()
    }

    // ───────────────────────── Subscriptions ──────────────────────────

    /// Register an observer called with the new state after every change.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&DropzoneState<F>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    // ───────────────────────── Drag events ──────────────────────────

    /// Handle `dragenter`: the target becomes active on the first one.
    pub fn on_drag_enter(&mut self, event: &impl DragInput) {
        event.suppress_default();
        let transition = self.drag.enter();
        self.apply_drag(transition);
    }

    /// Handle `dragleave`: the target goes inactive once every enter is matched.
    pub fn on_drag_leave(&mut self, event: &impl DragInput) {
        event.suppress_default();
        let transition = self.drag.leave();
        self.apply_drag(transition);
    }

    /// Handle `dragover`. Leaves state untouched.
    #[allow(clippy::unused_self)] // same shape as the other drag handlers
    pub fn on_drag_over(&self, event: &impl DragInput) {
        event.suppress_default();
        event.show_copy_effect();
    }

    /// Handle a drop: clear drag state, then process the dropped files.
    pub fn on_drop<E: DragInput<File = F>>(&mut self, event: &E) {
        event.suppress_default();
        let transition = self.drag.reset();
        self.apply_drag(transition);
        self.ingest(RawFileList::Dropped(event.dropped_files()));
    }

    fn apply_drag(&mut self, transition: DragTransition) {
        if transition == DragTransition::Unchanged {
            return;
        }
        self.state.is_drag_active = self.drag.is_active();
        self.notify();
    }

    // ───────────────────────── Picker ──────────────────────────

    /// Describe the temporary picker control for this config.
    #[must_use]
    pub fn picker_request(&self) -> PickerRequest {
        PickerRequest {
            accept: self.config.accepted_types().join(","),
            multiple: self.config.allows_multiple(),
        }
    }

    /// Handle the end of a picker interaction.
    pub fn on_picker_completed(&mut self, outcome: PickerOutcome<F>) {
        match outcome {
            PickerOutcome::Selected(files) => self.ingest(RawFileList::Picked(files)),
            PickerOutcome::Cancelled => {}
        }
    }

    // ───────────────────────── Processing ──────────────────────────

    /// Validate a batch and apply it all-or-nothing.
    pub fn ingest(&mut self, files: RawFileList<F>) {
        let Some(batch) = files.into_batch() else {
            return;
        };

        self.state.is_loading = true;
        self.state.error = None;
        self.notify();

        let validation = validate(batch, &self.config);
        if !validation.is_clean() {
            self.fail(validation.rejection_messages().join(", "));
            return;
        }

        self.state.files = validation.accepted;
        self.state.error = None;
        self.state.is_loading = false;
        self.notify();
        self.emit_files_change();
    }

    /// Record an unexpected fault raised while preparing a batch.
    ///
    /// The user sees a generic message; the current files are kept.
    pub fn report_processing_fault(&mut self) {
        self.fail(Rejection::ProcessingFault.to_string());
    }

    // ───────────────────────── Mutations ──────────────────────────

    /// Remove the file at `index`. Out-of-range indices are ignored.
    pub fn remove_file(&mut self, index: usize) -> Option<F> {
        if index >= self.state.files.len() {
            return None;
        }
        let removed = self.state.files.remove(index);
        self.notify();
        self.emit_files_change();
        Some(removed)
    }

    /// Drop every file and any error.
    pub fn clear_files(&mut self) {
        self.state.files.clear();
        self.state.error = None;
        self.notify();
        self.emit_files_change();
    }

    /// Dismiss the current error, keeping the files.
    pub fn clear_error(&mut self) {
        if self.state.error.take().is_some() {
            self.notify();
        }
    }

    fn fail(&mut self, message: String) {
        self.state.error = Some(message);
        self.state.is_loading = false;
        self.notify();
        if let (Some(callback), Some(message)) =
            (self.callbacks.on_error.as_mut(), self.state.error.as_deref())
        {
            callback(message);
        }
    }

    fn emit_files_change(&mut self) {
        if let Some(callback) = self.callbacks.on_files_change.as_mut() {
            callback(&self.state.files);
        }
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
    }
}
