//! dropzone-core: File selection and validation for a drop target (sans-IO).
//!
//! Decides which dragged or picked files are accepted:
//! type policy -> batch validation -> all-or-nothing state update.
//!
//! This crate has **no browser dependencies** -- files are represented
//! by the [`CandidateFile`] trait and drag events by [`DragInput`]. All
//! DOM interaction lives in `dropzone-io`.

pub mod drag;
pub mod policy;
pub mod selection;
pub mod size;
pub mod types;
pub mod validate;

pub use drag::{DragTracker, DragTransition};
pub use policy::is_accepted;
pub use selection::{
    DragInput, FileSelection, PickerOutcome, PickerRequest, RawFileList, SelectionCallbacks,
    SubscriptionId,
};
pub use size::format_size;
pub use types::{
    CandidateFile, ConfigError, DropzoneConfig, DropzoneOptions, DropzoneState, Rejection,
};
pub use validate::{Validation, validate};
