//! Batch validation.
//!
//! Applies the count, type, and size rules to one batch of candidates.
//! The count rule is checked first and rejects the whole batch; the
//! type and size rules are then applied per file in input order.

use crate::policy;
use crate::types::{CandidateFile, DropzoneConfig, Rejection};

/// Outcome of validating one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation<F> {
    /// Candidates that passed every rule, in input order.
    pub accepted: Vec<F>,
    /// One entry per failed rule, in input order.
    pub rejections: Vec<Rejection>,
}

impl<F> Validation<F> {
    /// True when no rule failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }

    /// Human-readable messages for every rejection.
    #[must_use]
    pub fn rejection_messages(&self) -> Vec<String> {
        self.rejections.iter().map(ToString::to_string).collect()
    }
}

/// Validate a batch of candidates against `config`.
///
/// A batch larger than [`DropzoneConfig::max_files`] is rejected as a
/// whole with a single [`Rejection::BatchTooLarge`]. Otherwise each file
/// is checked for type first and size second, so a file failing both
/// only reports the type problem.
#[must_use = "validation results must be applied or reported"]
pub fn validate<F: CandidateFile>(candidates: Vec<F>, config: &DropzoneConfig) -> Validation<F> {
    if candidates.len() > config.max_files() {
        return Validation {
            accepted: Vec::new(),
            rejections: vec![Rejection::BatchTooLarge {
                max_files: config.max_files(),
            }],
        };
    }

    let mut accepted = Vec::with_capacity(candidates.len());
    let mut rejections = Vec::new();

    for file in candidates {
        if !policy::is_accepted(file.declared_type(), config.accepted_types()) {
            rejections.push(Rejection::UnsupportedType {
                name: file.name().to_owned(),
                declared_type: file.declared_type().to_owned(),
            });
        } else if file.size_bytes() > config.max_file_size() {
            rejections.push(Rejection::too_large(
                file.name(),
                file.size_bytes(),
                config.max_file_size(),
            ));
        } else {
            accepted.push(file);
        }
    }

    Validation {
        accepted,
        rejections,
    }
}
