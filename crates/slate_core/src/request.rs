//! Analysis request type.

use crate::TaskKind;
use serde::{Deserialize, Serialize};

/// One analysis request: the subject text plus the task to run on it.
///
/// Immutable; constructed per call and discarded once the call resolves.
///
/// # Examples
///
/// ```
/// use slate_core::{AnalysisRequest, TaskKind};
///
/// let request = AnalysisRequest::new("INT. KITCHEN - NIGHT".to_string(), TaskKind::Breakdown);
/// assert_eq!(request.task().label(), "breakdown");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct AnalysisRequest {
    /// The free text under analysis.
    subject_text: String,
    /// The task to run, with its options.
    task: TaskKind,
}
