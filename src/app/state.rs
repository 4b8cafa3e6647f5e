use std::time::{Duration, Instant};

use tracing::info;

use crate::upload::{classify, OcrResult, UploadError, UploadedFile, Verdict};

/// Stages one upload attempt passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    FileSelected,
    Submitting,
    Succeeded,
    Failed,
}

pub const NO_FILE_MESSAGE: &str = "يرجى تحميل ملف أولاً";

/// How fast the perceived-progress curve approaches its cap.
const PROGRESS_TAU_SECS: f32 = 4.0;
const PROGRESS_CAP: f32 = 0.95;

/// The single component behind the page: selection, validation, one
/// in-flight submission, and the terminal result or error.
///
/// Exactly one file and at most one result are live at a time; there is no
/// history and no queue.
#[derive(Default)]
pub struct UploadWorkflow {
    state: WorkflowState,
    file: Option<UploadedFile>,
    result: Option<OcrResult>,
    error: Option<String>,
    submitted_at: Option<Instant>,
}

impl UploadWorkflow {
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&OcrResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == WorkflowState::Submitting
    }

    pub fn can_submit(&self) -> bool {
        self.file.is_some() && self.state != WorkflowState::Submitting
    }

    /// Intake for both the picker and window drops. A rejected candidate
    /// never displaces a prior valid selection; an accepted one replaces it
    /// and clears any earlier error or result.
    pub fn select_file(&mut self, candidate: UploadedFile) -> bool {
        if self.state == WorkflowState::Submitting {
            return false;
        }
        match classify(&candidate) {
            Verdict::Acceptable => {
                info!("Selected file: {} ({} bytes)", candidate.name, candidate.size);
                self.file = Some(candidate);
                self.error = None;
                self.result = None;
                self.state = WorkflowState::FileSelected;
                true
            }
            Verdict::Rejected(reason) => {
                self.error = Some(reason);
                false
            }
        }
    }

    /// Surfaces a local failure (unreadable path and the like) without
    /// touching the selection or the state.
    pub fn report_local_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Claims the in-flight slot and hands back the file to submit.
    /// Returns `None` while a submission is already running, so two submit
    /// invocations before the first response produce one network call.
    pub fn begin_submission(&mut self) -> Option<UploadedFile> {
        if self.state == WorkflowState::Submitting {
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.error = Some(NO_FILE_MESSAGE.to_string());
            return None;
        };
        self.state = WorkflowState::Submitting;
        self.error = None;
        self.result = None;
        self.submitted_at = Some(Instant::now());
        Some(file)
    }

    /// Applies the outcome of the single network call. The selected file
    /// survives failures so the user can retry without re-choosing it.
    pub fn complete_submission(&mut self, outcome: Result<OcrResult, UploadError>) {
        if self.state != WorkflowState::Submitting {
            return;
        }
        self.submitted_at = None;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.state = WorkflowState::Succeeded;
            }
            Err(error) => {
                self.error = Some(error.user_message());
                self.state = WorkflowState::Failed;
            }
        }
    }

    /// Closes the result view; the file stays selected.
    pub fn dismiss_result(&mut self) {
        if self.state == WorkflowState::Succeeded {
            self.result = None;
            self.state = if self.file.is_some() {
                WorkflowState::FileSelected
            } else {
                WorkflowState::Idle
            };
        }
    }

    /// Explicit reset clears everything unconditionally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Perceived-progress value for the bar: climbs toward 95% while
    /// waiting and snaps to 100% once the response lands. Derived from the
    /// submission start instant only, so it cannot leak across submissions.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.state {
            WorkflowState::Submitting => {
                let elapsed = self
                    .submitted_at
                    .map(|started| now.duration_since(started))
                    .unwrap_or(Duration::ZERO);
                PROGRESS_CAP * (1.0 - (-elapsed.as_secs_f32() / PROGRESS_TAU_SECS).exp())
            }
            WorkflowState::Succeeded | WorkflowState::Failed => 1.0,
            WorkflowState::Idle | WorkflowState::FileSelected => 0.0,
        }
    }
}
