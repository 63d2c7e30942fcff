use shared_types::{AppError, StudentRecord};

use crate::error::ConsoleError;
use crate::service::StudentsService;

/// A pending destructive action on one record.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionRequest {
    pub target: StudentRecord,
    /// Set once the user confirmed and the delete call is in flight.
    pub confirmed: bool,
}

/// Two-step delete: pick a target, then confirm or cancel.
///
/// At most one request is live. The prompt closes when the delete call
/// returns, whether it succeeded or not.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmController {
    pending: Option<DeletionRequest>,
}

impl DeleteConfirmController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&DeletionRequest> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.confirmed)
    }

    /// Open the prompt for `record`, discarding any unconfirmed request.
    pub fn request_delete(&mut self, record: StudentRecord) {
        if self.is_deleting() {
            return;
        }
        self.pending = Some(DeletionRequest {
            target: record,
            confirmed: false,
        });
    }

    /// Close the prompt. Has no effect once the delete is in flight.
    pub fn cancel(&mut self) {
        if !self.is_deleting() {
            self.pending = None;
        }
    }

    /// Mark the request confirmed and hand out its target.
    pub fn begin_confirm(&mut self) -> Option<StudentRecord> {
        let pending = self.pending.as_mut().filter(|p| !p.confirmed)?;
        pending.confirmed = true;
        Some(pending.target.clone())
    }

    pub fn finish_confirm(
        &mut self,
        target: StudentRecord,
        result: Result<(), AppError>,
    ) -> Result<StudentRecord, ConsoleError> {
        self.pending = None;
        match result {
            Ok(()) => {
                tracing::info!(student_id = %target.id, "student deleted");
                Ok(target)
            }
            Err(e) => {
                tracing::warn!(student_id = %target.id, error = %e, "student delete failed");
                Err(ConsoleError::from_remote(&e, "Delete failed"))
            }
        }
    }

    /// Confirm and run the delete. `None` when no request was waiting.
    pub async fn confirm<S: StudentsService + ?Sized>(
        &mut self,
        svc: &S,
    ) -> Option<Result<StudentRecord, ConsoleError>> {
        let target = self.begin_confirm()?;
        let result = svc.delete(&target.id).await;
        Some(self.finish_confirm(target, result))
    }
}
