use shared_types::{AppError, CreateStudentRequest, StudentRecord, UpdateStudentRequest};

use crate::error::ConsoleError;
use crate::service::StudentsService;

/// Whether the dialog creates a record or edits a bound one.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Add,
    Edit(StudentRecord),
}

/// Unsaved input of the student dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub course: String,
    /// Initial password. Only collected in [`FormMode::Add`].
    pub credential: String,
}

impl FormDraft {
    fn from_record(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            course: record.course.clone(),
            credential: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Course,
    Credential,
}

/// Validated payload ready for the students service.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(CreateStudentRequest),
    Update {
        id: String,
        request: UpdateStudentRequest,
    },
}

impl Submission {
    pub async fn send<S: StudentsService + ?Sized>(
        self,
        svc: &S,
    ) -> Result<StudentRecord, AppError> {
        match self {
            Submission::Create(request) => svc.create(request).await,
            Submission::Update { id, request } => svc.update(&id, request).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    Created(StudentRecord),
    Updated(StudentRecord),
}

impl Saved {
    pub fn notice(&self) -> &'static str {
        match self {
            Saved::Created(_) => "Student added successfully",
            Saved::Updated(_) => "Student updated successfully",
        }
    }

    pub fn record(&self) -> &StudentRecord {
        match self {
            Saved::Created(r) | Saved::Updated(r) => r,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
enum FormState {
    #[default]
    Closed,
    Editing { mode: FormMode, draft: FormDraft },
}

/// Add/edit dialog for one student record.
///
/// `Closed -> Editing` on open, back to `Closed` on cancel or a successful
/// save. A failed save stays in `Editing` with the draft intact.
#[derive(Debug, Clone, Default)]
pub struct RecordFormController {
    state: FormState,
    submitting: bool,
    error: Option<String>,
}

impl RecordFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_add(&mut self) {
        self.open(FormMode::Add, FormDraft::default());
    }

    pub fn open_edit(&mut self, record: StudentRecord) {
        let draft = FormDraft::from_record(&record);
        self.open(FormMode::Edit(record), draft);
    }

    fn open(&mut self, mode: FormMode, draft: FormDraft) {
        self.state = FormState::Editing { mode, draft };
        self.submitting = false;
        self.error = None;
    }

    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
        self.submitting = false;
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Editing { .. })
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn mode(&self) -> Option<&FormMode> {
        match &self.state {
            FormState::Editing { mode, .. } => Some(mode),
            FormState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match &self.state {
            FormState::Editing { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn title(&self) -> &'static str {
        match self.mode() {
            Some(FormMode::Edit(_)) => "Edit Student",
            _ => "Add New Student",
        }
    }

    /// Whether the dialog shows a password input.
    pub fn collects_credential(&self) -> bool {
        matches!(self.mode(), Some(FormMode::Add))
    }

    /// Update one draft field. The credential is ignored in edit mode.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let FormState::Editing { mode, draft } = &mut self.state else {
            return;
        };
        let slot = match field {
            FormField::Name => &mut draft.name,
            FormField::Email => &mut draft.email,
            FormField::Course => &mut draft.course,
            FormField::Credential if matches!(mode, FormMode::Add) => &mut draft.credential,
            FormField::Credential => return,
        };
        *slot = value.into();
    }

    /// Validate the draft and mark the form as submitting.
    pub fn begin_submit(&mut self) -> Result<Submission, ConsoleError> {
        if self.submitting {
            return Err(ConsoleError::Busy);
        }
        let FormState::Editing { mode, draft } = &self.state else {
            return Err(ConsoleError::Validation("No student form is open".into()));
        };
        let submission = match validate(mode, draft) {
            Ok(s) => s,
            Err(e) => {
                self.error = e.banner();
                return Err(e);
            }
        };
        self.submitting = true;
        self.error = None;
        Ok(submission)
    }

    pub fn finish_submit(
        &mut self,
        result: Result<StudentRecord, AppError>,
    ) -> Result<Saved, ConsoleError> {
        self.submitting = false;
        let editing = matches!(self.mode(), Some(FormMode::Edit(_)));
        match result {
            Ok(record) => {
                tracing::info!(student_id = %record.id, edited = editing, "student saved");
                self.state = FormState::Closed;
                self.error = None;
                Ok(if editing {
                    Saved::Updated(record)
                } else {
                    Saved::Created(record)
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "student save failed");
                let err = ConsoleError::from_remote(&e, "Operation failed");
                self.error = err.banner();
                Err(err)
            }
        }
    }

    pub async fn submit<S: StudentsService + ?Sized>(
        &mut self,
        svc: &S,
    ) -> Result<Saved, ConsoleError> {
        let submission = self.begin_submit()?;
        let result = submission.send(svc).await;
        self.finish_submit(result)
    }
}

/// Build the service payload from a draft.
///
/// Name, email and course are trimmed: whitespace-only values count as
/// missing and the trimmed text is what gets sent. The password is taken
/// as typed; any non-empty value is accepted.
fn validate(mode: &FormMode, draft: &FormDraft) -> Result<Submission, ConsoleError> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    let course = draft.course.trim();
    if name.is_empty() || email.is_empty() || course.is_empty() {
        return Err(ConsoleError::Validation(
            "Please fill in all required fields".into(),
        ));
    }
    match mode {
        FormMode::Add => {
            if draft.credential.is_empty() {
                return Err(ConsoleError::Validation(
                    "Password is required for new students".into(),
                ));
            }
            Ok(Submission::Create(CreateStudentRequest {
                name: name.to_string(),
                email: email.to_string(),
                course: course.to_string(),
                password: draft.credential.clone(),
            }))
        }
        FormMode::Edit(record) => Ok(Submission::Update {
            id: record.id.clone(),
            request: UpdateStudentRequest {
                name: name.to_string(),
                email: email.to_string(),
                course: course.to_string(),
            },
        }),
    }
}
