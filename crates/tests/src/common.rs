use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use console::{AuthService, StudentsService};
use shared_types::{
    AppError, AuthResponse, AuthUser, ChangePasswordRequest, CreateStudentRequest, LoginRequest,
    MessageResponse, PaginationMeta, ProfileRecord, SignupRequest, StudentDetails, StudentPage,
    StudentRecord, UpdateProfileRequest, UpdateStudentRequest,
};

pub fn student(n: usize) -> StudentRecord {
    StudentRecord {
        id: format!("s{n}"),
        name: format!("Student {n}"),
        email: format!("student{n}@school.edu"),
        course: "Computer Science".into(),
        enrollment_date: None,
        verified: n % 2 == 0,
    }
}

/// In-memory students collection that counts calls and records payloads.
#[derive(Default)]
pub struct FakeStudents {
    pub records: RefCell<Vec<StudentRecord>>,
    /// Page requested by each list call, in order.
    pub list_calls: RefCell<Vec<u32>>,
    pub created: RefCell<Vec<CreateStudentRequest>>,
    pub updated: RefCell<Vec<(String, UpdateStudentRequest)>>,
    pub deleted: RefCell<Vec<String>>,
    fail_mutation: RefCell<Option<AppError>>,
    fail_list: RefCell<Option<AppError>>,
    next_id: Cell<usize>,
}

impl FakeStudents {
    pub fn with_records(count: usize) -> Self {
        let fake = Self::default();
        *fake.records.borrow_mut() = (1..=count).map(student).collect();
        fake.next_id.set(count + 1);
        fake
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.borrow().len()
    }

    pub fn mutation_count(&self) -> usize {
        self.created.borrow().len() + self.updated.borrow().len() + self.deleted.borrow().len()
    }

    /// Fail the next create/update/delete with `err`.
    pub fn fail_next_mutation(&self, err: AppError) {
        *self.fail_mutation.borrow_mut() = Some(err);
    }

    pub fn fail_next_list(&self, err: AppError) {
        *self.fail_list.borrow_mut() = Some(err);
    }

    fn take_mutation_failure(&self) -> Result<(), AppError> {
        match self.fail_mutation.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl StudentsService for FakeStudents {
    async fn list(&self, page: u32, page_size: u32) -> Result<StudentPage, AppError> {
        self.list_calls.borrow_mut().push(page);
        if let Some(err) = self.fail_list.borrow_mut().take() {
            return Err(err);
        }
        let records = self.records.borrow();
        let size = page_size.max(1) as usize;
        let start = (page.saturating_sub(1) as usize) * size;
        Ok(StudentPage {
            students: records.iter().skip(start).take(size).cloned().collect(),
            pagination: PaginationMeta {
                page,
                pages: records.len().div_ceil(size) as u32,
                total: records.len() as u64,
                limit: Some(page_size),
            },
        })
    }

    async fn create(&self, request: CreateStudentRequest) -> Result<StudentRecord, AppError> {
        self.created.borrow_mut().push(request.clone());
        self.take_mutation_failure()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let record = StudentRecord {
            id: format!("s{id}"),
            name: request.name,
            email: request.email,
            course: request.course,
            enrollment_date: None,
            verified: false,
        };
        self.records.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: &str,
        request: UpdateStudentRequest,
    ) -> Result<StudentRecord, AppError> {
        self.updated.borrow_mut().push((id.to_string(), request.clone()));
        self.take_mutation_failure()?;
        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Student not found"))?;
        record.name = request.name;
        record.email = request.email;
        record.course = request.course;
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.deleted.borrow_mut().push(id.to_string());
        self.take_mutation_failure()?;
        self.records.borrow_mut().retain(|r| r.id != id);
        Ok(())
    }
}

pub fn auth_user(role: &str) -> AuthUser {
    AuthUser {
        id: "u1".into(),
        email: "ada@school.edu".into(),
        role_name: role.into(),
        email_verified: false,
    }
}

pub fn student_profile() -> ProfileRecord {
    ProfileRecord {
        email: "ada@school.edu".into(),
        role_name: "student".into(),
        email_verified: false,
        student: Some(StudentDetails {
            id: "64f0c2a1b9e8d7f6a5b4c3d2".into(),
            name: "Ada Lovelace".into(),
            course: "Mathematics".into(),
            enrollment_date: None,
            is_verified: false,
        }),
    }
}

pub fn ack() -> MessageResponse {
    MessageResponse {
        success: true,
        message: None,
    }
}

/// Scripted auth service. Each operation answers with the configured result.
pub struct FakeAuth {
    pub login_result: RefCell<Result<AuthResponse, AppError>>,
    pub profile_result: RefCell<Result<ProfileRecord, AppError>>,
    pub logout_result: RefCell<Result<(), AppError>>,
    pub mutation_result: RefCell<Result<MessageResponse, AppError>>,
    pub verify_result: RefCell<Result<MessageResponse, AppError>>,
    pub profile_updates: RefCell<Vec<UpdateProfileRequest>>,
    pub password_changes: RefCell<Vec<ChangePasswordRequest>>,
    pub signups: RefCell<Vec<SignupRequest>>,
    pub profile_calls: Cell<u32>,
    pub verify_calls: Cell<u32>,
}

impl FakeAuth {
    pub fn new(role: &str) -> Self {
        Self {
            login_result: RefCell::new(Ok(AuthResponse {
                user: auth_user(role),
                token: "token-1".into(),
            })),
            profile_result: RefCell::new(Ok(student_profile())),
            logout_result: RefCell::new(Ok(())),
            mutation_result: RefCell::new(Ok(ack())),
            verify_result: RefCell::new(Ok(ack())),
            profile_updates: RefCell::default(),
            password_changes: RefCell::default(),
            signups: RefCell::default(),
            profile_calls: Cell::new(0),
            verify_calls: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl AuthService for FakeAuth {
    async fn login(&self, _request: LoginRequest) -> Result<AuthResponse, AppError> {
        self.login_result.borrow().clone()
    }

    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, AppError> {
        self.signups.borrow_mut().push(request);
        self.login_result.borrow().clone()
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.logout_result.borrow().clone()
    }

    async fn get_profile(&self) -> Result<ProfileRecord, AppError> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        self.profile_result.borrow().clone()
    }

    async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<MessageResponse, AppError> {
        self.profile_updates.borrow_mut().push(request);
        self.mutation_result.borrow().clone()
    }

    async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        self.password_changes.borrow_mut().push(request);
        self.mutation_result.borrow().clone()
    }

    async fn send_verification_email(&self) -> Result<MessageResponse, AppError> {
        self.mutation_result.borrow().clone()
    }

    async fn verify_account(&self, _token: &str) -> Result<MessageResponse, AppError> {
        self.verify_calls.set(self.verify_calls.get() + 1);
        self.verify_result.borrow().clone()
    }
}
