use async_trait::async_trait;
use console::StudentsService;
use reqwest::Method;
use shared_types::{
    AppError, CreateStudentRequest, StudentListResponse, StudentPage, StudentRecord,
    StudentResponse, UpdateStudentRequest,
};

use crate::client::ApiClient;

#[async_trait(?Send)]
impl StudentsService for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn list(&self, page: u32, page_size: u32) -> Result<StudentPage, AppError> {
        let resp: StudentListResponse = self
            .fetch(
                self.request(Method::GET, "/students")
                    .query(&[("page", page), ("limit", page_size)]),
            )
            .await?;
        tracing::debug!(count = resp.data.students.len(), total = resp.data.pagination.total, "students page received");
        Ok(resp.data)
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    async fn create(&self, request: CreateStudentRequest) -> Result<StudentRecord, AppError> {
        let resp: StudentResponse = self
            .fetch(self.json(Method::POST, "/students", &request))
            .await?;
        Ok(resp.data)
    }

    #[tracing::instrument(skip(self, request))]
    async fn update(
        &self,
        id: &str,
        request: UpdateStudentRequest,
    ) -> Result<StudentRecord, AppError> {
        let resp: StudentResponse = self
            .fetch(self.json(Method::PUT, &format!("/students/{id}"), &request))
            .await?;
        Ok(resp.data)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.execute(self.request(Method::DELETE, &format!("/students/{id}")))
            .await
    }
}
