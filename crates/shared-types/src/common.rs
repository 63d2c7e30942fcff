use serde::{Deserialize, Serialize};

use crate::StudentRecord;

/// Pagination metadata as reported by the students service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    /// Total number of pages. The service reports 0 for an empty collection.
    pub pages: u32,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// One page of the students collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentPage {
    pub students: Vec<StudentRecord>,
    pub pagination: PaginationMeta,
}

/// Envelope of `GET /students`: `{"success": true, "data": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentListResponse {
    pub data: StudentPage,
}

/// Envelope of a single-record response: `{"success": true, "data": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentResponse {
    pub data: StudentRecord,
}
