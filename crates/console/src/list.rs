use shared_types::{AppError, StudentPage, StudentRecord};

use crate::error::ConsoleError;
use crate::pagination::PageState;
use crate::service::StudentsService;

/// Identifies one issued page load. Only the most recently issued ticket
/// may install its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied,
    /// The load failed; previously displayed rows and position are kept.
    Failed(ConsoleError),
    /// A newer load was issued after this one; the response was dropped.
    Stale,
    /// The requested page no longer exists (the last page was emptied).
    /// A load of the new last page has been issued under this ticket.
    Clamped(LoadTicket),
}

/// Server-backed, paged collection of student records.
#[derive(Debug, Clone)]
pub struct PagedListController {
    items: Vec<StudentRecord>,
    page: PageState,
    /// Page whose rows are currently in `items`.
    displayed_page: u32,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl PagedListController {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: PageState::new(page_size),
            displayed_page: 1,
            loading: false,
            error: None,
            latest_seq: 0,
        }
    }

    pub fn items(&self) -> &[StudentRecord] {
        &self.items
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Issue a load of `page` unconditionally. Supersedes any load in flight.
    pub fn begin_load(&mut self, page: u32) -> LoadTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.page.current_page = page.max(1);
        LoadTicket {
            seq: self.latest_seq,
            page: self.page.current_page,
        }
    }

    /// Reload the current page, e.g. after a mutation.
    pub fn reload(&mut self) -> LoadTicket {
        self.begin_load(self.page.current_page)
    }

    /// Move to page `n`. Out-of-range requests are ignored.
    pub fn request_page(&mut self, n: u32) -> Option<LoadTicket> {
        if !self.page.contains(n) {
            tracing::debug!(page = n, total_pages = self.page.total_pages, "page out of range");
            return None;
        }
        Some(self.begin_load(n))
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<StudentPage, AppError>,
    ) -> LoadOutcome {
        if ticket.seq != self.latest_seq {
            tracing::debug!(seq = ticket.seq, latest = self.latest_seq, "discarding stale page");
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                let last = page.pagination.pages.max(1);
                if page.students.is_empty() && ticket.page > last {
                    return LoadOutcome::Clamped(self.begin_load(last));
                }
                self.items = page.students;
                self.page.apply_meta(&page.pagination);
                self.displayed_page = self.page.current_page;
                self.error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, page = ticket.page, "failed to load students");
                let err = ConsoleError::from_remote(&e, "Failed to load students");
                self.error = err.banner();
                self.page.current_page = self.displayed_page;
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Load `page` and install the result, following a clamp if one occurs.
    pub async fn load<S: StudentsService + ?Sized>(
        &mut self,
        svc: &S,
        page: u32,
    ) -> Result<(), ConsoleError> {
        let ticket = self.begin_load(page);
        self.drive(svc, ticket).await
    }

    pub async fn drive<S: StudentsService + ?Sized>(
        &mut self,
        svc: &S,
        mut ticket: LoadTicket,
    ) -> Result<(), ConsoleError> {
        loop {
            let result = svc.list(ticket.page, self.page.page_size).await;
            match self.finish_load(ticket, result) {
                LoadOutcome::Applied | LoadOutcome::Stale => return Ok(()),
                LoadOutcome::Failed(e) => return Err(e),
                LoadOutcome::Clamped(next) => ticket = next,
            }
        }
    }
}
