//! The admin dashboard: one paged list, one record form and one delete
//! prompt sharing a banner area and a "reload after mutation" contract.

use shared_types::{AppError, ConsoleSettings, StudentPage, StudentRecord};
use tokio::sync::mpsc;

use crate::delete::DeleteConfirmController;
use crate::error::ConsoleError;
use crate::form::{FormField, RecordFormController, Submission};
use crate::list::{LoadOutcome, LoadTicket, PagedListController};
use crate::notice::{NoticeBoard, NoticeTicket};
use crate::service::StudentsService;

/// Change notification for observers of an [`AdminConsole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEvent {
    ListChanged,
    FormChanged,
    DeletionChanged,
    NoticesChanged,
    /// A call was rejected for an invalid credential. The session should be
    /// expired and the guard will redirect to login.
    SessionExpired,
}

/// Follow-up work after a successful mutation: reload the list under
/// `reload`, and expire `notice` once its ttl has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfterMutation {
    pub reload: LoadTicket,
    pub notice: NoticeTicket,
}

pub struct AdminConsole {
    list: PagedListController,
    form: RecordFormController,
    deletion: DeleteConfirmController,
    notices: NoticeBoard,
    settings: ConsoleSettings,
    subscribers: Vec<mpsc::UnboundedSender<ConsoleEvent>>,
    needs_reauth: bool,
}

impl AdminConsole {
    pub fn new(settings: ConsoleSettings) -> Self {
        Self {
            list: PagedListController::new(settings.page_size),
            form: RecordFormController::new(),
            deletion: DeleteConfirmController::new(),
            notices: NoticeBoard::default(),
            settings,
            subscribers: Vec::new(),
            needs_reauth: false,
        }
    }

    pub fn list(&self) -> &PagedListController {
        &self.list
    }

    pub fn form(&self) -> &RecordFormController {
        &self.form
    }

    pub fn deletion(&self) -> &DeleteConfirmController {
        &self.deletion
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    pub fn needs_reauth(&self) -> bool {
        self.needs_reauth
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ConsoleEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: ConsoleEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    fn report(&mut self, err: ConsoleError) {
        match err {
            ConsoleError::Auth => {
                self.needs_reauth = true;
                self.emit(ConsoleEvent::SessionExpired);
            }
            ConsoleError::Busy => {}
            other => {
                if let Some(message) = other.banner() {
                    self.notices.show_error(message);
                    self.emit(ConsoleEvent::NoticesChanged);
                }
            }
        }
    }

    // -- list --

    pub fn start(&mut self) -> LoadTicket {
        let ticket = self.list.begin_load(1);
        self.emit(ConsoleEvent::ListChanged);
        ticket
    }

    pub fn change_page(&mut self, page: u32) -> Option<LoadTicket> {
        let ticket = self.list.request_page(page)?;
        self.emit(ConsoleEvent::ListChanged);
        Some(ticket)
    }

    /// Install a page response. Returns a follow-up load when the requested
    /// page vanished and the list moved to the new last page.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<StudentPage, AppError>,
    ) -> Option<LoadTicket> {
        match self.list.finish_load(ticket, result) {
            LoadOutcome::Applied => {
                self.emit(ConsoleEvent::ListChanged);
                None
            }
            LoadOutcome::Failed(err) => {
                self.emit(ConsoleEvent::ListChanged);
                self.report(err);
                None
            }
            LoadOutcome::Stale => None,
            LoadOutcome::Clamped(next) => Some(next),
        }
    }

    fn after_mutation(&mut self, message: &str) -> AfterMutation {
        let reload = self.list.reload();
        let notice = self.notices.show_success(message, self.settings.notice_ttl());
        self.emit(ConsoleEvent::ListChanged);
        self.emit(ConsoleEvent::NoticesChanged);
        AfterMutation { reload, notice }
    }

    // -- form --

    pub fn open_add(&mut self) {
        self.form.open_add();
        self.emit(ConsoleEvent::FormChanged);
    }

    pub fn open_edit(&mut self, record: StudentRecord) {
        self.form.open_edit(record);
        self.emit(ConsoleEvent::FormChanged);
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
        self.emit(ConsoleEvent::FormChanged);
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
        self.emit(ConsoleEvent::FormChanged);
    }

    /// Validate the form. Validation failures go to the error banner.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        match self.form.begin_submit() {
            Ok(submission) => {
                self.notices.dismiss_error();
                self.emit(ConsoleEvent::FormChanged);
                Some(submission)
            }
            Err(err) => {
                self.report(err);
                None
            }
        }
    }

    pub fn finish_submit(
        &mut self,
        result: Result<StudentRecord, AppError>,
    ) -> Option<AfterMutation> {
        let outcome = self.form.finish_submit(result);
        self.emit(ConsoleEvent::FormChanged);
        match outcome {
            Ok(saved) => Some(self.after_mutation(saved.notice())),
            Err(err) => {
                self.report(err);
                None
            }
        }
    }

    // -- delete --

    pub fn request_delete(&mut self, record: StudentRecord) {
        self.deletion.request_delete(record);
        self.emit(ConsoleEvent::DeletionChanged);
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
        self.emit(ConsoleEvent::DeletionChanged);
    }

    pub fn begin_delete(&mut self) -> Option<StudentRecord> {
        let target = self.deletion.begin_confirm()?;
        self.notices.dismiss_error();
        self.emit(ConsoleEvent::DeletionChanged);
        Some(target)
    }

    /// Close the prompt. Only a successful delete reloads the list.
    pub fn finish_delete(
        &mut self,
        target: StudentRecord,
        result: Result<(), AppError>,
    ) -> Option<AfterMutation> {
        let outcome = self.deletion.finish_confirm(target, result);
        self.emit(ConsoleEvent::DeletionChanged);
        match outcome {
            Ok(_) => Some(self.after_mutation("Student deleted successfully")),
            Err(err) => {
                self.report(err);
                None
            }
        }
    }

    // -- banners --

    pub fn dismiss_error(&mut self) {
        self.notices.dismiss_error();
        self.emit(ConsoleEvent::NoticesChanged);
    }

    pub fn dismiss_success(&mut self) {
        self.notices.dismiss_success();
        self.emit(ConsoleEvent::NoticesChanged);
    }

    pub fn expire_notice(&mut self, ticket: NoticeTicket) {
        if self.notices.expire(ticket) {
            self.emit(ConsoleEvent::NoticesChanged);
        }
    }

    // -- async drivers --
    //
    // These hold `&mut self` across each await. A view that keeps the
    // console in a reactive cell cannot hold a write borrow across an await, so it calls
    // the `begin_*`/`apply_load`/`finish_*` steps around its own remote calls
    // instead and must follow a returned clamp ticket the same way `run_load`
    // does.

    async fn run_load<S: StudentsService + ?Sized>(&mut self, svc: &S, ticket: LoadTicket) {
        let mut next = Some(ticket);
        while let Some(ticket) = next {
            let result = svc.list(ticket.page, self.list.page_size()).await;
            next = self.apply_load(ticket, result);
        }
    }

    pub async fn load_initial<S: StudentsService + ?Sized>(&mut self, svc: &S) {
        let ticket = self.start();
        self.run_load(svc, ticket).await;
    }

    pub async fn go_to_page<S: StudentsService + ?Sized>(&mut self, svc: &S, page: u32) {
        if let Some(ticket) = self.change_page(page) {
            self.run_load(svc, ticket).await;
        }
    }

    /// Submit the open form. On success the list is reloaded before this
    /// returns, and the ticket of the shown notice is handed back.
    pub async fn submit<S: StudentsService + ?Sized>(&mut self, svc: &S) -> Option<NoticeTicket> {
        let submission = self.begin_submit()?;
        let result = submission.send(svc).await;
        let after = self.finish_submit(result)?;
        self.run_load(svc, after.reload).await;
        Some(after.notice)
    }

    pub async fn confirm_delete<S: StudentsService + ?Sized>(
        &mut self,
        svc: &S,
    ) -> Option<NoticeTicket> {
        let target = self.begin_delete()?;
        let result = svc.delete(&target.id).await;
        let after = self.finish_delete(target, result)?;
        self.run_load(svc, after.reload).await;
        Some(after.notice)
    }
}
