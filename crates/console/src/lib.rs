//! Core logic of the student console.
//!
//! Everything here is plain state plus async drivers over the
//! [`service::AuthService`] and [`service::StudentsService`] collaborators.
//! The view layer owns the controllers, calls their synchronous
//! `begin_*`/`finish_*` steps around remote calls, and re-renders on change.

pub mod admin;
pub mod auth_forms;
pub mod delete;
pub mod error;
pub mod form;
pub mod guard;
pub mod list;
pub mod notice;
pub mod pagination;
pub mod profile;
pub mod router;
pub mod service;
pub mod session;
pub mod timer;
pub mod verify;

pub use admin::{AdminConsole, AfterMutation, ConsoleEvent};
pub use auth_forms::{LoginForm, SignupForm};
pub use delete::{DeleteConfirmController, DeletionRequest};
pub use error::ConsoleError;
pub use form::{FormDraft, FormField, FormMode, RecordFormController, Saved, Submission};
pub use guard::Decision;
pub use list::{LoadOutcome, LoadTicket, PagedListController};
pub use notice::{NoticeBoard, NoticeTicket};
pub use pagination::PageState;
pub use profile::StudentProfileController;
pub use router::Destination;
pub use service::{AuthService, StudentsService};
pub use session::{Identity, Session, SessionStore};
pub use verify::{VerifyAccountController, VerifyStatus};
