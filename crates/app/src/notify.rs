//! Self-clearing success notices.

use console::NoticeTicket;
use dioxus::prelude::*;

/// Run `expire` with `ticket` once its ttl has elapsed.
///
/// The owner decides whether the ticket still names the visible notice, so a
/// notice replaced or dismissed in the meantime is left alone.
pub fn expire_later(ticket: NoticeTicket, expire: impl FnOnce(NoticeTicket) + 'static) {
    spawn(async move {
        console::timer::sleep(ticket.ttl).await;
        expire(ticket);
    });
}
