use std::time::Duration;

/// Handle for one shown success notice.
///
/// Hand it back to [`NoticeBoard::expire`] once `ttl` has elapsed. A ticket
/// for a notice that was since replaced or dismissed expires nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket {
    pub generation: u64,
    pub ttl: Duration,
}

/// Banner area of a view: one persistent error, one self-clearing success.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    error: Option<String>,
    success: Option<String>,
    generation: u64,
}

impl NoticeBoard {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Errors stay until dismissed or replaced.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn show_success(&mut self, message: impl Into<String>, ttl: Duration) -> NoticeTicket {
        self.generation += 1;
        self.success = Some(message.into());
        NoticeTicket {
            generation: self.generation,
            ttl,
        }
    }

    pub fn dismiss_success(&mut self) {
        self.generation += 1;
        self.success = None;
    }

    /// Clear the success notice if `ticket` still names it.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.generation != self.generation || self.success.is_none() {
            return false;
        }
        self.success = None;
        true
    }
}
