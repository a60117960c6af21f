// src/state.rs
use crate::db::Database;
use crate::feed::LeadFeed;
use crate::notice::Notice;

/// Shared by every worker: the store handle and the current lead snapshot.
pub struct AppState {
    pub db: Database,
    pub feed: LeadFeed,
    /// How often the board polls for a new snapshot.
    pub poll_secs: u64,
}

impl AppState {
    pub fn new(db: Database, poll_secs: u64) -> Self {
        Self {
            db,
            feed: LeadFeed::new(),
            poll_secs,
        }
    }

    /// Pull the store into the feed after a write. A failure leaves the old
    /// snapshot in place and comes back as a notice for the user.
    pub fn sync(&self) -> Option<Notice> {
        match self.feed.refresh(&self.db) {
            Ok(_) => None,
            Err(e) => Some(Notice::danger(format!("Sincronização: {e}"))),
        }
    }
}
