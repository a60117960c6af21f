// src/feed.rs
//
// The board never renders straight from the table: it renders from the latest
// snapshot. A refresh builds a whole new snapshot and swaps the Arc; readers
// that still hold the previous one keep a consistent list.

use crate::db::{leads::list_leads, Database};
use crate::domain::lead::Lead;
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, RwLock};

#[derive(Debug)]
pub struct LeadSnapshot {
    /// Bumped only when the list actually changes.
    pub version: u64,
    pub leads: Vec<Lead>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl LeadSnapshot {
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn find(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }
}

#[derive(Debug)]
pub struct LeadFeed {
    current: RwLock<Arc<LeadSnapshot>>,
    // Held across load + swap so a slow reload can't install an older list.
    reload: Mutex<()>,
}

impl Default for LeadFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadFeed {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(LeadSnapshot {
                version: 0,
                leads: Vec::new(),
                loaded_at: None,
            })),
            reload: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> Arc<LeadSnapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Reloads the ordered list from the store and installs it.
    ///
    /// On failure the current snapshot stays in place.
    pub fn refresh(&self, db: &Database) -> Result<Arc<LeadSnapshot>, ServerError> {
        let _reload = match self.reload.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        let leads = list_leads(db).map_err(|e| {
            log::error!("lead feed refresh failed: {e}");
            e
        })?;
        Ok(self.replace(leads, Utc::now()))
    }

    /// Like `refresh`, but skips the store once a snapshot exists.
    pub fn ensure_loaded(&self, db: &Database) -> Result<Arc<LeadSnapshot>, ServerError> {
        let snap = self.snapshot();
        if snap.is_loaded() {
            return Ok(snap);
        }
        self.refresh(db)
    }

    fn replace(&self, leads: Vec<Lead>, loaded_at: DateTime<Utc>) -> Arc<LeadSnapshot> {
        let mut guard = match self.current.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };

        let version = if guard.is_loaded() && guard.leads == leads {
            guard.version
        } else {
            guard.version + 1
        };

        let next = Arc::new(LeadSnapshot {
            version,
            leads,
            loaded_at: Some(loaded_at),
        });
        *guard = Arc::clone(&next);
        next
    }
}
