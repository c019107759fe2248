//! Append-only in-memory log of annotated messages.
//!
//! The store is the single source of truth for the session: records enter via
//! `append`, leave only via `clear`, and are never edited in place. Readers
//! always get an owned snapshot, so later appends cannot mutate data a view
//! was computed from.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::Record;
use crate::session::SessionError;

pub struct AnnotationStore {
    inner: Arc<Mutex<Vec<Record>>>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a record to the end of the log. Invalid records are rejected
    /// and the log is left untouched.
    pub async fn append(&self, record: Record) -> Result<(), SessionError> {
        record.validate()?;

        let mut log = self.inner.lock().await;
        log.push(record);
        Ok(())
    }

    /// Drop every record. Returns how many were dropped.
    pub async fn clear(&self) -> usize {
        let mut log = self.inner.lock().await;
        let dropped = log.len();
        log.clear();
        dropped
    }

    /// Owned copy of the log in insertion order.
    pub async fn snapshot(&self) -> Vec<Record> {
        self.inner.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AnnotationStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
