use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};
use tokio::{sync::Mutex, task};

use crate::{
    analytics::{self, ScorePoint},
    classifier::ClassifierHandle,
    models::Record,
    store::AnnotationStore,
};

use super::{SessionError, SessionSnapshot, SessionStatus};

/// Drives one annotation session: accepts messages, runs the classifier,
/// appends the results, and answers reads from log snapshots.
///
/// At most one classification runs at a time. The status flag is the gate:
/// `submit` flips it to `Classifying` before any slow work and back to `Idle`
/// on every exit path, success or failure. While it is up, further submits
/// and clears are rejected with `Busy` instead of waiting.
#[derive(Clone)]
pub struct SessionController {
    status: Arc<Mutex<SessionStatus>>,
    store: AnnotationStore,
    classifier: ClassifierHandle,
}

impl SessionController {
    pub fn new(store: AnnotationStore, classifier: ClassifierHandle) -> Self {
        Self {
            status: Arc::new(Mutex::new(SessionStatus::Idle)),
            store,
            classifier,
        }
    }

    pub async fn status(&self) -> SessionStatus {
        *self.status.lock().await
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status().await,
            message_count: self.store.len().await,
        }
    }

    /// Classify one message and append it to the log.
    ///
    /// Surrounding whitespace is trimmed before anything else; a message
    /// that is blank after trimming is rejected without touching the
    /// classifier. A classifier failure is reported and nothing is stored.
    pub async fn submit(&self, text: &str) -> Result<Record, SessionError> {
        let content = text.trim();
        if content.is_empty() {
            return Err(SessionError::Validation(
                "message text is empty".to_string(),
            ));
        }

        {
            let mut status = self.status.lock().await;
            if *status == SessionStatus::Classifying {
                warn!("submit rejected: session is {}", status.as_str());
                return Err(SessionError::Busy);
            }
            *status = SessionStatus::Classifying;
        }

        let outcome = self.classify_and_append(content).await;

        {
            let mut status = self.status.lock().await;
            *status = SessionStatus::Idle;
        }

        if let Err(err) = &outcome {
            warn!("submit failed: {err}");
        }

        outcome
    }

    async fn classify_and_append(&self, content: &str) -> Result<Record, SessionError> {
        // Backends may block (model load, inference), so keep them off the
        // async runtime.
        let classifier = self.classifier.clone();
        let text = content.to_string();
        let classification = task::spawn_blocking(move || classifier.classify(&text))
            .await
            .map_err(|err| SessionError::Classification(format!("classifier task failed: {err}")))??;

        if !(0.0..=1.0).contains(&classification.score) {
            return Err(SessionError::Classification(format!(
                "backend returned score {} outside [0.0, 1.0]",
                classification.score
            )));
        }

        let record = Record::new(content, classification.label, classification.score);
        self.store.append(record.clone()).await?;

        info!(
            "classified message as {} (score {:.3})",
            record.label, record.score
        );

        Ok(record)
    }

    /// Drop every record in the log. Rejected while a classification is in
    /// flight; an in-flight result may never land in an already-cleared log.
    pub async fn clear_history(&self) -> Result<usize, SessionError> {
        let status = self.status.lock().await;
        if *status == SessionStatus::Classifying {
            warn!("clear rejected: session is {}", status.as_str());
            return Err(SessionError::Busy);
        }

        let dropped = self.store.clear().await;
        info!("history cleared ({dropped} records dropped)");
        Ok(dropped)
    }

    /// The full log in insertion order.
    pub async fn current_log(&self) -> Vec<Record> {
        self.store.snapshot().await
    }

    pub async fn label_distribution(&self) -> HashMap<String, usize> {
        analytics::label_distribution(&self.store.snapshot().await)
    }

    pub async fn score_series(&self) -> Vec<ScorePoint> {
        analytics::score_series(&self.store.snapshot().await)
    }
}
