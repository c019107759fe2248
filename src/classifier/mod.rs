//! Sentiment classifier boundary.
//!
//! The session core only sees the `Classifier` trait; which backend sits
//! behind it is a wiring decision. `ClassifierHandle` adds the lazy-load
//! policy: the backend is built on the first classification, exactly once,
//! and shared by every clone of the handle after that.

pub mod lexicon;

pub use lexicon::LexiconClassifier;

use std::sync::{Arc, OnceLock};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier backend unavailable")]
    BackendUnavailable {
        #[source]
        source: anyhow::Error,
    },
    #[error("cannot classify empty text")]
    EmptyText,
}

/// Label and confidence produced by a backend. The label is an opaque tag;
/// the score is the backend's confidence in it, in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;
}

/// Clone-able handle to a lazily built classifier backend.
///
/// Construction is cheap and never loads anything; the factory runs inside
/// `classify` on first use. Concurrent first calls race on the same cell, so
/// the factory still runs at most once.
#[derive(Clone)]
pub struct ClassifierHandle {
    backend: Arc<OnceLock<Arc<dyn Classifier>>>,
    factory: Arc<dyn Fn() -> Arc<dyn Classifier> + Send + Sync>,
}

impl ClassifierHandle {
    /// Handle backed by the built-in lexicon classifier.
    pub fn new() -> Self {
        Self::with_factory(|| {
            info!("loading lexicon sentiment backend");
            let backend: Arc<dyn Classifier> = Arc::new(LexiconClassifier::new());
            backend
        })
    }

    /// Handle that builds its backend with `factory` on first use.
    pub fn with_factory(factory: impl Fn() -> Arc<dyn Classifier> + Send + Sync + 'static) -> Self {
        Self {
            backend: Arc::new(OnceLock::new()),
            factory: Arc::new(factory),
        }
    }

    /// Handle over an already built backend. Used to inject test doubles.
    pub fn with_backend(backend: Arc<dyn Classifier>) -> Self {
        Self::with_factory(move || Arc::clone(&backend))
    }

    pub fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let backend = self.backend.get_or_init(|| (self.factory)());
        backend.classify(text)
    }
}

impl Default for ClassifierHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn backend_is_not_built_until_first_classify() {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = builds.clone();

        let handle = ClassifierHandle::with_factory(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let backend: Arc<dyn Classifier> = Arc::new(LexiconClassifier::new());
            backend
        });

        assert_eq!(builds.load(Ordering::SeqCst), 0);

        handle.classify("pretty good so far").unwrap();
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn backend_is_built_at_most_once() {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = builds.clone();

        let handle = ClassifierHandle::with_factory(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let backend: Arc<dyn Classifier> = Arc::new(LexiconClassifier::new());
            backend
        });

        for _ in 0..5 {
            handle.classify("works great").unwrap();
        }
        handle.clone().classify("still great").unwrap();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn injected_backend_is_used_as_is() {
        struct Fixed;

        impl Classifier for Fixed {
            fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
                Ok(Classification {
                    label: "fixed".to_string(),
                    score: 0.42,
                })
            }
        }

        let handle = ClassifierHandle::with_backend(Arc::new(Fixed));
        let classification = handle.classify("anything").unwrap();

        assert_eq!(classification.label, "fixed");
        assert_eq!(classification.score, 0.42);
    }
}
