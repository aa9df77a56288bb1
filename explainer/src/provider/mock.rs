//! Canned provider for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::Provider;
use crate::error::ProviderError;

/// Returns a fixed reply (or fixed error) and records how it was called.
pub struct MockProvider {
    reply: Result<String, ProviderError>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockProvider {
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::new(Ok(reply.into()))
    }

    pub fn with_error(err: ProviderError) -> Self {
        Self::new(Err(err))
    }

    fn new(reply: Result<String, ProviderError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Number of [`Provider::generate`] calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|g| g.clone())
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut g) = self.last_prompt.lock() {
            *g = Some(prompt.to_string());
        }
        self.reply.clone()
    }
}
