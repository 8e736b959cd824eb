//! Mock implementations of port traits
//!
//! Hand-rolled, configurable in-memory mocks. Scripted responses are consumed
//! in order; once the script runs out the default page (if any) is repeated.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::entities::{FeedPage, FeedQuery};
use crate::domain::ports::FeedApi;
use crate::error::ApiError;

/// Scripted `FeedApi` mock
///
/// - `with_page` / `with_error` queue one-shot responses, consumed in order
/// - `with_default_page` is returned once the queue is empty (cloned per call)
/// - `gated()` parks every call until `release()` - used to hold a fetch
///   in flight deterministically
#[derive(Default)]
pub struct ScriptedFeedApi {
    responses: Mutex<VecDeque<Result<FeedPage, ApiError>>>,
    default_page: Mutex<Option<FeedPage>>,
    calls: Mutex<Vec<FeedQuery>>,
    gate: Option<Arc<Notify>>,
    call_notify: Notify,
}

impl ScriptedFeedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful page response
    pub fn with_page(self, page: FeedPage) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Ok(page));
        self
    }

    /// Queue a failed response
    pub fn with_error(self, error: ApiError) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Err(error));
        self
    }

    /// Page to repeat once the scripted queue is exhausted
    pub fn with_default_page(self, page: FeedPage) -> Self {
        *self.default_page.lock().unwrap_or_else(|e| e.into_inner()) = Some(page);
        self
    }

    /// Park every call until `release` is invoked
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Release one parked call (a stored permit if none is waiting yet)
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Queue another page after construction
    pub fn push_page(&self, page: FeedPage) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Ok(page));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Queries received so far, in order
    pub fn calls(&self) -> Vec<FeedQuery> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Wait until at least `n` calls have been received
    pub async fn wait_for_calls(&self, n: usize) {
        loop {
            let notified = self.call_notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.call_count() >= n {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl FeedApi for ScriptedFeedApi {
    async fn fetch_page(&self, query: &FeedQuery) -> Result<FeedPage, ApiError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(query.clone());
        self.call_notify.notify_waiters();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let next = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(response) => response,
            None => {
                let default = self
                    .default_page
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .clone();
                Ok(default.unwrap_or(FeedPage {
                    items: Vec::new(),
                    has_more: false,
                }))
            }
        }
    }
}
