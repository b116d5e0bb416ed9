//! Scripted in-memory provider for unit tests.

use std::{collections::HashMap, sync::Mutex};

use serp_api_service::{
    SearchParams, SearchProvider, SerpError,
    error_handler::Result,
    types::{AiOverviewPageResponse, SearchResponse},
};

/// Canned outcome of one provider call.
#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    Json(serde_json::Value),
    ProviderError(&'static str),
    Timeout,
}

impl Scripted {
    fn play<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        match self {
            Scripted::Json(value) => Ok(serde_json::from_value(value.clone())?),
            Scripted::ProviderError(msg) => Err(SerpError::Provider((*msg).to_string())),
            Scripted::Timeout => Err(SerpError::Timeout),
        }
    }
}

#[derive(Default)]
pub(crate) struct ScriptedProvider {
    searches: HashMap<String, Scripted>,
    pages: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub(crate) fn search(mut self, query: &str, outcome: Scripted) -> Self {
        self.searches.insert(query.to_string(), outcome);
        self
    }

    pub(crate) fn page(mut self, token: &str, outcome: Scripted) -> Self {
        self.pages.insert(token.to_string(), outcome);
        self
    }

    /// Calls seen so far, as `search:<query>` / `page:<token>`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl SearchProvider for ScriptedProvider {
    async fn search(&self, query: &str, _params: &SearchParams) -> Result<SearchResponse> {
        self.record(format!("search:{query}"));
        match self.searches.get(query) {
            Some(outcome) => outcome.play(),
            None => Err(SerpError::Provider(format!("unscripted query: {query}"))),
        }
    }

    async fn fetch_ai_overview_page(&self, page_token: &str) -> Result<AiOverviewPageResponse> {
        self.record(format!("page:{page_token}"));
        match self.pages.get(page_token) {
            Some(outcome) => outcome.play(),
            None => Err(SerpError::Provider(format!("unscripted token: {page_token}"))),
        }
    }
}
