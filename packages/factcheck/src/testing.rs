//! Testing utilities including mock implementations.
//!
//! `MockNewsSearcher` lives next to its trait in
//! [`crate::traits::searcher`]; the model and fetcher mocks live here.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{FactCheckError, Result};
use crate::traits::fetcher::ContentFetcher;
use crate::traits::model::CompletionModel;

/// A mock completion model with canned, prompt-keyed responses.
///
/// Rules are matched by substring against the incoming prompt, in
/// insertion order; failure rules are checked first so a prompt can be
/// forced to fail even when a response rule would match it. Prompts seen
/// are recorded for assertions.
#[derive(Default)]
pub struct MockModel {
    rules: RwLock<Vec<(String, String)>>,
    failures: RwLock<Vec<String>>,
    default_response: RwLock<Option<String>>,
    calls: RwLock<Vec<String>>,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with `response` to any prompt containing `prompt_substring`.
    pub fn with_response(self, prompt_substring: &str, response: &str) -> Self {
        self.rules
            .write()
            .unwrap()
            .push((prompt_substring.to_string(), response.to_string()));
        self
    }

    /// Fail any prompt containing `prompt_substring`. An empty string
    /// fails every call.
    pub fn with_failure(self, prompt_substring: &str) -> Self {
        self.failures
            .write()
            .unwrap()
            .push(prompt_substring.to_string());
        self
    }

    /// Response for prompts no rule matches.
    pub fn with_default(self, response: &str) -> Self {
        *self.default_response.write().unwrap() = Some(response.to_string());
        self
    }

    /// All prompts submitted to this mock, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.write().unwrap().push(prompt.to_string());

        if self
            .failures
            .read()
            .unwrap()
            .iter()
            .any(|s| prompt.contains(s.as_str()))
        {
            return Err(FactCheckError::model("simulated model failure"));
        }

        for (substring, response) in self.rules.read().unwrap().iter() {
            if prompt.contains(substring.as_str()) {
                return Ok(response.clone());
            }
        }

        self.default_response
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| FactCheckError::model("MockModel has no response for prompt"))
    }
}

/// A mock content fetcher with canned pages.
///
/// Unknown URLs produce the same inline error string a real fetcher
/// emits, exercising the degraded-content path for free.
#[derive(Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<String, String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned page for a URL.
    pub fn with_page(self, url: &str, content: &str) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(url.to_string(), content.to_string());
        self
    }
}

#[async_trait]
impl ContentFetcher for MockFetcher {
    async fn fetch(&self, url: &str, max_chars: usize) -> String {
        match self.pages.read().unwrap().get(url) {
            Some(content) => content.chars().take(max_chars).collect(),
            None => format!("Error loading content: no fixture for {url}"),
        }
    }
}
