//! Collaborator trait seams.
//!
//! The pipeline treats its external services (news search, page content
//! fetching, text completion) as opaque collaborators behind these
//! traits. Real clients live in [`crate::clients`]; mocks for testing live
//! beside each trait or in [`crate::testing`].

pub mod fetcher;
pub mod model;
pub mod searcher;

pub use fetcher::ContentFetcher;
pub use model::CompletionModel;
pub use searcher::{MockNewsSearcher, NewsItem, NewsSearcher};
