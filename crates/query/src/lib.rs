//! Query coordination for search-as-you-type and async suggestion lookup.
//!
//! Many requests may be in flight at once; only the response to the most
//! recently issued request is ever applied to visible state. Superseded
//! responses are dropped on arrival, whatever their completion order.

mod class;
pub mod coordinator;
pub mod service;
pub mod source;
mod spawn;

pub use class::TaskClass;
pub use coordinator::{Acceptance, QueryCoordinator, QueryOutcome, QueryRequest, QueryResponse};
pub use service::QueryService;
pub use source::{
	PackageSource, QuerySource, SearchQuery, SearchSource, SourceError, SuggestQuery, SuggestionSource, TagSource,
};
pub use spawn::spawn_fetch;
