use async_trait::async_trait;
use stickyard_primitives::{StickyThumb, Tag};
use stickyard_query::{PackageSource, SearchSource, SourceError, TagSource};

use super::Library;

#[async_trait]
impl SearchSource for Library {
	async fn search(&self, query: &str, page: usize) -> Result<Option<Vec<StickyThumb>>, SourceError> {
		Library::search(self, query, page)
			.map(Some)
			.map_err(|error| SourceError::InvalidQuery(error.to_string()))
	}
}

#[async_trait]
impl PackageSource for Library {
	async fn search_packages(&self, input: &str) -> Result<Vec<String>, SourceError> {
		Ok(Library::search_packages(self, input))
	}
}

#[async_trait]
impl TagSource for Library {
	async fn search_tags(&self, input: &str) -> Result<Vec<Tag>, SourceError> {
		Ok(Library::search_tags(self, input))
	}
}
