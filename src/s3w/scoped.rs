//! Operations restricted to the keys under a single prefix of a bucket.

use super::BucketStore;
use crate::consts::PREFIX;
use crate::{Error, Result};
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

// region:    --- Outcomes

#[derive(Debug, PartialEq, Eq)]
pub enum Listing {
	/// No object at all under the prefix.
	Empty,
	/// Objects exist under the prefix, but none matched the pattern.
	NoMatch,
	Keys(Vec<String>),
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
	Empty,
	NoMatch,
	Deleted(Vec<String>),
}

// endregion: --- Outcomes

pub struct ScopedBucket<'a> {
	store: &'a dyn BucketStore,
	prefix: &'static str,
}

impl<'a> ScopedBucket<'a> {
	pub fn new(store: &'a dyn BucketStore) -> Self {
		ScopedBucket { store, prefix: PREFIX }
	}

	pub fn bucket(&self) -> &str {
		self.store.name()
	}

	pub fn prefix(&self) -> &str {
		self.prefix
	}

	/// e.g., `my-bucket/x-wing/`
	pub fn location(&self) -> String {
		format!("{}/{}", self.store.name(), self.prefix())
	}

	pub fn full_key(&self, name: &str) -> String {
		format!("{}{name}", self.prefix())
	}

	/// Keys of the first listing page under the prefix.
	pub async fn list(&self) -> Result<Listing> {
		let keys = self.first_page_keys().await?;
		if keys.is_empty() {
			Ok(Listing::Empty)
		} else {
			Ok(Listing::Keys(keys))
		}
	}

	/// Keys of the first listing page under the prefix which match `pattern` from their start.
	pub async fn list_matching(&self, pattern: &str) -> Result<Listing> {
		let rx = compile_pattern(pattern)?;

		let keys = self.first_page_keys().await?;
		if keys.is_empty() {
			return Ok(Listing::Empty);
		}

		let matches: Vec<String> = keys.into_iter().filter(|k| match_from_start(&rx, k)).collect();
		if matches.is_empty() {
			Ok(Listing::NoMatch)
		} else {
			Ok(Listing::Keys(matches))
		}
	}

	/// Upload `file_path` to `prefix + name`. Returns the full key.
	pub async fn upload(&self, file_path: &Path, name: &str) -> Result<String> {
		if !file_path.is_file() {
			return Err(Error::FilePathNotFound(file_path.display().to_string()));
		}

		let key = self.full_key(name);
		self.store.put_file(&key, file_path).await?;

		Ok(key)
	}

	/// Delete, one call per object, the keys that `list_matching` would return.
	///
	/// `on_delete` is called with the index and key of each object right before its delete call.
	/// Stops at the first failed delete. Objects already deleted stay deleted.
	pub async fn delete_matching(
		&self,
		pattern: &str,
		mut on_delete: impl FnMut(usize, &str) -> Result<()>,
	) -> Result<DeleteOutcome> {
		let keys = match self.list_matching(pattern).await? {
			Listing::Empty => return Ok(DeleteOutcome::Empty),
			Listing::NoMatch => return Ok(DeleteOutcome::NoMatch),
			Listing::Keys(keys) => keys,
		};

		for (idx, key) in keys.iter().enumerate() {
			on_delete(idx, key)?;
			self.store.delete_object(key).await?;
		}

		Ok(DeleteOutcome::Deleted(keys))
	}

	async fn first_page_keys(&self) -> Result<Vec<String>> {
		let page = self.store.list_page(self.prefix).await?;
		let total_size: i64 = page.objects.iter().map(|o| o.size).sum();
		debug!(location = %self.location(), count = page.objects.len(), total_size, "listed page");
		if page.truncated {
			warn!(
				"listing of {} is truncated, only the first {} objects are processed",
				self.location(),
				page.objects.len()
			);
		}
		Ok(page.objects.into_iter().map(|o| o.key).collect())
	}
}

// region:    --- Pattern Utils

fn compile_pattern(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|cause| Error::InvalidPattern {
		pattern: pattern.to_string(),
		cause,
	})
}

/// True if the regex matches at the very beginning of the key (the match does not need to reach the end).
fn match_from_start(rx: &Regex, key: &str) -> bool {
	// the leftmost match starts at 0 whenever any match at 0 exists
	rx.find(key).map(|m| m.start() == 0).unwrap_or(false)
}

// endregion: --- Pattern Utils

// region:    --- Tests

#[cfg(test)]
#[path = "../_tests/test-scoped.rs"]
mod tests;

// endregion: --- Tests
