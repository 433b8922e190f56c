//! AWS API Wrapper

// region:    --- Modules

// -- Sub-modules

mod list;
mod rm;
mod sbucket;
mod scoped;
mod sitem;
mod upload;

// -- Re-exports
pub use self::sbucket::SBucket;
pub use self::scoped::{DeleteOutcome, Listing, ScopedBucket};
pub use self::sitem::ListPage;
#[cfg(test)]
pub use self::sitem::SItem;

pub mod cred;

// -- Imports
use crate::s3w::cred::new_s3_client;
use crate::Result;
use async_trait::async_trait;
use std::path::Path;

// endregion: --- Modules

// region:    --- BucketStore

/// The object operations of a single bucket that the commands rely on.
///
/// Implemented by `SBucket` for the remote service, and by an in-memory bucket in tests.
#[async_trait]
pub trait BucketStore: Send + Sync {
	fn name(&self) -> &str;

	/// List one page of objects whose key starts with `prefix`.
	async fn list_page(&self, prefix: &str) -> Result<ListPage>;

	/// Upload the content of `src_file` to `key`.
	async fn put_file(&self, key: &str, src_file: &Path) -> Result<()>;

	async fn delete_object(&self, key: &str) -> Result<()>;
}

// endregion: --- BucketStore

// region:    --- SBucket factory

/// Build the bucket handle from the environment credentials.
pub async fn get_sbucket(bucket: &str) -> Result<SBucket> {
	let client = new_s3_client().await?;
	Ok(SBucket::from_client_and_name(client, bucket))
}

// endregion: --- SBucket factory
