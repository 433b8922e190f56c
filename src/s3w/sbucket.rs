use super::{BucketStore, ListPage};
use crate::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use std::path::Path;

/// A bucket on the remote S3 service, bound to one client.
pub struct SBucket {
	pub client: Client,
	pub name: String,
}

impl SBucket {
	/// Constructor
	pub fn from_client_and_name(client: Client, name: impl Into<String>) -> SBucket {
		SBucket { client, name: name.into() }
	}

	pub fn s3_url(&self, key: &str) -> String {
		format!("s3://{}/{key}", self.name)
	}
}

#[async_trait]
impl BucketStore for SBucket {
	fn name(&self) -> &str {
		&self.name
	}

	async fn list_page(&self, prefix: &str) -> Result<ListPage> {
		self.list(prefix).await
	}

	async fn put_file(&self, key: &str, src_file: &Path) -> Result<()> {
		self.upload_file(src_file, key).await
	}

	async fn delete_object(&self, key: &str) -> Result<()> {
		self.delete_key(key).await
	}
}
