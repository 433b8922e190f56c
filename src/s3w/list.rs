use super::sitem::{ListPage, SItem};
use super::SBucket;
use crate::{Error, Result};
use tracing::debug;

impl SBucket {
	/// List the first page of objects under `prefix` (recursive, no delimiter).
	pub async fn list(&self, prefix: &str) -> Result<ListPage> {
		// BUILD - the aws S3 list request
		let builder = self.client.list_objects_v2().bucket(&self.name).prefix(prefix);

		// EXECUTE - the AWS S3 request
		debug!(bucket = %self.name, prefix, "list_objects_v2");
		let resp = builder.send().await.map_err(|e| Error::from_sdk("ListObjectsV2", e))?;

		let objects: Vec<SItem> = resp.contents().iter().map(SItem::from_object).collect();
		let truncated = resp.is_truncated().unwrap_or(false);

		Ok(ListPage { objects, truncated })
	}
}
