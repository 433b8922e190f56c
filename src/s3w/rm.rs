use super::SBucket;
use crate::{Error, Result};
use tracing::debug;

impl SBucket {
	pub async fn delete_key(&self, key: &str) -> Result<()> {
		let builder = self.client.delete_object().bucket(&self.name).key(key);

		debug!(dst = %self.s3_url(key), "delete_object");
		builder.send().await.map_err(|e| Error::from_sdk("DeleteObject", e))?;

		Ok(())
	}
}
