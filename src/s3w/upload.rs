use super::SBucket;
use crate::{Error, Result};
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use tracing::debug;

impl SBucket {
	/// Upload a single file to a fully resolved key.
	pub async fn upload_file(&self, src_file: &Path, key: &str) -> Result<()> {
		// BUILD - the src file info
		let mime_type = mime_guess::from_path(src_file).first_or_octet_stream().to_string();
		let body = ByteStream::from_path(src_file).await?;

		// BUILD - aws s3 put request
		let builder = self
			.client
			.put_object()
			.key(key)
			.bucket(&self.name)
			.body(body)
			.content_type(&mime_type);

		// EXECUTE - aws request
		debug!(src = %src_file.display(), dst = %self.s3_url(key), content_type = %mime_type, "put_object");
		builder.send().await.map_err(|e| Error::from_sdk("PutObject", e))?;

		Ok(())
	}
}
