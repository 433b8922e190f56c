pub type Result<T> = core::result::Result<T, Error>;
pub type Error = Box<dyn std::error::Error>; // For tests.

use crate::s3w::{BucketStore, ListPage, SItem};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

pub const TEST_BUCKET: &str = "test-bucket";

/// In memory bucket, with a call journal to check what the commands did.
pub struct MemBucket {
	name: String,
	objects: Mutex<BTreeMap<String, Vec<u8>>>,
	page_size: usize,
	delete_calls: Mutex<Vec<String>>,
	/// When set, deleting this key fails with a service error.
	fail_delete_on: Option<String>,
	/// When set, every listing fails with a `NoSuchBucket` service error.
	fail_list: bool,
	/// When set, every upload fails with an `AccessDenied` service error.
	fail_put: bool,
}

impl MemBucket {
	pub fn new(keys: &[&str]) -> MemBucket {
		let objects = keys.iter().map(|k| (k.to_string(), Vec::new())).collect();
		MemBucket {
			name: TEST_BUCKET.to_string(),
			objects: Mutex::new(objects),
			page_size: 1000,
			delete_calls: Mutex::new(Vec::new()),
			fail_delete_on: None,
			fail_list: false,
			fail_put: false,
		}
	}

	pub fn with_page_size(mut self, page_size: usize) -> MemBucket {
		self.page_size = page_size;
		self
	}

	pub fn with_fail_delete_on(mut self, key: &str) -> MemBucket {
		self.fail_delete_on = Some(key.to_string());
		self
	}

	pub fn with_fail_list(mut self) -> MemBucket {
		self.fail_list = true;
		self
	}

	pub fn with_fail_put(mut self) -> MemBucket {
		self.fail_put = true;
		self
	}

	pub fn keys(&self) -> Vec<String> {
		self.objects.lock().unwrap().keys().cloned().collect()
	}

	pub fn content(&self, key: &str) -> Option<Vec<u8>> {
		self.objects.lock().unwrap().get(key).cloned()
	}

	pub fn delete_calls(&self) -> Vec<String> {
		self.delete_calls.lock().unwrap().clone()
	}
}

fn service_error(op: &'static str, code: &str, message: &str) -> crate::Error {
	crate::Error::AwsServiceError {
		op,
		code: code.to_string(),
		message: message.to_string(),
	}
}

#[async_trait]
impl BucketStore for MemBucket {
	fn name(&self) -> &str {
		&self.name
	}

	async fn list_page(&self, prefix: &str) -> crate::Result<ListPage> {
		if self.fail_list {
			return Err(service_error(
				"ListObjectsV2",
				"NoSuchBucket",
				"The specified bucket does not exist",
			));
		}

		let objects = self.objects.lock().unwrap();
		let mut matching = objects.iter().filter(|(k, _)| k.starts_with(prefix));

		let page: Vec<SItem> = matching
			.by_ref()
			.take(self.page_size)
			.map(|(k, v)| SItem::new(k.as_str(), v.len() as i64))
			.collect();
		let truncated = matching.next().is_some();

		Ok(ListPage { objects: page, truncated })
	}

	async fn put_file(&self, key: &str, src_file: &Path) -> crate::Result<()> {
		let content = tokio::fs::read(src_file).await?;
		if self.fail_put {
			return Err(service_error("PutObject", "AccessDenied", "Access Denied"));
		}
		self.objects.lock().unwrap().insert(key.to_string(), content);
		Ok(())
	}

	async fn delete_object(&self, key: &str) -> crate::Result<()> {
		self.delete_calls.lock().unwrap().push(key.to_string());
		if self.fail_delete_on.as_deref() == Some(key) {
			return Err(service_error("DeleteObject", "AccessDenied", "Access Denied"));
		}
		self.objects.lock().unwrap().remove(key);
		Ok(())
	}
}
