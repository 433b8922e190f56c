use aws_sdk_s3::types::Object;

// region:    --- SItem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SItem {
	pub key: String,
	pub size: i64,
}

// builders
impl SItem {
	pub fn from_object(obj: &Object) -> SItem {
		let key = obj.key().unwrap_or_default().to_string();
		let size = obj.size().unwrap_or_default();
		SItem { key, size }
	}

	#[cfg(test)]
	pub fn new(key: impl Into<String>, size: i64) -> SItem {
		SItem { key: key.into(), size }
	}
}
// endregion: --- SItem

// region:    --- ListPage
/// A single listing response. `truncated` tells that the service has more objects than this page.
#[derive(Debug, Default)]
pub struct ListPage {
	pub objects: Vec<SItem>,
	pub truncated: bool,
}
// endregion: --- ListPage
