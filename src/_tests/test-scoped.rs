use super::*;
use crate::_test_support::{MemBucket, Result};
use std::io::Write;

#[tokio::test]
async fn test_list_empty_prefix() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["other/a.txt", "x-wing"]);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec
	let listing = sbucket.list().await?;

	// -- Check
	assert_eq!(listing, Listing::Empty);

	Ok(())
}

#[tokio::test]
async fn test_list_only_prefixed_keys() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt", "other/c.txt", "x-wing/sub/b.log"]);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec
	let listing = sbucket.list().await?;

	// -- Check
	assert_eq!(
		listing,
		Listing::Keys(vec!["x-wing/a.txt".to_string(), "x-wing/sub/b.log".to_string()])
	);

	Ok(())
}

#[tokio::test]
async fn test_list_first_page_only() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/1", "x-wing/2", "x-wing/3"]).with_page_size(2);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec
	let listing = sbucket.list().await?;

	// -- Check
	assert_eq!(listing, Listing::Keys(vec!["x-wing/1".to_string(), "x-wing/2".to_string()]));

	Ok(())
}

#[tokio::test]
async fn test_list_matching_from_start() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt", "x-wing/b.log", "x-wing/ba.txt"]);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec
	// "a" is found inside "x-wing/ba.txt", but not at its start.
	let by_name = sbucket.list_matching("a").await?;
	let by_full_key = sbucket.list_matching(r"x-wing/a\.").await?;

	// -- Check
	assert_eq!(by_name, Listing::NoMatch);
	assert_eq!(by_full_key, Listing::Keys(vec!["x-wing/a.txt".to_string()]));

	Ok(())
}

#[tokio::test]
async fn test_list_matching_not_full_match() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/report-2024.csv"]);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec
	let listing = sbucket.list_matching("x-wing/report").await?;

	// -- Check
	assert_eq!(listing, Listing::Keys(vec!["x-wing/report-2024.csv".to_string()]));

	Ok(())
}

#[tokio::test]
async fn test_list_matching_empty_prefix() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&[]);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec & Check
	assert_eq!(sbucket.list_matching(".*").await?, Listing::Empty);

	Ok(())
}

#[tokio::test]
async fn test_list_matching_invalid_pattern() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt"]);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec
	let res = sbucket.list_matching("x-wing/(").await;

	// -- Check
	assert!(matches!(res, Err(Error::InvalidPattern { ref pattern, .. }) if pattern == "x-wing/("));

	Ok(())
}

#[tokio::test]
async fn test_upload_key_has_prefix() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&[]);
	let sbucket = ScopedBucket::new(&mem);
	let mut file = tempfile::NamedTempFile::new()?;
	file.write_all(b"hello x-wing")?;

	// -- Exec
	let key = sbucket.upload(file.path(), "notes/hello.txt").await?;

	// -- Check
	assert_eq!(key, "x-wing/notes/hello.txt");
	assert_eq!(mem.keys(), vec!["x-wing/notes/hello.txt".to_string()]);
	assert_eq!(mem.content("x-wing/notes/hello.txt").as_deref(), Some(&b"hello x-wing"[..]));

	Ok(())
}

#[tokio::test]
async fn test_upload_file_not_found() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&[]);
	let sbucket = ScopedBucket::new(&mem);
	let dir = tempfile::tempdir()?;
	let missing = dir.path().join("missing.txt");

	// -- Exec
	let res = sbucket.upload(&missing, "missing.txt").await;

	// -- Check
	assert!(matches!(res, Err(Error::FilePathNotFound(_))));
	assert!(mem.keys().is_empty());

	// a directory is not an uploadable file either
	let res = sbucket.upload(dir.path(), "dir").await;
	assert!(matches!(res, Err(Error::FilePathNotFound(_))));

	Ok(())
}

#[tokio::test]
async fn test_delete_matching_scenario() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt", "x-wing/b.log"]);
	let sbucket = ScopedBucket::new(&mem);
	let mut announced = Vec::new();

	// -- Exec
	let outcome = sbucket
		.delete_matching("x-wing/a.*", |_, k| {
			announced.push(k.to_string());
			Ok(())
		})
		.await?;

	// -- Check
	assert_eq!(outcome, DeleteOutcome::Deleted(vec!["x-wing/a.txt".to_string()]));
	assert_eq!(announced, vec!["x-wing/a.txt".to_string()]);
	assert_eq!(mem.delete_calls(), vec!["x-wing/a.txt".to_string()]);
	assert_eq!(mem.keys(), vec!["x-wing/b.log".to_string()]);

	Ok(())
}

#[tokio::test]
async fn test_delete_matching_never_outside_prefix() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["other/a.txt", "x-wing/a.txt", "x-wing/b.txt"]);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec
	let outcome = sbucket.delete_matching(".*", |_, _| Ok(())).await?;

	// -- Check
	let DeleteOutcome::Deleted(deleted) = outcome else {
		panic!("expected Deleted outcome");
	};
	assert_eq!(deleted.len(), 2);
	assert_eq!(mem.keys(), vec!["other/a.txt".to_string()]);

	Ok(())
}

#[tokio::test]
async fn test_delete_matching_no_match() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt", "x-wing/b.log"]);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec
	let outcome = sbucket.delete_matching("x-wing/zz", |_, _| Ok(())).await?;

	// -- Check
	assert_eq!(outcome, DeleteOutcome::NoMatch);
	assert!(mem.delete_calls().is_empty());
	assert_eq!(mem.keys().len(), 2);

	Ok(())
}

#[tokio::test]
async fn test_delete_matching_empty_prefix() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["other/a.txt"]);
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec & Check
	assert_eq!(sbucket.delete_matching(".*", |_, _| Ok(())).await?, DeleteOutcome::Empty);
	assert!(mem.delete_calls().is_empty());

	Ok(())
}

#[tokio::test]
async fn test_delete_matching_stops_on_failure() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/1", "x-wing/2", "x-wing/3"]).with_fail_delete_on("x-wing/2");
	let sbucket = ScopedBucket::new(&mem);

	// -- Exec
	let res = sbucket.delete_matching("x-wing/", |_, _| Ok(())).await;

	// -- Check
	assert!(matches!(res, Err(Error::AwsServiceError { ref code, .. }) if code == "AccessDenied"));
	assert_eq!(mem.delete_calls(), vec!["x-wing/1".to_string(), "x-wing/2".to_string()]);
	assert_eq!(mem.keys(), vec!["x-wing/2".to_string(), "x-wing/3".to_string()]);

	Ok(())
}

#[test]
fn test_location_and_full_key() {
	let mem = MemBucket::new(&[]);
	let sbucket = ScopedBucket::new(&mem);

	assert_eq!(sbucket.bucket(), "test-bucket");
	assert_eq!(sbucket.prefix(), "x-wing/");
	assert_eq!(sbucket.location(), "test-bucket/x-wing/");
	assert_eq!(sbucket.full_key("a.txt"), "x-wing/a.txt");
}
