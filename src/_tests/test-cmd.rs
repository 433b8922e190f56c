use super::*;
use crate::_test_support::{MemBucket, Result};

fn as_text(out: Vec<u8>) -> String {
	String::from_utf8(out).expect("utf8 output")
}

#[tokio::test]
async fn test_exec_list_no_files() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["other/a.txt"]);
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	exec_list(&mem, &mut out).await?;

	// -- Check
	assert_eq!(as_text(out), "No files found in bucket test-bucket/x-wing/.\n");

	Ok(())
}

#[tokio::test]
async fn test_exec_list_files() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt", "x-wing/b.log"]);
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	exec_list(&mem, &mut out).await?;

	// -- Check
	assert_eq!(as_text(out), "Files in test-bucket/x-wing/:\nx-wing/a.txt\nx-wing/b.log\n");

	Ok(())
}

#[tokio::test]
async fn test_exec_upload() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&[]);
	let file = tempfile::NamedTempFile::new()?;
	let file_path = file.path().to_string_lossy().to_string();
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	exec_upload(&mem, &file_path, "a.txt", &mut out).await?;

	// -- Check
	assert_eq!(
		as_text(out),
		format!("File '{file_path}' uploaded to 'x-wing/a.txt' in bucket 'test-bucket'.\n")
	);
	assert_eq!(mem.keys(), vec!["x-wing/a.txt".to_string()]);

	Ok(())
}

#[tokio::test]
async fn test_exec_upload_not_found() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&[]);
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	let res = exec_upload(&mem, "./does-not-exist.txt", "a.txt", &mut out).await;

	// -- Check
	let err = res.expect_err("should fail");
	assert_eq!(err.to_string(), "File './does-not-exist.txt' not found.");
	assert!(out.is_empty());

	Ok(())
}

#[tokio::test]
async fn test_exec_list_regex() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt", "x-wing/b.log", "x-wing/c.log"]);
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	exec_list_regex(&mem, r"x-wing/.*\.log", &mut out).await?;

	// -- Check
	assert_eq!(
		as_text(out),
		"Files in test-bucket/x-wing/ matching pattern 'x-wing/.*\\.log':\nx-wing/b.log\nx-wing/c.log\n"
	);

	Ok(())
}

#[tokio::test]
async fn test_exec_list_regex_no_match() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt"]);
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	exec_list_regex(&mem, "zz", &mut out).await?;

	// -- Check
	assert_eq!(as_text(out), "No files matched pattern 'zz'.\n");

	Ok(())
}

#[tokio::test]
async fn test_exec_delete_regex_scenario() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt", "x-wing/b.log"]);
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	exec_delete_regex(&mem, "x-wing/a.*", &mut out).await?;

	// -- Check
	assert_eq!(
		as_text(out),
		"Deleting files from test-bucket/x-wing/ matching pattern 'x-wing/a.*':\n\
		 Deleting x-wing/a.txt...\n\
		 Deleted 1 files.\n"
	);
	assert_eq!(mem.keys(), vec!["x-wing/b.log".to_string()]);

	Ok(())
}

#[tokio::test]
async fn test_exec_delete_regex_no_match() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt", "x-wing/b.log"]);
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	exec_delete_regex(&mem, "x-wing/c", &mut out).await?;

	// -- Check
	assert_eq!(as_text(out), "No files matched pattern 'x-wing/c'.\n");
	assert!(mem.delete_calls().is_empty());

	Ok(())
}

#[tokio::test]
async fn test_exec_delete_regex_no_files() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&[]);
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	exec_delete_regex(&mem, ".*", &mut out).await?;

	// -- Check
	assert_eq!(as_text(out), "No files found in bucket test-bucket/x-wing/.\n");

	Ok(())
}

#[tokio::test]
async fn test_exec_delete_regex_partial_failure() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/1", "x-wing/2"]).with_fail_delete_on("x-wing/2");
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	let res = exec_delete_regex(&mem, "x-wing/", &mut out).await;

	// -- Check
	assert!(res.is_err());
	assert_eq!(
		as_text(out),
		"Deleting files from test-bucket/x-wing/ matching pattern 'x-wing/':\n\
		 Deleting x-wing/1...\n\
		 Deleting x-wing/2...\n"
	);
	assert_eq!(mem.keys(), vec!["x-wing/2".to_string()]);

	Ok(())
}

#[tokio::test]
async fn test_exec_list_service_error() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt"]).with_fail_list();
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	let res = exec_list(&mem, &mut out).await;

	// -- Check
	let err = res.expect_err("should fail");
	assert_eq!(
		err.to_string(),
		"Error: An error occurred (NoSuchBucket) when calling the ListObjectsV2 operation: The specified bucket does not exist"
	);
	assert!(out.is_empty());

	Ok(())
}

#[tokio::test]
async fn test_exec_list_regex_service_error() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt"]).with_fail_list();
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	let res = exec_list_regex(&mem, "x-wing/a", &mut out).await;

	// -- Check
	assert!(matches!(res, Err(Error::AwsServiceError { op: "ListObjectsV2", .. })));
	assert!(out.is_empty());

	Ok(())
}

#[tokio::test]
async fn test_exec_delete_regex_list_service_error() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&["x-wing/a.txt"]).with_fail_list();
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	let res = exec_delete_regex(&mem, ".*", &mut out).await;

	// -- Check
	assert!(matches!(res, Err(Error::AwsServiceError { op: "ListObjectsV2", .. })));
	assert!(out.is_empty());
	assert!(mem.delete_calls().is_empty());

	Ok(())
}

#[tokio::test]
async fn test_exec_upload_service_error() -> Result<()> {
	// -- Setup & Fixtures
	let mem = MemBucket::new(&[]).with_fail_put();
	let file = tempfile::NamedTempFile::new()?;
	let file_path = file.path().to_string_lossy().to_string();
	let mut out: Vec<u8> = Vec::new();

	// -- Exec
	let res = exec_upload(&mem, &file_path, "a.txt", &mut out).await;

	// -- Check
	let err = res.expect_err("should fail");
	assert_eq!(
		err.to_string(),
		"Error: An error occurred (AccessDenied) when calling the PutObject operation: Access Denied"
	);
	assert!(out.is_empty());
	assert!(mem.keys().is_empty());

	Ok(())
}
