use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use std::fmt::Debug;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Credentials not available.")]
	NoCredentials,

	#[error("Invalid command. Cause: {0}")]
	CmdInvalid(&'static str),

	#[error("File '{0}' not found.")]
	FilePathNotFound(String),

	#[error("Invalid pattern '{pattern}'. Cause: {cause}")]
	InvalidPattern { pattern: String, cause: regex::Error },

	#[error("Error: An error occurred ({code}) when calling the {op} operation: {message}")]
	AwsServiceError {
		op: &'static str,
		code: String,
		message: String,
	},

	#[error("Error: {op} request failed: {cause}")]
	AwsSdk { op: &'static str, cause: String },

	#[error("Error: {0}")]
	ByteStream(#[from] aws_sdk_s3::primitives::ByteStreamError),

	#[error("Error: {0}")]
	IO(#[from] std::io::Error),
}

impl Error {
	/// For better CLI error reporting, service errors are flattened to their code and message.
	/// `op` is the S3 operation name (e.g., `ListObjectsV2`).
	pub fn from_sdk<E, R>(op: &'static str, val: SdkError<E, R>) -> Error
	where
		E: ProvideErrorMetadata + std::error::Error + 'static,
		R: Debug,
	{
		match &val {
			SdkError::ServiceError(se) => {
				let se = se.err();
				Error::AwsServiceError {
					op,
					code: se.code().unwrap_or("Unknown").to_string(),
					message: se.message().unwrap_or_default().to_string(),
				}
			}
			_ => Error::AwsSdk {
				op,
				cause: DisplayErrorContext(&val).to_string(),
			},
		}
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use aws_sdk_s3::error::ErrorMetadata;
	use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
	use aws_sdk_s3::types::error::NoSuchBucket;

	const NO_BUCKET_MSG: &str = "The specified bucket does not exist";

	#[test]
	fn test_error_display_messages() {
		assert_eq!(Error::NoCredentials.to_string(), "Credentials not available.");
		assert_eq!(
			Error::FilePathNotFound("./nope.txt".to_string()).to_string(),
			"File './nope.txt' not found."
		);
	}

	#[test]
	fn test_error_invalid_pattern() {
		let cause = regex::Regex::new("(").unwrap_err();
		let err = Error::InvalidPattern {
			pattern: "(".to_string(),
			cause,
		};
		assert!(err.to_string().starts_with("Invalid pattern '('. Cause: "));
	}

	#[test]
	fn test_error_from_sdk_service_error() {
		let meta = ErrorMetadata::builder().code("NoSuchBucket").message(NO_BUCKET_MSG).build();
		let no_bucket = NoSuchBucket::builder().message(NO_BUCKET_MSG).meta(meta).build();
		let sdk_err = SdkError::<ListObjectsV2Error, ()>::service_error(ListObjectsV2Error::NoSuchBucket(no_bucket), ());

		let err = Error::from_sdk("ListObjectsV2", sdk_err);

		assert!(matches!(err, Error::AwsServiceError { ref code, .. } if code == "NoSuchBucket"));
		assert_eq!(
			err.to_string(),
			"Error: An error occurred (NoSuchBucket) when calling the ListObjectsV2 operation: The specified bucket does not exist"
		);
	}

	#[test]
	fn test_error_from_sdk_non_service_error() {
		let sdk_err = SdkError::<ListObjectsV2Error, ()>::timeout_error("connect timed out");

		let err = Error::from_sdk("PutObject", sdk_err);

		assert!(matches!(err, Error::AwsSdk { op: "PutObject", .. }));
		let msg = err.to_string();
		assert!(msg.starts_with("Error: PutObject request failed: "), "msg: {msg}");
		assert!(msg.contains("connect timed out"), "msg: {msg}");
	}

	#[test]
	fn test_error_io_has_error_prefix() {
		let err = Error::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"));
		assert_eq!(err.to_string(), "Error: permission denied");
	}
}

// endregion: --- Tests
