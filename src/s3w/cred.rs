use crate::consts::DEFAULT_REGION;
use crate::{Error, Result};
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client;
use std::env;
use tracing::debug;

// AWS environement names
const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
const AWS_REGION: &str = "AWS_REGION";
const AWS_ENDPOINT: &str = "AWS_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsKeys {
	pub key_id: String,
	pub key_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsCred {
	/// None when the key environment variables are not both set.
	/// The default AWS credential chain (shared `~/.aws/credentials`, ...) is then used.
	pub keys: Option<AwsKeys>,
	pub region: String,
	pub endpoint: Option<String>,
}

pub async fn new_s3_client() -> Result<Client> {
	let cred = load_aws_cred_from_env();
	client_from_cred(cred).await
}

pub async fn client_from_cred(aws_cred: AwsCred) -> Result<Client> {
	let AwsCred { keys, region, endpoint } = aws_cred;

	let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region));

	let from_env = keys.is_some();
	if let Some(AwsKeys { key_id, key_secret }) = keys {
		let cred = Credentials::new(key_id, key_secret, None, None, "loaded-from-env");
		loader = loader.credentials_provider(cred);
	}

	let config = loader.load().await;

	// Resolve the default chain now, so that a missing credential is reported before any request.
	if !from_env {
		ensure_credentials(&config).await?;
	}

	let mut builder = aws_sdk_s3::config::Builder::from(&config);

	// S3 compatible services (e.g., minio) usually do not support virtual host style.
	if let Some(endpoint) = endpoint {
		builder = builder.endpoint_url(endpoint).force_path_style(true);
	}

	Ok(Client::from_conf(builder.build()))
}

async fn ensure_credentials(config: &SdkConfig) -> Result<()> {
	resolve_credentials(config.credentials_provider()).await
}

async fn resolve_credentials(provider: Option<SharedCredentialsProvider>) -> Result<()> {
	let provider = provider.ok_or(Error::NoCredentials)?;

	match provider.provide_credentials().await {
		Ok(_) => Ok(()),
		Err(err) => {
			debug!("default credential chain failed: {}", DisplayErrorContext(&err));
			Err(Error::NoCredentials)
		}
	}
}

/// Load the AwsCred from the default AWS environment variables
/// - `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` (if absent, default AWS credential chain)
/// - `AWS_REGION` (default `eu-central-1`)
/// - `AWS_ENDPOINT` (optional)
pub fn load_aws_cred_from_env() -> AwsCred {
	load_aws_cred(|name| env::var(name).ok())
}

/// Same as `load_aws_cred_from_env` but with a custom variable lookup.
/// Empty values are treated as absent.
pub fn load_aws_cred(get_env: impl Fn(&str) -> Option<String>) -> AwsCred {
	let var = |name: &str| get_env(name).filter(|v| !v.is_empty());

	let keys = match (var(AWS_ACCESS_KEY_ID), var(AWS_SECRET_ACCESS_KEY)) {
		(Some(key_id), Some(key_secret)) => Some(AwsKeys { key_id, key_secret }),
		_ => None,
	};
	let region = var(AWS_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string());
	let endpoint = var(AWS_ENDPOINT);

	AwsCred { keys, region, endpoint }
}

// region:    --- Tests


// endregion: --- Tests
