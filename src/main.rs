use cmd::cmd_run;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cmd;
mod consts;
mod error;
mod s3w;

#[cfg(test)]
mod _test_support;

pub use error::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	// Diagnostics go to stderr (RUST_LOG), command results to stdout.
	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(EnvFilter::from_default_env())
		.init();

	if let Err(e) = cmd_run().await {
		println!("{e}");
		std::process::exit(1);
	}
}
