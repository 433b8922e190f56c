use anyhow::Result;
use std::path::Path;
use std::process::{Command, Stdio};

// Fake but well formed credentials. Enough for the paths that never reach the network.
pub const ENV_FAKE_CREDS: [(&str, &str); 3] = [
	("AWS_ACCESS_KEY_ID", "minio"),
	("AWS_SECRET_ACCESS_KEY", "miniominio"),
	("AWS_ENDPOINT", "http://127.0.0.1:9000"),
];

pub struct ExecOutput {
	pub success: bool,
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

/// Execute the built binary with the given args, an empty HOME, and only the `envs` environment.
pub fn exec_xwing(args: &[&str], envs: &[(&str, &str)], print_exec: bool) -> Result<ExecOutput> {
	let home = tempfile::tempdir()?;
	exec_xwing_with_home(args, envs, home.path(), print_exec)
}

/// Same as `exec_xwing` but with a given HOME (e.g., holding a `.aws/credentials` file).
pub fn exec_xwing_with_home(args: &[&str], envs: &[(&str, &str)], home: &Path, print_exec: bool) -> Result<ExecOutput> {
	let bin = env!("CARGO_BIN_EXE_xwing-s3");

	if print_exec {
		println!("> executing: {} {}", bin, args.join(" "));
	}

	let mut proc = Command::new(bin);
	proc.args(args);

	// The host environment (AWS variables, profiles, metadata service) must not leak into the tests.
	proc.env_clear();
	proc.env("HOME", home);
	proc.env("AWS_EC2_METADATA_DISABLED", "true");
	for (name, val) in envs.iter() {
		proc.env(name, val);
	}

	let output = proc.stdout(Stdio::piped()).stderr(Stdio::piped()).output()?;

	Ok(ExecOutput {
		success: output.status.success(),
		code: output.status.code(),
		stdout: String::from_utf8(output.stdout)?,
		stderr: String::from_utf8(output.stderr)?,
	})
}
