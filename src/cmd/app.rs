use clap::{crate_version, Arg, Command};

pub const CMD_LIST: &str = "list";
pub const CMD_UPLOAD: &str = "upload";
pub const CMD_LIST_REGEX: &str = "list_regex";
pub const CMD_DELETE_REGEX: &str = "delete_regex";

pub const ARG_BUCKET: &str = "bucket";
pub const ARG_FILE_PATH: &str = "file_path";
pub const ARG_S3_KEY: &str = "s3_key";
pub const ARG_PATTERN: &str = "pattern";

pub fn cmd_app() -> Command {
	Command::new("xwing-s3")
		.version(crate_version!())
		.about("Manage the files of the 'x-wing/' directory of a S3 bucket.")
		.subcommand(sub_list())
		.subcommand(sub_upload())
		.subcommand(sub_list_regex())
		.subcommand(sub_delete_regex())
}

// region:    --- Sub Commands
fn sub_list() -> Command {
	Command::new(CMD_LIST)
		.about("List the files in the 'x-wing/' directory. e.g., `xwing-s3 list my-bucket`")
		.arg(arg_bucket())
}

fn sub_upload() -> Command {
	Command::new(CMD_UPLOAD)
		.about("Upload a file into the 'x-wing/' directory. e.g., `xwing-s3 upload my-bucket ./report.csv reports/report.csv`")
		.arg(arg_bucket())
		.arg(
			Arg::new(ARG_FILE_PATH)
				.num_args(1)
				.required(true)
				.help("The local file to upload."),
		)
		.arg(
			Arg::new(ARG_S3_KEY)
				.num_args(1)
				.required(true)
				.help("The destination name, relative to 'x-wing/'."),
		)
}

fn sub_list_regex() -> Command {
	Command::new(CMD_LIST_REGEX)
		.about("List the files in the 'x-wing/' directory which keys match the regex (from the start of the key)")
		.arg(arg_bucket())
		.arg(arg_pattern())
}

fn sub_delete_regex() -> Command {
	Command::new(CMD_DELETE_REGEX)
		.about("Delete the files in the 'x-wing/' directory which keys match the regex (from the start of the key)")
		.arg(arg_bucket())
		.arg(arg_pattern())
}
// endregion: --- Sub Commands

// region:    --- Common Args
fn arg_bucket() -> Arg {
	Arg::new(ARG_BUCKET).num_args(1).required(true).help("The S3 bucket name.")
}

fn arg_pattern() -> Arg {
	Arg::new(ARG_PATTERN)
		.num_args(1)
		.required(true)
		.help("The regex matched against the full key, including 'x-wing/'. e.g., 'x-wing/.*\\.log'")
}
// endregion: --- Common Args

// endregion: --- Tests
