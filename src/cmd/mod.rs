use crate::cmd::app::{
	cmd_app, ARG_BUCKET, ARG_FILE_PATH, ARG_PATTERN, ARG_S3_KEY, CMD_DELETE_REGEX, CMD_LIST, CMD_LIST_REGEX, CMD_UPLOAD,
};
use crate::s3w::{get_sbucket, BucketStore, DeleteOutcome, Listing, ScopedBucket};
use crate::{Error, Result};
use clap::ArgMatches;
use std::io::{self, Write};
use std::path::Path;

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = cmd_app().get_matches();
	let mut out = io::stdout();

	match argm.subcommand() {
		Some((CMD_LIST, sub)) => {
			let sbucket = get_sbucket(get_arg(sub, ARG_BUCKET)?).await?;
			exec_list(&sbucket, &mut out).await?
		}
		Some((CMD_UPLOAD, sub)) => {
			let sbucket = get_sbucket(get_arg(sub, ARG_BUCKET)?).await?;
			let file_path = get_arg(sub, ARG_FILE_PATH)?;
			let s3_key = get_arg(sub, ARG_S3_KEY)?;
			exec_upload(&sbucket, file_path, s3_key, &mut out).await?
		}
		Some((CMD_LIST_REGEX, sub)) => {
			let sbucket = get_sbucket(get_arg(sub, ARG_BUCKET)?).await?;
			exec_list_regex(&sbucket, get_arg(sub, ARG_PATTERN)?, &mut out).await?
		}
		Some((CMD_DELETE_REGEX, sub)) => {
			let sbucket = get_sbucket(get_arg(sub, ARG_BUCKET)?).await?;
			exec_delete_regex(&sbucket, get_arg(sub, ARG_PATTERN)?, &mut out).await?
		}
		_ => {
			cmd_app().print_long_help()?;
			println!("\n");
		}
	}

	Ok(())
}

// region:    --- Execs

pub async fn exec_list(store: &dyn BucketStore, out: &mut impl Write) -> Result<()> {
	let sbucket = ScopedBucket::new(store);

	match sbucket.list().await? {
		Listing::Keys(keys) => {
			writeln!(out, "Files in {}:", sbucket.location())?;
			for key in keys.iter() {
				writeln!(out, "{key}")?;
			}
		}
		Listing::Empty | Listing::NoMatch => writeln!(out, "{}", no_files_msg(&sbucket))?,
	}

	Ok(())
}

pub async fn exec_upload(store: &dyn BucketStore, file_path: &str, s3_key: &str, out: &mut impl Write) -> Result<()> {
	let sbucket = ScopedBucket::new(store);

	let key = sbucket.upload(Path::new(file_path), s3_key).await?;
	writeln!(
		out,
		"File '{file_path}' uploaded to '{key}' in bucket '{}'.",
		sbucket.bucket()
	)?;

	Ok(())
}

pub async fn exec_list_regex(store: &dyn BucketStore, pattern: &str, out: &mut impl Write) -> Result<()> {
	let sbucket = ScopedBucket::new(store);

	match sbucket.list_matching(pattern).await? {
		Listing::Keys(keys) => {
			writeln!(out, "Files in {} matching pattern '{pattern}':", sbucket.location())?;
			for key in keys.iter() {
				writeln!(out, "{key}")?;
			}
		}
		Listing::NoMatch => writeln!(out, "No files matched pattern '{pattern}'.")?,
		Listing::Empty => writeln!(out, "{}", no_files_msg(&sbucket))?,
	}

	Ok(())
}

pub async fn exec_delete_regex(store: &dyn BucketStore, pattern: &str, out: &mut impl Write) -> Result<()> {
	let sbucket = ScopedBucket::new(store);
	let location = sbucket.location();

	let outcome = sbucket
		.delete_matching(pattern, |idx, key| {
			if idx == 0 {
				writeln!(out, "Deleting files from {location} matching pattern '{pattern}':")?;
			}
			writeln!(out, "Deleting {key}...")?;
			Ok(())
		})
		.await?;

	match outcome {
		DeleteOutcome::Deleted(keys) => writeln!(out, "Deleted {} files.", keys.len())?,
		DeleteOutcome::NoMatch => writeln!(out, "No files matched pattern '{pattern}'.")?,
		DeleteOutcome::Empty => writeln!(out, "{}", no_files_msg(&sbucket))?,
	}

	Ok(())
}

// endregion: --- Execs

// region:    Args Utils
fn get_arg<'a>(argm: &'a ArgMatches, name: &str) -> Result<&'a str> {
	argm.get_one::<String>(name)
		.map(String::as_str)
		.ok_or(Error::CmdInvalid("missing required argument"))
}

fn no_files_msg(sbucket: &ScopedBucket) -> String {
	format!("No files found in bucket {}.", sbucket.location())
}
// endregion: Args Utils

// region:    --- Tests

#[cfg(test)]
#[path = "../_tests/test-cmd.rs"]
mod tests;

// endregion: --- Tests
