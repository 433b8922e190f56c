#![allow(unused)]

// --- Re-exports
pub use exec::{exec_xwing, exec_xwing_with_home, ExecOutput, ENV_FAKE_CREDS};

// --- Sub-Modules
mod exec;

// region:    --- String Utils
// Note: Personal best practice, "x" prefix to note that this is just private crate interface.

pub trait XString {
	fn x_lines(&self) -> std::str::Lines;
	fn x_has_line(&self, line: &str) -> bool;
}

impl XString for str {
	/// Return the str::Lines but for the trimmed text (so no starting or ending empty lines)
	fn x_lines(&self) -> std::str::Lines {
		self.trim().lines()
	}
	fn x_has_line(&self, line: &str) -> bool {
		self.x_lines().any(|l| l == line)
	}
}

impl XString for String {
	fn x_lines(&self) -> std::str::Lines {
		str::x_lines(self)
	}

	fn x_has_line(&self, line: &str) -> bool {
		str::x_has_line(self, line)
	}
}
// endregion: --- String Utils
