#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::PathBuf;

#[cfg(windows)]
pub const BINARY_NAME: &str = "aviwatch.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "aviwatch";

/// Helper to get a testdata file path.
pub fn get_testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.parent()
		.unwrap()
		.join("testdata")
		.join(filename)
}

/// Helper to create a Command for the aviwatch binary.
pub fn aviwatch_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}
