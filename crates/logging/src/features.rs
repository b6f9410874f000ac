// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Feature bitmask decoding

/// Mirror log lines to standard output.
pub const FEATURE_STDOUT: u8 = 1 << 0;
/// Mirror log lines to standard error.
pub const FEATURE_STDERR: u8 = 1 << 1;
/// Prefix every line with a wall-clock timestamp.
pub const FEATURE_TIMESTAMPS: u8 = 1 << 2;
/// Prefix every line with the OS id of the calling thread.
pub const FEATURE_THREAD_ID: u8 = 1 << 3;
/// Do not create or write a log file.
pub const FEATURE_NO_FILE: u8 = 1 << 4;

/// Every feature except [`FEATURE_NO_FILE`].
pub const FEATURE_ALL: u8 =
	FEATURE_STDOUT | FEATURE_STDERR | FEATURE_TIMESTAMPS | FEATURE_THREAD_ID;

/// Decoded feature set of a running logger.
///
/// Computed once from the caller bitmask during [`init`](crate::init) and
/// immutable afterwards. Unknown bits are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
	pub stdout: bool,
	pub stderr: bool,
	pub timestamps: bool,
	pub thread_id: bool,
	pub no_file: bool,
	/// Colorize level tags. Tied to [`FEATURE_NO_FILE`]: escape codes
	/// must never end up inside a log file, so colors are only enabled
	/// when console output is requested and the file sink is suppressed.
	pub ansi_colors: bool,
}

impl Features {
	/// Decode a caller bitmask by independent bit tests.
	pub fn from_bits(bits: u8) -> Self {
		let stdout = bits & FEATURE_STDOUT != 0;
		let stderr = bits & FEATURE_STDERR != 0;
		let no_file = bits & FEATURE_NO_FILE != 0;

		Self {
			stdout,
			stderr,
			timestamps: bits & FEATURE_TIMESTAMPS != 0,
			thread_id: bits & FEATURE_THREAD_ID != 0,
			no_file,
			ansi_colors: (stdout || stderr) && no_file,
		}
	}
}
