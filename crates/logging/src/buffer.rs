// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Bounded append-only line buffer

use std::fmt;

/// Hard per-message cap. One fully decorated line, stack trace included,
/// never exceeds this.
pub(crate) const LINE_BUFFER_CAP: usize = 1024 * 1024;

/// Append-only text buffer with a hard capacity.
///
/// Appends past the capacity silently truncate instead of growing; a message
/// that does not fit is cut short rather than failing the log call. The
/// buffer grows on demand, the capacity is an upper bound, not a
/// preallocation.
pub(crate) struct LineBuffer {
	buf: String,
	cap: usize,
}

impl LineBuffer {
	pub fn new() -> Self {
		Self::with_capacity(LINE_BUFFER_CAP)
	}

	pub fn with_capacity(cap: usize) -> Self {
		Self {
			buf: String::new(),
			cap,
		}
	}

	/// Append as much of `s` as still fits, cutting on a char boundary.
	pub fn push_str(&mut self, s: &str) {
		let remaining = self.cap - self.buf.len();
		if s.len() <= remaining {
			self.buf.push_str(s);
			return;
		}

		let mut end = remaining;
		while end > 0 && !s.is_char_boundary(end) {
			end -= 1;
		}
		self.buf.push_str(&s[..end]);
	}

	pub fn as_str(&self) -> &str {
		&self.buf
	}
}

impl fmt::Write for LineBuffer {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.push_str(s);
		Ok(())
	}
}
