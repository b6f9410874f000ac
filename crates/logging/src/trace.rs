// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Stack trace capture for fatal records

use std::backtrace::{Backtrace, BacktraceStatus};

use crate::buffer::LineBuffer;

/// Upper bound on rendered trace lines per record.
const MAX_TRACE_LINES: usize = 256;

/// Append the current call stack to `buf`, one `TRACE: ` line per rendered
/// frame line.
///
/// A capture that is unsupported or resolves to nothing contributes zero
/// bytes; an unavailable trace never fails the surrounding log call.
pub(crate) fn capture(buf: &mut LineBuffer) {
	let backtrace = Backtrace::force_capture();
	if backtrace.status() != BacktraceStatus::Captured {
		return;
	}

	let rendered = backtrace.to_string();
	for line in rendered.lines().take(MAX_TRACE_LINES) {
		buf.push_str("\nTRACE: ");
		buf.push_str(line.trim_start());
	}
}
