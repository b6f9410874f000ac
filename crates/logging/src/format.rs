// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Log line formatting

use std::fmt::Write;

use chrono::Local;
use colored::Colorize;

use crate::{
	buffer::LineBuffer,
	features::Features,
	record::{LogLevel, LogRecord},
	trace,
};

/// Render one record into a single self-contained text line.
///
/// Composition order: level tag, optional timestamp, optional thread id,
/// source location, message, and for fatal records the stack trace. Sinks
/// write the result verbatim; formatting itself has no failure mode, an
/// oversized record is silently truncated by the buffer.
pub(crate) fn format_record(
	record: &LogRecord,
	features: &Features,
	buf: &mut LineBuffer,
) {
	push_level_tag(record.level, features.ansi_colors, buf);

	if features.timestamps {
		let _ = write!(buf, "[{}]", Local::now().format("%H:%M:%S%.6f"));
	}

	if features.thread_id {
		let _ = write!(buf, "[TID: {}]", record.thread_id);
	}

	let _ = write!(buf, "{}:{} {}: ", record.file, record.line, record.module);
	buf.push_str(&record.message);

	if record.level == LogLevel::Fatal {
		trace::capture(buf);
	}
}

fn push_level_tag(level: LogLevel, ansi_colors: bool, buf: &mut LineBuffer) {
	// DEBUG is never colorized
	if !ansi_colors || level == LogLevel::Debug {
		let _ = write!(buf, "[{}]", level.as_str());
		return;
	}

	let tag = match level {
		LogLevel::Warning => level.as_str().yellow(),
		LogLevel::Error | LogLevel::Critical | LogLevel::Fatal => {
			level.as_str().red()
		}
		_ => level.as_str().green(),
	};
	let _ = write!(buf, "[{}]", tag);
}
