// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Log record types

use std::fmt;

/// Log severity levels, ordered by severity.
///
/// The level selects the line tag; [`LogLevel::Fatal`] additionally attaches
/// a stack trace. Levels are never used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
	Debug = 0,
	Info = 1,
	Warning = 2,
	Error = 3,
	Critical = 4,
	Fatal = 5,
}

impl LogLevel {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Debug => "DEBUG",
			LogLevel::Info => "INFO",
			LogLevel::Warning => "WARNING",
			LogLevel::Error => "ERROR",
			LogLevel::Critical => "CRITICAL",
			LogLevel::Fatal => "FATAL",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One log call's worth of data, constructed and consumed within that call.
#[derive(Debug, Clone)]
pub struct LogRecord {
	/// Log severity level
	pub level: LogLevel,
	/// Module path of the call site
	pub module: String,
	/// Already-rendered message text
	pub message: String,
	/// File where the record was generated
	pub file: String,
	/// Line number where the record was generated
	pub line: u32,
	/// OS id of the thread that generated the record
	pub thread_id: u64,
}

impl LogRecord {
	pub fn new(
		level: LogLevel,
		module: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		Self {
			level,
			module: module.into(),
			message: message.into(),
			file: String::new(),
			line: 0,
			thread_id: os_thread_id(),
		}
	}

	pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
		self.file = file.into();
		self.line = line;
		self
	}
}

#[cfg(target_os = "linux")]
fn os_thread_id() -> u64 {
	// glibc only gained a gettid() wrapper in 2.30, go through syscall
	(unsafe { libc::syscall(libc::SYS_gettid) }) as u64
}

#[cfg(all(unix, not(target_os = "linux")))]
fn os_thread_id() -> u64 {
	unsafe { libc::pthread_self() as u64 }
}

#[cfg(not(unix))]
fn os_thread_id() -> u64 {
	use std::hash::{DefaultHasher, Hash, Hasher};

	let mut hasher = DefaultHasher::new();
	std::thread::current().id().hash(&mut hasher);
	hasher.finish()
}
