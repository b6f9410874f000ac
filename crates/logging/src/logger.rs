// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logger lifecycle and the log entry point

use std::{
	fs::{File, OpenOptions},
	io::{self, Write},
	sync::atomic::{AtomicBool, Ordering},
};

use parking_lot::Mutex;

use crate::{
	buffer::LineBuffer,
	features::Features,
	filename::default_file_name,
	format::format_record,
	record::LogRecord,
};

/// Errors returned by [`init`].
///
/// Every failure is fully recoverable: all partially acquired resources are
/// released and the lifecycle guard is reset before the error is returned,
/// so the caller may retry with different arguments.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
	#[error("logger is already running")]
	AlreadyRunning,

	#[error("failed to create log file `{name}`")]
	FileCreation {
		name: String,
		#[source]
		source: io::Error,
	},

	#[error("invalid configuration: {0}")]
	Configuration(&'static str),
}

struct Logger {
	/// Owned by the instance; closed when the instance is dropped
	file: Option<File>,
	features: Features,
}

/// Lifecycle guard. The single linearization point for "is a logger
/// running"; guarantees at most one live instance process-wide.
static RUNNING: AtomicBool = AtomicBool::new(false);

/// The instance itself. The mutex is held for the full format-and-write
/// sequence of each record, making log calls line-atomic across sinks.
/// `init` and `destroy` perform their guard transition and cell update
/// inside one critical section on this lock, so a racing `init` cannot
/// observe the guard cleared while teardown is still in flight.
static INSTANCE: Mutex<Option<Logger>> = Mutex::new(None);

/// Initialize the process-wide logger.
///
/// When `file` is `None` and [`FEATURE_NO_FILE`](crate::FEATURE_NO_FILE) is
/// unset, a file named after the current wall-clock time is created in the
/// working directory and opened for append. A supplied handle is used as-is
/// and owned by the logger from here on.
///
/// Fails with [`InitError::Configuration`] when no sink at all would
/// receive log messages.
pub fn init(file: Option<File>, features: u8) -> Result<(), InitError> {
	let mut guard = INSTANCE.lock();

	if RUNNING
		.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
		.is_err()
	{
		return Err(InitError::AlreadyRunning);
	}

	let features = Features::from_bits(features);

	let file = match file {
		Some(file) => Some(file),
		None if !features.no_file => {
			let name = default_file_name();
			match OpenOptions::new().append(true).create(true).open(&name) {
				Ok(file) => Some(file),
				Err(source) => {
					RUNNING.store(false, Ordering::Release);
					return Err(InitError::FileCreation {
						name,
						source,
					});
				}
			}
		}
		None => None,
	};

	if file.is_none() && !features.stdout && !features.stderr {
		RUNNING.store(false, Ordering::Release);
		return Err(InitError::Configuration(
			"no output sink would receive log messages",
		));
	}

	if features.ansi_colors {
		colored::control::set_override(true);
	}

	*guard = Some(Logger {
		file,
		features,
	});

	Ok(())
}

/// Tear down the running logger, closing the owned file handle.
///
/// Calling `destroy` without a running logger prints a diagnostic on the
/// error stream and changes nothing, so a double `destroy` is safe and
/// never releases a resource twice. The guard transition and the teardown
/// form one critical section: an `init` racing this call either observes
/// the logger still running or finds teardown already complete.
pub fn destroy() {
	let mut guard = INSTANCE.lock();

	if RUNNING
		.compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
		.is_err()
	{
		let _ = writeln!(io::stderr(), "cannot destroy logger: not running");
		return;
	}

	colored::control::unset_override();

	// Dropping the instance closes the file handle. The guard stays
	// cleared only together with the emptied cell: both happen under the
	// instance lock, so a concurrent init cannot slot a fresh instance
	// into a teardown still in flight.
	*guard = None;
}

/// Write one record to every configured sink.
///
/// Without a running logger this prints a diagnostic and returns; it is
/// never fatal to the calling program. The instance lock is held from
/// formatting through the last sink write, so concurrent calls never
/// interleave partial lines. Sink write failures are swallowed: logging
/// must not alter caller control flow.
pub fn log(record: LogRecord) {
	#[cfg(test)]
	let record = match mock::intercept(record) {
		Some(record) => record,
		None => return,
	};

	if !RUNNING.load(Ordering::Acquire) {
		let _ = writeln!(io::stderr(), "logger is not running, dropping message");
		return;
	}

	let mut guard = INSTANCE.lock();
	let Some(logger) = guard.as_mut() else {
		// Torn down between the running check and the lock
		let _ = writeln!(io::stderr(), "logger is not running, dropping message");
		return;
	};

	let mut buf = LineBuffer::new();
	format_record(&record, &logger.features, &mut buf);
	let line = buf.as_str();

	if let Some(file) = logger.file.as_mut() {
		let _ = writeln!(file, "{line}");
	}
	if logger.features.stdout {
		let _ = writeln!(io::stdout().lock(), "{line}");
	}
	if logger.features.stderr {
		let _ = writeln!(io::stderr().lock(), "{line}");
	}
}
