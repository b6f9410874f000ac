// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Synchronous, line-oriented logging with a single process-wide instance.
//!
//! One global logger fans fully decorated lines out to a log file, stdout
//! and/or stderr under a single lock, so concurrent log calls never
//! interleave. Behavior is selected at [`init`] time through a feature
//! bitmask; [`destroy`] tears the instance down and a later [`init`] may
//! start over.
//!
//! ```no_run
//! use reifydb_logging::{destroy, init, log_fatal, log_info, FEATURE_ALL};
//!
//! init(None, FEATURE_ALL).unwrap();
//! log_info!("listening on {}", 8042);
//! log_fatal!("unrecoverable: {}", "disk gone"); // line carries a stack trace
//! destroy();
//! ```

mod buffer;
mod features;
mod filename;
mod format;
mod logger;
mod macros;
mod record;
mod trace;

pub use features::{
	FEATURE_ALL, FEATURE_NO_FILE, FEATURE_STDERR, FEATURE_STDOUT, FEATURE_THREAD_ID,
	FEATURE_TIMESTAMPS, Features,
};
pub use logger::{InitError, destroy, init, log};
pub use record::{LogLevel, LogRecord};
