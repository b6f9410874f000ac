// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Default log file naming

use chrono::Local;

const FILE_NAME_MAX: usize = 256;

/// Derive a log file name from the local wall clock, of the form
/// `log_<YYYYMMDD>_<HHMMSS>.txt`.
///
/// Only consulted when no explicit file handle was supplied and the file
/// sink is not suppressed.
pub(crate) fn default_file_name() -> String {
	let mut name = Local::now().format("log_%Y%m%d_%H%M%S.txt").to_string();
	name.truncate(FILE_NAME_MAX);
	name
}
