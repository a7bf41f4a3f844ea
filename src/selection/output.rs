// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::SelectionResult;
use std::io::Write;
use tracing::debug;

/// Write `nodeName,nodeIP` without a trailing newline.
///
/// Write errors (e.g. the reading end of a pipe went away) are logged at debug
/// and otherwise ignored, the tool still exits 0.
pub fn write_selection<W: Write>(mut out: W, result: &SelectionResult) {
    if let Err(e) = write!(out, "{}", result).and_then(|_| out.flush()) {
        debug!("Failed to write selection {}: {}", result, e);
    }
}
