// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for rfg.

use std::time::{SystemTime, UNIX_EPOCH};

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Convert a byte count to a human-readable string, dividing by 1024 until
/// the scaled value drops below the next unit.
/// e.g. 1024 becomes "1 KB" and 1500 becomes "1.46 KB".
pub fn format_byte_size(len: u64) -> String {
    let mut size = len as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if size.fract() == 0.0 {
        format!("{} {}", size as u64, UNITS[unit])
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

/// Seconds since the Unix epoch, used as the generation seed when the user
/// does not pin one.
pub fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
