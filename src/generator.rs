// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Chunked generation of pseudo-random files.

use anyhow::{Context, Result};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{fs::File, io::Write, path::PathBuf};

/// Number of random bytes drawn and written per iteration.
pub const CHUNK_SIZE: usize = 1024;

/// A validated (path, size) pair, consumed by one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub output_path: PathBuf,
    pub size_in_bytes: u64,
}

/// Create or truncate the file at the requested path and fill it with
/// exactly `size_in_bytes` pseudo-random bytes.
///
/// The byte source is seeded from `seed` and lives only for this call, so
/// the same seed reproduces the same file.
pub fn generate_random_file(request: &GenerationRequest, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut file = File::create(&request.output_path)
        .with_context(|| format!("failed to create {}", request.output_path.display()))?;

    let mut buffer = [0u8; CHUNK_SIZE];
    let mut bytes_written = 0u64;
    while bytes_written < request.size_in_bytes {
        rng.fill(&mut buffer[..]);
        let remaining = request.size_in_bytes - bytes_written;
        let len = remaining.min(CHUNK_SIZE as u64) as usize;
        file.write_all(&buffer[..len])
            .with_context(|| format!("failed to write to {}", request.output_path.display()))?;
        bytes_written += len as u64;
    }
    debug!(
        "Wrote {} bytes to {}",
        bytes_written,
        request.output_path.display()
    );
    Ok(())
}
