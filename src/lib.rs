// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Random File Generator: create a file of a requested size filled with
//! pseudo-random bytes.

pub mod cli;
pub mod generator;
pub mod utils;
