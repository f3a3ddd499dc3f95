// SPDX-FileCopyrightText: 2026 Augury Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Library surface of the `augury` binary, exposing the pipeline for
//! end-to-end tests.

pub mod generate;

pub use generate::run_generate;
