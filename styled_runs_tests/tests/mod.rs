// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `styled_runs`.
//!
//! - The `util` module contains the test attribute type, the operation script used by the
//!   property tests, and a reference model the builder is checked against.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the shared utilities only exist once.
//! - Scenario tests go into `basic.rs`, property based tests into `properties.rs`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod basic;
mod util;
