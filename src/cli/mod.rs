// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Console output for the heritage-eval binary

pub mod reporter;

pub use reporter::Reporter;
