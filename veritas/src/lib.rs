// Copyright 2026 The Veritas Project
// SPDX-License-Identifier: Apache-2.0

pub mod config;
pub mod engine;
pub mod history;
pub mod remote;
pub mod request;
pub mod server;
pub mod signal;
pub mod verdict;
