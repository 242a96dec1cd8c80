// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::new_without_default)]
#![allow(clippy::bool_assert_comparison)]

pub mod barrier;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod feeder;
pub mod getstate;
pub mod mutate;
pub mod pipeline;
pub mod prober;
pub mod report;
