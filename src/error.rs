// File: error.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rate must be at least 1")]
    ZeroRate,
    #[error("reflection marker must not be empty")]
    EmptyMarker,
}

/// Failure of a single probe. Never fatal to the run.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to send request to URL '{url}': {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body for URL '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ProbeError {
    pub fn url(&self) -> &str {
        match self {
            ProbeError::Parse { url, .. }
            | ProbeError::Request { url, .. }
            | ProbeError::Body { url, .. } => url,
        }
    }
}

/// Feeder failure. `fed` counts the lines queued before it happened.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to read the input after {fed} line(s): {source}")]
    Read {
        fed: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("work queue closed after {fed} line(s), before the input was exhausted")]
    QueueClosed { fed: usize },
}

impl FeedError {
    pub fn fed(&self) -> usize {
        match self {
            FeedError::Read { fed, .. } | FeedError::QueueClosed { fed } => *fed,
        }
    }
}
