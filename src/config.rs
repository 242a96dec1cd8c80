// File: config.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::time::Duration;

use crate::error::ConfigError;
use crate::report::OutputFormat;

pub const DEFAULT_RATE: usize = 1;
pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const DEFAULT_MARKER: &str = "swagnito";

/// Run configuration. Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigParameter {
    rate: usize,
    delay: u64,
    reflect: String,
    format: OutputFormat,
    color: bool,
}

impl ConfigParameter {
    pub fn new(rate: usize, delay: u64, reflect: impl Into<String>) -> Result<Self, ConfigError> {
        let reflect = reflect.into();
        if rate == 0 {
            return Err(ConfigError::ZeroRate);
        }
        if reflect.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        Ok(Self {
            rate,
            delay,
            reflect,
            format: OutputFormat::Text,
            color: true,
        })
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Number of URLs that may sit in the queue ahead of the dispatcher.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Delay between two feed emissions, in milliseconds.
    pub fn delay(&self) -> u64 {
        self.delay
    }

    pub fn delay_duration(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    pub fn reflect(&self) -> &str {
        &self.reflect
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn color(&self) -> bool {
        self.color
    }
}

impl Default for ConfigParameter {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            delay: DEFAULT_DELAY_MS,
            reflect: DEFAULT_MARKER.to_string(),
            format: OutputFormat::Text,
            color: true,
        }
    }
}
