// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Mutex;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(format!("Unsupported output format: {}", other)),
        }
    }
}

/// A URL whose response echoed the marker.
#[derive(Debug, Clone, Serialize)]
pub struct Reflection {
    pub url: String,
    pub marker: String,
    pub detected_at: DateTime<Utc>,
}

impl Reflection {
    pub fn new(url: &Url, marker: &str) -> Self {
        Self {
            url: url.to_string(),
            marker: marker.to_string(),
            detected_at: Utc::now(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!("{} [reflected]", self.url.red()),
            OutputFormat::Json => serde_json::to_string(self)
                .unwrap_or_else(|_| format!("{{\"url\":\"{}\"}}", self.url)),
        }
    }
}

/// Destination for reflection reports. Called concurrently from probes.
pub trait ReportSink: Send + Sync {
    fn report(&self, reflection: &Reflection);
}

pub struct StdoutReport {
    format: OutputFormat,
}

impl StdoutReport {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ReportSink for StdoutReport {
    fn report(&self, reflection: &Reflection) {
        println!("{}", reflection.render(self.format));
    }
}

/// Keeps rendered lines in memory instead of printing them.
#[derive(Default)]
pub struct MemoryReport {
    format: OutputFormat,
    lines: Mutex<Vec<String>>,
}

impl MemoryReport {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            lines: Mutex::new(Vec::new()),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ReportSink for MemoryReport {
    fn report(&self, reflection: &Reflection) {
        let line = reflection.render(self.format);
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}
