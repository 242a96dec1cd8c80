// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::builder::TypedValueParser;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::{ConfigParameter, DEFAULT_DELAY_MS, DEFAULT_MARKER, DEFAULT_RATE};
use crate::error::ConfigError;
use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(help = "File with one URL per line, or '-' for stdin")]
    pub file_path: PathBuf,

    #[arg(
        short = 'r',
        long = "rate",
        default_value_t = DEFAULT_RATE,
        value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize),
        help = "Number of URLs buffered ahead of dispatch"
    )]
    pub rate: usize,

    #[arg(
        short = 'd',
        long = "delay",
        default_value_t = DEFAULT_DELAY_MS,
        help = "Time interval between two requests (in milliseconds)"
    )]
    pub delay: u64,

    #[arg(
        short = 'm',
        long = "reflect",
        default_value = DEFAULT_MARKER,
        help = "Reflection parameter value"
    )]
    pub reflect: String,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "text",
        help = "Report format: text or json"
    )]
    pub format: OutputFormat,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,
}

impl Cli {
    pub fn to_config(&self) -> Result<ConfigParameter, ConfigError> {
        Ok(ConfigParameter::new(self.rate, self.delay, self.reflect.clone())?
            .with_format(self.format)
            .with_color(!self.no_color))
    }

    pub fn reads_stdin(&self) -> bool {
        self.file_path.as_os_str() == "-"
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Warn)
}
