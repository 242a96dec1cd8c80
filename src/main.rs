// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use simple_logger::SimpleLogger;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::BufReader;

use rreflect::cli::{parse_log_level, Cli};
use rreflect::pipeline::{Pipeline, RunReport};
use rreflect::prober::Prober;
use rreflect::report::StdoutReport;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new()
        .with_level(parse_log_level(&cli.log_level))
        .init()
    {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config().context("Invalid configuration")?;
    if !config.color() {
        colored::control::set_override(false);
    }
    let prober = Prober::new(&config).context("Failed to build HTTP client")?;
    let sink = Arc::new(StdoutReport::new(config.format()));
    let pipeline = Pipeline::new(config, prober, sink);

    let report: RunReport = if cli.reads_stdin() {
        pipeline.run(BufReader::new(tokio::io::stdin())).await
    } else {
        let file = File::open(&cli.file_path).await.with_context(|| {
            format!("Failed to open the file: {}", cli.file_path.display())
        })?;
        pipeline.run(BufReader::new(file)).await
    };

    match report.feed_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
