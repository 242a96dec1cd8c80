// File: pipeline.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::info;
use std::sync::Arc;
use tokio::io::AsyncBufRead;
use tokio::sync::mpsc;

use crate::config::ConfigParameter;
use crate::dispatcher::Dispatcher;
use crate::error::FeedError;
use crate::feeder::Feeder;
use crate::getstate::{GetState, StateSnapshot};
use crate::prober::Prober;
use crate::report::ReportSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub fed: usize,
    pub dispatched: usize,
    pub completed: usize,
    pub outcomes: StateSnapshot,
}

/// Result of a full run. `feed_error` carries the feeder error, if any; the probes
/// that were queued before it happened have still run to completion.
#[derive(Debug)]
pub struct RunReport {
    pub summary: RunSummary,
    pub feed_error: Option<FeedError>,
}

pub struct Pipeline {
    config: ConfigParameter,
    prober: Arc<Prober>,
    sink: Arc<dyn ReportSink>,
}

impl Pipeline {
    pub fn new(config: ConfigParameter, prober: Prober, sink: Arc<dyn ReportSink>) -> Self {
        Pipeline {
            config,
            prober: Arc::new(prober),
            sink,
        }
    }

    /// Runs the feeder and dispatcher side by side until the source is
    /// exhausted and every probe has finished.
    pub async fn run<R>(&self, source: R) -> RunReport
    where
        R: AsyncBufRead + Unpin,
    {
        let (tx, rx) = mpsc::channel(self.config.rate());
        let state = Arc::new(GetState::new());
        let feeder = Feeder::new(&self.config);
        let dispatcher = Dispatcher::new(
            Arc::clone(&self.prober),
            Arc::clone(&self.sink),
            Arc::clone(&state),
        );

        info!(
            "Starting probe run: rate={} delay={}ms marker={}",
            self.config.rate(),
            self.config.delay(),
            self.config.reflect()
        );

        let (fed, dispatch) = tokio::join!(feeder.run(source, tx), dispatcher.run(rx));

        let (fed, feed_error) = match fed {
            Ok(count) => (count, None),
            Err(e) => (e.fed(), Some(e)),
        };

        let summary = RunSummary {
            fed,
            dispatched: dispatch.dispatched,
            completed: dispatch.completed,
            outcomes: state.snapshot(),
        };
        info!(
            "{} URL(s) probed: {} reflected, {} clean, {} failed",
            summary.completed,
            summary.outcomes.reflected,
            summary.outcomes.clean,
            summary.outcomes.failed
        );

        RunReport {
            summary,
            feed_error,
        }
    }
}
