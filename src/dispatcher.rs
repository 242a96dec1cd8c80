// File: dispatcher.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::{debug, error};
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;

use crate::barrier::CompletionBarrier;
use crate::getstate::GetState;
use crate::prober::{ProbeOutcome, Prober};
use crate::report::{Reflection, ReportSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSummary {
    pub dispatched: usize,
    pub completed: usize,
}

/// Turns queued URLs into concurrently running probes.
pub struct Dispatcher {
    prober: Arc<Prober>,
    sink: Arc<dyn ReportSink>,
    state: Arc<GetState>,
    barrier: CompletionBarrier,
}

impl Dispatcher {
    pub fn new(prober: Arc<Prober>, sink: Arc<dyn ReportSink>, state: Arc<GetState>) -> Self {
        Dispatcher {
            prober,
            sink,
            state,
            barrier: CompletionBarrier::new(),
        }
    }

    pub fn barrier(&self) -> &CompletionBarrier {
        &self.barrier
    }

    /// Receives until the queue is closed, then drains. Returns only after
    /// every spawned probe has finished.
    pub async fn run(&self, mut queue: Receiver<String>) -> DispatchSummary {
        while let Some(raw) = queue.recv().await {
            let guard = self.barrier.enter();
            let prober = Arc::clone(&self.prober);
            let sink = Arc::clone(&self.sink);
            let state = Arc::clone(&self.state);

            tokio::spawn(async move {
                let _guard = guard;
                match prober.probe(&raw).await {
                    Ok(ProbeOutcome::Reflected(url)) => {
                        state.add_reflected();
                        sink.report(&Reflection::new(&url, prober.marker()));
                    }
                    Ok(ProbeOutcome::Clean(url)) => {
                        state.add_clean();
                        debug!("No reflection in {}", url);
                    }
                    Err(e) => {
                        state.add_failure();
                        error!("{}", e);
                    }
                }
            });
        }

        debug!(
            "Queue closed, waiting for {} in-flight probe(s)",
            self.barrier.in_flight()
        );
        self.barrier.drain().await;

        DispatchSummary {
            dispatched: self.barrier.entered(),
            completed: self.barrier.completed(),
        }
    }
}
