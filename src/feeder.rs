// File: feeder.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::{debug, trace};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::Sender;

use crate::config::ConfigParameter;
use crate::error::FeedError;

/// Reads input lines and pushes them into the work queue, one per delay
/// interval.
#[derive(Debug, Clone)]
pub struct Feeder {
    delay: Duration,
}

impl Feeder {
    pub fn new(config: &ConfigParameter) -> Self {
        Feeder {
            delay: config.delay_duration(),
        }
    }

    /// Feeds every line of `source` into `queue` and returns how many were
    /// queued. The queue is closed when this returns, whatever the outcome.
    ///
    /// The delay starts once a send has completed, so time spent blocked on
    /// a full queue never shortens the gap to the next emission.
    pub async fn run<R>(&self, source: R, queue: Sender<String>) -> Result<usize, FeedError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = source.lines();
        let mut fed = 0usize;

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(source) => return Err(FeedError::Read { fed, source }),
            };
            trace!("Queueing {}", line);
            queue
                .send(line)
                .await
                .map_err(|_| FeedError::QueueClosed { fed })?;
            fed += 1;

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        debug!("Input exhausted after {} line(s), closing queue", fed);
        Ok(fed)
    }
}
