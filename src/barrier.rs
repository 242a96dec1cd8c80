// File: barrier.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    in_flight: AtomicUsize,
    entered: AtomicUsize,
    completed: AtomicUsize,
    notify: Notify,
}

/// Counting barrier for in-flight probes.
///
/// Every unit of work holds a [`CompletionGuard`]; dropping the guard is the
/// completion signal, so it fires on early returns and on panics alike.
#[derive(Debug, Clone, Default)]
pub struct CompletionBarrier {
    inner: Arc<Inner>,
}

impl CompletionBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one unit of work. Call before spawning it.
    pub fn enter(&self) -> CompletionGuard {
        self.inner.in_flight.fetch_add(1, Ordering::AcqRel);
        self.inner.entered.fetch_add(1, Ordering::Relaxed);
        CompletionGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    pub fn entered(&self) -> usize {
        self.inner.entered.load(Ordering::Relaxed)
    }

    pub fn completed(&self) -> usize {
        self.inner.completed.load(Ordering::Relaxed)
    }

    /// Waits until no guard is outstanding.
    pub async fn drain(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register interest before reading the counter so a release
            // between the load and the await is not missed.
            notified.as_mut().enable();
            if self.in_flight() == 0 {
                return;
            }
            notified.await;
        }
    }
}

#[derive(Debug)]
pub struct CompletionGuard {
    inner: Arc<Inner>,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.inner.completed.fetch_add(1, Ordering::Relaxed);
        if self.inner.in_flight.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.inner.notify.notify_waiters();
        }
    }
}
