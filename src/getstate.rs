/*
Copyright 2022 Volker Schwaberow <volker@schwaberow.de>
Permission is hereby granted, free of charge, to any person obtaining a
copy of this software and associated documentation files (the
"Software"), to deal in the Software without restriction, including without
limitation the rights to use, copy, modify, merge, publish, distribute,
sublicense, and/or sell copies of the Software, and to permit persons to whom the
Software is furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be
included in all copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS
OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR
OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE,
ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
DEALINGS IN THE SOFTWARE.
Author(s): Volker Schwaberow
*/

use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome counters shared by every probe of a run.
#[derive(Debug, Default)]
pub struct GetState {
    reflected: AtomicUsize,
    clean: AtomicUsize,
    failed: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateSnapshot {
    pub reflected: usize,
    pub clean: usize,
    pub failed: usize,
}

impl StateSnapshot {
    pub fn total(&self) -> usize {
        self.reflected + self.clean + self.failed
    }
}

impl GetState {
    pub fn new() -> GetState {
        GetState::default()
    }

    pub fn add_reflected(&self) {
        self.reflected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_clean(&self) {
        self.clean.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reflected(&self) -> usize {
        self.reflected.load(Ordering::Relaxed)
    }

    pub fn clean(&self) -> usize {
        self.clean.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            reflected: self.reflected(),
            clean: self.clean(),
            failed: self.failed(),
        }
    }
}
