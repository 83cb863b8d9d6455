// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
//! The channel engine: buffered and unbuffered (rendezvous) send/receive,
//! the close protocol, and the probes `select` uses to check readiness.

use std::sync::{Arc, Condvar, Mutex};

use crate::error::{CloseError, NewChannelError, RecvError, SendError};
use crate::ring::RingBuffer;

struct State<T> {
    queue: Option<RingBuffer<T>>,
    rendezvous: Option<T>,
    closed: bool,
    readers_waiting: usize,
    writers_waiting: usize,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    reader_cond: Condvar,
    writer_cond: Condvar,
    capacity: usize,
    write_serialize: Mutex<()>,
    read_serialize: Mutex<()>,
}

/// A typed, blocking, thread-safe channel.
///
/// Cloning shares the same underlying channel — the last clone to drop
/// releases its locks and buffer. `capacity == 0` gives an unbuffered
/// (rendezvous) channel; `capacity > 0` gives a buffered FIFO channel.
pub struct Channel<T> {
    inner: Arc<Shared<T>>,
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Channel {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Channel<T> {
    pub fn new(capacity: usize) -> Result<Self, NewChannelError> {
        let queue = if capacity > 0 {
            Some(RingBuffer::new(capacity)?)
        } else {
            None
        };

        let state = State {
            queue,
            rendezvous: None,
            closed: false,
            readers_waiting: 0,
            writers_waiting: 0,
        };

        Ok(Channel {
            inner: Arc::new(Shared {
                state: Mutex::new(state),
                reader_cond: Condvar::new(),
                writer_cond: Condvar::new(),
                capacity,
                write_serialize: Mutex::new(()),
                read_serialize: Mutex::new(()),
            }),
        })
    }

    pub fn is_closed(&self) -> bool {
        self.inner.state.lock().unwrap().closed
    }

    pub fn close(&self) -> Result<(), CloseError> {
        let mut state = self.inner.state.lock().unwrap();
        if state.closed {
            return Err(CloseError::AlreadyClosed);
        }
        state.closed = true;
        self.inner.writer_cond.notify_all();
        self.inner.reader_cond.notify_all();
        Ok(())
    }

    pub fn len(&self) -> usize {
        match &self.inner.state.lock().unwrap().queue {
            Some(q) => q.len(),
            None => 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    /// Releases this handle. A no-op beyond the ordinary `Drop` of `self` —
    /// kept for API parity with channel implementations that require an
    /// explicit lifecycle call.
    pub fn dispose(self) {}

    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        // Outer fast-path check, mirroring the engine's own closed check
        // inside the lock — rejects an obviously-closed send before doing
        // any of the serialization-lock dance below.
        if self.is_closed() {
            return Err(SendError(value));
        }
        if self.inner.capacity == 0 {
            self.send_unbuffered(value)
        } else {
            self.send_buffered(value)
        }
    }

    pub fn recv(&self) -> Result<T, RecvError> {
        if self.inner.capacity == 0 {
            self.recv_unbuffered()
        } else {
            self.recv_buffered()
        }
    }

    fn send_buffered(&self, value: T) -> Result<(), SendError<T>> {
        let mut state = self.inner.state.lock().unwrap();
        loop {
            let full = state.queue.as_ref().map(|q| q.is_full()).unwrap_or(true);
            if !full {
                break;
            }
            state.writers_waiting += 1;
            state = self.inner.writer_cond.wait(state).unwrap();
            state.writers_waiting -= 1;
        }
        // Re-check after the wait, not inside the loop predicate: a full
        // channel that closes while this sender is parked must still fail
        // broken-pipe only once capacity actually frees up, matching the
        // source engine's literal send sequence.
        if state.closed {
            return Err(SendError(value));
        }
        state.queue.as_mut().unwrap().push(value);
        if state.readers_waiting > 0 {
            self.inner.reader_cond.notify_one();
        }
        Ok(())
    }

    fn recv_buffered(&self) -> Result<T, RecvError> {
        let mut state = self.inner.state.lock().unwrap();
        loop {
            if state.queue.as_ref().map(|q| !q.is_empty()).unwrap_or(false) {
                break;
            }
            if state.closed {
                return Err(RecvError);
            }
            state.readers_waiting += 1;
            state = self.inner.reader_cond.wait(state).unwrap();
            state.readers_waiting -= 1;
        }
        let value = state.queue.as_mut().unwrap().pop().unwrap();
        if state.writers_waiting > 0 {
            self.inner.writer_cond.notify_one();
        }
        Ok(value)
    }

    fn send_unbuffered(&self, value: T) -> Result<(), SendError<T>> {
        let _write_guard = self.inner.write_serialize.lock().unwrap();
        let mut state = self.inner.state.lock().unwrap();
        if state.closed {
            return Err(SendError(value));
        }
        state.rendezvous = Some(value);
        state.writers_waiting += 1;
        if state.readers_waiting > 0 {
            self.inner.reader_cond.notify_one();
        }
        loop {
            state = self.inner.writer_cond.wait(state).unwrap();
            if state.writers_waiting == 0 {
                // A receiver claimed the posted value.
                return Ok(());
            }
            if state.closed {
                // Hardening over the source: a sender parked here when the
                // channel closes must not wait forever for a receiver that
                // will never come. Retract the posted value and fail.
                let retracted = state.rendezvous.take().expect("posted value missing");
                state.writers_waiting -= 1;
                self.inner.reader_cond.notify_one();
                return Err(SendError(retracted));
            }
        }
    }

    fn recv_unbuffered(&self) -> Result<T, RecvError> {
        let _read_guard = self.inner.read_serialize.lock().unwrap();
        let mut state = self.inner.state.lock().unwrap();
        loop {
            // Documented divergence from the source's literal wake order:
            // service a pending sender before observing close, matching
            // the buffered channel's drain-before-close semantics.
            if state.writers_waiting > 0 {
                break;
            }
            if state.closed {
                return Err(RecvError);
            }
            state.readers_waiting += 1;
            state = self.inner.reader_cond.wait(state).unwrap();
            state.readers_waiting -= 1;
        }
        let value = state.rendezvous.take().expect("rendezvous value missing");
        state.writers_waiting -= 1;
        self.inner.writer_cond.notify_one();
        Ok(value)
    }

    pub(crate) fn recv_ready(&self) -> bool {
        let state = self.inner.state.lock().unwrap();
        if self.inner.capacity == 0 {
            state.writers_waiting > 0
        } else {
            state.queue.as_ref().map(|q| !q.is_empty()).unwrap_or(false)
        }
    }

    pub(crate) fn send_ready(&self) -> bool {
        let state = self.inner.state.lock().unwrap();
        if self.inner.capacity == 0 {
            state.readers_waiting > 0
        } else {
            state.queue.as_ref().map(|q| !q.is_full()).unwrap_or(true)
        }
    }
}
