// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
//! Error types surfaced by channel construction, send, receive, and close.

use std::fmt;

/// Failure constructing a new channel.
#[derive(Debug, thiserror::Error)]
pub enum NewChannelError {
    /// Requested capacity exceeds the platform's addressable slot bound.
    #[error("channel capacity {0} exceeds the platform's addressable slot bound")]
    CapacityTooLarge(usize),
}

/// Failure closing a channel.
#[derive(Debug, thiserror::Error)]
pub enum CloseError {
    /// The channel was already closed by an earlier call.
    #[error("channel already closed")]
    AlreadyClosed,
}

/// The channel is closed; the value that could not be sent is returned to
/// the caller rather than dropped silently.
pub struct SendError<T>(pub T);

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SendError").field(&"..").finish()
    }
}

impl<T> fmt::Display for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "send on closed channel")
    }
}

impl<T> std::error::Error for SendError<T> {}

/// The channel is closed and has no further buffered values to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecvError;

impl fmt::Display for RecvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recv on closed channel")
    }
}

impl std::error::Error for RecvError {}
