// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Typed, blocking, thread-safe CSP-style channels: buffered (FIFO) and
// unbuffered (rendezvous) variants, plus a non-blocking multi-way select.

mod channel;
mod error;
mod ring;
mod select;

pub use channel::Channel;
pub use error::{CloseError, NewChannelError, RecvError, SendError};
pub use select::{select, Selected};
