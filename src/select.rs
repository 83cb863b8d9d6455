// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
//! Non-blocking multi-way select over a homogeneous set of channels.

use rand::Rng;

use crate::channel::Channel;

/// Outcome of a [`select`] call.
#[derive(Debug)]
pub enum Selected<T> {
    /// A receive completed; carries the combined-sequence index and the
    /// received value.
    Received(usize, T),
    /// A send completed; carries the combined-sequence index.
    Sent(usize),
    /// No candidate was ready, or the chosen candidate failed between probe
    /// and commit (the documented probe/commit race).
    None,
}

/// Probes `recv_channels` then `send_channels` for readiness, picks one
/// ready candidate uniformly at random, and commits to it.
///
/// `send_messages` must have exactly one entry per channel in
/// `send_channels`, in the same order. The returned index is the
/// candidate's position in the combined sequence: receives first, then
/// sends.
///
/// Non-blocking only up to the point of commit: between the probe and the
/// commit another thread may consume the same window of opportunity, in
/// which case the committed operation blocks just as a direct call to
/// `send`/`recv` would. This mirrors the upstream primitive's own
/// documented "TODO: add support for blocking selects" behavior and is not
/// fixed here.
pub fn select<T>(
    recv_channels: &[&Channel<T>],
    send_channels: &[&Channel<T>],
    send_messages: Vec<T>,
) -> Selected<T> {
    assert_eq!(
        send_channels.len(),
        send_messages.len(),
        "one message is required per send channel"
    );

    let recv_count = recv_channels.len();
    let mut ready = Vec::with_capacity(recv_count + send_channels.len());

    for (i, ch) in recv_channels.iter().enumerate() {
        if ch.recv_ready() {
            ready.push(i);
        }
    }
    for (i, ch) in send_channels.iter().enumerate() {
        if ch.send_ready() {
            ready.push(recv_count + i);
        }
    }

    if ready.is_empty() {
        return Selected::None;
    }

    let chosen = ready[rand::thread_rng().gen_range(0..ready.len())];

    if chosen < recv_count {
        match recv_channels[chosen].recv() {
            Ok(value) => Selected::Received(chosen, value),
            Err(_) => Selected::None,
        }
    } else {
        let send_idx = chosen - recv_count;
        let mut messages: Vec<Option<T>> = send_messages.into_iter().map(Some).collect();
        let message = messages[send_idx].take().expect("message consumed twice");
        match send_channels[send_idx].send(message) {
            Ok(()) => Selected::Sent(chosen),
            Err(_) => Selected::None,
        }
    }
}
