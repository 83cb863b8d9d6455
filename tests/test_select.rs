// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Select primitive: fairness and none-when-nothing-ready behavior.

use std::collections::HashSet;

use threadchan::{select, Channel, Selected};

#[test]
fn select_returns_none_when_nothing_ready() {
    let recv_ch: Channel<i32> = Channel::new(2).unwrap();
    let send_ch: Channel<i32> = Channel::new(1).unwrap();
    send_ch.send(99).unwrap(); // fill it so the send side isn't ready either

    let outcome = select(&[&recv_ch], &[&send_ch], vec![1]);
    assert!(matches!(outcome, Selected::None));
}

#[test]
fn select_receives_from_the_only_ready_channel() {
    let empty: Channel<i32> = Channel::new(2).unwrap();
    let ready: Channel<i32> = Channel::new(2).unwrap();
    ready.send(5).unwrap();

    let outcome = select(&[&empty, &ready], &[], vec![]);
    match outcome {
        Selected::Received(idx, value) => {
            assert_eq!(idx, 1);
            assert_eq!(value, 5);
        }
        other => panic!("expected a receive, got {other:?}"),
    }
}

#[test]
fn select_fairness_across_many_trials_hits_both_candidates() {
    let mut seen_indices: HashSet<usize> = HashSet::new();

    for _ in 0..200 {
        let c1: Channel<i32> = Channel::new(1).unwrap();
        let c2: Channel<i32> = Channel::new(1).unwrap();
        c1.send(1).unwrap();
        c2.send(2).unwrap();

        match select(&[&c1, &c2], &[], vec![]) {
            Selected::Received(idx, _) => {
                seen_indices.insert(idx);
            }
            Selected::None => panic!("both channels were ready"),
            Selected::Sent(_) => unreachable!(),
        }
    }

    assert_eq!(seen_indices, HashSet::from([0, 1]));
}
