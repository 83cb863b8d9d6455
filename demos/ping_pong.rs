// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// Two threads exchanging pings over an unbuffered (rendezvous) channel.
//
// Usage:
//   ping_pong [rounds]

use std::thread;

use threadchan::Channel;

fn main() {
    let rounds: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    let ping: Channel<usize> = Channel::new(0).unwrap();
    let pong: Channel<usize> = Channel::new(0).unwrap();

    let ping_recv = ping.clone();
    let pong_send = pong.clone();
    let responder = thread::spawn(move || {
        loop {
            match ping_recv.recv() {
                Ok(n) => {
                    println!("responder: got ping {n}");
                    if pong_send.send(n).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    for round in 0..rounds {
        ping.send(round).unwrap();
        let echoed = pong.recv().unwrap();
        println!("main: got pong {echoed}");
    }

    ping.close().unwrap();
    responder.join().unwrap();
}
