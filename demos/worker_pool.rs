// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025-2026 natyamatsya contributors
//
// A small worker pool fed through a single buffered channel: N workers pull
// jobs until the channel is closed and drained.
//
// Usage:
//   worker_pool [job_count] [worker_count]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use threadchan::Channel;

fn main() {
    let mut args = std::env::args().skip(1);
    let job_count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(20);
    let worker_count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);

    let jobs: Channel<usize> = Channel::new(8).unwrap();
    let completed = Arc::new(AtomicUsize::new(0));

    let mut workers = Vec::new();
    for id in 0..worker_count {
        let jobs = jobs.clone();
        let completed = Arc::clone(&completed);
        workers.push(thread::spawn(move || loop {
            match jobs.recv() {
                Ok(job) => {
                    println!("worker {id}: processing job {job}");
                    completed.fetch_add(1, Ordering::SeqCst);
                }
                Err(_) => break,
            }
        }));
    }

    for job in 0..job_count {
        jobs.send(job).unwrap();
    }
    jobs.close().unwrap();

    for w in workers {
        w.join().unwrap();
    }

    println!(
        "completed {} of {job_count} jobs",
        completed.load(Ordering::SeqCst)
    );
}
