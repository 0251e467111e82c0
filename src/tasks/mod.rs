// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Background task processing.
//!
//! This module offloads anything that may block, such as running an external
//! tool or an HTTP lookup, from the UI thread. A [`TaskQueue`] is a bounded
//! queue served by a fixed set of worker threads; a task is submitted once and
//! its handler reports completion by posting an event back to the UI.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are better suited
//! to events.

use std::{
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, SyncSender, TrySendError},
    },
    thread,
};

use tracing::{debug, warn};

use crate::error::{Result, SongError};

/// Submission side of a pool of task workers.
pub struct TaskQueue<T> {
    task_tx: SyncSender<T>,
}

impl<T: Send + 'static> TaskQueue<T> {
    /// Spawns `workers` threads that each take tasks from a shared queue
    /// holding at most `capacity` pending tasks.
    ///
    /// # Arguments
    ///
    /// * `workers` - Number of worker threads, at least one is started.
    /// * `capacity` - Number of tasks that may wait for a free worker.
    /// * `handler` - Runs one task to completion on a worker thread.
    pub fn spawn<F>(workers: usize, capacity: usize, handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let (task_tx, task_rx) = mpsc::sync_channel(capacity);
        let task_rx = Arc::new(Mutex::new(task_rx));
        let handler = Arc::new(handler);

        for id in 0..workers.max(1) {
            let task_rx = Arc::clone(&task_rx);
            let handler = Arc::clone(&handler);

            thread::spawn(move || worker_loop(id, &task_rx, handler.as_ref()));
        }

        Self { task_tx }
    }

    /// Queues a task without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`SongError::TaskQueueFull`] when every slot is taken, or
    /// [`SongError::TaskQueueClosed`] if the workers are gone.
    pub fn submit(&self, task: T) -> Result<()> {
        self.task_tx.try_send(task).map_err(|e| match e {
            TrySendError::Full(_) => {
                warn!("Task rejected, queue is full");
                SongError::TaskQueueFull
            }
            TrySendError::Disconnected(_) => SongError::TaskQueueClosed,
        })
    }
}

fn worker_loop<T>(id: usize, task_rx: &Mutex<Receiver<T>>, handler: &(dyn Fn(T) + Send + Sync)) {
    debug!("Task worker {} started", id);

    loop {
        // Hold the lock only while waiting, never while running a task
        let task = match task_rx.lock() {
            Ok(rx) => rx.recv(),
            Err(_) => break,
        };

        match task {
            Ok(task) => handler(task),
            Err(_) => break,
        }
    }

    debug!("Task worker {} stopped", id);
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Barrier, mpsc},
        time::Duration,
    };

    use super::*;

    #[test]
    fn tasks_complete_and_report_back() {
        let (done_tx, done_rx) = mpsc::channel();
        let queue = TaskQueue::spawn(2, 8, move |n: u32| {
            done_tx.send(n * 2).unwrap();
        });

        for n in 1..=4 {
            queue.submit(n).unwrap();
        }

        let mut results: Vec<u32> = (0..4)
            .map(|_| done_rx.recv_timeout(Duration::from_secs(5)).unwrap())
            .collect();
        results.sort();

        assert_eq!(results, vec![2, 4, 6, 8]);
    }

    #[test]
    fn full_queue_rejects_without_blocking() {
        let gate = Arc::new(Barrier::new(2));
        let (started_tx, started_rx) = mpsc::channel();

        let worker_gate = Arc::clone(&gate);
        let queue = TaskQueue::spawn(1, 1, move |_: ()| {
            started_tx.send(()).unwrap();
            worker_gate.wait();
        });

        // First task occupies the only worker, the second fills the queue
        queue.submit(()).unwrap();
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        queue.submit(()).unwrap();

        assert!(matches!(queue.submit(()), Err(SongError::TaskQueueFull)));

        gate.wait();
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        gate.wait();
    }
}
