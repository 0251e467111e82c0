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

//! Background threads feeding a front-end's event loop.
//!
//! Both front-ends run the same pair of threads: one translates terminal key
//! presses into application events, the other sends a periodic tick which is
//! effectively the minimum "frame rate" for rendering.

use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread,
    time::Duration,
};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub const TICK_RATE: Duration = Duration::from_millis(250);

const POLL_RATE: Duration = Duration::from_millis(100);

/// Lets the event loop stop the key reader while something else owns the
/// terminal, such as a child process running in the foreground.
#[derive(Clone, Default)]
pub struct InputGate {
    paused: Arc<AtomicBool>,
}

impl InputGate {
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }
}

/// Spawns a thread to translate raw key presses into application events.
///
/// The thread exits once the receiving side of `tx` is gone.
pub fn spawn_key_reader<E, F>(tx: Sender<E>, gate: InputGate, to_event: F)
where
    E: Send + 'static,
    F: Fn(KeyEvent) -> E + Send + 'static,
{
    thread::spawn(move || {
        read_keys(
            &tx,
            &gate,
            to_event,
            // Poll rather than block, so a pause takes effect promptly
            || event::poll(POLL_RATE).unwrap_or(false),
            event::read,
        );
    });
}

fn read_keys<E, F>(
    tx: &Sender<E>,
    gate: &InputGate,
    to_event: F,
    mut poll: impl FnMut() -> bool,
    mut read: impl FnMut() -> io::Result<Event>,
) where
    F: Fn(KeyEvent) -> E,
{
    loop {
        if gate.is_paused() {
            thread::sleep(POLL_RATE);
            continue;
        }

        if !poll() {
            continue;
        }

        // The gate may have closed while polling, and the key then belongs to
        // whoever owns the terminal now
        if gate.is_paused() {
            continue;
        }

        if let Ok(Event::Key(key)) = read() {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if tx.send(to_event(key)).is_err() {
                break;
            }
        }
    }
}

/// Spawns a thread that sends `tick()` every [`TICK_RATE`].
pub fn spawn_ticker<E, F>(tx: Sender<E>, tick: F)
where
    E: Send + 'static,
    F: Fn() -> E + Send + 'static,
{
    thread::spawn(move || {
        while tx.send(tick()).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::AtomicUsize,
        mpsc::{self, RecvTimeoutError},
    };

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn gate_pauses_and_resumes() {
        let gate = InputGate::default();
        let shared = gate.clone();

        gate.pause();
        assert!(shared.is_paused());

        shared.resume();
        assert!(!gate.is_paused());
    }

    #[test]
    fn ticker_sends_until_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        spawn_ticker(tx, || 1u8);

        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(1));
        drop(rx);
    }

    #[test]
    fn key_is_left_unread_when_paused_during_poll() {
        let (tx, rx) = mpsc::channel();
        let (paused_tx, paused_rx) = mpsc::channel();
        let gate = InputGate::default();
        let reads = Arc::new(AtomicUsize::new(0));

        let reader_gate = gate.clone();
        let reader_reads = reads.clone();
        thread::spawn(move || {
            let mut polls = 0;
            read_keys(
                &tx,
                &reader_gate,
                |key| key.code,
                || {
                    polls += 1;
                    if polls == 1 {
                        // A child takes the terminal while the poll is pending
                        reader_gate.pause();
                        paused_tx.send(()).ok();
                    }
                    true
                },
                || {
                    reader_reads.fetch_add(1, Ordering::SeqCst);
                    Ok(Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)))
                },
            );
        });

        paused_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(rx.recv_timeout(POLL_RATE * 3), Err(RecvTimeoutError::Timeout));
        assert_eq!(reads.load(Ordering::SeqCst), 0);

        gate.resume();
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(KeyCode::Char('a')));
        assert!(reads.load(Ordering::SeqCst) >= 1);
    }
}
