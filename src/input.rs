//! Key-press events and the per-frame input queue

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc::{channel, error::TryRecvError, Receiver, Sender};
use tracing::debug;

use crate::models::Color;
use crate::utils::clamp;

const INPUT_QUEUE_DEPTH: usize = 32;

/// Physical key position on the device's key matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Per-event scratch space, scoped to the event's lifetime
///
/// Effects stash resolved colors here so an event processed more than once
/// within a frame is not recomputed.
pub type EventData = HashMap<&'static str, Color>;

/// A key press as reported by the host's input source
#[derive(Debug, Clone)]
pub struct KeyPress {
    pub keycode: String,
    pub coords: Vec<Coordinate>,
    pub timestamp: Instant,
}

impl KeyPress {
    pub fn new(keycode: impl Into<String>, coords: Vec<Coordinate>) -> Self {
        Self {
            keycode: keycode.into(),
            coords,
            timestamp: Instant::now(),
        }
    }
}

/// A key event retained by the queue until its deadline passes
#[derive(Debug, Clone)]
pub struct KeyInputEvent {
    pub keycode: String,
    pub timestamp: Instant,
    pub expires: Instant,
    pub coords: Vec<Coordinate>,
    pub data: EventData,
}

impl KeyInputEvent {
    pub fn time_remaining(&self, now: Instant) -> Duration {
        self.expires.saturating_duration_since(now)
    }

    /// Fractional progress toward full fade-out
    ///
    /// Runs from 1.0 at the press down to 0.0 once the event expires. The
    /// inverted naming is historical and relied upon by effects.
    pub fn percent_complete(&self, now: Instant) -> f32 {
        let duration = self.expires - self.timestamp;
        if duration.is_zero() {
            return 0.0;
        }

        clamp(
            self.time_remaining(now).as_secs_f32() / duration.as_secs_f32(),
            0.0,
            1.0,
        )
    }
}

#[derive(Debug, Error)]
pub enum InputQueueError {
    /// The host-side sender was dropped
    #[error("input source disconnected")]
    Disconnected,
}

/// Host-side handle for pushing key presses into an [`InputQueue`]
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<KeyPress>,
}

impl InputSender {
    pub async fn send(&self, press: KeyPress) -> Result<(), InputQueueError> {
        self.tx
            .send(press)
            .await
            .map_err(|_| InputQueueError::Disconnected)
    }
}

/// Cooperative per-frame source of key events
///
/// Events are retained for `expire_time` after the press so effects can act
/// on groups of keys over time; a new press replaces any retained event with
/// the same keycode. [`InputQueue::get_events`] suspends until at least one
/// unexpired event is available.
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<KeyPress>,
    events: Vec<KeyInputEvent>,
    expire_time: Duration,
}

impl InputQueue {
    pub fn new(expire_time: Duration) -> (InputSender, Self) {
        let (tx, rx) = channel(INPUT_QUEUE_DEPTH);

        (
            InputSender { tx },
            Self {
                rx,
                events: Vec::new(),
                expire_time,
            },
        )
    }

    /// Number of seconds events are retained for after the press
    pub fn expire_time(&self) -> Duration {
        self.expire_time
    }

    /// Change the retention window for events queued from now on
    pub fn set_expire_time(&mut self, expire_time: Duration) {
        self.expire_time = expire_time;
    }

    /// Yield until at least one unexpired event is available, then return a
    /// snapshot of all of them, oldest first
    pub async fn get_events(&mut self) -> Result<Vec<KeyInputEvent>, InputQueueError> {
        loop {
            let disconnected = self.drain_pending();
            self.expire(Instant::now());

            if !self.events.is_empty() {
                return Ok(self.events.clone());
            }

            if disconnected {
                return Err(InputQueueError::Disconnected);
            }

            match self.rx.recv().await {
                Some(press) => self.push(press),
                None => return Err(InputQueueError::Disconnected),
            }
        }
    }

    /// Snapshot of the currently retained events without suspending
    pub fn get_events_nowait(&mut self) -> Vec<KeyInputEvent> {
        self.drain_pending();
        self.expire(Instant::now());
        self.events.clone()
    }

    /// Pull everything already queued, returning true if the sender is gone
    fn drain_pending(&mut self) -> bool {
        loop {
            match self.rx.try_recv() {
                Ok(press) => self.push(press),
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => return true,
            }
        }
    }

    fn push(&mut self, press: KeyPress) {
        let event = KeyInputEvent {
            expires: press.timestamp + self.expire_time,
            keycode: press.keycode,
            timestamp: press.timestamp,
            coords: press.coords,
            data: EventData::new(),
        };

        debug!(event = ?event, "input event");

        // A repeated press restarts the key's animation
        self.events.retain(|retained| retained.keycode != event.keycode);
        self.events.push(event);
    }

    fn expire(&mut self, now: Instant) {
        self.events.retain(|event| event.expires > now);
    }
}
