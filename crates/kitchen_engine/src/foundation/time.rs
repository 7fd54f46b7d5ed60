//! Time management utilities
//!
//! Everything in the engine reads time through [`Clock`] in whole
//! milliseconds. Animators sample it directly instead of accumulating frame
//! deltas, so a paused host resumes with the correct animation phase.

use std::cell::Cell;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::Instant;

/// Milliseconds on the engine clock
pub type Millis = u64;

/// Monotonic time source
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> Millis;

    /// Current time in seconds, for phase-driven animation
    fn wall_seconds(&self) -> f64 {
        self.now_ms() as f64 / 1000.0
    }
}

/// Clock backed by [`Instant`], counting from its creation
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock starting at zero now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> Millis {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock for headless runs and tests
///
/// Clones share the same underlying time, so a test can keep a handle after
/// giving one to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    /// Create a clock at the given time
    pub fn starting_at(now: Millis) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    /// Move time forward
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get() + ms);
    }

    /// Jump to an absolute time
    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

/// Frame timer, fed from a [`Clock`] once per tick
#[derive(Debug, Default)]
pub struct Timer {
    last_frame: Option<Millis>,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the timer (should be called once per frame)
    ///
    /// The first call yields a zero delta.
    pub fn update(&mut self, now: Millis) -> f32 {
        let elapsed = self
            .last_frame
            .map_or(0, |last| now.saturating_sub(last));
        self.delta_time = elapsed as f32 / 1000.0;
        self.total_time += self.delta_time;
        self.last_frame = Some(now);
        self.frame_count += 1;
        self.delta_time
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since the first update
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

struct Scheduled<T> {
    deadline: Millis,
    seq: u64,
    payload: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.deadline, self.seq).cmp(&(other.deadline, other.seq))
    }
}

/// Fire-and-forget one-shot timers
///
/// Timers scheduled for the same deadline fire in scheduling order. There is
/// no cancel path.
pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<Scheduled<T>>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` to fire once `deadline` is reached
    pub fn schedule(&mut self, deadline: Millis, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled {
            deadline,
            seq,
            payload,
        }));
    }

    /// Remove and return every payload whose deadline is `<= now`
    pub fn drain_due(&mut self, now: Millis) -> Vec<T> {
        let mut fired = Vec::new();
        while self
            .heap
            .peek()
            .is_some_and(|Reverse(next)| next.deadline <= now)
        {
            if let Some(Reverse(entry)) = self.heap.pop() {
                fired.push(entry.payload);
            }
        }
        fired
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Millis> {
        self.heap.peek().map(|Reverse(next)| next.deadline)
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
