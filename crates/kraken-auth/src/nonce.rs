//! Nonce sources
//!
//! Kraken rejects a private request whose nonce is not greater than the last
//! one it saw for the same key. The wall clock alone does not guarantee that
//! (clock adjustments, several requests inside one microsecond), so the
//! default source never hands out the same value twice.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

/// Strategy for producing request nonces
pub trait NonceSource: Send + Sync + fmt::Debug {
    /// Next nonce to place in a private request
    fn next_nonce(&self) -> u64;
}

/// Microseconds since the Unix epoch
pub fn clock_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros() as u64
}

/// Millisecond clock scaled to microseconds
///
/// Matches the nonces produced by older Kraken client libraries, which
/// multiplied a millisecond timestamp by 1000. Two calls in the same
/// millisecond return the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockNonce;

impl NonceSource for ClockNonce {
    fn next_nonce(&self) -> u64 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        millis * 1000
    }
}

/// Strictly increasing microsecond nonce
///
/// Returns the current clock in microseconds, or one more than the previous
/// value if the clock has not moved past it.
#[derive(Debug, Default)]
pub struct IncreasingNonce {
    last: AtomicU64,
}

impl IncreasingNonce {
    /// Create a new source
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    fn next_after(&self, now: u64) -> u64 {
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);

        let next = now.max(prev.saturating_add(1));
        if next != now {
            trace!(now, next, "clock behind last nonce, bumping");
        }
        next
    }
}

impl NonceSource for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        self.next_after(clock_micros())
    }
}

/// Process-wide nonce state shared by every [`ProcessNonce`]
static PROCESS_NONCE: IncreasingNonce = IncreasingNonce::new();

/// [`IncreasingNonce`] shared by the whole process
///
/// Separate clients using the same API key still get distinct, increasing
/// nonces. This is the default source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessNonce;

impl NonceSource for ProcessNonce {
    fn next_nonce(&self) -> u64 {
        PROCESS_NONCE.next_nonce()
    }
}

/// Plain counter, independent of the clock
#[derive(Debug)]
pub struct CounterNonce {
    next: AtomicU64,
}

impl CounterNonce {
    /// Start counting at `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl NonceSource for CounterNonce {
    fn next_nonce(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
