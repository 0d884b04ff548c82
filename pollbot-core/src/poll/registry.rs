//! Pending polls awaiting their own echo.
//!
//! Reactions can only be added once the poll message exists. The dispatcher registers the
//! poll under a fresh [`CorrelationToken`], sends the token as the message nonce, and resolves
//! the entry when the bot sees the echoed message carrying that nonce.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

use super::Poll;

/// Upper bound of generated tokens; small enough for any platform nonce field.
const MAX_TOKEN: u64 = 1_000_000_000;

/// Opaque id attached to an outgoing send and echoed back on the resulting message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationToken(pub u64);

impl fmt::Display for CorrelationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct PendingPoll {
    poll: Poll,
    registered_at: Instant,
}

/// Token → poll map shared by concurrent handler invocations. Cloning shares the same map.
///
/// Every access goes through one mutex, and no platform I/O happens while it is held.
#[derive(Clone, Debug, Default)]
pub struct PendingPolls {
    entries: Arc<Mutex<HashMap<CorrelationToken, PendingPoll>>>,
    ttl: Option<Duration>,
}

impl PendingPolls {
    /// Registry without eviction: an entry whose echo never arrives stays forever.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that drops entries older than `ttl` on each [`begin_send`](Self::begin_send).
    /// A zero `ttl` disables eviction.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::default(),
            ttl: (!ttl.is_zero()).then_some(ttl),
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Stores `poll` under a token not currently in use and returns that token.
    pub async fn begin_send(&self, poll: Poll) -> CorrelationToken {
        let mut entries = self.entries.lock().await;
        if let Some(ttl) = self.ttl {
            let purged = purge_older_than(&mut entries, ttl);
            if purged > 0 {
                info!(purged, "Dropped pending polls whose echo never arrived");
            }
        }
        let token = fresh_token(&entries);
        entries.insert(
            token,
            PendingPoll {
                poll,
                registered_at: Instant::now(),
            },
        );
        debug!(token = %token, pending = entries.len(), "Poll registered");
        token
    }

    /// Removes and returns the poll registered under `token`; `None` if there is none.
    pub async fn on_own_echo(&self, token: CorrelationToken) -> Option<Poll> {
        let resolved = self.entries.lock().await.remove(&token).map(|p| p.poll);
        debug!(token = %token, resolved = resolved.is_some(), "Own echo looked up");
        resolved
    }

    /// Drops entries past the TTL now; returns how many were dropped (0 without a TTL).
    pub async fn purge_expired(&self) -> usize {
        match self.ttl {
            Some(ttl) => purge_older_than(&mut *self.entries.lock().await, ttl),
            None => 0,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

fn purge_older_than(entries: &mut HashMap<CorrelationToken, PendingPoll>, ttl: Duration) -> usize {
    let before = entries.len();
    entries.retain(|_, p| p.registered_at.elapsed() < ttl);
    before - entries.len()
}

fn fresh_token(entries: &HashMap<CorrelationToken, PendingPoll>) -> CorrelationToken {
    let mut rng = rand::thread_rng();
    loop {
        let token = CorrelationToken(rng.gen_range(0..=MAX_TOKEN));
        if !entries.contains_key(&token) {
            return token;
        }
    }
}
