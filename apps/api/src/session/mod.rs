//! Per-session selection state: the occupation being viewed and the list queued
//! for comparison. Sessions never touch the catalog and never see each other.

pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of occupations needed before a comparison is worth showing.
pub const MIN_COMPARISON_SIZE: usize = 2;

pub const DEFAULT_SESSION_TTL_MINS: i64 = 120;
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub selected_code: Option<String>,
    /// Insertion order, no duplicates.
    pub comparison: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every store access; idle sessions expire from it.
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            selected_code: None,
            comparison: Vec::new(),
            created_at: now,
            last_seen: now,
        }
    }

    pub fn select(&mut self, code: &str) {
        self.selected_code = Some(code.trim().to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected_code = None;
    }

    /// Returns false when the code is already queued.
    pub fn add_to_comparison(&mut self, code: &str) -> bool {
        let code = code.trim();
        if self.comparison.iter().any(|c| c == code) {
            return false;
        }
        self.comparison.push(code.to_string());
        true
    }

    /// Returns false when the code was not queued.
    pub fn remove_from_comparison(&mut self, code: &str) -> bool {
        let code = code.trim();
        let before = self.comparison.len();
        self.comparison.retain(|c| c != code);
        self.comparison.len() != before
    }

    pub fn clear_comparison(&mut self) {
        self.comparison.clear();
    }

    pub fn is_comparison_ready(&self) -> bool {
        self.comparison.len() >= MIN_COMPARISON_SIZE
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory session table. The lock only guards the map; each session's
/// contents belong to that session alone.
///
/// Sessions idle for longer than `ttl` are dropped, and the table never holds
/// more than `max_sessions`: creating one past the limit evicts the least
/// recently seen.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(
            Duration::minutes(DEFAULT_SESSION_TTL_MINS),
            DEFAULT_MAX_SESSIONS,
        )
    }
}

impl SessionStore {
    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn create(&self) -> Session {
        let session = Session::new();
        let mut sessions = self.lock();

        let ttl = self.ttl;
        sessions.retain(|_, s| session.created_at - s.last_seen <= ttl);

        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .values()
                .min_by_key(|s| s.last_seen)
                .map(|s| s.id)
            else {
                break;
            };
            sessions.remove(&oldest);
        }

        sessions.insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: Uuid) -> Option<Session> {
        self.update(id, |_| ()).map(|(_, session)| session)
    }

    /// Applies `f` to the session and returns its result with a snapshot of the
    /// updated session. `None` when the id is unknown or the session has expired.
    pub fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Option<(R, Session)> {
        let now = Utc::now();
        let mut sessions = self.lock();

        if sessions.get(&id)?.last_seen + self.ttl < now {
            sessions.remove(&id);
            return None;
        }

        let session = sessions.get_mut(&id)?;
        session.last_seen = now;
        let result = f(session);
        Some((result, session.clone()))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}
