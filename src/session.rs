// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state shared between the API client and its consumers.
//!
//! The session lives in an explicit store owned by the application context
//! and injected into the client at construction time. Login success writes
//! it, logout and 401 handling clear it, every outgoing request reads it.

use std::sync::{Arc, RwLock};

/// Credential and identity pair for the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token attached to outgoing requests
    pub access_token: String,
    /// Server-side id of the logged-in user
    pub user_id: i64,
}

/// Shared, injectable session slot.
///
/// Cloning the store yields a handle to the same slot, so the client and
/// the application context always observe the same session.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session.
    pub fn set(&self, session: Session) {
        *self.write() = Some(session);
    }

    /// Current session, if any.
    pub fn get(&self) -> Option<Session> {
        self.read().clone()
    }

    /// Current bearer token. Empty tokens count as absent: a request is
    /// authenticated iff a non-empty token is present at send time.
    pub fn token(&self) -> Option<String> {
        self.read()
            .as_ref()
            .map(|s| s.access_token.clone())
            .filter(|t| !t.is_empty())
    }

    /// Id of the logged-in user, if a session exists.
    pub fn user_id(&self) -> Option<i64> {
        self.read().as_ref().map(|s| s.user_id)
    }

    /// Drop the session (logout or server-side rejection).
    pub fn clear(&self) {
        *self.write() = None;
    }

    /// True when a non-empty token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
