//! Mock identity session: whoever logs in is trusted.

use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::actor::{Actor, Role};

/// Record-store key holding the logged-in actor.
pub const SESSION_NAMESPACE: &str = "session_user";

pub trait IdentityProvider {
    fn current_actor(&self) -> Option<Actor>;
}

/// Actor persisted by `login` in the record store.
pub struct StoredSession<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> StoredSession<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: RecordStore> IdentityProvider for StoredSession<'_, S> {
    fn current_actor(&self) -> Option<Actor> {
        // a corrupted session is the same as no session
        self.store
            .load_one::<Actor>(SESSION_NAMESPACE)
            .ok()
            .flatten()
    }
}

/// Fixed identity, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<Actor>);

impl IdentityProvider for StaticIdentity {
    fn current_actor(&self) -> Option<Actor> {
        self.0.clone()
    }
}

/// Accepts any non-empty id and name and stores the actor as the session.
pub fn login<S: RecordStore>(store: &mut S, id: &str, name: &str, role: Role) -> AppResult<Actor> {
    let id = id.trim();
    let name = name.trim();

    if id.is_empty() {
        return Err(AppError::InvalidCredentials("empty id".into()));
    }
    if name.is_empty() {
        return Err(AppError::InvalidCredentials("empty name".into()));
    }

    let actor = Actor::new(id, name, role);
    store.save_one(SESSION_NAMESPACE, &actor)?;
    Ok(actor)
}

pub fn logout<S: RecordStore>(store: &mut S) -> AppResult<()> {
    store.remove(SESSION_NAMESPACE)
}

/// Current actor or `NotLoggedIn`.
pub fn require_actor<P: IdentityProvider>(provider: &P) -> AppResult<Actor> {
    provider.current_actor().ok_or(AppError::NotLoggedIn)
}
