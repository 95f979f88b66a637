// src/backend/storage/sessions.rs
use crate::models::{AdminSession, SessionState, Timestamp};
use crate::storage::memory::Memory;
use crate::storage::storable::Cbor;
use candid::Principal;
use ic_stable_structures::StableBTreeMap;
use std::collections::HashMap;

type PrincipalBytes = Vec<u8>;

/// Per-caller session state: the client identity and the admin-authenticated flag.
pub trait SessionStore {
    fn client_session(&self, caller: &Principal) -> Option<SessionState>;
    fn set_client_session(&mut self, caller: &Principal, state: SessionState);
    fn clear_client_session(&mut self, caller: &Principal) -> Option<SessionState>;

    fn admin_session(&self, caller: &Principal) -> Option<AdminSession>;
    fn set_admin_session(&mut self, caller: &Principal, session: AdminSession);
    fn clear_admin_session(&mut self, caller: &Principal) -> Option<AdminSession>;
    /// Drops admin sessions past their expiry and returns how many were removed.
    fn purge_expired_admin_sessions(&mut self, now: Timestamp) -> usize;
}

/// Sessions kept in stable memory so they survive upgrades.
pub struct StableSessionStore {
    clients: StableBTreeMap<PrincipalBytes, Cbor<SessionState>, Memory>,
    admins: StableBTreeMap<PrincipalBytes, Cbor<AdminSession>, Memory>,
}

impl StableSessionStore {
    pub fn init(client_memory: Memory, admin_memory: Memory) -> Self {
        Self {
            clients: StableBTreeMap::init(client_memory),
            admins: StableBTreeMap::init(admin_memory),
        }
    }
}

fn key(caller: &Principal) -> PrincipalBytes {
    caller.as_slice().to_vec()
}

impl SessionStore for StableSessionStore {
    fn client_session(&self, caller: &Principal) -> Option<SessionState> {
        self.clients.get(&key(caller)).map(|s| s.0)
    }

    fn set_client_session(&mut self, caller: &Principal, state: SessionState) {
        self.clients.insert(key(caller), Cbor(state));
    }

    fn clear_client_session(&mut self, caller: &Principal) -> Option<SessionState> {
        self.clients.remove(&key(caller)).map(|s| s.0)
    }

    fn admin_session(&self, caller: &Principal) -> Option<AdminSession> {
        self.admins.get(&key(caller)).map(|s| s.0)
    }

    fn set_admin_session(&mut self, caller: &Principal, session: AdminSession) {
        self.admins.insert(key(caller), Cbor(session));
    }

    fn clear_admin_session(&mut self, caller: &Principal) -> Option<AdminSession> {
        self.admins.remove(&key(caller)).map(|s| s.0)
    }

    fn purge_expired_admin_sessions(&mut self, now: Timestamp) -> usize {
        let expired: Vec<PrincipalBytes> = self
            .admins
            .iter()
            .filter(|(_caller, session)| session.0.is_expired(now))
            .map(|(caller, _session)| caller)
            .collect();
        for caller in &expired {
            self.admins.remove(caller);
        }
        expired.len()
    }
}

/// Heap sessions used alongside demo data.
#[derive(Default)]
pub struct MemorySessionStore {
    clients: HashMap<Principal, SessionState>,
    admins: HashMap<Principal, AdminSession>,
}

impl SessionStore for MemorySessionStore {
    fn client_session(&self, caller: &Principal) -> Option<SessionState> {
        self.clients.get(caller).cloned()
    }

    fn set_client_session(&mut self, caller: &Principal, state: SessionState) {
        self.clients.insert(*caller, state);
    }

    fn clear_client_session(&mut self, caller: &Principal) -> Option<SessionState> {
        self.clients.remove(caller)
    }

    fn admin_session(&self, caller: &Principal) -> Option<AdminSession> {
        self.admins.get(caller).copied()
    }

    fn set_admin_session(&mut self, caller: &Principal, session: AdminSession) {
        self.admins.insert(*caller, session);
    }

    fn clear_admin_session(&mut self, caller: &Principal) -> Option<AdminSession> {
        self.admins.remove(caller)
    }

    fn purge_expired_admin_sessions(&mut self, now: Timestamp) -> usize {
        let before = self.admins.len();
        self.admins.retain(|_caller, session| !session.is_expired(now));
        before - self.admins.len()
    }
}
