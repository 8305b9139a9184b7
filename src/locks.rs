//! Per-session serialization.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex;

use crate::session::SessionId;

/// Registry handing out one async mutex per session. Mutating operations
/// against the same session serialize on it; unrelated sessions never
/// contend.
#[derive(Default)]
pub struct SessionLocks {
    inner: StdMutex<HashMap<SessionId, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session: SessionId) -> Arc<Mutex<()>> {
        let mut map = self.inner.lock().unwrap();
        map.entry(session).or_default().clone()
    }
}
