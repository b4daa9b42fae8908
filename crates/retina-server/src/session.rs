use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use retina_store::store::RecordStore;

/// Sessions idle longer than this are dropped along with their records.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

/// State owned by one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    pub store: RecordStore,
}

struct Entry {
    session: Arc<Mutex<Session>>,
    created_at: Instant,
    last_used: Instant,
}

/// Sessions keyed by id, each with its own lock.
///
/// One session's slow generation never blocks another, and no store is
/// reachable from another session. A session that is not touched for the
/// idle TTL is evicted on the next `create`, `get` or sweep; its records are
/// gone and only files already saved by an export remain.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    /// Start a session with empty collections.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let now = Instant::now();

        let mut sessions = self.sessions.lock().await;
        evict_idle(&mut sessions, now, self.idle_ttl);
        sessions.insert(
            id,
            Entry {
                session: Arc::new(Mutex::new(Session::default())),
                created_at: now,
                last_used: now,
            },
        );

        tracing::info!(session_id = %id, live = sessions.len(), "session started");
        id
    }

    /// Look up a live session and mark it used.
    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<Session>>> {
        let now = Instant::now();

        let mut sessions = self.sessions.lock().await;
        evict_idle(&mut sessions, now, self.idle_ttl);
        sessions.get_mut(&id).map(|entry| {
            entry.last_used = now;
            entry.session.clone()
        })
    }

    /// End a session, dropping its records. Returns `false` if unknown.
    pub async fn end(&self, id: Uuid) -> bool {
        let removed = self.sessions.lock().await.remove(&id);
        if let Some(entry) = &removed {
            tracing::info!(
                session_id = %id,
                age_secs = entry.created_at.elapsed().as_secs(),
                "session ended"
            );
        }
        removed.is_some()
    }

    /// Drop every idle session now. Returns how many were evicted.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        evict_idle(&mut sessions, Instant::now(), self.idle_ttl)
    }

    /// Sweep idle sessions on a fixed period, so abandoned sessions are freed
    /// even when no new requests arrive.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let registry = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                registry.evict_idle().await;
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn evict_idle(sessions: &mut HashMap<Uuid, Entry>, now: Instant, idle_ttl: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|id, entry| {
        let idle = now.saturating_duration_since(entry.last_used);
        let keep = idle < idle_ttl;
        if !keep {
            tracing::info!(
                session_id = %id,
                age_secs = now.saturating_duration_since(entry.created_at).as_secs(),
                idle_secs = idle.as_secs(),
                "session expired"
            );
        }
        keep
    });
    before - sessions.len()
}
