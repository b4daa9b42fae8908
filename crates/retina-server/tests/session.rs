use std::time::Duration;

use retina_server::session::{DEFAULT_IDLE_TTL, SessionRegistry};

#[tokio::test]
async fn create_lookup_and_end() {
    let registry = SessionRegistry::new();
    assert!(registry.is_empty().await);

    let a = registry.create().await;
    let b = registry.create().await;
    assert_ne!(a, b);
    assert_eq!(registry.len().await, 2);

    let session = registry.get(a).await.unwrap();
    assert!(session.lock().await.store.metrics().is_empty());

    assert!(registry.end(a).await);
    assert!(registry.get(a).await.is_none());
    assert!(!registry.end(a).await);
    assert_eq!(registry.len().await, 1);
}

#[tokio::test]
async fn clones_share_sessions() {
    let registry = SessionRegistry::new();
    let clone = registry.clone();
    let id = registry.create().await;
    assert!(clone.get(id).await.is_some());
}

#[tokio::test]
async fn idle_sessions_expire_and_touched_ones_survive() {
    let registry = SessionRegistry::with_idle_ttl(Duration::from_millis(200));
    let idle = registry.create().await;
    let busy = registry.create().await;

    for _ in 0..4 {
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(registry.get(busy).await.is_some());
    }

    assert!(registry.get(idle).await.is_none());
    assert!(registry.get(busy).await.is_some());
    assert_eq!(registry.len().await, 1);
}

#[tokio::test]
async fn create_evicts_stale_sessions() {
    let registry = SessionRegistry::with_idle_ttl(Duration::from_millis(50));
    registry.create().await;
    registry.create().await;

    tokio::time::sleep(Duration::from_millis(120)).await;
    let fresh = registry.create().await;

    assert_eq!(registry.len().await, 1);
    assert!(registry.get(fresh).await.is_some());
}

#[tokio::test]
async fn sweeper_frees_abandoned_sessions() {
    let registry = SessionRegistry::with_idle_ttl(Duration::from_millis(50));
    registry.create().await;
    let sweeper = registry.spawn_sweeper(Duration::from_millis(20));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(registry.is_empty().await);
    assert_eq!(registry.evict_idle().await, 0);

    sweeper.abort();
}

#[tokio::test]
async fn default_ttl_keeps_sessions() {
    let registry = SessionRegistry::new();
    assert_eq!(registry.idle_ttl(), DEFAULT_IDLE_TTL);
    let id = registry.create().await;
    assert_eq!(registry.evict_idle().await, 0);
    assert!(registry.get(id).await.is_some());
}
