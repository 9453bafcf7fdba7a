//! Test helpers for Web API tests.
//!
//! Provides stub HN sources, a store whose deletes fail, and a TestServer
//! wired to them.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use hnfollow::follow::FollowService;
use hnfollow::hn::{ItemSource, ItemType, RemoteItem, ThreadItem, ThreadSource};
use hnfollow::store::{KeyValueStore, MemoryStore, SharedStore};
use hnfollow::web::handlers::AppState;
use hnfollow::web::router::create_router;
use hnfollow::{HnError, Result};

/// In-memory stand-in for both HN APIs.
#[derive(Default)]
pub struct StubHn {
    items: Mutex<HashMap<u64, RemoteItem>>,
    threads: Mutex<HashMap<u64, ThreadItem>>,
    unreachable: Mutex<Vec<u64>>,
    fetches: AtomicUsize,
}

impl StubHn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the live state of an item.
    pub fn set_item(&self, item: RemoteItem) {
        self.items.lock().unwrap().insert(item.id, item);
    }

    /// Set the reply tree returned for an item.
    pub fn set_thread(&self, thread: ThreadItem) {
        self.threads.lock().unwrap().insert(thread.id, thread);
    }

    /// Make every fetch of `id` fail with a transport error.
    pub fn set_unreachable(&self, id: u64) {
        self.unreachable.lock().unwrap().push(id);
    }

    /// Number of item fetches so far.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn check_reachable(&self, id: u64) -> Result<()> {
        if self.unreachable.lock().unwrap().contains(&id) {
            return Err(HnError::Transport(format!(
                "Error getting HN item {id}: connection refused"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemSource for StubHn {
    async fn fetch_item(&self, id: u64) -> Result<RemoteItem> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check_reachable(id)?;
        self.items
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(HnError::InvalidItem(id))
    }
}

#[async_trait]
impl ThreadSource for StubHn {
    async fn fetch_thread(&self, id: u64) -> Result<ThreadItem> {
        self.check_reachable(id)?;
        self.threads
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(HnError::InvalidItem(id))
    }
}

/// Memory store whose deletes always fail.
#[derive(Default)]
pub struct BrokenDeleteStore {
    inner: MemoryStore,
}

#[async_trait]
impl KeyValueStore for BrokenDeleteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.inner.put(key, value).await
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(HnError::Store("disk I/O error".to_string()))
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        self.inner.list(prefix).await
    }
}

/// Build a live item with `kids` direct replies.
pub fn remote_item(id: u64, item_type: ItemType, title: Option<&str>, kids: usize) -> RemoteItem {
    RemoteItem {
        id,
        item_type: Some(item_type),
        title: title.map(str::to_string),
        child_ids: if kids == 0 {
            None
        } else {
            Some((1..=kids as u64).map(|k| id * 1000 + k).collect())
        },
        ..Default::default()
    }
}

pub fn story(id: u64, title: &str, kids: usize) -> RemoteItem {
    remote_item(id, ItemType::Story, Some(title), kids)
}

pub fn comment(id: u64, kids: usize) -> RemoteItem {
    remote_item(id, ItemType::Comment, None, kids)
}

/// Test fixture: a server plus handles on its collaborators.
pub struct TestApp {
    pub server: TestServer,
    pub hn: Arc<StubHn>,
    pub store: SharedStore,
}

/// Create a test server over an in-memory store.
pub fn create_test_server() -> TestApp {
    create_test_server_with_store(Arc::new(MemoryStore::new()))
}

/// Create a test server over the given store.
pub fn create_test_server_with_store(store: SharedStore) -> TestApp {
    let hn = Arc::new(StubHn::new());
    let follow = FollowService::new(store.clone(), hn.clone());
    let app_state = Arc::new(AppState::new(follow, hn.clone()));

    let router = create_router(app_state, &[]);
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp { server, hn, store }
}
