//! In-memory posting board with live filtered subscriptions.
//!
//! Stands in for the hosted document store: callers register
//! `subscribe(criteria, on_update)` and receive a fresh filtered snapshot
//! on registration and after every mutation, in mutation order.

use std::cell::Cell;
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::job::JobPosting;
use crate::search::{run_search, MatchedPosting, SearchCriteria};

/// Callback invoked with each filtered snapshot. Must not mutate the board.
pub type UpdateCallback = dyn Fn(&[MatchedPosting]) + Send + Sync;

thread_local! {
    static DELIVERING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as running subscription callbacks.
struct DeliveryGuard {
    previous: bool,
}

impl DeliveryGuard {
    fn enter() -> Self {
        Self {
            previous: DELIVERING.with(|d| d.replace(true)),
        }
    }
}

impl Drop for DeliveryGuard {
    fn drop(&mut self) {
        DELIVERING.with(|d| d.set(self.previous));
    }
}

/// Re-entering the board from a callback would block forever on the publish lock.
fn assert_not_delivering(operation: &str) {
    assert!(
        !DELIVERING.with(Cell::get),
        "JobBoard::{operation} called from inside a subscription callback"
    );
}

struct Subscriber {
    id: Uuid,
    criteria: SearchCriteria,
    on_update: Arc<UpdateCallback>,
}

struct BoardInner {
    postings: RwLock<Vec<JobPosting>>,
    subscribers: Mutex<Vec<Subscriber>>,
    /// Serialises mutation + delivery so every subscriber sees snapshots in order.
    publish: Mutex<()>,
    default_radius_km: f64,
}

#[derive(Clone)]
pub struct JobBoard {
    inner: Arc<BoardInner>,
}

/// Keeps a subscription alive. Dropping it unsubscribes.
pub struct SubscriptionHandle {
    id: Uuid,
    board: Weak<BoardInner>,
}

impl SubscriptionHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.board.upgrade() {
            let mut subs = inner
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subs.retain(|s| s.id != self.id);
            debug!("Subscription {} removed ({} remaining)", self.id, subs.len());
        }
    }
}

impl JobBoard {
    /// Builds a board from initial postings, applying the same rules as `upsert`:
    /// blank ids get a UUID and a repeated id replaces the earlier posting.
    /// Postings with an out-of-range coordinate are skipped.
    pub fn with_postings(default_radius_km: f64, postings: Vec<JobPosting>) -> Self {
        let mut stored: Vec<JobPosting> = Vec::with_capacity(postings.len());
        for mut posting in postings {
            if let Some(coord) = &posting.coordinate {
                if !coord.is_valid() {
                    warn!(
                        "Skipping posting '{}' with out-of-range coordinate ({}, {})",
                        posting.id, coord.latitude, coord.longitude
                    );
                    continue;
                }
            }
            assign_id(&mut posting);
            if insert_or_replace(&mut stored, posting) {
                debug!("Duplicate initial posting id replaced earlier entry");
            }
        }

        Self {
            inner: Arc::new(BoardInner {
                postings: RwLock::new(stored),
                subscribers: Mutex::new(Vec::new()),
                publish: Mutex::new(()),
                default_radius_km,
            }),
        }
    }

    pub fn default_radius_km(&self) -> f64 {
        self.inner.default_radius_km
    }

    pub fn list(&self) -> Vec<JobPosting> {
        self.read_postings().clone()
    }

    pub fn get(&self, id: &str) -> Option<JobPosting> {
        self.read_postings().iter().find(|p| p.id == id).cloned()
    }

    pub fn posting_count(&self) -> usize {
        self.read_postings().len()
    }

    /// Runs the search pipeline against the current snapshot.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<MatchedPosting> {
        run_search(&self.read_postings(), criteria, self.inner.default_radius_km)
    }

    /// Inserts or replaces a posting by id. A blank id is replaced with a fresh UUID.
    /// Returns the stored posting.
    pub fn upsert(&self, mut posting: JobPosting) -> JobPosting {
        assert_not_delivering("upsert");
        assign_id(&mut posting);

        let _guard = self.lock_publish();
        {
            let mut postings = self.write_postings();
            if insert_or_replace(&mut postings, posting.clone()) {
                info!("Posting {} updated", posting.id);
            } else {
                info!("Posting {} added ({} total)", posting.id, postings.len());
            }
        }
        self.notify_all();
        posting
    }

    /// Removes a posting. Returns false if no posting had that id.
    pub fn remove(&self, id: &str) -> bool {
        assert_not_delivering("remove");

        let _guard = self.lock_publish();
        let removed = {
            let mut postings = self.write_postings();
            let before = postings.len();
            postings.retain(|p| p.id != id);
            postings.len() != before
        };
        if removed {
            info!("Posting {id} removed");
            self.notify_all();
        }
        removed
    }

    /// Registers a live query. `on_update` receives the current result set
    /// immediately and again after every mutation.
    pub fn subscribe<F>(&self, criteria: SearchCriteria, on_update: F) -> SubscriptionHandle
    where
        F: Fn(&[MatchedPosting]) + Send + Sync + 'static,
    {
        assert_not_delivering("subscribe");
        let id = Uuid::new_v4();
        let on_update: Arc<UpdateCallback> = Arc::new(on_update);

        let _guard = self.lock_publish();
        let snapshot = self.search(&criteria);
        {
            let mut subs = self
                .inner
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subs.push(Subscriber {
                id,
                criteria,
                on_update: on_update.clone(),
            });
            debug!("Subscription {id} registered ({} active)", subs.len());
        }
        {
            let _delivering = DeliveryGuard::enter();
            on_update(&snapshot);
        }

        SubscriptionHandle {
            id,
            board: Arc::downgrade(&self.inner),
        }
    }

    /// Caller must hold the publish lock.
    fn notify_all(&self) {
        let targets: Vec<(SearchCriteria, Arc<UpdateCallback>)> = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|s| (s.criteria.clone(), s.on_update.clone()))
            .collect();

        if targets.is_empty() {
            return;
        }

        let postings = self.list();
        let _delivering = DeliveryGuard::enter();
        for (criteria, callback) in targets {
            let snapshot = run_search(&postings, &criteria, self.inner.default_radius_km);
            callback(&snapshot);
        }
    }

    fn lock_publish(&self) -> std::sync::MutexGuard<'_, ()> {
        self.inner
            .publish
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn read_postings(&self) -> std::sync::RwLockReadGuard<'_, Vec<JobPosting>> {
        self.inner
            .postings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_postings(&self) -> std::sync::RwLockWriteGuard<'_, Vec<JobPosting>> {
        self.inner
            .postings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn assign_id(posting: &mut JobPosting) {
    if posting.id.trim().is_empty() {
        posting.id = Uuid::new_v4().to_string();
    }
}

/// Replaces the posting with the same id in place, or appends. Returns true on replace.
fn insert_or_replace(postings: &mut Vec<JobPosting>, posting: JobPosting) -> bool {
    match postings.iter_mut().find(|p| p.id == posting.id) {
        Some(existing) => {
            *existing = posting;
            true
        }
        None => {
            postings.push(posting);
            false
        }
    }
}
