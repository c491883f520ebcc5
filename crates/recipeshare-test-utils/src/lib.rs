//! Testing fakes for the RecipeShare workspace
//!
//! Deterministic stand-ins for the three external collaborators (identity
//! service, recipe table, router), so every workflow test runs without a
//! network.

#![allow(missing_docs)]

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use tokio::sync::{watch, Semaphore};

use recipeshare_client::{
    DraftForm, IdentityError, IdentityProvider, Navigator, OwnedRecipeList, RecipeStore, Route,
    SessionContext, StoreError,
};
use recipeshare_model::{Identity, NewRecipe, Recipe, RecipeId, UserId};

/// Identity provider driven by a watch channel.
///
/// Emits the full session value on every change, the way a real auth
/// client pushes sign-in/sign-out events.
pub struct FakeIdentityProvider {
    tx: watch::Sender<Option<Identity>>,
    fail_current: AtomicBool,
    current_calls: AtomicU32,
    sign_out_calls: AtomicU32,
}

impl FakeIdentityProvider {
    pub fn signed_in(identity: Identity) -> Self {
        Self::with_state(Some(identity))
    }

    pub fn signed_out() -> Self {
        Self::with_state(None)
    }

    fn with_state(state: Option<Identity>) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx,
            fail_current: AtomicBool::new(false),
            current_calls: AtomicU32::new(0),
            sign_out_calls: AtomicU32::new(0),
        }
    }

    /// Emit a session change to every subscriber.
    pub fn set_identity(&self, identity: Option<Identity>) {
        self.tx.send_replace(identity);
    }

    /// Make `current_identity` fail until reset.
    pub fn fail_current_identity(&self, fail: bool) {
        self.fail_current.store(fail, Ordering::SeqCst);
    }

    pub fn current_calls(&self) -> u32 {
        self.current_calls.load(Ordering::SeqCst)
    }

    pub fn sign_out_calls(&self) -> u32 {
        self.sign_out_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn current_identity(&self) -> Result<Option<Identity>, IdentityError> {
        self.current_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_current.load(Ordering::SeqCst) {
            return Err(IdentityError::Transport("simulated outage".to_string()));
        }
        Ok(self.tx.borrow().clone())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.tx.subscribe()
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.tx.send_replace(None);
        Ok(())
    }
}

struct StoredRow {
    seq: u32,
    recipe: Recipe,
}

/// In-memory recipe table with store-side id/timestamp assignment.
///
/// The clock is controllable so ordering tests are deterministic: inserts
/// stamp the current clock value, and equal stamps keep native insertion
/// order on select.
pub struct MemoryRecipeStore {
    rows: Mutex<Vec<StoredRow>>,
    now: Mutex<DateTime<Utc>>,
    next_seq: AtomicU32,
    insert_calls: AtomicU32,
    select_calls: AtomicU32,
    fail_next_insert: AtomicBool,
    fail_reads: AtomicBool,
    insert_gate: Mutex<Option<Arc<Semaphore>>>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            next_seq: AtomicU32::new(0),
            insert_calls: AtomicU32::new(0),
            select_calls: AtomicU32::new(0),
            fail_next_insert: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            insert_gate: Mutex::new(None),
        }
    }

    /// Move the store clock forward so later inserts get later timestamps.
    pub fn advance_clock(&self, seconds: i64) {
        *self.now.lock() += chrono::Duration::seconds(seconds);
    }

    /// Reject the next insert with a write error.
    pub fn fail_next_insert(&self) {
        self.fail_next_insert.store(true, Ordering::SeqCst);
    }

    /// Fail every select until reset.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Park subsequent inserts until released, so tests can observe an
    /// in-flight submission.
    pub fn hold_inserts(&self) {
        *self.insert_gate.lock() = Some(Arc::new(Semaphore::new(0)));
    }

    /// Let `n` held inserts proceed.
    pub fn release_inserts(&self, n: usize) {
        if let Some(gate) = self.insert_gate.lock().clone() {
            gate.add_permits(n);
        }
    }

    pub fn insert_calls(&self) -> u32 {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn select_calls(&self) -> u32 {
        self.select_calls.load(Ordering::SeqCst)
    }

    /// Snapshot of every stored row in insertion order.
    pub fn records(&self) -> Vec<Recipe> {
        self.rows.lock().iter().map(|row| row.recipe.clone()).collect()
    }

    /// Seed a row directly, bypassing the insert path and its counters.
    pub fn seed(&self, record: NewRecipe) -> Recipe {
        self.store_row(record)
    }

    fn store_row(&self, record: NewRecipe) -> Recipe {
        let recipe = Recipe {
            id: RecipeId::new(),
            title: record.title,
            description: record.description,
            ingredients: record.ingredients,
            instructions: record.instructions,
            cooking_time: record.cooking_time,
            servings: record.servings,
            image_url: record.image_url,
            owner_id: record.owner_id,
            created_at: *self.now.lock(),
        };
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().push(StoredRow {
            seq,
            recipe: recipe.clone(),
        });
        recipe
    }
}

impl Default for MemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn insert(&self, record: NewRecipe) -> Result<Recipe, StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.insert_gate.lock().clone();
        if let Some(gate) = gate {
            let permit = gate.acquire().await.expect("insert gate closed");
            permit.forget();
        }

        if self.fail_next_insert.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Write("simulated insert rejection".to_string()));
        }
        if record.owner_id.as_str().is_empty() {
            return Err(StoreError::Write(
                "owner_id must reference the inserting session".to_string(),
            ));
        }
        Ok(self.store_row(record))
    }

    async fn select_owned(&self, owner: &UserId) -> Result<Vec<Recipe>, StoreError> {
        self.select_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read("simulated select failure".to_string()));
        }

        let rows = self.rows.lock();
        let mut owned: Vec<(u32, Recipe)> = rows
            .iter()
            .filter(|row| row.recipe.is_owned_by(owner))
            .map(|row| (row.seq, row.recipe.clone()))
            .collect();
        // created_at descending; equal stamps keep native insertion order
        owned.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at).then(a.0.cmp(&b.0)));
        Ok(owned.into_iter().map(|(_, recipe)| recipe).collect())
    }
}

/// Navigator that records every route change in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.lock().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        self.routes.lock().push(route);
    }
}

/// Fully-faked collaborator set for one test.
pub struct TestHarness {
    pub provider: Arc<FakeIdentityProvider>,
    pub store: Arc<MemoryRecipeStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub session: SessionContext,
}

impl TestHarness {
    pub fn signed_in(user: &str) -> Self {
        Self::with_provider(FakeIdentityProvider::signed_in(Identity::new(user)))
    }

    pub fn signed_out() -> Self {
        Self::with_provider(FakeIdentityProvider::signed_out())
    }

    fn with_provider(provider: FakeIdentityProvider) -> Self {
        let provider = Arc::new(provider);
        let session = SessionContext::new(provider.clone());
        Self {
            provider,
            store: Arc::new(MemoryRecipeStore::new()),
            navigator: Arc::new(RecordingNavigator::new()),
            session,
        }
    }

    /// Authoring form wired to the fakes.
    pub fn form(&self) -> DraftForm {
        DraftForm::new(
            self.session.clone(),
            self.store.clone(),
            self.navigator.clone(),
        )
    }

    /// Owned-list view wired to the fakes.
    pub fn list(&self) -> OwnedRecipeList {
        OwnedRecipeList::new(
            self.session.clone(),
            self.store.clone(),
            self.navigator.clone(),
        )
    }
}
