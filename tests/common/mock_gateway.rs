//! Scripted in-memory gateway for session tests.
//!
//! Records every call and replays staged results. When no result is
//! staged for a verb, a benign default applies: list returns the standing
//! collection, create/update return no entity, remove succeeds, and
//! get-one reports not found.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use stockroom::catalog::CatalogEntity;
use stockroom::error::{Result, StockroomError};
use stockroom::gateway::{CollectionGateway, EntityPayload};

/// One recorded gateway call, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    ListAll,
    GetOne(String),
    Create,
    Update(String),
    Remove(String),
}

pub struct MockGateway<E> {
    calls: Mutex<Vec<GatewayCall>>,
    collection: Mutex<Vec<E>>,
    list_results: Mutex<VecDeque<Result<Vec<E>>>>,
    get_results: Mutex<VecDeque<Result<E>>>,
    create_results: Mutex<VecDeque<Result<Option<E>>>>,
    update_results: Mutex<VecDeque<Result<Option<E>>>>,
    remove_results: Mutex<VecDeque<Result<()>>>,
    /// Payloads received by create/update, in arrival order.
    payloads: Mutex<Vec<EntityPayload>>,
}

impl<E: Clone> MockGateway<E> {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            collection: Mutex::new(Vec::new()),
            list_results: Mutex::new(VecDeque::new()),
            get_results: Mutex::new(VecDeque::new()),
            create_results: Mutex::new(VecDeque::new()),
            update_results: Mutex::new(VecDeque::new()),
            remove_results: Mutex::new(VecDeque::new()),
            payloads: Mutex::new(Vec::new()),
        }
    }

    /// Set the standing collection returned by unscripted list calls.
    pub fn set_collection(&self, collection: Vec<E>) {
        *self.collection.lock() = collection;
    }

    /// Stage a one-shot list result, consumed before the standing
    /// collection applies.
    pub fn stage_list(&self, result: Result<Vec<E>>) {
        self.list_results.lock().push_back(result);
    }

    pub fn stage_get(&self, result: Result<E>) {
        self.get_results.lock().push_back(result);
    }

    pub fn stage_create(&self, result: Result<Option<E>>) {
        self.create_results.lock().push_back(result);
    }

    pub fn stage_update(&self, result: Result<Option<E>>) {
        self.update_results.lock().push_back(result);
    }

    pub fn stage_remove(&self, result: Result<()>) {
        self.remove_results.lock().push_back(result);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().clone()
    }

    /// Number of list calls seen so far.
    pub fn list_calls(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, GatewayCall::ListAll))
            .count()
    }

    /// Number of remove calls seen so far.
    pub fn remove_calls(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, GatewayCall::Remove(_)))
            .count()
    }

    pub fn payloads(&self) -> Vec<EntityPayload> {
        self.payloads.lock().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl<E: CatalogEntity> CollectionGateway<E> for MockGateway<E> {
    async fn list_all(&self) -> Result<Vec<E>> {
        self.record(GatewayCall::ListAll);
        match self.list_results.lock().pop_front() {
            Some(result) => result,
            None => Ok(self.collection.lock().clone()),
        }
    }

    async fn get_one(&self, id: &str) -> Result<E> {
        self.record(GatewayCall::GetOne(id.to_string()));
        match self.get_results.lock().pop_front() {
            Some(result) => result,
            None => Err(StockroomError::NotFound(id.to_string())),
        }
    }

    async fn create(&self, payload: EntityPayload) -> Result<Option<E>> {
        self.record(GatewayCall::Create);
        self.payloads.lock().push(payload);
        self.create_results.lock().pop_front().unwrap_or(Ok(None))
    }

    async fn update(&self, id: &str, payload: EntityPayload) -> Result<Option<E>> {
        self.record(GatewayCall::Update(id.to_string()));
        self.payloads.lock().push(payload);
        self.update_results.lock().pop_front().unwrap_or(Ok(None))
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.record(GatewayCall::Remove(id.to_string()));
        self.remove_results.lock().pop_front().unwrap_or(Ok(()))
    }
}
