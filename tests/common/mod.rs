#![allow(dead_code)]

use actix_web::{web, App};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use entertain_api::{
    config::Config,
    models::itinerary::Itinerary,
    routes,
    services::{
        itinerary_store::{ItineraryStore, StoreError},
        upstream::{UpstreamError, UpstreamRequest, UpstreamResponse, UpstreamTransport},
    },
    state::AppState,
};

pub enum Reply {
    Respond { status: u16, body: Vec<u8> },
    Timeout,
    Unreachable,
}

/// Upstream double that records every request it is asked to send.
pub struct FakeTransport {
    reply: Reply,
    calls: Mutex<Vec<UpstreamRequest>>,
}

impl FakeTransport {
    pub fn replying(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn json(status: u16, body: serde_json::Value) -> Arc<Self> {
        Self::replying(Reply::Respond {
            status,
            body: serde_json::to_vec(&body).unwrap(),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<UpstreamRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl UpstreamTransport for FakeTransport {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        self.calls.lock().unwrap().push(request);
        match &self.reply {
            Reply::Respond { status, body } => Ok(UpstreamResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Timeout => Err(UpstreamError::Timeout),
            Reply::Unreachable => Err(UpstreamError::Transport("connection refused".to_string())),
        }
    }
}

/// In-memory store ordering by the raw `startDate` string, as Mongo does.
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<Vec<Itinerary>>,
    failing: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Backend("connection reset by peer 10.0.0.7:27017".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ItineraryStore for MemoryStore {
    async fn create(&self, itinerary: &Itinerary) -> Result<(), StoreError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.docs.lock().unwrap().push(itinerary.clone());
        Ok(())
    }

    async fn list_by_start_date(&self) -> Result<Vec<Itinerary>, StoreError> {
        self.check()?;
        let mut docs = self.docs.lock().unwrap().clone();
        docs.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Ok(docs)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

pub struct TestApp {
    pub transport: Arc<FakeTransport>,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_transport(FakeTransport::json(200, serde_json::json!({})))
    }

    pub fn with_transport(transport: Arc<FakeTransport>) -> Self {
        Self {
            transport,
            store: MemoryStore::new(),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let config = Config::from_lookup(|key| match key {
            "MONGODB_URI" => Some("mongodb://localhost:27017".to_string()),
            _ => None,
        })
        .unwrap();
        let state = AppState::new(&config, self.transport.clone(), self.store.clone());

        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::config)
    }
}

pub const API_KEY: &str = "test-api-key";
