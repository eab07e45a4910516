use super::{Request, Transport};
use crate::error::{CocorahsError, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// In-memory transport: replays queued bodies per path and records every
/// request it receives.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    responses: RefCell<HashMap<String, VecDeque<Value>>>,
    requests: RefCell<Vec<Request>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `body` as the next response for `path`.
    pub fn respond(self, path: &str, body: Value) -> Self {
        self.responses
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(body);
        self
    }

    /// All requests sent so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Request> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

impl Transport for MemoryTransport {
    fn send(&self, request: &Request) -> Result<Value> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .get_mut(&request.path)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                CocorahsError::MalformedResponse(format!(
                    "no canned response for {} {}",
                    request.method, request.path
                ))
            })
    }
}

// --- Test Fixtures ---

pub mod fixtures {
    use super::MemoryTransport;
    use serde_json::{json, Value};

    pub fn identity_body(station_numbers: &[&str]) -> Value {
        let stations: Vec<Value> = station_numbers
            .iter()
            .map(|n| json!({"stationNumber": n}))
            .collect();
        json!({"userName": "observer", "stations": stations})
    }

    pub fn created_body(uid: &str) -> Value {
        json!({"uid": uid, "obsDateTime": "2024-03-09T07:00:00"})
    }

    pub fn rejected_body(message: &str) -> Value {
        json!({"status": "error", "message": message})
    }

    /// Transport answering identity with `stations` and the report with `uid`.
    pub fn account_with_stations(stations: &[&str], uid: &str) -> MemoryTransport {
        MemoryTransport::new()
            .respond("identity", identity_body(stations))
            .respond("DailyPrecipObs", created_body(uid))
    }
}
