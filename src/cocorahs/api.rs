//! # API Client
//!
//! [`CocorahsApi`] is the single entry point for talking to CoCoRaHS. It owns
//! the account credentials and signs every request with them, so callers only
//! deal in domain operations:
//!
//! - [`CocorahsApi::get_identity`]: the account's stations (`GET identity`)
//! - [`CocorahsApi::new_report`]: submit a daily observation (`POST DailyPrecipObs`)
//!
//! ## Generic Over Transport
//!
//! `CocorahsApi<T: Transport>` is generic over how requests are carried:
//! - Production: `CocorahsApi<HttpTransport>`
//! - Testing: `CocorahsApi<MemoryTransport>`
//!
//! The client never retries and never interprets HTTP status codes. A
//! transport failure propagates as [`CocorahsError::Transport`]; an
//! application-level refusal comes back as [`ReportOutcome::Rejected`].
//!
//! [`CocorahsError::Transport`]: crate::error::CocorahsError::Transport

use crate::error::Result;
use crate::model::{Credentials, Identity, Observation, Precipitation, ReportOutcome};
use crate::transport::{Request, Transport};
use chrono::{Local, NaiveDateTime};
use log::debug;
use serde_json::Value;

pub const IDENTITY_PATH: &str = "identity";
pub const REPORT_PATH: &str = "DailyPrecipObs";

pub struct CocorahsApi<T: Transport> {
    transport: T,
    credentials: Credentials,
}

impl<T: Transport> CocorahsApi<T> {
    pub fn new(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `request`, signing it with the account credentials unless the
    /// caller already attached other ones.
    pub fn request(&self, mut request: Request) -> Result<Value> {
        if request.auth.is_none() {
            request.auth = Some(self.credentials.clone());
        }
        self.transport.send(&request)
    }

    pub fn get_identity(&self) -> Result<Identity> {
        let body = self.request(Request::get(IDENTITY_PATH))?;
        let identity: Identity = serde_json::from_value(body)?;
        debug!(
            "identity for {} lists {} station(s)",
            self.credentials.username,
            identity.stations.len()
        );
        Ok(identity)
    }

    /// Submits a daily report. `observation_time` defaults to the moment of
    /// the call.
    pub fn new_report(
        &self,
        station: &str,
        precipitation: Precipitation,
        observation_time: Option<NaiveDateTime>,
    ) -> Result<ReportOutcome> {
        let entered_at = Local::now().naive_local();
        let observation = Observation::new(station, precipitation, observation_time, entered_at);
        self.submit(&observation)
    }

    /// Submits a prepared observation.
    pub fn submit(&self, observation: &Observation) -> Result<ReportOutcome> {
        debug!(
            "reporting {} for station {} observed {}",
            observation.precipitation, observation.station_number, observation.observation_time
        );
        let body = self.request(Request::post(REPORT_PATH).with_form(observation.to_form()))?;
        ReportOutcome::from_value(&body)
    }
}
