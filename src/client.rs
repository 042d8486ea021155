// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Routing Backend Client
//!
//! Async HTTP client for the OpenTripPlanner-compatible backend. The
//! [`RoutingBackend`] trait is the seam application code programs against,
//! so tests and offline builds can swap in a stub.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::config::BackendConfig;
use crate::errors::PlannerError;
use crate::models::Plan;
use crate::trip::TripRequest;

#[async_trait]
pub trait RoutingBackend: Send + Sync {
    /// Submits one trip request and returns the decoded plan.
    async fn plan_trip(&self, request: &TripRequest) -> Result<Plan, PlannerError>;
}

/// Real backend client on top of `reqwest`.
pub struct OtpClient {
    client: Client,
    config: BackendConfig,
}

impl OtpClient {
    pub fn new(config: BackendConfig) -> Result<Self, PlannerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    /// Full request URL including encoded query parameters.
    ///
    /// Exposed so callers can log or inspect exactly what would be sent.
    pub fn request_url(&self, request: &TripRequest) -> Result<Url, PlannerError> {
        let mut url = self.config.endpoint_url()?;
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in request.query_pairs()? {
                query.append_pair(name, &value);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl RoutingBackend for OtpClient {
    async fn plan_trip(&self, request: &TripRequest) -> Result<Plan, PlannerError> {
        let url = self.request_url(request)?;
        debug!(%url, "requesting trip plan");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let plan: Plan = response.json().await?;

        info!(
            itineraries = plan.itineraries.len(),
            "received trip plan from backend"
        );
        Ok(plan)
    }
}
