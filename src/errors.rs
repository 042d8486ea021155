// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error taxonomy for request construction and backend communication.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Origin or destination has not been resolved to a coordinate yet.
    /// The caller must not issue a network call and should surface a
    /// "pick a location" state instead.
    #[error("origin or destination is not resolved to a coordinate")]
    MissingLocation,

    /// The configured backend endpoint does not form a valid URL.
    #[error("failed to build routing request URL: {0}")]
    RequestUrl(#[from] url::ParseError),

    /// Transport-level or HTTP-level failure talking to the backend.
    #[error("routing backend request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Constraint tree serialization failed. The wire types form a closed
    /// set, so hitting this is a programmer error, not user-recoverable.
    #[error("constraint serialization failed: {0}")]
    ConstraintEncoding(#[from] serde_json::Error),
}
