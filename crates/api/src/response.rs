//! Shared response envelope types for the dashboard read endpoints.
//!
//! The account and collection endpoints keep the `{ "success": true, ... }`
//! shape the front-end already consumes; read endpoints use [`DataResponse`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
