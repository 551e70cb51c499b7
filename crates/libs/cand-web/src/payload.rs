//! JSON body extractor.
//!
//! Unlike [`axum::Json`], the request's `Content-Type` is not inspected and
//! every failure to read or decode the body is reported as [`Error`], so the
//! client always gets the same payload envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::prelude::*;

/// A request body decoded from JSON into `T`.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let body = Bytes::from_request(req, state).await?;
        Ok(Self(serde_json::from_slice(&body)?))
    }
}
