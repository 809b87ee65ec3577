use std::marker::PhantomData;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal errors of the server lifecycle. Any of them ends the process.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("cannot bind `{addr}`: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
#[error("{0}")]
pub struct Logged<T>(pub T);

/// Error response whose body is `{"msg": .., "detail": ..}`, `msg` being decided by the kind `K`.
#[derive(Debug)]
pub struct AppErrorDetail<K, T> {
    pub source: Box<dyn std::error::Error + Send + Sync + 'static>,
    pub status: StatusCode,
    pub inner: AppErrorInner<K, T>,
}
impl<K: kind::Kind, T: Serialize> IntoResponse for AppErrorDetail<K, T> {
    fn into_response(self) -> Response {
        tracing::error!("cause error: {} {}", self.status, self.source);
        (self.status, self.inner).into_response()
    }
}
impl<K, T> AppErrorDetail<K, T> {
    pub fn new<E>(status: StatusCode, source: E, detail: T) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let (source, msg) = (Box::new(source), PhantomData);
        Self { status, source, inner: AppErrorInner { msg, detail } }
    }
}

pub mod kind {
    pub trait Kind {
        fn msg() -> &'static str;
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NotFound {}
    impl Kind for NotFound {
        fn msg() -> &'static str {
            "not found"
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MethodNotAllowed {}
    impl Kind for MethodNotAllowed {
        fn msg() -> &'static str {
            "method not allowed"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppErrorInner<K, T> {
    pub msg: PhantomData<K>,
    pub detail: T,
}
impl<K: kind::Kind, T: Serialize> IntoResponse for AppErrorInner<K, T> {
    fn into_response(self) -> Response {
        Json(ErrorResponseInner::from(self)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseInner<T> {
    pub msg: String,
    pub detail: T,
}
impl<K: kind::Kind, T> From<AppErrorInner<K, T>> for ErrorResponseInner<T> {
    fn from(inner: AppErrorInner<K, T>) -> Self {
        Self { msg: K::msg().to_string(), detail: inner.detail }
    }
}
