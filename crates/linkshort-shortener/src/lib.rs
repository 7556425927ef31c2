//! URL shortener service implementation.
//!
//! This crate provides the shortener service and the interactive command
//! session around it. Core types are re-exported from `linkshort_core`.

pub mod error;
pub mod service;
pub mod session;

pub use error::CommandError;
pub use linkshort_core::{Registration, ShortCode, Shortener, ShortenerError};
pub use service::ShortenerService;
pub use session::{Command, Response, Session};
