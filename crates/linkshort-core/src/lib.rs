//! Core types and traits for the linkshort URL shortener.
//!
//! This crate provides the types shared by the generator, the storage
//! backend and the shortener service.

pub mod error;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError, StorageError};
pub use shortcode::{ShortCode, ALPHABET, CODE_LENGTH};
pub use shortener::{Registration, Shortener};
