//! bountiful - layered resolution of bounty pools and decrees.
//!
//! Several namespaces may ship a file with the same name. A resolution pass
//! folds those layers in namespace priority order, drops the entries that fail
//! validation and publishes one value per file name into a [`Registry`].
//!
//! [`Registry`]: registry::Registry

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod decode;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod lint;
pub mod registry;
pub mod source;


pub use error::{BountifulError, DecodeError, KindMismatch, Result};
