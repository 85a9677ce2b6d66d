//! # LifeDash Core
//!
//! Storage and analytics core for a single-user personal tracker: daily
//! log records (mood, sleep, spending, habit completion, notes) persisted
//! as JSON blobs in a local key-value substrate, pure aggregation over the
//! history, and a pass-through requester that turns recent records into
//! narrative insights via the Gemini API.
//!
//! Rendering lives elsewhere; this crate is the part worth testing.

pub mod config;
pub mod error;
pub mod insights;
pub mod metrics;
pub mod models;
pub mod storage;
pub mod store;

pub use error::{AppError, AppResult};
