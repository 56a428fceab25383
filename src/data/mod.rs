//! The simulated backend: a mock catalog source and the worker that
//! services screen requests with artificial latency.

mod store;
mod worker;

pub use store::{BookStore, LoadError};
pub use worker::{spawn_worker, DataCommand, DataEvent, Delays};
