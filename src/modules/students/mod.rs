//! Classroom roster feature.
//!
//! - `controller.rs`: HTTP handler
//! - `router.rs`: axum routes
//! - `service.rs`: the [`StudentsStore`](service::StudentsStore) contract
//! - `generator.rs`: deterministic base store
//! - `fault.rs`: fault injecting wrapper
//! - `timing.rs`: latency histogram wrapper

pub mod controller;
pub mod fault;
pub mod generator;
pub mod model;
pub mod router;
pub mod service;
pub mod timing;
