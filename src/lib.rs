//! # Rollcall
//!
//! A single-endpoint axum service that returns fake, deterministic student
//! rosters. It is meant as a target for load tests, so it can randomly
//! return 404s and 500s and add latency on purpose.
//!
//! ## Endpoint
//!
//! `GET /api/classrooms/{classroom_id}/students`
//!
//! | Store outcome       | Response                       |
//! |---------------------|--------------------------------|
//! | roster              | 200, JSON array of students    |
//! | no roster           | 404, empty body                |
//! | retrieval failure   | 500, empty body                |
//!
//! ## Store chain
//!
//! ```text
//! handler
//!   └─ TimedStudentsStore       (student_api_operation_duration_seconds)
//!        └─ FaultInjectingStore (25% 404, 25% 500, 0.5s-2s delay)
//!             └─ GeneratedStudentsStore (seeded by classroom id)
//! ```
//!
//! Both wrappers are optional and wired in [`state::build_store`].
//!
//! ## Environment Variables
//!
//! ```bash
//! PORT=5000
//! FAULT_INJECTION_ENABLED=true
//! FAULT_DELAY_STEP_MS=500
//! OBSERVABILITY_ENABLED=true
//! LOG_FORMAT=compact
//! ```
//!
//! ## Modules
//!
//! - [`docs`]: OpenAPI document
//! - [`logging`]: subscriber setup and request logging middleware
//! - [`metrics`]: Prometheus recorder, HTTP metrics, store histogram
//! - [`modules`]: feature modules (classroom students)
//! - [`router`]: main application router
//! - [`state`]: shared state and store chain wiring
//! - [`utils`]: error type

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

pub use rollcall_config;
pub use rollcall_models;
