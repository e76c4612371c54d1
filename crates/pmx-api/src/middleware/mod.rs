//! # Middleware
//!
//! Request tracing and in-process metrics. Layer order is set in
//! [`crate::app`].

pub mod metrics;
