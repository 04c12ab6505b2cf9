//! Client for a personal finance tracker backend. The core is the
//! receipt-scan workflow: signed-url upload, extraction job submission, and
//! fixed-interval status polling, surfaced through pluggable notification
//! and credential ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
