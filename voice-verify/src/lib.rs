pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod telemetry;

use services::{Metrics, Verifier};
use std::sync::Arc;

/// Per-process collaborators handed to every handler. Contains no per-user state.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Verifier,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(verifier: Verifier, metrics: Arc<Metrics>) -> Self {
        Self { verifier, metrics }
    }
}
