pub mod app;
pub mod metrics;
pub mod verify;
