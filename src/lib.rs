//! Daemon wiring for the firewood reminder: daily scheduling, the
//! per-cycle pipeline, and the status page.

pub mod cycle;
pub mod scheduler;
pub mod server;
