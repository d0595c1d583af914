//! Client-side monitor for remotely scheduled background jobs.
//!
//! Polls a remote Jobs/Executions provider at a fixed cadence, reconciles
//! the responses into stable local view state, and drives two coupled views:
//! a live job-status board and an execution/log browser with expandable
//! detail cards.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod settings;
pub mod shutdown;
pub mod sync;
pub mod view;
