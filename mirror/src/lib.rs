//! Reconciles the functions of one OpenFaaS gateway onto another.
//!
//! The source is listed and described in full before the target is touched.
//! Each function is then created on the target when it is missing there, or
//! updated in place when a function with the same name already exists in the
//! same namespace. Nothing on the target is ever deleted.

pub mod gate;
pub mod gateway;
pub mod migrate;
pub mod probe;
pub mod reconcile;

pub use crate::gateway::FunctionGateway;
pub use crate::migrate::migrate;
pub use crate::probe::{probe, Role};
pub use crate::reconcile::{mirror, Lookup, MirrorOptions, Outcome, Verb};
