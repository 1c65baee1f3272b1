//! gina-engine
//!
//! Severe asthma management engine. Pure, synchronous, no I/O of its own.
//!
//! Public API:
//! - `classifier::classify()` — derive clinical flags from an observation
//! - `biologics::score()` — rank eligible biologics against the biomarker profile
//! - `workup::Workup` — the lifecycle state machine and its single transition function
//! - `routing::EntryRouter` — re-entry routing from status to wizard stage
//! - `session::Session` — the per-patient session the UI and storage talk to

pub mod audit;
pub mod biologics;
pub mod classifier;
pub mod error;
pub mod guidance;
pub mod record;
pub mod routing;
pub mod session;
pub mod store;
pub mod workup;

pub use crate::biologics::score;
pub use crate::classifier::classify;
pub use crate::error::EngineError;
pub use crate::record::ConsultationRecord;
pub use crate::routing::EntryRouter;
pub use crate::session::Session;
pub use crate::store::ConsultationStore;
pub use crate::workup::{TransitionOutcome, Workup, WorkupEvent};
