//! # qvault-core
//!
//! The deterministic warehouse engine for Qvault - THE LOGIC.
//!
//! This crate implements the CORE of the quantum-warehouse simulation:
//! the fixed object taxonomy, the stability envelope, the ordered
//! inventory, the operation facade, and the control state machine.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is the ONLY place where warehouse state exists (stateful)
//! - Performs no I/O; operations return reports for the app layer
//! - Draws no entropy; randomness enters through the `RandomSource` trait
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod control;
pub mod inventory;
pub mod object;
pub mod rng;
pub mod types;
pub mod warehouse;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{
    DangerLevel, MAX_DANGER, MAX_STABILITY, MIN_DANGER, ObjectId, QvaultError, Stability,
};

// =============================================================================
// RE-EXPORTS: Object Model & Inventory
// =============================================================================

pub use inventory::Inventory;
pub use object::{AnalysisReport, COOLING_BOOST, ObjectKind, QuantumObject};

// =============================================================================
// RE-EXPORTS: Operations & Control
// =============================================================================

pub use control::{ControlState, MenuSelection};
pub use rng::{MAX_SPAWN_STABILITY, MIN_SPAWN_STABILITY, RandomSource, ScriptedRandom};
pub use warehouse::{AnalysisOutcome, CoolingReport, SpawnReport, Warehouse};
