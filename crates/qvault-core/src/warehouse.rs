//! # Warehouse
//!
//! High-level operation facade owned by the control loop: spawning with
//! the serial counter, identifier lookup, analysis, and cooling. The
//! warehouse performs no I/O; every operation returns a report for the
//! app layer to render.

use crate::inventory::Inventory;
use crate::object::{ObjectKind, QuantumObject};
use crate::rng::RandomSource;
use crate::types::{ObjectId, QvaultError};

/// Outcome of spawning a new object.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnReport {
    /// Identifier minted for the new object.
    pub id: ObjectId,
    /// Kind the random source picked.
    pub kind: ObjectKind,
    /// Initial stability after the envelope clamp.
    pub stability: f64,
}

/// Outcome of a successful analysis, with the identifier resolved from
/// operator input.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    /// Identifier of the analyzed object.
    pub id: ObjectId,
    /// Kind-specific narration line.
    pub narration: &'static str,
    /// Stability after the decrement.
    pub stability: f64,
}

/// Outcome of a successful emergency-cooling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingReport {
    /// Identifier of the cooled object.
    pub id: ObjectId,
    /// Kind-specific cooling narration line.
    pub narration: &'static str,
    /// Stability after the boost, clamped to the envelope.
    pub stability: f64,
}

/// The warehouse: inventory plus the monotonic serial counter.
///
/// A fresh warehouse is empty with the counter at 1; identifiers are
/// never reused across the life of the run.
#[derive(Debug)]
pub struct Warehouse {
    inventory: Inventory,
    next_serial: u32,
}

impl Default for Warehouse {
    fn default() -> Self {
        Self::new()
    }
}

impl Warehouse {
    /// Create an empty warehouse with the serial counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inventory: Inventory::new(),
            next_serial: 1,
        }
    }

    /// Spawn an object of a specific kind and stability. The identifier is
    /// minted from the serial counter, which advances exactly once.
    pub fn spawn(&mut self, kind: ObjectKind, stability: f64) -> SpawnReport {
        let id = ObjectId::from_serial(self.next_serial);
        self.next_serial += 1;
        let object = QuantumObject::new(id.clone(), kind, stability);
        let stability = object.stability();
        self.inventory.add(object);
        SpawnReport { id, kind, stability }
    }

    /// Spawn an object with kind and initial stability drawn from the
    /// random source.
    pub fn add_random(&mut self, rng: &mut dyn RandomSource) -> SpawnReport {
        let kind = rng.pick_kind();
        let stability = rng.initial_stability();
        self.spawn(kind, stability)
    }

    /// Analyze the object matching `raw_id` (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`QvaultError::ObjectNotFound`] on a lookup miss;
    /// [`QvaultError::Collapse`] when the analysis depletes stability.
    pub fn analyze(&mut self, raw_id: &str) -> Result<AnalysisOutcome, QvaultError> {
        let object = self
            .inventory
            .find_by_id_mut(raw_id)
            .ok_or_else(|| QvaultError::ObjectNotFound(raw_id.to_string()))?;
        let id = object.id().clone();
        let report = object.analyze()?;
        Ok(AnalysisOutcome {
            id,
            narration: report.narration,
            stability: report.stability,
        })
    }

    /// Apply emergency cooling to the object matching `raw_id`.
    ///
    /// # Errors
    ///
    /// [`QvaultError::ObjectNotFound`] on a lookup miss;
    /// [`QvaultError::CoolingUnsupported`] when the kind lacks the
    /// capability (rejected before any mutation).
    pub fn cool(&mut self, raw_id: &str) -> Result<CoolingReport, QvaultError> {
        let object = self
            .inventory
            .find_by_id_mut(raw_id)
            .ok_or_else(|| QvaultError::ObjectNotFound(raw_id.to_string()))?;
        let id = object.id().clone();
        let narration = object.kind().cooling_narration();
        let stability = object.emergency_cooling()?;
        Ok(CoolingReport { id, narration, stability })
    }

    /// Read access to the inventory.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

// =============================================================================
// TESTS
// =============================================================================
