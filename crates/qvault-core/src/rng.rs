//! # Random Source Seam
//!
//! The core never draws entropy itself. Spawning asks a [`RandomSource`]
//! for the kind and the initial stability, so the app layer can plug in
//! OS entropy or a seeded generator, and tests can script exact sequences.

use crate::object::ObjectKind;

/// Lowest initial stability a spawned object may receive.
pub const MIN_SPAWN_STABILITY: f64 = 50.0;

/// Highest initial stability a spawned object may receive.
pub const MAX_SPAWN_STABILITY: f64 = 100.0;

/// Source of spawn randomness.
///
/// Implementations must keep `initial_stability` within
/// [`MIN_SPAWN_STABILITY`, `MAX_SPAWN_STABILITY`]; the warehouse routes
/// the value through the envelope clamp regardless.
pub trait RandomSource {
    /// Pick the kind of the next spawned object.
    fn pick_kind(&mut self) -> ObjectKind;

    /// Pick the initial stability of the next spawned object.
    fn initial_stability(&mut self) -> f64;
}

/// Deterministic random source replaying fixed sequences.
///
/// Both sequences cycle once exhausted; empty sequences fall back to a
/// `DataPacket` at 75.0 stability. Intended for tests and scripted runs.
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    kinds: Vec<ObjectKind>,
    stabilities: Vec<f64>,
    kind_cursor: usize,
    stability_cursor: usize,
}

impl ScriptedRandom {
    /// Create a source replaying the given kind and stability sequences.
    #[must_use]
    pub fn new(kinds: Vec<ObjectKind>, stabilities: Vec<f64>) -> Self {
        Self {
            kinds,
            stabilities,
            kind_cursor: 0,
            stability_cursor: 0,
        }
    }

    /// Shorthand for a source that always yields the same spawn.
    #[must_use]
    pub fn constant(kind: ObjectKind, stability: f64) -> Self {
        Self::new(vec![kind], vec![stability])
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_kind(&mut self) -> ObjectKind {
        if self.kinds.is_empty() {
            return ObjectKind::DataPacket;
        }
        let kind = self.kinds[self.kind_cursor % self.kinds.len()];
        self.kind_cursor += 1;
        kind
    }

    fn initial_stability(&mut self) -> f64 {
        if self.stabilities.is_empty() {
            return 75.0;
        }
        let value = self.stabilities[self.stability_cursor % self.stabilities.len()];
        self.stability_cursor += 1;
        value
    }
}

// =============================================================================
// TESTS
// =============================================================================
