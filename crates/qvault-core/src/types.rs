//! # Core Type Definitions
//!
//! This module contains the value types shared by every quantum object:
//! - Object identifiers (`ObjectId`)
//! - The stability envelope (`Stability`)
//! - Danger ratings (`DangerLevel`)
//! - Error types (`QvaultError`)
//!
//! ## Envelope Guarantees
//!
//! All clamping lives here. `Stability` never stores a value above 100;
//! `DangerLevel` never stores a value outside [1, 10]. Values at or below
//! zero stability are stored as-is — the collapse check is the caller's
//! responsibility and runs only after analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// OBJECT IDENTIFIERS
// =============================================================================

/// Unique identifier for a quantum object, format `QN-####`.
///
/// Identifiers are minted from a monotonically increasing serial counter
/// and are never reused, so uniqueness holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(String);

impl ObjectId {
    /// Mint the identifier for the given serial number (zero-padded to 4 digits).
    #[must_use]
    pub fn from_serial(serial: u32) -> Self {
        Self(format!("QN-{serial:04}"))
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against operator-supplied input.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.0.eq_ignore_ascii_case(input)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// STABILITY ENVELOPE
// =============================================================================

/// Upper bound of the stability envelope, in percent.
pub const MAX_STABILITY: f64 = 100.0;

/// Stability percentage of a quantum object.
///
/// Writes clamp to at most [`MAX_STABILITY`]. There is no lower clamp:
/// values at or below zero are stored as-is and signal an armed collapse,
/// checked by [`QuantumObject::analyze`](crate::object::QuantumObject::analyze).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Stability(f64);

impl From<f64> for Stability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Stability> for f64 {
    fn from(stability: Stability) -> Self {
        stability.0
    }
}

impl Stability {
    /// Create a new stability value, clamped to the envelope.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.min(MAX_STABILITY))
    }

    /// Overwrite the stored value through the clamp.
    pub fn set(&mut self, value: f64) {
        self.0 = value.min(MAX_STABILITY);
    }

    /// Add a (possibly negative) delta through the clamp.
    pub fn shift(&mut self, delta: f64) {
        self.set(self.0 + delta);
    }

    /// Get the raw percentage.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// True once stability has reached zero or below.
    #[must_use]
    pub fn is_depleted(self) -> bool {
        self.0 <= 0.0
    }
}

// =============================================================================
// DANGER LEVEL
// =============================================================================

/// Lowest danger rating.
pub const MIN_DANGER: u8 = 1;

/// Highest danger rating.
pub const MAX_DANGER: u8 = 10;

/// Danger rating of a quantum object, always within [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct DangerLevel(u8);

impl From<u8> for DangerLevel {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<DangerLevel> for u8 {
    fn from(level: DangerLevel) -> Self {
        level.0
    }
}

impl DangerLevel {
    /// Create a new danger level, clamped to [1, 10].
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_DANGER, MAX_DANGER))
    }

    /// Get the raw rating.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Qvault system.
///
/// - No silent failures
/// - Use `Result<T, QvaultError>` for fallible operations
/// - Only `Collapse` is fatal; everything else degrades to a printed
///   message and the control loop keeps running
#[derive(Debug, Clone, Error)]
pub enum QvaultError {
    /// An object's stability reached zero or below after analysis.
    /// Unrecoverable: propagates to the outermost control loop. Carries
    /// the kind's narration line so the console can still narrate the
    /// fatal analysis before the catastrophe banner.
    #[error("QUANTUM COLLAPSE! Object {id} detonated")]
    Collapse {
        /// Identifier of the collapsed object.
        id: ObjectId,
        /// Narration line of the analysis that triggered the collapse.
        narration: &'static str,
    },

    /// No object in the inventory matches the requested identifier.
    #[error("No object found with id '{0}'")]
    ObjectNotFound(String),

    /// Cooling was requested on an object whose kind lacks the capability.
    #[error("Object {0} cannot be cooled: not a critical object")]
    CoolingUnsupported(ObjectId),

    /// The operator's menu input was not a recognized selection.
    #[error("Invalid selection '{0}': enter a number between 1 and 5")]
    InvalidSelection(String),
}

impl QvaultError {
    /// True for errors that must terminate the run.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Collapse { .. })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_is_zero_padded() {
        assert_eq!(ObjectId::from_serial(1).as_str(), "QN-0001");
        assert_eq!(ObjectId::from_serial(42).as_str(), "QN-0042");
        assert_eq!(ObjectId::from_serial(12345).as_str(), "QN-12345");
    }

    #[test]
    fn object_id_matches_case_insensitively() {
        let id = ObjectId::from_serial(7);
        assert!(id.matches("qn-0007"));
        assert!(id.matches("QN-0007"));
        assert!(!id.matches("QN-0008"));
    }

    #[test]
    fn stability_clamps_upper_bound_only() {
        let s = Stability::new(140.0);
        assert_eq!(s.value(), 100.0);

        let mut s = Stability::new(10.0);
        s.shift(-25.0);
        assert_eq!(s.value(), -15.0);
        assert!(s.is_depleted());
    }

    #[test]
    fn stability_shift_clamps_after_addition() {
        let mut s = Stability::new(80.0);
        s.shift(50.0);
        assert_eq!(s.value(), 100.0);
    }

    #[test]
    fn danger_level_clamps_both_ends() {
        assert_eq!(DangerLevel::new(0).value(), 1);
        assert_eq!(DangerLevel::new(7).value(), 7);
        assert_eq!(DangerLevel::new(99).value(), 10);
    }

    #[test]
    fn only_collapse_is_fatal() {
        let id = ObjectId::from_serial(1);
        let collapse = QvaultError::Collapse {
            id: id.clone(),
            narration: crate::object::ObjectKind::DarkMatter.analysis_narration(),
        };
        assert!(collapse.is_fatal());
        assert!(!QvaultError::ObjectNotFound("QN-9999".into()).is_fatal());
        assert!(!QvaultError::CoolingUnsupported(id).is_fatal());
        assert!(!QvaultError::InvalidSelection("x".into()).is_fatal());
    }
}
