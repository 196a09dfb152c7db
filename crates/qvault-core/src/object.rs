//! # Quantum Object Model
//!
//! The three object kinds held by the warehouse, their fixed construction
//! parameters, and the two mutations the control loop can apply:
//! analysis (destabilizing) and emergency cooling (restorative).
//!
//! | Kind       | Danger | Analyze decrement | Cooling capability |
//! |------------|--------|-------------------|--------------------|
//! | DataPacket | 2      | 5.0               | no                 |
//! | DarkMatter | 7      | 15.0              | yes                |
//! | AntiMatter | 10     | 25.0              | yes                |

use crate::types::{DangerLevel, ObjectId, QvaultError, Stability};
use serde::{Deserialize, Serialize};

// =============================================================================
// FIXED PARAMETERS
// =============================================================================

/// Stability restored by one emergency cooling pass.
pub const COOLING_BOOST: f64 = 50.0;

// =============================================================================
// OBJECT KIND
// =============================================================================

/// The fixed taxonomy of warehouse objects.
///
/// The kind is set at construction and determines the danger rating, the
/// per-analysis stability decrement, and whether the object carries the
/// emergency-cooling capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Inert data payload. Safe to handle.
    DataPacket,
    /// Contained dark matter. Dangerous; coolable.
    DarkMatter,
    /// Contained anti matter. Very dangerous; coolable.
    AntiMatter,
}

impl ObjectKind {
    /// Every kind, in taxonomy order. Used by random spawning.
    pub const ALL: [ObjectKind; 3] = [
        ObjectKind::DataPacket,
        ObjectKind::DarkMatter,
        ObjectKind::AntiMatter,
    ];

    /// Get the kind's display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::DataPacket => "DataPacket",
            ObjectKind::DarkMatter => "DarkMatter",
            ObjectKind::AntiMatter => "AntiMatter",
        }
    }

    /// Fixed danger rating for this kind.
    #[must_use]
    pub fn danger_level(self) -> DangerLevel {
        match self {
            ObjectKind::DataPacket => DangerLevel::new(2),
            ObjectKind::DarkMatter => DangerLevel::new(7),
            ObjectKind::AntiMatter => DangerLevel::new(10),
        }
    }

    /// Stability lost on each analysis pass.
    #[must_use]
    pub fn analyze_decrement(self) -> f64 {
        match self {
            ObjectKind::DataPacket => 5.0,
            ObjectKind::DarkMatter => 15.0,
            ObjectKind::AntiMatter => 25.0,
        }
    }

    /// Whether this kind carries the emergency-cooling capability.
    #[must_use]
    pub fn supports_cooling(self) -> bool {
        match self {
            ObjectKind::DataPacket => false,
            ObjectKind::DarkMatter | ObjectKind::AntiMatter => true,
        }
    }

    /// Safety annotation shown in status reports.
    #[must_use]
    pub fn safety_annotation(self) -> &'static str {
        match self {
            ObjectKind::DataPacket => "Safe",
            ObjectKind::DarkMatter => "Dangerous",
            ObjectKind::AntiMatter => "Very Dangerous",
        }
    }

    /// Narration line emitted while this kind is analyzed.
    #[must_use]
    pub fn analysis_narration(self) -> &'static str {
        match self {
            ObjectKind::DataPacket => "Data contents read.",
            ObjectKind::DarkMatter => "Analyzing dark matter... proceed with caution!",
            ObjectKind::AntiMatter => "WARNING: THE FABRIC OF THE UNIVERSE TREMBLES...",
        }
    }

    /// Narration line for a successful cooling pass. The incapable kind
    /// is rejected before this is ever read.
    #[must_use]
    pub fn cooling_narration(self) -> &'static str {
        match self {
            ObjectKind::DataPacket | ObjectKind::DarkMatter => "Emergency cooling applied!",
            ObjectKind::AntiMatter => "EMERGENCY cooling applied!",
        }
    }
}

// =============================================================================
// ANALYSIS REPORT
// =============================================================================

/// Outcome of a successful (non-collapsing) analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Kind-specific narration line for the operator console.
    pub narration: &'static str,
    /// Stability after the decrement was applied.
    pub stability: f64,
}

// =============================================================================
// QUANTUM OBJECT
// =============================================================================

/// A single warehouse object: identity, kind, stability, danger rating.
///
/// Objects are created only by the warehouse spawner and never removed;
/// a collapse terminates the whole run, so there is no deletion path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumObject {
    id: ObjectId,
    kind: ObjectKind,
    stability: Stability,
    danger: DangerLevel,
}

impl QuantumObject {
    /// Create a new object of the given kind. Danger level is fixed by the
    /// kind; initial stability passes through the envelope clamp.
    #[must_use]
    pub fn new(id: ObjectId, kind: ObjectKind, stability: f64) -> Self {
        Self {
            id,
            kind,
            stability: Stability::new(stability),
            danger: kind.danger_level(),
        }
    }

    /// The object's identifier.
    #[must_use]
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    /// The object's kind.
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Current stability percentage.
    #[must_use]
    pub fn stability(&self) -> f64 {
        self.stability.value()
    }

    /// Danger rating, out of 10.
    #[must_use]
    pub fn danger_level(&self) -> DangerLevel {
        self.danger
    }

    /// Analyze the object: apply the kind's stability decrement, then run
    /// the collapse check.
    ///
    /// # Errors
    ///
    /// Returns [`QvaultError::Collapse`] iff the resulting stability is at
    /// or below zero. The depleted value stays stored; the caller is
    /// expected to terminate the run. The error carries the narration
    /// line, so the fatal analysis is still narrated.
    pub fn analyze(&mut self) -> Result<AnalysisReport, QvaultError> {
        self.stability.shift(-self.kind.analyze_decrement());
        if self.stability.is_depleted() {
            return Err(QvaultError::Collapse {
                id: self.id.clone(),
                narration: self.kind.analysis_narration(),
            });
        }
        Ok(AnalysisReport {
            narration: self.kind.analysis_narration(),
            stability: self.stability.value(),
        })
    }

    /// Apply emergency cooling: +50 stability through the envelope clamp.
    ///
    /// No collapse check runs here; cooling goes through the same clamped
    /// setter as analysis, and the check belongs to the analysis path.
    ///
    /// # Errors
    ///
    /// Returns [`QvaultError::CoolingUnsupported`] before any mutation if
    /// the kind lacks the capability.
    pub fn emergency_cooling(&mut self) -> Result<f64, QvaultError> {
        if !self.kind.supports_cooling() {
            return Err(QvaultError::CoolingUnsupported(self.id.clone()));
        }
        self.stability.shift(COOLING_BOOST);
        Ok(self.stability.value())
    }

    /// One-line status report: identifier, stability to one decimal,
    /// danger rating, kind annotation.
    #[must_use]
    pub fn status_report(&self) -> String {
        format!(
            "[{}] Stability: {:.1}% | Danger: {}/10 [{} - {}]",
            self.id,
            self.stability.value(),
            self.danger.value(),
            self.kind.name(),
            self.kind.safety_annotation()
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn object(kind: ObjectKind, stability: f64) -> QuantumObject {
        QuantumObject::new(ObjectId::from_serial(1), kind, stability)
    }

    #[test]
    fn kind_parameters_match_taxonomy() {
        assert_eq!(ObjectKind::DataPacket.danger_level().value(), 2);
        assert_eq!(ObjectKind::DarkMatter.danger_level().value(), 7);
        assert_eq!(ObjectKind::AntiMatter.danger_level().value(), 10);

        assert_eq!(ObjectKind::DataPacket.analyze_decrement(), 5.0);
        assert_eq!(ObjectKind::DarkMatter.analyze_decrement(), 15.0);
        assert_eq!(ObjectKind::AntiMatter.analyze_decrement(), 25.0);

        assert!(!ObjectKind::DataPacket.supports_cooling());
        assert!(ObjectKind::DarkMatter.supports_cooling());
        assert!(ObjectKind::AntiMatter.supports_cooling());
    }

    #[test]
    fn analyze_applies_exact_decrement() {
        let mut obj = object(ObjectKind::DarkMatter, 80.0);
        let report = obj.analyze().expect("no collapse at 65");
        assert_eq!(report.stability, 65.0);
        assert_eq!(obj.stability(), 65.0);
    }

    #[test]
    fn analyze_collapses_at_or_below_zero() {
        let mut obj = object(ObjectKind::AntiMatter, 25.0);
        let err = obj.analyze().expect_err("exactly zero collapses");
        assert!(matches!(
            err,
            QvaultError::Collapse { ref id, .. } if id.as_str() == "QN-0001"
        ));
        assert_eq!(obj.stability(), 0.0);
    }

    #[test]
    fn collapse_still_carries_the_kind_narration() {
        let mut obj = object(ObjectKind::DarkMatter, 10.0);
        let err = obj.analyze().expect_err("10 - 15 collapses");
        assert!(matches!(
            err,
            QvaultError::Collapse { narration, .. }
                if narration == ObjectKind::DarkMatter.analysis_narration()
        ));
    }

    #[test]
    fn cooling_narration_varies_by_kind() {
        assert_ne!(
            ObjectKind::DarkMatter.cooling_narration(),
            ObjectKind::AntiMatter.cooling_narration()
        );
    }

    #[test]
    fn cooling_adds_fifty_and_clamps() {
        let mut obj = object(ObjectKind::DarkMatter, 70.0);
        let new_stability = obj.emergency_cooling().expect("dark matter is coolable");
        assert_eq!(new_stability, 100.0);
    }

    #[test]
    fn cooling_rejected_before_mutation_on_data_packet() {
        let mut obj = object(ObjectKind::DataPacket, 40.0);
        let err = obj.emergency_cooling().expect_err("data packets lack the capability");
        assert!(matches!(err, QvaultError::CoolingUnsupported(_)));
        assert_eq!(obj.stability(), 40.0);
    }

    #[test]
    fn status_report_formats_one_decimal() {
        let obj = object(ObjectKind::DarkMatter, 87.5);
        assert_eq!(
            obj.status_report(),
            "[QN-0001] Stability: 87.5% | Danger: 7/10 [DarkMatter - Dangerous]"
        );
    }

    #[test]
    fn construction_clamps_excessive_stability() {
        let obj = object(ObjectKind::DataPacket, 250.0);
        assert_eq!(obj.stability(), 100.0);
    }
}
