//! # Control State Machine
//!
//! Menu selection parsing and the run state of the operator loop. Kept
//! free of I/O so the loop's transitions are testable without a console:
//! the app layer reads lines, parses them here, dispatches to the
//! warehouse, and feeds fatal errors back through [`ControlState`].

use crate::types::{ObjectId, QvaultError};

/// One operator menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    /// 1 — spawn a random object.
    AddObject,
    /// 2 — list every object's status report.
    ListInventory,
    /// 3 — analyze an object by identifier.
    AnalyzeObject,
    /// 4 — apply emergency cooling by identifier.
    EmergencyCooling,
    /// 5 — end the shift.
    Exit,
}

impl MenuSelection {
    /// Parse an operator input line. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`QvaultError::InvalidSelection`] for anything other than
    /// the digits 1 through 5.
    pub fn parse(input: &str) -> Result<Self, QvaultError> {
        match input.trim() {
            "1" => Ok(Self::AddObject),
            "2" => Ok(Self::ListInventory),
            "3" => Ok(Self::AnalyzeObject),
            "4" => Ok(Self::EmergencyCooling),
            "5" => Ok(Self::Exit),
            other => Err(QvaultError::InvalidSelection(other.to_string())),
        }
    }
}

/// Run state of the control loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlState {
    /// The loop keeps prompting.
    Running,
    /// Operator selected exit; farewell banner.
    TerminatedNormal,
    /// An object collapsed; catastrophe banner naming the object.
    TerminatedCollapse(ObjectId),
}

impl ControlState {
    /// True while the loop should keep prompting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Transition taken after an operation failed. Fatal errors terminate
    /// the run; recoverable ones leave the loop running.
    #[must_use]
    pub fn after_error(self, error: &QvaultError) -> Self {
        match error {
            QvaultError::Collapse { id, .. } => Self::TerminatedCollapse(id.clone()),
            _ => self,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
