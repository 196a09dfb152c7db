//! # Warehouse Scenarios
//!
//! End-to-end runs through the Warehouse facade: the collapse sequence,
//! cooling rejection, the analyze/cool/analyze cycle, and empty listing.

#![allow(clippy::unwrap_used, clippy::panic)]

use qvault_core::{ControlState, ObjectKind, QvaultError, Warehouse};

#[test]
fn dark_matter_collapses_on_second_analysis() {
    let mut warehouse = Warehouse::new();
    let spawn = warehouse.spawn(ObjectKind::DarkMatter, 20.0);
    let id = spawn.id.as_str().to_string();

    // 20 - 15 = 5: no collapse, report shows one decimal.
    let outcome = warehouse.analyze(&id).expect("first analysis survives");
    assert_eq!(outcome.stability, 5.0);
    assert_eq!(format!("{:.1}%", outcome.stability), "5.0%");

    // 5 - 15 = -10: collapse naming the same object, narration intact.
    let err = warehouse.analyze(&id).expect_err("second analysis collapses");
    assert!(err.is_fatal());
    match &err {
        QvaultError::Collapse { id: collapsed, narration } => {
            assert_eq!(collapsed.as_str(), id);
            assert_eq!(*narration, ObjectKind::DarkMatter.analysis_narration());
        }
        other => panic!("expected collapse, got {other:?}"),
    }

    // The control loop transitions to the catastrophe state.
    let state = ControlState::Running.after_error(&err);
    assert_eq!(state, ControlState::TerminatedCollapse(spawn.id));
}

#[test]
fn data_packet_cooling_is_rejected_without_mutation() {
    let mut warehouse = Warehouse::new();
    warehouse.spawn(ObjectKind::DataPacket, 100.0);

    let err = warehouse.cool("QN-0001").expect_err("no cooling capability");
    assert!(matches!(err, QvaultError::CoolingUnsupported(_)));
    assert!(!err.is_fatal());

    let object = warehouse.inventory().find_by_id("QN-0001").expect("object remains");
    assert_eq!(object.stability(), 100.0);
}

#[test]
fn anti_matter_survives_analyze_cool_analyze_cycle() {
    let mut warehouse = Warehouse::new();
    warehouse.spawn(ObjectKind::AntiMatter, 60.0);

    let outcome = warehouse.analyze("QN-0001").expect("60 -> 35");
    assert_eq!(outcome.stability, 35.0);

    let cooled = warehouse.cool("QN-0001").expect("35 -> 85");
    assert_eq!(cooled.stability, 85.0);

    let outcome = warehouse.analyze("QN-0001").expect("85 -> 60, no collapse");
    assert_eq!(outcome.stability, 60.0);
}

#[test]
fn empty_inventory_lists_without_error() {
    let warehouse = Warehouse::new();
    assert!(warehouse.inventory().is_empty());
    assert!(warehouse.inventory().status_reports().is_empty());
}

#[test]
fn unknown_identifier_is_recoverable_for_both_operations() {
    let mut warehouse = Warehouse::new();
    warehouse.spawn(ObjectKind::DarkMatter, 80.0);

    let err = warehouse.analyze("QN-0404").expect_err("analysis miss");
    assert!(matches!(err, QvaultError::ObjectNotFound(_)));
    assert!(ControlState::Running.after_error(&err).is_running());

    let err = warehouse.cool("QN-0404").expect_err("cooling miss");
    assert!(matches!(err, QvaultError::ObjectNotFound(_)));
    assert!(ControlState::Running.after_error(&err).is_running());
}
