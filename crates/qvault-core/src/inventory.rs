//! # Inventory
//!
//! Ordered in-memory store of quantum objects. Insertion order is display
//! order; identifiers are unique by construction (the warehouse serial
//! counter never reuses a value), so lookup returns the first match.

use crate::object::QuantumObject;

/// Ordered collection of quantum objects.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    objects: Vec<QuantumObject>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no objects have been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Append an object. O(1).
    pub fn add(&mut self, object: QuantumObject) {
        self.objects.push(object);
    }

    /// Case-insensitive lookup by identifier. Linear scan, first match.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&QuantumObject> {
        self.objects.iter().find(|obj| obj.id().matches(id))
    }

    /// Mutable variant of [`find_by_id`](Self::find_by_id).
    #[must_use]
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut QuantumObject> {
        self.objects.iter_mut().find(|obj| obj.id().matches(id))
    }

    /// All stored objects, in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[QuantumObject] {
        &self.objects
    }

    /// Status report lines for every object, in insertion order.
    #[must_use]
    pub fn status_reports(&self) -> Vec<String> {
        self.objects.iter().map(QuantumObject::status_report).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectKind;
    use crate::types::ObjectId;

    fn seeded(serial: u32, kind: ObjectKind) -> QuantumObject {
        QuantumObject::new(ObjectId::from_serial(serial), kind, 75.0)
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut inv = Inventory::new();
        inv.add(seeded(1, ObjectKind::DataPacket));
        inv.add(seeded(2, ObjectKind::AntiMatter));
        inv.add(seeded(3, ObjectKind::DarkMatter));

        let reports = inv.status_reports();
        assert_eq!(reports.len(), 3);
        assert!(reports[0].starts_with("[QN-0001]"));
        assert!(reports[1].starts_with("[QN-0002]"));
        assert!(reports[2].starts_with("[QN-0003]"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut inv = Inventory::new();
        inv.add(seeded(1, ObjectKind::DataPacket));

        let lower = inv.find_by_id("qn-0001").expect("lowercase hit");
        assert_eq!(lower.id().as_str(), "QN-0001");
        assert!(inv.find_by_id("QN-0001").is_some());
        assert!(inv.find_by_id("QN-0002").is_none());
    }

    #[test]
    fn empty_inventory_reports_nothing() {
        let inv = Inventory::new();
        assert!(inv.is_empty());
        assert_eq!(inv.len(), 0);
        assert!(inv.status_reports().is_empty());
    }
}
