use uuid::Uuid;

/// Produces opaque identifiers for new records.
///
/// Ids are generated once at record creation and never change. The
/// production generator draws from a high-entropy source and performs no
/// uniqueness check; tests use [`fixtures::FixedIds`] to assert exact
/// non-collision.
pub trait IdGenerator {
    fn new_id(&mut self) -> String;
}

/// UUID v4 behind an `id_` prefix so ids are recognizable among the other
/// string fields of a record.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn new_id(&mut self) -> String {
        format!("id_{}", Uuid::new_v4().simple())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::IdGenerator;

    /// Deterministic generator: `id_1`, `id_2`, ...
    #[derive(Debug, Default)]
    pub struct FixedIds {
        next: usize,
    }

    impl FixedIds {
        pub fn new() -> Self {
            Self { next: 0 }
        }
    }

    impl IdGenerator for FixedIds {
        fn new_id(&mut self) -> String {
            self.next += 1;
            format!("id_{}", self.next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_prefixed() {
        let mut ids = RandomIds;
        assert!(ids.new_id().starts_with("id_"));
    }

    #[test]
    fn random_ids_differ_between_calls() {
        let mut ids = RandomIds;
        assert_ne!(ids.new_id(), ids.new_id());
    }

    #[test]
    fn fixed_ids_count_up() {
        let mut ids = fixtures::FixedIds::new();
        assert_eq!(ids.new_id(), "id_1");
        assert_eq!(ids.new_id(), "id_2");
    }
}
