//! Identifier generation for categories, variables and shortcuts.

use uuid::{Builder, Uuid};

/// Source of fresh identifiers.
///
/// Every identifier is rendered in canonical UUID v4 text form
/// (lowercase, hyphenated 8-4-4-4-12).
pub trait IdGenerator {
    /// Returns a new identifier, distinct from all previously returned ones.
    fn generate(&mut self) -> String;
}

/// Random v4 UUIDs backed by the operating system's randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}

/// Deterministic generator that derives each identifier from a counter.
///
/// Output is still a well-formed v4 UUID, so documents produced with it
/// look exactly like production output.
#[derive(Debug, Default, Clone)]
pub struct SequenceGenerator {
    next: u128,
}

impl SequenceGenerator {
    /// Creates a generator whose first identifier is derived from `start`.
    pub fn starting_at(start: u128) -> Self {
        Self { next: start }
    }
}

impl IdGenerator for SequenceGenerator {
    fn generate(&mut self) -> String {
        let bytes = self.next.to_be_bytes();
        self.next = self.next.wrapping_add(1);
        Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }
}

/// Returns true when `id` is a canonical lowercase v4 UUID.
pub fn is_v4_id(id: &str) -> bool {
    if id.len() != 36 || id.chars().any(|c| c.is_ascii_uppercase()) {
        return false;
    }
    match Uuid::try_parse(id) {
        Ok(uuid) => uuid.get_version_num() == 4 && uuid.get_variant() == uuid::Variant::RFC4122,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_generator_sets_version_bits() {
        let mut ids = SequenceGenerator::default();
        let first = ids.generate();
        let second = ids.generate();

        assert_eq!(first, "00000000-0000-4000-8000-000000000000");
        assert_eq!(second, "00000000-0000-4000-8000-000000000001");
        assert!(is_v4_id(&first));
    }

    #[test]
    fn test_is_v4_id_rejects_other_forms() {
        assert!(!is_v4_id("not-a-uuid"));
        assert!(!is_v4_id("00000000-0000-1000-8000-000000000000"));
        assert!(!is_v4_id("00000000000040008000000000000000"));
        assert!(!is_v4_id("AAAAAAAA-0000-4000-8000-000000000000"));
    }
}
