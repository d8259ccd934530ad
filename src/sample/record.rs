//! Flat and nested record declarations.

use super::error::SampleError;
use super::text::{string_copy, string_length};
use super::types::{Color, PERSON_NAME_CAPACITY};
use super::vec2::Vec2;

/// A person with a fixed-capacity, NUL-terminated name.
#[repr(C)]
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    /// Name bytes; 63 usable plus the terminator.
    pub name: [u8; PERSON_NAME_CAPACITY],
    pub age: i32,
    pub score: f64,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: [0; PERSON_NAME_CAPACITY],
            age: 0,
            score: 0.0,
        }
    }
}

impl Person {
    /// Create a new person. Names longer than 63 bytes are truncated.
    pub fn new(name: &str, age: i32, score: f64) -> Self {
        let mut person = Self {
            age,
            score,
            ..Self::default()
        };
        person.set_name(name);
        person
    }

    /// Replace the name using a bounded copy.
    pub fn set_name(&mut self, name: &str) {
        self.name = [0; PERSON_NAME_CAPACITY];
        string_copy(Some(&mut self.name[..]), Some(name.as_bytes()), PERSON_NAME_CAPACITY);
    }

    /// Name bytes before the terminator.
    pub fn name(&self) -> &[u8] {
        &self.name[..string_length(Some(&self.name[..]))]
    }

    /// Name as UTF-8. Fails if truncation split a multi-byte character.
    pub fn name_str(&self) -> Result<&str, SampleError> {
        std::str::from_utf8(self.name()).map_err(|_| SampleError::NameNotUtf8)
    }
}

/// A moving, colored entity composed of nested records.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Entity {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_creation() {
        let person = Person::new("Ada", 36, 97.5);
        assert_eq!(person.name(), b"Ada");
        assert_eq!(person.name_str(), Ok("Ada"));
        assert_eq!(person.age, 36);
        assert_eq!(person.score, 97.5);
    }

    #[test]
    fn test_person_name_truncation() {
        let long = "x".repeat(100);
        let person = Person::new(&long, 1, 0.0);
        assert_eq!(person.name().len(), PERSON_NAME_CAPACITY - 1);
        assert_eq!(person.name[PERSON_NAME_CAPACITY - 1], 0);
    }

    #[test]
    fn test_person_rename_clears_old_name() {
        let mut person = Person::new("Margaret", 40, 1.0);
        person.set_name("Al");
        assert_eq!(person.name_str(), Ok("Al"));
        assert!(person.name[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_person_name_split_character() {
        // 62 ASCII bytes then a two-byte character: only its first byte fits
        let name = format!("{}é", "a".repeat(62));
        let person = Person::new(&name, 0, 0.0);
        assert_eq!(person.name().len(), 63);
        assert_eq!(person.name_str(), Err(SampleError::NameNotUtf8));
    }

    #[test]
    fn test_entity_default() {
        let entity = Entity::default();
        assert_eq!(entity.position, Vec2::new(0, 0));
        assert_eq!(entity.color, Color::Red);
    }
}
