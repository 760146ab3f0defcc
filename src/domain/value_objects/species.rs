//! Species Value Object
//!
//! The closed set of animals the shelter accepts. The species tag is also
//! the storage discriminator and the source of the id prefix.

use std::fmt;

/// Supported species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Dog, Species::Cat];

    /// Lower-case name used for storage and display
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }

    /// Parse case-insensitively; `None` for anything but dog or cat.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dog" => Some(Species::Dog),
            "cat" => Some(Species::Cat),
            _ => None,
        }
    }

    pub fn id_prefix(&self) -> char {
        match self {
            Species::Dog => 'd',
            Species::Cat => 'c',
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Id prefix for free-form species input: `d`, `c`, or `u` for unknown.
pub fn id_prefix_for(species: &str) -> char {
    Species::parse(species).map_or('u', |s| s.id_prefix())
}

/// Deterministic id for the animal at 1-based position `index`.
///
/// `generate_id("Dog", 3) == "d3"`, `generate_id("parrot", 1) == "u1"`.
pub fn generate_id(species: &str, index: usize) -> String {
    format!("{}{}", id_prefix_for(species), index)
}
