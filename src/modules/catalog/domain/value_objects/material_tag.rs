use serde::{Deserialize, Serialize};
use specta::Type;
use std::fmt;

/// Material label shown on project cards.
///
/// The declaration order is part of the contract: the hash bucket `0`, `1`,
/// `2` maps to `Bois`, `Acier`, `Béton` respectively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
pub enum MaterialTag {
    #[default]
    Bois,
    Acier,
    #[serde(rename = "Béton")]
    Beton,
}

impl MaterialTag {
    pub const ALL: [MaterialTag; 3] = [MaterialTag::Bois, MaterialTag::Acier, MaterialTag::Beton];

    /// Bucket index to label; indices wrap modulo the label count
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % Self::ALL.len() as u32) as usize]
    }

    pub fn index(&self) -> u32 {
        match self {
            MaterialTag::Bois => 0,
            MaterialTag::Acier => 1,
            MaterialTag::Beton => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialTag::Bois => "Bois",
            MaterialTag::Acier => "Acier",
            MaterialTag::Beton => "Béton",
        }
    }
}

impl fmt::Display for MaterialTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_is_ordered() {
        for (i, tag) in MaterialTag::ALL.iter().enumerate() {
            assert_eq!(tag.index() as usize, i);
            assert_eq!(MaterialTag::from_index(i as u32), *tag);
        }
        assert_eq!(MaterialTag::from_index(4), MaterialTag::Acier);
    }

    #[test]
    fn test_default_is_first_bucket() {
        assert_eq!(MaterialTag::default(), MaterialTag::Bois);
        assert_eq!(MaterialTag::default().index(), 0);
    }

    #[test]
    fn test_beton_keeps_its_accent_on_the_wire() {
        assert_eq!(serde_json::to_string(&MaterialTag::Beton).unwrap(), "\"Béton\"");
        assert_eq!(MaterialTag::Beton.to_string(), "Béton");
    }
}
