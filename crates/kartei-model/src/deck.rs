use std::fmt;
use std::path::MAIN_SEPARATOR;

use crate::error::ModelError;

/// A deck name in display form (spaces allowed).
///
/// On disk the deck lives in a directory whose name substitutes underscores
/// for spaces; the mapping is invertible as long as the display form carries
/// no underscores of its own, which is the contract the add operations rely
/// on. Names containing a path separator are rejected outright.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeckName(String);

impl DeckName {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyName);
        }
        if let Some(character) = find_illegal_char(trimmed) {
            return Err(ModelError::IllegalName {
                name: value,
                character,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Reconstructs the display name from a directory name.
    pub fn from_folder(folder: &str) -> Self {
        Self(folder.replace('_', " "))
    }

    /// The storage (directory) form of the name.
    pub fn folder(&self) -> String {
        self.0.replace(' ', "_")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a card name the same way deck names are validated.
pub fn validate_card_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::EmptyName);
    }
    if let Some(character) = find_illegal_char(name) {
        return Err(ModelError::IllegalName {
            name: name.to_string(),
            character,
        });
    }
    Ok(())
}

fn find_illegal_char(name: &str) -> Option<char> {
    name.chars()
        .find(|&c| c == MAIN_SEPARATOR || c == '/' || c == '\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_folder_forms_round_trip() {
        let deck = DeckName::new("Linear Algebra").unwrap();
        assert_eq!(deck.folder(), "Linear_Algebra");
        assert_eq!(DeckName::from_folder("Linear_Algebra").as_str(), "Linear Algebra");
    }

    #[test]
    fn rejects_path_separators() {
        assert!(DeckName::new("math/extra").is_err());
        assert!(validate_card_name("a\\b").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(DeckName::new("   ").is_err());
    }
}
