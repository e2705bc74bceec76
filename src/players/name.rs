use crate::Error;
use serde::Serialize;

/// Normalized, non-empty player name.
/// Leading/trailing whitespace is dropped and interior runs collapse to one space.
/// Comparison stays case-sensitive.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Name {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.split_whitespace().collect::<Vec<_>>().join(" ") {
            name if name.is_empty() => Err(Error::InvalidPlayerName("name cannot be empty")),
            name => Ok(Self(name)),
        }
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        let name = Name::try_from("  Ada \t  Lovelace ").unwrap();
        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[test]
    fn rejects_blank() {
        assert!(Name::try_from("").is_err());
        assert!(Name::try_from(" \n\t ").is_err());
    }

    #[test]
    fn case_sensitive() {
        assert_ne!(Name::try_from("alice").unwrap(), Name::try_from("Alice").unwrap());
    }
}
