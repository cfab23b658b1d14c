use std::fmt;
use std::ops::Deref;

use crate::error::{Error, Result};

/// The name of a cursor theme, checked to be usable as a single
/// directory name.
///
/// Theme names come from users and from `index.theme` files written by
/// third parties, and are joined onto search path directories. A name
/// that could escape its search path directory (`..`, `a/b`) is
/// rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeName(String);

impl ThemeName {
    /// Validates `name` and wraps it.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name == "." || name == ".." {
            Some("name refers to a relative directory")
        } else if name.contains('/') || name.contains('\\') {
            Some("name contains a path separator")
        } else if name.contains('\0') {
            Some("name contains a NUL character")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::invalid_theme_name(name, reason)),
            None => Ok(ThemeName(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ThemeName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ThemeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for ThemeName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ThemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ThemeName::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeName;

    #[test]
    fn test_valid_names() {
        for name in &["breeze_cursors", "Adwaita", "DMZ-White", "Bibata Modern Ice"] {
            assert_eq!(ThemeName::new(*name).unwrap().as_str(), *name);
        }
    }

    #[test]
    fn test_rejects_traversal() {
        assert!(ThemeName::new("..").is_err());
        assert!(ThemeName::new(".").is_err());
        assert!(ThemeName::new("../../etc").is_err());
        assert!(ThemeName::new("a/b").is_err());
        assert!(ThemeName::new("a\\b").is_err());
    }

    #[test]
    fn test_rejects_empty_and_nul() {
        assert!(ThemeName::new("").is_err());
        assert!(ThemeName::new("a\0b").is_err());
    }

    #[test]
    fn test_parse() {
        let name: ThemeName = "default".parse().unwrap();
        assert_eq!(name.to_string(), "default");
    }
}
