use std::fmt;

use super::AppError;

/// A validated template-set identifier.
///
/// Selects a template bundle directory under the sets root. Guarantees:
/// - Non-empty
/// - Never `.` or `..`
/// - No path separators (/, \)
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
///
/// The constraints exist so set lookup can never resolve outside the
/// sets root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateSetId(String);

impl TemplateSetId {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::InvalidTemplateSetId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid(id: &str) -> bool {
    if id.is_empty() || id == "." || id == ".." {
        return false;
    }
    if id.contains('/') || id.contains('\\') {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_alphanumeric_id() {
        assert!(TemplateSetId::new("e2e").is_ok());
    }

    #[test]
    fn valid_id_with_dashes_and_dots() {
        assert!(TemplateSetId::new("go-module.v2").is_ok());
    }

    #[test]
    fn empty_id_is_invalid() {
        assert!(TemplateSetId::new("").is_err());
    }

    #[test]
    fn slash_in_id_is_invalid() {
        assert!(TemplateSetId::new("nested/set").is_err());
        assert!(TemplateSetId::new("nested\\set").is_err());
    }

    #[test]
    fn dot_and_dot_dot_are_invalid() {
        assert!(TemplateSetId::new(".").is_err());
        assert!(TemplateSetId::new("..").is_err());
    }

    #[test]
    fn space_in_id_is_invalid() {
        assert!(TemplateSetId::new("has space").is_err());
    }

    #[test]
    fn display_impl() {
        let id = TemplateSetId::new("e2e").unwrap();
        assert_eq!(format!("{}", id), "e2e");
    }
}
