use serde::{Deserialize, Serialize};

/// A cross-entity reference resolved by name at read time.
///
/// Names that match nothing in the referenced table serialize as
/// `{"status": "unresolved"}` rather than carrying a placeholder id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reference<T> {
    Resolved(T),
    Unresolved,
}

impl<T> Reference<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl<T> From<Option<T>> for Reference<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Resolved(value),
            None => Self::Unresolved,
        }
    }
}
