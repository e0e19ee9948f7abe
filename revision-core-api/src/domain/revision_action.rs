use serde::{Deserialize, Serialize};

/// Kind of mutation a revision row records.
///
/// The numeric codes are what the persistence layer stores. Codes outside
/// `1..=5` are kept as raw integers on the model and render as an unknown
/// revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevisionAction {
    /// Initial population of an entity
    Create,
    /// Initial population of a single field value
    Insert,
    /// Change of a single field value
    Update,
    /// Removal of a single field value
    Delete,
    /// Removal of the whole entity
    Remove,
}

impl RevisionAction {
    pub const ALL: [RevisionAction; 5] = [
        RevisionAction::Create,
        RevisionAction::Insert,
        RevisionAction::Update,
        RevisionAction::Delete,
        RevisionAction::Remove,
    ];

    pub fn code(self) -> i16 {
        match self {
            RevisionAction::Create => 1,
            RevisionAction::Insert => 2,
            RevisionAction::Update => 3,
            RevisionAction::Delete => 4,
            RevisionAction::Remove => 5,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(RevisionAction::Create),
            2 => Some(RevisionAction::Insert),
            3 => Some(RevisionAction::Update),
            4 => Some(RevisionAction::Delete),
            5 => Some(RevisionAction::Remove),
            _ => None,
        }
    }

    /// Past-tense verb used in revision summaries
    pub fn label(self) -> &'static str {
        match self {
            RevisionAction::Create => "created",
            RevisionAction::Insert => "inserted",
            RevisionAction::Update => "changed",
            RevisionAction::Delete => "deleted",
            RevisionAction::Remove => "removed",
        }
    }
}

impl From<RevisionAction> for &str {
    fn from(val: RevisionAction) -> Self {
        val.label()
    }
}

impl From<RevisionAction> for i16 {
    fn from(val: RevisionAction) -> Self {
        val.code()
    }
}

impl TryFrom<i16> for RevisionAction {
    type Error = i16;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        RevisionAction::from_code(code).ok_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_fixed() {
        let labels: Vec<&str> = RevisionAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["created", "inserted", "changed", "deleted", "removed"]);
    }

    #[test]
    fn test_codes_map_back() {
        for action in RevisionAction::ALL {
            assert_eq!(RevisionAction::from_code(action.code()), Some(action));
        }
        assert_eq!(RevisionAction::from_code(0), None);
        assert_eq!(RevisionAction::try_from(42i16), Err(42));
    }
}
