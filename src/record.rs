use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The four emotion classes, in class-label index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Others,
    Happy,
    Sad,
    Angry,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 4] = [Self::Others, Self::Happy, Self::Sad, Self::Angry];

    /// The label's name as it appears in split files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Others => "others",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }

    /// The label's integer id within the class label.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a string is not one of the label names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown emotion label '{}'", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for EmotionLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.name() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// One labeled dialogue.
///
/// `text` is the utterance together with its context turns, exactly as stored
/// in the split file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub text: String,
    pub label: EmotionLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_class_label_order() {
        let names: Vec<_> = EmotionLabel::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(names, ["others", "happy", "sad", "angry"]);

        for (i, label) in EmotionLabel::ALL.into_iter().enumerate() {
            assert_eq!(label.index(), i);
            assert_eq!(EmotionLabel::from_index(i), Some(label));
        }
        assert_eq!(EmotionLabel::from_index(4), None);
    }

    #[test]
    fn parses_only_exact_lowercase_names() {
        assert_eq!("sad".parse::<EmotionLabel>(), Ok(EmotionLabel::Sad));
        assert_eq!(
            "Sad".parse::<EmotionLabel>(),
            Err(UnknownLabel("Sad".into()))
        );
        assert!("".parse::<EmotionLabel>().is_err());
    }

    #[test]
    fn record_serializes_label_by_name() {
        let record = Record {
            id: "0".into(),
            text: "hi".into(),
            label: EmotionLabel::Happy,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"0","text":"hi","label":"happy"}"#);
    }
}
