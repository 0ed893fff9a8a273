//! Core data model types for phishbuster.
//!
//! A [`Sample`] is one quiz item: a simulated message plus its ground-truth
//! [`Label`] and the clue revealed after the user answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ground truth for a sample, and the choice a user submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Phish,
    Safe,
}

impl Label {
    /// All labels, in display order.
    pub const ALL: [Label; 2] = [Label::Phish, Label::Safe];

    /// The normalized key used in sample files (`"phish"` / `"safe"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Phish => "phish",
            Label::Safe => "safe",
        }
    }

    /// Normalize a raw label cell: trim, lowercase, then match exactly.
    pub fn normalize(raw: &str) -> Option<Label> {
        match raw.trim().to_lowercase().as_str() {
            "phish" => Some(Label::Phish),
            "safe" => Some(Label::Safe),
            _ => None,
        }
    }
}

/// Human-readable form, as shown in feedback ("Phishing" / "Safe").
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Phish => write!(f, "Phishing"),
            Label::Safe => write!(f, "Safe"),
        }
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::normalize(s).ok_or_else(|| format!("unknown label: {}", s.trim()))
    }
}

/// A single quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    /// Displayed sender, e.g. `"IT Support <help@examp1e.com>"`.
    pub sender: String,
    /// Displayed subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// The link as it appears in the message.
    pub link: String,
    /// Whether this message is phishing or safe.
    pub label: Label,
    /// Explanation revealed after answering.
    pub clue: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_normalizes_case_and_whitespace() {
        assert_eq!(Label::normalize("Phish "), Some(Label::Phish));
        assert_eq!(Label::normalize("  SAFE"), Some(Label::Safe));
        assert_eq!(Label::normalize("spam"), None);
        assert_eq!(Label::normalize("phishing"), None);
        assert_eq!(Label::normalize(""), None);
    }

    #[test]
    fn label_display_and_key() {
        assert_eq!(Label::Phish.to_string(), "Phishing");
        assert_eq!(Label::Safe.to_string(), "Safe");
        assert_eq!(Label::Phish.as_str(), "phish");
        assert_eq!("safe".parse::<Label>().unwrap(), Label::Safe);
        assert!("ham".parse::<Label>().is_err());
    }

    #[test]
    fn sample_serializes_label_lowercase() {
        let sample = Sample {
            sender: "a@b.c".into(),
            subject: "Hi".into(),
            body: "Body".into(),
            link: "https://b.c".into(),
            label: Label::Phish,
            clue: "Urgent language".into(),
        };
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["label"], "phish");
        assert_eq!(json["clue"], "Urgent language");
    }
}
