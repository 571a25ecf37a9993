//! Task type enum as the single source of truth for task type strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of localization work an entry can be booked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    Translation,
    Review,
    Qa,
    DesktopPublishing,
    Voiceover,
    Subtitle,
    Other,
}

impl TaskType {
    pub const ALL: [Self; 7] = [
        Self::Translation,
        Self::Review,
        Self::Qa,
        Self::DesktopPublishing,
        Self::Voiceover,
        Self::Subtitle,
        Self::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Review => "review",
            Self::Qa => "qa",
            Self::DesktopPublishing => "desktop_publishing",
            Self::Voiceover => "voiceover",
            Self::Subtitle => "subtitle",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = UnknownTaskType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|task| task.as_str() == s)
            .ok_or_else(|| UnknownTaskType(s.to_string()))
    }
}

impl Serialize for TaskType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown task type strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTaskType(String);

impl fmt::Display for UnknownTaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<_> = TaskType::ALL.iter().map(|t| t.as_str()).collect();
        write!(
            f,
            "unknown task type: {} (expected one of: {})",
            self.0,
            expected.join(", ")
        )
    }
}

impl std::error::Error for UnknownTaskType {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_variants() {
        for variant in TaskType::ALL {
            let s = variant.to_string();
            let parsed: TaskType = s.parse().expect("should parse");
            assert_eq!(parsed, variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn unknown_type_errors() {
        let err = "proofreading".parse::<TaskType>().unwrap_err();
        assert!(
            err.to_string()
                .starts_with("unknown task type: proofreading (expected one of: translation,")
        );
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Translation".parse::<TaskType>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_strings() {
        let json = serde_json::to_string(&TaskType::DesktopPublishing).unwrap();
        assert_eq!(json, "\"desktop_publishing\"");
        let parsed: TaskType = serde_json::from_str("\"voiceover\"").unwrap();
        assert_eq!(parsed, TaskType::Voiceover);
    }
}
