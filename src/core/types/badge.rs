use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Rendering hint passed through to the badge collaborator
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeStyle {
    #[default]
    Flat,
    FlatSquare,
    Plastic,
    ForTheBadge,
    Social,
}

impl BadgeStyle {
    /// Comma-separated list of every accepted style name
    pub fn variants() -> String {
        BadgeStyle::iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Whether each URL gets one badge per metric or a single combined badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum BadgeMode {
    #[default]
    Multi,
    Single,
}

impl BadgeMode {
    pub fn from_single_flag(single_badge: bool) -> Self {
        if single_badge {
            BadgeMode::Single
        } else {
            BadgeMode::Multi
        }
    }
}

/// Request for one rendered badge image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    pub label: String,
    pub value: u8,
    pub style: BadgeStyle,
}

/// A rendered badge and where it should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeFile {
    pub path: PathBuf,
    pub contents: String,
}
