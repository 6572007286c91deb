//! Quadrant identifiers and static display descriptors.
//!
//! # Invariants
//! - There are exactly four quadrants, in fixed display order.
//! - Wire identifiers are kebab-case literals shared with persisted data
//!   and drop-target ids.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Urgency/importance bucket a task belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    /// "Do first". Fallback for records with a missing or unknown quadrant.
    #[default]
    UrgentImportant,
    /// "Schedule".
    NotUrgentImportant,
    /// "Delegate".
    UrgentNotImportant,
    /// "Eliminate".
    NotUrgentNotImportant,
}

impl Quadrant {
    /// All quadrants in board display order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UrgentImportant,
        Quadrant::NotUrgentImportant,
        Quadrant::UrgentNotImportant,
        Quadrant::NotUrgentNotImportant,
    ];

    /// Stable wire identifier, also used as a drop-target id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UrgentImportant => "urgent-important",
            Self::NotUrgentImportant => "not-urgent-important",
            Self::UrgentNotImportant => "urgent-not-important",
            Self::NotUrgentNotImportant => "not-urgent-not-important",
        }
    }

    /// Resolves an exact wire identifier; anything else is `None`.
    pub fn from_id(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|quadrant| quadrant.as_str() == value)
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text does not name one of the four quadrants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownQuadrant(pub String);

impl Display for UnknownQuadrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown quadrant `{}`; expected urgent-important|not-urgent-important|urgent-not-important|not-urgent-not-important",
            self.0
        )
    }
}

impl Error for UnknownQuadrant {}

impl FromStr for Quadrant {
    type Err = UnknownQuadrant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim()).ok_or_else(|| UnknownQuadrant(s.to_string()))
    }
}

/// Static presentation data for one quadrant.
///
/// Titles come from the active locale; styling tokens are fixed class names
/// the UI maps onto its theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantDescriptor {
    pub id: Quadrant,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub color: String,
    pub bg_color: String,
    pub border_color: String,
}

impl QuadrantDescriptor {
    /// Builds the descriptor for `quadrant` with already localized labels.
    pub fn new(quadrant: Quadrant, title: &'static str, subtitle: &'static str) -> Self {
        let id = quadrant.as_str();
        Self {
            id: quadrant,
            title,
            subtitle,
            color: format!("text-quadrant-{id}-foreground"),
            bg_color: format!("bg-quadrant-{id}"),
            border_color: format!("border-quadrant-{id}"),
        }
    }
}
