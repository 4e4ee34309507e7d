//! Domain Value Objects
//!
//! Immutable value types for the catalog domain.

use serde::{Deserialize, Serialize};

/// Product category - the enumerated set accepted on submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Top,
    Outer,
    Pants,
    Accessory,
}

impl Category {
    /// Parse a submitted category string, case-insensitively.
    ///
    /// Returns `None` for anything outside the enumerated set; the
    /// caller decides the error, so no repository is touched first.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOP" => Some(Category::Top),
            "OUTER" => Some(Category::Outer),
            "PANTS" => Some(Category::Pants),
            "ACCESSORY" => Some(Category::Accessory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "TOP",
            Category::Outer => "OUTER",
            Category::Pants => "PANTS",
            Category::Accessory => "ACCESSORY",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approval lifecycle stage of a product request.
///
/// WAIT is the only non-terminal state; there is no transition out of
/// SUCCESS or FAILED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Wait,
    Success,
    Failed,
}

impl ApprovalStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WAIT" => Some(ApprovalStatus::Wait),
            "SUCCESS" => Some(ApprovalStatus::Success),
            "FAILED" => Some(ApprovalStatus::Failed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Wait => "WAIT",
            ApprovalStatus::Success => "SUCCESS",
            ApprovalStatus::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ApprovalStatus::Wait)
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
