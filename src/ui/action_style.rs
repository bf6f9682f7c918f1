//! Accent, button label and status chip lookups for the action dialog.
//!
//! Every lookup is total: unrecognized inputs resolve to a neutral default.

use crate::ui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    CheckIn,
    CheckOut,
    Cancel,
    Confirm,
    /// Any other action; resolves to the generic "Complete" styling.
    #[default]
    Complete,
    Other(String),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::CheckIn => "check-in",
            Self::CheckOut => "check-out",
            Self::Cancel => "cancel",
            Self::Confirm => "confirm",
            Self::Complete => "complete",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| match ch {
            '_' | ' ' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

impl From<&str> for ActionType {
    fn from(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "check-in" | "checkin" => Self::CheckIn,
            "check-out" | "checkout" => Self::CheckOut,
            "cancel" => Self::Cancel,
            "confirm" => Self::Confirm,
            "complete" | "" => Self::Complete,
            _ => Self::Other(raw.to_string()),
        }
    }
}

impl From<String> for ActionType {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<ActionType> for String {
    fn from(action: ActionType) -> Self {
        action.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Blue,
    Red,
    Orange,
}

impl Accent {
    pub const DEFAULT: Accent = Accent::Blue;

    pub fn color(self) -> Color {
        match self {
            Self::Green => Color::Green,
            Self::Blue => Color::Blue,
            Self::Red => Color::Red,
            Self::Orange => Color::ORANGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionStyle {
    pub accent: Accent,
    pub submit_label: &'static str,
}

pub fn action_style(action: &ActionType) -> ActionStyle {
    let (accent, submit_label) = match action {
        ActionType::CheckIn => (Accent::Green, "Check-in"),
        ActionType::CheckOut => (Accent::Blue, "Check-out"),
        ActionType::Cancel => (Accent::Red, "Cancel Booking"),
        ActionType::Confirm => (Accent::Orange, "Confirm"),
        ActionType::Complete | ActionType::Other(_) => (Accent::DEFAULT, "Complete"),
    };
    ActionStyle {
        accent,
        submit_label,
    }
}

/// Semantic color of a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Info,
    Error,
    Neutral,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Info => Color::Cyan,
            Self::Error => Color::Red,
            Self::Neutral => Color::DarkGrey,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    Completed,
    Pending,
    InProgress,
    Cancelled,
    CheckedOut,
    Other(String),
}

impl From<&str> for BookingStatus {
    fn from(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "confirmed" => Self::Confirmed,
            "checked-in" => Self::CheckedIn,
            "completed" => Self::Completed,
            "pending" => Self::Pending,
            "in-progress" => Self::InProgress,
            "cancelled" | "canceled" => Self::Cancelled,
            "checked-out" => Self::CheckedOut,
            _ => Self::Other(raw.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChip {
    pub label: String,
    pub tone: Tone,
}

pub fn status_chip(status: &str) -> StatusChip {
    let (label, tone) = match BookingStatus::from(status) {
        BookingStatus::Confirmed => ("Confirmed", Tone::Success),
        BookingStatus::CheckedIn => ("Checked In", Tone::Success),
        BookingStatus::Completed => ("Completed", Tone::Success),
        BookingStatus::Pending => ("Pending", Tone::Warning),
        BookingStatus::InProgress => ("In Progress", Tone::Info),
        BookingStatus::Cancelled => ("Cancelled", Tone::Error),
        BookingStatus::CheckedOut => ("Checked Out", Tone::Neutral),
        BookingStatus::Other(raw) => {
            return StatusChip {
                label: raw,
                tone: Tone::Neutral,
            };
        }
    };
    StatusChip {
        label: label.to_string(),
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::{Accent, ActionType, Tone, action_style, status_chip};

    #[test]
    fn known_actions_map_to_accent_and_label() {
        let cases = [
            ("check-in", Accent::Green, "Check-in"),
            ("check-out", Accent::Blue, "Check-out"),
            ("cancel", Accent::Red, "Cancel Booking"),
            ("confirm", Accent::Orange, "Confirm"),
        ];
        for (raw, accent, label) in cases {
            let style = action_style(&ActionType::from(raw));
            assert_eq!(style.accent, accent, "{raw}");
            assert_eq!(style.submit_label, label, "{raw}");
        }
    }

    #[test]
    fn unknown_action_falls_back_to_default() {
        let action = ActionType::from("unknown");
        assert_eq!(action, ActionType::Other("unknown".to_string()));
        let style = action_style(&action);
        assert_eq!(style.accent, Accent::DEFAULT);
        assert_eq!(style.submit_label, "Complete");
    }

    #[test]
    fn action_tags_accept_underscores_and_case() {
        assert_eq!(ActionType::from("CHECK_IN"), ActionType::CheckIn);
        assert_eq!(ActionType::from("checkout"), ActionType::CheckOut);
    }

    #[test]
    fn confirmed_status_is_success() {
        let chip = status_chip("confirmed");
        assert_eq!(chip.tone, Tone::Success);
        assert_eq!(chip.label, "Confirmed");
    }

    #[test]
    fn status_tones_cover_known_set() {
        assert_eq!(status_chip("checked_in").tone, Tone::Success);
        assert_eq!(status_chip("completed").tone, Tone::Success);
        assert_eq!(status_chip("pending").tone, Tone::Warning);
        assert_eq!(status_chip("in-progress").label, "In Progress");
        assert_eq!(status_chip("in-progress").tone, Tone::Info);
        assert_eq!(status_chip("cancelled").tone, Tone::Error);
        assert_eq!(status_chip("checked-out").tone, Tone::Neutral);
    }

    #[test]
    fn unknown_status_keeps_raw_label() {
        let chip = status_chip("on_hold");
        assert_eq!(chip.label, "on_hold");
        assert_eq!(chip.tone, Tone::Neutral);
    }
}
