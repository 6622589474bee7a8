//! Notifications Data

use serde::{Deserialize, Serialize};

/// Notification Kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    LowStock,
    Order,
    NewOrder,
    #[default]
    Other,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowStock => "low_stock",
            Self::Order => "order",
            Self::NewOrder => "new_order",
            Self::Other => "other",
        }
    }

    /// Column values are written by this crate only, but unknown values fall
    /// back to `Other` rather than failing the row decode.
    #[must_use]
    pub fn from_db(value: &str) -> Self {
        match value {
            "low_stock" => Self::LowStock,
            "order" => Self::Order,
            "new_order" => Self::NewOrder,
            _ => Self::Other,
        }
    }
}

/// New Notification Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_db_strings() {
        for kind in [
            NotificationKind::LowStock,
            NotificationKind::Order,
            NotificationKind::NewOrder,
            NotificationKind::Other,
        ] {
            assert_eq!(NotificationKind::from_db(kind.as_str()), kind);
        }
    }

    #[test]
    fn unknown_kind_decodes_as_other() {
        assert_eq!(NotificationKind::from_db("promo"), NotificationKind::Other);
    }
}
