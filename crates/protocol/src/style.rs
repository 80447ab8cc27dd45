use serde::{Deserialize, Serialize};

pub const HIDDEN_CLASS: &str = "hidden";
pub const RESULT_CARD_CLASS: &str = "result-card";
pub const GRADIENT_ORANGE_CLASS: &str = "gradient-orange";
pub const GRADIENT_GREEN_CLASS: &str = "gradient-green";
pub const GRADIENT_BLUE_CLASS: &str = "gradient-blue";

/// Visual style of the result card, picked from the returned risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStyle {
    Orange,
    Green,
    #[default]
    Blue,
}

impl CardStyle {
    /// Exact, case-sensitive match: only `High` and `Medium` get their own
    /// style, everything else (including a missing level) is `Blue`.
    pub fn for_risk_level(level: Option<&str>) -> Self {
        match level {
            Some("High") => CardStyle::Orange,
            Some("Medium") => CardStyle::Green,
            _ => CardStyle::Blue,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            CardStyle::Orange => GRADIENT_ORANGE_CLASS,
            CardStyle::Green => GRADIENT_GREEN_CLASS,
            CardStyle::Blue => GRADIENT_BLUE_CLASS,
        }
    }
}
