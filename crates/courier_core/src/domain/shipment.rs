use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::input_error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentSize {
    Small,
    Medium,
    Large,
    Bulky,
}

impl ShipmentSize {
    pub const ALL: [ShipmentSize; 4] = [
        ShipmentSize::Small,
        ShipmentSize::Medium,
        ShipmentSize::Large,
        ShipmentSize::Bulky,
    ];

    /// Accepts the display labels ("Small (≤5kg)", "Bulky/Over") as well as
    /// bare names. Only the leading word is looked at.
    pub fn from_label(label: &str) -> Result<Self, InputError> {
        let token = leading_word(label);

        match token.as_str() {
            "small" => Ok(ShipmentSize::Small),
            "medium" => Ok(ShipmentSize::Medium),
            "large" => Ok(ShipmentSize::Large),
            "bulky" | "over" | "oversize" => Ok(ShipmentSize::Bulky),
            _ => Err(InputError::UnknownLabel {
                kind: "size",
                label: label.to_owned(),
            }),
        }
    }

    /// Weight ceiling in kg. Informational only, never enforced.
    pub fn max_weight_kg(&self) -> Option<f64> {
        match self {
            ShipmentSize::Small => Some(5.0),
            ShipmentSize::Medium => Some(20.0),
            ShipmentSize::Large => Some(200.0),
            ShipmentSize::Bulky => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShipmentSize::Small => "Small (≤5kg)",
            ShipmentSize::Medium => "Medium (≤20kg)",
            ShipmentSize::Large => "Large (≤200kg)",
            ShipmentSize::Bulky => "Bulky/Over",
        }
    }
}

impl FromStr for ShipmentSize {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipmentSize::from_label(s)
    }
}

impl Display for ShipmentSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Normal,
    High,
    Critical,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Low,
        Urgency::Normal,
        Urgency::High,
        Urgency::Critical,
    ];

    /// Case insensitive, qualifiers after the leading word are ignored so
    /// "Critical (≤2h)" and "critical-2h" are Critical.
    pub fn from_label(label: &str) -> Result<Self, InputError> {
        let token = leading_word(label);

        match token.as_str() {
            "low" => Ok(Urgency::Low),
            "normal" => Ok(Urgency::Normal),
            "high" => Ok(Urgency::High),
            "critical" => Ok(Urgency::Critical),
            _ => Err(InputError::UnknownLabel {
                kind: "urgency",
                label: label.to_owned(),
            }),
        }
    }

    pub fn is_express(&self) -> bool {
        matches!(self, Urgency::High | Urgency::Critical)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Normal => "Normal",
            Urgency::High => "High",
            Urgency::Critical => "Critical (≤2h)",
        }
    }
}

impl FromStr for Urgency {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::from_label(s)
    }
}

impl Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShipmentSpec {
    pub size: ShipmentSize,
    pub urgency: Urgency,
}

impl ShipmentSpec {
    pub fn new(size: ShipmentSize, urgency: Urgency) -> Self {
        Self { size, urgency }
    }

    pub fn from_labels(size: &str, urgency: &str) -> Result<Self, InputError> {
        Ok(Self {
            size: ShipmentSize::from_label(size)?,
            urgency: Urgency::from_label(urgency)?,
        })
    }
}

/// Lower-cased run of letters at the start of a label.
fn leading_word(label: &str) -> String {
    label
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}
