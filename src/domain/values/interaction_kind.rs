use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Order,
    Like,
    Click,
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionKind::Order => write!(f, "order"),
            InteractionKind::Like => write!(f, "like"),
            InteractionKind::Click => write!(f, "click"),
        }
    }
}

impl FromStr for InteractionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "order" => Ok(InteractionKind::Order),
            "like" => Ok(InteractionKind::Like),
            "click" => Ok(InteractionKind::Click),
            _ => Err(format!("Unknown interaction kind: {s}")),
        }
    }
}
