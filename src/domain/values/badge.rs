use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named classifications attached to events. Each badge is recomputed on
/// every classification pass; presence means the event currently satisfies
/// the corresponding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    TopRated,
    PopularChoice,
    FastSelling,
    JustAnnounced,
    LimitedSeats,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::TopRated => write!(f, "top_rated"),
            Badge::PopularChoice => write!(f, "popular_choice"),
            Badge::FastSelling => write!(f, "fast_selling"),
            Badge::JustAnnounced => write!(f, "just_announced"),
            Badge::LimitedSeats => write!(f, "limited_seats"),
        }
    }
}

impl FromStr for Badge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top_rated" => Ok(Badge::TopRated),
            "popular_choice" => Ok(Badge::PopularChoice),
            "fast_selling" => Ok(Badge::FastSelling),
            "just_announced" => Ok(Badge::JustAnnounced),
            "limited_seats" => Ok(Badge::LimitedSeats),
            _ => Err(format!("Unknown badge: {s}")),
        }
    }
}
