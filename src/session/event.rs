/// The three external events a rendering collaborator may forward.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Start,
    Answer(bool),
    Reset,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "START"),
            Self::Answer(true) => write!(f, "YES"),
            Self::Answer(false) => write!(f, "NO"),
            Self::Reset => write!(f, "RESET"),
        }
    }
}

impl TryFrom<&str> for Event {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "START" => Ok(Self::Start),
            "YES" => Ok(Self::Answer(true)),
            "NO" => Ok(Self::Answer(false)),
            "RESET" => Ok(Self::Reset),
            _ => Err("invalid event input"),
        }
    }
}

use serde::Deserialize;
use serde::Serialize;
