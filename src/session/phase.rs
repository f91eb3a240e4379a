/// Where one session stands. Idle before start, Asking while the pages
/// are presented one at a time, Done once a winner has been computed.
#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Asking(Page),
    Done(Item),
}

impl Phase {
    pub fn page(&self) -> Page {
        match self {
            Self::Asking(page) => *page,
            _ => panic!("no page outside of Asking"),
        }
    }
    pub fn winner(&self) -> Item {
        match self {
            Self::Done(item) => *item,
            _ => panic!("no winner before Done"),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "--"),
            Self::Asking(page) => write!(f, "Q{}", page),
            Self::Done(item) => write!(f, "!{}", item),
        }
    }
}

use crate::Page;
use crate::catalog::item::Item;
use serde::Deserialize;
use serde::Serialize;
