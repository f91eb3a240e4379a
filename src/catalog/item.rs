/// One fruit the spectator may be thinking of.
///
/// Declaration order is catalog order. The derived Ord follows it, which
/// is what makes BTreeMap iteration and the winner tie-break line up with
/// the catalog without any extra bookkeeping.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Item {
    Mango,
    Orange,
    Banana,
    Apple,
    Grape,
    Pineapple,
    Cherry,
    Papaya,
    Guava,
    Peach,
    Kiwi,
    Lemon,
    Strawberry,
    Watermelon,
    Blueberry,
    Raspberry,
    Pear,
    Plum,
    Dragonfruit,
    Pomegranate,
}

impl Item {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Mango,
            Self::Orange,
            Self::Banana,
            Self::Apple,
            Self::Grape,
            Self::Pineapple,
            Self::Cherry,
            Self::Papaya,
            Self::Guava,
            Self::Peach,
            Self::Kiwi,
            Self::Lemon,
            Self::Strawberry,
            Self::Watermelon,
            Self::Blueberry,
            Self::Raspberry,
            Self::Pear,
            Self::Plum,
            Self::Dragonfruit,
            Self::Pomegranate,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mango => "Mango",
            Self::Orange => "Orange",
            Self::Banana => "Banana",
            Self::Apple => "Apple",
            Self::Grape => "Grape",
            Self::Pineapple => "Pineapple",
            Self::Cherry => "Cherry",
            Self::Papaya => "Papaya",
            Self::Guava => "Guava",
            Self::Peach => "Peach",
            Self::Kiwi => "Kiwi",
            Self::Lemon => "Lemon",
            Self::Strawberry => "Strawberry",
            Self::Watermelon => "Watermelon",
            Self::Blueberry => "Blueberry",
            Self::Raspberry => "Raspberry",
            Self::Pear => "Pear",
            Self::Plum => "Plum",
            Self::Dragonfruit => "Dragonfruit",
            Self::Pomegranate => "Pomegranate",
        }
    }
}

impl Arbitrary for Item {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        *Self::all().choose(rng).expect("non-empty catalog")
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<&str> for Item {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .find(|item| item.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or("no such item in the catalog")
    }
}

use crate::Arbitrary;
use serde::Deserialize;
use serde::Serialize;
