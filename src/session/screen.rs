/// What the rendering collaborator should put in front of the spectator.
///
/// A derived, read-only view of the session. Recomputed on demand from the
/// phase and the codebook; nothing here is cached or independently mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Screen {
    /// Idle: show the whole catalog and invite the spectator to pick.
    Cover { catalog: Vec<Item> },
    /// Asking: "is your item on this page?"
    Question {
        page: Page,
        limit: Page,
        candidates: Vec<Item>,
    },
    /// Done: name the item.
    Reveal { winner: Item },
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cover { catalog } => {
                writeln!(f, "Think of one of:")?;
                for row in catalog.chunks(5) {
                    let row = row
                        .iter()
                        .map(|item| format!("{:<12}", item))
                        .collect::<Vec<String>>()
                        .join(" ");
                    writeln!(f, "  {}", row)?;
                }
                Ok(())
            }
            Self::Question {
                page,
                limit,
                candidates,
            } => {
                writeln!(f, "Page {}/{}: is your item here?", page, limit)?;
                for row in candidates.chunks(3) {
                    let row = row
                        .iter()
                        .map(|item| format!("{:<12}", item))
                        .collect::<Vec<String>>()
                        .join(" ");
                    writeln!(f, "  {}", row)?;
                }
                Ok(())
            }
            Self::Reveal { winner } => writeln!(f, "You were thinking of {}", winner),
        }
    }
}

use crate::Page;
use crate::catalog::item::Item;
use serde::Serialize;
