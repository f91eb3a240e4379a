/// Per-item score accumulators for one session.
///
/// One zeroed entry per catalog item. Scores only ever go up, and only on
/// pages the spectator affirms. The BTreeMap keeps entries in catalog
/// order, which is the order the tie-break relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard(BTreeMap<Item, Score>);

impl Scoreboard {
    pub fn zeroed(catalog: impl Iterator<Item = Item>) -> Self {
        Self(catalog.map(|item| (item, 0)).collect())
    }
    /// Credit only the affected items; untouched entries keep their score.
    pub fn credit(&mut self, items: impl Iterator<Item = Item>, weight: Score) {
        for item in items {
            *self.0.get_mut(&item).expect("item in catalog") += weight;
        }
    }
    pub fn score_of(&self, item: Item) -> Score {
        *self.0.get(&item).expect("item in catalog")
    }
    /// All entries, best first. The sort is stable, so items with equal
    /// scores keep their catalog order.
    pub fn standings(&self) -> Vec<(Item, Score)> {
        let mut standings = self
            .0
            .iter()
            .map(|(item, score)| (*item, *score))
            .collect::<Vec<(Item, Score)>>();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }
    /// The winner: strictly highest score, ties broken by catalog order.
    /// Total over a non-empty catalog, which construction guarantees.
    pub fn leader(&self) -> Item {
        self.standings()
            .first()
            .map(|(item, _)| *item)
            .expect("non-empty catalog")
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (item, score) in self.standings() {
            writeln!(f, "{:<12} {:>4}", item, score)?;
        }
        Ok(())
    }
}

use crate::Score;
use crate::catalog::item::Item;
use serde::Serialize;
use std::collections::BTreeMap;
