/// The encoding table behind the trick.
///
/// Maps every catalog item to the set of question pages it is printed on.
/// The restriction of each item's page-set to the answered pages is what
/// disambiguates the spectator's choice. Fixed at construction, never
/// mutated; the session engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codebook {
    pages: BTreeMap<Item, BTreeSet<Page>>,
    limit: Page,
}

impl Codebook {
    /// The hand-authored 20-item, 14-page table shipped with the game.
    pub const TABLE: [(Item, &'static [Page]); 20] = [
        (Item::Mango, &[1, 2, 5, 8, 11, 13]),
        (Item::Orange, &[2, 3, 6, 9, 12, 14, 8]),
        (Item::Banana, &[1, 4, 6, 7, 9, 14]),
        (Item::Apple, &[3, 5, 8, 9, 11, 13]),
        (Item::Grape, &[2, 3, 4, 6, 9, 10]),
        (Item::Pineapple, &[1, 3, 7, 9, 12, 13]),
        (Item::Cherry, &[1, 2, 5, 8, 11, 10]),
        (Item::Papaya, &[4, 6, 8, 9, 13, 14, 10]),
        (Item::Guava, &[1, 4, 7, 10, 12, 13]),
        (Item::Peach, &[3, 4, 5, 9, 12, 6]),
        (Item::Kiwi, &[3, 6, 7, 10, 14, 13, 5]),
        (Item::Lemon, &[1, 4, 8, 11, 14, 12]),
        (Item::Strawberry, &[2, 3, 5, 7, 12, 13, 14]),
        (Item::Watermelon, &[1, 2, 6, 7, 9, 10]),
        (Item::Blueberry, &[2, 4, 5, 8, 11, 13]),
        (Item::Raspberry, &[1, 3, 6, 9, 10, 12, 11]),
        (Item::Pear, &[1, 4, 5, 7, 8, 11]),
        (Item::Plum, &[3, 8, 7, 10, 13, 14]),
        (Item::Dragonfruit, &[2, 5, 7, 11, 12, 14]),
        (Item::Pomegranate, &[2, 4, 6, 10, 12, 14, 11]),
    ];

    /// Validated construction. Refuses the degenerate configurations that
    /// would leave winner selection undefined: an empty catalog, a zero
    /// page count, an item printed on no page, or a page out of range.
    pub fn try_new(pages: BTreeMap<Item, Vec<Page>>, limit: Page) -> Result<Self> {
        if limit == 0 {
            bail!("codebook must have at least one page");
        }
        if pages.is_empty() {
            bail!("codebook must cover at least one item");
        }
        let pages = pages
            .into_iter()
            .map(|(item, set)| {
                let set = set.into_iter().collect::<BTreeSet<Page>>();
                if set.is_empty() {
                    bail!("{} appears on no page", item);
                }
                match set.iter().find(|p| **p < 1 || **p > limit) {
                    Some(p) => bail!("{} appears on out-of-range page {}", item, p),
                    None => Ok((item, set)),
                }
            })
            .collect::<Result<BTreeMap<Item, BTreeSet<Page>>>>()?;
        Ok(Self { pages, limit })
    }

    /// Parse a codebook from a JSON object of item name -> page array.
    /// The page count is inferred as the largest page mentioned.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        serde_json::from_reader::<_, BTreeMap<Item, Vec<Page>>>(reader)
            .map_err(|e| anyhow::anyhow!(e))?
            .try_into()
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.pages).expect("codebook serializes")
    }

    //
    pub fn limit(&self) -> Page {
        self.limit
    }
    pub fn pages_of(&self, item: Item) -> &BTreeSet<Page> {
        self.pages.get(&item).expect("item in catalog")
    }
    pub fn contains(&self, item: Item) -> bool {
        self.pages.contains_key(&item)
    }
    /// Items in catalog order. This is the tie-break order.
    pub fn catalog(&self) -> impl Iterator<Item = Item> + '_ {
        self.pages.keys().copied()
    }
    /// Items printed on the given page. Recomputed on demand; this view is
    /// never cached, so it cannot drift from the current page.
    pub fn candidates(&self, page: Page) -> Vec<Item> {
        assert!(page >= 1 && page <= self.limit);
        self.catalog()
            .filter(|item| self.pages_of(*item).contains(&page))
            .collect()
    }

    //
    /// Pairs of items with identical page-sets. Such pairs end every
    /// session with equal scores and are separated only by the tie-break.
    pub fn collisions(&self) -> Vec<(Item, Item)> {
        let items = self.catalog().collect::<Vec<Item>>();
        items
            .iter()
            .enumerate()
            .flat_map(|(i, a)| items[i + 1..].iter().map(move |b| (*a, *b)))
            .filter(|(a, b)| self.pages_of(*a) == self.pages_of(*b))
            .collect()
    }
    pub fn is_separating(&self) -> bool {
        self.collisions().is_empty()
    }
    /// Rejection-sample random codebooks until one is collision-free.
    /// Tooling only; the shipped table is never regenerated behind the
    /// caller's back.
    pub fn separating() -> Self {
        loop {
            let codebook = Self::random();
            if codebook.is_separating() {
                return codebook;
            }
            log::trace!("resampling colliding codebook");
        }
    }
}

impl Default for Codebook {
    fn default() -> Self {
        let pages = Self::TABLE
            .iter()
            .map(|(item, set)| (*item, set.to_vec()))
            .collect::<BTreeMap<Item, Vec<Page>>>();
        Self::try_new(pages, crate::PAGES).expect("shipped table is valid")
    }
}

impl TryFrom<BTreeMap<Item, Vec<Page>>> for Codebook {
    type Error = anyhow::Error;
    fn try_from(pages: BTreeMap<Item, Vec<Page>>) -> Result<Self> {
        let limit = pages
            .values()
            .flat_map(|set| set.iter().copied())
            .max()
            .unwrap_or(0);
        Self::try_new(pages, limit)
    }
}

impl Arbitrary for Codebook {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let pages = Item::all()
            .iter()
            .map(|item| {
                let mut set = (1..=crate::PAGES)
                    .filter(|_| rng.random_bool(0.5))
                    .collect::<Vec<Page>>();
                if set.is_empty() {
                    set.push(rng.random_range(1..=crate::PAGES));
                }
                (*item, set)
            })
            .collect::<BTreeMap<Item, Vec<Page>>>();
        Self::try_new(pages, crate::PAGES).expect("sampled table is valid")
    }
}

impl std::fmt::Display for Codebook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for item in self.catalog() {
            let pages = self
                .pages_of(item)
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(f, "{:<12} {}", item, pages)?;
        }
        Ok(())
    }
}

use crate::Arbitrary;
use crate::Page;
use crate::catalog::item::Item;
use anyhow::Result;
use anyhow::bail;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
