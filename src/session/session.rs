/// One run of the trick, from start to reveal or reset.
///
/// Owns the only mutable state in the system: the current phase and the
/// scoreboard. Its immutable methods reveal pure functions describing which
/// events may be applied; `act` performs the transition. Drive one `Session`
/// per spectator; there is no shared state between instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    codebook: Codebook,
    phase: Phase,
    scores: Scoreboard,
}

impl Session {
    /// A session over the shipped codebook.
    pub fn new() -> Self {
        Self::with(Codebook::default())
    }
    /// A session over a caller-supplied codebook. `Codebook` construction
    /// is validated, so degenerate configurations never reach this point.
    pub fn with(codebook: Codebook) -> Self {
        let scores = Scoreboard::zeroed(codebook.catalog());
        Self {
            codebook,
            phase: Phase::Idle,
            scores,
        }
    }

    //
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn codebook(&self) -> &Codebook {
        &self.codebook
    }
    pub fn score_of(&self, item: Item) -> Score {
        self.scores.score_of(item)
    }
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }
    /// The view to render for the current phase. Derived on demand.
    pub fn screen(&self) -> Screen {
        match self.phase {
            Phase::Idle => Screen::Cover {
                catalog: self.codebook.catalog().collect(),
            },
            Phase::Asking(page) => Screen::Question {
                page,
                limit: self.codebook.limit(),
                candidates: self.codebook.candidates(page),
            },
            Phase::Done(winner) => Screen::Reveal { winner },
        }
    }

    //
    pub fn legal(&self) -> Vec<Event> {
        let mut options = Vec::new();
        if self.may_start() {
            options.push(Event::Start);
        }
        if self.may_answer() {
            options.push(Event::Answer(true));
            options.push(Event::Answer(false));
        }
        options.push(Event::Reset);
        options
    }
    pub fn is_allowed(&self, event: &Event) -> bool {
        match event {
            Event::Start => self.may_start(),
            Event::Answer(_) => self.may_answer(),
            Event::Reset => true,
        }
    }

    /// Apply an event, pure-functionally.
    pub fn apply(&self, event: Event) -> Self {
        let mut child = self.clone();
        child.act(event);
        child
    }
    /// Apply an event in place. Calling with a disallowed event is a
    /// precondition violation on the collaborator's part; gate with
    /// `is_allowed` or `legal`.
    pub fn act(&mut self, event: Event) {
        assert!(self.is_allowed(&event), "illegal event {}", event);
        log::debug!("{} @ {}", event, self.phase);
        match event {
            Event::Start => self.begin(),
            Event::Answer(yes) => self.advance(yes),
            Event::Reset => self.rewind(),
        }
    }

    //
    fn may_start(&self) -> bool {
        self.phase == Phase::Idle
    }
    fn may_answer(&self) -> bool {
        matches!(self.phase, Phase::Asking(_))
    }

    //
    fn begin(&mut self) {
        self.scores = Scoreboard::zeroed(self.codebook.catalog());
        self.phase = Phase::Asking(1);
    }
    /// On yes, every item printed on the current page is credited by the
    /// uniform page weight; on no, scores are untouched. Either way the
    /// session moves to the next page, or concludes after the last one.
    fn advance(&mut self, yes: bool) {
        let page = self.phase.page();
        if yes {
            let candidates = self.codebook.candidates(page);
            self.scores.credit(candidates.into_iter(), crate::WEIGHT);
        }
        if page < self.codebook.limit() {
            self.phase = Phase::Asking(page + 1);
        } else {
            self.conclude();
        }
    }
    fn rewind(&mut self) {
        self.scores = Scoreboard::zeroed(self.codebook.catalog());
        self.phase = Phase::Idle;
    }
    /// Winner selection runs exactly once, at the Asking -> Done edge.
    fn conclude(&mut self) {
        let winner = self.scores.leader();
        log::info!("concluded with {}", winner);
        self.phase = Phase::Done(winner);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.phase, self.screen())
    }
}

use super::event::Event;
use super::phase::Phase;
use super::scoreboard::Scoreboard;
use super::screen::Screen;
use crate::Score;
use crate::catalog::codebook::Codebook;
use crate::catalog::item::Item;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Two items on disjoint single pages: the smallest codebook that can
    /// tell its items apart.
    fn disjoint() -> Codebook {
        let pages = BTreeMap::from([(Item::Mango, vec![1]), (Item::Orange, vec![2])]);
        Codebook::try_from(pages).unwrap()
    }
    /// Two items sharing the only page: indistinguishable by scoring.
    fn colliding() -> Codebook {
        let pages = BTreeMap::from([(Item::Mango, vec![1]), (Item::Orange, vec![1])]);
        Codebook::try_from(pages).unwrap()
    }

    #[test]
    fn fresh_session() {
        let session = Session::new();
        assert!(session.phase() == Phase::Idle);
        assert!(session.codebook().catalog().all(|i| session.score_of(i) == 0));
        assert!(session.is_allowed(&Event::Start) == true);
        assert!(session.is_allowed(&Event::Answer(true)) == false);
        assert!(session.is_allowed(&Event::Reset) == true);
    }

    #[test]
    fn start_opens_page_one() {
        let session = Session::new().apply(Event::Start);
        assert!(session.phase() == Phase::Asking(1));
        assert!(session.is_allowed(&Event::Start) == false);
        assert!(session.is_allowed(&Event::Answer(false)) == true);
        match session.screen() {
            Screen::Question {
                page,
                limit,
                candidates,
            } => {
                assert!(page == 1);
                assert!(limit == crate::PAGES);
                assert!(candidates == session.codebook().candidates(1));
            }
            _ => panic!("expected a question screen"),
        }
    }

    #[test]
    fn disjoint_pages_identify_the_pick() {
        // catalog {A, B}, pages {1} and {2}: yes then no names A.
        let session = Session::with(disjoint());
        let session = session.apply(Event::Start);
        let session = session.apply(Event::Answer(true));
        assert!(session.score_of(Item::Mango) == crate::WEIGHT);
        assert!(session.score_of(Item::Orange) == 0);
        assert!(session.phase() == Phase::Asking(2));
        let session = session.apply(Event::Answer(false));
        assert!(session.score_of(Item::Mango) == crate::WEIGHT);
        assert!(session.score_of(Item::Orange) == 0);
        assert!(session.phase() == Phase::Done(Item::Mango));
    }

    #[test]
    fn collision_falls_back_to_catalog_order() {
        let session = Session::with(colliding())
            .apply(Event::Start)
            .apply(Event::Answer(true));
        assert!(session.score_of(Item::Mango) == crate::WEIGHT);
        assert!(session.score_of(Item::Orange) == crate::WEIGHT);
        assert!(session.phase() == Phase::Done(Item::Mango));
    }

    #[test]
    fn exactly_limit_answers_terminate() {
        let mut session = Session::new();
        session.act(Event::Start);
        for _ in 0..crate::PAGES {
            assert!(session.is_allowed(&Event::Answer(false)));
            session.act(Event::Answer(false));
        }
        assert!(matches!(session.phase(), Phase::Done(_)));
        assert!(session.is_allowed(&Event::Answer(false)) == false);
    }

    #[test]
    #[should_panic]
    fn answering_past_the_last_page_panics() {
        let mut session = Session::with(disjoint());
        session.act(Event::Start);
        session.act(Event::Answer(false));
        session.act(Event::Answer(false));
        session.act(Event::Answer(false));
    }

    #[test]
    #[should_panic]
    fn answering_while_idle_panics() {
        Session::new().act(Event::Answer(true));
    }

    #[test]
    #[should_panic]
    fn starting_twice_panics() {
        Session::new().apply(Event::Start).act(Event::Start);
    }

    #[test]
    fn scores_are_monotonic() {
        use crate::Arbitrary;
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut session = Session::with(Codebook::random());
        session.act(Event::Start);
        let mut last = session
            .codebook()
            .catalog()
            .map(|i| session.score_of(i))
            .collect::<Vec<Score>>();
        while matches!(session.phase(), Phase::Asking(_)) {
            session.act(Event::Answer(rng.random_bool(0.5)));
            let next = session
                .codebook()
                .catalog()
                .map(|i| session.score_of(i))
                .collect::<Vec<Score>>();
            assert!(last.iter().zip(next.iter()).all(|(a, b)| a <= b));
            last = next;
        }
    }

    #[test]
    fn determinism() {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let answers = (0..crate::PAGES)
            .map(|_| rng.random_bool(0.5))
            .collect::<Vec<bool>>();
        let run = |answers: &[bool]| {
            let mut session = Session::new();
            session.act(Event::Start);
            for yes in answers.iter().copied() {
                session.act(Event::Answer(yes));
            }
            session.phase().winner()
        };
        assert!(run(&answers) == run(&answers));
    }

    #[test]
    fn reset_is_idempotent_and_total() {
        let fresh = Session::new();
        let mut session = Session::new();
        session.act(Event::Start);
        session.act(Event::Answer(true));
        session.act(Event::Reset);
        assert!(session == fresh);
        session.act(Event::Reset);
        assert!(session == fresh);
        let mut done = Session::with(colliding());
        done.act(Event::Start);
        done.act(Event::Answer(true));
        done.act(Event::Reset);
        assert!(done.phase() == Phase::Idle);
        assert!(done.score_of(Item::Mango) == 0);
    }

    #[test]
    fn all_yes_crowns_the_first_heaviest_row() {
        // every page affirmed: scores equal page-set sizes times the weight,
        // so the winner is the earliest item with the largest page-set.
        let mut session = Session::new();
        session.act(Event::Start);
        for _ in 0..crate::PAGES {
            session.act(Event::Answer(true));
        }
        for item in session.codebook().catalog() {
            let pages = session.codebook().pages_of(item).len() as Score;
            assert!(session.score_of(item) == pages * crate::WEIGHT);
        }
        assert!(session.phase() == Phase::Done(Item::Orange));
    }

    #[test]
    fn honest_answers_name_the_pick() {
        // a spectator who actually follows the script is always either
        // named exactly or loses only to a tie earlier in the catalog.
        let codebook = Codebook::default();
        for pick in Item::all().iter().copied() {
            let mut session = Session::with(codebook.clone());
            session.act(Event::Start);
            for page in 1..=codebook.limit() {
                let yes = codebook.pages_of(pick).contains(&page);
                session.act(Event::Answer(yes));
            }
            let winner = session.phase().winner();
            assert!(session.score_of(winner) >= session.score_of(pick));
            if winner != pick {
                assert!(session.score_of(winner) == session.score_of(pick));
                assert!(winner < pick);
            }
        }
    }
}
