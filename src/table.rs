/// Terminal front-end for one spectator.
///
/// This is the rendering collaborator: it draws whatever `Screen` the
/// session exposes and forwards the spectator's clicks as events. All
/// calls are gated by the current phase, so it never trips a session
/// precondition.
pub struct Table {
    session: Session,
    n_sessions: u32,
}

impl Table {
    pub fn new() -> Self {
        Self::with(Codebook::default())
    }
    pub fn with(codebook: Codebook) -> Self {
        Self {
            session: Session::with(codebook),
            n_sessions: 0,
        }
    }

    pub fn play(&mut self) {
        loop {
            match self.session.phase() {
                Phase::Idle => {
                    if !self.begin_session() {
                        break;
                    }
                }
                Phase::Asking(_) => self.ask_page(),
                Phase::Done(_) => {
                    if !self.end_session() {
                        break;
                    }
                }
            }
        }
    }

    fn begin_session(&mut self) -> bool {
        println!("\n{}\n{}", "-".repeat(21), "FRUIT PUZZLE".bold());
        print!("{}", self.session.screen());
        match self.choose("Ready?", &["Start", "Quit"]) {
            0 => {
                self.session.act(Event::Start);
                true
            }
            _ => false,
        }
    }
    fn ask_page(&mut self) {
        print!("{}", self.session.screen());
        match self.choose("Is your item on this page?", &["Yes", "No"]) {
            0 => self.session.act(Event::Answer(true)),
            _ => self.session.act(Event::Answer(false)),
        }
    }
    fn end_session(&mut self) -> bool {
        let winner = self.session.phase().winner();
        println!("{}", format!("Your item is {}", winner).bright_green());
        log::debug!("standings after session {}:\n{}", self.n_sessions, self.session.scores());
        self.n_sessions += 1;
        match self.choose("Another round?", &["Play again", "Quit"]) {
            0 => {
                self.session.act(Event::Reset);
                true
            }
            _ => false,
        }
    }

    fn choose(&self, prompt: &str, items: &[&str]) -> usize {
        Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(items)
            .default(0)
            .interact()
            .unwrap()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

use crate::catalog::codebook::Codebook;
use crate::session::event::Event;
use crate::session::phase::Phase;
use crate::session::session::Session;
use colored::Colorize;
use dialoguer::Select;
