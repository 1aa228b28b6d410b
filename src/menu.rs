//! Top-level menu state machine
//!
//! The menu owns the statistics for the whole run and dispatches to the
//! games. Every screen except termination ends with an Enter-to-continue
//! pause before the menu is drawn again.

use std::io::{BufRead, Write};

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::console::{Console, Reply};
use crate::consts::MENU_OPTIONS;
use crate::error::Result;
use crate::games::{Opponent, RandomOpponent, play_guessing_game, play_rps_game};
use crate::settings::Settings;
use crate::stats::Statistics;

/// Where the menu loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Guessing,
    Rps,
    Stats,
    /// Terminal state
    Terminated,
}

impl Screen {
    /// Map a main-menu reply to the next screen
    pub fn from_choice(reply: &Reply) -> Option<Self> {
        match reply {
            Reply::Exit => Some(Screen::Terminated),
            Reply::Line(choice) => match choice.as_str() {
                "1" => Some(Screen::Guessing),
                "2" => Some(Screen::Rps),
                "3" => Some(Screen::Stats),
                "4" => Some(Screen::Terminated),
                _ => None,
            },
        }
    }
}

/// The game collection: console, statistics, and randomness for one run
pub struct App<R, W, O = RandomOpponent<Pcg32>> {
    console: Console<R, W>,
    stats: Statistics,
    rng: Pcg32,
    opponent: O,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// App with a random computer opponent seeded from `settings`
    pub fn new(console: Console<R, W>, settings: &Settings) -> Self {
        let mut rng = settings.rng();
        let opponent = RandomOpponent::new(Pcg32::seed_from_u64(rng.random()));
        Self {
            console,
            stats: Statistics::new(),
            rng,
            opponent,
        }
    }
}

impl<R: BufRead, W: Write, O: Opponent> App<R, W, O> {
    pub fn with_opponent(console: Console<R, W>, settings: &Settings, opponent: O) -> Self {
        Self {
            console,
            stats: Statistics::new(),
            rng: settings.rng(),
            opponent,
        }
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user exits. Returns the final statistics.
    pub fn run(&mut self) -> Result<Statistics> {
        self.console
            .say("🎮 Welcome to the Text-Based Games Collection! 🎮")?;

        let mut screen = Screen::MainMenu;
        while screen != Screen::Terminated {
            screen = self.step(screen)?;
        }

        self.farewell()?;
        Ok(self.stats.clone())
    }

    /// Handle one screen and return the next
    pub fn step(&mut self, screen: Screen) -> Result<Screen> {
        match screen {
            Screen::MainMenu => return self.main_menu(),
            Screen::Terminated => return Ok(Screen::Terminated),
            Screen::Guessing => {
                if let Some(attempts) = play_guessing_game(&mut self.console, &mut self.rng)? {
                    self.stats.record_guessing(attempts);
                }
            }
            Screen::Rps => {
                let result = play_rps_game(&mut self.console, &mut self.opponent)?;
                // A 0-0 session is not counted, even if tied rounds were played
                if !result.is_scoreless() {
                    self.stats.record_rps(result);
                }
            }
            Screen::Stats => self.console.say(self.stats.to_string())?,
        }

        log::debug!("{screen:?} finished, games played: {}", self.stats.games_played);
        self.console.pause()?;
        Ok(Screen::MainMenu)
    }

    fn main_menu(&mut self) -> Result<Screen> {
        self.console.banner("           WELCOME TO GAME COLLECTION", 50)?;
        self.console.say("Choose a game to play:")?;
        self.console.say("1. Number Guessing Game")?;
        self.console.say("2. Rock, Paper, Scissors")?;
        self.console.say("3. View Statistics")?;
        self.console.say("4. Exit")?;
        self.console.say("=".repeat(50))?;

        // read_input only returns allowed options or the sentinel
        let reply = self
            .console
            .read_input("Enter your choice (1-4): ", Some(MENU_OPTIONS))?;
        Ok(Screen::from_choice(&reply).unwrap_or(Screen::MainMenu))
    }

    fn farewell(&mut self) -> Result<()> {
        self.console.say("\n👋 Thanks for playing! Goodbye!")?;
        self.console.say(self.stats.to_string())?;
        match serde_json::to_string(&self.stats) {
            Ok(json) => log::debug!("final statistics {json}"),
            Err(e) => log::warn!("could not serialize statistics: {e}"),
        }
        Ok(())
    }
}
