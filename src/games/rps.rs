//! Rock, paper, scissors against the computer
//!
//! Rounds repeat until the player declines another round or types the exit
//! sentinel. Scores are per session; the statistics tracker accumulates them.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::console::Console;
use crate::consts::{MOVE_OPTIONS, YES_NO_OPTIONS};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// Parse a normalized move name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Rock beats scissors, scissors beats paper, paper beats rock
    pub fn beats(&self, other: Move) -> bool {
        matches!(
            (*self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }
}

/// Result of one round from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

/// Source of the computer's moves
pub trait Opponent {
    fn choose(&mut self) -> Move;
}

/// Picks uniformly among the three moves
#[derive(Debug, Clone)]
pub struct RandomOpponent<G> {
    rng: G,
}

impl<G: Rng> RandomOpponent<G> {
    pub fn new(rng: G) -> Self {
        Self { rng }
    }
}

impl<G: Rng> Opponent for RandomOpponent<G> {
    fn choose(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}

/// Final tallies of one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RpsResult {
    pub player_wins: u32,
    pub computer_wins: u32,
}

impl RpsResult {
    /// True when neither side won a round (ties only, or exited at once)
    pub fn is_scoreless(&self) -> bool {
        self.player_wins == 0 && self.computer_wins == 0
    }
}

/// One rock-paper-scissors session
#[derive(Debug, Clone)]
pub struct RpsGame {
    player_score: u32,
    computer_score: u32,
    round: u32,
}

impl Default for RpsGame {
    fn default() -> Self {
        Self::new()
    }
}

impl RpsGame {
    pub fn new() -> Self {
        Self {
            player_score: 0,
            computer_score: 0,
            round: 1,
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn result(&self) -> RpsResult {
        RpsResult {
            player_wins: self.player_score,
            computer_wins: self.computer_score,
        }
    }

    /// Score one round and advance the round counter
    pub fn play_round(&mut self, player: Move, computer: Move) -> Outcome {
        let outcome = resolve(player, computer);
        match outcome {
            Outcome::Win => self.player_score += 1,
            Outcome::Loss => self.computer_score += 1,
            Outcome::Tie => {}
        }
        self.round += 1;
        outcome
    }

    pub fn play<R, W, O>(mut self, console: &mut Console<R, W>, opponent: &mut O) -> Result<RpsResult>
    where
        R: BufRead,
        W: Write,
        O: Opponent + ?Sized,
    {
        console.banner("         ROCK, PAPER, SCISSORS", 50)?;
        console.say("Let's play Rock, Paper, Scissors!")?;
        console.say("Rules: Rock beats Scissors, Scissors beats Paper, Paper beats Rock")?;
        console.say("Type 'exit' anytime to return to main menu.\n")?;

        log::info!("rps session started");

        loop {
            console.say(format!("\n--- Round {} ---", self.round))?;
            console.say(format!(
                "Score - You: {} | Computer: {}",
                self.player_score, self.computer_score
            ))?;

            let reply = console.read_input("Choose Rock, Paper, or Scissors: ", Some(MOVE_OPTIONS))?;
            let Some(player) = Move::from_str(reply.as_str()) else {
                break;
            };

            let computer = opponent.choose();
            console.say(format!("\nYou chose: {}", player.title()))?;
            console.say(format!("Computer chose: {}", computer.title()))?;

            let outcome = self.play_round(player, computer);
            log::debug!("round {}: {player:?} vs {computer:?} -> {outcome:?}", self.round - 1);
            console.say(match outcome {
                Outcome::Tie => "It's a tie! 🤝",
                Outcome::Win => "You win this round! 🎉",
                Outcome::Loss => "Computer wins this round! 🤖",
            })?;

            let again = console.read_input("\nPlay another round? (yes/no): ", Some(YES_NO_OPTIONS))?;
            if again.is_exit() || matches!(again.as_str(), "no" | "n") {
                break;
            }
        }

        self.report(console)?;
        Ok(self.result())
    }

    fn report<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say("\n--- Final Score ---")?;
        console.say(format!(
            "You: {} | Computer: {}",
            self.player_score, self.computer_score
        ))?;
        let verdict = match self.player_score.cmp(&self.computer_score) {
            std::cmp::Ordering::Greater => "🏆 You won overall! Great job!",
            std::cmp::Ordering::Less => "🤖 Computer won overall! Better luck next time!",
            std::cmp::Ordering::Equal => "🤝 It's a tie overall! Well played!",
        };
        console.say(verdict)?;
        log::info!(
            "rps session ended {}-{} after {} rounds",
            self.player_score,
            self.computer_score,
            self.round - 1
        );
        Ok(())
    }
}

/// Play one rock-paper-scissors session
pub fn play_rps_game<R, W, O>(console: &mut Console<R, W>, opponent: &mut O) -> Result<RpsResult>
where
    R: BufRead,
    W: Write,
    O: Opponent + ?Sized,
{
    RpsGame::new().play(console, opponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::{HashSet, VecDeque};
    use std::io::Cursor;

    /// Plays a fixed list of moves
    struct Scripted(VecDeque<Move>);

    impl Scripted {
        fn new(moves: &[Move]) -> Self {
            Self(moves.iter().copied().collect())
        }
    }

    impl Opponent for Scripted {
        fn choose(&mut self) -> Move {
            self.0.pop_front().expect("opponent script exhausted")
        }
    }

    fn run(script: &[Move], input: &str) -> (RpsResult, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut opponent = Scripted::new(script);
        let result = play_rps_game(&mut console, &mut opponent).unwrap();
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_resolution_table() {
        use Move::*;
        assert_eq!(resolve(Rock, Scissors), Outcome::Win);
        assert_eq!(resolve(Scissors, Paper), Outcome::Win);
        assert_eq!(resolve(Paper, Rock), Outcome::Win);
        assert_eq!(resolve(Scissors, Rock), Outcome::Loss);
        assert_eq!(resolve(Paper, Scissors), Outcome::Loss);
        assert_eq!(resolve(Rock, Paper), Outcome::Loss);
        for m in Move::ALL {
            assert_eq!(resolve(m, m), Outcome::Tie);
        }
    }

    #[test]
    fn test_move_names_round_trip() {
        for m in Move::ALL {
            assert_eq!(Move::from_str(m.as_str()), Some(m));
            assert!(MOVE_OPTIONS.contains(&m.as_str()));
        }
        assert_eq!(Move::from_str("lizard"), None);
    }

    #[test]
    fn test_tie_leaves_score_unchanged() {
        let mut game = RpsGame::new();
        assert_eq!(game.play_round(Move::Paper, Move::Paper), Outcome::Tie);
        assert_eq!(game.result(), RpsResult::default());
        assert_eq!(game.round(), 2);
    }

    #[test]
    fn test_exit_on_first_move() {
        let (result, out) = run(&[], "exit\n");
        assert_eq!(result, RpsResult::default());
        assert!(result.is_scoreless());
        assert!(out.contains("--- Round 1 ---"));
        assert!(!out.contains("Computer chose"));
        assert!(out.contains("It's a tie overall! Well played!"));
    }

    #[test]
    fn test_multi_round_session() {
        use Move::*;
        let (result, out) = run(
            &[Scissors, Rock, Paper, Rock],
            "rock\ny\nscissors\nYES\nPAPER\ny\n  Paper \nno\n",
        );
        // win, loss, tie, win
        assert_eq!(result, RpsResult { player_wins: 2, computer_wins: 1 });
        assert!(out.contains("--- Round 4 ---"));
        assert!(out.contains("Score - You: 1 | Computer: 1"));
        assert!(out.contains("You chose: Paper"));
        assert!(out.contains("Computer chose: Scissors"));
        assert!(out.contains("You: 2 | Computer: 1"));
        assert!(out.contains("You won overall! Great job!"));
    }

    #[test]
    fn test_invalid_move_and_answer_reprompt() {
        let (result, out) = run(
            &[Move::Paper],
            "lizard\nrock\nmaybe\nn\n",
        );
        assert_eq!(result, RpsResult { player_wins: 0, computer_wins: 1 });
        assert!(out.contains("Invalid input. Please choose from: rock, paper, scissors"));
        assert!(out.contains("Invalid input. Please choose from: yes, y, no, n"));
        assert!(out.contains("Computer won overall!"));
    }

    #[test]
    fn test_exit_at_continue_prompt_keeps_round() {
        let (result, _) = run(&[Move::Scissors], "rock\nexit\n");
        assert_eq!(result, RpsResult { player_wins: 1, computer_wins: 0 });
    }

    #[test]
    fn test_random_opponent_covers_all_moves() {
        let mut opponent = RandomOpponent::new(Pcg32::seed_from_u64(99999));
        let seen: HashSet<Move> = (0..200).map(|_| opponent.choose()).collect();
        assert_eq!(seen.len(), 3);
    }

    fn any_move() -> impl Strategy<Value = Move> {
        prop::sample::select(Move::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_exactly_one_side_wins_unless_equal(a in any_move(), b in any_move()) {
            let forward = resolve(a, b);
            let backward = resolve(b, a);
            match forward {
                Outcome::Tie => prop_assert_eq!(a, b),
                Outcome::Win => prop_assert_eq!(backward, Outcome::Loss),
                Outcome::Loss => prop_assert_eq!(backward, Outcome::Win),
            }
        }
    }
}
