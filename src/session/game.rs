//! The interactive game loop.
//!
//! Each round: taunt and prompt, read the user's pick (re-prompting on bad
//! input), let the computer pick, count down, decide the round, show it,
//! update the score, and ask whether to go again.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::core::{Action, GameError, Result};
use crate::display::{Pacer, QuoteBook, Renderer, SleepPacer};
use crate::players::{parse_selection, ComputerPlayer, RandomComputer};
use crate::rules::{OutcomeEngine, RoundResult};

use super::config::SessionConfig;
use super::score::ScoreTally;

/// One run of the game, from banner to farewell.
///
/// Generic over its I/O, opponent, and pacing so tests can script the user,
/// fix the computer's throws, and skip the pauses.
///
/// ## Example
///
/// ```
/// use std::io::Cursor;
/// use rpsls::core::Action;
/// use rpsls::display::NoDelay;
/// use rpsls::players::ScriptedComputer;
/// use rpsls::session::{Session, SessionConfig};
///
/// let config = SessionConfig::default().with_seed(1);
/// let input = Cursor::new("4\nn\n");
/// let mut output = Vec::new();
///
/// let tally = Session::new(&config, input, &mut output)
///     .unwrap()
///     .with_computer(ScriptedComputer::always(Action::Scissors))
///     .with_pacer(NoDelay)
///     .run()
///     .unwrap();
///
/// assert_eq!(tally.wins, 1);
/// ```
pub struct Session<R, W, C = RandomComputer, P = SleepPacer> {
    engine: OutcomeEngine,
    renderer: Renderer,
    quotes: QuoteBook,
    computer: C,
    pacer: P,
    input: R,
    output: W,
    tally: ScoreTally,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Build a session with a random opponent and real pauses.
    ///
    /// Fails only if the rule tables are inconsistent.
    pub fn new(config: &SessionConfig, input: R, output: W) -> Result<Self> {
        let rng = config.rng();
        info!(seed = rng.seed(), "starting session");

        Ok(Self {
            engine: OutcomeEngine::new()?,
            renderer: Renderer::new(config.show_art, config.delay_secs),
            quotes: QuoteBook::new(rng.for_context("quotes")),
            computer: RandomComputer::new(rng.for_context("computer")),
            pacer: SleepPacer,
            input,
            output,
            tally: ScoreTally::new(),
        })
    }
}

impl<R: BufRead, W: Write, C: ComputerPlayer, P: Pacer> Session<R, W, C, P> {
    /// Replace the opponent.
    pub fn with_computer<C2: ComputerPlayer>(self, computer: C2) -> Session<R, W, C2, P> {
        Session {
            engine: self.engine,
            renderer: self.renderer,
            quotes: self.quotes,
            computer,
            pacer: self.pacer,
            input: self.input,
            output: self.output,
            tally: self.tally,
        }
    }

    /// Replace the pacer.
    pub fn with_pacer<P2: Pacer>(self, pacer: P2) -> Session<R, W, C, P2> {
        Session {
            engine: self.engine,
            renderer: self.renderer,
            quotes: self.quotes,
            computer: self.computer,
            pacer,
            input: self.input,
            output: self.output,
            tally: self.tally,
        }
    }

    /// The pacer, e.g. to inspect a `RecordingPacer` after a run.
    #[must_use]
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Play until the user declines a rematch or input runs out.
    ///
    /// Returns the final score.
    pub fn run(&mut self) -> Result<ScoreTally> {
        self.renderer.banner(&mut self.output)?;

        while let Some(user) = self.read_selection()? {
            let result = self.play_round(user)?;
            self.tally.record(result.verdict);
            self.renderer.score(&mut self.output, &self.tally)?;

            if !self.wants_rematch()? {
                break;
            }
            self.renderer.divider(&mut self.output)?;
        }

        info!(
            wins = self.tally.wins,
            losses = self.tally.losses,
            ties = self.tally.ties,
            "session over"
        );
        self.renderer.farewell(&mut self.output, &self.tally)?;
        Ok(self.tally)
    }

    /// Play one round against the computer with the user's `user` throw.
    pub fn play_round(&mut self, user: Action) -> Result<RoundResult> {
        let computer = self.computer.choose();
        self.renderer.countdown(&mut self.output, &mut self.pacer)?;

        let result = self.engine.determine_outcome(user, computer)?;
        debug!(
            user = %user,
            computer = %computer,
            verdict = ?result.verdict,
            "round decided"
        );

        let quote = self.quotes.reaction(result.verdict);
        self.renderer
            .round(&mut self.output, &mut self.pacer, &result, quote)?;
        Ok(result)
    }

    /// Prompt until a valid selection arrives. `None` at end of input.
    fn read_selection(&mut self) -> Result<Option<Action>> {
        loop {
            let taunt = self.quotes.taunt();
            self.renderer.prompt_selection(&mut self.output, taunt)?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_selection(&line) {
                Ok(action) => return Ok(Some(action)),
                Err(GameError::InvalidSelection(token)) => {
                    warn!(input = %token, "invalid selection");
                    self.renderer.invalid_selection(&mut self.output)?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    fn wants_rematch(&mut self) -> Result<bool> {
        self.renderer.prompt_replay(&mut self.output)?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    /// One line of input, `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a stray
    /// byte reads as an invalid selection instead of ending the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
