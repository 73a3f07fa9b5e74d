//! Everything the game prints to the terminal.
//!
//! `Renderer` writes to any `io::Write`, so tests capture output in a
//! `Vec<u8>`. It holds no game state; the session passes in whatever
//! should be shown.

use std::io::{self, Write};

use crate::core::Action;
use crate::players::selection_range;
use crate::rules::{RoundResult, Verdict};
use crate::session::ScoreTally;

use super::art;
use super::pacing::{scaled, Pacer};

const WIDTH: usize = 70;

const RULES_RECITAL: &str = "\
Scissors cuts Paper. Paper covers Rock. Rock crushes Lizard.
Lizard poisons Spock. Spock smashes Scissors. Scissors decapitates
Lizard. Lizard eats Paper. Paper disproves Spock. Spock vaporizes
Rock. And as it always has, Rock crushes Scissors!";

const COUNTDOWN: [&str; 5] = ["**Rock**", "**Paper**", "**Scissors**", "**Lizard**", "**Spock**"];

fn rule(ch: char) -> String {
    ch.to_string().repeat(WIDTH)
}

/// Terminal renderer.
#[derive(Clone, Debug)]
pub struct Renderer {
    show_art: bool,
    delay_secs: f64,
}

impl Renderer {
    /// Create a renderer.
    ///
    /// `delay_secs` is the base pause unit; each pause is a fraction of it.
    pub fn new(show_art: bool, delay_secs: f64) -> Self {
        Self {
            show_art,
            delay_secs,
        }
    }

    /// Title banner and rules recital.
    pub fn banner<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", rule('='))?;
        if self.show_art {
            writeln!(out, "{}", art::GAME_TITLE)?;
        } else {
            writeln!(out, "ROCK PAPER SCISSORS LIZARD SPOCK")?;
        }
        writeln!(out, "{}", rule('='))?;
        writeln!(out, "                    As seen on 'The Big Bang Theory'!")?;
        writeln!(out, "\n{}", RULES_RECITAL)?;
        writeln!(out, "{}\n", rule('='))
    }

    /// Taunt plus the selection prompt. Leaves the cursor on the prompt line.
    pub fn prompt_selection<W: Write + ?Sized>(&self, out: &mut W, taunt: &str) -> io::Result<()> {
        writeln!(out, "\n🎮 {}", taunt)?;
        write!(out, "\n👉 Enter your choice ({}): ", Action::menu())?;
        out.flush()
    }

    /// Complaint about an unparseable selection.
    pub fn invalid_selection<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "\n❌ Invalid selection! Enter a value in range {}",
            selection_range()
        )?;
        writeln!(out, "Even Penny knows how to follow simple instructions! 🙄\n")
    }

    /// "Rock... Paper... Scissors... Lizard... Spock... SHOOT!"
    pub fn countdown<W, P>(&self, out: &mut W, pacer: &mut P) -> io::Result<()>
    where
        W: Write + ?Sized,
        P: Pacer + ?Sized,
    {
        for item in COUNTDOWN {
            writeln!(out, "{}", item)?;
            out.flush()?;
            pacer.pause(scaled(self.delay_secs, 0.6));
        }
        writeln!(out, "\n💥 SHOOT! 💥\n")?;
        out.flush()?;
        pacer.pause(scaled(self.delay_secs, 0.5));
        Ok(())
    }

    /// Reveal both throws, then the verdict with its explanation and quip.
    pub fn round<W, P>(
        &self,
        out: &mut W,
        pacer: &mut P,
        result: &RoundResult,
        quote: &str,
    ) -> io::Result<()>
    where
        W: Write + ?Sized,
        P: Pacer + ?Sized,
    {
        self.reveal(out, pacer, "              🧑 YOU CHOSE", result.user)?;
        self.reveal(out, pacer, "           🤖 COMPUTER CHOSE", result.computer)?;

        let explanation = result.explanation.unwrap_or_default().to_uppercase();
        match (result.verdict, result.winner_and_loser()) {
            (Verdict::Win, Some((winner, loser))) => {
                self.battle(out, winner, loser)?;
                writeln!(out, "{}", rule('─'))?;
                writeln!(out, "⚔️  {}! ⚔️", explanation)?;
                writeln!(out, "{}", quote)?;
                writeln!(out, "🎯 {} beats {}! YOU WIN! 🎯", winner, loser)?;
            }
            (Verdict::Loss, Some((winner, loser))) => {
                self.battle(out, winner, loser)?;
                writeln!(out, "{}", rule('─'))?;
                writeln!(out, "💥 {}! 💥", explanation)?;
                writeln!(out, "{}", quote)?;
                writeln!(out, "😢 {} beats {}! YOU LOSE! 😢", winner, loser)?;
            }
            _ => {
                writeln!(out, "\n{}", rule('─'))?;
                if self.show_art {
                    writeln!(out, "{}", art::TIE_SCENE)?;
                }
                writeln!(out, "{}", quote)?;
                writeln!(out, "Both players selected {}. It's a tie!", result.user)?;
            }
        }
        writeln!(out, "{}\n", rule('─'))
    }

    /// Running score after a round.
    pub fn score<W: Write + ?Sized>(&self, out: &mut W, tally: &ScoreTally) -> io::Result<()> {
        writeln!(out, "📊 SCORE: {}\n", tally)
    }

    /// Replay question. Leaves the cursor on the prompt line.
    pub fn prompt_replay<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "🔄 Play again? (y/n): ")?;
        out.flush()
    }

    /// Divider between rounds.
    pub fn divider<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}\n", rule('─'))
    }

    /// Goodbye art, final score, and a closing remark.
    pub fn farewell<W: Write + ?Sized>(&self, out: &mut W, tally: &ScoreTally) -> io::Result<()> {
        writeln!(out, "\n{}", rule('='))?;
        if self.show_art {
            writeln!(out, "{}", art::GOODBYE_SCENE)?;
        }
        writeln!(out, "🏁 FINAL SCORE: {}", tally)?;
        let remark = match tally.wins.cmp(&tally.losses) {
            std::cmp::Ordering::Greater => "👑 Congratulations! You've proven yourself worthy!",
            std::cmp::Ordering::Less => "🤓 Better luck next time! Perhaps more practice is needed.",
            std::cmp::Ordering::Equal => "🤝 A perfect balance. How... logical.",
        };
        writeln!(out, "{}", remark)?;
        writeln!(out, "🖖 Live long and prosper! (Or at least until the next game)")?;
        writeln!(out, "{}\n", rule('='))?;
        out.flush()
    }

    fn reveal<W, P>(&self, out: &mut W, pacer: &mut P, header: &str, action: Action) -> io::Result<()>
    where
        W: Write + ?Sized,
        P: Pacer + ?Sized,
    {
        writeln!(out, "\n{}", rule('═'))?;
        writeln!(out, "{}: {}", header, action.name().to_uppercase())?;
        writeln!(out, "{}", rule('═'))?;
        if self.show_art {
            writeln!(out, "{}", art::action_art(action))?;
        }
        out.flush()?;
        pacer.pause(scaled(self.delay_secs, 0.8));
        Ok(())
    }

    fn battle<W: Write + ?Sized>(&self, out: &mut W, winner: Action, loser: Action) -> io::Result<()> {
        if !self.show_art {
            return Ok(());
        }
        if let Some(scene) = art::battle_scene(winner, loser) {
            writeln!(out, "\n{}", rule('~'))?;
            writeln!(out, "{}", scene)?;
            writeln!(out, "{}\n", rule('~'))?;
        }
        Ok(())
    }
}
