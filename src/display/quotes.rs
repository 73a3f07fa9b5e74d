//! The computer's commentary: taunts before a throw, and a quip after each
//! win, loss, or tie.

use crate::core::GameRng;
use crate::rules::Verdict;

pub const TAUNTS: &[&str] = &[
    "Bazinga! Prepare to be defeated!",
    "Your inferior neural pathways are no match for my algorithms!",
    "I'm not insane, my mother had me tested. Now let's play!",
    "In a world where logic prevails, you don't stand a chance!",
    "I'm about to defeat you with the power of SCIENCE!",
    "Prepare yourself for a lesson in game theory!",
];

pub const VICTORY_QUOTES: &[&str] = &[
    "🎉 Astonishing! You've achieved the statistically improbable!",
    "🎊 Well, well... even a broken clock is right twice a day.",
    "🏆 Impressive! You must have a higher IQ than I initially calculated.",
    "✨ Fascinating! Your victory defies my probability models!",
    "🌟 Remarkable! Did you study game theory at Caltech?",
];

pub const DEFEAT_QUOTES: &[&str] = &[
    "💀 As expected. My superior intellect prevails once again!",
    "🤖 Bazinga! Another victory for artificial intelligence!",
    "😏 Perhaps you should stick to simpler games, like tic-tac-toe.",
    "🧠 The odds were never in your favor. Better luck next time, homo sapien!",
    "🎯 Predictable. I calculated that move three iterations ago!",
];

pub const TIE_QUOTES: &[&str] = &[
    "🤝 A tie? How... pedestrian. Great minds think alike, I suppose.",
    "😐 We're in a quantum superposition of winning and losing. How tedious.",
    "🔄 A stalemate. This is like watching two parallel lines trying to meet.",
    "⚖️ Perfectly balanced, as all things should be... wait, wrong franchise.",
];

/// Picks lines from the quote pools.
#[derive(Clone, Debug)]
pub struct QuoteBook {
    rng: GameRng,
}

impl QuoteBook {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// A taunt shown before the user picks.
    pub fn taunt(&mut self) -> &'static str {
        self.pick(TAUNTS)
    }

    /// A quip for the user's side of `verdict`.
    pub fn reaction(&mut self, verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Win => self.pick(VICTORY_QUOTES),
            Verdict::Loss => self.pick(DEFEAT_QUOTES),
            Verdict::Tie => self.pick(TIE_QUOTES),
        }
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        self.rng.choose(pool).copied().unwrap_or_default()
    }
}
