//! ASCII art: the title, one picture per action, and a battle scene for
//! every domination edge.

use crate::core::Action;

pub const GAME_TITLE: &str = r#"
    ╦═╗╔═╗╔═╗╦╔═  ╔═╗╔═╗╔═╗╔═╗╦═╗  ╔═╗╔═╗╦╔═╗╔═╗╔═╗╦═╗╔═╗  ╦  ╦╔═╗╔═╗╦═╗╔╦╗  ╔═╗╔═╗╔═╗╔═╗╦╔═
    ╠╦╝║ ║║  ╠╩╗  ╠═╝╠═╣╠═╝║╣ ╠╦╝  ╚═╗║  ║╚═╗╚═╗║ ║╠╦╝╚═╗  ║  ║╔═╝╠═╣╠╦╝ ║║  ╚═╗╠═╝║ ║║  ╠╩╗
    ╩╚═╚═╝╚═╝╩ ╩  ╩  ╩ ╩╩  ╚═╝╩╚═  ╚═╝╚═╝╩╚═╝╚═╝╚═╝╩╚═╚═╝  ╩═╝╩╚═╝╩ ╩╩╚══╩╝  ╚═╝╩  ╚═╝╚═╝╩ ╩
    "#;

pub const ROCK: &str = r#"
        _______
    ---'   ____)
          (_____)
          (_____)
          (____)
    ---.__(___)
    "#;

pub const PAPER: &str = r#"
         _______
    ---'    ____)____
               ______)
              _______)
             _______)
    ---.__________)
    "#;

pub const SCISSORS: &str = r#"
        _______
    ---'   ____)____
              ______)
           __________)
          (____)
    ---.__(___)
    "#;

pub const LIZARD: &str = r#"
              _,--._.-,
             /\_r-,\_ )
        .-.) _;='_/ (.;
         \ \'     \/S )
          L.'-. _.'|-'
         <_`-'\'_.'/
           `'-._( \
            ___   \\,      ___
           \ .'-. \\   .-'_. /
            '._' '.\\/.-'_.'
               '--``\('--'
                  \\  \\
                  `\\  \\
                    \\  \\
                     \\_\\
    "#;

pub const SPOCK: &str = r#"
           _  _
          | \/ |
          |    |    Live Long
          | /\ |    & Prosper!
          |_||_|
            ||
           /||\
          / || \
         /  ||  \
            /\
           /  \
          /    \
    "#;

pub const TIE_SCENE: &str = r#"
        🤝 === TIE! === 🤝

          👤      👤
          /|\    /|\
          / \    / \

        SAME CHOICE!
    "#;

pub const GOODBYE_SCENE: &str = r#"
        🖖 FAREWELL, HUMAN! 🖖

           _  _
          | \/ |
          |    |
          | /\ |
          |_||_|
            ||
           /||\
          / || \
         /  ||  \

        Thanks for playing!
    "#;

const SPOCK_OVER_ROCK: &str = r#"
        ⚡ SPOCK VAPORIZES ROCK! ⚡

           🖖              💥
          /||\     ~~~~~~>  ___
         / || \    ~~~>    (   )
        /  ||  \   ~~>      \_/
                   ~>        *
                  VAPORIZED!
        "#;

const ROCK_OVER_SCISSORS: &str = r#"
        💥 ROCK CRUSHES SCISSORS! 💥

            ___
           (   )
            \_/      ✂️
             |   💥  /\
             |  CRUSH \/
            / \      XX
        "#;

const SCISSORS_OVER_PAPER: &str = r#"
        ✂️ SCISSORS CUTS PAPER! ✂️

           ✂️
           /\      📄
          /  \    /|
         /SNIP\  / |
        /_____\ |~~|
                |  |
               SHRED!
        "#;

const PAPER_OVER_ROCK: &str = r#"
        📄 PAPER COVERS ROCK! 📄

          ________
         /        \
        |  PAPER   |
        |   📄    |___
        |        (   )
         \_______ \_/
           COVERED!
        "#;

const ROCK_OVER_LIZARD: &str = r#"
        💥 ROCK CRUSHES LIZARD! 💥

            ___
           (   )
            \_/
             |    🦎
             |   SQUISH!
            / \    XX
        "#;

const LIZARD_OVER_SPOCK: &str = r#"
        🦎 LIZARD POISONS SPOCK! 🦎

           🦎
          /|~     🖖
         / |~~>  /||\  
        /  |~~~>/ || \  💀
           BITE! ||
                /||\
        "#;

const SPOCK_OVER_SCISSORS: &str = r#"
        🖖 SPOCK SMASHES SCISSORS! 🖖

           🖖
          /||\    ✂️
         / || \  /  \
        /  ||  \/ SMASH!
           ||    \___/
          KARATE   XX
           CHOP!
        "#;

const SCISSORS_OVER_LIZARD: &str = r#"
        ✂️ SCISSORS DECAPITATES LIZARD! ✂️

           ✂️
           /\     🦎
          /  \   /|
         / SNIP\ ||
        /_______\||
                HEAD OFF!
        "#;

const LIZARD_OVER_PAPER: &str = r#"
        🦎 LIZARD EATS PAPER! 🦎

           🦎      📄
          /|~     /|
         / |CHOMP||
        /  |~~~>~||
           NOM    XX
           NOM!
        "#;

const PAPER_OVER_SPOCK: &str = r#"
        📄 PAPER DISPROVES SPOCK! 📄

          ________
         /SCIENCE \
        |  PAPER   |  🖖
        |  PROVES  | /||\
        |   YOU    |/ || \
         \ WRONG! /  ||
          \______/  LOGIC
                   FAIL!
        "#;

/// Picture of an action.
#[must_use]
pub fn action_art(action: Action) -> &'static str {
    match action {
        Action::Rock => ROCK,
        Action::Paper => PAPER,
        Action::Scissors => SCISSORS,
        Action::Lizard => LIZARD,
        Action::Spock => SPOCK,
    }
}

/// Battle scene for `winner` defeating `loser`.
///
/// `None` when `winner` does not defeat `loser`.
#[must_use]
pub fn battle_scene(winner: Action, loser: Action) -> Option<&'static str> {
    use Action::*;

    match (winner, loser) {
        (Spock, Rock) => Some(SPOCK_OVER_ROCK),
        (Rock, Scissors) => Some(ROCK_OVER_SCISSORS),
        (Scissors, Paper) => Some(SCISSORS_OVER_PAPER),
        (Paper, Rock) => Some(PAPER_OVER_ROCK),
        (Rock, Lizard) => Some(ROCK_OVER_LIZARD),
        (Lizard, Spock) => Some(LIZARD_OVER_SPOCK),
        (Spock, Scissors) => Some(SPOCK_OVER_SCISSORS),
        (Scissors, Lizard) => Some(SCISSORS_OVER_LIZARD),
        (Lizard, Paper) => Some(LIZARD_OVER_PAPER),
        (Paper, Spock) => Some(PAPER_OVER_SPOCK),
        _ => None,
    }
}
