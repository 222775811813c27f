//! Terminal front-end: an ANSI renderer and a line-based input reader.

use std::io::{BufRead, Write};

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::warn;

use crate::boundary::{InputProvider, Renderer};
use crate::card::Card;
use crate::error::InputError;
use crate::hand::Hand;
use crate::result::Outcome;

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[1;1H";
const RESET: &str = "\u{1b}[0m";
const RED: &str = "31";
const GREEN: &str = "32";

const CARD_HEIGHT: usize = 7;
const CARD_TOP: &str = "┌─────────┐";
const CARD_BOTTOM: &str = "└─────────┘";
const CARD_BACK: &str = "│░░░░░░░░░│";

const PROMPT: &str = "[H]it or [S]tand?";
const INVALID_INPUT: &str = "You need to [H]it or [S]tand";

type CardRows = [String; CARD_HEIGHT];

/// Draws the table on an ANSI terminal.
///
/// Cards are printed as boxes side by side. The dealer's hole card is shown
/// as a card back until the final view.
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write> {
    out: W,
    color: bool,
    invalid_notice: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`, with colors enabled.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            color: true,
            invalid_notice: false,
        }
    }

    /// Enables or disables ANSI colors.
    ///
    /// Screen clearing is still emitted when colors are off.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Prints the greeting shown before the first deal.
    pub fn welcome(&mut self) {
        let text = format!(
            "{CLEAR_SCREEN}{} {}\n",
            self.paint("Welcome to", GREEN),
            self.paint("Blackjack", RED)
        );
        self.emit(&text);
    }

    /// Restores default terminal attributes.
    pub fn reset(&mut self) {
        self.emit(&format!("{RESET}\n"));
    }

    /// Returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            warn!("failed to write to console: {err}");
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\u{1b}[{code}m{text}{RESET}")
        } else {
            String::from(text)
        }
    }

    fn card_rows(&self, card: &Card) -> CardRows {
        let rank = card.rank.symbol();
        let suit = card.suit.symbol();
        let rows = [
            String::from(CARD_TOP),
            format!("│{rank:<9}│"),
            String::from("│         │"),
            format!("│    {suit}    │"),
            String::from("│         │"),
            format!("│{rank:>9}│"),
            String::from(CARD_BOTTOM),
        ];

        if card.suit.is_red() {
            rows.map(|row| self.paint(&row, RED))
        } else {
            rows
        }
    }

    fn hand_text(&self, hand: &Hand) -> String {
        let rows: Vec<CardRows> = hand.cards().iter().map(|c| self.card_rows(c)).collect();
        side_by_side(&rows)
    }

    fn take_notice(&mut self) -> String {
        if core::mem::take(&mut self.invalid_notice) {
            format!("{}\n", self.paint(INVALID_INPUT, RED))
        } else {
            String::new()
        }
    }
}

fn back_rows() -> CardRows {
    [
        String::from(CARD_TOP),
        String::from(CARD_BACK),
        String::from(CARD_BACK),
        String::from(CARD_BACK),
        String::from(CARD_BACK),
        String::from(CARD_BACK),
        String::from(CARD_BOTTOM),
    ]
}

fn side_by_side(cards: &[CardRows]) -> String {
    let mut text = String::new();
    for row in 0..CARD_HEIGHT {
        let line: Vec<&str> = cards.iter().map(|card| card[row].as_str()).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render_in_progress(&mut self, dealer_up_card: &Card, player_hand: &Hand, player_value: u8) {
        let dealer = side_by_side(&[self.card_rows(dealer_up_card), back_rows()]);
        let player = self.hand_text(player_hand);
        let notice = self.take_notice();

        let text = format!(
            "{CLEAR_SCREEN}Dealer has:\n{dealer}\nPlayer has:\n{player} ({player_value})\n{notice}{PROMPT}\n"
        );
        self.emit(&text);
    }

    fn render_final(
        &mut self,
        dealer_hand: &Hand,
        dealer_value: u8,
        player_hand: &Hand,
        player_value: u8,
    ) {
        let dealer = self.hand_text(dealer_hand);
        let player = self.hand_text(player_hand);
        self.invalid_notice = false;

        let text = format!(
            "{CLEAR_SCREEN}Dealer has:\n{dealer} ({dealer_value})\n\nPlayer has:\n{player} ({player_value})\n"
        );
        self.emit(&text);
    }

    fn render_invalid_input(&mut self) {
        self.invalid_notice = true;
    }

    fn render_outcome(&mut self, outcome: Outcome) {
        let code = if outcome.is_player_win() { GREEN } else { RED };
        let text = format!("{}\n", self.paint(outcome.message(), code));
        self.emit(&text);
    }
}

/// Reads one decision per line from a buffered reader, usually stdin.
#[derive(Debug)]
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    /// Creates an input provider over `reader`.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputProvider for LineInput<R> {
    fn read_player_decision(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(InputError::Exhausted),
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\r', '\n']).len();
                line.truncate(trimmed);
                Ok(line)
            }
            Err(err) => Err(InputError::Read(err.kind())),
        }
    }
}
