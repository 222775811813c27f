use log::{debug, warn};

use crate::boundary::{Decision, InputProvider, Renderer};
use crate::error::{ActionError, InputError, PlayError, ShowdownError};
use crate::options::InputExhausted;
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Plays the round to the end, starting from whatever state it is in.
    ///
    /// Deals if needed, asks `input` for decisions until the player stands
    /// or busts, lets the dealer draw, then shows the final table and the
    /// outcome through `renderer`. Text that is neither a hit nor a stand is
    /// reported with [`Renderer::render_invalid_input`] and the player is
    /// asked again.
    ///
    /// If the input runs out and the options say
    /// [`InputExhausted::Abort`], the error is returned with the game still
    /// in the player's turn; the caller may [`stand`](Game::stand) and call
    /// `play` again to finish the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out, the input fails, or the round
    /// has already been played.
    pub fn play<I, R>(&mut self, mut input: I, mut renderer: R) -> Result<RoundResult, PlayError>
    where
        I: InputProvider,
        R: Renderer,
    {
        if self.state == GameState::Dealing {
            self.deal()?;
        }

        while self.state == GameState::PlayerTurn {
            self.player_step(&mut input, &mut renderer)?;
        }

        if self.state == GameState::DealerTurn {
            self.dealer_play()?;
        }

        if self.state != GameState::Evaluating {
            return Err(ShowdownError::InvalidState.into());
        }

        renderer.render_final(
            &self.dealer_hand,
            self.dealer_hand.value(),
            &self.player_hand,
            self.player_hand.value(),
        );
        let result = self.showdown()?;
        renderer.render_outcome(result.outcome);

        Ok(result)
    }

    /// Shows the table, reads one line and acts on it.
    fn player_step<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<(), PlayError>
    where
        I: InputProvider,
        R: Renderer,
    {
        let up_card = *self.dealer_up_card().ok_or(ActionError::InvalidState)?;
        renderer.render_in_progress(&up_card, &self.player_hand, self.player_hand.value());

        let line = match input.read_player_decision() {
            Ok(line) => line,
            Err(InputError::Exhausted)
                if self.options.input_exhausted == InputExhausted::Stand =>
            {
                warn!("input exhausted, standing");
                self.stand()?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        match Decision::parse(&line) {
            Some(decision) => {
                self.apply(decision)?;
            }
            None => {
                debug!("ignoring invalid decision {line:?}");
                renderer.render_invalid_input();
            }
        }

        Ok(())
    }
}
