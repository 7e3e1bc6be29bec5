//! Code breaker module - the Mastermind kernel
//!
//! Holds a secret of [`CODE_LENGTH`] digits, the attempt counter and the history
//! of scored guesses. Scoring is the usual two-pass peg count:
//!
//! 1. exact matches (black pegs) consume both positions;
//! 2. every remaining guess digit consumes the first unconsumed equal secret
//!    digit, counting a partial match (white peg).
//!
//! Consuming secret digits keeps duplicates from being counted twice: secret
//! `1122` against guess `1111` is two exact matches and no partial ones.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::error::InvalidInput;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{CodeBreakerSnapshot, GuessRecord};
use crate::types::{
    Code, CodeCommand, Digit, GameStatus, GuessFeedback, CODE_LENGTH, MAX_ATTEMPTS, MAX_DIGIT,
};

/// Score `guess` against `secret`
pub fn score(secret: &Code, guess: &Code) -> GuessFeedback {
    let mut secret_left: [Option<Digit>; CODE_LENGTH] = [None; CODE_LENGTH];
    let mut guess_left: [Option<Digit>; CODE_LENGTH] = [None; CODE_LENGTH];
    let mut feedback = GuessFeedback::default();

    for i in 0..CODE_LENGTH {
        if guess[i] == secret[i] {
            feedback.exact += 1;
        } else {
            secret_left[i] = Some(secret[i]);
            guess_left[i] = Some(guess[i]);
        }
    }

    for digit in guess_left.into_iter().flatten() {
        if let Some(slot) = secret_left.iter_mut().find(|s| **s == Some(digit)) {
            *slot = None;
            feedback.partial += 1;
        }
    }

    feedback
}

/// Check a guess has exactly [`CODE_LENGTH`] digits, each 0-9
pub fn validate_guess(guess: &[Digit]) -> Result<Code, InvalidInput> {
    let code: Code = guess
        .try_into()
        .map_err(|_| InvalidInput::guess_length(guess.len()))?;
    if let Some(position) = code.iter().position(|&d| d > MAX_DIGIT) {
        return Err(InvalidInput::DigitOutOfRange {
            position,
            value: code[position],
        });
    }
    Ok(code)
}

/// Parse typed text (e.g. `"1234"` or `"1 2 3 4"`) into a guess
///
/// Whitespace is ignored. Fewer or more than [`CODE_LENGTH`] characters is a
/// length error; anything that is not an ASCII digit is reported with its position.
pub fn parse_guess(text: &str) -> Result<Code, InvalidInput> {
    let mut digits: ArrayVec<Digit, CODE_LENGTH> = ArrayVec::new();
    let mut count = 0usize;
    for ch in text.chars().filter(|c| !c.is_whitespace()) {
        let position = count;
        count += 1;
        let Some(value) = ch.to_digit(10) else {
            return Err(InvalidInput::NotADigit { position, found: ch });
        };
        // Overflow is reported as a length error once counting finishes.
        let _ = digits.try_push(value as Digit);
    }
    if count != CODE_LENGTH {
        return Err(InvalidInput::guess_length(count));
    }
    validate_guess(&digits)
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: GuessFeedback,
    /// False when the game was already finished; nothing was recorded.
    pub accepted: bool,
    /// Status after the guess
    pub status: GameStatus,
}

/// Complete Mastermind game state
#[derive(Debug, Clone)]
pub struct CodeBreaker<R = SimpleRng> {
    secret: Code,
    attempt: usize,
    status: GameStatus,
    history: ArrayVec<GuessRecord, MAX_ATTEMPTS>,
    rng: R,
}

impl<R: RandomSource> CodeBreaker<R> {
    /// Create a game with a secret drawn from `rng`
    pub fn new(mut rng: R) -> Self {
        let secret = generate_secret(&mut rng);
        Self::from_parts(secret, rng)
    }

    /// Create a game with a known secret
    ///
    /// `rng` is only used for secrets drawn by later resets.
    pub fn with_secret(secret: &[Digit], rng: R) -> Result<Self, InvalidInput> {
        let secret = validate_guess(secret)?;
        Ok(Self::from_parts(secret, rng))
    }

    fn from_parts(secret: Code, rng: R) -> Self {
        Self {
            secret,
            attempt: 1,
            status: GameStatus::InProgress,
            history: ArrayVec::new(),
            rng,
        }
    }

    /// 1-indexed number of the next guess
    pub fn attempt_number(&self) -> usize {
        self.attempt
    }

    pub fn attempts_left(&self) -> usize {
        (MAX_ATTEMPTS + 1).saturating_sub(self.attempt)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The secret, only once the game is finished
    pub fn revealed_secret(&self) -> Option<Code> {
        self.status.is_terminal().then_some(self.secret)
    }

    /// Score a guess and advance the attempt counter
    ///
    /// On a finished game the guess is still validated and scored, but nothing
    /// is recorded and `accepted` is false.
    pub fn score_guess(&mut self, guess: &[Digit]) -> Result<GuessOutcome, InvalidInput> {
        let guess = validate_guess(guess)?;
        let feedback = score(&self.secret, &guess);

        if self.status.is_terminal() {
            debug!(status = self.status.as_str(), "guess ignored on finished game");
            return Ok(GuessOutcome {
                feedback,
                accepted: false,
                status: self.status,
            });
        }

        self.history.push(GuessRecord { guess, feedback });
        self.attempt += 1;

        debug!(
            attempt = self.attempt - 1,
            exact = feedback.exact,
            partial = feedback.partial,
            "guess scored"
        );

        if feedback.is_solved() {
            self.status = GameStatus::Won;
        } else if self.attempt > MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }
        if self.status.is_terminal() {
            info!(
                status = self.status.as_str(),
                guesses = self.history.len(),
                "code breaker finished"
            );
        }

        Ok(GuessOutcome {
            feedback,
            accepted: true,
            status: self.status,
        })
    }

    /// Apply a command from the input layer
    ///
    /// Returns the outcome for `Submit`, `None` for `Restart`.
    pub fn apply_command(
        &mut self,
        command: CodeCommand,
    ) -> Result<Option<GuessOutcome>, InvalidInput> {
        match command {
            CodeCommand::Submit(guess) => self.score_guess(&guess).map(Some),
            CodeCommand::Restart => {
                self.reset();
                Ok(None)
            }
        }
    }

    /// Draw a new secret and start over at attempt 1
    pub fn reset(&mut self) {
        self.secret = generate_secret(&mut self.rng);
        self.attempt = 1;
        self.status = GameStatus::InProgress;
        self.history.clear();
        info!("code breaker reset");
    }

    pub fn snapshot(&self) -> CodeBreakerSnapshot {
        CodeBreakerSnapshot {
            attempt_number: self.attempt,
            attempts_left: self.attempts_left(),
            status: self.status,
            history: self.history.clone(),
            revealed_secret: self.revealed_secret(),
        }
    }
}

impl Default for CodeBreaker {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}

/// Four independent uniform digits; repeats allowed
fn generate_secret<R: RandomSource>(rng: &mut R) -> Code {
    let mut code = [0; CODE_LENGTH];
    for digit in &mut code {
        *digit = rng.next_range(MAX_DIGIT as u32 + 1) as Digit;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn fb(exact: u8, partial: u8) -> GuessFeedback {
        GuessFeedback { exact, partial }
    }

    #[test]
    fn test_score_displaced_digits() {
        assert_eq!(score(&[1, 2, 3, 4], &[1, 3, 2, 5]), fb(1, 2));
    }

    #[test]
    fn test_score_duplicates_not_double_counted() {
        assert_eq!(score(&[1, 1, 2, 2], &[1, 1, 1, 1]), fb(2, 0));
        assert_eq!(score(&[1, 2, 3, 4], &[4, 4, 4, 4]), fb(1, 0));
        assert_eq!(score(&[1, 1, 2, 3], &[2, 2, 1, 1]), fb(0, 3));
    }

    #[test]
    fn test_score_all_and_nothing() {
        assert_eq!(score(&[7, 0, 7, 0], &[7, 0, 7, 0]), fb(4, 0));
        assert_eq!(score(&[1, 2, 3, 4], &[4, 3, 2, 1]), fb(0, 4));
        assert_eq!(score(&[1, 2, 3, 4], &[5, 6, 7, 8]), fb(0, 0));
    }

    #[test]
    fn test_validate_guess_errors() {
        assert_eq!(
            validate_guess(&[1, 2, 3]),
            Err(InvalidInput::GuessLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            validate_guess(&[1, 2, 3, 4, 5]),
            Err(InvalidInput::GuessLength {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(
            validate_guess(&[1, 12, 3, 4]),
            Err(InvalidInput::DigitOutOfRange {
                position: 1,
                value: 12
            })
        );
        assert_eq!(validate_guess(&[0, 9, 0, 9]), Ok([0, 9, 0, 9]));
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("1234"), Ok([1, 2, 3, 4]));
        assert_eq!(parse_guess(" 1 2 3 4 "), Ok([1, 2, 3, 4]));
        assert_eq!(parse_guess("12"), Err(InvalidInput::guess_length(2)));
        assert_eq!(parse_guess(""), Err(InvalidInput::guess_length(0)));
        assert_eq!(parse_guess("123456"), Err(InvalidInput::guess_length(6)));
        assert_eq!(
            parse_guess("12a4"),
            Err(InvalidInput::NotADigit {
                position: 2,
                found: 'a'
            })
        );
    }

    #[test]
    fn test_generated_secret_uses_rng() {
        let game = CodeBreaker::new(ScriptedRng::new(vec![3, 1, 4, 1]));
        assert_eq!(game.secret, [3, 1, 4, 1]);
        assert_eq!(game.attempt_number(), 1);
        assert_eq!(game.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(game.revealed_secret(), None);
    }

    #[test]
    fn test_generated_secret_digits_in_range() {
        let mut rng = SimpleRng::new(77);
        for _ in 0..200 {
            let code = generate_secret(&mut rng);
            assert!(code.iter().all(|&d| d <= MAX_DIGIT));
        }
    }

    #[test]
    fn test_win_on_exact_guess() {
        let mut game = CodeBreaker::with_secret(&[5, 5, 1, 2], SimpleRng::new(1)).unwrap();
        let miss = game.score_guess(&[5, 1, 0, 0]).unwrap();
        assert!(miss.accepted);
        assert_eq!(miss.feedback, fb(1, 1));
        assert_eq!(miss.status, GameStatus::InProgress);

        let hit = game.score_guess(&[5, 5, 1, 2]).unwrap();
        assert_eq!(hit.feedback, fb(4, 0));
        assert_eq!(hit.status, GameStatus::Won);
        assert_eq!(game.attempt_number(), 3);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.revealed_secret(), Some([5, 5, 1, 2]));
    }

    #[test]
    fn test_loss_after_max_attempts() {
        let mut game = CodeBreaker::with_secret(&[9, 9, 9, 9], SimpleRng::new(1)).unwrap();
        for attempt in 1..=MAX_ATTEMPTS {
            assert_eq!(game.attempt_number(), attempt);
            let outcome = game.score_guess(&[0, 0, 0, 0]).unwrap();
            assert!(outcome.accepted);
            if attempt < MAX_ATTEMPTS {
                assert_eq!(outcome.status, GameStatus::InProgress);
            }
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.attempt_number(), MAX_ATTEMPTS + 1);
        assert_eq!(game.attempts_left(), 0);
        assert_eq!(game.revealed_secret(), Some([9, 9, 9, 9]));
    }

    #[test]
    fn test_win_on_last_attempt() {
        let mut game = CodeBreaker::with_secret(&[1, 2, 3, 4], SimpleRng::new(1)).unwrap();
        for _ in 1..MAX_ATTEMPTS {
            game.score_guess(&[0, 0, 0, 0]).unwrap();
        }
        let outcome = game.score_guess(&[1, 2, 3, 4]).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
    }

    #[test]
    fn test_finished_game_does_not_record() {
        let mut game = CodeBreaker::with_secret(&[1, 2, 3, 4], SimpleRng::new(1)).unwrap();
        game.score_guess(&[1, 2, 3, 4]).unwrap();
        let attempt = game.attempt_number();

        let outcome = game.score_guess(&[1, 3, 2, 5]).unwrap();
        assert!(!outcome.accepted);
        assert_eq!(outcome.feedback, fb(1, 2));
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(game.attempt_number(), attempt);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_invalid_guess_changes_nothing() {
        let mut game = CodeBreaker::with_secret(&[1, 2, 3, 4], SimpleRng::new(1)).unwrap();
        assert!(game.score_guess(&[1, 2]).is_err());
        assert!(game.score_guess(&[1, 2, 3, 10]).is_err());
        assert_eq!(game.attempt_number(), 1);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_reset_draws_new_secret() {
        let mut game = CodeBreaker::with_secret(&[0, 0, 0, 0], ScriptedRng::new(vec![8, 6, 7, 5]))
            .unwrap();
        game.score_guess(&[0, 0, 0, 0]).unwrap();
        assert_eq!(game.status(), GameStatus::Won);

        assert_eq!(game.apply_command(CodeCommand::Restart), Ok(None));
        assert_eq!(game.secret, [8, 6, 7, 5]);
        assert_eq!(game.attempt_number(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_snapshot() {
        let mut game = CodeBreaker::with_secret(&[1, 2, 3, 4], SimpleRng::new(1)).unwrap();
        let outcome = game
            .apply_command(CodeCommand::Submit([4, 3, 2, 1]))
            .unwrap()
            .unwrap();
        assert_eq!(outcome.feedback, fb(0, 4));

        let snap = game.snapshot();
        assert_eq!(snap.attempt_number, 2);
        assert_eq!(snap.attempts_left, MAX_ATTEMPTS - 1);
        assert_eq!(snap.last_feedback(), Some(fb(0, 4)));
        assert_eq!(snap.revealed_secret, None);
        assert!(snap.playable());
    }
}
