//! First-class invariants over game history.
//!
//! Invariants are logical properties that must hold after every transition.
//! The reducer checks them in debug builds; each one is also testable on its
//! own, including against histories that were corrupted on purpose.

use crate::rules::evaluate;
use crate::{Board, History, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// Invariant: history always holds the starting board.
pub struct NonEmptyInvariant;

impl Invariant<History> for NonEmptyInvariant {
    fn holds(history: &History) -> bool {
        !history.is_empty()
    }

    fn description() -> &'static str {
        "History contains at least the starting board"
    }
}

/// Invariant: entry 0 is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.get(0).is_none_or(|board| *board == Board::new())
    }

    fn description() -> &'static str {
        "First snapshot is the empty board"
    }
}

/// Invariant: consecutive snapshots differ by exactly one newly filled square.
pub struct SingleMoveInvariant;

impl Invariant<History> for SingleMoveInvariant {
    fn holds(history: &History) -> bool {
        history.boards().windows(2).all(|pair| {
            let diff = pair[1].diff(&pair[0]);
            diff.len() == 1 && pair[0].is_empty(diff[0])
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}

/// Invariant: X fills odd-numbered moves, O even-numbered ones.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        (1..history.len()).all(|step| {
            let expected = Player::for_step(step - 1);
            match (history.changed_square(step), history.get(step)) {
                (Some(pos), Some(board)) => board.get(pos) == Square::Occupied(expected),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// Invariant: no snapshot follows a won board.
pub struct NoMoveAfterWinInvariant;

impl Invariant<History> for NoMoveAfterWinInvariant {
    fn holds(history: &History) -> bool {
        let boards = history.boards();
        boards
            .iter()
            .take(boards.len().saturating_sub(1))
            .all(|board| evaluate(board).winner().is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a win"
    }
}

/// Every invariant a game history upholds.
pub type HistoryInvariants = (
    NonEmptyInvariant,
    StartsEmptyInvariant,
    SingleMoveInvariant,
    AlternatingTurnInvariant,
    NoMoveAfterWinInvariant,
);
