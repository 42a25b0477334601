//! Error types for player operations.
//!
//! A returned error always means the action was declined without touching
//! the bankroll or the hands. The attempt is still recorded as the player's
//! previous action.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No hand has been started for this round.
    #[error("no active round")]
    NoActiveRound,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// The hand was doubled and takes no further cards.
    #[error("hand has been doubled")]
    HandDoubled,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot surrender at this table.
    #[error("cannot surrender at this table")]
    CannotSurrender,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The current hand is the last one.
    #[error("no next hand")]
    NoNextHand,
}

/// Errors that can occur when buying insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not currently offered to the player.
    #[error("insurance is not offered")]
    NotOffered,
    /// Player has not placed a bet.
    #[error("player has not placed a bet")]
    NoBet,
    /// Insufficient funds for insurance.
    #[error("insufficient funds for insurance")]
    InsufficientFunds,
}

/// Errors that can occur when changing a hand's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Hand has already left the active state.
    #[error("hand is not active")]
    NotActive,
    /// Hands never return to the active state.
    #[error("target status is not terminal")]
    NotTerminal,
    /// Only busts and blackjacks are reported from outside the player.
    #[error("status is not reported by the hand evaluator")]
    NotExternal,
}
