//! Action tags and one-shot offers.

/// The last action a player attempted.
///
/// Recorded whether or not the action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// A wager was placed (or attempted).
    #[default]
    Wager,
    /// A new hand was started with the current bet.
    Bet,
    /// Hit.
    Hit,
    /// Stand.
    Stand,
    /// Split.
    Split,
    /// Double down.
    DoubleDown,
    /// Surrender.
    Surrender,
    /// Insurance bought.
    BuyInsurance,
    /// Insurance declined, explicitly or by taking another action.
    DeclineInsurance,
}

/// The side decision currently offered to the player.
///
/// Insurance and surrender are never offered at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Offer {
    /// Nothing offered.
    #[default]
    None,
    /// Insurance is offered.
    Insurance,
    /// Surrender is offered.
    Surrender,
}
