//! Table rule options consulted by the player.

/// Rounding mode for amounts derived from a fraction of the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, halves rounding up.
    Nearest,
}

impl RoundingMode {
    /// Halves `amount` according to this rounding mode.
    ///
    /// # Example
    ///
    /// ```
    /// use bjplayer::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::Down.half(5), 2);
    /// assert_eq!(RoundingMode::Up.half(5), 3);
    /// assert_eq!(RoundingMode::Nearest.half(10), 5);
    /// ```
    #[must_use]
    pub const fn half(self, amount: usize) -> usize {
        match self {
            Self::Down => amount / 2,
            // x.5 is the only fractional part halving can produce.
            Self::Up | Self::Nearest => amount.div_ceil(2),
        }
    }
}

/// House rules that change what a player may do.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use bjplayer::TableRules;
///
/// let rules = TableRules::default()
///     .with_play_after_split_aces(true)
///     .with_surrender(false);
/// assert!(rules.allows_play_after_split_aces());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRules {
    /// Whether split aces may be played on after their second card.
    pub play_after_split_aces: bool,
    /// Whether double down is allowed after split.
    pub double_after_split: bool,
    /// Whether surrender is allowed.
    pub surrender: bool,
    /// Whether insurance is offered.
    pub insurance: bool,
    /// Rounding mode for the half-bet insurance cost.
    pub insurance_rounding: RoundingMode,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            play_after_split_aces: false,
            double_after_split: true,
            surrender: true,
            insurance: true,
            insurance_rounding: RoundingMode::Down,
        }
    }
}

impl TableRules {
    /// Returns whether split aces keep playing after their second card.
    #[must_use]
    pub const fn allows_play_after_split_aces(&self) -> bool {
        self.play_after_split_aces
    }

    /// Returns the insurance cost for the given bet.
    #[must_use]
    pub const fn insurance_cost(&self, bet: usize) -> usize {
        self.insurance_rounding.half(bet)
    }

    /// Sets whether split aces may be played on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjplayer::TableRules;
    ///
    /// let rules = TableRules::default().with_play_after_split_aces(true);
    /// assert_eq!(rules.play_after_split_aces, true);
    /// ```
    #[must_use]
    pub const fn with_play_after_split_aces(mut self, allowed: bool) -> Self {
        self.play_after_split_aces = allowed;
        self
    }

    /// Sets whether double down is allowed after split.
    ///
    /// # Example
    ///
    /// ```
    /// use bjplayer::TableRules;
    ///
    /// let rules = TableRules::default().with_double_after_split(false);
    /// assert_eq!(rules.double_after_split, false);
    /// ```
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether surrender is allowed.
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.surrender = allowed;
        self
    }

    /// Sets whether insurance is offered.
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets the rounding mode for the insurance cost.
    ///
    /// # Example
    ///
    /// ```
    /// use bjplayer::{RoundingMode, TableRules};
    ///
    /// let rules = TableRules::default().with_insurance_rounding(RoundingMode::Up);
    /// assert_eq!(rules.insurance_cost(15), 8);
    /// ```
    #[must_use]
    pub const fn with_insurance_rounding(mut self, mode: RoundingMode) -> Self {
        self.insurance_rounding = mode;
        self
    }
}
