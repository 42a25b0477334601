//! A mutex-guarded player for hosts that drive players from several threads.

use crate::player::Player;

#[cfg(feature = "std")]
struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn into_inner(self) -> T {
        self.0
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use spin::Mutex;

/// A [`Player`] behind its own mutex.
///
/// Every call through [`SharedPlayer::with`] runs to completion before the
/// next one starts, so actions stay atomic when several threads share a
/// player.
///
/// # Example
///
/// ```
/// use bjplayer::{Player, SharedPlayer, Shoe};
///
/// let shared = SharedPlayer::new(Player::new(100, Shoe::new(1, 9)));
/// shared.with(|player| player.place_bet(25)).unwrap();
/// assert_eq!(shared.with(|player| player.bankroll()), 75);
/// ```
pub struct SharedPlayer<D, O = ()> {
    inner: Mutex<Player<D, O>>,
}

impl<D, O> SharedPlayer<D, O> {
    /// Wraps a player.
    #[must_use]
    pub const fn new(player: Player<D, O>) -> Self {
        Self {
            inner: Mutex::new(player),
        }
    }

    /// Runs `f` with exclusive access to the player.
    pub fn with<R>(&self, f: impl FnOnce(&mut Player<D, O>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Returns the wrapped player.
    #[must_use]
    pub fn into_inner(self) -> Player<D, O> {
        self.inner.into_inner()
    }
}
