use crate::{log_short_circuit, Maybe};

/// A computation over a [`Maybe`], advanced one step at a time.
///
/// Each step consumes the chain and returns a new one. As soon as a step
/// leaves the chain empty, every later step is skipped: the functions passed
/// to them are never called.
///
/// ```
/// # use maybe_monad::{Maybe, MaybeMonad};
/// let mut calls = 0;
/// let result = MaybeMonad::new(5)
///     .bind(|n| {
///         calls += 1;
///         n + 2
///     })
///     .bind(|_| {
///         calls += 1;
///         Maybe::<i32>::empty()
///     })
///     .bind(|n| {
///         calls += 1;
///         n + 1
///     })
///     .extract();
///
/// assert!(result.is_empty());
/// assert_eq!(calls, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a chain does nothing unless it is extracted"]
pub struct MaybeMonad<T> {
    rep: Maybe<T>,
}

impl<T> MaybeMonad<T> {
    /// Starts a chain from an initial value.
    pub const fn new(value: T) -> Self {
        Self {
            rep: Maybe::new(value),
        }
    }

    /// Starts a chain that has already failed. No bound function will run.
    pub const fn empty() -> Self {
        Self { rep: Maybe::empty() }
    }

    /// Starts a chain from an existing container.
    pub fn from_maybe(rep: Maybe<T>) -> Self {
        Self { rep }
    }

    /// Returns `true` if an earlier step has emptied the chain.
    pub fn is_failed(&self) -> bool {
        self.rep.is_empty()
    }

    /// Calls `f` with the current value, if there is one, and continues the
    /// chain with whatever it returns.
    ///
    /// `f` may return either a bare `T` or a [`Maybe<T>`]; returning an empty
    /// [`Maybe`] fails the chain. If the chain is already empty, `f` is not
    /// called.
    /// # Examples
    /// ```
    /// # use maybe_monad::{Maybe, MaybeMonad};
    /// let chain = MaybeMonad::new(5).bind(|n| n + 2);
    /// assert_eq!(chain.extract(), Maybe::new(7));
    ///
    /// let chain = MaybeMonad::new(5).bind(|n| Maybe::new(n + 1));
    /// assert_eq!(chain.extract(), Maybe::new(6));
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    pub fn bind<F, R>(self, f: F) -> Self
    where
        F: FnOnce(T) -> R,
        R: Into<Maybe<T>>,
    {
        match self.rep.into_option() {
            Some(value) => Self::from_maybe(f(value).into()),
            None => {
                log_short_circuit("bind");
                Self::empty()
            }
        }
    }

    /// Keeps the current value if `f` returns `true` for it, and fails the
    /// chain otherwise. If the chain is already empty, `f` is not called.
    /// # Examples
    /// ```
    /// # use maybe_monad::MaybeMonad;
    /// assert!(MaybeMonad::new(2).predicate(|n| *n > 10).is_failed());
    /// assert!(!MaybeMonad::new(20).predicate(|n| *n > 10).is_failed());
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    pub fn predicate<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self.rep.into_option() {
            Some(value) => {
                if f(&value) {
                    Self::new(value)
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("predicate rejected value");
                    Self::empty()
                }
            }
            None => {
                log_short_circuit("predicate");
                Self::empty()
            }
        }
    }

    /// Ends the chain, returning its result.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    pub fn extract(self) -> Maybe<T> {
        self.rep
    }
}

impl<T> Default for MaybeMonad<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Maybe<T>> for MaybeMonad<T> {
    fn from(rep: Maybe<T>) -> Self {
        Self::from_maybe(rep)
    }
}
