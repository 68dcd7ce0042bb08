use std::fmt;

/// Error returned when reading the value out of an empty [`Maybe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("attempted to get value of empty Maybe container")]
pub struct EmptyAccess;

/// A container holding either exactly one value of type `T`, or nothing.
///
/// The value is owned exclusively: cloning a `Maybe` clones the value it
/// holds, and dropping it drops the value.
///
/// Two containers are equal if both are empty, or if both hold values that
/// compare equal. An empty container never equals a full one.
/// ```
/// # use maybe_monad::Maybe;
/// assert_eq!(Maybe::<i32>::empty(), Maybe::empty());
/// assert_eq!(Maybe::new(5), Maybe::new(5));
/// assert_ne!(Maybe::new(5), Maybe::empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    /// Creates an empty container.
    /// # Examples
    /// ```
    /// # use maybe_monad::Maybe;
    /// let maybe = Maybe::<i32>::empty();
    /// assert!(!maybe.has_value());
    /// ```
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Creates a container holding `value`.
    /// # Examples
    /// ```
    /// # use maybe_monad::Maybe;
    /// let maybe = Maybe::new(String::new());
    /// assert!(maybe.has_value());
    /// ```
    pub const fn new(value: T) -> Self {
        Self(Some(value))
    }

    /// Wraps an existing [`Option`].
    pub fn from_option(value: Option<T>) -> Self {
        Self(value)
    }

    /// Returns `true` if the container holds a value.
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if the container holds nothing.
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Borrows the held value, if any.
    pub const fn as_ref(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Moves the held value out of the container.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccess`] if the container is empty.
    pub fn into_inner(self) -> Result<T, EmptyAccess> {
        self.0.ok_or(EmptyAccess)
    }

    /// Converts the container into an [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T: Clone> Maybe<T> {
    /// Returns a clone of the held value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccess`] if the container is empty, on every call.
    /// # Examples
    /// ```
    /// # use maybe_monad::{EmptyAccess, Maybe};
    /// assert_eq!(Maybe::new(5).try_get(), Ok(5));
    /// assert_eq!(Maybe::<i32>::empty().try_get(), Err(EmptyAccess));
    /// ```
    pub fn try_get(&self) -> Result<T, EmptyAccess> {
        self.0.clone().ok_or(EmptyAccess)
    }

    /// Returns a clone of the held value.
    ///
    /// ## Panics
    ///
    /// Panics with the [`EmptyAccess`] message if the container is empty. Use
    /// [`Maybe::try_get`] to handle that case instead.
    #[track_caller]
    pub fn get(&self) -> T {
        match self.try_get() {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.0
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("<empty>"),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe)
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
