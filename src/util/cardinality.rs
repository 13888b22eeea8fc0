//! Cardinality normalization for repeated XML elements.
//!
//! The OGame API serializes lists as repeated sibling elements. Once decoded into a
//! tree keyed by tag name, a list of one collapses into a bare element and an empty
//! list disappears entirely. Every collection-valued field goes through [`normalize`]
//! or [`normalize_ref`] so downstream code only ever sees an ordered sequence.

/// A value that was serialized either once or several times under the same key.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Appends another occurrence, turning a single value into a sequence.
    pub fn push(&mut self, value: T) {
        match self {
            Self::Many(values) => values.push(value),
            Self::One(_) => {
                let previous = std::mem::replace(self, Self::Many(Vec::with_capacity(2)));
                if let (Self::One(first), Self::Many(values)) = (previous, self) {
                    values.push(first);
                    values.push(value);
                }
            }
        }
    }

    /// First occurrence in document order.
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(values) => values.first(),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values.as_slice(),
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

/// Converts an absent, single or repeated value into an ordered sequence.
///
/// Absent becomes an empty vector, a single value a one-element vector and a
/// sequence is returned unchanged. Order is never altered and nothing is
/// deduplicated; leaderboard ranks depend on document order.
pub fn normalize<T>(value: Option<OneOrMany<T>>) -> Vec<T> {
    value.map(OneOrMany::into_vec).unwrap_or_default()
}

/// Borrowing variant of [`normalize`].
pub fn normalize_ref<T>(value: Option<&OneOrMany<T>>) -> Vec<&T> {
    value
        .map(|value| value.as_slice().iter().collect())
        .unwrap_or_default()
}
