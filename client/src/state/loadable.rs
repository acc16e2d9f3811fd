//! Tri-state wrapper for data fetched when a page mounts.
//!
//! DESIGN
//! ======
//! Every mount fetch ends in either `Ready` or `Failed`; the render layer
//! matches on the variant so a failed request shows feedback instead of an
//! endless loading message.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

use std::fmt::Display;

/// Result of a one-shot fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Loadable<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}
