//! Errors raised by the effect chain.
//!
//! Damage resolution has no recoverable-error surface: every input is a
//! trusted in-process value and chains built from a player's effect list are
//! always well formed. The only failures are structural checks on the chain
//! walk, which catch malformed links before they can loop or index out of
//! bounds.

/// Errors raised while walking an effect chain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainError {
    /// Traversal took more steps than the chain has links.
    #[error("effect chain revisited link {index} after {steps} steps")]
    Cycle { index: usize, steps: usize },

    /// A link points past the end of the chain.
    #[error("link {index} points to {next}, but the chain has {len} links")]
    DanglingLink { index: usize, next: usize, len: usize },
}
