//! Player state consumed by damage resolution.
//!
//! Players are owned by the surrounding game; the resolver only borrows them
//! for the duration of one attack.
mod player;

pub use player::Player;
