//! Port traits (hexagonal boundaries) for the player crate.

pub mod outbound;
