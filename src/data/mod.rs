//! Static battle data: types, species, abilities and moves.
pub mod abilities;
pub mod moves;
pub mod species;
pub mod types;
