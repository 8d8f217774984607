pub mod action;
pub mod battle_state;
pub mod by_side;
pub mod logging;
pub mod pokemon;
pub mod score;
