//! Quest Odds - closed-form N-vs-M combat outcome calculator

pub mod core;
pub mod quest;
