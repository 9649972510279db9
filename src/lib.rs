//! A five-letter word guessing game: the scoring engine, the game session controller, and the
//! word provider and persistence collaborators it talks to.

pub mod config;
pub mod handlers;
pub mod provider;
pub mod session;
pub mod store;
pub mod wordle;
pub mod words;

#[cfg(test)]
mod provider_test;
#[cfg(test)]
mod wordle_test;
