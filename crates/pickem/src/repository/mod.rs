pub mod game;
pub mod pick;
pub mod score;
pub mod standings;

#[cfg(test)]
pub(crate) mod fixtures;
