pub mod countdown;
pub mod player;
pub mod provision;
pub mod scratch;
#[cfg(test)]
pub(crate) mod testing;
pub mod timer;
