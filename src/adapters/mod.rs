// Adapters layer: concrete implementations of the domain ports for the terminal, the audio stack
// and the bundled assets.

pub mod assets;
pub mod audio;
pub mod decoder;
pub mod progress;
