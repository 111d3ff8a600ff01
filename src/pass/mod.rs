//! Password generation core: session options, character pools, composer.

pub mod charset;
pub mod compose;
pub mod options;

pub use charset::CharacterPools;
pub use compose::{ComposeError, compose};
pub use options::GenerationOptions;
