//! Platform-independent state for the book and sparkle effects.
//!
//! Nothing in this crate touches web APIs: the wasm front-end feeds it
//! viewport sizes, pointer samples and clock readings, and reads back the
//! object transform and the particle buffer to draw.

pub mod book;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod cursor;
pub mod emitter;
pub mod error;
pub mod hit;
pub mod ring;
pub mod rotation;
pub mod scale;
pub mod sparkle;
pub mod spawn;
pub mod transform;
pub mod viewport;

pub use book::*;
pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use cursor::*;
pub use emitter::*;
pub use error::*;
pub use hit::*;
pub use ring::*;
pub use rotation::*;
pub use scale::*;
pub use sparkle::*;
pub use spawn::*;
pub use transform::*;
pub use viewport::*;
