mod float;
mod tolerance;

pub use float::*;
pub use tolerance::*;
