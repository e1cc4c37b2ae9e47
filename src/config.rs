mod env;
mod json;
mod layered;
mod map;
mod provider;

pub use env::*;
pub use json::*;
pub use layered::*;
pub use map::*;
pub use provider::*;
