mod reading;
mod service;
mod timestamp;

pub use reading::*;
pub use service::*;
pub use timestamp::*;
