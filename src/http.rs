mod client;
mod reqwest_client;
mod response;

pub use client::*;
pub use reqwest_client::*;
pub use response::*;
