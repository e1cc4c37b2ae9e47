pub mod config;
pub mod dht;
pub mod http;
