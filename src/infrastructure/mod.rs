pub mod http;
pub mod services;

pub use http::HttpReplayRepository;
pub use services::{BrowserTimeProvider, ConsoleLogger};
