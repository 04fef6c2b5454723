pub mod http;
pub mod weather;
