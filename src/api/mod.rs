pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod models;
pub mod region;
