pub mod agent;
pub mod app;
pub mod bell;
pub mod config;
pub mod connectivity;
pub mod export;
pub mod message;
pub mod paths;
pub mod response;
