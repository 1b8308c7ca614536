pub mod auth;
pub mod connect;
pub mod connectors;
pub mod token;
