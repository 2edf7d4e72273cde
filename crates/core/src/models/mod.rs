pub mod auth;
pub mod market;
pub mod portfolio;
pub mod session;
pub mod wallet;
