//! State layer: composable reducers and the store that runs them.

pub mod app;
pub mod details;
pub mod env;
pub mod info;
pub mod mvi;
pub mod store;
pub mod watersource;

pub use env::AppEnv;
pub use store::Store;
