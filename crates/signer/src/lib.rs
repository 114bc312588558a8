pub mod server;
pub mod error;
pub mod signing;

pub use server::{AppState, run, router};
pub use signing::{DsaKeyPair, VerifyOutcome};
