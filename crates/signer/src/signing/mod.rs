mod keypair;

pub use keypair::{DsaKeyPair, VerifyOutcome};
