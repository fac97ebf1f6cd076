//! Concrete data-source collaborators: CodeCommit repository listing and
//! clone-URL derivation, plus the Bybit P2P trading client.

pub mod bybit;
pub mod codecommit;
