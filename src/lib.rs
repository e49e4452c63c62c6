//! connectkit: wallet connections and guarded EIP-712 signing
//!
//! This is the root crate used by the integration tests, benchmarks and demos.
//! For actual functionality, use the individual crates directly:
//!
//! - `connect-core`: chains, typed data, local wallet, signature recovery, config
//! - `connectors`: the connector trait plus mock and local-key connectors
//! - `actions`: the connection registry and account actions (connect, sign, ...)
//! - `signer-cli`: the `connectkit` command-line signer

pub use actions;
pub use connect_core as core;
pub use connectors;
