//! Wallet connectors.
//!
//! A [`Connector`] is a wallet session: it knows its account, the chain it is
//! bound to and the chains it is configured for, and it signs on request.

pub mod connector;
pub mod error;
pub mod local;
pub mod mock;

pub use connector::{ConnectedChain, Connector, ConnectorData};
pub use error::ConnectorError;
pub use local::LocalConnector;
pub use mock::{MockConnector, MockFlags, MockOptions};
