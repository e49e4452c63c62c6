//! Account actions.

mod connect;
mod disconnect;
mod get_account;
mod get_network;
mod sign_message;
mod sign_typed_data;
mod switch_network;

pub use connect::{connect, ConnectArgs, ConnectResult};
pub use disconnect::disconnect;
pub use get_account::{get_account, Account};
pub use get_network::{get_network, ActiveChain, Network};
pub use sign_message::sign_message;
pub use sign_typed_data::sign_typed_data;
pub use switch_network::switch_network;
