//! Playing over the network.
//!
//! The engine side wraps each remote player in a
//! [`remote_proxy::RemotePlayerProxy`]; the player side runs a
//! [`remote_client::RemotePlayerClient`] around its local [`crate::player::Player`].
//! Both speak a line-oriented text protocol over TCP: one message per
//! line, space-separated fields, with [`serdes`] defining how every value
//! is spelled.

pub mod error;
pub mod message;
pub mod remote_client;
pub mod remote_proxy;
pub mod serdes;
