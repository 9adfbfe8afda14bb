//! Ports for the transaction assembly subsystem.

pub mod inbound;

pub use inbound::TransactionAssemblyApi;
