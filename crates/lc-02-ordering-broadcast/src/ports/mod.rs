//! Ports for the ordering-broadcast subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::OrderingBroadcastApi;
pub use outbound::{
    DeliverStreams, EnvelopeSigner, MockBehavior, MockOrderer, MockSigner, OperationKind,
    OrdererConnection, TimeoutPolicy,
};
