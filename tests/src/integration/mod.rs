//! Cross-subsystem integration flows.

pub mod submission_flow;
