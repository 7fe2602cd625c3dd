//! # Integration Flows
//!
//! Two or more nodes exchanging encoded descriptors and running the
//! handshake gate on both ends.

pub mod handshake_flows;
