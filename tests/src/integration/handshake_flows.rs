//! # Handshake Flows
//!
//! Simulates the transport layer: each connection task encodes its
//! descriptor, sends it across an in-memory link, decodes the peer's bytes,
//! stamps the observed remote address, and runs the gate.
//!
//! ## Flows Tested:
//!
//! 1. Compatible nodes accept each other in both directions
//! 2. Incompatible nodes are rejected before a session starts
//! 3. Oversized descriptors are refused at the codec
//! 4. Many concurrent handshakes share one gate

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qc_node_info::test_utils::{descriptor, wildcard_descriptor};
    use qc_node_info::{
        ChannelId, CodecError, CompatibilityError, DescriptorCodec, HandshakeGate, JsonDescriptorCodec,
        NodeInfoService, PeerDescriptor, RejectReason, MAX_NODE_INFO_SIZE,
    };
    use tokio::sync::mpsc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Outcome of one side of a handshake
    #[derive(Debug)]
    enum SideOutcome {
        Accepted(PeerDescriptor),
        Rejected(CompatibilityError),
        Dropped(CodecError),
    }

    /// One side of a connection: send our bytes, receive theirs, decide.
    async fn handshake_side(
        gate: Arc<NodeInfoService>,
        observed_peer_addr: &'static str,
        tx: mpsc::Sender<Vec<u8>>,
        mut rx: mpsc::Receiver<Vec<u8>>,
        wire_override: Option<Vec<u8>>,
    ) -> SideOutcome {
        let codec = JsonDescriptorCodec::new();
        let ours = match wire_override {
            Some(bytes) => bytes,
            None => codec
                .encode(gate.local_descriptor())
                .expect("local descriptor fits the size limit"),
        };
        tx.send(ours).await.expect("link open");

        let theirs = rx.recv().await.expect("peer sent descriptor");
        let remote = match codec.decode(&theirs) {
            Ok(remote) => remote.with_remote_address(observed_peer_addr),
            Err(e) => return SideOutcome::Dropped(e),
        };

        match gate.check_mutual(&remote) {
            Ok(()) => SideOutcome::Accepted(remote),
            Err(e) => SideOutcome::Rejected(e),
        }
    }

    /// Run a full handshake between two nodes over an in-memory link.
    async fn connect(
        a: PeerDescriptor,
        b: PeerDescriptor,
        a_wire_override: Option<Vec<u8>>,
    ) -> (SideOutcome, SideOutcome) {
        let (a_tx, b_rx) = mpsc::channel(1);
        let (b_tx, a_rx) = mpsc::channel(1);

        let a_gate = Arc::new(NodeInfoService::new(a));
        let b_gate = Arc::new(NodeInfoService::new(b));

        let a_task = tokio::spawn(handshake_side(
            a_gate,
            "10.0.0.2:41000",
            a_tx,
            a_rx,
            a_wire_override,
        ));
        let b_task = tokio::spawn(handshake_side(b_gate, "10.0.0.1:42000", b_tx, b_rx, None));

        (a_task.await.unwrap(), b_task.await.unwrap())
    }

    // =============================================================================
    // TEST GROUP 1: Successful Handshakes
    // =============================================================================

    #[tokio::test]
    async fn test_compatible_nodes_accept_each_other() {
        let a = descriptor(1, "1.2.3", "quantum-chain-1", &[0x20, 0x21]);
        let b = descriptor(2, "1.2.7", "quantum-chain-1", &[0x21, 0x30]);

        let (a_side, b_side) = connect(a.clone(), b.clone(), None).await;

        match (a_side, b_side) {
            (SideOutcome::Accepted(seen_by_a), SideOutcome::Accepted(seen_by_b)) => {
                assert_eq!(seen_by_a.identity_key(), b.identity_key());
                assert_eq!(seen_by_a.remote_address(), "10.0.0.2:41000");
                assert_eq!(seen_by_a.listen_port(), b.listen_port());
                assert_eq!(seen_by_b.identity_key(), a.identity_key());
                assert_eq!(seen_by_b.common_channels(&a), vec![ChannelId(0x21)]);
            }
            other => panic!("expected both sides to accept, got {other:?}"),
        }
    }

    // =============================================================================
    // TEST GROUP 2: Rejections
    // =============================================================================

    #[tokio::test]
    async fn test_version_mismatch_rejected_on_both_sides() {
        let a = descriptor(1, "1.2.3", "quantum-chain-1", &[0x20]);
        let b = descriptor(2, "1.3.0", "quantum-chain-1", &[0x20]);

        let (a_side, b_side) = connect(a, b, None).await;

        for side in [a_side, b_side] {
            match side {
                SideOutcome::Rejected(e) => {
                    assert_eq!(e.reject_reason(), RejectReason::ProtocolMismatch)
                }
                other => panic!("expected rejection, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_wildcard_node_still_rejected_by_mutual_check() {
        let a = wildcard_descriptor(1, "1.2.3", "quantum-chain-1");
        let b = descriptor(2, "1.2.3", "quantum-chain-1", &[0x40]);

        let (a_side, b_side) = connect(a, b, None).await;

        // b requires a shared channel; a's mutual check sees that too
        assert!(matches!(
            a_side,
            SideOutcome::Rejected(CompatibilityError::NoCommonChannels { .. })
        ));
        assert!(matches!(
            b_side,
            SideOutcome::Rejected(CompatibilityError::NoCommonChannels { .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_remote_version_blames_peer() {
        let a = descriptor(1, "1.2", "quantum-chain-1", &[0x20]);
        let b = descriptor(2, "1.2.3", "quantum-chain-1", &[0x20]);

        let (a_side, b_side) = connect(a, b, None).await;

        match a_side {
            SideOutcome::Rejected(e) => assert!(e.is_local_fault()),
            other => panic!("expected local fault, got {other:?}"),
        }
        match b_side {
            SideOutcome::Rejected(e) => {
                assert!(!e.is_local_fault());
                assert_eq!(e.reject_reason(), RejectReason::MalformedVersion);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    // =============================================================================
    // TEST GROUP 3: Size Ceiling
    // =============================================================================

    #[tokio::test]
    async fn test_oversized_descriptor_dropped_at_codec() {
        let a = descriptor(1, "1.2.3", "quantum-chain-1", &[0x20]);
        let b = descriptor(2, "1.2.3", "quantum-chain-1", &[0x20]);
        let oversized = vec![b' '; MAX_NODE_INFO_SIZE + 1];

        let (_, b_side) = connect(a, b, Some(oversized)).await;

        assert!(matches!(
            b_side,
            SideOutcome::Dropped(CodecError::TooLarge { .. })
        ));
    }

    // =============================================================================
    // TEST GROUP 4: Concurrency
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_handshakes_share_one_gate() {
        let gate = Arc::new(NodeInfoService::new(descriptor(
            0,
            "1.2.3",
            "quantum-chain-1",
            &[0x20],
        )));

        let tasks: Vec<_> = (1..=64u8)
            .map(|key| {
                let gate = Arc::clone(&gate);
                tokio::spawn(async move {
                    let channel = if key % 2 == 0 { 0x20 } else { 0x99 };
                    let remote = descriptor(key, "1.2.3", "quantum-chain-1", &[channel]);
                    gate.check_peer(&remote).is_ok()
                })
            })
            .collect();

        let mut accepted = 0;
        for task in tasks {
            if task.await.unwrap() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 32);
    }
}
