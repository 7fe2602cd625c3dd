use tracing::{debug, error, warn};

use crate::domain::{check_compatibility, CompatibilityError, PeerDescriptor};
use crate::ports::HandshakeGate;
use crate::service::NodeInfoService;

impl HandshakeGate for NodeInfoService {
    fn local_descriptor(&self) -> &PeerDescriptor {
        &self.local
    }

    fn check_peer(&self, remote: &PeerDescriptor) -> Result<(), CompatibilityError> {
        let result = check_compatibility(&self.local, remote);
        log_decision(remote, &result);
        result
    }

    fn check_mutual(&self, remote: &PeerDescriptor) -> Result<(), CompatibilityError> {
        // Reverse pass runs with the peer as the local side; its error is
        // flipped back so `local`/`expected` always describe us.
        let result = check_compatibility(&self.local, remote).and_then(|()| {
            check_compatibility(remote, &self.local).map_err(CompatibilityError::reversed)
        });
        log_decision(remote, &result);
        result
    }
}

fn log_decision(remote: &PeerDescriptor, result: &Result<(), CompatibilityError>) {
    match result {
        Ok(()) => debug!(
            peer = %remote.identity_key(),
            moniker = remote.moniker(),
            network = remote.network(),
            version = remote.version(),
            "Peer descriptor compatible"
        ),
        Err(e) if e.is_local_fault() => error!(
            error = %e,
            "Local descriptor is misconfigured; refusing all handshakes"
        ),
        Err(e) => warn!(
            peer = %remote.identity_key(),
            listen = remote.listen_address(),
            reason = %e.reject_reason(),
            error = %e,
            "Rejecting incompatible peer"
        ),
    }
}
