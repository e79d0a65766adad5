// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The connection state machine: an out-of-scope collaborator (spec §6) that owns everything
//! past the point the binding hands off a handshake-initiating packet. The binding only needs to
//! know whether a new connection was admitted and, if so, the handle it should register under.

use crate::binding::{datapath::RecvDatagram, invariant::RecvPacket, lookup::ConnectionHandle};

/// Admits new connections for handshake-initiating packets the receive pipeline could not match
/// to an existing connection.
pub trait ConnectionFactory: Send + Sync {
    /// Attempts to create a connection for `packet`, arrived as `datagram`. Returns `None` when
    /// the factory itself rejects the attempt (for example, a listener-level limit), distinct
    /// from the binding's own stateless-or-drop decision that runs before this is ever called.
    fn create(&self, datagram: &RecvDatagram, packet: &RecvPacket) -> Option<ConnectionHandle>;
}

/// In-memory test double assigning sequential handles to every accepted attempt.
pub mod testing {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingConnectionFactory {
        next_handle: AtomicU64,
        reject: std::sync::atomic::AtomicBool,
        pub created: Mutex<Vec<ConnectionHandle>>,
        pub created_with_valid_token: Mutex<Vec<bool>>,
    }

    impl RecordingConnectionFactory {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_reject(&self, reject: bool) {
            self.reject.store(reject, Ordering::SeqCst);
        }
    }

    impl ConnectionFactory for RecordingConnectionFactory {
        fn create(&self, _datagram: &RecvDatagram, packet: &RecvPacket) -> Option<ConnectionHandle> {
            if self.reject.load(Ordering::SeqCst) {
                return None;
            }
            let handle = self.next_handle.fetch_add(1, Ordering::SeqCst);
            self.created.lock().unwrap().push(handle);
            self.created_with_valid_token
                .lock()
                .unwrap()
                .push(packet.valid_token);
            Some(handle)
        }
    }
}
