// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! A `Binding` owns one UDP socket's worth of QUIC demultiplexing state: the connection lookup
//! table, the listener registry, the stateless-operation tracker, and the keys a binding needs to
//! answer on its own behalf (Retry, Stateless Reset). Everything that actually *terminates*
//! QUIC — TLS, the connection state machine, socket I/O, worker scheduling — is injected.

pub mod config;
pub mod connection;
pub mod datapath;
pub mod error;
pub mod invariant;
pub mod listener;
pub mod lookup;
pub mod memory;
pub mod recv;
pub mod response;
pub mod reset_token;
pub mod retry_token;
pub mod stateless;
pub mod system_random;
pub mod worker;

use config::BindingConfig;
use connection::ConnectionFactory;
use datapath::{Datapath, DatapathHandle, DatapathSendError, SendDatagram, Tuple};
use error::BindingError;
use listener::{ListenerEntry, ListenerRegistry, ListenerSession};
use lookup::ConnectionLookup;
use memory::HandshakeMemoryTracker;
use retry_token::{AeadRetryTokenFormat, RetryIntegrityKey};
use s2n_quic_core::{
    inet::SocketAddress,
    random,
    stateless_reset::{self, token::Generator as ResetTokenGenerator},
};
use stateless::StatelessOpTracker;
use std::sync::{Arc, Mutex};
use worker::WorkerPool;

/// The parties a `Binding` delegates to, grouped so construction takes one argument instead of
/// five. Each is a trait object because the binding itself never needs to be generic over their
/// concrete type — only [`Datapath`] varies per call site (real sockets vs. the test double), and
/// even that only because `send_to`/`send_from_to` take the handle it returned.
pub struct BindingCollaborators {
    pub worker_pool: Arc<dyn WorkerPool>,
    pub connection_factory: Arc<dyn ConnectionFactory>,
    pub memory_tracker: Arc<dyn HandshakeMemoryTracker>,
}

/// The per-socket binding core (spec §3's `Binding`).
pub struct Binding<D: Datapath> {
    config: BindingConfig,
    local_address: SocketAddress,
    datapath: Arc<D>,
    datapath_handle: DatapathHandle,
    listeners: ListenerRegistry,
    lookup: ConnectionLookup,
    stateless: StatelessOpTracker,
    retry_tokens: AeadRetryTokenFormat,
    retry_integrity: RetryIntegrityKey,
    reset_tokens: Mutex<Box<dyn ResetTokenGenerator>>,
    random: Mutex<Box<dyn random::Generator>>,
    worker_pool: Arc<dyn WorkerPool>,
    connection_factory: Arc<dyn ConnectionFactory>,
    memory_tracker: Arc<dyn HandshakeMemoryTracker>,
    /// Test-only receive hook (spec §9: "treat as a mockable send interface rather than a
    /// compile flag"). `None` in production; set by tests to force specific datagrams to drop.
    test_hook: Mutex<Option<Box<dyn Fn(&datapath::RecvDatagram) -> bool + Send>>>,
}

impl<D: Datapath> Binding<D> {
    /// Registers a new binding against `datapath` at `local_address` (spec §4.1 `Initialize`).
    ///
    /// `retry_token_key`/`reset_token_key` seed the two keyed functions a binding computes on its
    /// own: the AEAD Retry token (rotatable afterward via [`Binding::rotate_retry_token_key`]) and
    /// the HMAC Stateless Reset token (fixed for the binding's lifetime, per spec §4.1/§9 — a
    /// restart naturally invalidates previously issued reset tokens).
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        config: BindingConfig,
        local_address: SocketAddress,
        datapath: Arc<D>,
        collaborators: BindingCollaborators,
        retry_token_key: [u8; 16],
        reset_token_key: [u8; 32],
        random_generator: Box<dyn random::Generator>,
    ) -> Result<Self, BindingError> {
        let datapath_handle = datapath
            .register(local_address)
            .map_err(|err| BindingError::Datapath(Box::new(err)))?;

        let retry_expiration_ms = config.stateless_operation_expiration.as_millis() as u64;

        Ok(Self {
            lookup: ConnectionLookup::new(1),
            listeners: ListenerRegistry::new(),
            stateless: StatelessOpTracker::new(
                config.max_stateless_operations,
                config.stateless_operation_expiration,
            ),
            retry_tokens: AeadRetryTokenFormat::new(retry_token_key, retry_expiration_ms),
            retry_integrity: RetryIntegrityKey::new(),
            reset_tokens: Mutex::new(Box::new(reset_token::HmacResetTokenGenerator::new(
                reset_token_key,
            ))),
            random: Mutex::new(random_generator),
            worker_pool: collaborators.worker_pool,
            connection_factory: collaborators.connection_factory,
            memory_tracker: collaborators.memory_tracker,
            test_hook: Mutex::new(None),
            config,
            local_address,
            datapath,
            datapath_handle,
        })
    }

    /// Tears down the binding (spec §4.1 `Uninitialize`). Consumes `self` so nothing can call
    /// back into it afterward; the blocking wait for in-flight receive callbacks to drain is the
    /// datapath's responsibility, anchored on [`DatapathHandle::delete`].
    pub fn uninitialize(self) {
        self.datapath_handle.delete();
    }

    pub fn local_address(&self) -> SocketAddress {
        self.local_address
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    // -- Listener registry (spec §4.2) --------------------------------------------------------

    /// Registers a listener, growing the lookup table's shard count to the binding's configured
    /// worker count the first time a listener is added (server bindings fan out across workers;
    /// client-only bindings with no listeners never pay for more than one shard).
    pub fn register_listener(
        &self,
        local_address: SocketAddress,
        wildcard: bool,
        session: ListenerSession,
    ) -> Result<Arc<ListenerEntry>, ListenerSession> {
        let was_empty = self.listeners.is_empty();
        let entry = self.listeners.register(ListenerEntry {
            local_address,
            wildcard,
            session,
        })?;
        if was_empty {
            self.lookup.maximize_partitioning(self.config.worker_count);
        }
        Ok(entry)
    }

    pub fn unregister_listener(&self, entry: &Arc<ListenerEntry>) {
        self.listeners.unregister(entry);
    }

    pub fn get_listener(&self, local_address: &SocketAddress) -> Option<Arc<ListenerEntry>> {
        self.listeners.find(local_address)
    }

    // -- Send helpers (spec §4.8) --------------------------------------------------------------

    pub fn send_to(
        &self,
        remote: SocketAddress,
        payload: Vec<u8>,
    ) -> Result<(), DatapathSendError> {
        let datagram = SendDatagram {
            tuple: Tuple {
                local_address: self.local_address,
                remote_address: remote,
            },
            payload,
        };
        let result = self.datapath.send_to(&self.datapath_handle, remote, datagram);
        if let Err(ref err) = result {
            datapath::log_send_failure(err);
        }
        result
    }

    pub fn send_from_to(
        &self,
        local: SocketAddress,
        remote: SocketAddress,
        payload: Vec<u8>,
    ) -> Result<(), DatapathSendError> {
        let datagram = SendDatagram {
            tuple: Tuple {
                local_address: local,
                remote_address: remote,
            },
            payload,
        };
        let result = self
            .datapath
            .send_from_to(&self.datapath_handle, local, remote, datagram);
        if let Err(ref err) = result {
            datapath::log_send_failure(err);
        }
        result
    }

    /// Derives this binding's Stateless Reset token for `local_connection_id` (spec §4.8).
    pub fn generate_stateless_reset_token(
        &self,
        local_connection_id: &[u8],
    ) -> stateless_reset::token::Token {
        self.reset_tokens.lock().unwrap().generate(local_connection_id)
    }

    /// Draws a GREASE-style reserved version for Version Negotiation responses (spec §4.8),
    /// regenerated on every call per RFC 9000 §15.3's "vary between packets" recommendation.
    pub fn random_reserved_version(&self) -> u32 {
        response::random_reserved_version(&mut **self.random.lock().unwrap())
    }

    pub fn rotate_retry_token_key(&self, key: [u8; 16]) {
        self.retry_tokens.rotate_key(key);
    }

    pub(crate) fn lookup(&self) -> &ConnectionLookup {
        &self.lookup
    }

    pub(crate) fn stateless(&self) -> &StatelessOpTracker {
        &self.stateless
    }

    pub(crate) fn retry_tokens(&self) -> &AeadRetryTokenFormat {
        &self.retry_tokens
    }

    pub(crate) fn retry_integrity(&self) -> &RetryIntegrityKey {
        &self.retry_integrity
    }

    pub(crate) fn worker_pool(&self) -> &Arc<dyn WorkerPool> {
        &self.worker_pool
    }

    pub(crate) fn connection_factory(&self) -> &Arc<dyn ConnectionFactory> {
        &self.connection_factory
    }

    pub(crate) fn memory_tracker(&self) -> &Arc<dyn HandshakeMemoryTracker> {
        &self.memory_tracker
    }

    pub(crate) fn with_random<R>(&self, f: impl FnOnce(&mut dyn random::Generator) -> R) -> R {
        f(&mut **self.random.lock().unwrap())
    }

    /// Installs a receive-path test hook; every datagram for which it returns `true` is dropped
    /// before invariant parsing, mirroring the `#ifdef`-gated test hook branches noted in spec §9.
    pub fn set_receive_test_hook(
        &self,
        hook: Option<Box<dyn Fn(&datapath::RecvDatagram) -> bool + Send>>,
    ) {
        *self.test_hook.lock().unwrap() = hook;
    }

    pub(crate) fn test_hook_drops(&self, datagram: &datapath::RecvDatagram) -> bool {
        match self.test_hook.lock().unwrap().as_ref() {
            Some(hook) => hook(datagram),
            None => false,
        }
    }
}
