// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The receive pipeline (spec §4.5/§4.6): the datapath callback's entry point. Demultiplexes a
//! chain of datagrams to connections, queues stateless responses, and creates new connections —
//! all without blocking, and always returning every datagram it does not retain.

use super::{config, Binding};
use crate::binding::{
    datapath::{Datapath, RecvDatagram, StatelessOpKind, WorkerOp},
    error::DropReason,
    invariant::{self, LongPacketKind, RecvPacket},
    lookup::{ConnectionHandle, RemoteKey},
    response,
    stateless::{AdmitError, StatelessOpHandle},
};
use s2n_quic_core::{connection, inet::SocketAddress};
use std::time::Instant;

impl<D: Datapath> Binding<D> {
    /// Runs the receive pipeline over one datapath callback's worth of datagrams.
    ///
    /// `exclusive` mirrors spec's per-binding `exclusive` attribute: when set, DestCID grouping
    /// is skipped (every datagram belongs to the binding's one connection) and no stateless
    /// response is ever generated on a lookup miss. Returns every datagram the pipeline did not
    /// hand off to a connection or a stateless operation, for the datapath to reclaim.
    pub fn receive(
        &self,
        chain: Vec<RecvDatagram>,
        exclusive: bool,
        server_owned: bool,
        now: Instant,
    ) -> Vec<RecvDatagram> {
        let mut released = Vec::new();
        let mut subchain: Vec<(RecvDatagram, RecvPacket)> = Vec::new();
        let mut subchain_dest_cid: Option<Box<[u8]>> = None;

        for datagram in chain {
            if self.test_hook_drops(&datagram) {
                tracing::debug!(reason = %DropReason::TestHookDrop, "receive test hook dropped datagram");
                released.push(datagram);
                continue;
            }

            let parsed = match invariant::parse(&datagram.payload, self.config().connection_id_len)
            {
                Ok(parsed) => parsed,
                Err(_) => {
                    tracing::debug!(reason = %DropReason::InvariantHeaderInvalid, "invariant header failed to parse");
                    released.push(datagram);
                    continue;
                }
            };

            if !parsed.is_short_header && !parsed.is_version_negotiation {
                let version = parsed.version.expect("long header always carries a version");
                if !self.config().supported_versions.contains(&version) {
                    if self.has_listener() {
                        self.queue_stateless_op(StatelessOpKind::VersionNegotiation, datagram, now);
                    } else {
                        tracing::debug!(reason = %DropReason::UnsupportedVersionNoListener, version, "unsupported version and no listener");
                        released.push(datagram);
                    }
                    continue;
                }
            }

            let starts_new_subchain = !exclusive
                && subchain_dest_cid
                    .as_deref()
                    .is_some_and(|cid| cid != &*parsed.dest_cid);

            if starts_new_subchain {
                self.deliver_subchain(
                    std::mem::take(&mut subchain),
                    exclusive,
                    server_owned,
                    now,
                    &mut released,
                );
                subchain_dest_cid = None;
            }
            if subchain_dest_cid.is_none() {
                subchain_dest_cid = Some(parsed.dest_cid.clone());
            }
            subchain.push((datagram, parsed));
        }

        if !subchain.is_empty() {
            self.deliver_subchain(subchain, exclusive, server_owned, now, &mut released);
        }

        released
    }

    fn has_listener(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// The datapath's Unreachable callback (spec §6): the OS told us a prior send to
    /// `remote_address` came back as ICMP-unreachable. The binding's only job is to find which
    /// connection owns that remote address and forward the signal; it carries no connection ID
    /// to do an exact lookup with, so this is the one path that uses
    /// [`crate::binding::lookup::ConnectionLookup::find_by_remote_addr`] instead of a keyed hash.
    pub fn on_unreachable(&self, remote_address: SocketAddress) {
        let Some(connection) = self.lookup().find_by_remote_addr(&remote_address) else {
            tracing::debug!(%remote_address, "unreachable signal for unknown remote address");
            return;
        };
        let Some(worker) = self.worker_pool().worker_for_connection(connection) else {
            tracing::debug!(reason = %DropReason::WorkerOverloaded, "connection has no assigned worker for unreachable signal");
            return;
        };
        let _ = worker.try_send(WorkerOp::Unreachable {
            connection,
            remote_address,
        });
    }

    /// `_server_owned` mirrors spec's per-binding attribute distinguishing a server-owned
    /// multiplexed binding from a client's exclusive one; the lookup strategy below already
    /// derives the same split from `exclusive`/`head.is_short_header`, so it is carried only for
    /// callers that want to assert it matches their own bookkeeping.
    fn deliver_subchain(
        &self,
        mut subchain: Vec<(RecvDatagram, RecvPacket)>,
        exclusive: bool,
        _server_owned: bool,
        now: Instant,
        released: &mut Vec<RecvDatagram>,
    ) {
        if subchain.is_empty() {
            return;
        }

        // Handshake-first ordering (spec §4.5 step 4): a stable sort on "is data packet" keeps
        // handshake packets (Initial/ZeroRtt/Handshake/Retry) at the front in arrival order,
        // followed by data (short-header) packets in their own arrival order.
        subchain.sort_by_key(|(_, packet)| !packet.is_handshake());

        let head_tuple = subchain[0].0.tuple;
        let head = &subchain[0].1;

        let found = if exclusive || head.is_short_header {
            connection::LocalId::try_from_bytes(&head.dest_cid)
                .and_then(|cid| self.lookup().find_by_local_cid(&cid))
        } else {
            let source_cid = head.source_cid.as_deref().unwrap_or(&[]);
            let key = RemoteKey::new(head_tuple.remote_address, source_cid);
            self.lookup().find_by_remote_hash(&key)
        };
        if let Some(connection) = found {
            self.dispatch_to_connection(connection, subchain, released);
            return;
        }

        if exclusive {
            tracing::debug!(reason = %DropReason::ExclusiveBindingNoMatch, "exclusive binding received unknown DestCID");
            release_all(subchain, released);
            return;
        }

        if head.is_short_header {
            let (head_datagram, _) = subchain.remove(0);
            release_all(subchain, released);
            if !self.config().stateless_reset_enabled {
                tracing::debug!(reason = %DropReason::StatelessResetDisabled, "stateless reset disabled");
                released.push(head_datagram);
                return;
            }
            self.queue_stateless_op(StatelessOpKind::Reset, head_datagram, now);
            return;
        }

        if head.is_version_negotiation {
            tracing::debug!(reason = %DropReason::VersionNegotiationFromPeer, "received VN as a server");
            release_all(subchain, released);
            return;
        }

        if head.long_kind != Some(LongPacketKind::Initial) {
            tracing::debug!(reason = %DropReason::NonInitialLongHeaderNoConnection, "non-initial long header matched no connection");
            release_all(subchain, released);
            return;
        }

        if !self.has_listener() {
            tracing::debug!(reason = %DropReason::NoListenerRegistered, "no listener to accept new connection");
            release_all(subchain, released);
            return;
        }

        let (head_datagram, head_packet) = subchain.remove(0);

        match &head_packet.token {
            Some(token) if !token.is_empty() => {
                let new_cid = connection::LocalId::try_from_bytes(&head_packet.dest_cid);
                let validated = new_cid.and_then(|new_cid| {
                    self.retry_tokens()
                        .validate(token, &head_datagram.tuple.remote_address, &new_cid)
                        .ok()
                });
                if validated.is_none() {
                    tracing::debug!(reason = %DropReason::InvalidRetryToken, "retry token failed validation");
                    release_all(subchain, released);
                    released.push(head_datagram);
                    return;
                }
                let mut head_packet = head_packet;
                head_packet.valid_token = true;
                self.create_connection(head_datagram, head_packet, subchain, released);
            }
            _ => {
                let under_pressure = self
                    .memory_tracker()
                    .is_under_pressure(self.config().retry_memory_limit_ratio);
                if under_pressure {
                    release_all(subchain, released);
                    self.queue_stateless_op(StatelessOpKind::Retry, head_datagram, now);
                } else {
                    self.create_connection(head_datagram, head_packet, subchain, released);
                }
            }
        }
    }

    fn dispatch_to_connection(
        &self,
        connection: ConnectionHandle,
        subchain: Vec<(RecvDatagram, RecvPacket)>,
        released: &mut Vec<RecvDatagram>,
    ) {
        let Some(worker) = self.worker_pool().worker_for_connection(connection) else {
            tracing::debug!(reason = %DropReason::WorkerOverloaded, "connection has no assigned worker");
            release_all(subchain, released);
            return;
        };
        let datagrams: Vec<RecvDatagram> = subchain.into_iter().map(|(d, _)| d).collect();
        if worker
            .try_send(WorkerOp::Deliver {
                connection,
                datagrams,
            })
            .is_err()
        {
            tracing::debug!(reason = %DropReason::WorkerOverloaded, "worker queue full for existing connection");
        }
    }

    fn create_connection(
        &self,
        head_datagram: RecvDatagram,
        head_packet: RecvPacket,
        rest: Vec<(RecvDatagram, RecvPacket)>,
        released: &mut Vec<RecvDatagram>,
    ) {
        let remote_address = head_datagram.tuple.remote_address;
        let source_cid: Box<[u8]> = head_packet.source_cid.clone().unwrap_or_default();

        let Some(connection) = self.connection_factory().create(&head_datagram, &head_packet)
        else {
            release_all(rest, released);
            released.push(head_datagram);
            return;
        };

        let worker = match self.worker_pool().assign_worker(connection) {
            Ok(worker) => worker,
            Err(_) => {
                tracing::debug!(reason = %DropReason::WorkerOverloaded, "no worker available for new connection");
                release_all(rest, released);
                released.push(head_datagram);
                return;
            }
        };

        let key = RemoteKey::new(remote_address, &source_cid);
        let (inserted, existing) = self.lookup().add_remote_hash(key, connection);
        let winner = if inserted {
            connection
        } else {
            // collision: another receive callback already registered this (remote, source CID)
            // pair. The loser is silently shut down through the worker we just assigned it —
            // no new allocation beyond the shutdown op itself, matching spec's pre-allocated
            // back-up-operation intent for this out-of-scope connection collaborator.
            let _ = worker.try_send(WorkerOp::SilentShutdown { connection });
            existing.expect("collision path always yields an existing connection")
        };

        let mut datagrams = Vec::with_capacity(1 + rest.len());
        datagrams.push(head_datagram);
        datagrams.extend(rest.into_iter().map(|(d, _)| d));

        if let Some(winning_worker) = self.worker_pool().worker_for_connection(winner) {
            if winning_worker
                .try_send(WorkerOp::Deliver {
                    connection: winner,
                    datagrams,
                })
                .is_err()
            {
                tracing::debug!(reason = %DropReason::WorkerOverloaded, "worker queue full delivering new connection's first datagrams");
            }
        }
    }

    /// Admits a stateless operation for `datagram` and hands it to a worker to build the actual
    /// response (spec §4.4 `Queue`).
    fn queue_stateless_op(&self, kind: StatelessOpKind, datagram: RecvDatagram, now: Instant) {
        let worker = match self.worker_pool().acquire_worker() {
            Ok(worker) => worker,
            Err(_) => {
                tracing::debug!(reason = %DropReason::WorkerOverloaded, ?kind, "no worker available for stateless operation");
                return;
            }
        };

        let remote_address = datagram.tuple.remote_address;
        match self.stateless().create(remote_address, now) {
            Ok(op) => {
                if worker
                    .try_send(WorkerOp::ProcessStateless { op, kind, datagram })
                    .is_err()
                {
                    tracing::debug!(reason = %DropReason::WorkerOverloaded, ?kind, "worker rejected stateless op after admission");
                    self.stateless().release(op);
                }
            }
            Err(AdmitError::RateLimited) => {
                tracing::debug!(reason = %DropReason::StatelessOperationRateLimited, ?kind, "stateless operation table at capacity");
            }
            Err(AdmitError::Duplicate) => {
                tracing::debug!(reason = %DropReason::StatelessOperationDuplicate, ?kind, "duplicate stateless operation in flight");
            }
        }
    }

    /// Builds and sends the actual stateless response (spec §4.4 `Process`), run by whichever
    /// worker popped the [`WorkerOp::ProcessStateless`] operation off its queue.
    pub fn process_stateless_op(
        &self,
        op: StatelessOpHandle,
        kind: StatelessOpKind,
        datagram: RecvDatagram,
    ) {
        self.stateless().release(op);

        let parsed = match invariant::parse(&datagram.payload, self.config().connection_id_len) {
            Ok(parsed) => parsed,
            Err(_) => return,
        };

        let local = datagram.tuple.local_address;
        let remote = datagram.tuple.remote_address;

        match kind {
            StatelessOpKind::VersionNegotiation => {
                let versions: Vec<u32> = self.config().supported_versions.iter().copied().collect();
                let reserved = self.random_reserved_version();
                let bytes = response::generate_version_negotiation(
                    &parsed.dest_cid,
                    parsed.source_cid.as_deref().unwrap_or(&[]),
                    reserved,
                    &versions,
                );
                let _ = self.send_from_to(local, remote, bytes);
            }
            StatelessOpKind::Retry => {
                let cid_len = self.config().connection_id_len;
                let new_cid_bytes = self.with_random(|rng| {
                    let mut bytes = vec![0u8; cid_len];
                    rng.public_random_fill(&mut bytes);
                    bytes
                });
                let Some(new_cid) = connection::LocalId::try_from_bytes(&new_cid_bytes) else {
                    return;
                };
                let Some(orig_conn_id) = connection::InitialId::try_from_bytes(&parsed.dest_cid)
                else {
                    return;
                };
                let token = self
                    .retry_tokens()
                    .generate(&remote, &orig_conn_id, &new_cid);
                let version = parsed
                    .version
                    .unwrap_or(self.config().supported_versions[0]);
                let bytes = response::generate_retry(
                    version,
                    parsed.source_cid.as_deref().unwrap_or(&[]),
                    &new_cid,
                    &parsed.dest_cid,
                    &token,
                    self.retry_integrity(),
                );
                let _ = self.send_from_to(local, remote, bytes);
            }
            StatelessOpKind::Reset => {
                if !self.config().stateless_reset_enabled {
                    return;
                }
                let token = self.generate_stateless_reset_token(&parsed.dest_cid);
                let triggering_len = datagram.payload.len();
                let mut buf = vec![0u8; config::RECOMMENDED_STATELESS_RESET_PACKET_LENGTH * 2];
                let encoded_len = self.with_random(|rng| {
                    response::generate_stateless_reset(token, 16, triggering_len, rng, &mut buf)
                });
                match encoded_len {
                    Some(len) => {
                        buf.truncate(len);
                        let _ = self.send_from_to(local, remote, buf);
                    }
                    None => {
                        tracing::debug!(reason = %DropReason::PacketTooSmallForReset, "triggering packet too small for an indistinguishable reset");
                    }
                }
            }
        }
    }
}

fn release_all(subchain: Vec<(RecvDatagram, RecvPacket)>, released: &mut Vec<RecvDatagram>) {
    released.extend(subchain.into_iter().map(|(d, _)| d));
}
