// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios (spec §8) driving a real [`Binding`] through its test-double
//! collaborators: a [`ChannelDatapath`] in place of real sockets, a single [`InlineWorker`]
//! behind a [`StaticWorkerPool`], a [`RecordingConnectionFactory`], and a [`FixedMemoryTracker`].

use super::*;
use crate::binding::{
    connection::testing::RecordingConnectionFactory,
    datapath::testing::{ChannelDatapath, InlineWorker},
    listener::ListenerSession,
    memory::testing::FixedMemoryTracker,
    worker::testing::StaticWorkerPool,
};
use s2n_quic_core::inet::ipv4::SocketAddressV4;
use s2n_quic_core::random::testing::Generator as TestRandomGenerator;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn addr(port: u16) -> SocketAddress {
    SocketAddress::IpV4(SocketAddressV4::from(SocketAddrV4::new(
        Ipv4Addr::new(127, 0, 0, 1),
        port,
    )))
}

fn encode_varint(value: u64, buf: &mut Vec<u8>) {
    if value <= 0x3f {
        buf.push(value as u8);
    } else if value <= 0x3fff {
        buf.extend_from_slice(&(((value as u16) | 0x4000).to_be_bytes()));
    } else if value <= 0x3fff_ffff {
        buf.extend_from_slice(&(((value as u32) | 0x8000_0000).to_be_bytes()));
    } else {
        buf.extend_from_slice(&((value | 0xC000_0000_0000_0000)).to_be_bytes());
    }
}

fn long_initial(dest_cid: &[u8], source_cid: &[u8], version: u32, token: &[u8]) -> Vec<u8> {
    let mut buf = vec![0xC0u8];
    buf.extend_from_slice(&version.to_be_bytes());
    buf.push(dest_cid.len() as u8);
    buf.extend_from_slice(dest_cid);
    buf.push(source_cid.len() as u8);
    buf.extend_from_slice(source_cid);
    encode_varint(token.len() as u64, &mut buf);
    buf.extend_from_slice(token);
    buf.extend_from_slice(&[0u8; 16]); // padding so the datagram isn't suspiciously tiny
    buf
}

fn short_header(dest_cid: &[u8], total_len: usize) -> Vec<u8> {
    let mut buf = vec![0x40u8];
    buf.extend_from_slice(dest_cid);
    while buf.len() < total_len {
        buf.push(0xab);
    }
    buf
}

struct Harness {
    binding: Binding<ChannelDatapath>,
    datapath: Arc<ChannelDatapath>,
    worker: Arc<InlineWorker>,
    factory: Arc<RecordingConnectionFactory>,
    memory: Arc<FixedMemoryTracker>,
}

fn harness(config: BindingConfig) -> Harness {
    let datapath = ChannelDatapath::new();
    let worker = InlineWorker::new();
    let worker_pool = Arc::new(StaticWorkerPool::new(worker.clone()));
    let factory = Arc::new(RecordingConnectionFactory::new());
    let memory = Arc::new(FixedMemoryTracker::new(1_000_000));

    let binding = Binding::initialize(
        config,
        addr(443),
        datapath.clone(),
        BindingCollaborators {
            worker_pool,
            connection_factory: factory.clone(),
            memory_tracker: memory.clone(),
        },
        [7u8; 16],
        [9u8; 32],
        Box::new(TestRandomGenerator::default()),
    )
    .unwrap();

    binding
        .register_listener(addr(443), true, ListenerSession::default())
        .unwrap();

    Harness {
        binding,
        datapath,
        worker,
        factory,
        memory,
    }
}

fn datagram(remote_port: u16, payload: Vec<u8>) -> datapath::RecvDatagram {
    datapath::RecvDatagram {
        tuple: datapath::Tuple {
            local_address: addr(443),
            remote_address: addr(remote_port),
        },
        payload,
    }
}

/// Parses the wire fields of a Retry packet built by `response::generate_retry`, for assertions.
fn parse_retry(bytes: &[u8]) -> (Box<[u8]>, Box<[u8]>, Box<[u8]>) {
    let mut offset = 5;
    let cscid_len = bytes[offset] as usize;
    offset += 1;
    let client_source_cid = bytes[offset..offset + cscid_len].to_vec().into_boxed_slice();
    offset += cscid_len;

    let new_cid_len = bytes[offset] as usize;
    offset += 1;
    let new_cid = bytes[offset..offset + new_cid_len].to_vec().into_boxed_slice();
    offset += new_cid_len;

    let token = bytes[offset..bytes.len() - 16].to_vec().into_boxed_slice();
    (client_source_cid, new_cid, token)
}

#[test]
fn version_negotiation_scenario() {
    let h = harness(BindingConfig::default());
    let now = Instant::now();

    let unsupported_version = 0xdead_beef;
    let packet = long_initial(b"client-d", b"client-s", unsupported_version, b"");
    let released = h
        .binding
        .receive(vec![datagram(5000, packet)], false, true, now);
    assert!(released.is_empty(), "VN-triggering packet is retained for the stateless worker");

    let ops = h.worker.drain();
    assert_eq!(ops.len(), 1);
    match ops.into_iter().next().unwrap() {
        datapath::WorkerOp::ProcessStateless { op, kind, datagram } => {
            assert_eq!(kind, datapath::StatelessOpKind::VersionNegotiation);
            h.binding.process_stateless_op(op, kind, datagram);
        }
        _ => panic!("expected a version negotiation operation"),
    }

    let sent = h.datapath.take_sent();
    assert_eq!(sent.len(), 1);
    let bytes = &sent[0].payload;
    assert_eq!(bytes[0] & 0x80, 0x80);
    assert_eq!(u32::from_be_bytes(bytes[1..5].try_into().unwrap()), 0);
    // RFC 9000 §17.2.1: the client's source CID becomes our destination CID and vice versa.
    let dcid_len = bytes[5] as usize;
    assert_eq!(&bytes[6..6 + dcid_len], b"client-s");
}

#[test]
fn stateless_reset_scenario() {
    let h = harness(BindingConfig::default());
    let now = Instant::now();

    let unknown_cid = [1u8; 8];
    let packet = short_header(&unknown_cid, 80);
    let released = h
        .binding
        .receive(vec![datagram(5001, packet)], false, true, now);
    assert!(released.is_empty());

    let ops = h.worker.drain();
    assert_eq!(ops.len(), 1);
    match ops.into_iter().next().unwrap() {
        datapath::WorkerOp::ProcessStateless { op, kind, datagram } => {
            assert_eq!(kind, datapath::StatelessOpKind::Reset);
            h.binding.process_stateless_op(op, kind, datagram);
        }
        _ => panic!("expected a stateless reset operation"),
    }

    let sent = h.datapath.take_sent();
    assert_eq!(sent.len(), 1);
    let bytes = &sent[0].payload;
    assert_eq!(bytes[0] >> 6, 0b01, "reset must look like a short header packet");
    let expected_token = h.binding.generate_stateless_reset_token(&unknown_cid);
    assert_eq!(&bytes[bytes.len() - 16..], expected_token.as_ref());
}

#[test]
fn retry_then_successful_connection_scenario() {
    let mut config = BindingConfig::default();
    config.retry_memory_limit_ratio = 0.5;
    let h = harness(config);
    h.memory.set_usage(900_000); // above the 50% threshold, forcing a Retry round trip

    let now = Instant::now();
    let client_source_cid = b"client-scid";
    let packet = long_initial(b"orig-dest-cid-1", client_source_cid, config::QUIC_VERSION_1, b"");
    let released = h
        .binding
        .receive(vec![datagram(5002, packet)], false, true, now);
    assert!(released.is_empty());

    let ops = h.worker.drain();
    assert_eq!(ops.len(), 1);
    let datapath::WorkerOp::ProcessStateless { op, kind, datagram: retry_trigger } =
        ops.into_iter().next().unwrap()
    else {
        panic!("expected a stateless retry operation");
    };
    assert_eq!(kind, datapath::StatelessOpKind::Retry);
    h.binding.process_stateless_op(op, kind, retry_trigger);

    let sent = h.datapath.take_sent();
    assert_eq!(sent.len(), 1);
    let (echoed_client_source_cid, new_cid, token) = parse_retry(&sent[0].payload);
    assert_eq!(&*echoed_client_source_cid, client_source_cid);

    // memory pressure has subsided by the time the client returns with the token.
    h.memory.set_usage(0);
    let retry_packet = long_initial(&new_cid, client_source_cid, config::QUIC_VERSION_1, &token);
    let released = h
        .binding
        .receive(vec![datagram(5002, retry_packet)], false, true, now);
    assert!(released.is_empty());

    assert_eq!(h.factory.created.lock().unwrap().len(), 1);
    assert_eq!(
        h.factory.created_with_valid_token.lock().unwrap().as_slice(),
        &[true],
        "connection created off a validated retry token must see valid_token set"
    );
    let ops = h.worker.drain();
    assert!(ops
        .iter()
        .any(|op| matches!(op, datapath::WorkerOp::Deliver { .. })));
}

#[test]
fn concurrent_create_collision_scenario() {
    let h = harness(BindingConfig::default());
    let now = Instant::now();

    let source_cid = b"same-source-cid";
    let first = long_initial(b"dest-one", source_cid, config::QUIC_VERSION_1, b"");
    let second = long_initial(b"dest-two", source_cid, config::QUIC_VERSION_1, b"");

    h.binding
        .receive(vec![datagram(5003, first)], false, true, now);
    h.binding
        .receive(vec![datagram(5003, second)], false, true, now);

    assert_eq!(h.factory.created.lock().unwrap().len(), 2, "both attempts create a connection");

    let ops = h.worker.drain();
    let shutdowns: Vec<_> = ops
        .iter()
        .filter(|op| matches!(op, datapath::WorkerOp::SilentShutdown { .. }))
        .collect();
    assert_eq!(shutdowns.len(), 1, "exactly one loser is silently shut down");

    let delivers: Vec<_> = ops
        .iter()
        .filter_map(|op| match op {
            datapath::WorkerOp::Deliver { connection, .. } => Some(*connection),
            _ => None,
        })
        .collect();
    // the winning connection (the first one registered) receives both subchains.
    assert_eq!(delivers.len(), 2);
    assert!(delivers.iter().all(|c| *c == delivers[0]));
}

#[test]
fn stateless_operation_age_out_scenario() {
    let mut config = BindingConfig::default();
    config.stateless_operation_expiration = Duration::from_millis(10);
    let h = harness(config);

    let t0 = Instant::now();
    let version = 0xdead_beef;
    let packet = long_initial(b"client-d", b"client-s", version, b"");
    h.binding
        .receive(vec![datagram(5004, packet.clone())], false, true, t0);
    assert_eq!(h.worker.drain().len(), 1);

    // a second request from the same remote address before expiration is deduplicated: nothing
    // new is queued (spec §4.4's `Duplicate` outcome).
    h.binding
        .receive(vec![datagram(5004, packet.clone())], false, true, t0);
    assert!(h.worker.drain().is_empty());

    // once the tracked operation has aged out, an identical request is admitted again.
    let t1 = t0 + Duration::from_millis(50);
    h.binding
        .receive(vec![datagram(5004, packet)], false, true, t1);
    assert_eq!(h.worker.drain().len(), 1);
}

#[test]
fn unreachable_callback_signals_owning_connection() {
    let h = harness(BindingConfig::default());
    let now = Instant::now();

    let source_cid = b"reachable-scid";
    let packet = long_initial(b"dest-cid", source_cid, config::QUIC_VERSION_1, b"");
    h.binding
        .receive(vec![datagram(5006, packet)], false, true, now);
    let connection = h.factory.created.lock().unwrap()[0];
    h.worker.drain();

    h.binding.on_unreachable(addr(5006));

    let ops = h.worker.drain();
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        datapath::WorkerOp::Unreachable {
            connection: signaled,
            remote_address,
        } => {
            assert_eq!(*signaled, connection);
            assert_eq!(*remote_address, addr(5006));
        }
        other => panic!("expected an unreachable signal, got {other:?}"),
    }

    // an address with no connection is a silent no-op.
    h.binding.on_unreachable(addr(9999));
    assert!(h.worker.drain().is_empty());
}

#[test]
fn exclusive_binding_drops_unmatched_packets_scenario() {
    let h = harness(BindingConfig::default());
    let now = Instant::now();

    let unknown_cid = [3u8; 8];
    let packet = short_header(&unknown_cid, 60);
    let released = h
        .binding
        .receive(vec![datagram(5005, packet)], true, false, now);

    assert_eq!(released.len(), 1, "an exclusive binding returns every unmatched datagram");
    assert!(h.worker.drain().is_empty());
    assert!(h.datapath.take_sent().is_empty());
}
