// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The binding's external collaborators: the datapath (UDP socket I/O) and the per-connection
//! worker pool. Both are out of scope for this crate's own implementation, but the binding must
//! compile against a concrete interface, so this module defines the traits and a pair of
//! in-memory test doubles that exercise the receive/send paths without real sockets.

use crate::binding::{error::DropReason, lookup::ConnectionHandle};
use s2n_quic_core::inet::SocketAddress;
use std::sync::Arc;

/// The source and destination addresses a datagram arrived on or is headed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuple {
    pub local_address: SocketAddress,
    pub remote_address: SocketAddress,
}

/// A single received datagram, owned for the duration of one `Receive` invocation.
///
/// Matches [`s2n_quic_core::io::rx::Entry`]'s shape (payload + remote address) but adds the
/// local address, since this binding may be bound to a wildcard address and needs it to resolve
/// which listener should accept a new connection.
#[derive(Debug)]
pub struct RecvDatagram {
    pub tuple: Tuple,
    pub payload: Vec<u8>,
}

/// An outbound datagram a stateless response or connection wants sent.
pub struct SendDatagram {
    pub tuple: Tuple,
    pub payload: Vec<u8>,
}

/// Returned by [`Datapath::send_to`]/[`Datapath::send_from_to`] on failure.
#[derive(Debug)]
pub struct DatapathSendError(pub Box<dyn std::error::Error + Send + Sync>);

impl std::fmt::Display for DatapathSendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "datapath send failed: {}", self.0)
    }
}

impl std::error::Error for DatapathSendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.0.as_ref())
    }
}

/// The out-of-scope UDP socket layer. A binding registers against one `Datapath` for its
/// lifetime.
pub trait Datapath: Send + Sync {
    /// Registers `binding` to receive datagrams and returns a handle used to tear it down.
    fn register(&self, local: SocketAddress) -> Result<DatapathHandle, DatapathSendError>;

    fn send_to(
        &self,
        handle: &DatapathHandle,
        remote: SocketAddress,
        datagram: SendDatagram,
    ) -> Result<(), DatapathSendError>;

    fn send_from_to(
        &self,
        handle: &DatapathHandle,
        local: SocketAddress,
        remote: SocketAddress,
        datagram: SendDatagram,
    ) -> Result<(), DatapathSendError>;
}

/// An opaque reference to a registered datapath binding. `delete` is the memory-safety anchor of
/// teardown: it must not return until every in-flight `receive` callback for this binding has
/// drained, since the binding is freed immediately afterward.
pub struct DatapathHandle {
    delete: Box<dyn FnOnce() + Send>,
}

impl DatapathHandle {
    pub fn new(delete: impl FnOnce() + Send + 'static) -> Self {
        Self {
            delete: Box::new(delete),
        }
    }

    pub fn delete(self) {
        (self.delete)()
    }
}

/// Signaled when a worker's queue is full; the caller drops and logs rather than blocking.
#[derive(Debug)]
pub struct Overloaded;

/// One unit of deferred work handed from the receive path to a connection-owning worker thread.
#[derive(Debug)]
pub enum WorkerOp {
    Deliver {
        connection: ConnectionHandle,
        datagrams: Vec<RecvDatagram>,
    },
    ProcessStateless {
        op: crate::binding::stateless::StatelessOpHandle,
        kind: StatelessOpKind,
        datagram: RecvDatagram,
    },
    SilentShutdown {
        connection: ConnectionHandle,
    },
    Unreachable {
        connection: ConnectionHandle,
        remote_address: SocketAddress,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatelessOpKind {
    VersionNegotiation,
    Retry,
    Reset,
}

/// A handle to a worker's inbound operation queue. The receive path never blocks on this: a full
/// queue is an immediate [`Overloaded`] rejection, logged with [`DropReason::WorkerOverloaded`].
pub trait WorkerHandle: Send + Sync {
    fn try_send(&self, op: WorkerOp) -> Result<(), Overloaded>;
}

pub(crate) fn log_send_failure(err: &DatapathSendError) {
    tracing::debug!(reason = %DropReason::DatapathSendFailure, error = %err, "datapath send failed");
}

/// In-memory test doubles used to drive the end-to-end scenarios without real sockets.
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every datagram it is asked to send, instead of touching a real socket.
    #[derive(Default)]
    pub struct ChannelDatapath {
        sent: Mutex<Vec<SendDatagram>>,
        fail_sends: std::sync::atomic::AtomicBool,
    }

    impl ChannelDatapath {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn take_sent(&self) -> Vec<SendDatagram> {
            std::mem::take(&mut self.sent.lock().unwrap())
        }

        pub fn set_fail_sends(&self, fail: bool) {
            self.fail_sends
                .store(fail, std::sync::atomic::Ordering::SeqCst);
        }
    }

    impl Datapath for ChannelDatapath {
        fn register(&self, _local: SocketAddress) -> Result<DatapathHandle, DatapathSendError> {
            Ok(DatapathHandle::new(|| {}))
        }

        fn send_to(
            &self,
            _handle: &DatapathHandle,
            _remote: SocketAddress,
            datagram: SendDatagram,
        ) -> Result<(), DatapathSendError> {
            if self.fail_sends.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(DatapathSendError("test hook: send disabled".into()));
            }
            self.sent.lock().unwrap().push(datagram);
            Ok(())
        }

        fn send_from_to(
            &self,
            handle: &DatapathHandle,
            _local: SocketAddress,
            remote: SocketAddress,
            datagram: SendDatagram,
        ) -> Result<(), DatapathSendError> {
            self.send_to(handle, remote, datagram)
        }
    }

    /// Runs every operation inline on the calling thread instead of dispatching to a real worker.
    #[derive(Default)]
    pub struct InlineWorker {
        pub ops: Mutex<Vec<WorkerOp>>,
        overloaded: std::sync::atomic::AtomicBool,
    }

    impl InlineWorker {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn set_overloaded(&self, overloaded: bool) {
            self.overloaded
                .store(overloaded, std::sync::atomic::Ordering::SeqCst);
        }

        pub fn drain(&self) -> Vec<WorkerOp> {
            std::mem::take(&mut self.ops.lock().unwrap())
        }
    }

    impl WorkerHandle for InlineWorker {
        fn try_send(&self, op: WorkerOp) -> Result<(), Overloaded> {
            if self.overloaded.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(Overloaded);
            }
            self.ops.lock().unwrap().push(op);
            Ok(())
        }
    }
}
