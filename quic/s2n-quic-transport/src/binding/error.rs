// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// Failures that can prevent a [`crate::Binding`] from being created or torn down.
///
/// The receive path never produces this type: an in-flight datagram that cannot be processed is
/// always dropped (see [`DropReason`]), never surfaced as an error.
#[derive(Debug)]
pub enum BindingError {
    OutOfMemory,
    InvalidAddress,
    Datapath(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "out of memory while initializing binding"),
            Self::InvalidAddress => write!(f, "invalid local or remote address"),
            Self::Datapath(err) => write!(f, "datapath error: {err}"),
        }
    }
}

impl std::error::Error for BindingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Datapath(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// The reason a datagram or stateless operation was dropped.
///
/// Every drop on the receive path carries one of these so it can be logged with a human-readable
/// reason, per the binding's error-handling contract: the receive path itself never fails, it only
/// silently (but traceably) declines to proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    InvariantHeaderInvalid,
    UnsupportedVersionNoListener,
    ExclusiveBindingNoMatch,
    UnattributedShortHeader,
    StatelessResetDisabled,
    VersionNegotiationFromPeer,
    NonInitialLongHeaderNoConnection,
    NoListenerRegistered,
    InvalidRetryToken,
    StatelessOperationRateLimited,
    StatelessOperationDuplicate,
    WorkerOverloaded,
    TestHookDrop,
    DatapathSendFailure,
    PacketTooSmallForReset,
}

impl DropReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvariantHeaderInvalid => "invariant header failed to parse",
            Self::UnsupportedVersionNoListener => {
                "unsupported version and no listener to negotiate with"
            }
            Self::ExclusiveBindingNoMatch => "exclusive binding received packet for unknown CID",
            Self::UnattributedShortHeader => "short header packet matched no connection",
            Self::StatelessResetDisabled => "stateless reset is disabled for this binding",
            Self::VersionNegotiationFromPeer => "received a version negotiation packet as a server",
            Self::NonInitialLongHeaderNoConnection => {
                "non-initial long header packet matched no connection"
            }
            Self::NoListenerRegistered => "no listener registered to accept a new connection",
            Self::InvalidRetryToken => "retry token failed validation",
            Self::StatelessOperationRateLimited => "stateless operation table at capacity",
            Self::StatelessOperationDuplicate => {
                "duplicate stateless operation already in flight for this remote address"
            }
            Self::WorkerOverloaded => "no worker available to accept new work",
            Self::TestHookDrop => "dropped by test hook",
            Self::DatapathSendFailure => "datapath failed to send response",
            Self::PacketTooSmallForReset => {
                "triggering packet too small to send an indistinguishable reset"
            }
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
