// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use core::time::Duration;
use smallvec::SmallVec;

/// The library-wide limits and tunables a [`crate::Binding`] consults.
///
/// Modeled as an injected struct rather than process-wide constants so tests can shrink limits
/// without changing compile-time configuration.
#[derive(Clone, Debug)]
pub struct BindingConfig {
    /// Upper bound on concurrently in-flight stateless operations (VN/Retry/Reset) per binding.
    pub max_stateless_operations: usize,
    /// A tracked stateless operation is aged out once it has been outstanding this long.
    pub stateless_operation_expiration: Duration,
    /// Length, in bytes, of connection IDs this binding generates for Retry.
    pub connection_id_len: usize,
    /// QUIC versions this binding accepts without triggering Version Negotiation.
    pub supported_versions: SmallVec<[u32; 2]>,
    /// Fraction of total handshake memory above which new connections require a Retry round trip.
    pub retry_memory_limit_ratio: f64,
    /// Whether unattributed short-header packets get a Stateless Reset response.
    pub stateless_reset_enabled: bool,
    /// Target number of lookup-table shards; `MaximizePartitioning` never goes below this.
    pub worker_count: usize,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            max_stateless_operations: MAX_BINDING_STATELESS_OPERATIONS,
            stateless_operation_expiration: Duration::from_millis(
                STATELESS_OPERATION_EXPIRATION_MS,
            ),
            connection_id_len: 8,
            supported_versions: SmallVec::from_slice(&[QUIC_VERSION_1]),
            retry_memory_limit_ratio: 1.0 / u16::MAX as f64,
            stateless_reset_enabled: true,
            worker_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

/// QUIC version 1 (RFC 9000).
pub const QUIC_VERSION_1: u32 = 0x0000_0001;

/// Default cap on concurrently tracked stateless operations.
pub const MAX_BINDING_STATELESS_OPERATIONS: usize = 4096;

/// Default age, in milliseconds, after which a tracked stateless operation is swept.
pub const STATELESS_OPERATION_EXPIRATION_MS: u64 = 3_000;

/// Length of a Stateless Reset token, per RFC 9000 section 10.3.
pub const STATELESS_RESET_TOKEN_LENGTH: usize = 16;

/// A stateless reset this size (plus jitter) is indistinguishable from a short-header packet.
pub const RECOMMENDED_STATELESS_RESET_PACKET_LENGTH: usize = 128;

/// Floor below which a stateless reset would be recognizably too short.
pub const MIN_STATELESS_RESET_PACKET_LENGTH: usize = 39;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = BindingConfig::default();
        assert!(config.max_stateless_operations > 0);
        assert!(!config.supported_versions.is_empty());
        assert!(config.supported_versions.contains(&QUIC_VERSION_1));
    }
}
