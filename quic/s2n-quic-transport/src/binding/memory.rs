// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Global handshake-memory accounting: an injected out-of-scope collaborator (spec §9 "global
//! library state... model as an injected dependency") the binding consults when deciding whether
//! an Initial packet should be answered with a Retry instead of admitted directly.

/// Reports current and total memory committed to in-progress handshakes across the whole
/// library, not just this binding.
pub trait HandshakeMemoryTracker: Send + Sync {
    fn current_usage(&self) -> u64;
    fn total_memory(&self) -> u64;

    /// Whether usage has crossed `ratio` of the total budget (spec §4.5's Retry-under-pressure
    /// decision: `current_usage >= retry_memory_limit_ratio * total_memory`).
    fn is_under_pressure(&self, ratio: f64) -> bool {
        let total = self.total_memory();
        if total == 0 {
            return false;
        }
        (self.current_usage() as f64) >= ratio * (total as f64)
    }
}

/// In-memory test double with adjustable usage for exercising the Retry-under-pressure path.
pub mod testing {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    pub struct FixedMemoryTracker {
        usage: AtomicU64,
        total: u64,
    }

    impl FixedMemoryTracker {
        pub fn new(total: u64) -> Self {
            Self {
                usage: AtomicU64::new(0),
                total,
            }
        }

        pub fn set_usage(&self, usage: u64) {
            self.usage.store(usage, Ordering::SeqCst);
        }
    }

    impl HandshakeMemoryTracker for FixedMemoryTracker {
        fn current_usage(&self) -> u64 {
            self.usage.load(Ordering::SeqCst)
        }

        fn total_memory(&self) -> u64 {
            self.total
        }
    }
}
