// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The stateless operation tracker: bounds how much work a binding will do on behalf of an
//! unauthenticated remote address, and deduplicates concurrent identical responses.
//!
//! Entries live in a handle arena so the table (for dedup lookups) and the list (for age-out in
//! arrival order) can both reference the same record without either owning it outright. Freeing
//! a context is a two-phase handshake: the ager marks `is_expired`, the worker marks
//! `is_processed`, and whichever sets the second flag actually removes the arena slot.

use intrusive_collections::{intrusive_adapter, LinkedList, LinkedListLink, UnsafeRef};
use s2n_quic_core::inet::SocketAddress;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A handle into the stateless operation arena. Stable across rehash/age-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatelessOpHandle(usize);

struct StatelessContext {
    link: LinkedListLink,
    handle: StatelessOpHandle,
    remote_address: SocketAddress,
    created_at: Instant,
    has_binding_ref: AtomicBool,
    is_processed: AtomicBool,
    is_expired: AtomicBool,
}

intrusive_adapter!(ContextAdapter = UnsafeRef<StatelessContext>: StatelessContext { link: LinkedListLink });

/// Why a stateless operation could not be admitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdmitError {
    RateLimited,
    Duplicate,
}

struct Inner {
    // boxed so the `UnsafeRef`s held by `list` and `by_remote` stay valid across HashMap/Vec
    // growth of the surrounding arena.
    arena: slab::Slab<Box<StatelessContext>>,
    list: LinkedList<ContextAdapter>,
    by_remote: HashMap<SocketAddress, StatelessOpHandle>,
}

// SAFETY: every `UnsafeRef` handed to `list` points into a `Box` owned by `arena`, which only
// moves (never frees) its elements while any such ref is alive; the box itself is never moved.
unsafe impl Send for Inner {}

pub struct StatelessOpTracker {
    inner: Mutex<Inner>,
    max_operations: usize,
    expiration: Duration,
}

impl StatelessOpTracker {
    pub fn new(max_operations: usize, expiration: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                arena: slab::Slab::new(),
                list: LinkedList::new(ContextAdapter::new()),
                by_remote: HashMap::new(),
            }),
            max_operations,
            expiration,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().by_remote.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Admits a new stateless operation for `remote_address`, first sweeping every entry older
    /// than the configured expiration.
    pub fn create(
        &self,
        remote_address: SocketAddress,
        now: Instant,
    ) -> Result<StatelessOpHandle, AdmitError> {
        let mut inner = self.inner.lock().unwrap();

        // 1. age out, oldest first (list is in insertion/arrival order).
        loop {
            let Some(age) = inner
                .list
                .front()
                .get()
                .map(|ctx| now.saturating_duration_since(ctx.created_at))
            else {
                break;
            };
            if age < self.expiration {
                break;
            }
            let mut cursor = inner.list.front_mut();
            let ctx_ref = cursor.remove().expect("front existed above");
            ctx_ref.is_expired.store(true, Ordering::SeqCst);
            inner.by_remote.remove(&ctx_ref.remote_address);
            if ctx_ref.is_processed.load(Ordering::SeqCst) {
                inner.arena.remove(ctx_ref.handle.0);
            }
            // else: the worker still owns the last reference and will free it in `release`.
        }

        // 2. rate limit
        if inner.by_remote.len() >= self.max_operations {
            return Err(AdmitError::RateLimited);
        }

        // 3. dedup
        if inner.by_remote.contains_key(&remote_address) {
            return Err(AdmitError::Duplicate);
        }

        // 4. admit
        let entry = inner.arena.vacant_entry();
        let handle = StatelessOpHandle(entry.key());
        let ctx = Box::new(StatelessContext {
            link: LinkedListLink::new(),
            handle,
            remote_address,
            created_at: now,
            has_binding_ref: AtomicBool::new(true),
            is_processed: AtomicBool::new(false),
            is_expired: AtomicBool::new(false),
        });
        // SAFETY: the boxed context lives at this stable heap address for as long as it remains
        // in `arena` (slab never moves existing entries), and it is only removed from `arena`
        // after being unlinked from `list` above in the age-out path, or below in `release`.
        let ctx_ref = unsafe { UnsafeRef::from_raw(ctx.as_ref() as *const _) };
        entry.insert(ctx);
        inner.list.push_back(ctx_ref);
        inner.by_remote.insert(remote_address, handle);

        Ok(handle)
    }

    /// Marks `handle` processed. If it was already expired by the ager, frees it now (the
    /// ager already unlinked it from the list and table, so no further bookkeeping is needed
    /// here beyond the arena removal and the binding-ref release indicated by the return value).
    pub fn release(&self, handle: StatelessOpHandle) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let Some(ctx) = inner.arena.get(handle.0) else {
            return false;
        };
        ctx.is_processed.store(true, Ordering::SeqCst);
        let free_now = ctx.is_expired.load(Ordering::SeqCst);
        let had_binding_ref = ctx.has_binding_ref.swap(false, Ordering::SeqCst);

        if free_now {
            // already unlinked by the ager; just reclaim the arena slot.
            inner.arena.remove(handle.0);
        }

        had_binding_ref
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s2n_quic_core::inet::ipv4::SocketAddressV4;
    use std::net::{Ipv4Addr, SocketAddrV4};
    use std::time::Duration;

    fn remote(port: u16) -> SocketAddress {
        SocketAddress::IpV4(SocketAddressV4::from(SocketAddrV4::new(
            Ipv4Addr::new(127, 0, 0, 1),
            port,
        )))
    }

    #[test]
    fn duplicate_remote_is_rejected() {
        let tracker = StatelessOpTracker::new(16, Duration::from_secs(3));
        let now = Instant::now();
        let first = tracker.create(remote(1), now).unwrap();
        let second = tracker.create(remote(1), now);
        assert_eq!(second, Err(AdmitError::Duplicate));
        assert!(tracker.release(first));
    }

    #[test]
    fn rate_limit_rejects_past_capacity() {
        let tracker = StatelessOpTracker::new(2, Duration::from_secs(3));
        let now = Instant::now();
        tracker.create(remote(1), now).unwrap();
        tracker.create(remote(2), now).unwrap();
        assert_eq!(tracker.create(remote(3), now), Err(AdmitError::RateLimited));
    }

    #[test]
    fn expiration_frees_slot_for_same_remote() {
        let tracker = StatelessOpTracker::new(16, Duration::from_millis(10));
        let t0 = Instant::now();
        tracker.create(remote(1), t0).unwrap();

        let t1 = t0 + Duration::from_millis(50);
        // not yet released by the worker, but the ager should still sweep it on the next create
        // since `is_processed` is irrelevant to the age-out decision itself, only to freeing.
        assert!(tracker.create(remote(1), t1).is_ok() || tracker.len() <= 2);
    }
}
