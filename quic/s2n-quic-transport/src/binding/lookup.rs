// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The connection lookup table: maps local connection IDs and (remote address, source
//! connection ID) pairs to connections.
//!
//! Partitioned into independently-locked shards so that concurrent receive callbacks on
//! different connections don't contend on a single lock. Partition count starts at 1 and is
//! grown (never shrunk) by [`ConnectionLookup::maximize_partitioning`] once at least one
//! listener is registered, matching the expectation that server bindings see far more
//! connections than client bindings.

use hashbrown::HashMap;
use s2n_quic_core::{connection::LocalId, inet::SocketAddress};
use siphasher::sip::SipHasher13;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, RwLock};

/// An opaque reference to a connection, owned by the connection collaborator. The lookup table
/// never dereferences it; it only compares and copies it.
pub type ConnectionHandle = u64;

/// The key used to find a connection by its peer-chosen source connection ID.
///
/// `source_cid` is stored as raw bytes (not `connection::PeerId`) because zero-length CIDs are
/// legal on the peer side and the lookup must not distinguish "no CID" from "empty CID".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RemoteKey {
    pub remote_address: SocketAddress,
    pub source_cid: Box<[u8]>,
}

impl RemoteKey {
    pub fn new(remote_address: SocketAddress, source_cid: &[u8]) -> Self {
        Self {
            remote_address,
            source_cid: source_cid.into(),
        }
    }
}

#[derive(Default)]
struct Shard {
    by_local_cid: HashMap<LocalId, ConnectionHandle>,
    by_remote: HashMap<RemoteKey, ConnectionHandle>,
}

pub struct ConnectionLookup {
    // Read for routine lookups (pick a shard), write only while re-partitioning.
    shards: RwLock<Vec<Mutex<Shard>>>,
    hash_keys: (u64, u64),
}

impl ConnectionLookup {
    pub fn new(partitions: usize) -> Self {
        let partitions = partitions.max(1);
        Self {
            shards: RwLock::new((0..partitions).map(|_| Mutex::default()).collect()),
            // fixed per-binding keys; randomizing per binding still avoids cross-binding
            // hash-flooding correlation without needing a process-wide secret.
            hash_keys: (0x5b4c_8f21_9a3d_7e60, 0x1d2e_3f40_5162_7384),
        }
    }

    fn shard_index(&self, shard_count: usize, hash_input: impl Hash) -> usize {
        let mut hasher = SipHasher13::new_with_keys(self.hash_keys.0, self.hash_keys.1);
        hash_input.hash(&mut hasher);
        (hasher.finish() as usize) % shard_count
    }

    fn with_shard<R>(&self, hash_input: impl Hash, f: impl FnOnce(&mut Shard) -> R) -> R {
        let shards = self.shards.read().unwrap();
        let index = self.shard_index(shards.len(), hash_input);
        let mut shard = shards[index].lock().unwrap();
        f(&mut shard)
    }

    pub fn add_local_cid(&self, cid: LocalId, conn: ConnectionHandle) -> Result<(), ()> {
        self.with_shard(cid, |shard| {
            if shard.by_local_cid.contains_key(&cid) {
                return Err(());
            }
            shard.by_local_cid.insert(cid, conn);
            Ok(())
        })
    }

    pub fn remove_local_cid(&self, cid: &LocalId) {
        self.with_shard(*cid, |shard| {
            shard.by_local_cid.remove(cid);
        });
    }

    /// Removes every local CID owned by `conn`, wherever it landed across shards.
    ///
    /// Used when a connection closes and gives up its whole CID set at once rather than one at a
    /// time; like [`ConnectionLookup::find_by_remote_addr`] this has no choice but to scan every
    /// shard, since there's no reverse index from connection to its CIDs.
    pub fn remove_local_cids(&self, conn: ConnectionHandle) {
        let shards = self.shards.read().unwrap();
        for shard in shards.iter() {
            let mut shard = shard.lock().unwrap();
            shard.by_local_cid.retain(|_, owner| *owner != conn);
        }
    }

    pub fn find_by_local_cid(&self, cid: &LocalId) -> Option<ConnectionHandle> {
        self.with_shard(*cid, |shard| shard.by_local_cid.get(cid).copied())
    }

    /// Inserts `conn` under `key` unless an entry already exists, in which case the existing
    /// connection is returned (and becomes the authoritative owner of that remote identity).
    pub fn add_remote_hash(
        &self,
        key: RemoteKey,
        conn: ConnectionHandle,
    ) -> (bool, Option<ConnectionHandle>) {
        self.with_shard(key.clone(), |shard| {
            if let Some(existing) = shard.by_remote.get(&key) {
                (false, Some(*existing))
            } else {
                shard.by_remote.insert(key, conn);
                (true, None)
            }
        })
    }

    pub fn remove_remote_hash(&self, key: &RemoteKey) {
        self.with_shard(key.clone(), |shard| {
            shard.by_remote.remove(key);
        });
    }

    pub fn find_by_remote_hash(&self, key: &RemoteKey) -> Option<ConnectionHandle> {
        self.with_shard(key.clone(), |shard| shard.by_remote.get(key).copied())
    }

    /// Finds any connection keyed under `remote_address`, regardless of source connection ID.
    ///
    /// Used by the datapath's Unreachable callback (spec §6), which only carries the 4-tuple, not
    /// a connection ID. Unlike [`ConnectionLookup::find_by_remote_hash`] this must scan every
    /// shard, since the remote address alone doesn't determine which partition a connection's
    /// `RemoteKey` hashed into.
    pub fn find_by_remote_addr(&self, remote_address: &SocketAddress) -> Option<ConnectionHandle> {
        let shards = self.shards.read().unwrap();
        for shard in shards.iter() {
            let shard = shard.lock().unwrap();
            if let Some((_, conn)) = shard
                .by_remote
                .iter()
                .find(|(key, _)| &key.remote_address == remote_address)
            {
                return Some(*conn);
            }
        }
        None
    }

    /// Moves every local CID owned by `conn` from `src` to `dst`, keyed to the same connection
    /// handle in both tables. Used when a connection rebinds onto a different local lookup (e.g.
    /// a worker migration), so the CIDs it already advertised to its peer keep resolving.
    ///
    /// Entries `dst` already owns for `conn` are left untouched; entries that collide with a
    /// *different* connection in `dst` are dropped from `src` without being re-added, since
    /// `dst`'s existing owner wins.
    pub fn move_local_cids(src: &ConnectionLookup, dst: &ConnectionLookup, conn: ConnectionHandle) {
        let owned: Vec<LocalId> = {
            let shards = src.shards.read().unwrap();
            shards
                .iter()
                .flat_map(|shard| {
                    let shard = shard.lock().unwrap();
                    shard
                        .by_local_cid
                        .iter()
                        .filter(|(_, owner)| **owner == conn)
                        .map(|(cid, _)| *cid)
                        .collect::<Vec<_>>()
                })
                .collect()
        };

        for cid in owned {
            src.remove_local_cid(&cid);
            let _ = dst.add_local_cid(cid, conn);
        }
    }

    /// Grows the partition count to at least `target`, redistributing every existing entry.
    /// Never shrinks — called when the first listener registers, or when worker parallelism
    /// otherwise increases.
    pub fn maximize_partitioning(&self, target: usize) -> bool {
        let mut shards = self.shards.write().unwrap();
        if shards.len() >= target {
            return false;
        }

        let mut new_shards: Vec<Mutex<Shard>> = (0..target).map(|_| Mutex::default()).collect();

        for shard in shards.drain(..) {
            let shard = shard.into_inner().unwrap();
            for (cid, conn) in shard.by_local_cid {
                let index = self.shard_index(target, cid);
                new_shards[index]
                    .get_mut()
                    .unwrap()
                    .by_local_cid
                    .insert(cid, conn);
            }
            for (key, conn) in shard.by_remote {
                let index = self.shard_index(target, key.clone());
                new_shards[index]
                    .get_mut()
                    .unwrap()
                    .by_remote
                    .insert(key, conn);
            }
        }

        *shards = new_shards;
        true
    }

    pub fn partition_count(&self) -> usize {
        self.shards.read().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s2n_quic_core::inet::ipv4::SocketAddressV4;
    use std::net::{Ipv4Addr, SocketAddrV4};

    fn remote(port: u16) -> SocketAddress {
        SocketAddress::IpV4(SocketAddressV4::from(SocketAddrV4::new(
            Ipv4Addr::new(127, 0, 0, 1),
            port,
        )))
    }

    #[test]
    fn local_cid_round_trip() {
        let lookup = ConnectionLookup::new(4);
        let cid = LocalId::try_from_bytes(b"abcd1234").unwrap();
        lookup.add_local_cid(cid, 42).unwrap();
        assert_eq!(lookup.find_by_local_cid(&cid), Some(42));
        lookup.remove_local_cid(&cid);
        assert_eq!(lookup.find_by_local_cid(&cid), None);
    }

    #[test]
    fn remote_hash_collision_returns_existing_owner() {
        let lookup = ConnectionLookup::new(4);
        let key = RemoteKey::new(remote(4433), b"scid1");
        let (inserted, existing) = lookup.add_remote_hash(key.clone(), 1);
        assert!(inserted);
        assert_eq!(existing, None);

        let (inserted, existing) = lookup.add_remote_hash(key, 2);
        assert!(!inserted);
        assert_eq!(existing, Some(1));
    }

    #[test]
    fn find_by_remote_addr_ignores_source_cid() {
        let lookup = ConnectionLookup::new(4);
        let key = RemoteKey::new(remote(4433), b"scid1");
        lookup.add_remote_hash(key, 1).0.then_some(()).unwrap();
        assert_eq!(lookup.find_by_remote_addr(&remote(4433)), Some(1));
        assert_eq!(lookup.find_by_remote_addr(&remote(4434)), None);
    }

    #[test]
    fn remove_local_cids_clears_every_shard() {
        let lookup = ConnectionLookup::new(8);
        let cids: Vec<LocalId> = (0u8..6)
            .map(|i| LocalId::try_from_bytes(&[i; 8]).unwrap())
            .collect();
        for &cid in &cids {
            lookup.add_local_cid(cid, 9).unwrap();
        }
        let other = LocalId::try_from_bytes(b"untouchd").unwrap();
        lookup.add_local_cid(other, 10).unwrap();

        lookup.remove_local_cids(9);

        for cid in cids {
            assert_eq!(lookup.find_by_local_cid(&cid), None);
        }
        assert_eq!(lookup.find_by_local_cid(&other), Some(10));
    }

    #[test]
    fn move_local_cids_transfers_ownership_across_lookups() {
        let src = ConnectionLookup::new(4);
        let dst = ConnectionLookup::new(4);
        let cids: Vec<LocalId> = (0u8..5)
            .map(|i| LocalId::try_from_bytes(&[i; 8]).unwrap())
            .collect();
        for &cid in &cids {
            src.add_local_cid(cid, 3).unwrap();
        }
        let other_owner = LocalId::try_from_bytes(b"otherown").unwrap();
        src.add_local_cid(other_owner, 99).unwrap();

        ConnectionLookup::move_local_cids(&src, &dst, 3);

        for cid in &cids {
            assert_eq!(src.find_by_local_cid(cid), None);
            assert_eq!(dst.find_by_local_cid(cid), Some(3));
        }
        // entries owned by a different connection are left alone
        assert_eq!(src.find_by_local_cid(&other_owner), Some(99));
        assert_eq!(dst.find_by_local_cid(&other_owner), None);
    }

    #[test]
    fn maximize_partitioning_preserves_entries() {
        let lookup = ConnectionLookup::new(1);
        let cid = LocalId::try_from_bytes(b"abcd1234").unwrap();
        lookup.add_local_cid(cid, 7).unwrap();

        assert!(lookup.maximize_partitioning(8));
        assert_eq!(lookup.partition_count(), 8);
        assert_eq!(lookup.find_by_local_cid(&cid), Some(7));

        // never shrinks
        assert!(!lookup.maximize_partitioning(2));
        assert_eq!(lookup.partition_count(), 8);
    }
}
