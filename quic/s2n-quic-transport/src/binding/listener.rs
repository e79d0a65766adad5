// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The listener registry: a sorted list of listeners a binding dispatches new connections to.

use s2n_quic_core::inet::{SocketAddress, Unspecified};
use smallvec::SmallVec;
use std::sync::{Arc, RwLock};

/// An ALPN protocol identifier, as carried in the TLS ClientHello.
pub type Alpn = Box<[u8]>;

/// The subset of a listener's TLS session state the binding needs to resolve ALPN overlap.
///
/// The real session negotiation lives with the (out of scope) TLS/connection collaborator; the
/// binding only ever asks whether two sessions would contend for the same ALPN set.
#[derive(Clone, Debug, Default)]
pub struct ListenerSession {
    pub alpn_protocols: SmallVec<[Alpn; 4]>,
}

impl ListenerSession {
    pub fn new(alpn_protocols: impl IntoIterator<Item = Alpn>) -> Self {
        Self {
            alpn_protocols: alpn_protocols.into_iter().collect(),
        }
    }

    /// Returns true if `self` and `other` share at least one ALPN protocol, or either session
    /// advertises no protocols at all (an unrestricted listener overlaps with everything).
    pub fn alpn_overlaps(&self, other: &Self) -> bool {
        if self.alpn_protocols.is_empty() || other.alpn_protocols.is_empty() {
            return true;
        }
        self.alpn_protocols
            .iter()
            .any(|a| other.alpn_protocols.iter().any(|b| a == b))
    }
}

pub struct ListenerEntry {
    pub local_address: SocketAddress,
    pub wildcard: bool,
    pub session: ListenerSession,
}

impl ListenerEntry {
    fn matches_address(&self, new_connection_local: &SocketAddress) -> bool {
        let family_matches = matches!(
            (self.local_address, *new_connection_local),
            (SocketAddress::IpV4(_), SocketAddress::IpV4(_))
                | (SocketAddress::IpV6(_), SocketAddress::IpV6(_))
        );

        family_matches && (self.wildcard || self.local_address.ip() == new_connection_local.ip())
    }
}

/// Family rank used to keep the most specific listeners first: IPv6 before IPv4, specific
/// addresses before wildcards. [`Unspecified::is_unspecified`] backs the wildcard check.
fn sort_key(entry: &ListenerEntry) -> (u8, u8) {
    let family_rank = match entry.local_address {
        SocketAddress::IpV6(_) => 0,
        SocketAddress::IpV4(_) => 1,
    };
    let specificity_rank = u8::from(entry.local_address.is_unspecified());
    (family_rank, specificity_rank)
}

/// The sorted set of listeners registered on a binding.
///
/// Exclusive access is only needed for registration/unregistration; lookups take a shared read
/// lock and never re-enter any other binding lock while holding it.
#[derive(Default)]
pub struct ListenerRegistry {
    entries: RwLock<Vec<Arc<ListenerEntry>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Attempts to register `entry`. Fails if an existing entry at the same (address, ALPN) slot
    /// would become ambiguous.
    pub fn register(&self, entry: ListenerEntry) -> Result<Arc<ListenerEntry>, ListenerSession> {
        let mut entries = self.entries.write().unwrap();

        let new_key = sort_key(&entry);
        let mut insert_at = entries.len();
        for (i, existing) in entries.iter().enumerate() {
            let existing_key = sort_key(existing);
            if existing_key > new_key {
                insert_at = i;
                break;
            }
            if existing_key == new_key
                && existing.matches_address(&entry.local_address)
                && existing.session.alpn_overlaps(&entry.session)
            {
                return Err(existing.session.clone());
            }
        }

        let entry = Arc::new(entry);
        entries.insert(insert_at, entry.clone());
        Ok(entry)
    }

    pub fn unregister(&self, entry: &Arc<ListenerEntry>) {
        let mut entries = self.entries.write().unwrap();
        entries.retain(|e| !Arc::ptr_eq(e, entry));
    }

    /// Finds the first listener willing to accept a new connection bound for
    /// `new_connection_local`.
    pub fn find(&self, new_connection_local: &SocketAddress) -> Option<Arc<ListenerEntry>> {
        let entries = self.entries.read().unwrap();
        entries
            .iter()
            .find(|entry| entry.matches_address(new_connection_local))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s2n_quic_core::inet::ipv4::SocketAddressV4;
    use std::net::{Ipv4Addr, SocketAddrV4};

    fn addr(a: u8, b: u8, c: u8, d: u8, port: u16) -> SocketAddress {
        SocketAddress::IpV4(SocketAddressV4::from(SocketAddrV4::new(
            Ipv4Addr::new(a, b, c, d),
            port,
        )))
    }

    fn entry(local: SocketAddress, wildcard: bool) -> ListenerEntry {
        ListenerEntry {
            local_address: local,
            wildcard,
            session: ListenerSession::default(),
        }
    }

    #[test]
    fn wildcard_matches_any_specific_address() {
        let registry = ListenerRegistry::new();
        registry
            .register(entry(addr(0, 0, 0, 0, 443), true))
            .unwrap();

        assert!(registry.find(&addr(10, 0, 0, 1, 443)).is_some());
    }

    #[test]
    fn specific_address_does_not_match_other_specific_address() {
        let registry = ListenerRegistry::new();
        registry
            .register(entry(addr(10, 0, 0, 1, 443), false))
            .unwrap();

        assert!(registry.find(&addr(10, 0, 0, 2, 443)).is_none());
    }

    #[test]
    fn overlapping_alpn_on_same_address_is_rejected() {
        let registry = ListenerRegistry::new();
        let mut first = entry(addr(10, 0, 0, 1, 443), false);
        first.session = ListenerSession::new([Box::from(b"h3".as_slice())]);
        registry.register(first).unwrap();

        let mut second = entry(addr(10, 0, 0, 1, 443), false);
        second.session = ListenerSession::new([Box::from(b"h3".as_slice())]);
        assert!(registry.register(second).is_err());
    }

    #[test]
    fn disjoint_alpn_on_same_address_is_allowed() {
        let registry = ListenerRegistry::new();
        let mut first = entry(addr(10, 0, 0, 1, 443), false);
        first.session = ListenerSession::new([Box::from(b"h3".as_slice())]);
        registry.register(first).unwrap();

        let mut second = entry(addr(10, 0, 0, 1, 443), false);
        second.session = ListenerSession::new([Box::from(b"doq".as_slice())]);
        assert!(registry.register(second).is_ok());
    }
}
