// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Deterministic, keyed Stateless Reset token generation (spec §4.8): the same local connection
//! ID always yields the same token from a given binding, without the binding needing to persist
//! a per-connection record of the token it handed out.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use s2n_quic_core::stateless_reset::token::{Generator, Token, LEN};

type HmacSha256 = Hmac<Sha256>;

/// Derives a [`Token`] as the first [`LEN`] bytes of `HMAC-SHA256(key, local_connection_id)`.
///
/// The key is generated once at binding initialization (spec §4.1) and held for the binding's
/// lifetime; it is never serialized or shared across bindings, so a restart naturally invalidates
/// every previously issued token, matching spec's "best-effort, not guaranteed across restarts"
/// note for Stateless Reset.
pub struct HmacResetTokenGenerator {
    key: [u8; 32],
}

impl HmacResetTokenGenerator {
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }
}

impl Generator for HmacResetTokenGenerator {
    fn generate(&mut self, local_connection_id: &[u8]) -> Token {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts keys of any length");
        mac.update(local_connection_id);
        let digest = mac.finalize().into_bytes();

        let mut bytes = [0u8; LEN];
        bytes.copy_from_slice(&digest[..LEN]);
        bytes.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_cid_yields_same_token() {
        let mut generator = HmacResetTokenGenerator::new([1u8; 32]);
        let a = generator.generate(b"connection-id-a");
        let b = generator.generate(b"connection-id-a");
        assert_eq!(a, b);
    }

    #[test]
    fn different_cids_yield_different_tokens() {
        let mut generator = HmacResetTokenGenerator::new([1u8; 32]);
        let a = generator.generate(b"connection-id-a");
        let b = generator.generate(b"connection-id-b");
        assert_ne!(a, b);
    }

    #[test]
    fn different_keys_yield_different_tokens_for_same_cid() {
        let mut a = HmacResetTokenGenerator::new([1u8; 32]);
        let mut b = HmacResetTokenGenerator::new([2u8; 32]);
        assert_ne!(
            a.generate(b"connection-id"),
            b.generate(b"connection-id")
        );
    }
}
