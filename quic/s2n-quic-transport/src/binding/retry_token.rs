// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Server-chosen Retry tokens: an AEAD-sealed capsule proving a client owns the address it
//! claims, distinct from the fixed RFC 9001 Retry Integrity Tag in
//! [`s2n_quic_core::crypto::retry`], which authenticates the packet itself rather than the
//! client's address.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes128Gcm, Key, Nonce,
};
use s2n_quic_core::{
    connection,
    crypto::retry::{IntegrityTag, INTEGRITY_TAG_LEN, NONCE_BYTES, SECRET_KEY_BYTES},
    inet::SocketAddress,
};
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const ADDRESS_PLAINTEXT_LEN: usize = 1 + 16 + 2 + 1 + connection::id::MAX_LEN;
const TIMESTAMP_LEN: usize = 8;

/// The fixed wire size of a retry token: `ValidateRetryToken` rejects anything else outright.
pub const RETRY_TOKEN_LEN: usize = TIMESTAMP_LEN + ADDRESS_PLAINTEXT_LEN + TAG_LEN;

#[derive(Debug, PartialEq, Eq)]
pub enum RetryTokenError {
    WrongLength,
    Expired,
    AddressMismatch,
    DecryptFailed,
    InvalidOrigConnIdLen,
}

/// A validated token's payload, handed back to the caller so it can recreate the client's
/// original-destination connection ID.
pub struct ValidatedToken {
    pub orig_conn_id: connection::InitialId,
}

fn fold_iv(cid_bytes: &[u8]) -> [u8; NONCE_LEN] {
    let mut iv = [0u8; NONCE_LEN];
    if cid_bytes.len() <= NONCE_LEN {
        iv[..cid_bytes.len()].copy_from_slice(cid_bytes);
    } else {
        let (head, tail) = cid_bytes.split_at(NONCE_LEN);
        iv.copy_from_slice(head);
        for (i, byte) in tail.iter().enumerate() {
            iv[i % NONCE_LEN] ^= byte;
        }
    }
    iv
}

fn encode_address(addr: &SocketAddress) -> [u8; 19] {
    let mut out = [0u8; 19];
    match addr {
        SocketAddress::IpV4(v4) => {
            let octets: [u8; 4] = (*v4.ip()).into();
            out[0] = 4;
            out[1..5].copy_from_slice(&octets);
            out[17..19].copy_from_slice(&v4.port().to_be_bytes());
        }
        SocketAddress::IpV6(v6) => {
            let octets: [u8; 16] = (*v6.ip()).into();
            out[0] = 6;
            out[1..17].copy_from_slice(&octets);
            out[17..19].copy_from_slice(&v6.port().to_be_bytes());
        }
    }
    out
}

fn address_matches(encoded: &[u8; 19], addr: &SocketAddress) -> bool {
    encoded == &encode_address(addr)
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Generates and validates AES-128-GCM-sealed Retry tokens.
///
/// The key is held behind a lock (per spec's "current stateless-retry key held on the library
/// under its own lock") so that a future key-rotation operation can swap it without the binding
/// needing to coordinate with in-flight validations beyond this one critical section.
pub struct AeadRetryTokenFormat {
    key: RwLock<Aes128Gcm>,
    expiration_ms: u64,
}

impl AeadRetryTokenFormat {
    pub fn new(key_bytes: [u8; 16], expiration_ms: u64) -> Self {
        let key = Key::<Aes128Gcm>::from_slice(&key_bytes);
        Self {
            key: RwLock::new(Aes128Gcm::new(key)),
            expiration_ms,
        }
    }

    pub fn rotate_key(&self, key_bytes: [u8; 16]) {
        let key = Key::<Aes128Gcm>::from_slice(&key_bytes);
        *self.key.write().unwrap() = Aes128Gcm::new(key);
    }

    /// Seals a token binding `remote_address` and `orig_conn_id` to `new_cid`, the
    /// freshly generated connection ID the Retry packet's source CID will carry.
    pub fn generate(
        &self,
        remote_address: &SocketAddress,
        orig_conn_id: &connection::InitialId,
        new_cid: &connection::LocalId,
    ) -> [u8; RETRY_TOKEN_LEN] {
        let nonce_bytes = fold_iv(new_cid.as_bytes());
        let nonce = Nonce::from_slice(&nonce_bytes);

        let timestamp = now_ms();
        let aad = timestamp.to_be_bytes();

        let mut plaintext = [0u8; ADDRESS_PLAINTEXT_LEN];
        plaintext[..19].copy_from_slice(&encode_address(remote_address));
        plaintext[19] = orig_conn_id.len() as u8;
        plaintext[20..20 + orig_conn_id.len()].copy_from_slice(orig_conn_id.as_bytes());

        let cipher = self.key.read().unwrap();
        let ciphertext = cipher
            .encrypt(
                nonce,
                aes_gcm::aead::Payload {
                    msg: &plaintext,
                    aad: &aad,
                },
            )
            .expect("fixed-size plaintext always fits within AEAD limits");

        let mut token = [0u8; RETRY_TOKEN_LEN];
        token[..TIMESTAMP_LEN].copy_from_slice(&aad);
        token[TIMESTAMP_LEN..].copy_from_slice(&ciphertext);
        token
    }

    /// Validates `token` was issued for `remote_address` and has not expired, returning the
    /// original destination connection ID it attests to.
    pub fn validate(
        &self,
        token: &[u8],
        remote_address: &SocketAddress,
        new_cid: &connection::LocalId,
    ) -> Result<ValidatedToken, RetryTokenError> {
        if token.len() != RETRY_TOKEN_LEN {
            return Err(RetryTokenError::WrongLength);
        }

        let (aad, ciphertext) = token.split_at(TIMESTAMP_LEN);
        let timestamp = u64::from_be_bytes(aad.try_into().unwrap());

        let age = now_ms().saturating_sub(timestamp);
        if age > self.expiration_ms {
            return Err(RetryTokenError::Expired);
        }

        let nonce_bytes = fold_iv(new_cid.as_bytes());
        let nonce = Nonce::from_slice(&nonce_bytes);

        let cipher = self.key.read().unwrap();
        let plaintext = cipher
            .decrypt(
                nonce,
                aes_gcm::aead::Payload {
                    msg: ciphertext,
                    aad,
                },
            )
            .map_err(|_| RetryTokenError::DecryptFailed)?;
        drop(cipher);

        let encoded_addr: [u8; 19] = plaintext[..19].try_into().unwrap();
        if !address_matches(&encoded_addr, remote_address) {
            return Err(RetryTokenError::AddressMismatch);
        }

        let orig_len = plaintext[19] as usize;
        if orig_len > connection::id::MAX_LEN {
            return Err(RetryTokenError::InvalidOrigConnIdLen);
        }
        let orig_conn_id = connection::InitialId::try_from_bytes(&plaintext[20..20 + orig_len])
            .ok_or(RetryTokenError::InvalidOrigConnIdLen)?;

        Ok(ValidatedToken { orig_conn_id })
    }
}

/// Computes the RFC 9001 §5.8 Retry Integrity Tag authenticating an outgoing Retry packet, or
/// validates one on an incoming packet the binding is treating as an echo of its own Retry.
///
/// Unlike [`AeadRetryTokenFormat`], this key is the fixed public value RFC 9001 mandates, not a
/// per-deployment secret — it authenticates that the packet bytes were not mangled in transit,
/// not that the client owns its claimed address.
pub struct RetryIntegrityKey {
    cipher: Aes128Gcm,
}

impl Default for RetryIntegrityKey {
    fn default() -> Self {
        let key = Key::<Aes128Gcm>::from_slice(&SECRET_KEY_BYTES);
        Self {
            cipher: Aes128Gcm::new(key),
        }
    }
}

impl RetryIntegrityKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the tag over `pseudo_packet` (the original DCID length+bytes followed by the
    /// Retry header and token, per RFC 9001 §5.8).
    pub fn generate_tag(&self, pseudo_packet: &[u8]) -> IntegrityTag {
        let nonce = Nonce::from_slice(&NONCE_BYTES);
        let sealed = self
            .cipher
            .encrypt(
                nonce,
                aes_gcm::aead::Payload {
                    msg: &[],
                    aad: pseudo_packet,
                },
            )
            .expect("empty plaintext always fits within AEAD limits");
        let mut tag = [0u8; INTEGRITY_TAG_LEN];
        tag.copy_from_slice(&sealed);
        tag
    }

    pub fn validate(&self, pseudo_packet: &[u8], tag: IntegrityTag) -> bool {
        self.generate_tag(pseudo_packet) == tag
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
    fn round_trips() {
        let format = AeadRetryTokenFormat::new([7u8; 16], 30_000);
        let new_cid = connection::LocalId::try_from_bytes(b"new-cid-bytes").unwrap();
        let orig = connection::InitialId::try_from_bytes(b"orig-conn-id").unwrap();
        let addr = remote(4433);

        let token = format.generate(&addr, &orig, &new_cid);
        let validated = format.validate(&token, &addr, &new_cid).unwrap();
        assert_eq!(validated.orig_conn_id.as_bytes(), orig.as_bytes());
    }

    #[test]
    fn rejects_wrong_remote_address() {
        let format = AeadRetryTokenFormat::new([7u8; 16], 30_000);
        let new_cid = connection::LocalId::try_from_bytes(b"new-cid-bytes").unwrap();
        let orig = connection::InitialId::try_from_bytes(b"orig-conn-id").unwrap();

        let token = format.generate(&remote(4433), &orig, &new_cid);
        let result = format.validate(&token, &remote(4434), &new_cid);
        assert_eq!(result.unwrap_err(), RetryTokenError::AddressMismatch);
    }

    #[test]
    fn rejects_tampered_byte() {
        let format = AeadRetryTokenFormat::new([7u8; 16], 30_000);
        let new_cid = connection::LocalId::try_from_bytes(b"new-cid-bytes").unwrap();
        let orig = connection::InitialId::try_from_bytes(b"orig-conn-id").unwrap();
        let addr = remote(4433);

        let mut token = format.generate(&addr, &orig, &new_cid);
        let last = token.len() - 1;
        token[last] ^= 0xff;

        let result = format.validate(&token, &addr, &new_cid);
        assert_eq!(result.unwrap_err(), RetryTokenError::DecryptFailed);
    }

    #[test]
    fn rejects_wrong_length() {
        let format = AeadRetryTokenFormat::new([7u8; 16], 30_000);
        let new_cid = connection::LocalId::try_from_bytes(b"new-cid-bytes").unwrap();
        let result = format.validate(&[0u8; 4], &remote(4433), &new_cid);
        assert_eq!(result.unwrap_err(), RetryTokenError::WrongLength);
    }

    #[test]
    fn retry_integrity_tag_matches_rfc9001_vector() {
        use s2n_quic_core::crypto::retry::example::{EXPECTED_TAG, PSEUDO_PACKET};
        let key = RetryIntegrityKey::new();
        assert_eq!(key.generate_tag(&PSEUDO_PACKET), EXPECTED_TAG);
        assert!(key.validate(&PSEUDO_PACKET, EXPECTED_TAG));
    }
}
