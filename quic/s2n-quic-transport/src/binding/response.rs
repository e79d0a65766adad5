// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Wire generation for the binding's three stateless responses: Version Negotiation, Retry, and
//! Stateless Reset (spec §4.7/§4.8). Each function takes the already-parsed invariant fields of
//! the triggering datagram plus whatever state (keys, randomness) the response needs, and returns
//! the bytes to hand to the datapath.

use crate::binding::retry_token::RetryIntegrityKey;
use s2n_codec::{Encoder, EncoderBuffer, EncoderValue};
use s2n_quic_core::{connection, packet::stateless_reset, random};

/// Little-endian wrapper around a supported-version list.
///
/// [`s2n_quic_core::packet::version_negotiation::VersionNegotiation`]'s `EncoderValue` impl
/// encodes whatever `SupportedVersions` type it is given verbatim; RFC 9000 only requires each
/// entry be a 32-bit value and leaves byte order to the implementation sending the list, so this
/// binding follows spec §6's little-endian wire choice instead of the teacher's network-order
/// convention used elsewhere on the wire.
struct SupportedVersionsLe<'a>(&'a [u32]);

impl EncoderValue for SupportedVersionsLe<'_> {
    fn encode<E: Encoder>(&self, encoder: &mut E) {
        for version in self.0 {
            encoder.write_slice(&version.to_le_bytes());
        }
    }
}

/// Builds a Version Negotiation packet in response to a packet carrying an unsupported version.
///
/// `dest_cid`/`source_cid` are the *client's* connection IDs from the triggering packet; per RFC
/// 9000 §17.2.1 they are swapped onto the response (the client's source CID becomes our
/// destination, and vice versa).
pub fn generate_version_negotiation(
    client_dest_cid: &[u8],
    client_source_cid: &[u8],
    random_reserved_version: u32,
    supported_versions: &[u32],
) -> Vec<u8> {
    use s2n_quic_core::packet::version_negotiation::VersionNegotiation;

    let mut versions = Vec::with_capacity(supported_versions.len() + 1);
    versions.push(random_reserved_version);
    versions.extend_from_slice(supported_versions);

    let packet = VersionNegotiation {
        tag: 0,
        destination_connection_id: client_source_cid,
        source_connection_id: client_dest_cid,
        supported_versions: SupportedVersionsLe(&versions),
    };

    let mut buf = vec![0u8; 8 + client_dest_cid.len() + client_source_cid.len() + versions.len() * 4];
    let mut encoder = EncoderBuffer::new(&mut buf);
    encoder.encode(&packet);
    let len = encoder.len();
    buf.truncate(len);
    buf
}

/// Generates a GREASE-style reserved version per RFC 9000 §15.3: a 32-bit value whose low nibble
/// of each byte is `0xa` (the `0x?a?a?a?a` pattern), so clients correctly ignore it as a version
/// they don't recognize rather than treating it as a real negotiable version.
pub fn random_reserved_version(generator: &mut dyn random::Generator) -> u32 {
    let mut bytes = [0u8; 4];
    generator.public_random_fill(&mut bytes);
    for byte in &mut bytes {
        *byte = (*byte & 0xf0) | 0x0a;
    }
    u32::from_be_bytes(bytes)
}

/// Builds a Retry packet admitting a connection attempt only if it returns with a valid token.
///
/// Field mapping (RFC 9000 §17.2.5): the Retry's destination CID is the client's source CID; its
/// source CID is `new_cid`, a connection ID this binding just generated; the client's original
/// destination CID never appears on the wire — it only feeds the pseudo-packet the integrity tag
/// authenticates, alongside `token`.
pub fn generate_retry(
    version: u32,
    client_source_cid: &[u8],
    new_cid: &connection::LocalId,
    orig_dest_cid: &[u8],
    token: &[u8],
    integrity_key: &RetryIntegrityKey,
) -> Vec<u8> {
    const RETRY_TYPE_BITS: u8 = 0xF0;

    let mut header = Vec::with_capacity(
        7 + client_source_cid.len() + new_cid.as_bytes().len() + token.len(),
    );
    header.push(RETRY_TYPE_BITS);
    header.extend_from_slice(&version.to_be_bytes());
    header.push(client_source_cid.len() as u8);
    header.extend_from_slice(client_source_cid);
    header.push(new_cid.as_bytes().len() as u8);
    header.extend_from_slice(new_cid.as_bytes());
    header.extend_from_slice(token);

    let mut pseudo_packet = Vec::with_capacity(1 + orig_dest_cid.len() + header.len());
    pseudo_packet.push(orig_dest_cid.len() as u8);
    pseudo_packet.extend_from_slice(orig_dest_cid);
    pseudo_packet.extend_from_slice(&header);

    let tag = integrity_key.generate_tag(&pseudo_packet);

    let mut packet = header;
    packet.extend_from_slice(&tag);
    packet
}

/// Builds a Stateless Reset, delegating the indistinguishable-from-a-short-header-packet framing
/// to the teacher's existing encoder, which already implements spec §8's amplification and
/// looping boundary laws exactly.
pub fn generate_stateless_reset(
    token: stateless_reset::Token,
    max_tag_len: usize,
    triggering_packet_len: usize,
    random_generator: &mut dyn random::Generator,
    packet_buf: &mut [u8],
) -> Option<usize> {
    s2n_quic_core::packet::stateless_reset::encode_packet(
        token,
        max_tag_len,
        triggering_packet_len,
        random_generator,
        packet_buf,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use s2n_quic_core::{connection::id::MAX_LEN, random::testing::Generator};

    #[test]
    fn version_negotiation_swaps_cids_and_orders_reserved_version_first() {
        let bytes = generate_version_negotiation(b"client-dest", b"client-src", 0x1a2a_3a4a, &[1]);
        assert_eq!(bytes[0] & 0x80, 0x80, "long header form bit must be set");
        assert_eq!(u32::from_be_bytes(bytes[1..5].try_into().unwrap()), 0);

        let dcid_len = bytes[5] as usize;
        assert_eq!(dcid_len, b"client-src".len());
        assert_eq!(&bytes[6..6 + dcid_len], b"client-src");

        let mut offset = 6 + dcid_len;
        let scid_len = bytes[offset] as usize;
        offset += 1;
        assert_eq!(&bytes[offset..offset + scid_len], b"client-dest");
        offset += scid_len;

        let first_version = u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
        assert_eq!(first_version, 0x1a2a_3a4a);
        let second_version = u32::from_le_bytes(bytes[offset + 4..offset + 8].try_into().unwrap());
        assert_eq!(second_version, 1);
    }

    #[test]
    fn version_negotiation_wire_bytes_snapshot() {
        let bytes = generate_version_negotiation(b"AB", b"XY", 0x0a0a_0a0a, &[1]);
        insta::assert_debug_snapshot!(bytes, @r###"
        [
            192,
            0,
            0,
            0,
            0,
            2,
            88,
            89,
            2,
            65,
            66,
            10,
            10,
            10,
            10,
            1,
            0,
            0,
            0,
        ]
        "###);
    }

    #[test]
    fn reserved_version_has_grease_nibble_pattern() {
        let mut generator = Generator::default();
        let version = random_reserved_version(&mut generator);
        for shift in [0, 8, 16, 24] {
            assert_eq!((version >> shift) & 0x0f, 0x0a);
        }
    }

    #[test]
    fn retry_packet_tag_validates() {
        let key = RetryIntegrityKey::new();
        let new_cid = connection::LocalId::try_from_bytes(b"server-chosen-cid").unwrap();
        let orig = vec![1u8; MAX_LEN];
        let client_source_cid = b"client-scid";
        let token = b"sealed-token-bytes";

        let packet = generate_retry(1, client_source_cid, &new_cid, &orig, token, &key);

        // reconstruct the pseudo-packet from the wire bytes and confirm it validates
        let header = &packet[..packet.len() - 16];
        let tag: [u8; 16] = packet[packet.len() - 16..].try_into().unwrap();

        let mut pseudo = Vec::new();
        pseudo.push(orig.len() as u8);
        pseudo.extend_from_slice(&orig);
        pseudo.extend_from_slice(header);

        assert!(key.validate(&pseudo, tag));
    }

    #[test]
    fn stateless_reset_is_indistinguishable_from_short_header() {
        let mut generator = Generator::default();
        let mut buf = [0u8; 1200];
        let token = stateless_reset::Token::from([9u8; 16]);
        let len = generate_stateless_reset(token, 16, 600, &mut generator, &mut buf).unwrap();
        assert_eq!(buf[0] >> 6, 0b01);
        assert_eq!(&buf[len - 16..len], &[9u8; 16]);
    }
}
