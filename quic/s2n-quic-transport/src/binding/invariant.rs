// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Invariant header preprocessing: extracts DestCID/SourceCID and header type from a datagram
//! without requiring the packet's QUIC version to be supported.
//!
//! This mirrors the wire layout documented in [`s2n_quic_core::packet::long`] and
//! [`s2n_quic_core::packet::short`] (header form bit, fixed bit, long packet type bits,
//! length-prefixed connection IDs) but works directly on an owned datagram buffer rather than
//! the zero-copy `DecoderBufferMut`/`CheckedRange` machinery those modules use for in-place
//! decryption — the binding never decrypts a packet, it only inspects its invariant fields.

use s2n_codec::DecoderBuffer;
use s2n_quic_core::{connection, packet::long::PacketType, varint::VarInt};

const LONG_HEADER_FORM_BIT: u8 = 0x80;

/// The long-header packet types the binding distinguishes. `VersionNegotiation` is represented
/// separately via [`RecvPacket::is_version_negotiation`] since it shares byte 0's type bits with
/// ordinary v1 packets but is identified by `Version == 0` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LongPacketKind {
    Initial,
    ZeroRtt,
    Handshake,
    Retry,
}

impl From<PacketType> for LongPacketKind {
    fn from(ty: PacketType) -> Self {
        match ty {
            PacketType::Initial => Self::Initial,
            PacketType::ZeroRtt => Self::ZeroRtt,
            PacketType::Handshake => Self::Handshake,
            PacketType::Retry => Self::Retry,
        }
    }
}

/// Per-datagram scratch carrying validated invariant fields (spec's `RecvPacket`).
#[derive(Clone, Debug)]
pub struct RecvPacket {
    pub is_short_header: bool,
    pub dest_cid: Box<[u8]>,
    pub source_cid: Option<Box<[u8]>>,
    pub version: Option<u32>,
    pub is_version_negotiation: bool,
    pub long_kind: Option<LongPacketKind>,
    /// Always present for `Initial` packets (possibly empty); `None` otherwise.
    pub token: Option<Box<[u8]>>,
    /// Set once the token has passed Retry-token validation.
    pub valid_token: bool,
}

impl RecvPacket {
    /// Whether this packet can create a new connection or carries handshake data, per spec
    /// §4.5's "handshake-first ordering" (`QuicPacketIsHandshake`).
    pub fn is_handshake(&self) -> bool {
        matches!(
            self.long_kind,
            Some(LongPacketKind::Initial)
                | Some(LongPacketKind::ZeroRtt)
                | Some(LongPacketKind::Handshake)
                | Some(LongPacketKind::Retry)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantError {
    TooShort,
    ConnectionIdTooLong,
    TokenLengthInvalid,
}

/// Extracts invariant header fields from `payload`.
///
/// `short_header_cid_len` is the fixed connection ID length this binding expects on short
/// header packets (the binding always generates same-length local CIDs, so — per
/// [`connection::id::Validator for usize`] — a fixed length suffices without state).
pub fn parse(payload: &[u8], short_header_cid_len: usize) -> Result<RecvPacket, InvariantError> {
    if payload.is_empty() {
        return Err(InvariantError::TooShort);
    }

    let tag = payload[0];
    let is_long = tag & LONG_HEADER_FORM_BIT != 0;

    if !is_long {
        if payload.len() < 1 + short_header_cid_len {
            return Err(InvariantError::TooShort);
        }
        let dest_cid = payload[1..1 + short_header_cid_len].to_vec().into_boxed_slice();
        return Ok(RecvPacket {
            is_short_header: true,
            dest_cid,
            source_cid: None,
            version: None,
            is_version_negotiation: false,
            long_kind: None,
            token: None,
            valid_token: false,
        });
    }

    if payload.len() < 5 {
        return Err(InvariantError::TooShort);
    }
    let version = u32::from_be_bytes(payload[1..5].try_into().unwrap());
    let mut offset = 5;

    let dest_cid_len = *payload.get(offset).ok_or(InvariantError::TooShort)? as usize;
    offset += 1;
    if dest_cid_len > connection::id::MAX_LEN || payload.len() < offset + dest_cid_len {
        return Err(InvariantError::ConnectionIdTooLong);
    }
    let dest_cid = payload[offset..offset + dest_cid_len]
        .to_vec()
        .into_boxed_slice();
    offset += dest_cid_len;

    let source_cid_len = *payload.get(offset).ok_or(InvariantError::TooShort)? as usize;
    offset += 1;
    if source_cid_len > connection::id::MAX_LEN || payload.len() < offset + source_cid_len {
        return Err(InvariantError::ConnectionIdTooLong);
    }
    let source_cid = payload[offset..offset + source_cid_len]
        .to_vec()
        .into_boxed_slice();
    offset += source_cid_len;

    let is_version_negotiation = version == 0;
    let mut long_kind = None;
    let mut token = None;

    if !is_version_negotiation {
        let kind = LongPacketKind::from(PacketType::from_bits(tag >> 4));
        if kind == LongPacketKind::Initial {
            let (token_len, _) = DecoderBuffer::new(&payload[offset..])
                .decode::<VarInt>()
                .map_err(|_| InvariantError::TokenLengthInvalid)?;
            let token_len: u64 = token_len.into();
            let token_len = token_len as usize;
            let varint_len = varint_encoding_len(token_len as u64);
            let token_start = offset + varint_len;
            if payload.len() < token_start + token_len {
                return Err(InvariantError::TokenLengthInvalid);
            }
            token = Some(
                payload[token_start..token_start + token_len]
                    .to_vec()
                    .into_boxed_slice(),
            );
        }
        long_kind = Some(kind);
    }

    Ok(RecvPacket {
        is_short_header: false,
        dest_cid,
        source_cid: Some(source_cid),
        version: Some(version),
        is_version_negotiation,
        long_kind,
        token,
        valid_token: false,
    })
}

/// The number of bytes a [`VarInt`] of this value encodes to, per RFC 9000 §16.
fn varint_encoding_len(value: u64) -> usize {
    match value {
        0..=0x3f => 1,
        0x40..=0x3fff => 2,
        0x4000..=0x3fff_ffff => 4,
        _ => 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_header(dest_cid: &[u8], source_cid: &[u8], version: u32, token: &[u8]) -> Vec<u8> {
        let mut buf = vec![0xC0u8]; // long header, fixed bit, Initial type bits (0b00)
        buf.extend_from_slice(&version.to_be_bytes());
        buf.push(dest_cid.len() as u8);
        buf.extend_from_slice(dest_cid);
        buf.push(source_cid.len() as u8);
        buf.extend_from_slice(source_cid);
        buf.push(token.len() as u8); // fits single-byte varint for short tokens
        buf.extend_from_slice(token);
        buf
    }

    #[test]
    fn parses_short_header_dest_cid() {
        let mut buf = vec![0x40u8];
        buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        buf.extend_from_slice(b"payload");
        let parsed = parse(&buf, 8).unwrap();
        assert!(parsed.is_short_header);
        assert_eq!(&*parsed.dest_cid, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn parses_long_header_initial_with_token() {
        let buf = long_header(b"dest1234", b"src1", 1, b"tok");
        let parsed = parse(&buf, 8).unwrap();
        assert!(!parsed.is_short_header);
        assert_eq!(&*parsed.dest_cid, b"dest1234");
        assert_eq!(parsed.source_cid.as_deref(), Some(&b"src1"[..]));
        assert_eq!(parsed.version, Some(1));
        assert_eq!(parsed.long_kind, Some(LongPacketKind::Initial));
        assert_eq!(parsed.token.as_deref(), Some(&b"tok"[..]));
    }

    #[test]
    fn version_negotiation_sentinel_has_no_long_kind() {
        let buf = long_header(b"dest1234", b"src1", 0, b"");
        let parsed = parse(&buf, 8).unwrap();
        assert!(parsed.is_version_negotiation);
        assert_eq!(parsed.long_kind, None);
    }

    #[test]
    fn rejects_oversized_connection_id() {
        let mut buf = vec![0xC0u8];
        buf.extend_from_slice(&1u32.to_be_bytes());
        buf.push(21);
        buf.extend_from_slice(&[0u8; 21]);
        assert!(matches!(
            parse(&buf, 8),
            Err(InvariantError::ConnectionIdTooLong)
        ));
    }

    #[test]
    fn rejects_truncated_datagram() {
        assert!(matches!(parse(&[0x40], 8), Err(InvariantError::TooShort)));
    }

    /// `parse` sees arbitrary bytes off the wire before any QUIC version is known to be
    /// supported; it must reject malformed input cleanly rather than panic on a bad length
    /// prefix or an out-of-range slice index.
    #[test]
    fn parse_never_panics_on_arbitrary_input() {
        bolero::check!()
            .with_type::<(Vec<u8>, u8)>()
            .cloned()
            .for_each(|(payload, cid_len)| {
                let cid_len = (cid_len % 21) as usize;
                let _ = parse(&payload, cid_len);
            });
    }
}
