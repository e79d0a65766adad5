// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod datagram;
pub mod ecn;
pub mod ethernet;
pub mod ip;
pub mod ipv4;
pub mod ipv6;
pub mod udp;
pub mod unspecified;

pub use datagram::*;
pub use ecn::*;
pub use ip::*;
pub use ipv4::*;
pub use ipv6::*;
pub use unspecified::*;
