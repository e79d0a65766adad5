// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod bpf;
pub mod decoder;
pub mod encoder;
pub mod path;
