// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The UDP binding: demultiplexes datagrams to connections and produces
//! stateless protocol responses (Version Negotiation, Retry, Stateless Reset).

pub mod binding;

pub use binding::{
    config::BindingConfig,
    datapath::{Datapath, DatapathHandle, WorkerHandle},
    error::{BindingError, DropReason},
    Binding,
};
