// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The worker pool: an out-of-scope collaborator (spec §6) that owns the mapping from a
//! connection to the single worker thread allowed to touch it ("worker affinity"). The binding
//! only ever asks for a worker to hand work to; it never iterates or schedules workers itself.

use crate::binding::{datapath::WorkerHandle, datapath::Overloaded, lookup::ConnectionHandle};
use std::sync::Arc;

/// Resolves and assigns workers for connections and stateless operations.
pub trait WorkerPool: Send + Sync {
    /// Returns the worker that currently owns `connection`, if it is still live.
    fn worker_for_connection(&self, connection: ConnectionHandle) -> Option<Arc<dyn WorkerHandle>>;

    /// Assigns a worker to a newly created connection. Rejected if every worker is at capacity.
    fn assign_worker(
        &self,
        connection: ConnectionHandle,
    ) -> Result<Arc<dyn WorkerHandle>, Overloaded>;

    /// Acquires any available worker to process a stateless operation.
    fn acquire_worker(&self) -> Result<Arc<dyn WorkerHandle>, Overloaded>;
}

/// In-memory test double driving every scenario through a single inline worker.
pub mod testing {
    use super::*;
    use crate::binding::datapath::testing::InlineWorker;
    use std::collections::HashMap;
    use std::sync::Mutex;

    pub struct StaticWorkerPool {
        worker: Arc<InlineWorker>,
        assignments: Mutex<HashMap<ConnectionHandle, Arc<InlineWorker>>>,
        overloaded: std::sync::atomic::AtomicBool,
    }

    impl StaticWorkerPool {
        pub fn new(worker: Arc<InlineWorker>) -> Self {
            Self {
                worker,
                assignments: Mutex::new(HashMap::new()),
                overloaded: std::sync::atomic::AtomicBool::new(false),
            }
        }

        pub fn set_overloaded(&self, overloaded: bool) {
            self.overloaded
                .store(overloaded, std::sync::atomic::Ordering::SeqCst);
        }
    }

    impl WorkerPool for StaticWorkerPool {
        fn worker_for_connection(
            &self,
            connection: ConnectionHandle,
        ) -> Option<Arc<dyn WorkerHandle>> {
            self.assignments
                .lock()
                .unwrap()
                .get(&connection)
                .cloned()
                .map(|w| w as Arc<dyn WorkerHandle>)
        }

        fn assign_worker(
            &self,
            connection: ConnectionHandle,
        ) -> Result<Arc<dyn WorkerHandle>, Overloaded> {
            if self.overloaded.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(Overloaded);
            }
            self.assignments
                .lock()
                .unwrap()
                .insert(connection, self.worker.clone());
            Ok(self.worker.clone() as Arc<dyn WorkerHandle>)
        }

        fn acquire_worker(&self) -> Result<Arc<dyn WorkerHandle>, Overloaded> {
            if self.overloaded.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(Overloaded);
            }
            Ok(self.worker.clone() as Arc<dyn WorkerHandle>)
        }
    }
}
