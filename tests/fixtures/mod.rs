// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for reactive-bool
//!
//! Provides boolean publishers with observable behavior: subscription
//! counters, drop flags for cancellation, and a shared error type.
//!
//! # Design Principles
//! - Fixtures are deterministic (no timers, no spawned tasks)
//! - Side effects are confined to counters and flags the test owns

#![allow(dead_code)]

use futures::future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use reactive_bool::{Completion, Mono, Publisher};

/// Upstream failure used by all tests
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    #[error("upstream timed out")]
    Timeout,
}

pub type Bool = Mono<bool, TestError>;

/// Install a test-writer tracing subscriber (honors RUST_LOG)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn value(v: bool) -> Bool {
    Mono::just(v)
}

pub fn empty() -> Bool {
    Mono::empty()
}

pub fn failure(err: TestError) -> Bool {
    Mono::error(err)
}

/// Publisher that yields `v` and counts its subscriptions
pub fn counted(hits: &Arc<AtomicUsize>, v: bool) -> Bool {
    let hits = hits.clone();
    Mono::from_fn(move || {
        hits.fetch_add(1, Ordering::SeqCst);
        future::ready(Ok(Some(v)))
    })
}

/// Sets its flag when dropped
pub struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Publisher that never completes and raises `dropped` once its evaluation
/// is discarded
pub fn never(dropped: &Arc<AtomicBool>) -> Bool {
    let dropped = dropped.clone();
    Mono::from_fn(move || {
        let guard = DropFlag(dropped.clone());
        async move {
            let _guard = guard;
            future::pending::<Completion<bool, TestError>>().await
        }
    })
}

/// Hand-written publisher reading a shared switch at subscription time
#[derive(Debug, Clone)]
pub struct Switch {
    state: Arc<AtomicBool>,
}

impl Switch {
    pub fn new(on: bool) -> Self {
        Self {
            state: Arc::new(AtomicBool::new(on)),
        }
    }

    pub fn set(&self, on: bool) {
        self.state.store(on, Ordering::SeqCst);
    }
}

impl Publisher for Switch {
    type Item = bool;
    type Error = TestError;

    fn subscribe(&self) -> BoxFuture<'static, Completion<bool, TestError>> {
        let on = self.state.load(Ordering::SeqCst);
        future::ready(Ok(Some(on))).boxed()
    }
}
