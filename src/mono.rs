// Copyright (c) 2025 - Cowboy AI, Inc.
//! Mono - Lazy single-value asynchronous producer
//!
//! A `Mono<T, E>` describes how to produce at most one `T` or fail with `E`.
//! Nothing runs until the mono is subscribed (or awaited), and every
//! subscription re-runs the producer from scratch.
//!
//! # Mathematical Model
//!
//! ```text
//! Mono<T, E> ≅ () → Future<Result<Option<T>, E>>
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let yes: Mono<bool, MyError> = Mono::just(true);
//! assert_eq!(yes.clone().await, Ok(Some(true)));
//!
//! let nothing: Mono<bool, MyError> = Mono::empty();
//! assert_eq!(nothing.await, Ok(None));
//! ```

use futures::future::{self, BoxFuture};
use futures::{Future, FutureExt};
use std::fmt::Debug;
use std::future::IntoFuture;
use std::sync::Arc;
use tracing::trace;

use crate::publisher::{Completion, Publisher};

type Source<T, E> = Arc<dyn Fn() -> BoxFuture<'static, Completion<T, E>> + Send + Sync>;

/// Lazy, re-subscribable producer of at most one value
///
/// Implemented as a shared factory of futures, so clones are cheap and
/// subscribe to the same underlying producer.
pub struct Mono<T, E> {
    /// Produces a fresh evaluation per subscription
    source: Source<T, E>,
}

impl<T, E> Clone for Mono<T, E> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T, E> Debug for Mono<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mono<{}, {}>",
            std::any::type_name::<T>(),
            std::any::type_name::<E>()
        )
    }
}

impl<T: Send + 'static, E: Send + 'static> Mono<T, E> {
    /// Create a mono from a future factory
    ///
    /// The factory is invoked once per subscription. Side effects placed in
    /// the factory or the future run once per subscription.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let hits = Arc::new(AtomicUsize::new(0));
    /// let counted = hits.clone();
    /// let mono: Mono<bool, MyError> = Mono::from_fn(move || {
    ///     counted.fetch_add(1, Ordering::SeqCst);
    ///     async { Ok(Some(true)) }
    /// });
    /// ```
    pub fn from_fn<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Completion<T, E>> + Send + 'static,
    {
        Self {
            source: Arc::new(move || factory().boxed()),
        }
    }

    /// Adapt any publisher into a mono
    pub fn from_publisher<P>(publisher: P) -> Self
    where
        P: Publisher<Item = T, Error = E>,
    {
        Self {
            source: Arc::new(move || publisher.subscribe()),
        }
    }

    /// Create a mono that completes without a value
    pub fn empty() -> Self {
        Self::from_fn(|| future::ready(Ok(None)))
    }

    /// Create a mono that yields `value` on every subscription
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_fn(move || future::ready(Ok(Some(value.clone()))))
    }

    /// Create a mono that fails with `error` on every subscription
    pub fn error(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::from_fn(move || future::ready(Err(error.clone())))
    }

    /// Transform the value, passing empty and error through
    ///
    /// # Laws
    ///
    /// 1. `mono.map(|x| x) == mono`
    /// 2. `mono.map(f).map(g) == mono.map(|x| g(f(x)))`
    pub fn map<U, F>(self, f: F) -> Mono<U, E>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: Send + 'static,
    {
        let source = self.source;
        let f = Arc::new(f);

        Mono {
            source: Arc::new(move || {
                let f = Arc::clone(&f);
                source()
                    .map(move |completion| completion.map(|value| value.map(|v| f(v))))
                    .boxed()
            }),
        }
    }

    /// Start a fresh evaluation
    pub fn subscribe(&self) -> BoxFuture<'static, Completion<T, E>> {
        trace!("Subscribing to {:?}", self);
        (self.source)()
    }
}

impl<T: Send + 'static, E: Send + 'static> Publisher for Mono<T, E> {
    type Item = T;
    type Error = E;

    fn subscribe(&self) -> BoxFuture<'static, Completion<T, E>> {
        Mono::subscribe(self)
    }
}

impl<T: Send + 'static, E: Send + 'static> IntoFuture for Mono<T, E> {
    type Output = Completion<T, E>;
    type IntoFuture = BoxFuture<'static, Completion<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.subscribe()
    }
}

impl<'a, T: Send + 'static, E: Send + 'static> IntoFuture for &'a Mono<T, E> {
    type Output = Completion<T, E>;
    type IntoFuture = BoxFuture<'static, Completion<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.subscribe()
    }
}
