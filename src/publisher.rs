// Copyright (c) 2025 - Cowboy AI, Inc.
//! Publisher Trait - Consumption interface for single-value producers
//!
//! A `Publisher` is anything that can be subscribed to for at most one value.
//! Every subscription starts a fresh, independent evaluation.
//!
//! # Terminal Signals
//!
//! ```text
//! Ok(Some(v))  value, then completion
//! Ok(None)     completion without a value (empty)
//! Err(e)       failure
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use reactive_bool::Publisher;
//!
//! async fn first_answer<P: Publisher<Item = bool>>(p: &P) -> Option<bool> {
//!     p.subscribe().await.ok().flatten()
//! }
//! ```

use futures::future::BoxFuture;

/// Terminal outcome of one subscription
pub type Completion<T, E> = Result<Option<T>, E>;

/// Lazy producer of at most one value
///
/// Implementations must not start any work before `subscribe` is called, and
/// each call must return an evaluation that shares no state with previous ones.
pub trait Publisher: Clone + Send + Sync + 'static {
    /// The value type
    type Item: Send + 'static;

    /// The upstream failure type, forwarded unchanged by combinators
    type Error: Send + 'static;

    /// Start a fresh evaluation
    ///
    /// Dropping the returned future cancels the evaluation.
    fn subscribe(&self) -> BoxFuture<'static, Completion<Self::Item, Self::Error>>;
}
