// Copyright (c) 2025 - Cowboy AI, Inc.
//! Boolean Combinator Extensions
//!
//! Chainable logic operators on any boolean [`Publisher`], plus `std::ops`
//! operator forms on [`Mono<bool, E>`]. Every method forwards to the default
//! [`evaluator`](crate::evaluator) and adds no behavior of its own.
//!
//! | Method         | Operator | Result       |
//! |----------------|----------|--------------|
//! | `logical_not`  | `!a`     | `!a`         |
//! | `logical_and`  | `a & b`  | `a && b`     |
//! | `logical_nand` |          | `!(a && b)`  |
//! | `logical_or`   | `a \| b` | `a \|\| b`   |
//! | `logical_nor`  |          | `!(a \|\| b)`|
//! | `logical_xor`  | `a ^ b`  | `a != b`     |
//!
//! # Examples
//!
//! ```rust,ignore
//! use reactive_bool::{BooleanPublisherExt, Mono};
//!
//! let ready: Mono<bool, MyError> = Mono::just(true);
//! let blocked: Mono<bool, MyError> = Mono::just(false);
//!
//! let proceed = ready.clone().logical_and(!blocked.clone());
//! assert_eq!(proceed.await, Ok(Some(true)));
//!
//! let either = ready | blocked;
//! assert_eq!(either.await, Ok(Some(true)));
//! ```

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::evaluator;
use crate::mono::Mono;
use crate::publisher::Publisher;

/// Logic operators for boolean publishers
///
/// Blanket-implemented for every `Publisher<Item = bool>`.
pub trait BooleanPublisherExt: Publisher<Item = bool> + Sized {
    /// Logically invert this publisher's value
    fn logical_not(self) -> Mono<bool, Self::Error> {
        evaluator::not(self)
    }

    /// Combine with `rhs` using AND
    fn logical_and<R>(self, rhs: R) -> Mono<bool, Self::Error>
    where
        R: Publisher<Item = bool, Error = Self::Error>,
    {
        evaluator::and(self, rhs)
    }

    /// Combine with `rhs` using NOT-AND
    fn logical_nand<R>(self, rhs: R) -> Mono<bool, Self::Error>
    where
        R: Publisher<Item = bool, Error = Self::Error>,
    {
        evaluator::nand(self, rhs)
    }

    /// Combine with `rhs` using OR
    fn logical_or<R>(self, rhs: R) -> Mono<bool, Self::Error>
    where
        R: Publisher<Item = bool, Error = Self::Error>,
    {
        evaluator::or(self, rhs)
    }

    /// Combine with `rhs` using NOT-OR
    fn logical_nor<R>(self, rhs: R) -> Mono<bool, Self::Error>
    where
        R: Publisher<Item = bool, Error = Self::Error>,
    {
        evaluator::nor(self, rhs)
    }

    /// Combine with `rhs` using exclusive OR
    fn logical_xor<R>(self, rhs: R) -> Mono<bool, Self::Error>
    where
        R: Publisher<Item = bool, Error = Self::Error>,
    {
        evaluator::xor(self, rhs)
    }
}

impl<P> BooleanPublisherExt for P where P: Publisher<Item = bool> {}

impl<E: Send + 'static> Not for Mono<bool, E> {
    type Output = Mono<bool, E>;

    fn not(self) -> Self::Output {
        self.logical_not()
    }
}

impl<E: Send + 'static> BitAnd for Mono<bool, E> {
    type Output = Mono<bool, E>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.logical_and(rhs)
    }
}

impl<E: Send + 'static> BitOr for Mono<bool, E> {
    type Output = Mono<bool, E>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.logical_or(rhs)
    }
}

impl<E: Send + 'static> BitXor for Mono<bool, E> {
    type Output = Mono<bool, E>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.logical_xor(rhs)
    }
}
