// Copyright (c) 2025 - Cowboy AI, Inc.
//! Boolean Evaluator
//!
//! Combines boolean publishers into new boolean publishers. Every combinator
//! is a pure function: it subscribes to nothing when called and returns a
//! [`Mono`] that re-evaluates its operands on each subscription.
//!
//! # Truth Table
//!
//! ```text
//! a     b     | and   nand  or    nor   xor
//! ──────────────────────────────────────────
//! false false | false true  false true  false
//! false true  | false true  true  false true
//! true  false | false true  true  false true
//! true  true  | true  false true  false false
//! ```
//!
//! # Empty and Failed Operands
//!
//! Values never short-circuit. If either operand completes empty the result
//! is empty, and if either fails the result fails with that operand's error.
//! Under [`Strategy::Concurrent`] the first of these observed wins and the
//! other operand is dropped; under [`Strategy::Sequential`] the left operand
//! is always settled first.
//!
//! # Examples
//!
//! ```rust,ignore
//! use reactive_bool::evaluator;
//!
//! let result = evaluator::and(Mono::just(true), Mono::just(false));
//! assert_eq!(result.await, Ok(Some(false)));
//! ```

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use tracing::debug;

use crate::config::{EvaluatorConfig, Strategy};
use crate::mono::Mono;
use crate::publisher::{Completion, Publisher};

/// Binary boolean operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    And,
    Nand,
    Or,
    Nor,
    Xor,
}

impl Operator {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Operator::And => a && b,
            Operator::Nand => !(a && b),
            Operator::Or => a || b,
            Operator::Nor => !(a || b),
            Operator::Xor => a != b,
        }
    }
}

/// Why an operand produced no boolean
enum Halt<E> {
    Empty,
    Failed(E),
}

fn settle<E>(completion: Completion<bool, E>) -> Result<bool, Halt<E>> {
    match completion {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(Halt::Empty),
        Err(err) => Err(Halt::Failed(err)),
    }
}

fn resolve<E>(outcome: Result<bool, Halt<E>>) -> Completion<bool, E> {
    match outcome {
        Ok(value) => Ok(Some(value)),
        Err(Halt::Empty) => Ok(None),
        Err(Halt::Failed(err)) => Err(err),
    }
}

/// Poll both operands in the consuming task
///
/// `try_join` returns on the first halt and drops the still-pending operand.
async fn concurrent<E>(
    op: Operator,
    a: BoxFuture<'static, Completion<bool, E>>,
    b: BoxFuture<'static, Completion<bool, E>>,
) -> Completion<bool, E> {
    let outcome = future::try_join(a.map(settle), b.map(settle))
        .await
        .map(|(x, y)| op.apply(x, y));

    resolve(outcome)
}

/// Settle the left operand before subscribing to the right one
async fn sequential<A, B>(op: Operator, a: A, b: B) -> Completion<bool, A::Error>
where
    A: Publisher<Item = bool>,
    B: Publisher<Item = bool, Error = A::Error>,
{
    let outcome = async {
        let x = settle(a.subscribe().await)?;
        let y = settle(b.subscribe().await)?;
        Ok::<_, Halt<A::Error>>(op.apply(x, y))
    }
    .await;

    resolve(outcome)
}

/// Boolean combinator with a configured evaluation strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanEvaluator {
    config: EvaluatorConfig,
}

impl BooleanEvaluator {
    /// Create an evaluator from configuration
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Create an evaluator using `strategy`
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(EvaluatorConfig::new(strategy))
    }

    /// The strategy binary combinators use
    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Logical negation
    pub fn not<A>(&self, a: A) -> Mono<bool, A::Error>
    where
        A: Publisher<Item = bool>,
    {
        Mono::from_publisher(a).map(|value| !value)
    }

    /// Logical AND
    pub fn and<A, B>(&self, a: A, b: B) -> Mono<bool, A::Error>
    where
        A: Publisher<Item = bool>,
        B: Publisher<Item = bool, Error = A::Error>,
    {
        self.combine(Operator::And, a, b)
    }

    /// Logical NOT-AND
    pub fn nand<A, B>(&self, a: A, b: B) -> Mono<bool, A::Error>
    where
        A: Publisher<Item = bool>,
        B: Publisher<Item = bool, Error = A::Error>,
    {
        self.combine(Operator::Nand, a, b)
    }

    /// Logical OR
    pub fn or<A, B>(&self, a: A, b: B) -> Mono<bool, A::Error>
    where
        A: Publisher<Item = bool>,
        B: Publisher<Item = bool, Error = A::Error>,
    {
        self.combine(Operator::Or, a, b)
    }

    /// Logical NOT-OR
    pub fn nor<A, B>(&self, a: A, b: B) -> Mono<bool, A::Error>
    where
        A: Publisher<Item = bool>,
        B: Publisher<Item = bool, Error = A::Error>,
    {
        self.combine(Operator::Nor, a, b)
    }

    /// Logical exclusive OR
    pub fn xor<A, B>(&self, a: A, b: B) -> Mono<bool, A::Error>
    where
        A: Publisher<Item = bool>,
        B: Publisher<Item = bool, Error = A::Error>,
    {
        self.combine(Operator::Xor, a, b)
    }

    fn combine<A, B>(&self, op: Operator, a: A, b: B) -> Mono<bool, A::Error>
    where
        A: Publisher<Item = bool>,
        B: Publisher<Item = bool, Error = A::Error>,
    {
        let strategy = self.config.strategy;

        Mono::from_fn(move || {
            let (a, b) = (a.clone(), b.clone());
            async move {
                debug!(?op, %strategy, "Evaluating boolean combination");
                match strategy {
                    Strategy::Concurrent => concurrent(op, a.subscribe(), b.subscribe()).await,
                    Strategy::Sequential => sequential(op, a, b).await,
                }
            }
        })
    }
}

/// Logical negation using the default evaluator
pub fn not<A>(a: A) -> Mono<bool, A::Error>
where
    A: Publisher<Item = bool>,
{
    BooleanEvaluator::default().not(a)
}

/// Logical AND using the default evaluator
pub fn and<A, B>(a: A, b: B) -> Mono<bool, A::Error>
where
    A: Publisher<Item = bool>,
    B: Publisher<Item = bool, Error = A::Error>,
{
    BooleanEvaluator::default().and(a, b)
}

/// Logical NOT-AND using the default evaluator
pub fn nand<A, B>(a: A, b: B) -> Mono<bool, A::Error>
where
    A: Publisher<Item = bool>,
    B: Publisher<Item = bool, Error = A::Error>,
{
    BooleanEvaluator::default().nand(a, b)
}

/// Logical OR using the default evaluator
pub fn or<A, B>(a: A, b: B) -> Mono<bool, A::Error>
where
    A: Publisher<Item = bool>,
    B: Publisher<Item = bool, Error = A::Error>,
{
    BooleanEvaluator::default().or(a, b)
}

/// Logical NOT-OR using the default evaluator
pub fn nor<A, B>(a: A, b: B) -> Mono<bool, A::Error>
where
    A: Publisher<Item = bool>,
    B: Publisher<Item = bool, Error = A::Error>,
{
    BooleanEvaluator::default().nor(a, b)
}

/// Logical exclusive OR using the default evaluator
pub fn xor<A, B>(a: A, b: B) -> Mono<bool, A::Error>
where
    A: Publisher<Item = bool>,
    B: Publisher<Item = bool, Error = A::Error>,
{
    BooleanEvaluator::default().xor(a, b)
}
