//! Boolean logic operators on lazy single-value asynchronous producers
//!
//! This crate lets reactive code write NOT, AND, NAND, OR, NOR and XOR directly
//! on boolean [`Mono`] values (or any [`Publisher`] of `bool`) instead of
//! calling evaluator functions by hand.
//!
//! ```rust,ignore
//! use reactive_bool::{BooleanPublisherExt, Mono};
//!
//! let a: Mono<bool, MyError> = Mono::just(true);
//! let b: Mono<bool, MyError> = Mono::just(false);
//!
//! assert_eq!(a.clone().logical_and(b.clone()).await, Ok(Some(false)));
//! assert_eq!((a ^ b).await, Ok(Some(true)));
//! ```

pub mod config;
pub mod errors;
pub mod evaluator;
pub mod extensions;
pub mod mono;
pub mod publisher;

// Re-export commonly used types
pub use config::{EvaluatorConfig, Strategy};
pub use errors::{ReactiveBoolError, ReactiveBoolResult};
pub use evaluator::BooleanEvaluator;
pub use extensions::BooleanPublisherExt;
pub use mono::Mono;
pub use publisher::{Completion, Publisher};
