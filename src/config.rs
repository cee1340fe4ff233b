// Copyright (c) 2025 - Cowboy AI, Inc.

//! Evaluator configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ReactiveBoolError, ReactiveBoolResult};

/// How a binary combinator drives its two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Poll both operands together; the first empty or failed operand ends
    /// the evaluation and drops the other
    #[default]
    Concurrent,

    /// Evaluate the left operand, then the right one; the right operand is
    /// only subscribed once the left one has produced a value
    Sequential,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Concurrent => write!(f, "concurrent"),
            Strategy::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ReactiveBoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(Strategy::Concurrent),
            "sequential" => Ok(Strategy::Sequential),
            other => Err(ReactiveBoolError::InvalidStrategy(other.to_string())),
        }
    }
}

/// Boolean evaluator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Operand evaluation strategy (defaults to concurrent)
    #[serde(default)]
    pub strategy: Strategy,
}

impl EvaluatorConfig {
    /// Create a new evaluator configuration
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Set the evaluation strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Parse a configuration from JSON
    ///
    /// Missing fields take their defaults, so `{}` is a valid configuration.
    pub fn from_json(json: &str) -> ReactiveBoolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
