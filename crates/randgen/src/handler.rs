// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Operation dispatch for host bindings.
//!
//! A host runtime (script engine, RPC layer) resolves an operation by name and
//! passes loosely typed arguments. This module only marshals those arguments;
//! the random values come from [`RandomValueProvider`].

use core::fmt;
use core::str::FromStr;

use randgen_source::{RandomSource, ThreadRandomSource};
use thiserror::Error;

use crate::error::RandomError;
use crate::provider::RandomValueProvider;

/// Operations exported to hosts, by their host-facing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `randomBoolean()`
    RandomBoolean,
    /// `randomInteger(min, max)`
    RandomInteger,
    /// `randomNumber(min, max)`
    RandomNumber,
    /// `randomString(length)`
    RandomString,
}

impl Operation {
    /// Every exported operation.
    pub const ALL: [Operation; 4] = [
        Operation::RandomBoolean,
        Operation::RandomInteger,
        Operation::RandomNumber,
        Operation::RandomString,
    ];

    /// Host-facing name.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::RandomBoolean => "randomBoolean",
            Operation::RandomInteger => "randomInteger",
            Operation::RandomNumber => "randomNumber",
            Operation::RandomString => "randomString",
        }
    }

    /// Number of arguments the operation takes.
    pub fn arity(&self) -> usize {
        match self {
            Operation::RandomBoolean => 0,
            Operation::RandomInteger | Operation::RandomNumber => 2,
            Operation::RandomString => 1,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| HandlerError::UnknownOperation(s.to_owned()))
    }
}

/// Loosely typed value exchanged with the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Host null / undefined.
    Null,
    /// Boolean.
    Boolean(bool),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit float.
    Number(f64),
    /// UTF-8 string.
    String(String),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

/// Errors produced while dispatching a host call.
#[derive(Debug, Error, PartialEq)]
pub enum HandlerError {
    /// No operation is exported under this name.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// Wrong number of arguments.
    #[error("{operation} expects {expected} argument(s), got {actual}")]
    Arity {
        /// Called operation.
        operation: Operation,
        /// Declared arity.
        expected: usize,
        /// Supplied arguments.
        actual: usize,
    },

    /// Argument of the wrong type.
    #[error("{operation}: argument {index} must be {expected}, got {actual}")]
    ArgumentType {
        /// Called operation.
        operation: Operation,
        /// Zero-based argument position.
        index: usize,
        /// Expected kind.
        expected: &'static str,
        /// Supplied kind.
        actual: &'static str,
    },

    /// The operation itself failed.
    #[error(transparent)]
    Random(#[from] RandomError),
}

/// Dispatches host calls to a [`RandomValueProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGeneratorHandler<S: RandomSource = ThreadRandomSource> {
    provider: RandomValueProvider<S>,
}

impl RandomGeneratorHandler<ThreadRandomSource> {
    /// Creates a handler backed by the calling thread's generator.
    pub const fn new() -> Self {
        Self {
            provider: RandomValueProvider::new(),
        }
    }
}

impl<S: RandomSource> RandomGeneratorHandler<S> {
    /// Creates a handler over an existing provider.
    pub fn with_provider(provider: RandomValueProvider<S>) -> Self {
        Self { provider }
    }

    /// Resolves `name` and invokes it with `args`.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, HandlerError> {
        self.call(name.parse()?, args)
    }

    /// Invokes `operation` with `args`.
    pub fn call(&self, operation: Operation, args: &[Value]) -> Result<Value, HandlerError> {
        if args.len() != operation.arity() {
            return Err(HandlerError::Arity {
                operation,
                expected: operation.arity(),
                actual: args.len(),
            });
        }

        let value = match operation {
            Operation::RandomBoolean => Value::Boolean(self.provider.random_boolean()),
            Operation::RandomInteger => {
                let min = integer_arg(operation, args, 0)?;
                let max = integer_arg(operation, args, 1)?;
                Value::Integer(self.provider.random_integer(min, max)?)
            }
            Operation::RandomNumber => {
                let min = number_arg(operation, args, 0)?;
                let max = number_arg(operation, args, 1)?;
                Value::Number(self.provider.random_number(min, max)?)
            }
            Operation::RandomString => {
                let length = integer_arg(operation, args, 0)?;
                Value::String(self.provider.random_string(length)?)
            }
        };

        Ok(value)
    }
}

fn integer_arg(operation: Operation, args: &[Value], index: usize) -> Result<i64, HandlerError> {
    match &args[index] {
        Value::Integer(v) => Ok(*v),
        other => Err(HandlerError::ArgumentType {
            operation,
            index,
            expected: "integer",
            actual: other.kind(),
        }),
    }
}

// Whole numbers often arrive as integers.
fn number_arg(operation: Operation, args: &[Value], index: usize) -> Result<f64, HandlerError> {
    match &args[index] {
        Value::Number(v) => Ok(*v),
        Value::Integer(v) => Ok(*v as f64),
        other => Err(HandlerError::ArgumentType {
            operation,
            index,
            expected: "number",
            actual: other.kind(),
        }),
    }
}
