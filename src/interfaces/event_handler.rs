// ============================================================================
// Event Handler Interface
// Defines the contract for observing arithmetic events
// ============================================================================

use crate::numeric::{Fraction, NumericError};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic operation reported in events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Normalize,
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Normalize => "normalize",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        };
        f.write_str(name)
    }
}

/// Events emitted by the fraction calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticEvent {
    /// A fraction was reduced to canonical form
    Normalized {
        input: Fraction,
        output: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// A binary operation produced a result
    Computed {
        operation: Operation,
        lhs: Fraction,
        rhs: Fraction,
        result: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// An operation was rejected
    Rejected {
        operation: Operation,
        lhs: Fraction,
        /// None for unary operations
        rhs: Option<Fraction>,
        error: NumericError,
        timestamp: DateTime<Utc>,
    },
}

impl ArithmeticEvent {
    /// Operation this event reports on
    pub fn operation(&self) -> Operation {
        match self {
            ArithmeticEvent::Normalized { .. } => Operation::Normalize,
            ArithmeticEvent::Computed { operation, .. } => *operation,
            ArithmeticEvent::Rejected { operation, .. } => *operation,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ArithmeticEvent::Rejected { .. })
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an arithmetic event
    fn on_event(&self, event: ArithmeticEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ArithmeticEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ArithmeticEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ArithmeticEvent) {
        match &event {
            ArithmeticEvent::Normalized { input, output, .. } => {
                tracing::debug!(%input, %output, "fraction normalized");
            },
            ArithmeticEvent::Computed {
                operation,
                lhs,
                rhs,
                result,
                ..
            } => {
                tracing::debug!(%operation, %lhs, %rhs, %result, "fraction operation computed");
            },
            ArithmeticEvent::Rejected {
                operation,
                lhs,
                rhs,
                error,
                ..
            } => {
                tracing::warn!(%operation, %lhs, rhs = ?rhs, %error, "fraction operation rejected");
            },
        }
    }
}
