// ============================================================================
// Fraction Calculator
// Configured entry point for fraction arithmetic with event reporting
// ============================================================================

use crate::domain::ArithmeticConfig;
use crate::interfaces::{ArithmeticEvent, EventHandler, NoOpEventHandler, Operation};
use crate::numeric::{Fraction, NumericResult};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

type BinaryOp = fn(Fraction, Fraction) -> NumericResult<Fraction>;

/// Stateless calculator applying an [`ArithmeticConfig`] to fraction
/// operations and reporting each call to an [`EventHandler`].
///
/// Every method returns the rejection as an error value; nothing here panics.
pub struct FractionCalculator {
    /// Operand handling configuration
    config: ArithmeticConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl FractionCalculator {
    /// Create a new calculator
    pub fn new(config: ArithmeticConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    /// Reduce a fraction to canonical form.
    pub fn normalize(&self, fraction: Fraction) -> NumericResult<Fraction> {
        let outcome = fraction.normalize();

        let event = match outcome {
            Ok(output) => ArithmeticEvent::Normalized {
                input: fraction,
                output,
                timestamp: Utc::now(),
            },
            Err(error) => ArithmeticEvent::Rejected {
                operation: Operation::Normalize,
                lhs: fraction,
                rhs: None,
                error,
                timestamp: Utc::now(),
            },
        };
        self.emit(event);

        outcome
    }

    /// Sum of `lhs` and `rhs`, normalized.
    pub fn add(&self, lhs: Fraction, rhs: Fraction) -> NumericResult<Fraction> {
        self.apply(Operation::Add, lhs, rhs, Fraction::checked_add)
    }

    /// Difference `lhs - rhs`, normalized.
    pub fn subtract(&self, lhs: Fraction, rhs: Fraction) -> NumericResult<Fraction> {
        self.apply(Operation::Subtract, lhs, rhs, Fraction::checked_sub)
    }

    /// Product of `lhs` and `rhs`, normalized.
    pub fn multiply(&self, lhs: Fraction, rhs: Fraction) -> NumericResult<Fraction> {
        self.apply(Operation::Multiply, lhs, rhs, Fraction::checked_mul)
    }

    fn apply(
        &self,
        operation: Operation,
        lhs: Fraction,
        rhs: Fraction,
        op: BinaryOp,
    ) -> NumericResult<Fraction> {
        let outcome = self.prepare_rhs(rhs).and_then(|rhs| op(lhs, rhs));

        let event = match outcome {
            Ok(result) => ArithmeticEvent::Computed {
                operation,
                lhs,
                rhs,
                result,
                timestamp: Utc::now(),
            },
            Err(error) => ArithmeticEvent::Rejected {
                operation,
                lhs,
                rhs: Some(rhs),
                error,
                timestamp: Utc::now(),
            },
        };
        self.emit(event);

        outcome
    }

    /// The left operand is always normalized by the operation itself
    fn prepare_rhs(&self, rhs: Fraction) -> NumericResult<Fraction> {
        if self.config.normalizes_rhs() {
            rhs.normalize()
        } else {
            Ok(rhs)
        }
    }

    fn emit(&self, event: ArithmeticEvent) {
        if self.config.emit_events {
            self.event_handler.on_event(event);
        }
    }
}

impl fmt::Debug for FractionCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FractionCalculator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for FractionCalculator {
    fn default() -> Self {
        Self::new(ArithmeticConfig::default(), Arc::new(NoOpEventHandler))
    }
}
