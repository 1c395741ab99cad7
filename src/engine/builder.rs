// ============================================================================
// Calculator Builder
// Fluent construction of configured fraction calculators
// ============================================================================

use crate::domain::{ArithmeticConfig, OperandNormalization};
use crate::engine::FractionCalculator;
use crate::interfaces::EventHandler;
use std::sync::Arc;

/// Fluent builder for creating calculators
///
/// # Example
/// ```
/// use fraction_arith::prelude::*;
/// use std::sync::Arc;
///
/// let calculator = FractionCalculatorBuilder::new()
///     .normalize_both_operands()
///     .build(Arc::new(NoOpEventHandler));
///
/// let sum = calculator.add(Fraction::new(1, 2), Fraction::new(2, 4)).unwrap();
/// assert_eq!(sum, Fraction::ONE);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FractionCalculatorBuilder {
    config: ArithmeticConfig,
}

impl FractionCalculatorBuilder {
    /// Create a new builder with the compatible configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ArithmeticConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Operand Normalization
    // ========================================================================

    /// Normalize only the left operand (default)
    pub fn normalize_left_operand(mut self) -> Self {
        self.config.operand_normalization = OperandNormalization::LeftOnly;
        self
    }

    /// Normalize both operands before combining
    pub fn normalize_both_operands(mut self) -> Self {
        self.config.operand_normalization = OperandNormalization::Both;
        self
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    /// Enable or disable event reporting
    pub fn with_events(mut self, emit_events: bool) -> Self {
        self.config.emit_events = emit_events;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> FractionCalculator {
        FractionCalculator::new(self.config, event_handler)
    }
}
