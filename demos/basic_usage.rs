// ============================================================================
// Basic Usage Example
// ============================================================================

use fraction_arith::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    fraction_arith::utils::init_logging(tracing::Level::DEBUG);

    println!("=== Fraction Arithmetic Example ===\n");

    // Raw construction keeps whatever it is given
    let raw = Fraction::new(6, -8);
    println!("Raw fraction:        {}", raw);
    println!("Normalized:          {}", raw.normalize().unwrap());

    // Operators panic on a zero denominator, checked_* report it
    let a = Fraction::new(2, 3);
    let b = Fraction::new(1, 5);
    println!("\n{} + {} = {}", a, b, a + b);
    println!("{} - {} = {}", a, b, a - b);
    println!("{} * {} = {}", a, b, a * b);

    match a.checked_add(Fraction::new(1, 0)) {
        Ok(sum) => println!("unexpected sum: {}", sum),
        Err(e) => println!("\n{} + {{1/0}} rejected: {}", a, e),
    }

    // Calculator with both operands normalized, reporting through tracing
    println!("\n=== Calculator ===");
    let calculator = FractionCalculatorBuilder::new()
        .normalize_both_operands()
        .build(Arc::new(LoggingEventHandler));

    let third = Fraction::new(2, 6);
    let sum = calculator.add(third, third).unwrap();
    println!("{} + {} = {}", third, third, sum);

    let product = calculator.multiply(sum, Fraction::new(3, 2)).unwrap();
    println!("{} * {{3/2}} = {}", sum, product);

    if let Ok(value) = product.to_decimal() {
        println!("As decimal: {}", value);
    }
}
