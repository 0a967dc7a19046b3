// Principle 2: Open/Closed
// Types should be open for extension and closed for modification: a new
// operation is a new type, not a new branch inside an existing function.

#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Error, Debug, PartialEq)]
pub enum CalculatorError {
    #[error("operation does not exist: {0}")]
    UnknownOperation(String),
}

// ============================================================================
// Breaking the principle
// ============================================================================

pub struct CalculatorBad;

impl CalculatorBad {
    /// Can only add. Subtraction means editing this type.
    pub fn calculate(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    /// What "extending" the calculator looks like without an abstraction:
    /// every new operation is another arm in this match.
    pub fn calculate_by_name(&self, a: i64, b: i64, operation: &str) -> Result<i64, CalculatorError> {
        match operation {
            "add" => Ok(a.wrapping_add(b)),
            "minus" => Ok(a.wrapping_sub(b)),
            other => Err(CalculatorError::UnknownOperation(other.to_string())),
        }
    }
}

// ============================================================================
// Following the principle
// ============================================================================

// Arithmetic wraps on overflow in every build profile.
#[cfg_attr(test, automock)]
pub trait Operation {
    fn execute(&self, a: i64, b: i64) -> i64;
}

pub struct Add;

impl Operation for Add {
    fn execute(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }
}

pub struct Minus;

impl Operation for Minus {
    fn execute(&self, a: i64, b: i64) -> i64 {
        a.wrapping_sub(b)
    }
}

/// Forwards to whichever [`Operation`] it was built with.
pub struct CalculatorGood<'a> {
    operation: &'a dyn Operation,
}

impl<'a> CalculatorGood<'a> {
    pub fn new(operation: &'a dyn Operation) -> Self {
        CalculatorGood { operation }
    }

    pub fn execute(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "dispatching operation");
        self.operation.execute(a, b)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Bad example
    println!("{}", CalculatorBad.calculate(2, 1));
    println!("{}", CalculatorBad.calculate_by_name(2, 1, "minus")?);

    // Good example, a=5 b=3
    let sum = CalculatorGood::new(&Add).execute(5, 3);
    let difference = CalculatorGood::new(&Minus).execute(5, 3);
    println!("{}", sum);
    println!("{}", difference);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use proptest::prelude::*;

    #[test]
    fn test_add_and_minus() {
        assert_eq!(CalculatorGood::new(&Add).execute(5, 3), 8);
        assert_eq!(CalculatorGood::new(&Minus).execute(5, 3), 2);
    }

    #[test]
    fn test_add_wraps_at_i64_max() {
        assert_eq!(CalculatorGood::new(&Add).execute(i64::MAX, 1), i64::MIN);
        assert_eq!(CalculatorGood::new(&Minus).execute(i64::MIN, 1), i64::MAX);
        assert_eq!(CalculatorBad.calculate(i64::MAX, 1), i64::MIN);
        assert_eq!(CalculatorBad.calculate_by_name(i64::MAX, 1, "add"), Ok(i64::MIN));
        assert_eq!(CalculatorBad.calculate_by_name(i64::MIN, 1, "minus"), Ok(i64::MAX));
    }

    #[test]
    fn test_bad_calculator_only_adds() {
        assert_eq!(CalculatorBad.calculate(2, 1), 3);
    }

    #[test]
    fn test_bad_calculator_by_name() {
        assert_eq!(CalculatorBad.calculate_by_name(5, 3, "add"), Ok(8));
        assert_eq!(CalculatorBad.calculate_by_name(5, 3, "minus"), Ok(2));
        assert_eq!(
            CalculatorBad.calculate_by_name(5, 3, "multiply"),
            Err(CalculatorError::UnknownOperation("multiply".to_string()))
        );
    }

    #[test]
    fn test_dispatcher_forwards_arguments_unchanged() {
        let mut mock = MockOperation::new();
        mock.expect_execute()
            .with(eq(5), eq(3))
            .times(1)
            .return_const(42i64);

        assert_eq!(CalculatorGood::new(&mock).execute(5, 3), 42);
    }

    #[test]
    fn test_new_operation_needs_no_calculator_changes() {
        struct Multiply;

        impl Operation for Multiply {
            fn execute(&self, a: i64, b: i64) -> i64 {
                a * b
            }
        }

        assert_eq!(CalculatorGood::new(&Multiply).execute(5, 3), 15);
    }

    #[test]
    fn test_operations_in_one_collection() {
        let operations: Vec<Box<dyn Operation>> = vec![Box::new(Add), Box::new(Minus)];
        let results: Vec<i64> = operations
            .iter()
            .map(|op| CalculatorGood::new(op.as_ref()).execute(5, 3))
            .collect();
        assert_eq!(results, vec![8, 2]);
    }

    proptest! {
        #[test]
        fn test_swapping_operation_matches_direct_call(
            a in any::<i64>(),
            b in any::<i64>(),
        ) {
            prop_assert_eq!(CalculatorGood::new(&Add).execute(a, b), Add.execute(a, b));
            prop_assert_eq!(CalculatorGood::new(&Minus).execute(a, b), Minus.execute(a, b));
            prop_assert_eq!(CalculatorGood::new(&Add).execute(a, b), a.wrapping_add(b));
            prop_assert_eq!(CalculatorGood::new(&Minus).execute(a, b), a.wrapping_sub(b));
        }
    }
}
