use thiserror::Error;

#[derive(Debug, Error)]
pub enum KernelError {
    #[error("factorial of negative number {0} is undefined")]
    NegativeFactorial(i32),
    #[error("factorial of {0} overflows a 32-bit integer")]
    FactorialOverflow(i32),
    #[error("interval count must be positive, got {0}")]
    NonPositiveIntervals(i32),
    #[error("argument #{position} cannot be converted to a number: {value}")]
    InvalidArgument {
        position: usize,
        value: serde_json::Value
    }
}
