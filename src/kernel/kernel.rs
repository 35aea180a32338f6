use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::kernel::kernelerror::KernelError;
use crate::math::factorial::{
    checked_factorial,
    factorial
};
use crate::math::integration::{
    checked_x2_integrate,
    x2_integrate,
    x2_integrate_trapezoid
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParamKind {
    Int,
    Float
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum KernelValue {
    Int(i32),
    Float(f64)
}

impl KernelValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            KernelValue::Int(value) => f64::from(*value),
            KernelValue::Float(value) => *value
        }
    }
}

impl fmt::Display for KernelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelValue::Int(value) => write!(f, "{}", value),
            KernelValue::Float(value) => write!(f, "{}", value)
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kernel {
    Factorial,
    X2Integrate,
    CheckedFactorial,
    X2IntegrateTrapezoid,
    CheckedX2Integrate
}

impl Kernel {
    pub const ALL: [Kernel; 5] = [
        Kernel::Factorial,
        Kernel::X2Integrate,
        Kernel::CheckedFactorial,
        Kernel::X2IntegrateTrapezoid,
        Kernel::CheckedX2Integrate
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Factorial => "factorial",
            Kernel::X2Integrate => "x2Integrate",
            Kernel::CheckedFactorial => "checkedFactorial",
            Kernel::X2IntegrateTrapezoid => "x2IntegrateTrapezoid",
            Kernel::CheckedX2Integrate => "checkedX2Integrate"
        }
    }

    pub fn params(&self) -> &'static [ParamKind] {
        match self {
            Kernel::Factorial | Kernel::CheckedFactorial => &[ParamKind::Int],
            Kernel::X2Integrate | Kernel::X2IntegrateTrapezoid | Kernel::CheckedX2Integrate => {
                &[ParamKind::Float, ParamKind::Float, ParamKind::Int]
            }
        }
    }

    /// Calls the kernel with JSON arguments, coerced the way a JavaScript
    /// host coerces values passed to a WebAssembly export. Missing
    /// arguments become 0 (integers) or NaN (floats); extra ones are ignored.
    pub fn invoke(&self, args: &[Value]) -> Result<KernelValue, KernelError> {
        match self {
            Kernel::Factorial => {
                Ok(KernelValue::Int(factorial(int_arg(args, 0)?)))
            },
            Kernel::CheckedFactorial => {
                Ok(KernelValue::Int(checked_factorial(int_arg(args, 0)?)?))
            },
            Kernel::X2Integrate => {
                let (xmin, xmax, intervals_count) = integration_args(args)?;
                Ok(KernelValue::Float(x2_integrate(xmin, xmax, intervals_count)))
            },
            Kernel::X2IntegrateTrapezoid => {
                let (xmin, xmax, intervals_count) = integration_args(args)?;
                Ok(KernelValue::Float(x2_integrate_trapezoid(xmin, xmax, intervals_count)))
            },
            Kernel::CheckedX2Integrate => {
                let (xmin, xmax, intervals_count) = integration_args(args)?;
                Ok(KernelValue::Float(checked_x2_integrate(xmin, xmax, intervals_count)?))
            }
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


// ─────────────────────────────────────────────────────────────────────────────
// Argument coercion
// ─────────────────────────────────────────────────────────────────────────────

fn integration_args(args: &[Value]) -> Result<(f64, f64, i32), KernelError> {
    Ok((float_arg(args, 0)?, float_arg(args, 1)?, int_arg(args, 2)?))
}

fn to_number(args: &[Value], position: usize) -> Result<f64, KernelError> {
    match args.get(position) {
        None => Ok(f64::NAN),
        Some(Value::Null) => Ok(0.0),
        Some(Value::Bool(flag)) => Ok(if *flag { 1.0 } else { 0.0 }),
        Some(Value::Number(number)) => number.as_f64().ok_or_else(|| KernelError::InvalidArgument {
            position,
            value: Value::Number(number.clone())
        }),
        Some(other) => Err(KernelError::InvalidArgument {
            position,
            value: other.clone()
        })
    }
}

fn float_arg(args: &[Value], position: usize) -> Result<f64, KernelError> {
    to_number(args, position)
}

fn int_arg(args: &[Value], position: usize) -> Result<i32, KernelError> {
    to_number(args, position).map(to_int32)
}

/// Truncates toward zero and wraps modulo 2³²; NaN and infinities map to 0.
pub fn to_int32(x: f64) -> i32 {
    if !x.is_finite() {
        return 0;
    }
    let wrapped = x.trunc().rem_euclid(4294967296.0);
    (wrapped as u32) as i32
}
