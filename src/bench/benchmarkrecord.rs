use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::kernel::kernel::KernelValue;


// ─────────────────────────────────────────────────────────────────────────────
// JavaScript-style number text
// ─────────────────────────────────────────────────────────────────────────────

// Whole floats below 2^53 are exact as i64, which is what JSON.stringify
// prints for them.
const MAX_SAFE_WHOLE: f64 = 9007199254740992.0;

fn js_number(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_owned()
    } else if x.is_infinite() {
        if x > 0.0 { "Infinity".to_owned() } else { "-Infinity".to_owned() }
    } else if x.fract() == 0.0 && x.abs() < MAX_SAFE_WHOLE {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}

fn js_json(value: &Value) -> Value {
    match value {
        Value::Number(number) if number.is_f64() => {
            let x = number.as_f64().unwrap_or(f64::NAN);
            if x.fract() == 0.0 && x.abs() < MAX_SAFE_WHOLE {
                Value::from(x as i64)
            } else {
                value.clone()
            }
        },
        Value::Array(items) => Value::Array(items.iter().map(js_json).collect()),
        Value::Object(map) => Value::Object(
            map.iter().map(|(key, item)| (key.clone(), js_json(item))).collect()
        ),
        _ => value.clone()
    }
}


#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRecord {
    index: usize,
    function: String,
    args: Vec<Value>,
    result: KernelValue,
    elapsed_ms: f64
}

impl BenchmarkRecord {
    pub fn new(index: usize,
               function: String,
               args: Vec<Value>,
               result: KernelValue,
               elapsed_ms: f64) -> BenchmarkRecord {
        BenchmarkRecord { index, function, args, result, elapsed_ms }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn result(&self) -> KernelValue {
        self.result
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

impl fmt::Display for BenchmarkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Function #{}]", self.index)?;
        writeln!(f, "Name: {}", self.function)?;
        let args: Vec<Value> = self.args.iter().map(js_json).collect();
        writeln!(f, "Arguments: {}", Value::Array(args))?;
        match self.result {
            KernelValue::Int(value) => writeln!(f, "Result: {}", value)?,
            KernelValue::Float(value) => writeln!(f, "Result: {}", js_number(value))?
        }
        write!(f, "Elapsed: {:.2} ms", self.elapsed_ms)
    }
}


#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchmarkReport {
    records: Vec<BenchmarkRecord>,
    skipped: usize,
    failed: usize
}

impl BenchmarkReport {
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub(crate) fn push(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    pub(crate) fn mark_skipped(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn mark_failed(&mut self) {
        self.failed += 1;
    }
}
