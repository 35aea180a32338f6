use std::time::Instant;

use tracing::{
    debug,
    error,
    info,
    warn
};

use crate::bench::benchmarkconfiguration::{
    BenchmarkCall,
    BenchmarkConfiguration
};
use crate::bench::benchmarkrecord::{
    BenchmarkRecord,
    BenchmarkReport
};
use crate::manager::manager::{
    IManager,
    KernelManager
};
use crate::manager::managererror::ManagerError;


/// Runs every call of a [`BenchmarkConfiguration`] in order against a
/// kernel registry. A call that cannot run is logged and counted, it never
/// aborts the remaining calls.
pub struct BenchmarkRunner {
    manager: KernelManager
}

impl BenchmarkRunner {
    pub fn new(manager: KernelManager) -> BenchmarkRunner {
        BenchmarkRunner { manager }
    }

    pub fn run(&self, configuration: &BenchmarkConfiguration) -> BenchmarkReport {
        let mut report = BenchmarkReport::default();
        for (index, call) in configuration.calls().iter().enumerate() {
            match self.run_one(index, call) {
                Ok(record) => {
                    info!(
                        index,
                        function = record.function(),
                        result = %record.result(),
                        elapsed_ms = record.elapsed_ms(),
                        "call completed"
                    );
                    report.push(record);
                },
                Err(ManagerError::MissingFunctionName) => {
                    warn!(index, "call has no 'function' name, skipping");
                    report.mark_skipped();
                },
                Err(err) if err.is_skip() => {
                    error!(index, "function is not exported: {}", err);
                    report.mark_skipped();
                },
                Err(err) => {
                    error!(index, function = call.function().unwrap_or_default(), "call failed: {}", err);
                    report.mark_failed();
                }
            }
        }
        debug!(
            records = report.records().len(),
            skipped = report.skipped(),
            failed = report.failed(),
            "benchmark finished"
        );
        report
    }

    /// Resolves and times a single call. Errors for which
    /// [`ManagerError::is_skip`] holds mean no kernel was invoked.
    pub fn run_one(&self, index: usize, call: &BenchmarkCall) -> Result<BenchmarkRecord, ManagerError> {
        let name = call.function().ok_or(ManagerError::MissingFunctionName)?;
        let kernel = self.manager.get(name)?;
        let args = call.args()?;

        let arity = kernel.params().len();
        if args.len() > arity {
            warn!(index, function = name, arity, given = args.len(), "extra arguments ignored");
        }

        let start = Instant::now();
        let result = kernel.invoke(args);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        Ok(BenchmarkRecord::new(index, name.to_owned(), args.to_vec(), result?, elapsed_ms))
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        BenchmarkRunner::new(KernelManager::with_builtin_kernels())
    }
}
