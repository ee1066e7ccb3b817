//! Conversion benchmarking
//!
//! Times `OddsFactory::from_decimal` over the `1.01..=1.99` price sweep and
//! summarizes the per-call latencies.
//!
//! # Usage
//!
//! ```rust
//! use odds_formatter::common::bench::SpeedTest;
//! use odds_formatter::OddsFactory;
//!
//! let factory = OddsFactory::new();
//! let stats = SpeedTest::bench_factory("continued_fraction", &factory, 200);
//! assert_eq!(stats.iterations, 200);
//! println!("{}", stats);
//! ```

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::odds::OddsFactory;

/// Statistics from running a benchmark multiple times
#[derive(Debug, Clone)]
pub struct BenchmarkStats {
    /// Name of the benchmark
    pub name: String,
    /// Number of iterations run
    pub iterations: usize,
    /// Total time for all iterations
    pub total: Duration,
    /// Average time per iteration
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
    pub median: Duration,
    /// 95th percentile
    pub p95: Duration,
    /// 99th percentile
    pub p99: Duration,
}

impl BenchmarkStats {
    /// Operations per second based on average duration
    pub fn ops_per_second(&self) -> f64 {
        if self.average.as_nanos() == 0 {
            return f64::INFINITY;
        }
        1_000_000_000.0 / self.average.as_nanos() as f64
    }

    /// How many times slower than `baseline` this run was on average
    pub fn relative_to(&self, baseline: &BenchmarkStats) -> f64 {
        let baseline = baseline.average.as_nanos().max(1) as f64;
        self.average.as_nanos() as f64 / baseline
    }
}

impl fmt::Display for BenchmarkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Benchmark] {}", self.name)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Total:      {:?}", self.total)?;
        writeln!(f, "  Average:    {:?}", self.average)?;
        writeln!(f, "  Min:        {:?}", self.min)?;
        writeln!(f, "  Max:        {:?}", self.max)?;
        writeln!(f, "  Median:     {:?}", self.median)?;
        writeln!(f, "  P95:        {:?}", self.p95)?;
        writeln!(f, "  P99:        {:?}", self.p99)?;
        writeln!(f, "  Ops/sec:    {:.2}", self.ops_per_second())
    }
}

/// Decimal prices `1.01` through `1.99` as input strings
pub fn decimal_sweep() -> Vec<String> {
    (101..=199)
        .map(|scaled: u32| format!("{}.{:02}", scaled / 100, scaled % 100))
        .collect()
}

/// Benchmark runner
pub struct SpeedTest;

impl SpeedTest {
    /// Run `f` `iterations` times after one warmup call
    ///
    /// A zero iteration count is treated as one.
    pub fn benchmark<F>(name: &str, iterations: usize, mut f: F) -> BenchmarkStats
    where
        F: FnMut(),
    {
        let iterations = iterations.max(1);

        f();

        let mut durations: Vec<Duration> = Vec::with_capacity(iterations);
        let total_start = Instant::now();

        for _ in 0..iterations {
            let start = Instant::now();
            f();
            durations.push(start.elapsed());
        }

        let total = total_start.elapsed();

        Self::calculate_stats(name, durations, total)
    }

    /// Time `factory.from_decimal` cycling through [`decimal_sweep`]
    pub fn bench_factory(name: &str, factory: &OddsFactory, iterations: usize) -> BenchmarkStats {
        let sweep = decimal_sweep();
        let mut index = 0;

        Self::benchmark(name, iterations, || {
            let input = &sweep[index % sweep.len()];
            index += 1;
            let _ = black_box(factory.from_decimal(black_box(input)));
        })
    }

    fn calculate_stats(name: &str, mut durations: Vec<Duration>, total: Duration) -> BenchmarkStats {
        let iterations = durations.len();

        durations.sort();

        let min = durations[0];
        let max = durations[iterations - 1];
        let median = durations[iterations / 2];
        let p95 = durations[(iterations as f64 * 0.95) as usize];
        let p99 = durations[(iterations as f64 * 0.99).min(iterations as f64 - 1.0) as usize];

        let total_nanos: u128 = durations.iter().map(|d| d.as_nanos()).sum();
        let average = Duration::from_nanos((total_nanos / iterations as u128) as u64);

        BenchmarkStats {
            name: name.to_string(),
            iterations,
            total,
            average,
            min,
            max,
            median,
            p95,
            p99,
        }
    }
}
