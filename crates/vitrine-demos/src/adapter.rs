//! Adapter: a metric-facing BMR calculator wraps an imperial-only one,
//! converting units on the way in and interpreting the result on the way
//! out.

use vitrine_core::{Demo, DemoResult, EventLog};

/// The adaptee interface: basal metabolic rate from imperial inputs.
trait ImperialBmr {
    fn bmr(&self, height_ft: f64, weight_lb: f64, age: u32) -> i64;
}

struct ImperialBmrCalculator;

impl ImperialBmr for ImperialBmrCalculator {
    fn bmr(&self, height_ft: f64, weight_lb: f64, age: u32) -> i64 {
        (66.0 + 6.2 * weight_lb + 12.7 * height_ft - 6.76 * f64::from(age)) as i64
    }
}

/// The target interface callers actually want: metric inputs, verdict out.
trait MetricBmr {
    fn bmr(&self, height_m: f64, weight_kg: f64, age: u32) -> String;
}

struct BmrAdapter<T: ImperialBmr> {
    adaptee: T,
}

impl<T: ImperialBmr> MetricBmr for BmrAdapter<T> {
    fn bmr(&self, height_m: f64, weight_kg: f64, age: u32) -> String {
        let height_ft = height_m * 3.20004;
        let weight_lb = weight_kg * 2.0462;
        let result = self.adaptee.bmr(height_ft, weight_lb, age);
        let verdict = if result > 1000 { "High" } else { "Low" };
        format!("BMR is {result}. {verdict}")
    }
}

pub struct AdapterDemo;

impl Demo for AdapterDemo {
    fn name(&self) -> &str {
        "adapter"
    }

    fn description(&self) -> &str {
        "A metric BMR interface adapts an imperial-only calculator."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();
        let calculator = BmrAdapter {
            adaptee: ImperialBmrCalculator,
        };
        log.record(calculator.bmr(1.84, 68.0, 33));
        DemoResult::success(log.finish())
    }
}
