//! Strategy: a calculator delegates to an interchangeable arithmetic
//! strategy, swapped at runtime.

use vitrine_core::{Demo, DemoResult, EventLog};

trait Strategy {
    fn symbol(&self) -> char;
    fn apply(&self, x: f64, y: f64) -> f64;
}

struct Sum;

impl Strategy for Sum {
    fn symbol(&self) -> char {
        '+'
    }
    fn apply(&self, x: f64, y: f64) -> f64 {
        x + y
    }
}

struct Div;

impl Strategy for Div {
    fn symbol(&self) -> char {
        '/'
    }
    fn apply(&self, x: f64, y: f64) -> f64 {
        x / y
    }
}

struct Multiply;

impl Strategy for Multiply {
    fn symbol(&self) -> char {
        '*'
    }
    fn apply(&self, x: f64, y: f64) -> f64 {
        x * y
    }
}

struct Calculator {
    strategy: Box<dyn Strategy>,
}

impl Calculator {
    fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    fn change_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    fn calculate(&self, x: f64, y: f64, log: &mut EventLog) -> f64 {
        let result = self.strategy.apply(x, y);
        log.record(format!("{} {} {} = {}", x, self.strategy.symbol(), y, result));
        result
    }
}

pub struct StrategyDemo;

impl Demo for StrategyDemo {
    fn name(&self) -> &str {
        "strategy"
    }

    fn description(&self) -> &str {
        "A calculator swaps arithmetic strategies between operations."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();

        let mut calculator = Calculator::new(Box::new(Sum));
        calculator.calculate(20.0, 1.5, &mut log);

        calculator.change_strategy(Box::new(Div));
        calculator.calculate(100.0, 10.0, &mut log);

        calculator.change_strategy(Box::new(Multiply));
        calculator.calculate(6.0, 7.0, &mut log);

        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = StrategyDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec!["20 + 1.5 = 21.5", "100 / 10 = 10", "6 * 7 = 42"]
        );
    }

    #[test]
    fn strategies_are_interchangeable() {
        let mut log = EventLog::new();
        let mut calculator = Calculator::new(Box::new(Sum));
        assert_eq!(calculator.calculate(1.0, 2.0, &mut log), 3.0);

        calculator.change_strategy(Box::new(Multiply));
        assert_eq!(calculator.calculate(1.0, 2.0, &mut log), 2.0);
    }
}
