//! Decorator: condiments wrap a beverage, each layer adding to the
//! description and the cost without the base knowing.

use vitrine_core::{Demo, DemoResult, EventLog};

trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

struct Espresso;

impl Beverage for Espresso {
    fn description(&self) -> String {
        "espresso".to_string()
    }
    fn cost(&self) -> f64 {
        2.0
    }
}

struct Milk {
    inner: Box<dyn Beverage>,
}

impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{} + milk", self.inner.description())
    }
    fn cost(&self) -> f64 {
        self.inner.cost() + 0.5
    }
}

struct Chocolate {
    inner: Box<dyn Beverage>,
}

impl Beverage for Chocolate {
    fn description(&self) -> String {
        format!("{} + chocolate", self.inner.description())
    }
    fn cost(&self) -> f64 {
        self.inner.cost() + 0.7
    }
}

fn price_line(beverage: &dyn Beverage, log: &mut EventLog) {
    log.record(format!("{} = ${:.2}", beverage.description(), beverage.cost()));
}

pub struct DecoratorDemo;

impl Demo for DecoratorDemo {
    fn name(&self) -> &str {
        "decorator"
    }

    fn description(&self) -> &str {
        "Condiment layers stack cost and description onto an espresso."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();

        price_line(&Espresso, &mut log);

        let with_milk = Milk {
            inner: Box::new(Espresso),
        };
        price_line(&with_milk, &mut log);

        let with_both = Chocolate {
            inner: Box::new(with_milk),
        };
        price_line(&with_both, &mut log);

        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = DecoratorDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec![
                "espresso = $2.00",
                "espresso + milk = $2.50",
                "espresso + milk + chocolate = $3.20",
            ]
        );
    }

    #[test]
    fn layers_compose_in_wrap_order() {
        let stacked = Milk {
            inner: Box::new(Chocolate {
                inner: Box::new(Espresso),
            }),
        };
        assert_eq!(stacked.description(), "espresso + chocolate + milk");
        assert!((stacked.cost() - 3.2).abs() < 1e-9);
    }
}
