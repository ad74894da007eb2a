//! Facade: a coffee machine exposes one `brew_espresso` entry point over
//! the grinder, boiler, and brewing subsystems it hides.

use vitrine_core::{Demo, DemoResult, EventLog};

struct Grinder;

impl Grinder {
    fn grind(&self, log: &mut EventLog) {
        log.record("Grinding beans");
    }
}

struct Boiler;

impl Boiler {
    fn heat(&self, target_celsius: u32, log: &mut EventLog) {
        log.record(format!("Heating water to {target_celsius}°C"));
    }
}

struct BrewUnit;

impl BrewUnit {
    fn brew(&self, log: &mut EventLog) {
        log.record("Brewing espresso");
    }
}

/// The facade: callers see one method, not three subsystems.
struct CoffeeMachine {
    grinder: Grinder,
    boiler: Boiler,
    brew_unit: BrewUnit,
}

impl CoffeeMachine {
    fn new() -> Self {
        Self {
            grinder: Grinder,
            boiler: Boiler,
            brew_unit: BrewUnit,
        }
    }

    fn brew_espresso(&self, log: &mut EventLog) {
        self.grinder.grind(log);
        self.boiler.heat(93, log);
        self.brew_unit.brew(log);
        log.record("Espresso ready");
    }
}

pub struct FacadeDemo;

impl Demo for FacadeDemo {
    fn name(&self) -> &str {
        "facade"
    }

    fn description(&self) -> &str {
        "One coffee-machine call drives the grinder, boiler, and brew unit."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();
        CoffeeMachine::new().brew_espresso(&mut log);
        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = FacadeDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec![
                "Grinding beans",
                "Heating water to 93°C",
                "Brewing espresso",
                "Espresso ready",
            ]
        );
    }
}
