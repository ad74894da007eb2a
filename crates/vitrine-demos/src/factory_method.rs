//! Factory Method: a single factory function produces one of several
//! garment variants behind a common trait.

use vitrine_core::{Demo, DemoResult, EventLog};

/// Wardrobe slot a garment is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Head,
    Feet,
    Legs,
}

trait Garment {
    fn title(&self) -> &str;
    fn color(&self) -> &str;

    fn put_on(&self, log: &mut EventLog) {
        log.record(format!("{} put on with color {}", self.title(), self.color()));
    }
}

struct Hat;
struct Shoes;
struct Jeans;

impl Garment for Hat {
    fn title(&self) -> &str {
        "Hat"
    }
    fn color(&self) -> &str {
        "Red"
    }
}

impl Garment for Shoes {
    fn title(&self) -> &str {
        "Shoes"
    }
    fn color(&self) -> &str {
        "White"
    }
}

impl Garment for Jeans {
    fn title(&self) -> &str {
        "Jeans"
    }
    fn color(&self) -> &str {
        "Blue"
    }
}

/// The factory method: slot in, boxed garment out.
fn make_garment(slot: Slot) -> Box<dyn Garment> {
    match slot {
        Slot::Head => Box::new(Hat),
        Slot::Feet => Box::new(Shoes),
        Slot::Legs => Box::new(Jeans),
    }
}

pub struct FactoryMethodDemo;

impl Demo for FactoryMethodDemo {
    fn name(&self) -> &str {
        "factory-method"
    }

    fn description(&self) -> &str {
        "One factory function produces garment variants behind a shared trait."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();
        let outfit = [Slot::Head, Slot::Feet, Slot::Legs].map(make_garment);
        for garment in &outfit {
            garment.put_on(&mut log);
        }
        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = FactoryMethodDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec![
                "Hat put on with color Red",
                "Shoes put on with color White",
                "Jeans put on with color Blue",
            ]
        );
    }

    #[test]
    fn factory_maps_slot_to_variant() {
        assert_eq!(make_garment(Slot::Head).title(), "Hat");
        assert_eq!(make_garment(Slot::Feet).title(), "Shoes");
        assert_eq!(make_garment(Slot::Legs).title(), "Jeans");
    }
}
