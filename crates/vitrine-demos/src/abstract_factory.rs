//! Abstract Factory: one factory per outfit family, each producing a
//! matched group of garments (top and pants together).

use vitrine_core::{Demo, DemoResult, EventLog};

trait Top {
    fn title(&self) -> &str;

    fn put_on(&self, log: &mut EventLog) {
        log.record(format!("Put on {}", self.title()));
    }
}

trait Pants {
    fn title(&self) -> &str;
    fn color(&self) -> &str;

    fn put_on(&self, log: &mut EventLog) {
        log.record(format!("Put on {} color {}", self.title(), self.color()));
    }
}

struct Jacket;
struct WindStopper;

impl Top for Jacket {
    fn title(&self) -> &str {
        "Jacket"
    }
}

impl Top for WindStopper {
    fn title(&self) -> &str {
        "WindStopper"
    }
}

struct Trousers;
struct Tracksuit;

impl Pants for Trousers {
    fn title(&self) -> &str {
        "Trousers"
    }
    fn color(&self) -> &str {
        "Blue"
    }
}

impl Pants for Tracksuit {
    fn title(&self) -> &str {
        "Tracksuit"
    }
    fn color(&self) -> &str {
        "Black"
    }
}

/// The abstract factory: a matched top-and-pants family.
trait OutfitFactory {
    fn create_top(&self) -> Box<dyn Top>;
    fn create_pants(&self) -> Box<dyn Pants>;
}

struct CasualFactory;
struct SportFactory;

impl OutfitFactory for CasualFactory {
    fn create_top(&self) -> Box<dyn Top> {
        Box::new(Jacket)
    }
    fn create_pants(&self) -> Box<dyn Pants> {
        Box::new(Trousers)
    }
}

impl OutfitFactory for SportFactory {
    fn create_top(&self) -> Box<dyn Top> {
        Box::new(WindStopper)
    }
    fn create_pants(&self) -> Box<dyn Pants> {
        Box::new(Tracksuit)
    }
}

#[derive(Debug, Clone, Copy)]
enum Occasion {
    Meeting,
    Sport,
}

fn factory_for(occasion: Occasion) -> Box<dyn OutfitFactory> {
    match occasion {
        Occasion::Meeting => Box::new(CasualFactory),
        Occasion::Sport => Box::new(SportFactory),
    }
}

pub struct AbstractFactoryDemo;

impl Demo for AbstractFactoryDemo {
    fn name(&self) -> &str {
        "abstract-factory"
    }

    fn description(&self) -> &str {
        "Outfit factories produce matched garment families per occasion."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();
        for occasion in [Occasion::Meeting, Occasion::Sport] {
            let factory = factory_for(occasion);
            // Pants first, then top, as a full outfit goes on.
            factory.create_pants().put_on(&mut log);
            factory.create_top().put_on(&mut log);
        }
        DemoResult::success(log.finish())
    }
}
