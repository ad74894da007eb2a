//! Visitor: a park guest visits each attraction; the attraction decides
//! what happens based on the guest it receives.

use vitrine_core::{Demo, DemoResult, EventLog};

struct Sauna {
    kind: &'static str,
    temperature: u32,
}

struct SwimmingPool;

struct WaterSlide {
    min_age: u32,
}

trait Visitor {
    fn visit_sauna(&self, sauna: &Sauna, log: &mut EventLog);
    fn visit_pool(&self, pool: &SwimmingPool, log: &mut EventLog);
    fn visit_slide(&self, slide: &WaterSlide, log: &mut EventLog);
}

/// Attractions accept a visitor (double dispatch lives here).
enum Attraction {
    Sauna(Sauna),
    Pool(SwimmingPool),
    Slide(WaterSlide),
}

impl Attraction {
    fn accept(&self, visitor: &dyn Visitor, log: &mut EventLog) {
        match self {
            Self::Sauna(sauna) => visitor.visit_sauna(sauna, log),
            Self::Pool(pool) => visitor.visit_pool(pool, log),
            Self::Slide(slide) => visitor.visit_slide(slide, log),
        }
    }
}

struct Guest {
    age: u32,
}

impl Visitor for Guest {
    fn visit_sauna(&self, sauna: &Sauna, log: &mut EventLog) {
        log.record(format!(
            "Sitting in {} sauna at {}°C",
            sauna.kind, sauna.temperature
        ));
    }

    fn visit_pool(&self, _pool: &SwimmingPool, log: &mut EventLog) {
        log.record("Swimming...");
    }

    fn visit_slide(&self, slide: &WaterSlide, log: &mut EventLog) {
        if self.age >= slide.min_age {
            log.record("Sliding...");
        } else {
            log.record("Your age is not allowed");
        }
    }
}

pub struct VisitorDemo;

impl Demo for VisitorDemo {
    fn name(&self) -> &str {
        "visitor"
    }

    fn description(&self) -> &str {
        "Park guests visit attractions; the slide enforces a minimum age."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();

        let park = [
            Attraction::Sauna(Sauna {
                kind: "Finnish",
                temperature: 90,
            }),
            Attraction::Pool(SwimmingPool),
            Attraction::Slide(WaterSlide { min_age: 12 }),
        ];

        let teenager = Guest { age: 13 };
        let child = Guest { age: 9 };

        for attraction in &park {
            attraction.accept(&teenager, &mut log);
        }
        // The child only tries the slide and is turned away.
        park[2].accept(&child, &mut log);

        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = VisitorDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec![
                "Sitting in Finnish sauna at 90°C",
                "Swimming...",
                "Sliding...",
                "Your age is not allowed",
            ]
        );
    }

    #[test]
    fn slide_age_gate() {
        let slide = WaterSlide { min_age: 12 };

        let mut log = EventLog::new();
        Guest { age: 12 }.visit_slide(&slide, &mut log);
        assert_eq!(log.finish(), vec!["Sliding..."]);

        let mut log = EventLog::new();
        Guest { age: 11 }.visit_slide(&slide, &mut log);
        assert_eq!(log.finish(), vec!["Your age is not allowed"]);
    }
}
