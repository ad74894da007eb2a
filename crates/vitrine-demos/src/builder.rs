//! Builder: per-model builders assemble a car step by step; a director
//! drives the same assembly sequence against whichever builder it holds.

use vitrine_core::{Demo, DemoResult, EventLog};

#[derive(Debug, Default)]
struct Car {
    title: Option<String>,
    engine_volume: Option<f64>,
    max_lifting: Option<u32>,
    color: Option<String>,
}

impl Car {
    fn describe(&self) -> String {
        format!(
            "built {}: color {}, lifting {}kg, engine {}L",
            self.title.as_deref().unwrap_or("?"),
            self.color.as_deref().unwrap_or("?"),
            self.max_lifting.unwrap_or(0),
            self.engine_volume.unwrap_or(0.0),
        )
    }
}

trait CarBuilder {
    fn reset(&mut self);
    fn set_title(&mut self);
    fn set_engine_volume(&mut self);
    fn set_lifting(&mut self);
    fn set_color(&mut self);
    fn take_car(&mut self) -> Car;
}

#[derive(Default)]
struct BmwBuilder {
    car: Car,
}

impl CarBuilder for BmwBuilder {
    fn reset(&mut self) {
        self.car = Car::default();
    }
    fn set_title(&mut self) {
        self.car.title = Some("BMW".to_string());
    }
    fn set_engine_volume(&mut self) {
        self.car.engine_volume = Some(2.5);
    }
    fn set_lifting(&mut self) {
        self.car.max_lifting = Some(700);
    }
    fn set_color(&mut self) {
        self.car.color = Some("Black".to_string());
    }
    fn take_car(&mut self) -> Car {
        std::mem::take(&mut self.car)
    }
}

#[derive(Default)]
struct PlymouthBuilder {
    car: Car,
}

impl CarBuilder for PlymouthBuilder {
    fn reset(&mut self) {
        self.car = Car::default();
    }
    fn set_title(&mut self) {
        self.car.title = Some("Plymouth".to_string());
    }
    fn set_engine_volume(&mut self) {
        self.car.engine_volume = Some(2.5);
    }
    fn set_lifting(&mut self) {
        self.car.max_lifting = Some(480);
    }
    fn set_color(&mut self) {
        self.car.color = Some("Red".to_string());
    }
    fn take_car(&mut self) -> Car {
        std::mem::take(&mut self.car)
    }
}

/// The director: owns the assembly sequence, not the parts.
struct Director;

impl Director {
    fn create_car(builder: &mut dyn CarBuilder) -> Car {
        builder.reset();
        builder.set_title();
        builder.set_color();
        builder.set_lifting();
        builder.set_engine_volume();
        builder.take_car()
    }
}

pub struct BuilderDemo;

impl Demo for BuilderDemo {
    fn name(&self) -> &str {
        "builder"
    }

    fn description(&self) -> &str {
        "A director runs the same assembly steps against two car builders."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();

        let mut bmw_builder = BmwBuilder::default();
        let bmw = Director::create_car(&mut bmw_builder);
        log.record(bmw.describe());

        let mut plymouth_builder = PlymouthBuilder::default();
        let plymouth = Director::create_car(&mut plymouth_builder);
        log.record(plymouth.describe());

        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = BuilderDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec![
                "built BMW: color Black, lifting 700kg, engine 2.5L",
                "built Plymouth: color Red, lifting 480kg, engine 2.5L",
            ]
        );
    }

    #[test]
    fn director_fills_every_field() {
        let mut builder = BmwBuilder::default();
        let car = Director::create_car(&mut builder);
        assert!(car.title.is_some());
        assert!(car.engine_volume.is_some());
        assert!(car.max_lifting.is_some());
        assert!(car.color.is_some());
    }

    #[test]
    fn builder_resets_between_cars() {
        let mut builder = PlymouthBuilder::default();
        let first = Director::create_car(&mut builder);
        let second = Director::create_car(&mut builder);
        assert_eq!(first.describe(), second.describe());
    }
}
