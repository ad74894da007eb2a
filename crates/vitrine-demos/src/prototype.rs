//! Prototype: clone an existing object, then let the copy diverge without
//! touching the original.

use vitrine_core::{Demo, DemoResult, EventLog};

#[derive(Debug, Clone, PartialEq)]
struct Phone {
    title: String,
    price: f64,
}

impl Phone {
    fn new(title: &str, price: f64) -> Self {
        Self {
            title: title.to_string(),
            price,
        }
    }

    fn describe(&self) -> String {
        format!("{} (${:.2})", self.title, self.price)
    }
}

pub struct PrototypeDemo;

impl Demo for PrototypeDemo {
    fn name(&self) -> &str {
        "prototype"
    }

    fn description(&self) -> &str {
        "Clone a phone and rename the copy; the original is untouched."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();

        let original = Phone::new("iPhone SE", 123.45);
        let mut copy = original.clone();
        copy.title = "iPhone 14 Pro Max".to_string();

        log.record(format!("original: {}", original.describe()));
        log.record(format!("clone: {}", copy.describe()));

        // Divergence check: renaming the clone must not leak back.
        if original.title != "iPhone SE" {
            return DemoResult::failure(log.finish(), "clone mutated the original");
        }
        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = PrototypeDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec![
                "original: iPhone SE ($123.45)",
                "clone: iPhone 14 Pro Max ($123.45)",
            ]
        );
    }

    #[test]
    fn clone_shares_nothing_with_original() {
        let original = Phone::new("iPhone SE", 123.45);
        let mut copy = original.clone();
        copy.title.push_str(" XL");
        copy.price = 0.0;
        assert_eq!(original, Phone::new("iPhone SE", 123.45));
    }
}
