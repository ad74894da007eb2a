//! Command: orders are packaged as objects; a client hands them to a
//! waiter (the invoker), who dispatches to the kitchen or the bar.

use vitrine_core::{Demo, DemoResult, EventLog};

trait Command {
    fn execute(&self, log: &mut EventLog);
}

/// Receiver: the kitchen.
struct Cook;

impl Cook {
    fn make_soup(&self, log: &mut EventLog) {
        log.record("Soup has been made");
    }
}

/// Receiver: the bar.
struct Barista;

impl Barista {
    fn make_coffee(&self, log: &mut EventLog) {
        log.record("Coffee has been made");
    }
}

struct PrepareSoup {
    cook: Cook,
}

impl Command for PrepareSoup {
    fn execute(&self, log: &mut EventLog) {
        self.cook.make_soup(log);
    }
}

struct PrepareCoffee {
    barista: Barista,
}

impl Command for PrepareCoffee {
    fn execute(&self, log: &mut EventLog) {
        self.barista.make_coffee(log);
    }
}

/// Invoker: decides nothing about how an order is fulfilled.
struct Waiter;

impl Waiter {
    fn submit(&self, command: &dyn Command, log: &mut EventLog) {
        command.execute(log);
    }
}

struct Client {
    waiter: Option<Waiter>,
}

impl Client {
    fn order(&self, command: &dyn Command, log: &mut EventLog) {
        match &self.waiter {
            Some(waiter) => waiter.submit(command, log),
            None => log.record("Waiter is unavailable"),
        }
    }
}

pub struct CommandDemo;

impl Demo for CommandDemo {
    fn name(&self) -> &str {
        "command"
    }

    fn description(&self) -> &str {
        "Orders packaged as objects pass through a waiter to their receivers."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();

        let soup = PrepareSoup { cook: Cook };
        let coffee = PrepareCoffee { barista: Barista };

        let mut client = Client {
            waiter: Some(Waiter),
        };
        client.order(&soup, &mut log);
        client.order(&coffee, &mut log);

        // No invoker, no order.
        client.waiter = None;
        client.order(&soup, &mut log);

        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = CommandDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec![
                "Soup has been made",
                "Coffee has been made",
                "Waiter is unavailable",
            ]
        );
    }

    #[test]
    fn order_without_waiter_is_refused() {
        let mut log = EventLog::new();
        let client = Client { waiter: None };
        client.order(&PrepareSoup { cook: Cook }, &mut log);
        assert_eq!(log.finish(), vec!["Waiter is unavailable"]);
    }
}
