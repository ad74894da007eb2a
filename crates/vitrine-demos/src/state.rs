//! State: a cart's payment behavior depends on the network state it
//! currently holds; swapping the state swaps the behavior.

use vitrine_core::{Demo, DemoResult, EventLog};

trait NetworkState {
    /// Attempt to process a payment; `true` if the network accepted it.
    fn process(&self, amount: u32, log: &mut EventLog) -> bool;
}

struct Connected;

impl NetworkState for Connected {
    fn process(&self, _amount: u32, log: &mut EventLog) -> bool {
        log.record("Processing");
        true
    }
}

struct Disconnected;

impl NetworkState for Disconnected {
    fn process(&self, _amount: u32, log: &mut EventLog) -> bool {
        log.record("Network is not available. Try again later");
        false
    }
}

struct Cart {
    state: Box<dyn NetworkState>,
    balance: u32,
}

impl Cart {
    fn new(balance: u32) -> Self {
        Self {
            state: Box::new(Disconnected),
            balance,
        }
    }

    fn set_state(&mut self, state: Box<dyn NetworkState>) {
        self.state = state;
    }

    fn pay(&mut self, amount: u32, log: &mut EventLog) {
        if self.balance < amount {
            log.record("Not enough money");
            return;
        }
        if !self.state.process(amount, log) {
            log.record("Payment failed");
            return;
        }
        self.balance -= amount;
        log.record(format!("Payment success. Balance {}", self.balance));
    }
}

pub struct StateDemo;

impl Demo for StateDemo {
    fn name(&self) -> &str {
        "state"
    }

    fn description(&self) -> &str {
        "A cart's payment path changes with its connected/disconnected state."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();

        let mut cart = Cart::new(5_000);
        cart.pay(2_000, &mut log);

        cart.set_state(Box::new(Connected));
        cart.pay(2_000, &mut log);
        cart.pay(6_000, &mut log);

        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = StateDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec![
                "Network is not available. Try again later",
                "Payment failed",
                "Processing",
                "Payment success. Balance 3000",
                "Not enough money",
            ]
        );
    }

    #[test]
    fn failed_payment_keeps_balance() {
        let mut log = EventLog::new();
        let mut cart = Cart::new(100);
        cart.pay(50, &mut log);
        assert_eq!(cart.balance, 100);

        cart.set_state(Box::new(Connected));
        cart.pay(50, &mut log);
        assert_eq!(cart.balance, 50);
    }
}
