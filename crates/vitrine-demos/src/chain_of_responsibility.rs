//! Chain of Responsibility: a payment walks a chain of accounts until one
//! can cover it; an uncovered payment falls off the end of the chain.

use vitrine_core::{Demo, DemoResult, EventLog};

struct Account {
    title: &'static str,
    balance: u32,
    successor: Option<Box<Account>>,
}

impl Account {
    fn new(title: &'static str, balance: u32, successor: Option<Box<Account>>) -> Self {
        Self {
            title,
            balance,
            successor,
        }
    }

    fn can_pay(&self, amount: u32) -> bool {
        self.balance >= amount
    }

    /// Pay from this account or hand the request to the successor.
    fn pay(&mut self, amount: u32, log: &mut EventLog) {
        if self.can_pay(amount) {
            self.balance -= amount;
            log.record(format!(
                "Paid {} from {}, balance {}",
                amount, self.title, self.balance
            ));
        } else if let Some(successor) = self.successor.as_mut() {
            successor.pay(amount, log);
        } else {
            log.record(format!("No account could cover {amount}"));
        }
    }
}

pub struct ChainOfResponsibilityDemo;

impl Demo for ChainOfResponsibilityDemo {
    fn name(&self) -> &str {
        "chain-of-responsibility"
    }

    fn description(&self) -> &str {
        "Payments walk a cash/debit/credit account chain until one can pay."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();

        let credit = Account::new("Credit card", 20_000, None);
        let debit = Account::new("Debit card", 15_000, Some(Box::new(credit)));
        let mut cash = Account::new("Cash", 10_000, Some(Box::new(debit)));

        for amount in [5_000, 6_000, 13_000, 100_000] {
            cash.pay(amount, &mut log);
        }

        DemoResult::success(log.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_matches() {
        let result = ChainOfResponsibilityDemo.run();
        assert!(result.status.is_success());
        assert_eq!(
            result.events,
            vec![
                "Paid 5000 from Cash, balance 5000",
                "Paid 6000 from Debit card, balance 9000",
                "Paid 13000 from Credit card, balance 7000",
                "No account could cover 100000",
            ]
        );
    }

    #[test]
    fn first_capable_account_pays() {
        let mut log = EventLog::new();
        let second = Account::new("second", 100, None);
        let mut first = Account::new("first", 10, Some(Box::new(second)));

        first.pay(50, &mut log);
        assert_eq!(log.finish(), vec!["Paid 50 from second, balance 50"]);
        // The first account never spent anything.
        assert_eq!(first.balance, 10);
    }
}
