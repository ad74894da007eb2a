//! Mediator: users never talk to each other directly; each hands its
//! message to whatever chat-room mediator it is attached to.

use vitrine_core::{Demo, DemoResult, EventLog};

trait ChatRoom {
    fn send_message(&self, sender: &str, message: &str, log: &mut EventLog);
}

/// Plain relay.
struct PlainRoom;

impl ChatRoom for PlainRoom {
    fn send_message(&self, sender: &str, message: &str, log: &mut EventLog) {
        log.record(format!("{sender}: {message}"));
    }
}

/// Relay that marks messages as replies.
struct ReplyRoom;

impl ChatRoom for ReplyRoom {
    fn send_message(&self, sender: &str, message: &str, log: &mut EventLog) {
        log.record(format!("{sender}: >>>>>>> {message}"));
    }
}

struct User<'a> {
    name: &'static str,
    room: Option<&'a dyn ChatRoom>,
}

impl User<'_> {
    fn send(&self, message: &str, log: &mut EventLog) {
        match self.room {
            Some(room) => room.send_message(self.name, message, log),
            None => log.record(format!("{}: off chat", self.name)),
        }
    }
}

pub struct MediatorDemo;

impl Demo for MediatorDemo {
    fn name(&self) -> &str {
        "mediator"
    }

    fn description(&self) -> &str {
        "Chat users exchange messages only through their room mediators."
    }

    fn run(&self) -> DemoResult {
        let mut log = EventLog::new();

        let plain = PlainRoom;
        let reply = ReplyRoom;

        let roman = User {
            name: "Roman",
            room: Some(&plain),
        };
        let masha = User {
            name: "Masha",
            room: Some(&reply),
        };

        roman.send("Hi Mary!", &mut log);
        masha.send("Hi yourself! How are you?", &mut log);

        let offline = User {
            name: "Guest",
            room: None,
        };
        offline.send("anyone here?", &mut log);

        DemoResult::success(log.finish())
    }
}
