use std::sync::{Arc, Mutex};

use super::chatroom::Chatroom;
use super::event_chatroom::EventChatroom;
use crate::config::RoomSettings;
use crate::notifier::{Listener, ListenerHandle, NEW_MESSAGE, NEW_USER};
use crate::room::RoomView;
use crate::utils::error::ListenerError;

type Tape = Arc<Mutex<Vec<String>>>;

fn tape() -> Tape {
    Arc::new(Mutex::new(Vec::new()))
}

fn recorded(tape: &Tape) -> Vec<String> {
    tape.lock().unwrap().clone()
}

/// Appends "name@topic" to the shared tape on every notify.
struct Recorder {
    name: &'static str,
    tape: Tape,
}

impl Recorder {
    fn new(name: &'static str, tape: &Tape) -> ListenerHandle {
        Arc::new(Self {
            name,
            tape: Arc::clone(tape),
        })
    }
}

impl Listener for Recorder {
    fn notify(&self, topic: &str, _room: &RoomView<'_>) -> Result<(), ListenerError> {
        self.tape
            .lock()
            .unwrap()
            .push(format!("{}@{}", self.name, topic));
        Ok(())
    }
}

/// Records the newest message visible through the view at notify time.
struct LastMessageProbe {
    tape: Tape,
}

impl LastMessageProbe {
    fn new(tape: &Tape) -> ListenerHandle {
        Arc::new(Self {
            tape: Arc::clone(tape),
        })
    }
}

impl Listener for LastMessageProbe {
    fn notify(&self, _topic: &str, room: &RoomView<'_>) -> Result<(), ListenerError> {
        let last = room.messages().last().unwrap_or("<empty>").to_string();
        self.tape.lock().unwrap().push(last);
        Ok(())
    }
}

/// Fails every notify.
struct Rejector;

impl Listener for Rejector {
    fn notify(&self, topic: &str, _room: &RoomView<'_>) -> Result<(), ListenerError> {
        Err(ListenerError::new("rejector", topic, "boom"))
    }
}

#[test]
fn test_broadcast_room_notifies_each_listener_once_in_order() {
    let mut room = Chatroom::new();
    let t = tape();
    for name in ["l1", "l2", "l3"] {
        room.register(Recorder::new(name, &t));
    }

    room.add_message("hi").unwrap();

    assert_eq!(recorded(&t), ["l1@", "l2@", "l3@"]);
    let messages: Vec<&str> = room.messages().collect();
    assert_eq!(messages, ["hi"]);
}

#[test]
fn test_message_is_visible_during_notify() {
    let mut room = Chatroom::new();
    let t = tape();
    room.register(LastMessageProbe::new(&t));

    room.add_message("hello").unwrap();

    assert_eq!(recorded(&t), ["hello"]);
}

#[test]
fn test_unregistered_listener_stops_receiving() {
    let mut room = Chatroom::new();
    let t = tape();
    let l1 = Recorder::new("l1", &t);
    let l2 = Recorder::new("l2", &t);
    room.register(Arc::clone(&l1));
    room.register(Arc::clone(&l2));

    room.add_message("first").unwrap();
    room.unregister(&l1);
    room.add_message("second").unwrap();

    assert_eq!(recorded(&t), ["l1@", "l2@", "l2@"]);
    assert_eq!(room.listener_count(), 1);
}

#[test]
fn test_failed_dispatch_does_not_roll_back_the_log() {
    let mut room = Chatroom::new();
    room.register(Arc::new(Rejector));

    let err = room.add_message("kept").unwrap_err();

    assert_eq!(err.listener(), "rejector");
    let messages: Vec<&str> = room.messages().collect();
    assert_eq!(messages, ["kept"]);
}

#[test]
fn test_empty_message_is_accepted() {
    let mut room = Chatroom::new();

    room.add_message("").unwrap();

    let messages: Vec<&str> = room.messages().collect();
    assert_eq!(messages, [""]);
}

#[test]
fn test_messages_view_is_restartable() {
    let mut room = Chatroom::new();
    room.add_message("a").unwrap();
    room.add_message("b").unwrap();

    let first: Vec<&str> = room.messages().collect();
    let second: Vec<&str> = room.messages().collect();

    assert_eq!(first, ["a", "b"]);
    assert_eq!(first, second);
}

#[test]
fn test_event_room_routes_by_topic() {
    let mut room = EventChatroom::new();
    let t = tape();
    room.register(NEW_MESSAGE, Recorder::new("messages", &t));
    room.register(NEW_USER, Recorder::new("users", &t));

    room.add_user("ana").unwrap();
    assert_eq!(recorded(&t), ["users@NEWUSER"]);

    room.add_message("x").unwrap();
    assert_eq!(recorded(&t), ["users@NEWUSER", "messages@NEWMESSAGE"]);

    let users: Vec<&str> = room.users().collect();
    assert_eq!(users, ["ana"]);
    let messages: Vec<&str> = room.messages().collect();
    assert_eq!(messages, ["x"]);
}

#[test]
fn test_event_room_listener_can_follow_both_topics() {
    let mut room = EventChatroom::new();
    let t = tape();
    let both = Recorder::new("both", &t);
    room.register(NEW_MESSAGE, Arc::clone(&both));
    room.register(NEW_USER, Arc::clone(&both));

    room.add_user("ana").unwrap();
    room.add_message("hi").unwrap();

    assert_eq!(recorded(&t), ["both@NEWUSER", "both@NEWMESSAGE"]);
}

#[test]
fn test_event_room_roster_is_visible_during_notify() {
    struct RosterProbe {
        tape: Tape,
    }

    impl Listener for RosterProbe {
        fn notify(&self, _topic: &str, room: &RoomView<'_>) -> Result<(), ListenerError> {
            let roster: Vec<&str> = room.users().collect();
            self.tape.lock().unwrap().push(roster.join(","));
            Ok(())
        }
    }

    let mut room = EventChatroom::new();
    let t = tape();
    room.register(
        NEW_USER,
        Arc::new(RosterProbe {
            tape: Arc::clone(&t),
        }),
    );

    room.add_user("ana").unwrap();
    room.add_user("ben").unwrap();

    assert_eq!(recorded(&t), ["ana", "ana,ben"]);
}

#[test]
fn test_rooms_built_from_settings_start_empty() {
    let settings = RoomSettings {
        message_capacity: 8,
        user_capacity: 4,
    };

    let chatroom = Chatroom::with_settings(&settings);
    assert_eq!(chatroom.messages().count(), 0);
    assert_eq!(chatroom.listener_count(), 0);

    let event_room = EventChatroom::with_settings(&settings);
    assert_eq!(event_room.messages().count(), 0);
    assert_eq!(event_room.users().count(), 0);
    assert_eq!(event_room.listener_count(NEW_MESSAGE), 0);
}

#[test]
fn test_sequential_mutations_dispatch_in_order() {
    let mut room = Chatroom::new();
    let t = tape();
    room.register(LastMessageProbe::new(&t));

    room.add_message("one").unwrap();
    room.add_message("two").unwrap();
    room.add_message("three").unwrap();

    assert_eq!(recorded(&t), ["one", "two", "three"]);
}
