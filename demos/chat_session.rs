use std::sync::Arc;

use roomcast::config::load_config;
use roomcast::listeners::LogListener;
use roomcast::notifier::{Listener, ListenerHandle, NEW_MESSAGE, NEW_USER};
use roomcast::room::{EventChatroom, RoomView};
use roomcast::utils::error::ListenerError;
use roomcast::utils::logging;

/// Chat participant that redraws its transcript whenever the room changes.
struct ChatUser {
    name: String,
}

impl ChatUser {
    fn handle(name: &str) -> ListenerHandle {
        Arc::new(Self {
            name: name.to_string(),
        })
    }
}

impl Listener for ChatUser {
    fn notify(&self, topic: &str, room: &RoomView<'_>) -> Result<(), ListenerError> {
        match topic {
            NEW_MESSAGE => {
                let transcript: Vec<&str> = room.messages().collect();
                println!("[{}] transcript: {}", self.name, transcript.join(" | "));
            }
            NEW_USER => {
                let roster: Vec<&str> = room.users().collect();
                println!("[{}] roster: {}", self.name, roster.join(", "));
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&self) {
        println!("[{}] left", self.name);
    }
}

fn main() -> Result<(), ListenerError> {
    let settings = load_config().expect("Failed to load configuration");
    logging::init(&settings.logging.level);

    let mut room = EventChatroom::with_settings(&settings.room);

    let ana = ChatUser::handle("ana");
    let ben = ChatUser::handle("ben");

    // ana follows both topics, ben and the audit log only new messages
    room.register(NEW_MESSAGE, Arc::clone(&ana));
    room.register(NEW_USER, Arc::clone(&ana));
    room.register(NEW_MESSAGE, Arc::clone(&ben));
    room.register(NEW_MESSAGE, Arc::new(LogListener::new()));

    room.add_user("ana")?;
    room.add_user("ben")?;
    room.add_message("hello room")?;
    room.add_message("anyone around?")?;

    // ben leaves: the owner unregisters the handle, then closes it
    room.unregister(NEW_MESSAGE, &ben);
    ben.close();

    room.add_message("ben no longer sees this")?;

    Ok(())
}
