// Event plumbing between the transport and the room coordinator
//
// Every connection emits into one EventBus; a single RoomSubscription task drains it,
// so room state is mutated by exactly one task.

// Public API - what other modules can use
pub use bus::{EventBus, EventReceiver};
pub use events::RoomEvent;
pub use room_handler::{RoomEventError, RoomEventHandler};
pub use room_subscription::RoomSubscription;

// Internal modules
mod bus;
mod events;
mod room_handler;
mod room_subscription;
