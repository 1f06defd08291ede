mod bus;
mod events;
mod handlers;

pub use bus::{EventBus, SubscriptionId};
pub use events::DrawingEvent;
pub use handlers::EventRecorder;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &DrawingEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&DrawingEvent) + Send,
{
    fn handle_event(&mut self, event: &DrawingEvent) {
        self(event)
    }
}
