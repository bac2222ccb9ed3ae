use crate::events::Event;

/// Receives every event the controller emits, in order.
pub trait Observer {
    fn notify(&mut self, event: &Event);
}

impl<F> Observer for F
where
    F: FnMut(&Event),
{
    fn notify(&mut self, event: &Event) {
        self(event)
    }
}
