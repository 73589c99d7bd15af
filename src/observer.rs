// third-party imports
use crossbeam_channel::Sender;

// ---

/// Receives every element consumed by [`crate::stream::Engine::drive`].
///
/// Observers are notified strictly after the tokenizer hook has processed the
/// element and strictly in consumption order. They have no influence on the
/// control flow.
pub trait Observer<T> {
    fn notify(&mut self, value: &T);
}

impl<T, F> Observer<T> for F
where
    F: FnMut(&T),
{
    #[inline]
    fn notify(&mut self, value: &T) {
        self(value)
    }
}

// ---

/// Observer that forwards a copy of every consumed element into a channel.
///
/// Elements sent after the receiving side was dropped are discarded.
#[derive(Debug, Clone)]
pub struct Forward<T> {
    sender: Sender<T>,
}

impl<T> Forward<T> {
    pub fn new(sender: Sender<T>) -> Self {
        Self { sender }
    }
}

impl<T: Clone> Observer<T> for Forward<T> {
    fn notify(&mut self, value: &T) {
        if self.sender.send(value.clone()).is_err() {
            log::trace!("observer channel is disconnected, element dropped");
        }
    }
}

#[cfg(test)]
mod tests;
