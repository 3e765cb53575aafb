//! Notification channels for tree replacement.
//!
//! The editor exposes two channels: `load` fires after the whole tree is
//! replaced or torn down, `update` is reserved for host layers that mutate
//! nested entities in place and want to announce it themselves. Each channel
//! keeps an ordered listener list and a suppression lock; a locked channel
//! drops notifications entirely (no queuing, no deferred delivery).

mod dispatcher;

#[cfg(test)]
mod dispatcher_tests;

pub use dispatcher::{Channel, ListenerCallback, ListenerId};
pub(crate) use dispatcher::Dispatcher;
