use crate::error::BoxError;

/// Notification channels exposed by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// The whole tree was replaced or torn down.
    Load,
    /// Reserved: in-place mutation announced explicitly by a host layer.
    Update,
}

impl Channel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Update => "update",
        }
    }
}

/// Token identifying a registered listener, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// A listener callback. Failures are logged by the dispatcher and do not
/// affect the remaining listeners.
pub type ListenerCallback = Box<dyn FnMut() -> Result<(), BoxError>>;

struct Listener {
    id: ListenerId,
    callback: ListenerCallback,
    /// Remaining notifications this listener receives; -1 means unlimited.
    count: i64,
}

#[derive(Default)]
struct ChannelState {
    listeners: Vec<Listener>,
    locked: bool,
}

/// Ordered listener lists with per-channel suppression locks.
#[derive(Default)]
pub(crate) struct Dispatcher {
    next_listener: u64,
    load: ChannelState,
    update: ChannelState,
}

impl Dispatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn state_mut(&mut self, channel: Channel) -> &mut ChannelState {
        match channel {
            Channel::Load => &mut self.load,
            Channel::Update => &mut self.update,
        }
    }

    /// Append a listener. `count` is the number of notifications it receives
    /// before being pruned; -1 means unlimited.
    pub(crate) fn add(&mut self, channel: Channel, callback: ListenerCallback, count: i64) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.state_mut(channel).listeners.push(Listener { id, callback, count });
        id
    }

    /// Remove the listener registered under `id`. Returns false when it is
    /// not (or no longer) on the channel.
    pub(crate) fn remove(&mut self, channel: Channel, id: ListenerId) -> bool {
        let listeners = &mut self.state_mut(channel).listeners;
        match listeners.iter().position(|listener| listener.id == id) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn lock(&mut self, channel: Channel) {
        self.state_mut(channel).locked = true;
    }

    pub(crate) fn unlock(&mut self, channel: Channel) {
        self.state_mut(channel).locked = false;
    }

    /// Notify every listener on `channel` in registration order.
    ///
    /// A locked channel drops the notification silently. Callback failures
    /// are logged and do not abort the pass. Expired listeners are pruned in
    /// a separate pass after the full notification, so a listener inserted
    /// with count 0 still fires once before removal.
    pub(crate) fn fire(&mut self, channel: Channel) {
        let name = channel.as_str();
        let state = self.state_mut(channel);
        if state.locked {
            return;
        }
        // Index iteration: the list is not changed during the pass.
        for i in 0..state.listeners.len() {
            let listener = &mut state.listeners[i];
            if let Err(e) = (listener.callback)() {
                tracing::error!(error = %e, channel = name, "event listener failed");
            }
            if listener.count > 0 {
                listener.count -= 1;
            }
        }
        state.listeners.retain(|listener| listener.count != 0);
    }
}
