use crate::app::state::MountId;
use tokio::task::AbortHandle;
use tracing::debug;

/// Lifetime of one page mount: the requests it started die with it.
#[derive(Debug, Default)]
pub struct PageScope {
    pub mount: MountId,
    tasks: Vec<AbortHandle>,
}

impl PageScope {
    #[must_use]
    pub fn new(mount: MountId) -> Self {
        Self {
            mount,
            tasks: Vec::new(),
        }
    }

    pub fn track(&mut self, handles: impl IntoIterator<Item = AbortHandle>) {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.extend(handles);
    }

    /// Ends this scope if the state has moved on to another mount.
    pub fn follow(&mut self, mount: MountId) {
        if mount != self.mount {
            self.abort();
            *self = Self::new(mount);
        }
    }

    pub fn abort(&mut self) {
        let pending = self.tasks.iter().filter(|t| !t.is_finished()).count();
        if pending > 0 {
            debug!(mount = self.mount.0, pending, "aborting page requests");
        }
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_finished()).count()
    }
}
