//! # Thread Utilities
//!
//! The pager is driven from a single event thread. It remembers which thread
//! that is so redraw requests can take the cheap local path when they
//! originate there and the cross-thread path otherwise.

use std::thread::{self, ThreadId};

/// Records the thread that owns a pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreadAffinity {
    owner: ThreadId,
}

impl ThreadAffinity {
    /// Binds to the calling thread.
    pub fn current() -> Self {
        Self {
            owner: thread::current().id(),
        }
    }

    /// Returns whether the calling thread is the owner.
    pub fn is_owner(&self) -> bool {
        thread::current().id() == self.owner
    }
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_creating_thread_owns() {
        let affinity = ThreadAffinity::current();
        assert!(affinity.is_owner());
        let elsewhere = thread::spawn(move || affinity.is_owner())
            .join()
            .expect("owner check thread panicked");
        assert!(!elsewhere);
    }
}
