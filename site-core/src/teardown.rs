//! Idempotent resource release.
//!
//! Observers and listeners must be detached exactly once, however teardown
//! is reached; running a `Teardown` a second time is a no-op, and an unrun
//! guard fires on drop so nothing leaks past the subsystem's lifetime.

pub struct Teardown {
    action: Option<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Teardown {
            action: Some(Box::new(action)),
        }
    }

    /// Runs the release action the first time; later calls do nothing.
    pub fn run(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn runs_the_action_exactly_once() {
        let count = Rc::new(Cell::new(0u32));
        let seen = count.clone();
        let mut teardown = Teardown::new(move || seen.set(seen.get() + 1));

        teardown.run();
        teardown.run();
        assert_eq!(count.get(), 1);

        // Dropping after an explicit run must not fire again.
        drop(teardown);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn fires_on_drop_when_never_run() {
        let count = Rc::new(Cell::new(0u32));
        let seen = count.clone();
        drop(Teardown::new(move || seen.set(seen.get() + 1)));
        assert_eq!(count.get(), 1);
    }
}
