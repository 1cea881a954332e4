use std::cell::Cell;
use std::rc::Rc;

/// Whatever actually stops the page from scrolling.
pub trait ScrollHost {
    fn disable_scroll(&self);
    fn restore_scroll(&self);
}

/// Sets `overflow: hidden` on `<body>` like any other overlay would.
pub struct BodyOverflow;

impl ScrollHost for BodyOverflow {
    fn disable_scroll(&self) {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn restore_scroll(&self) {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.style().remove_property("overflow");
        }
    }
}

struct Shared {
    holders: Cell<usize>,
    host: Box<dyn ScrollHost>,
}

/// Reference-counted page scroll lock. The first guard disables scrolling
/// and the last one dropped restores it, so two overlays can't race.
#[derive(Clone)]
pub struct ScrollLock {
    shared: Rc<Shared>,
}

#[must_use = "scrolling is restored as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    shared: Rc<Shared>,
}

impl ScrollLock {
    pub fn new(host: impl ScrollHost + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                holders: Cell::new(0),
                host: Box::new(host),
            }),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.shared.holders.get();
        if holders == 0 {
            self.shared.host.disable_scroll();
        }
        self.shared.holders.set(holders + 1);
        ScrollLockGuard {
            shared: self.shared.clone(),
        }
    }

    pub fn is_held(&self) -> bool {
        self.shared.holders.get() > 0
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.shared.holders.get().saturating_sub(1);
        self.shared.holders.set(holders);
        if holders == 0 {
            self.shared.host.restore_scroll();
        }
    }
}

thread_local! {
    static PAGE_LOCK: ScrollLock = ScrollLock::new(BodyOverflow);
}

/// The lock every overlay on the page shares.
pub fn page_scroll_lock() -> ScrollLock {
    PAGE_LOCK.with(|lock| lock.clone())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Counts calls instead of touching a document.
    #[derive(Clone, Default)]
    pub struct CountingHost {
        pub disabled: Rc<Cell<usize>>,
        pub restored: Rc<Cell<usize>>,
    }

    impl CountingHost {
        pub fn balanced(&self) -> bool {
            self.disabled.get() == self.restored.get()
        }
    }

    impl ScrollHost for CountingHost {
        fn disable_scroll(&self) {
            self.disabled.set(self.disabled.get() + 1);
        }

        fn restore_scroll(&self) {
            self.restored.set(self.restored.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CountingHost;
    use super::*;

    #[test]
    fn guard_drop_restores_scroll() {
        let host = CountingHost::default();
        let lock = ScrollLock::new(host.clone());
        {
            let _guard = lock.acquire();
            assert!(lock.is_held());
            assert_eq!(host.disabled.get(), 1);
        }
        assert!(!lock.is_held());
        assert_eq!(host.restored.get(), 1);
    }

    #[test]
    fn nested_guards_touch_the_page_once() {
        let host = CountingHost::default();
        let lock = ScrollLock::new(host.clone());
        let first = lock.acquire();
        let second = lock.clone().acquire();
        assert_eq!(host.disabled.get(), 1);
        drop(first);
        assert!(lock.is_held());
        assert_eq!(host.restored.get(), 0);
        drop(second);
        assert_eq!(host.disabled.get(), 1);
        assert_eq!(host.restored.get(), 1);
    }
}
