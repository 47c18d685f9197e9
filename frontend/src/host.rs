use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::scroll::{ScrollState, ScrollTracker};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    NoWindow,
    Listener(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NoWindow => write!(f, "no window object available"),
            HostError::Listener(reason) => write!(f, "scroll listener rejected: {}", reason),
        }
    }
}

/// Whatever delivers scroll notifications and can report the current offset.
pub trait ScrollHost {
    type Listener;

    /// Current vertical offset, never negative.
    fn scroll_offset(&self) -> f64;

    fn add_scroll_listener(&self, callback: Box<dyn FnMut()>) -> Result<Self::Listener, HostError>;

    fn remove_scroll_listener(&self, listener: &Self::Listener) -> Result<(), HostError>;
}

pub fn browser_window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

impl ScrollHost for Window {
    type Listener = Closure<dyn FnMut()>;

    fn scroll_offset(&self) -> f64 {
        // Overscroll bounce on touch devices reports negative values
        self.scroll_y().unwrap_or(0.0).max(0.0)
    }

    fn add_scroll_listener(&self, callback: Box<dyn FnMut()>) -> Result<Self::Listener, HostError> {
        let closure = Closure::wrap(callback);
        self.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(|e| HostError::Listener(format!("{:?}", e)))?;
        Ok(closure)
    }

    fn remove_scroll_listener(&self, listener: &Self::Listener) -> Result<(), HostError> {
        self.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|e| HostError::Listener(format!("{:?}", e)))
    }
}

/// A live scroll listener. Dropping it detaches the listener from the host,
/// after which `on_change` is never called again.
pub struct ScrollSubscription<H: ScrollHost> {
    host: H,
    listener: Option<H::Listener>,
    tracker: Rc<RefCell<ScrollTracker>>,
    notify: Rc<dyn Fn()>,
}

impl<H> ScrollSubscription<H>
where
    H: ScrollHost + Clone + 'static,
{
    pub fn acquire<F>(host: H, on_change: F) -> Result<Self, HostError>
    where
        F: Fn(ScrollState) + 'static,
    {
        let tracker = Rc::new(RefCell::new(ScrollTracker::new()));

        let notify: Rc<dyn Fn()> = {
            let host = host.clone();
            let tracker = tracker.clone();
            Rc::new(move || {
                let offset = host.scroll_offset();
                let changed = tracker.borrow_mut().observe(offset);
                if let Some(state) = changed {
                    debug!("Scroll state -> {:?} at offset {}", state, offset);
                    on_change(state);
                }
            })
        };

        let listener = {
            let notify = notify.clone();
            host.add_scroll_listener(Box::new(move || notify()))?
        };

        Ok(Self {
            host,
            listener: Some(listener),
            tracker,
            notify,
        })
    }

    /// Reads the offset once without waiting for a notification.
    pub fn sync(&self) {
        (self.notify)();
    }

    pub fn state(&self) -> ScrollState {
        self.tracker.borrow().state()
    }
}

impl<H: ScrollHost> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        self.tracker.borrow_mut().deactivate();
        if let Some(listener) = self.listener.take() {
            match self.host.remove_scroll_listener(&listener) {
                Ok(()) => debug!("Scroll listener released"),
                Err(e) => warn!("Failed to release scroll listener: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::navbar::nav_modifier;
    use std::cell::Cell;

    type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

    #[derive(Default)]
    struct FakeInner {
        offset: Cell<f64>,
        next_id: Cell<usize>,
        listeners: RefCell<Vec<(usize, Callback)>>,
        unavailable: Cell<bool>,
    }

    #[derive(Clone, Default)]
    struct FakeHost {
        inner: Rc<FakeInner>,
    }

    impl FakeHost {
        fn unavailable() -> Self {
            let host = Self::default();
            host.inner.unavailable.set(true);
            host
        }

        fn listener_count(&self) -> usize {
            self.inner.listeners.borrow().len()
        }

        fn scroll_to(&self, offset: f64) {
            self.inner.offset.set(offset);
            let callbacks: Vec<Callback> = self
                .inner
                .listeners
                .borrow()
                .iter()
                .map(|(_, cb)| cb.clone())
                .collect();
            for cb in callbacks {
                let mut callback = cb.borrow_mut();
                (*callback)();
            }
        }
    }

    impl ScrollHost for FakeHost {
        type Listener = usize;

        fn scroll_offset(&self) -> f64 {
            self.inner.offset.get()
        }

        fn add_scroll_listener(&self, callback: Box<dyn FnMut()>) -> Result<usize, HostError> {
            if self.inner.unavailable.get() {
                return Err(HostError::Listener("scroll events unsupported".to_string()));
            }
            let id = self.inner.next_id.get();
            self.inner.next_id.set(id + 1);
            self.inner
                .listeners
                .borrow_mut()
                .push((id, Rc::new(RefCell::new(callback))));
            Ok(id)
        }

        fn remove_scroll_listener(&self, listener: &usize) -> Result<(), HostError> {
            self.inner.listeners.borrow_mut().retain(|(id, _)| id != listener);
            Ok(())
        }
    }

    fn recording(host: &FakeHost) -> (ScrollSubscription<FakeHost>, Rc<RefCell<Vec<ScrollState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = ScrollSubscription::acquire(host.clone(), move |state| sink.borrow_mut().push(state))
            .expect("fake host accepts listeners");
        (sub, seen)
    }

    #[test]
    fn registers_exactly_one_listener() {
        let host = FakeHost::default();
        let (sub, _) = recording(&host);
        assert_eq!(host.listener_count(), 1);
        assert_eq!(sub.state(), ScrollState::AtTop);
    }

    #[test]
    fn repeated_offsets_notify_once() {
        let host = FakeHost::default();
        let (_sub, seen) = recording(&host);
        host.scroll_to(300.0);
        host.scroll_to(300.0);
        host.scroll_to(310.0);
        assert_eq!(*seen.borrow(), vec![ScrollState::Scrolled]);
    }

    #[test]
    fn dropping_releases_listener_and_silences_updates() {
        let host = FakeHost::default();
        let (sub, seen) = recording(&host);
        host.scroll_to(50.0);
        drop(sub);
        assert_eq!(host.listener_count(), 0);

        host.scroll_to(0.0);
        host.scroll_to(90.0);
        assert_eq!(*seen.borrow(), vec![ScrollState::Scrolled]);
    }

    #[test]
    fn sync_picks_up_restored_offset() {
        let host = FakeHost::default();
        host.inner.offset.set(640.0);
        let (sub, seen) = recording(&host);
        assert_eq!(sub.state(), ScrollState::AtTop);
        sub.sync();
        assert_eq!(sub.state(), ScrollState::Scrolled);
        assert_eq!(*seen.borrow(), vec![ScrollState::Scrolled]);
    }

    #[test]
    fn sync_at_top_is_silent() {
        let host = FakeHost::default();
        let (sub, seen) = recording(&host);
        sub.sync();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unavailable_host_reports_error_without_listeners() {
        let host = FakeHost::unavailable();
        let result = ScrollSubscription::acquire(host.clone(), |_| {});
        assert!(matches!(result, Err(HostError::Listener(_))));
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn host_error_messages() {
        assert_eq!(HostError::NoWindow.to_string(), "no window object available");
        assert_eq!(
            HostError::Listener("denied".into()).to_string(),
            "scroll listener rejected: denied"
        );
    }

    #[test]
    fn navbar_follows_scroll_through_a_session() {
        let host = FakeHost::default();
        let rendered = Rc::new(Cell::new(ScrollState::AtTop));
        let sink = rendered.clone();
        let sub = ScrollSubscription::acquire(host.clone(), move |state| sink.set(state))
            .expect("fake host accepts listeners");

        // Page loads at the top
        sub.sync();
        assert_eq!(nav_modifier(rendered.get()), "site-nav--top");

        host.scroll_to(21.0);
        assert_eq!(nav_modifier(rendered.get()), "site-nav--scrolled");

        host.scroll_to(0.0);
        assert_eq!(nav_modifier(rendered.get()), "site-nav--top");

        host.scroll_to(500.0);
        drop(sub);
        assert_eq!(host.listener_count(), 0);
        host.scroll_to(0.0);
        assert_eq!(rendered.get(), ScrollState::Scrolled);
    }
}
