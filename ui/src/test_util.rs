//! Helpers for driving components in a headless `VirtualDom` on a paused tokio clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::core::VirtualDom;

/// Lets a test component hand values (usually signals) back to the test body.
pub struct Handle<T>(Rc<RefCell<Option<T>>>);

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Handle<T> {
    pub fn put(&self, value: T) {
        *self.0.borrow_mut() = Some(value);
    }

    pub fn get(&self) -> T {
        self.0.borrow().clone().expect("component has not mounted")
    }
}

/// Polls tasks, runs effects and re-renders until the dom goes quiet.
///
/// Never parks the runtime, so a paused clock only moves through [`advance`].
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..8 {
        tokio::select! {
            biased;
            _ = dom.wait_for_work() => {}
            _ = tokio::task::yield_now() => {}
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Moves the paused clock forward, then lets the dom react.
pub async fn advance(dom: &mut VirtualDom, ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle(dom).await;
}
