//! Process-wide reaction to `401 Unauthorized`.
//!
//! A rejected token means the server has already ended the session, so
//! the app registers a handler that clears the store and replaces history
//! with the sign-in route. Content screens never see this; they only get
//! the error back from their call.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static UNAUTHORIZED_HANDLER: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Keeps the handler installed until dropped
#[must_use = "the handler is removed as soon as the registration is dropped"]
pub struct HandlerRegistration {
    handler: Rc<dyn Fn()>,
}

impl Drop for HandlerRegistration {
    fn drop(&mut self) {
        UNAUTHORIZED_HANDLER.with(|slot| {
            let mut slot = slot.borrow_mut();
            // A newer registration may already have replaced ours
            if slot
                .as_ref()
                .is_some_and(|current| Rc::ptr_eq(current, &self.handler))
            {
                *slot = None;
            }
        });
    }
}

/// Install the handler, replacing any previous one
pub fn on_unauthorized(handler: impl Fn() + 'static) -> HandlerRegistration {
    let handler: Rc<dyn Fn()> = Rc::new(handler);
    UNAUTHORIZED_HANDLER.with(|slot| {
        *slot.borrow_mut() = Some(handler.clone());
    });
    HandlerRegistration { handler }
}

/// Run the installed handler, if any
pub fn notify_unauthorized() {
    // Clone out of the slot so the handler may itself re-register
    let handler = UNAUTHORIZED_HANDLER.with(|slot| slot.borrow().clone());
    if let Some(handler) = handler {
        handler();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn handler_runs_while_registered() {
        let calls = Rc::new(Cell::new(0));
        let registration = {
            let calls = calls.clone();
            on_unauthorized(move || calls.set(calls.get() + 1))
        };

        notify_unauthorized();
        notify_unauthorized();
        assert_eq!(calls.get(), 2);

        drop(registration);
        notify_unauthorized();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn dropping_a_stale_registration_keeps_the_newer_one() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let stale = {
            let first = first.clone();
            on_unauthorized(move || first.set(first.get() + 1))
        };
        let _current = {
            let second = second.clone();
            on_unauthorized(move || second.set(second.get() + 1))
        };
        drop(stale);

        notify_unauthorized();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }
}
