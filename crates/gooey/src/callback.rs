//! User callbacks attached to widgets
//!
//! Widgets store their event handlers as boxed closures. A callback is
//! invoked synchronously from the dispatch loop, after the widget's own
//! state has been updated.

/// A user handler receiving one argument of type `A`
pub struct Callback<A> {
    handler: Box<dyn FnMut(A)>,
    description: Option<String>,
}

impl<A> Callback<A> {
    /// Wrap a closure
    pub fn new(handler: impl FnMut(A) + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            description: None,
        }
    }

    /// Attach a description for debugging
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Get the description if set
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Run the handler
    pub fn invoke(&mut self, arg: A) {
        (self.handler)(arg);
    }
}

impl<A> std::fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Invoke an optional callback
pub(crate) fn fire<A>(callback: &mut Option<Callback<A>>, arg: A) {
    if let Some(cb) = callback {
        cb.invoke(arg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_callback_invoke() {
        let total = Rc::new(Cell::new(0));
        let seen = Rc::clone(&total);
        let mut cb = Callback::new(move |n: i32| seen.set(seen.get() + n));

        cb.invoke(2);
        cb.invoke(3);
        assert_eq!(total.get(), 5);
    }

    #[test]
    fn test_callback_description() {
        let cb = Callback::new(|(): ()| {}).with_description("save button");
        assert_eq!(cb.description(), Some("save button"));
        assert!(format!("{cb:?}").contains("save button"));
    }

    #[test]
    fn test_fire_optional() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut present = Some(Callback::new(move |()| counter.set(counter.get() + 1)));
        let mut absent: Option<Callback<()>> = None;

        fire(&mut present, ());
        fire(&mut absent, ());
        assert_eq!(hits.get(), 1);
    }
}
