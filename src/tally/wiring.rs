use std::{cell::RefCell, rc::Rc};

use crate::{counter::Counter, shared::add, surface::{Clickable, Surface}};

/// Makes every click on `button` advance `counter` by one.
///
/// Returns `None` and attaches nothing if there is no button.
pub fn wire_counter<B, S>(button: Option<&B>, counter: &Rc<RefCell<Counter<S>>>) -> Option<B::Listener>
where
    B: Clickable,
    S: Surface + 'static,
{
    let button = button?;
    let counter = counter.clone();
    Some(button.on_click(move || {
        let mut counter = counter.borrow_mut();
        let next = add(counter.count());
        counter.set_counter(next);
    }))
}
