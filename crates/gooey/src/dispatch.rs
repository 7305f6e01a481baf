//! Per-window event dispatch
//!
//! [`dispatch`] runs one event through a window's handlers in priority order.
//! On presses and releases the first handler that consumes the event ends the
//! chain; key presses and pointer motion feed every interested handler. The
//! caller redraws the window at most once per event.

use crate::backend::Backend;
use crate::event::{Event, EventKind, Key};
use crate::widget::menu::MenuClick;
use crate::widget::{
    self, handle_button_click, handle_button_hover, handle_checkbox_click, handle_dropdown_click, handle_group_click,
    handle_radio_click, handle_slider_drag, handle_slider_key, handle_textbox_click, handle_textbox_key,
};
use crate::window::Window;

/// What the run loop must do after an event was dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing consumed the event
    Ignored,
    /// State changed; redraw the window once
    Redraw,
    /// The window asked to close
    Close,
}

impl Outcome {
    fn redraw_if(consumed: bool) -> Self {
        if consumed {
            Self::Redraw
        } else {
            Self::Ignored
        }
    }
}

/// Route one event to the widgets of `window`
pub fn dispatch(window: &mut Window, backend: &mut dyn Backend, event: &Event) -> Outcome {
    match event.kind {
        EventKind::None | EventKind::KeyRelease { .. } => Outcome::Ignored,
        EventKind::Expose => Outcome::Redraw,
        EventKind::WindowClose => Outcome::Close,
        EventKind::KeyPress { key, .. } => Outcome::redraw_if(key_press(window, key)),
        EventKind::ClickPress { x, y, .. } => click_press(window, backend, event, x, y),
        EventKind::ClickRelease { .. } => {
            let consumed = handle_slider_drag(&mut window.sliders, event)
                || widget::list::handle_thumb_release(&mut window.lists, backend);
            Outcome::redraw_if(consumed)
        }
        EventKind::MouseMove { x, y } => {
            window.track_pointer(backend, x, y);
            let dragged = handle_slider_drag(&mut window.sliders, event);
            let scrolled = widget::list::handle_thumb_drag(&mut window.lists, y);
            let hovered = handle_button_hover(&mut window.buttons, x, y);
            Outcome::redraw_if(dragged | scrolled | hovered)
        }
        EventKind::MouseScroll { x, y, delta } => {
            Outcome::redraw_if(widget::list::handle_scroll(&mut window.lists, x, y, delta))
        }
    }
}

fn key_press(window: &mut Window, key: Key) -> bool {
    let pointer = window.pointer;
    let typed = handle_textbox_key(&mut window.textboxes, key);
    let scrolled = widget::list::handle_key(&mut window.lists, key, pointer);
    let stepped = handle_slider_key(&mut window.sliders, key, pointer);
    typed | scrolled | stepped
}

fn click_press(window: &mut Window, backend: &mut dyn Backend, event: &Event, x: i32, y: i32) -> Outcome {
    window.pointer = (x, y);

    let menu = match window.menu.as_mut() {
        Some(menu) => menu.handle_click(backend, x, y),
        None => MenuClick::Ignored,
    };
    if menu == MenuClick::Hit {
        return Outcome::Redraw;
    }

    let consumed = handle_slider_drag(&mut window.sliders, event)
        || handle_button_click(&mut window.buttons, x, y)
        || handle_group_click(&mut window.radio_groups, x, y)
        || handle_checkbox_click(&mut window.checkboxes, x, y)
        || handle_radio_click(&mut window.radio_buttons, x, y)
        || handle_dropdown_click(&mut window.dropdowns, x, y)
        || handle_textbox_click(&mut window.textboxes, x, y)
        || widget::list::handle_thumb_grab(&mut window.lists, backend, x, y)
        || widget::list::handle_item_click(&mut window.lists, x, y);

    let dismissed = window.settle_dismissal(backend);
    Outcome::redraw_if(consumed || dismissed || menu.changed())
}
