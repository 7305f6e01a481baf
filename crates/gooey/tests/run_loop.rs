//! End-to-end scenarios through the public API and the headless backend

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gooey::{
    AppConfig, Event, EventKind, Gooey, HeadlessBackend, Key, LayoutKind, LoopState, MessageBoxConfig, PlotData,
    PlotKind, WindowKind,
};

fn headless() -> Gooey<HeadlessBackend> {
    let config = AppConfig::new().with_frame_interval(Duration::ZERO);
    Gooey::with_backend(HeadlessBackend::new(), config).expect("headless init")
}

#[test]
fn test_events_only_touch_their_window() {
    let mut gooey = headless();
    let mut first = gooey.create_window("first", 300, 200, true).unwrap();
    let mut second = gooey.create_window("second", 300, 200, true).unwrap();

    let first_clicks = Rc::new(Cell::new(0));
    let second_clicks = Rc::new(Cell::new(0));
    let sink = Rc::clone(&first_clicks);
    let a = first.add_button(10, 10, 100, 40, "A", move |()| sink.set(sink.get() + 1)).unwrap();
    let sink = Rc::clone(&second_clicks);
    let b = second.add_button(10, 10, 100, 40, "B", move |()| sink.set(sink.get() + 1)).unwrap();

    let second_id = second.id();
    gooey.backend_mut().push_events([
        Event::press(second_id, 20, 20),
        Event::new(second_id, EventKind::WindowClose),
    ]);
    gooey.run(&mut [&mut first, &mut second]);

    assert_eq!(first_clicks.get(), 0);
    assert!(!first.get(a).unwrap().clicked);
    assert_eq!(second_clicks.get(), 1);
    assert!(second.get(b).unwrap().clicked);

    // One initial frame each, plus one for the consumed press
    assert_eq!(gooey.backend().frames(first.id()), 1);
    assert_eq!(gooey.backend().frames(second_id), 2);
}

#[test]
fn test_double_click_toggles_button() {
    let mut gooey = headless();
    let mut window = gooey.create_window("main", 300, 200, true).unwrap();
    let calls = Rc::new(Cell::new(0));
    let sink = Rc::clone(&calls);
    let button = window
        .add_button(50, 50, 100, 40, "Toggle", move |()| sink.set(sink.get() + 1))
        .unwrap();
    let id = window.id();

    gooey.backend_mut().push_event(Event::press(id, 60, 60));
    gooey.pump(&mut [&mut window]);
    assert!(window.get(button).unwrap().clicked);

    gooey.backend_mut().push_event(Event::press(id, 60, 60));
    gooey.pump(&mut [&mut window]);
    assert!(!window.get(button).unwrap().clicked);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_layout_scenario() {
    let mut gooey = headless();
    let mut window = gooey.create_window("form", 500, 500, true).unwrap();
    let layout = window.create_layout(LayoutKind::Vertical, 40, 40, 400, 400).unwrap();
    let label = window.add_label(0, 0, "Username").unwrap();
    let button = window.add_button(0, 0, 120, 40, "Submit", |()| {}).unwrap();
    window.layout_add_child(layout, label).unwrap();
    window.layout_add_child(layout, button).unwrap();
    window.build_layout(layout).unwrap();

    let label = *window.header(label.into()).unwrap();
    let button = *window.header(button.into()).unwrap();
    assert_eq!(label.x, 40 + (400 - label.width) / 2);
    assert_eq!(button.x, 40 + (400 - button.width) / 2);
    assert_eq!(button.y, label.y + label.height + 30);
}

#[test]
fn test_plot_scenario() {
    let mut gooey = headless();
    let mut window = gooey.create_window("chart", 640, 480, true).unwrap();
    let data = PlotData::new(vec![-1.0, 3.0, 4.0, 8.0], vec![4.0, 5.0, -8.0, 12.0], 2.0, 2.0);
    let plot = window.add_plot(PlotKind::Line, data, 0, 0, 640, 480).unwrap();

    let data = window.get(plot).unwrap().data();
    assert_eq!(data.min_x, -3.0);
    assert_eq!(data.len(), 5);
    assert!(data.x.windows(2).all(|w| w[0] <= w[1]));

    gooey.redraw(&mut window);
    assert_eq!(gooey.backend().frames(window.id()), 1);
}

#[test]
fn test_list_drag_through_loop() {
    let mut gooey = headless();
    let mut window = gooey.create_window("list", 400, 300, true).unwrap();
    let selected = Rc::new(Cell::new(None));
    let sink = Rc::clone(&selected);
    let list = window.add_list(0, 0, 300, 200, move |i| sink.set(Some(i))).unwrap();
    for i in 0..20 {
        window.list_add_item(list, format!("Item {i}"), "details").unwrap();
    }
    let id = window.id();

    // total 1000, visible 200: thumb is 40 px tall, drag ratio 5
    gooey.backend_mut().push_events([
        Event::press(id, 295, 10),
        Event::motion(id, 295, 30),
        Event::motion(id, 295, 1000),
        Event::release(id, 295, 1000),
        Event::scroll(id, 100, 100, 100),
        Event::press(id, 100, 25),
        Event::new(id, EventKind::WindowClose),
    ]);
    gooey.run(&mut [&mut window]);

    let list = window.get(list).unwrap();
    assert!(!list.is_dragging());
    assert!(!gooey.backend().is_reset_inhibited());
    // Dragged to the bottom, then wheeled all the way back up
    assert_eq!(list.scroll_offset(), 0);
    assert_eq!(selected.get(), Some(0));
}

#[test]
fn test_list_spacing_cannot_reach_zero() {
    let mut gooey = headless();
    let mut window = gooey.create_window("list", 400, 300, true).unwrap();
    let selected = Rc::new(Cell::new(None));
    let sink = Rc::clone(&selected);
    let list = window.add_list(0, 0, 300, 200, move |i| sink.set(Some(i))).unwrap();
    for i in 0..100 {
        window.list_add_item(list, format!("Item {i}"), "").unwrap();
    }
    window.get_mut(list).unwrap().set_item_spacing(0);
    assert_eq!(window.get(list).unwrap().item_spacing(), 1);

    let id = window.id();
    gooey.backend_mut().push_event(Event::press(id, 50, 50));
    assert_eq!(gooey.pump(&mut [&mut window]), LoopState::Running);
    assert_eq!(selected.get(), Some(50));
}

#[test]
fn test_textbox_and_slider_keys() {
    let mut gooey = headless();
    let mut window = gooey.create_window("input", 400, 300, true).unwrap();
    let text = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&text);
    window
        .add_textbox(10, 10, 200, 30, "name", move |t| *sink.borrow_mut() = t)
        .unwrap();
    let slider = window.add_slider(10, 100, 100, 0, 10, false, |_| {}).unwrap();
    let id = window.id();

    gooey.backend_mut().push_events([
        Event::press(id, 20, 20),
        Event::key(id, Key::Char('o')),
        Event::key(id, Key::Char('k')),
        Event::key(id, Key::Enter),
        Event::motion(id, 10, 102),
        Event::key(id, Key::Right),
        Event::key(id, Key::Right),
        Event::key(id, Key::Left),
        Event::new(id, EventKind::WindowClose),
    ]);
    gooey.run(&mut [&mut window]);

    assert_eq!(*text.borrow(), "ok");
    assert_eq!(window.get(slider).unwrap().value, 1);
}

#[test]
fn test_message_box_dismissal() {
    let mut gooey = headless();
    let mut main = gooey.create_window("main", 400, 300, true).unwrap();
    let dismissed = Rc::new(Cell::new(false));
    let sink = Rc::clone(&dismissed);
    let config = MessageBoxConfig::new("Saved", "All changes were saved");
    let mut message = gooey.create_message_box(&config, move |()| sink.set(true)).unwrap();

    assert_eq!(message.kind(), WindowKind::MessageBox);
    assert!(!message.is_visible());
    gooey.show(&mut message);
    assert!(gooey.backend().window(message.id()).unwrap().visible);

    // OK button of a 300x150 box sits at (110, 100)
    let id = message.id();
    gooey.backend_mut().push_event(Event::press(id, 150, 110));
    assert_eq!(gooey.pump(&mut [&mut main, &mut message]), LoopState::Running);

    assert!(dismissed.get());
    assert!(!message.is_visible());
    assert!(!gooey.backend().window(id).unwrap().visible);
}

#[test]
fn test_menu_through_loop() {
    let mut gooey = headless();
    let mut window = gooey.create_window("menu", 400, 300, true).unwrap();
    let quit = Rc::new(Cell::new(false));
    let sink = Rc::clone(&quit);
    window.set_menu();
    let file = window.menu_add_child("File").unwrap();
    window.menu_add_element(file, "Quit", move |()| sink.set(true)).unwrap();
    let id = window.id();

    gooey.backend_mut().push_events([
        Event::press(id, 10, 10),
        Event::press(id, 10, 30),
        Event::new(id, EventKind::WindowClose),
    ]);
    gooey.run(&mut [&mut window]);

    assert!(quit.get());
    assert!(window.menu().unwrap().children().iter().all(|c| !c.is_open));
}

#[test]
fn test_close_stops_loop_and_cleanup() {
    let mut gooey = headless();
    let mut window = gooey.create_window("main", 100, 100, true).unwrap();
    let id = window.id();
    gooey.backend_mut().push_event(Event::new(id, EventKind::WindowClose));
    gooey.run(&mut [&mut window]);
    assert_eq!(gooey.state(), LoopState::Stopped);

    let backend = gooey.cleanup(vec![window]);
    assert!(backend.window(id).is_none());
}
