//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::path::Path;

use crate::window::LayoutState;
use crate::{vec2, DrawResult, Event, EventResult, KeyEvent, KeyEventType, MouseEvent, MouseEventType, TickEvent, WheelDelta, WidgetRef, Window};

/// Trackpads report many small deltas per gesture; each one counts for a quarter of a wheel click.
const TRACKPAD_WHEEL_FACTOR: f32 = 0.25;

/// Converts a platform scroll amount to UI wheel units: one unit per event and direction.
pub fn wheel_units(wheel: &WheelDelta) -> (f32, f32) {
    let sign = |v: f32| if v == 0.0 { 0.0 } else { v.signum() };
    let factor = if wheel.is_trackpad { TRACKPAD_WHEEL_FACTOR } else { 1.0 };
    (sign(wheel.dx) * factor, sign(wheel.dy) * factor)
}

impl Window {
    /// Dispatches any window event to its handler. Returns `true` only for a tick that needs a
    /// redraw.
    pub fn on_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(e) => self.on_mouse_event(e),
            Event::Key(e) => self.on_key_event(e),
            Event::TextInput(t) => self.on_text_input(&t.utf8),
            Event::Tick(e) => return self.on_tick_event(e),
            Event::DragDrop(path) => self.on_drag_dropped(path),
        }
        false
    }

    /// Routes a pointer event: to the grabbing widget, else to the dialog, else to the topmost
    /// child under the pointer.
    pub fn on_mouse_event(&mut self, e: &MouseEvent) {
        let _guard = self.activate_context();

        // moving the pointer is the best available sign that a resize ended
        if self.is_resizing {
            self.end_resize_streak();
        }

        self.mouse_mods = e.modifiers;
        if e.kind == MouseEventType::Wheel {
            let (dx, dy) = wheel_units(&e.wheel);
            self.ui.input().scroll(dx, dy);
        }

        if let Some(grabber) = self.mouse_grabber {
            match self.widget_mut(grabber) {
                Some(widget) => {
                    widget.mouse(e);
                    if e.kind == MouseEventType::ButtonUp {
                        self.mouse_grabber = None;
                    }
                    return;
                }
                None => self.mouse_grabber = None,
            }
        }

        if e.is_button() && self.is_over_ui_popup(e.x, e.y) {
            return;
        }

        if self.dialog.is_some() {
            self.deliver_mouse(WidgetRef::Dialog, e);
            return;
        }

        // without a grabber a drag started over something that is not a widget
        if e.kind == MouseEventType::Drag {
            return;
        }
        if let Some(id) = self.tree.hit_test(e.x, e.y) {
            self.deliver_mouse(WidgetRef::Child(id), e);
        }
    }

    /// Popups of the UI library (menus, color pickers) are not widgets; clicks on them belong to
    /// the UI library.
    fn is_over_ui_popup(&self, x: i32, y: i32) -> bool {
        self.ui.popup_frames().iter().any(|popup| popup.contains(&vec2(x, y)) && !self.tree.has_frame(popup))
    }

    fn deliver_mouse(&mut self, target: WidgetRef, e: &MouseEvent) -> bool {
        let hit = match self.widget_mut(target) {
            Some(widget) => widget.is_visible() && widget.frame().contains(&vec2(e.x, e.y)),
            None => false,
        };
        if !hit {
            return false;
        }
        if e.kind == MouseEventType::ButtonDown {
            self.focus = Some(target);
        }
        let result = match self.widget_mut(target) {
            Some(widget) => widget.mouse(e),
            None => EventResult::Ignored,
        };
        match e.kind {
            MouseEventType::ButtonDown if result == EventResult::Consumed => self.mouse_grabber = Some(target),
            MouseEventType::ButtonUp => self.mouse_grabber = None,
            _ => {}
        }
        true
    }

    /// Updates the modifier state and the UI key state, then hands the key to the focused widget
    /// unless a UI library widget is taking keystrokes.
    pub fn on_key_event(&mut self, e: &KeyEvent) {
        if e.key.is_modifier() {
            let modifier = self.profile.modifiers.modifier_for_key(e.key);
            match e.kind {
                KeyEventType::Up => self.mouse_mods.remove(modifier),
                KeyEventType::Down => self.mouse_mods.insert(modifier),
            }
        }

        let _guard = self.activate_context();
        self.ui.input().set_key(e.key, e.kind == KeyEventType::Down);
        if self.ui.active_id().is_some() {
            return;
        }
        if let Some(focus) = self.focus {
            match self.widget_mut(focus) {
                Some(widget) => {
                    widget.key(e);
                }
                None => self.focus = None,
            }
        }
    }

    /// Appends text to the UI library's input buffer.
    pub fn on_text_input(&mut self, utf8: &str) {
        let _guard = self.activate_context();
        self.ui.input().add_text(utf8);
    }

    /// Advances every top-level widget; returns `true` if one of them needs a redraw.
    pub fn on_tick_event(&mut self, e: &TickEvent) -> bool {
        let _guard = self.activate_context();
        let mut result = DrawResult::None;
        for (_, child) in self.tree.iter_mut() {
            result = result.combine(child.tick(e));
        }
        if result == DrawResult::Relayout {
            self.layout_state = LayoutState::NeedsLayout;
        }
        result != DrawResult::None
    }

    /// Handles a file dropped onto the window.
    pub fn on_drag_dropped(&mut self, path: &Path) { self.drag_dropped(path); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use crate::{rect, size, vec2, Application, Dialog, Event, Id, Key, KeyModifier, MouseButton, Platform, PlatformProfile, RenderQuality, WindowConfig};
    use std::{cell::RefCell, rc::Rc};

    fn down(x: i32, y: i32) -> MouseEvent { MouseEvent::button_down(x, y, KeyModifier::NONE, MouseButton::LEFT) }
    fn up(x: i32, y: i32) -> MouseEvent { MouseEvent::button_up(x, y, KeyModifier::NONE, MouseButton::LEFT) }
    fn drag(x: i32, y: i32) -> MouseEvent { MouseEvent::drag(x, y, KeyModifier::NONE, MouseButton::LEFT) }

    fn two_children(h: &mut Harness, log: &Log) -> (crate::WidgetId, crate::WidgetId) {
        let a = h.window.add_child(Recorder::new("a", log).with_frame(rect(0, 0, 100, 100)).boxed());
        let b = h.window.add_child(Recorder::new("b", log).with_frame(rect(200, 0, 100, 100)).boxed());
        h.window.layout_state = LayoutState::LaidOut;
        (a, b)
    }

    #[test]
    fn wheel_units_are_sign_normalized() {
        let wheel = |dx, dy, is_trackpad| WheelDelta { dx, dy, is_trackpad };
        assert_eq!(wheel_units(&wheel(3.0, -7.5, false)), (1.0, -1.0));
        assert_eq!(wheel_units(&wheel(0.0, 2.0, true)), (0.0, 0.25));
        assert_eq!(wheel_units(&wheel(-0.1, 0.0, true)), (-0.25, 0.0));
    }

    #[test]
    fn trackpad_wheel_accumulates_quarter_units() {
        let mut h = Harness::new();
        h.window.on_mouse_event(&MouseEvent::wheel(5, 5, KeyModifier::NONE, 0.0, 3.0, true));
        h.window.on_mouse_event(&MouseEvent::wheel(5, 5, KeyModifier::NONE, 0.0, 3.0, true));
        assert_eq!(h.window.ui().input().mouse_wheel, 0.5);
        h.window.on_mouse_event(&MouseEvent::wheel(5, 5, KeyModifier::NONE, -2.0, 0.0, false));
        assert_eq!(h.window.ui().input().mouse_wheel_h, -1.0);
    }

    #[test]
    fn button_down_focuses_and_grabs() {
        let mut h = Harness::new();
        let log = Log::default();
        let (_, b) = two_children(&mut h, &log);
        h.window.on_mouse_event(&down(250, 50));
        assert_eq!(h.window.focus_widget(), Some(WidgetRef::Child(b)));
        assert_eq!(h.window.mouse_grabber(), Some(WidgetRef::Child(b)));

        // drags and releases go to the grabber wherever the pointer is
        h.window.on_mouse_event(&drag(50, 50));
        h.window.on_mouse_event(&up(50, 50));
        assert_eq!(h.window.mouse_grabber(), None);
        assert_eq!(log.entries(), vec!["b:mouse:ButtonDown", "b:mouse:Drag", "b:mouse:ButtonUp"]);
    }

    #[test]
    fn ignored_button_down_does_not_grab() {
        let mut h = Harness::new();
        let log = Log::default();
        let a = h.window.add_child(Recorder::new("a", &log).with_frame(rect(0, 0, 100, 100)).ignoring_mouse().boxed());
        h.window.on_mouse_event(&down(10, 10));
        assert_eq!(h.window.focus_widget(), Some(WidgetRef::Child(a)));
        assert_eq!(h.window.mouse_grabber(), None);
    }

    #[test]
    fn drag_without_grabber_is_dropped() {
        let mut h = Harness::new();
        let log = Log::default();
        two_children(&mut h, &log);
        h.window.on_mouse_event(&drag(10, 10));
        h.window.on_mouse_event(&MouseEvent::moved(10, 10, KeyModifier::NONE));
        assert_eq!(log.entries(), vec!["a:mouse:Move"]);
    }

    #[test]
    fn topmost_child_wins() {
        let mut h = Harness::new();
        let log = Log::default();
        h.window.add_child(Recorder::new("bottom", &log).with_frame(rect(0, 0, 100, 100)).boxed());
        h.window.add_child(Recorder::new("top", &log).with_frame(rect(50, 50, 100, 100)).ignoring_mouse().boxed());
        h.window.on_mouse_event(&MouseEvent::moved(60, 60, KeyModifier::NONE));
        assert_eq!(log.entries(), vec!["top:mouse:Move"]);
    }

    #[test]
    fn clicks_on_ui_popups_are_eaten() {
        let mut h = Harness::new();
        let log = Log::default();
        two_children(&mut h, &log);
        h.ui.popups.borrow_mut().push(rect(0, 0, 50, 50));
        h.window.on_mouse_event(&down(10, 10));
        h.window.on_mouse_event(&MouseEvent::moved(10, 10, KeyModifier::NONE));
        assert_eq!(log.entries(), vec!["a:mouse:Move"]);
        assert_eq!(h.window.focus_widget(), None);
    }

    #[test]
    fn popups_matching_a_child_do_not_eat() {
        let mut h = Harness::new();
        let log = Log::default();
        two_children(&mut h, &log);
        h.ui.popups.borrow_mut().push(rect(0, 0, 100, 100));
        h.window.on_mouse_event(&down(10, 10));
        assert_eq!(log.entries(), vec!["a:mouse:ButtonDown"]);
    }

    #[test]
    fn dialog_receives_input_exclusively() {
        let mut h = Harness::new();
        let log = Log::default();
        two_children(&mut h, &log);
        let mut dialog = Dialog::new("modal");
        dialog.add_child(Recorder::new("body", &log).with_preferred(size(100, 100)).boxed());
        h.window.show_dialog(dialog);
        log.take();
        // dialog is centered at (350, 250, 100, 100)
        h.window.on_mouse_event(&down(10, 10));
        assert!(log.entries().is_empty());
        assert_eq!(h.window.focus_widget(), None);

        h.window.on_mouse_event(&down(360, 260));
        assert_eq!(h.window.focus_widget(), Some(WidgetRef::Dialog));
        assert_eq!(h.window.mouse_grabber(), Some(WidgetRef::Dialog));
        assert_eq!(log.entries(), vec!["body:mouse:ButtonDown"]);
        h.window.close_dialog();
        assert_eq!(h.window.focus_widget(), None);
        assert_eq!(h.window.mouse_grabber(), None);
    }

    #[test]
    fn removed_grabber_is_released() {
        let mut h = Harness::new();
        let log = Log::default();
        let (a, _) = two_children(&mut h, &log);
        let gone = h.window.add_child(Recorder::new("gone", &log).boxed());
        h.window.remove_child(gone);
        h.window.mouse_grabber = Some(WidgetRef::Child(gone));
        h.window.on_mouse_event(&MouseEvent::moved(10, 10, KeyModifier::NONE));
        assert_eq!(h.window.mouse_grabber(), None);
        assert_eq!(log.entries(), vec!["a:mouse:Move"]);
        assert!(h.window.children().contains(a));
    }

    #[test]
    fn mouse_event_ends_resize_streak() {
        let mut h = Harness::new();
        let scene = SceneRecorder::new();
        h.window.add_child(scene.boxed());
        h.window.on_resize();
        assert_eq!(scene.quality(), RenderQuality::Fast);
        h.window.on_mouse_event(&MouseEvent::moved(1, 1, KeyModifier::NONE));
        assert!(!h.window.is_resizing());
        assert_eq!(scene.quality(), RenderQuality::Best);
    }

    #[test]
    fn keys_go_to_focus_unless_ui_is_active() {
        let mut h = Harness::new();
        let log = Log::default();
        let (a, _) = two_children(&mut h, &log);
        h.window.set_focus_widget(Some(WidgetRef::Child(a)));
        h.window.on_key_event(&KeyEvent::down(Key(97)));
        assert!(h.window.ui().input().is_key_down(Key(97)));
        h.ui.active_id.set(Some(Id::new(5)));
        h.window.on_key_event(&KeyEvent::up(Key(97)));
        assert!(!h.window.ui().input().is_key_down(Key(97)));
        assert_eq!(log.entries(), vec!["a:key:Down:97"]);
    }

    #[test]
    fn modifier_keys_update_accumulator() {
        let mut h = Harness::new();
        h.window.on_key_event(&KeyEvent::down(Key::LSHIFT));
        h.window.on_key_event(&KeyEvent::down(Key::LCTRL));
        assert_eq!(h.window.key_modifiers(), KeyModifier::SHIFT | KeyModifier::CTRL);
        h.window.on_key_event(&KeyEvent::up(Key::LSHIFT));
        assert_eq!(h.window.key_modifiers(), KeyModifier::CTRL);
    }

    #[test]
    fn modifier_keys_follow_platform_mapping() {
        let config = WindowConfig::new("mac").with_position(vec2(0, 0)).with_size(size(100, 100));
        let mut h = Harness::with_profile(config, 1.0, PlatformProfile::for_platform(Platform::MacOs), Rc::new(Application::default()));
        h.window.on_key_event(&KeyEvent::down(Key::META));
        assert_eq!(h.window.key_modifiers(), KeyModifier::CTRL);
        h.window.on_key_event(&KeyEvent::down(Key::LCTRL));
        assert_eq!(h.window.key_modifiers(), KeyModifier::CTRL | KeyModifier::ALT);
    }

    #[test]
    fn tick_reaches_children_only() {
        let mut h = Harness::new();
        let log = Log::default();
        h.window.add_child(Recorder::new("a", &log).boxed());
        h.window.add_child(Recorder::new("b", &log).with_tick_result(DrawResult::Redraw).boxed());
        h.window.show_dialog(Dialog::new("d"));
        assert!(h.window.on_tick_event(&TickEvent { dt: 0.016 }));
        assert_eq!(log.entries(), vec!["a:tick", "b:tick"]);
    }

    #[test]
    fn idle_tick_needs_no_redraw() {
        let mut h = Harness::new();
        let log = Log::default();
        h.window.add_child(Recorder::new("a", &log).boxed());
        assert!(!h.window.on_tick_event(&TickEvent { dt: 0.016 }));
    }

    #[test]
    fn text_input_is_buffered() {
        let mut h = Harness::new();
        h.window.on_text_input("é");
        h.window.on_text_input("x");
        assert_eq!(h.window.ui().input().text_input(), "éx");
    }

    #[test]
    fn dropped_files_reach_hook() {
        let mut h = Harness::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        h.window.set_on_drag_dropped(move |_, path| sink.borrow_mut().push(path.to_path_buf()));
        h.window.on_drag_dropped(Path::new("/tmp/cloud.ply"));
        assert_eq!(*seen.borrow(), vec![std::path::PathBuf::from("/tmp/cloud.ply")]);
    }

    #[test]
    fn events_dispatch_to_their_handlers() {
        let mut h = Harness::new();
        let log = Log::default();
        let (a, _) = two_children(&mut h, &log);
        let dropped = Rc::new(RefCell::new(Vec::new()));
        let sink = dropped.clone();
        h.window.set_on_drag_dropped(move |_, path| sink.borrow_mut().push(path.to_path_buf()));

        assert!(!h.window.on_event(&Event::Mouse(down(10, 10))));
        assert_eq!(h.window.focus_widget(), Some(WidgetRef::Child(a)));
        assert!(!h.window.on_event(&Event::Mouse(up(10, 10))));
        assert!(!h.window.on_event(&Event::Key(KeyEvent::down(Key(98)))));
        assert!(!h.window.on_event(&Event::TextInput(crate::TextInputEvent { utf8: "b".to_string() })));
        assert!(!h.window.on_event(&Event::Tick(TickEvent { dt: 0.016 })));
        assert!(!h.window.on_event(&Event::DragDrop(std::path::PathBuf::from("scan.pcd"))));

        assert_eq!(log.entries(), vec!["a:mouse:ButtonDown", "a:mouse:ButtonUp", "a:key:Down:98", "a:tick", "b:tick"]);
        assert!(h.window.ui().input().is_key_down(Key(98)));
        assert_eq!(h.window.ui().input().text_input(), "b");
        assert_eq!(*dropped.borrow(), vec![std::path::PathBuf::from("scan.pcd")]);
    }

    #[test]
    fn tick_event_reports_redraw() {
        let mut h = Harness::new();
        let log = Log::default();
        h.window.add_child(Recorder::new("a", &log).with_tick_result(DrawResult::Relayout).boxed());
        h.window.layout_state = LayoutState::LaidOut;
        assert!(h.window.on_event(&Event::Tick(TickEvent { dt: 0.016 })));
        assert!(h.window.needs_layout());
    }

    #[test]
    fn plain_keys_leave_modifiers_alone() {
        let mut h = Harness::new();
        h.window.on_key_event(&KeyEvent::down(Key::LSHIFT));
        h.window.on_key_event(&KeyEvent::down(Key(97)));
        h.window.on_key_event(&KeyEvent::up(Key(97)));
        assert_eq!(h.window.key_modifiers(), KeyModifier::SHIFT);
    }
}
