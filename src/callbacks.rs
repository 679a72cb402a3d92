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
use tracing::trace;

use crate::{
    input::raw, key_action_from_platform, key_from_platform, mouse_button_from_platform, Event, FrameResult, KeyEvent, MouseButton, MouseEvent,
    PlatformEvent, TextInputEvent, Utf8Char, Window,
};

/// Buttons polled to tell moves from drags.
const POLLED_BUTTONS: [MouseButton; 4] = [MouseButton::LEFT, MouseButton::RIGHT, MouseButton::MIDDLE, MouseButton::BUTTON4];

impl Window {
    /// Entry point for raw events of the windowing system: normalizes the event, routes it and
    /// requests a redraw. Refresh events draw; a frame that wants another frame posts a redraw
    /// instead of drawing again right away.
    pub fn handle_platform_event(&mut self, event: PlatformEvent) {
        trace!(window = self.id.raw(), ?event, "platform event");
        match event {
            PlatformEvent::Refresh => {
                if self.on_draw() == FrameResult::Redraw {
                    self.post_redraw();
                }
                return;
            }
            PlatformEvent::Close => {
                self.close();
                return;
            }
            PlatformEvent::Resize | PlatformEvent::Rescale => self.on_resize(),
            PlatformEvent::CursorMoved { x, y } => {
                let buttons = POLLED_BUTTONS.iter().copied().filter(|b| self.native.is_button_pressed(*b)).fold(MouseButton::NONE, |acc, b| acc | b);
                let (ix, iy) = self.to_pixels(x, y);
                let e = if buttons.is_none() { MouseEvent::moved(ix, iy, self.mouse_mods) } else { MouseEvent::drag(ix, iy, self.mouse_mods, buttons) };
                self.on_mouse_event(&e);
            }
            PlatformEvent::MouseButton { button, action, mods } => {
                let (cx, cy) = self.native.cursor_pos();
                let (ix, iy) = self.to_pixels(cx, cy);
                let mods = self.profile.modifiers.translate(mods);
                let button = mouse_button_from_platform(button);
                let e = if action == raw::PRESS { MouseEvent::button_down(ix, iy, mods, button) } else { MouseEvent::button_up(ix, iy, mods, button) };
                self.on_mouse_event(&e);
            }
            PlatformEvent::Scroll { dx, dy } => {
                let (cx, cy) = self.native.cursor_pos();
                let (ix, iy) = self.to_pixels(cx, cy);
                let e = MouseEvent::wheel(ix, iy, self.mouse_mods, dx as f32, dy as f32, self.profile.trackpad_wheel);
                self.on_mouse_event(&e);
            }
            PlatformEvent::Key { key, action, mods: _ } => {
                let (kind, is_repeat) = key_action_from_platform(action);
                self.on_event(&Event::Key(KeyEvent { kind, key: key_from_platform(key), is_repeat }));
            }
            PlatformEvent::Char(code_point) => {
                let c = Utf8Char::from_utf32(code_point);
                self.on_event(&Event::TextInput(TextInputEvent { utf8: c.as_str().to_string() }));
            }
            PlatformEvent::Drop(paths) => {
                for path in paths {
                    self.on_event(&Event::DragDrop(path));
                }
            }
        }
        self.post_redraw();
    }

    /// OS units to framebuffer pixels, rounding up.
    fn to_pixels(&self, x: f64, y: f64) -> (i32, i32) {
        let scaling = self.scaling() as f64;
        ((x * scaling).ceil() as i32, (y * scaling).ceil() as i32)
    }
}
