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
use std::path::PathBuf;

use crate::{KeyModifier, MouseButton};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Normalized key code. Printable ASCII keys use their (lower-case) ASCII value.
pub struct Key(pub u32);

impl Key {
    /// No key.
    pub const NONE: Self = Self(0);
    /// Backspace.
    pub const BACKSPACE: Self = Self(8);
    /// Tab.
    pub const TAB: Self = Self(9);
    /// Enter/Return.
    pub const ENTER: Self = Self(10);
    /// Escape.
    pub const ESCAPE: Self = Self(27);
    /// Space bar.
    pub const SPACE: Self = Self(32);
    /// Delete.
    pub const DELETE: Self = Self(127);
    /// Left shift.
    pub const LSHIFT: Self = Self(256);
    /// Right shift.
    pub const RSHIFT: Self = Self(257);
    /// Left control.
    pub const LCTRL: Self = Self(258);
    /// Right control.
    pub const RCTRL: Self = Self(259);
    /// Either alt/option key.
    pub const ALT: Self = Self(260);
    /// Either meta/command/super key.
    pub const META: Self = Self(261);
    /// Caps lock.
    pub const CAPSLOCK: Self = Self(262);
    /// Left arrow.
    pub const LEFT: Self = Self(263);
    /// Right arrow.
    pub const RIGHT: Self = Self(264);
    /// Up arrow.
    pub const UP: Self = Self(265);
    /// Down arrow.
    pub const DOWN: Self = Self(266);
    /// Insert.
    pub const INSERT: Self = Self(267);
    /// Home.
    pub const HOME: Self = Self(268);
    /// End.
    pub const END: Self = Self(269);
    /// Page up.
    pub const PAGEUP: Self = Self(270);
    /// Page down.
    pub const PAGEDOWN: Self = Self(271);
    /// A key the translation table does not know.
    pub const UNKNOWN: Self = Self(1000);

    /// Returns the raw code.
    pub fn raw(self) -> u32 { self.0 }

    /// Returns `true` for the shift, control, alt and meta keys.
    pub fn is_modifier(self) -> bool {
        matches!(self, Self::LSHIFT | Self::RSHIFT | Self::LCTRL | Self::RCTRL | Self::ALT | Self::META)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Kind of pointer activity carried by a [`MouseEvent`].
pub enum MouseEventType {
    /// Pointer moved with no button held.
    Move,
    /// A button was pressed.
    ButtonDown,
    /// Pointer moved with at least one button held.
    Drag,
    /// A button was released.
    ButtonUp,
    /// Scroll wheel or trackpad scroll.
    Wheel,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Scroll payload of a wheel event.
pub struct WheelDelta {
    /// Horizontal scroll amount as reported by the platform.
    pub dx: f32,
    /// Vertical scroll amount as reported by the platform.
    pub dy: f32,
    /// The scroll came from a continuous trackpad gesture rather than wheel clicks.
    pub is_trackpad: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Pointer event in framebuffer pixels.
pub struct MouseEvent {
    /// Event kind.
    pub kind: MouseEventType,
    /// Horizontal position in framebuffer pixels.
    pub x: i32,
    /// Vertical position in framebuffer pixels.
    pub y: i32,
    /// Modifier keys active when the event was generated.
    pub modifiers: KeyModifier,
    /// Button(s) involved; held buttons for drags.
    pub button: MouseButton,
    /// Scroll amounts, only meaningful for [`MouseEventType::Wheel`].
    pub wheel: WheelDelta,
}

impl MouseEvent {
    fn with_kind(kind: MouseEventType, x: i32, y: i32, modifiers: KeyModifier, button: MouseButton) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers,
            button,
            wheel: WheelDelta { dx: 0.0, dy: 0.0, is_trackpad: false },
        }
    }

    /// Creates a pointer move event.
    pub fn moved(x: i32, y: i32, modifiers: KeyModifier) -> Self { Self::with_kind(MouseEventType::Move, x, y, modifiers, MouseButton::NONE) }

    /// Creates a drag event with the held buttons.
    pub fn drag(x: i32, y: i32, modifiers: KeyModifier, buttons: MouseButton) -> Self {
        Self::with_kind(MouseEventType::Drag, x, y, modifiers, buttons)
    }

    /// Creates a button press event.
    pub fn button_down(x: i32, y: i32, modifiers: KeyModifier, button: MouseButton) -> Self {
        Self::with_kind(MouseEventType::ButtonDown, x, y, modifiers, button)
    }

    /// Creates a button release event.
    pub fn button_up(x: i32, y: i32, modifiers: KeyModifier, button: MouseButton) -> Self {
        Self::with_kind(MouseEventType::ButtonUp, x, y, modifiers, button)
    }

    /// Creates a scroll event.
    pub fn wheel(x: i32, y: i32, modifiers: KeyModifier, dx: f32, dy: f32, is_trackpad: bool) -> Self {
        let mut e = Self::with_kind(MouseEventType::Wheel, x, y, modifiers, MouseButton::NONE);
        e.wheel = WheelDelta { dx, dy, is_trackpad };
        e
    }

    /// Returns `true` for button press and release events.
    pub fn is_button(&self) -> bool { matches!(self.kind, MouseEventType::ButtonDown | MouseEventType::ButtonUp) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Direction of a key transition.
pub enum KeyEventType {
    /// The key was released.
    Up,
    /// The key was pressed or auto-repeated.
    Down,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Keyboard event in the normalized vocabulary.
pub struct KeyEvent {
    /// Transition direction.
    pub kind: KeyEventType,
    /// Normalized key.
    pub key: Key,
    /// The event was generated by key auto-repeat.
    pub is_repeat: bool,
}

impl KeyEvent {
    /// Creates a key press.
    pub fn down(key: Key) -> Self { Self { kind: KeyEventType::Down, key, is_repeat: false } }

    /// Creates a key release.
    pub fn up(key: Key) -> Self { Self { kind: KeyEventType::Up, key, is_repeat: false } }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// UTF-8 text produced by the keyboard.
pub struct TextInputEvent {
    /// UTF-8 payload.
    pub utf8: String,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Periodic animation tick.
pub struct TickEvent {
    /// Seconds since the previous tick.
    pub dt: f64,
}

#[derive(Clone, Debug, PartialEq)]
/// Any event the window can receive.
pub enum Event {
    /// Pointer activity.
    Mouse(MouseEvent),
    /// Keyboard activity.
    Key(KeyEvent),
    /// Committed text.
    TextInput(TextInputEvent),
    /// Animation tick.
    Tick(TickEvent),
    /// A file was dropped onto the window.
    DragDrop(PathBuf),
}
