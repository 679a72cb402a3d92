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
use crate::{Key, KeyEventType, KeyModifier, MouseButton};

/// Raw codes delivered by the native layer (GLFW numbering).
pub mod raw {
    /// Left mouse button.
    pub const MOUSE_BUTTON_LEFT: i32 = 0;
    /// Right mouse button.
    pub const MOUSE_BUTTON_RIGHT: i32 = 1;
    /// Middle mouse button.
    pub const MOUSE_BUTTON_MIDDLE: i32 = 2;
    /// Fourth mouse button.
    pub const MOUSE_BUTTON_4: i32 = 3;
    /// Fifth mouse button.
    pub const MOUSE_BUTTON_5: i32 = 4;

    /// Shift modifier bit.
    pub const MOD_SHIFT: i32 = 0x0001;
    /// Physical control modifier bit.
    pub const MOD_CONTROL: i32 = 0x0002;
    /// Physical alt/option modifier bit.
    pub const MOD_ALT: i32 = 0x0004;
    /// Physical super/command/windows modifier bit.
    pub const MOD_SUPER: i32 = 0x0008;

    /// Key or button released.
    pub const RELEASE: i32 = 0;
    /// Key or button pressed.
    pub const PRESS: i32 = 1;
    /// Key auto-repeat.
    pub const REPEAT: i32 = 2;

    /// Key the platform could not identify.
    pub const KEY_UNKNOWN: i32 = -1;
    /// `A`; letters arrive upper-case.
    pub const KEY_A: i32 = 65;
    /// `Z`.
    pub const KEY_Z: i32 = 90;
    /// Escape.
    pub const KEY_ESCAPE: i32 = 256;
    /// Enter.
    pub const KEY_ENTER: i32 = 257;
    /// Tab.
    pub const KEY_TAB: i32 = 258;
    /// Backspace.
    pub const KEY_BACKSPACE: i32 = 259;
    /// Insert.
    pub const KEY_INSERT: i32 = 260;
    /// Delete.
    pub const KEY_DELETE: i32 = 261;
    /// Right arrow.
    pub const KEY_RIGHT: i32 = 262;
    /// Left arrow.
    pub const KEY_LEFT: i32 = 263;
    /// Down arrow.
    pub const KEY_DOWN: i32 = 264;
    /// Up arrow.
    pub const KEY_UP: i32 = 265;
    /// Page up.
    pub const KEY_PAGE_UP: i32 = 266;
    /// Page down.
    pub const KEY_PAGE_DOWN: i32 = 267;
    /// Home.
    pub const KEY_HOME: i32 = 268;
    /// End.
    pub const KEY_END: i32 = 269;
    /// Caps lock.
    pub const KEY_CAPS_LOCK: i32 = 280;
    /// Left shift.
    pub const KEY_LEFT_SHIFT: i32 = 340;
    /// Left control.
    pub const KEY_LEFT_CONTROL: i32 = 341;
    /// Left alt.
    pub const KEY_LEFT_ALT: i32 = 342;
    /// Left super.
    pub const KEY_LEFT_SUPER: i32 = 343;
    /// Right shift.
    pub const KEY_RIGHT_SHIFT: i32 = 344;
    /// Right control.
    pub const KEY_RIGHT_CONTROL: i32 = 345;
    /// Right alt.
    pub const KEY_RIGHT_ALT: i32 = 346;
    /// Right super.
    pub const KEY_RIGHT_SUPER: i32 = 347;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Table mapping each physical modifier key to the normalized modifier it produces.
pub struct ModifierMapping {
    /// Result of the shift key.
    pub shift: KeyModifier,
    /// Result of the physical control key.
    pub control: KeyModifier,
    /// Result of the alt/option key.
    pub alt: KeyModifier,
    /// Result of the super/command/windows key.
    pub super_key: KeyModifier,
}

impl ModifierMapping {
    /// Physical keys map to the modifier of the same name.
    pub const IDENTITY: Self = Self {
        shift: KeyModifier::SHIFT,
        control: KeyModifier::CTRL,
        alt: KeyModifier::ALT,
        super_key: KeyModifier::META,
    };

    /// Command acts as control, control as alt and option as meta, so shortcuts
    /// land on the same fingers as on other platforms.
    pub const COMMAND_AS_CONTROL: Self = Self {
        shift: KeyModifier::SHIFT,
        control: KeyModifier::ALT,
        alt: KeyModifier::META,
        super_key: KeyModifier::CTRL,
    };

    /// Translates a raw modifier bitmask.
    pub fn translate(&self, raw_mods: i32) -> KeyModifier {
        let mut mods = KeyModifier::NONE;
        if raw_mods & raw::MOD_SHIFT != 0 {
            mods |= self.shift;
        }
        if raw_mods & raw::MOD_CONTROL != 0 {
            mods |= self.control;
        }
        if raw_mods & raw::MOD_ALT != 0 {
            mods |= self.alt;
        }
        if raw_mods & raw::MOD_SUPER != 0 {
            mods |= self.super_key;
        }
        mods
    }

    /// Returns the modifier bit a modifier key contributes, or `NONE` for other keys.
    pub fn modifier_for_key(&self, key: Key) -> KeyModifier {
        match key {
            Key::LSHIFT | Key::RSHIFT => self.shift,
            Key::LCTRL | Key::RCTRL => self.control,
            Key::ALT => self.alt,
            Key::META => self.super_key,
            _ => KeyModifier::NONE,
        }
    }
}

impl Default for ModifierMapping {
    fn default() -> Self { Self::IDENTITY }
}

/// Maps a raw mouse button code; unknown buttons map to [`MouseButton::NONE`].
pub fn mouse_button_from_platform(button: i32) -> MouseButton {
    match button {
        raw::MOUSE_BUTTON_LEFT => MouseButton::LEFT,
        raw::MOUSE_BUTTON_RIGHT => MouseButton::RIGHT,
        raw::MOUSE_BUTTON_MIDDLE => MouseButton::MIDDLE,
        raw::MOUSE_BUTTON_4 => MouseButton::BUTTON4,
        raw::MOUSE_BUTTON_5 => MouseButton::BUTTON5,
        _ => MouseButton::NONE,
    }
}

/// Maps a raw key code. Letters are lower-cased, named keys go through the table and
/// anything else keeps its code.
pub fn key_from_platform(key: i32) -> Key {
    if (raw::KEY_A..=raw::KEY_Z).contains(&key) {
        return Key(key as u32 + 32);
    }
    match key {
        raw::KEY_BACKSPACE => Key::BACKSPACE,
        raw::KEY_TAB => Key::TAB,
        raw::KEY_ENTER => Key::ENTER,
        raw::KEY_ESCAPE => Key::ESCAPE,
        raw::KEY_DELETE => Key::DELETE,
        raw::KEY_LEFT_SHIFT => Key::LSHIFT,
        raw::KEY_RIGHT_SHIFT => Key::RSHIFT,
        raw::KEY_LEFT_CONTROL => Key::LCTRL,
        raw::KEY_RIGHT_CONTROL => Key::RCTRL,
        raw::KEY_LEFT_ALT | raw::KEY_RIGHT_ALT => Key::ALT,
        raw::KEY_LEFT_SUPER | raw::KEY_RIGHT_SUPER => Key::META,
        raw::KEY_CAPS_LOCK => Key::CAPSLOCK,
        raw::KEY_LEFT => Key::LEFT,
        raw::KEY_RIGHT => Key::RIGHT,
        raw::KEY_UP => Key::UP,
        raw::KEY_DOWN => Key::DOWN,
        raw::KEY_INSERT => Key::INSERT,
        raw::KEY_HOME => Key::HOME,
        raw::KEY_END => Key::END,
        raw::KEY_PAGE_UP => Key::PAGEUP,
        raw::KEY_PAGE_DOWN => Key::PAGEDOWN,
        k if k < 0 => Key::UNKNOWN,
        k => Key(k as u32),
    }
}

/// Maps a raw key action to the event direction and the repeat flag.
pub fn key_action_from_platform(action: i32) -> (KeyEventType, bool) {
    match action {
        raw::RELEASE => (KeyEventType::Up, false),
        raw::REPEAT => (KeyEventType::Down, true),
        _ => (KeyEventType::Down, false),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A single code point encoded as null-terminated UTF-8.
pub struct Utf8Char {
    bytes: [u8; 5],
}

impl Utf8Char {
    /// Encodes a UTF-32 code point. Values above `0x10FFFF` become `?`.
    pub fn from_utf32(c: u32) -> Self {
        let mut bytes = [0u8; 5];
        if c <= 0x7f {
            bytes[0] = c as u8;
        } else if c <= 0x7ff {
            bytes[0] = 0xc0 | (c >> 6) as u8;
            bytes[1] = 0x80 | (c & 0x3f) as u8;
        } else if c <= 0xffff {
            bytes[0] = 0xe0 | (c >> 12) as u8;
            bytes[1] = 0x80 | ((c >> 6) & 0x3f) as u8;
            bytes[2] = 0x80 | (c & 0x3f) as u8;
        } else if c <= 0x10ffff {
            bytes[0] = 0xf0 | (c >> 18) as u8;
            bytes[1] = 0x80 | ((c >> 12) & 0x3f) as u8;
            bytes[2] = 0x80 | ((c >> 6) & 0x3f) as u8;
            bytes[3] = 0x80 | (c & 0x3f) as u8;
        } else {
            bytes[0] = b'?';
        }
        Self { bytes }
    }

    /// Returns the encoded bytes, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        let len = self.bytes.iter().position(|b| *b == 0).unwrap_or(self.bytes.len());
        &self.bytes[..len]
    }

    /// Returns the encoded bytes including the null terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        let len = self.as_bytes().len();
        &self.bytes[..len + 1]
    }

    /// Returns the text, or `?` if the bytes are not valid UTF-8 (surrogates).
    pub fn as_str(&self) -> &str { std::str::from_utf8(self.as_bytes()).unwrap_or("?") }
}
