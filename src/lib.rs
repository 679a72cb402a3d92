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
#![deny(missing_docs)]
//! `vizui-window` is the window core of an immediate-mode UI stack: one [`Window`] per OS window,
//! bridging native input into an immediate-mode UI context, owning a retained tree of widgets that are
//! drawn every frame, and sequencing dialogs, deferred mutations, layout passes and render-quality
//! throttling while the user resizes.
//!
//! The renderer, the immediate-mode UI library, the native window and the application registry are
//! collaborators reached through the traits in [`renderer`](crate::Renderer), [`ui`](crate::UiContext),
//! [`platform`](crate::NativeWindow) and [`application`](crate::AppServices).

use std::hash::Hash;

mod application;
mod callbacks;
mod deferred;
mod dialog;
mod event;
mod frame;
mod input;
mod menu;
mod platform;
mod renderer;
mod resize;
mod router;
#[cfg(test)]
mod test_support;
mod theme;
mod ui;
mod widget;
mod window;

pub use application::*;
pub use deferred::*;
pub use dialog::*;
pub use event::*;
pub use frame::*;
pub use input::*;
pub use menu::*;
pub use platform::*;
pub use renderer::*;
pub use rs_math3d::*;
pub use theme::*;
pub use ui::*;
pub use widget::*;
pub use window::*;

use bitflags::*;

#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Numeric identifier value.
pub struct Id(usize);

impl Id {
    /// Creates an ID from a caller-supplied numeric value.
    /// On 32-bit platforms the value is truncated to fit in a `usize`.
    pub fn new(value: u64) -> Self { Self(value as usize) }

    /// Returns the raw numeric value wrapped by this ID.
    pub fn raw(self) -> usize { self.0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Mouse button state in the normalized vocabulary.
    pub struct MouseButton : u32 {
        /// Fifth (forward) mouse button.
        const BUTTON5 = 16;
        /// Fourth (back) mouse button.
        const BUTTON4 = 8;
        /// Middle mouse button.
        const MIDDLE = 4;
        /// Right mouse button.
        const RIGHT = 2;
        /// Left mouse button.
        const LEFT = 1;
        /// No buttons pressed.
        const NONE = 0;
    }
}

impl MouseButton {
    /// Returns `true` if no mouse buttons are pressed.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Modifier keys in the normalized vocabulary.
    pub struct KeyModifier : u32 {
        /// Meta (command on macOS, super/windows elsewhere).
        const META = 8;
        /// Alt key held.
        const ALT = 4;
        /// Control key held.
        const CTRL = 2;
        /// Shift key held.
        const SHIFT = 1;
        /// No modifiers active.
        const NONE = 0;
    }
}

impl KeyModifier {
    /// Returns `true` if no modifiers are active.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
    /// Returns `true` if Meta is held.
    pub fn is_meta(&self) -> bool { self.intersects(Self::META) }
    /// Returns `true` if Alt is held.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
    /// Returns `true` if Control is held.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if Shift is held.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Dimensioni`].
pub fn size(w: i32, h: i32) -> Dimensioni { Dimensioni::new(w, h) }

/// Returns `true` if both rectangles have the same origin and extent.
pub fn rect_eq(a: &Recti, b: &Recti) -> bool { a.x == b.x && a.y == b.y && a.width == b.width && a.height == b.height }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Outcome of drawing or ticking a widget.
pub enum DrawResult {
    /// Nothing changed.
    None,
    /// The widget needs another frame to be drawn.
    Redraw,
    /// The widget changed size and the window has to lay out again.
    Relayout,
}

impl DrawResult {
    /// Merges two results, keeping the strongest request.
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Relayout, _) | (_, Self::Relayout) => Self::Relayout,
            (Self::Redraw, _) | (_, Self::Redraw) => Self::Redraw,
            _ => Self::None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Outcome of delivering an input event to a widget.
pub enum EventResult {
    /// The widget did not use the event.
    Ignored,
    /// The widget used the event; a consumed button-down makes it the mouse grabber.
    Consumed,
    /// The widget swallowed the event without acting on it.
    Discard,
}
