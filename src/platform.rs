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

use crate::{Dimensioni, ModifierMapping, MouseButton, Vec2i};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Desktop platform family.
pub enum Platform {
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
    /// Linux and other unix desktops.
    Linux,
}

impl Platform {
    /// Platform the crate was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Linux
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Platform-dependent input and surface behavior, selected once per window.
pub struct PlatformProfile {
    /// Platform this profile describes.
    pub platform: Platform,
    /// How native modifier bits map onto the normalized vocabulary.
    pub modifiers: ModifierMapping,
    /// Whether scroll events come from a trackpad.
    pub trackpad_wheel: bool,
    /// Whether the swap chain must be recreated on resize.
    pub swap_chain_on_resize: bool,
}

const PROFILES: [PlatformProfile; 3] = [
    PlatformProfile { platform: Platform::MacOs, modifiers: ModifierMapping::COMMAND_AS_CONTROL, trackpad_wheel: true, swap_chain_on_resize: true },
    PlatformProfile { platform: Platform::Windows, modifiers: ModifierMapping::IDENTITY, trackpad_wheel: false, swap_chain_on_resize: false },
    PlatformProfile { platform: Platform::Linux, modifiers: ModifierMapping::IDENTITY, trackpad_wheel: false, swap_chain_on_resize: false },
];

impl PlatformProfile {
    /// Profile of `platform`.
    pub fn for_platform(platform: Platform) -> Self {
        PROFILES.iter().copied().find(|p| p.platform == platform).unwrap_or(PROFILES[2])
    }

    /// Profile of the platform the crate was compiled for.
    pub fn current() -> Self { Self::for_platform(Platform::current()) }
}

impl Default for PlatformProfile {
    fn default() -> Self { Self::current() }
}

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Creation flags of a window.
    pub struct WindowFlags : u32 {
        /// Keep the window above the others.
        const TOPMOST = 1;
        /// No flags.
        const NONE = 0;
    }
}

#[derive(Clone, Debug)]
/// Parameters of a new window. Positions and sizes are in OS units; a missing position or size
/// makes the window size itself to its content and center on the screen on its first resize.
pub struct WindowConfig {
    /// Title bar text.
    pub title: String,
    /// Top-left corner on screen.
    pub position: Option<Vec2i>,
    /// Client area size.
    pub size: Option<Dimensioni>,
    /// Creation flags.
    pub flags: WindowFlags,
}

impl WindowConfig {
    /// Auto-sized, centered window.
    pub fn new(title: &str) -> Self { Self { title: title.to_string(), position: None, size: None, flags: WindowFlags::NONE } }

    /// Sets the on-screen position.
    pub fn with_position(mut self, position: Vec2i) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the client area size.
    pub fn with_size(mut self, size: Dimensioni) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the creation flags.
    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns `true` if the window sizes and centers itself.
    pub fn wants_auto_size_and_center(&self) -> bool { self.position.is_none() || self.size.is_none() }
}

/// Native OS window as seen by the window core. Positions and sizes are in OS units unless noted.
pub trait NativeWindow {
    /// Top-left corner on screen.
    fn position(&self) -> Vec2i;
    /// Moves the window.
    fn set_position(&mut self, position: Vec2i);
    /// Client area size.
    fn size(&self) -> Dimensioni;
    /// Resizes the client area.
    fn set_size(&mut self, size: Dimensioni);
    /// Client area size in framebuffer pixels.
    fn framebuffer_size(&self) -> Dimensioni;
    /// Framebuffer pixels per OS unit.
    fn content_scale(&self) -> f32;
    /// Cursor position relative to the client area.
    fn cursor_pos(&self) -> (f64, f64);
    /// Returns `true` while `button` is held.
    fn is_button_pressed(&self, button: MouseButton) -> bool;
    /// Returns `true` if the window has keyboard focus.
    fn is_focused(&self) -> bool;
    /// Returns `true` if the window is shown.
    fn is_visible(&self) -> bool;
    /// Shows or hides the window.
    fn set_visible(&mut self, visible: bool);
    /// Keeps the window above others.
    fn set_topmost(&mut self, topmost: bool);
    /// Changes the title bar text.
    fn set_title(&mut self, title: &str);
    /// Brings the window to the front and focuses it.
    fn raise(&mut self);
    /// Resolution of the primary monitor, when the platform reports one.
    fn monitor_resolution(&self) -> Option<Dimensioni>;
    /// Asks the event loop to deliver a refresh event.
    fn post_expose_event(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
/// Raw event as delivered by the windowing system, before normalization.
pub enum PlatformEvent {
    /// Surface needs repainting.
    Refresh,
    /// Client area changed size.
    Resize,
    /// Content scale changed.
    Rescale,
    /// Cursor moved, in OS units.
    CursorMoved {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Platform button number.
        button: i32,
        /// Platform action (press/release).
        action: i32,
        /// Platform modifier bits.
        mods: i32,
    },
    /// Scroll wheel or trackpad scroll.
    Scroll {
        /// Horizontal amount.
        dx: f64,
        /// Vertical amount.
        dy: f64,
    },
    /// Key pressed, repeated or released.
    Key {
        /// Platform key code.
        key: i32,
        /// Platform action.
        action: i32,
        /// Platform modifier bits.
        mods: i32,
    },
    /// Unicode text entered, as a UTF-32 code point.
    Char(u32),
    /// Files dropped onto the window.
    Drop(Vec<PathBuf>),
    /// User asked to close the window.
    Close,
}
