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
use std::{cell::Cell, rc::Rc};

use crate::{Color, Dimensioni, FontBitmap, Id, Key, KeyModifier, Recti, TextureId, UiStyle};

/// Size of the key state array mirrored into the UI library.
pub const KEYS_DOWN_LEN: usize = 512;

/// Mouse position reported while the window is not focused; nothing is hovered there.
pub const OFFSCREEN_MOUSE: (f32, f32) = (-f32::MAX, -f32::MAX);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle of an immediate-mode UI context.
pub struct ContextId(u32);

impl ContextId {
    /// Returns the raw numeric value.
    pub fn raw(self) -> u32 { self.0 }
}

#[derive(Default)]
struct ContextSwitchState {
    current: Cell<Option<ContextId>>,
    next_id: Cell<u32>,
}

/// Tracks which UI context is current. Shared by all windows of an application so that a window
/// created or drawn from inside another window's callback leaves the caller's context intact.
#[derive(Clone, Default)]
pub struct ContextSwitch(Rc<ContextSwitchState>);

impl ContextSwitch {
    /// Creates a switch with no current context.
    pub fn new() -> Self { Self::default() }

    /// Allocates a new context handle.
    pub fn register(&self) -> ContextId {
        let id = self.0.next_id.get() + 1;
        self.0.next_id.set(id);
        ContextId(id)
    }

    /// Returns the current context.
    pub fn current(&self) -> Option<ContextId> { self.0.current.get() }

    /// Makes `id` current and returns the previously current context.
    pub fn make_current(&self, id: ContextId) -> Option<ContextId> { self.0.current.replace(Some(id)) }

    /// Reinstates a context returned by [`ContextSwitch::make_current`].
    pub fn restore(&self, previous: Option<ContextId>) { self.0.current.set(previous); }

    /// Makes `id` current until the returned guard is dropped.
    pub fn activate(&self, id: ContextId) -> ContextGuard {
        let previous = self.make_current(id);
        ContextGuard { switch: self.clone(), previous }
    }
}

/// Restores the previously current context when dropped.
pub struct ContextGuard {
    switch: ContextSwitch,
    previous: Option<ContextId>,
}

impl ContextGuard {
    /// Context that was current before the guard was taken.
    pub fn previous(&self) -> Option<ContextId> { self.previous }
}

impl Drop for ContextGuard {
    fn drop(&mut self) { self.switch.restore(self.previous); }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
/// Navigation and editing keys the UI library looks up through [`UiInput::key_map`].
pub enum UiKey {
    /// Tab.
    Tab = 0,
    /// Left arrow.
    LeftArrow,
    /// Right arrow.
    RightArrow,
    /// Up arrow.
    UpArrow,
    /// Down arrow.
    DownArrow,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Insert.
    Insert,
    /// Delete.
    Delete,
    /// Backspace.
    Backspace,
    /// Space.
    Space,
    /// Enter.
    Enter,
    /// Escape.
    Escape,
    /// Select-all shortcut letter.
    A,
    /// Copy shortcut letter.
    C,
    /// Paste shortcut letter.
    V,
    /// Cut shortcut letter.
    X,
    /// Redo shortcut letter.
    Y,
    /// Undo shortcut letter.
    Z,
    /// Number of entries.
    Count,
}

const KEY_MAP: [(UiKey, Key); UiKey::Count as usize] = [
    (UiKey::Tab, Key::TAB),
    (UiKey::LeftArrow, Key::LEFT),
    (UiKey::RightArrow, Key::RIGHT),
    (UiKey::UpArrow, Key::UP),
    (UiKey::DownArrow, Key::DOWN),
    (UiKey::PageUp, Key::PAGEUP),
    (UiKey::PageDown, Key::PAGEDOWN),
    (UiKey::Home, Key::HOME),
    (UiKey::End, Key::END),
    (UiKey::Insert, Key::INSERT),
    (UiKey::Delete, Key::DELETE),
    (UiKey::Backspace, Key::BACKSPACE),
    (UiKey::Space, Key::SPACE),
    (UiKey::Enter, Key::ENTER),
    (UiKey::Escape, Key::ESCAPE),
    (UiKey::A, Key(b'a' as u32)),
    (UiKey::C, Key(b'c' as u32)),
    (UiKey::V, Key(b'v' as u32)),
    (UiKey::X, Key(b'x' as u32)),
    (UiKey::Y, Key(b'y' as u32)),
    (UiKey::Z, Key(b'z' as u32)),
];

#[derive(Clone, Debug)]
/// Per-frame input state handed to the immediate-mode UI library.
pub struct UiInput {
    /// Seconds since the previous frame; drives double-click timing.
    pub delta_time: f32,
    /// Framebuffer size in pixels.
    pub display_size: (f32, f32),
    /// Pointer position in framebuffer pixels, or [`OFFSCREEN_MOUSE`].
    pub mouse_pos: (f32, f32),
    /// Held state of left, right and middle buttons.
    pub mouse_down: [bool; 3],
    /// Accumulated vertical wheel units.
    pub mouse_wheel: f32,
    /// Accumulated horizontal wheel units.
    pub mouse_wheel_h: f32,
    /// Shift held.
    pub key_shift: bool,
    /// Control held.
    pub key_ctrl: bool,
    /// Alt held.
    pub key_alt: bool,
    /// Meta/super held.
    pub key_super: bool,
    /// Held state of every key, indexed by [`Key`] code.
    pub keys_down: [bool; KEYS_DOWN_LEN],
    /// Key code for each [`UiKey`].
    pub key_map: [Key; UiKey::Count as usize],
    input_text: String,
}

impl Default for UiInput {
    fn default() -> Self {
        Self {
            delta_time: 1.0 / 60.0,
            display_size: (0.0, 0.0),
            mouse_pos: OFFSCREEN_MOUSE,
            mouse_down: [false; 3],
            mouse_wheel: 0.0,
            mouse_wheel_h: 0.0,
            key_shift: false,
            key_ctrl: false,
            key_alt: false,
            key_super: false,
            keys_down: [false; KEYS_DOWN_LEN],
            key_map: [Key::NONE; UiKey::Count as usize],
            input_text: String::new(),
        }
    }
}

impl UiInput {
    /// Fills [`UiInput::key_map`] with the window's key codes.
    pub fn install_key_map(&mut self) {
        for (ui_key, key) in KEY_MAP {
            self.key_map[ui_key as usize] = key;
        }
    }

    /// Returns the key code mapped to a UI key.
    pub fn mapped_key(&self, ui_key: UiKey) -> Key { self.key_map[ui_key as usize] }

    /// Mirrors the modifier accumulator.
    pub fn set_modifiers(&mut self, mods: KeyModifier) {
        self.key_shift = mods.is_shift();
        self.key_ctrl = mods.is_ctrl();
        self.key_alt = mods.is_alt();
        self.key_super = mods.is_meta();
    }

    /// Records a key transition. Codes outside the key array are ignored.
    pub fn set_key(&mut self, key: Key, down: bool) {
        if let Some(slot) = self.keys_down.get_mut(key.raw() as usize) {
            *slot = down;
        }
    }

    /// Returns `true` if the key is held.
    pub fn is_key_down(&self, key: Key) -> bool { self.keys_down.get(key.raw() as usize).copied().unwrap_or(false) }

    /// Accumulates scroll units.
    pub fn scroll(&mut self, dx: f32, dy: f32) {
        self.mouse_wheel_h += dx;
        self.mouse_wheel += dy;
    }

    /// Appends UTF-8 text to the input buffer.
    pub fn add_text(&mut self, text: &str) { self.input_text.push_str(text); }

    /// Returns the accumulated UTF-8 text entered this frame.
    pub fn text_input(&self) -> &str { &self.input_text }

    /// Returns `true` if the pointer position refers to this window.
    pub fn is_mouse_in_window(&self) -> bool { self.mouse_pos != OFFSCREEN_MOUSE }

    /// Clears the per-frame accumulators once the UI library consumed them.
    pub fn epilogue(&mut self) {
        self.mouse_wheel = 0.0;
        self.mouse_wheel_h = 0.0;
        self.input_text.clear();
    }
}

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Options of the UI library windows that host top-level widgets.
    pub struct HostFlags : u32 {
        /// The host ignores all input.
        const NO_INPUTS = 8;
        /// The host cannot be collapsed.
        const NO_COLLAPSE = 4;
        /// The host cannot be resized by the user.
        const NO_RESIZE = 2;
        /// The host has no title bar.
        const NO_TITLE_BAR = 1;
        /// No special options.
        const NONE = 0;
    }
}

impl HostFlags {
    /// Flags for a child of the OS window: fixed frame, no decorations.
    pub const CHILD: Self = Self::NO_TITLE_BAR.union(Self::NO_RESIZE).union(Self::NO_COLLAPSE);
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
/// Vertex emitted by the UI library.
pub struct UiVertex {
    /// Position in framebuffer pixels.
    pub pos: [f32; 2],
    /// Texture coordinates.
    pub uv: [f32; 2],
    /// Vertex color.
    pub color: Color,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// One indexed draw call.
pub struct DrawCommand {
    /// Clip rectangle as `[x0, y0, x1, y1]`.
    pub clip: [f32; 4],
    /// Texture sampled by the call, `None` for the font atlas.
    pub texture: Option<TextureId>,
    /// Number of indices consumed.
    pub element_count: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Geometry produced for one host window.
pub struct DrawList {
    /// Vertex buffer.
    pub vertices: Vec<UiVertex>,
    /// Index buffer.
    pub indices: Vec<u16>,
    /// Draw calls over the buffers.
    pub commands: Vec<DrawCommand>,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Everything the UI library produced for a frame.
pub struct DrawData {
    /// Framebuffer size the data was produced for.
    pub display_size: (f32, f32),
    /// Draw lists in back-to-front order.
    pub lists: Vec<DrawList>,
}

/// Boundary to the immediate-mode UI library. One instance per window; the library's internal
/// layout and typesetting stay behind this trait.
pub trait UiContext {
    /// Input state consumed by the next frame.
    fn input(&mut self) -> &mut UiInput;
    /// Style state.
    fn style_mut(&mut self) -> &mut UiStyle;
    /// Loads a font at the given pixel size and returns its alpha-8 atlas bitmap.
    fn load_font(&mut self, path: &str, size_pixels: f32) -> Option<FontBitmap>;
    /// Begins a frame; input is processed during the frame.
    fn new_frame(&mut self);
    /// Ends the frame without producing geometry.
    fn end_frame(&mut self);
    /// Produces geometry for the ended frame.
    fn render(&mut self) -> DrawData;
    /// Opens a host window with a fixed frame.
    fn begin_host(&mut self, name: &str, frame: Recti, flags: HostFlags, background: Option<Color>);
    /// Closes the current host window.
    fn end_host(&mut self);
    /// Pushes the border style of dialogs.
    fn push_dialog_border(&mut self, width: f32, rounding: f32);
    /// Pops the border style of dialogs.
    fn pop_dialog_border(&mut self);
    /// Frames of the library's visible popup windows.
    fn popup_frames(&self) -> Vec<Recti>;
    /// Widget of the library currently owning input, if any.
    fn active_id(&self) -> Option<Id>;
    /// Size of a text run in the current font.
    fn text_size(&self, text: &str) -> Dimensioni;
    /// Releases library resources; called with the context current, before the renderer goes away.
    fn shutdown(&mut self) {}
}
