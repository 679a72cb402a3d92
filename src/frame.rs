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
use tracing::{debug, trace, warn};

use crate::window::LayoutState;
use crate::{drain_deferred, vec2, DrainPoint, DrawContext, DrawResult, HostFlags, MenuItemId, MouseButton, Widget, Window, OFFSCREEN_MOUSE};

/// Names of the UI host windows, one per top-level widget. The UI library keys its per-window
/// state on the name, so the names must be the same every frame.
const HOST_NAMES: [&str; 20] = [
    "win1", "win2", "win3", "win4", "win5", "win6", "win7", "win8", "win9", "win10", "win11", "win12", "win13", "win14", "win15", "win16", "win17",
    "win18", "win19", "win20",
];

const DIALOG_HOST: &str = "dialog";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Kind of pass run by [`Window::draw_once`].
pub enum DrawPass {
    /// Runs the UI frame so that sizes settle, without presenting.
    Layout,
    /// Runs the UI frame and presents it.
    Render,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Outcome of [`Window::on_draw`].
pub enum FrameResult {
    /// Nothing is animating; wait for input.
    None,
    /// Another frame should be drawn.
    Redraw,
}

fn host_flags(input_enabled: bool) -> HostFlags { if input_enabled { HostFlags::CHILD } else { HostFlags::CHILD | HostFlags::NO_INPUTS } }

/// Containers get their own host window placed at their frame; leaves draw directly in the
/// full-window host.
fn draw_child<W: Widget + ?Sized>(dc: &mut DrawContext<'_>, name: &str, child: &mut W, flags: HostFlags) -> DrawResult {
    let frame = child.frame();
    let is_container = !child.children().is_empty();
    if is_container {
        dc.ui_offset = vec2(frame.x, frame.y);
        dc.ui.begin_host(name, frame, flags, child.background_color());
    } else {
        dc.ui_offset = vec2(0, 0);
    }
    let result = child.draw(dc);
    if is_container {
        dc.ui.end_host();
    }
    result
}

impl Window {
    /// Draws a frame, running a second pass when layout changed during the first.
    pub fn on_draw(&mut self) -> FrameResult {
        let needed_layout = self.needs_layout();
        let first = self.draw_once(if needed_layout { DrawPass::Layout } else { DrawPass::Render });
        if first == DrawResult::Relayout {
            self.layout_state = LayoutState::NeedsLayout;
        }
        if needed_layout || self.needs_layout() {
            trace!(window = self.id.raw(), "second draw pass");
            if self.draw_once(DrawPass::Render) == DrawResult::Relayout {
                // lay out again on the next frame rather than looping here
                self.layout_state = LayoutState::NeedsLayout;
                return FrameResult::Redraw;
            }
        }
        if first == DrawResult::None { FrameResult::None } else { FrameResult::Redraw }
    }

    /// Runs one UI frame: deferred actions, layout if pending, every child, the menu bar and the
    /// dialog; then hands the geometry to the bridge and, on render passes, renders.
    pub fn draw_once(&mut self, pass: DrawPass) -> DrawResult {
        let now = self.services.now();
        let dt = (now - self.last_render_time) as f32;
        self.last_render_time = now;

        let before = drain_deferred(self, DrainPoint::BeforeDraw, Window::deferred_queues);

        let _guard = self.activate_context();
        self.sync_input(dt);
        self.ui.new_frame();

        let during = drain_deferred(self, DrainPoint::DuringDraw, Window::deferred_queues);
        if before + during > 0 {
            debug!(window = self.id.raw(), before, during, "deferred actions ran");
        }

        if self.layout_state == LayoutState::NeedsLayout {
            self.layout();
            self.layout_state = LayoutState::LaidOut;
        }

        let fb = self.size();
        let input_enabled = self.dialog.is_none();
        let menubar = self.services.menubar();
        let mut result = DrawResult::None;
        let mut selected: Option<MenuItemId> = None;
        {
            let mut dc = DrawContext {
                theme: &self.theme,
                renderer: self.renderer.clone(),
                ui: self.ui.as_mut(),
                ui_offset: vec2(0, 0),
                screen_width: fb.width,
                screen_height: fb.height,
                em: self.theme.font_size,
                dt,
            };

            let flags = host_flags(input_enabled);
            let mut slot = 0;
            let mut overflow = 0;
            for (_, child) in self.tree.iter_mut() {
                if !child.is_visible() {
                    continue;
                }
                let name = match HOST_NAMES.get(slot) {
                    Some(name) => *name,
                    None => {
                        overflow += 1;
                        HOST_NAMES[HOST_NAMES.len() - 1]
                    }
                };
                slot += 1;
                result = result.combine(draw_child(&mut dc, name, child.as_mut(), flags));
            }
            if overflow > 0 {
                warn!(window = self.id.raw(), overflow, "too many top-level child widgets; use a layout instead");
            }

            if let Some(menu) = menubar.as_ref() {
                dc.ui_offset = vec2(0, 0);
                selected = menu.borrow_mut().draw_menu_bar(&mut dc, input_enabled);
                if selected.is_some() {
                    result = result.combine(DrawResult::Redraw);
                }
            }

            if let Some(dialog) = self.dialog.as_deref_mut() {
                dc.ui.push_dialog_border(self.theme.dialog_border_width as f32, self.theme.dialog_border_radius as f32);
                result = result.combine(draw_child(&mut dc, DIALOG_HOST, dialog, host_flags(true)));
                dc.ui.pop_dialog_border();
            }
        }

        if let Some(item) = selected {
            self.menu_item_selected(item);
        }

        self.ui.end_frame();
        let data = self.ui.render();
        self.ui.input().epilogue();
        self.bridge.update(&data);
        if pass == DrawPass::Render {
            self.renderer.render_frame();
        }
        trace!(window = self.id.raw(), ?pass, ?result, "frame drawn");
        result
    }

    fn sync_input(&mut self, dt: f32) {
        let scaling = self.native.content_scale() as f64;
        let fb = self.native.framebuffer_size();
        let (cx, cy) = self.native.cursor_pos();
        let focused = self.native.is_focused();
        let down = [MouseButton::LEFT, MouseButton::RIGHT, MouseButton::MIDDLE].map(|b| self.native.is_button_pressed(b));
        let mods = self.mouse_mods;

        let input = self.ui.input();
        input.delta_time = dt;
        input.display_size = (fb.width as f32, fb.height as f32);
        input.mouse_pos = if focused { ((cx * scaling) as f32, (cy * scaling) as f32) } else { OFFSCREEN_MOUSE };
        input.mouse_down = down;
        input.set_modifiers(mods);
    }
}
