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
use tracing::{debug, warn};

use crate::window::LayoutState;
use crate::{size, vec2, Dimensioni, RenderQuality, Window};

/// Screen size assumed when the platform does not report the monitor resolution.
pub const DEFAULT_SCREEN_SIZE: (i32, i32) = (1024, 768);

impl Window {
    /// Reacts to a change of the native window's size or content scale.
    pub fn on_resize(&mut self) {
        self.layout_state = LayoutState::NeedsLayout;

        if self.profile.swap_chain_on_resize {
            self.renderer.scope_mut(|r| r.update_swap_chain());
        }
        let fb = self.size();
        self.bridge.on_window_resized(fb);
        self.renderer.scope_mut(|r| r.on_content_resized(fb));

        let scaling = self.scaling();
        let _guard = self.activate_context();
        self.ui.input().display_size = (fb.width as f32, fb.height as f32);
        if self.ui_scaling != scaling {
            self.apply_scaling(scaling);
        }

        if self.wants_auto_size_and_center {
            self.wants_auto_size_and_center = false;
            self.auto_size_and_center();
            self.on_resize();
        }

        // scene rendering is throttled until the resize streak ends
        if !self.is_resizing {
            self.is_resizing = true;
            debug!(window = self.id.raw(), width = fb.width, height = fb.height, "resize streak started");
            self.tree.set_render_quality(RenderQuality::Fast);
        }
    }

    /// Ends a resize streak and restores full render quality.
    pub(crate) fn end_resize_streak(&mut self) {
        self.is_resizing = false;
        debug!(window = self.id.raw(), "resize streak ended");
        self.tree.set_render_quality(RenderQuality::Best);
    }

    fn apply_scaling(&mut self, scaling: f32) {
        debug!(window = self.id.raw(), from = self.ui_scaling, to = scaling, "content scale changed");
        let style = self.ui.style_mut();
        style.scale_metrics(1.0 / self.ui_scaling);
        style.scale_metrics(scaling);
        self.ui_scaling = scaling;
        self.theme = self.services.theme().scaled(scaling);
    }

    fn auto_size_and_center(&mut self) {
        let screen = self.native.monitor_resolution().unwrap_or_else(|| {
            warn!(window = self.id.raw(), "monitor resolution unknown, centering on a {}x{} screen", DEFAULT_SCREEN_SIZE.0, DEFAULT_SCREEN_SIZE.1);
            size(DEFAULT_SCREEN_SIZE.0, DEFAULT_SCREEN_SIZE.1)
        });
        self.ui.new_frame();
        let preferred = self.calc_preferred_size();
        let os = to_os_units(preferred, self.ui_scaling);
        self.native.set_size(os);
        self.native.set_position(vec2((screen.width - os.width) / 2, (screen.height - os.height) / 2));
        self.ui.end_frame();
        debug!(window = self.id.raw(), width = os.width, height = os.height, "window sized to content");
    }
}

fn to_os_units(pixels: Dimensioni, scaling: f32) -> Dimensioni { size((pixels.width as f32 / scaling) as i32, (pixels.height as f32 / scaling) as i32) }
