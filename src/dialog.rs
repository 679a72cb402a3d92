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
use crate::{rect, size, vec2, Dimensioni, DrawContext, DrawResult, EventResult, LayoutContext, MouseEvent, Recti, TickEvent, Widget};

/// Modal widget tree shown above a window's children. While a dialog is shown it receives the
/// pointer input and every other widget is drawn without input.
pub struct Dialog {
    title: String,
    frame: Recti,
    children: Vec<Box<dyn Widget>>,
    on_will_show: Option<Box<dyn FnMut()>>,
}

impl Dialog {
    /// Creates an empty dialog with a zero frame; the window sizes it on show.
    pub fn new(title: &str) -> Self { Self { title: title.to_string(), frame: rect(0, 0, 0, 0), children: Vec::new(), on_will_show: None } }

    /// Title of the dialog.
    pub fn title(&self) -> &str { &self.title }

    /// Appends a child widget.
    pub fn add_child(&mut self, child: Box<dyn Widget>) { self.children.push(child); }

    /// Installs the hook run right before the dialog is sized and shown.
    pub fn set_on_will_show(&mut self, f: impl FnMut() + 'static) { self.on_will_show = Some(Box::new(f)); }

    /// Runs the pre-show hook.
    pub fn on_will_show(&mut self) {
        if let Some(f) = self.on_will_show.as_mut() {
            f();
        }
    }
}

impl Widget for Dialog {
    fn frame(&self) -> Recti { self.frame }
    fn set_frame(&mut self, frame: Recti) { self.frame = frame; }
    fn children(&self) -> &[Box<dyn Widget>] { &self.children }
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] { &mut self.children }

    fn calc_preferred_size(&self, ctx: &LayoutContext<'_>) -> Dimensioni {
        self.children.iter().map(|c| c.calc_preferred_size(ctx)).fold(size(0, 0), |acc, s| size(acc.width.max(s.width), acc.height.max(s.height)))
    }

    fn layout(&mut self, ctx: &LayoutContext<'_>) {
        if let [only] = self.children.as_mut_slice() {
            only.set_frame(self.frame);
        }
        for child in &mut self.children {
            child.layout(ctx);
        }
    }

    fn mouse(&mut self, e: &MouseEvent) -> EventResult {
        match self.children.iter_mut().rev().find(|c| c.is_visible() && c.frame().contains(&vec2(e.x, e.y))) {
            Some(child) => child.mouse(e),
            None => EventResult::Ignored,
        }
    }

    fn tick(&mut self, e: &TickEvent) -> DrawResult { self.children.iter_mut().fold(DrawResult::None, |acc, c| acc.combine(c.tick(e))) }

    fn draw(&mut self, dc: &mut DrawContext<'_>) -> DrawResult {
        let mut result = DrawResult::None;
        for child in &mut self.children {
            if child.is_visible() {
                result = result.combine(child.draw(dc));
            }
        }
        result
    }
}

/// Computes where a dialog goes: its current size, or its preferred size on an axis where the
/// current size is zero, capped at 80% of the window and centered in it.
pub fn dialog_frame(window: Dimensioni, current: Dimensioni, preferred: Dimensioni) -> Recti {
    let pick = |current: i32, preferred: i32| if current == 0 { preferred } else { current };
    let cap = |extent: i32| (0.8 * extent as f32).round() as i32;
    let w = pick(current.width, preferred.width).min(cap(window.width));
    let h = pick(current.height, preferred.height).min(cap(window.height));
    rect((window.width - w) / 2, (window.height - h) / 2, w, h)
}
