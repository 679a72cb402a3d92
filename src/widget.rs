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
use crate::{
    rect, rect_eq, size, vec2, Color, Dimensioni, DrawResult, EventResult, KeyEvent, MouseEvent, Recti, RendererHandle, Theme,
    TickEvent, UiContext, Vec2i,
};

/// Everything a widget may consult while computing sizes. Only valid while the window's UI
/// context is current, since text metrics come from the UI library.
pub struct LayoutContext<'a> {
    /// Scaled theme of the window.
    pub theme: &'a Theme,
    /// UI library, for text metrics.
    pub ui: &'a dyn UiContext,
}

/// Everything a widget needs to draw itself during a frame.
pub struct DrawContext<'a> {
    /// Scaled theme of the window.
    pub theme: &'a Theme,
    /// Renderer of the window; scene widgets submit their views through it.
    pub renderer: RendererHandle,
    /// UI library receiving the widget's immediate-mode calls.
    pub ui: &'a mut dyn UiContext,
    /// Origin of the host window the widget draws in.
    pub ui_offset: Vec2i,
    /// Framebuffer width.
    pub screen_width: i32,
    /// Framebuffer height.
    pub screen_height: i32,
    /// Font size in pixels.
    pub em: i32,
    /// Seconds since the previous frame.
    pub dt: f32,
}

impl<'a> DrawContext<'a> {
    /// Returns a context for measuring with the same theme and UI library.
    pub fn layout_context(&self) -> LayoutContext<'_> { LayoutContext { theme: self.theme, ui: &*self.ui } }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Rendering quality of scene views.
pub enum RenderQuality {
    /// Cheap rendering, used while the window is being resized.
    Fast,
    /// Full quality.
    Best,
}

/// Capability of widgets that render a scene and can trade quality for speed.
pub trait SupportsRenderQuality {
    /// Current quality.
    fn render_quality(&self) -> RenderQuality;
    /// Changes the quality of subsequent frames.
    fn set_render_quality(&mut self, quality: RenderQuality);
}

/// Node of the retained widget tree. Frames are in framebuffer pixels.
pub trait Widget {
    /// Frame in framebuffer pixels.
    fn frame(&self) -> Recti;
    /// Moves and resizes the widget.
    fn set_frame(&mut self, frame: Recti);
    /// Hidden widgets are neither drawn nor hit.
    fn is_visible(&self) -> bool { true }
    /// Background override; `None` keeps the theme's background.
    fn background_color(&self) -> Option<Color> { None }
    /// Owned children.
    fn children(&self) -> &[Box<dyn Widget>] { &[] }
    /// Owned children.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] { &mut [] }
    /// Size the widget would like to have.
    fn calc_preferred_size(&self, ctx: &LayoutContext<'_>) -> Dimensioni;
    /// Positions the children inside the widget's frame.
    fn layout(&mut self, ctx: &LayoutContext<'_>) {
        for child in self.children_mut() {
            child.layout(ctx);
        }
    }
    /// Issues the widget's immediate-mode calls for this frame.
    fn draw(&mut self, dc: &mut DrawContext<'_>) -> DrawResult;
    /// Handles pointer input.
    fn mouse(&mut self, _e: &MouseEvent) -> EventResult { EventResult::Ignored }
    /// Handles keyboard input the UI library did not take.
    fn key(&mut self, _e: &KeyEvent) -> EventResult { EventResult::Ignored }
    /// Advances animations.
    fn tick(&mut self, _e: &TickEvent) -> DrawResult { DrawResult::None }
    /// Returns the render-quality capability if this widget renders a scene.
    fn render_quality_mut(&mut self) -> Option<&mut dyn SupportsRenderQuality> { None }
}

/// Applies `quality` to every scene widget in `widgets`, descending into the other widgets.
pub fn set_render_quality_recursive(widgets: &mut [Box<dyn Widget>], quality: RenderQuality) {
    for child in widgets.iter_mut() {
        if let Some(scene) = child.render_quality_mut() {
            scene.set_render_quality(quality);
            continue;
        }
        set_render_quality_recursive(child.children_mut(), quality);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Identifier of a top-level widget, stable for the widget's lifetime in the tree.
pub struct WidgetId(u64);

impl WidgetId {
    /// Returns the raw numeric value.
    pub fn raw(self) -> u64 { self.0 }
}

struct Entry {
    id: WidgetId,
    widget: Box<dyn Widget>,
}

/// Ordered top-level widgets of a window; later entries are above earlier ones.
#[derive(Default)]
pub struct WidgetTree {
    entries: Vec<Entry>,
    last_id: u64,
}

impl WidgetTree {
    /// Appends a widget on top of the others.
    pub fn add(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        self.last_id += 1;
        let id = WidgetId(self.last_id);
        self.entries.push(Entry { id, widget });
        id
    }

    /// Removes a widget, returning ownership of it.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).widget)
    }

    /// Drops every widget.
    pub fn clear(&mut self) { self.entries.clear(); }

    /// Number of top-level widgets.
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` if there are no widgets.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Returns `true` if `id` refers to a widget of this tree.
    pub fn contains(&self, id: WidgetId) -> bool { self.entries.iter().any(|e| e.id == id) }

    /// Looks a widget up.
    pub fn get(&self, id: WidgetId) -> Option<&dyn Widget> { self.entries.iter().find(|e| e.id == id).map(|e| e.widget.as_ref()) }

    /// Looks a widget up.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        self.entries.iter_mut().find(|e| e.id == id).map(|e| e.widget.as_mut())
    }

    /// Identifiers in insertion (bottom to top) order.
    pub fn ids(&self) -> Vec<WidgetId> { self.entries.iter().map(|e| e.id).collect() }

    /// Widgets in insertion (bottom to top) order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &dyn Widget)> + '_ { self.entries.iter().map(|e| (e.id, e.widget.as_ref())) }

    /// Widgets in insertion (bottom to top) order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (WidgetId, &mut Box<dyn Widget>)> + '_ {
        self.entries.iter_mut().map(|e| (e.id, &mut e.widget))
    }

    /// A single widget fills `content`; several widgets keep the frames they were given.
    pub fn layout(&mut self, content: Recti, ctx: &LayoutContext<'_>) {
        if let [only] = self.entries.as_mut_slice() {
            only.widget.set_frame(content);
            only.widget.layout(ctx);
        } else {
            for entry in &mut self.entries {
                entry.widget.layout(ctx);
            }
        }
    }

    /// Extent, measured from the window origin, covering every widget at its preferred size.
    pub fn calc_preferred_size(&self, ctx: &LayoutContext<'_>) -> Dimensioni {
        let mut bbox = rect(0, 0, 0, 0);
        for entry in &self.entries {
            let frame = entry.widget.frame();
            let pref = entry.widget.calc_preferred_size(ctx);
            let (lo, hi) = (bbox.min(), bbox.max());
            let (x, y) = (lo.x.min(frame.x), lo.y.min(frame.y));
            let (right, bottom) = (hi.x.max(frame.x + pref.width), hi.y.max(frame.y + pref.height));
            bbox = Recti::from(&vec2(x, y), &vec2(right, bottom));
        }
        // up/left of the origin is clipped, so the extent is right/bottom, not width/height
        size(bbox.x + bbox.width, bbox.y + bbox.height)
    }

    /// Topmost visible widget whose frame contains the point.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<WidgetId> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.widget.is_visible() && e.widget.frame().contains(&vec2(x, y)))
            .map(|e| e.id)
    }

    /// Returns `true` if some top-level widget has exactly this frame.
    pub fn has_frame(&self, frame: &Recti) -> bool { self.entries.iter().any(|e| rect_eq(&e.widget.frame(), frame)) }

    /// Applies a render quality to every scene widget, recursively.
    pub fn set_render_quality(&mut self, quality: RenderQuality) {
        for entry in &mut self.entries {
            set_render_quality_recursive(std::slice::from_mut(&mut entry.widget), quality);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn ids_follow_insertion_order() {
        let log = Log::default();
        let mut tree = WidgetTree::default();
        let a = tree.add(Recorder::new("a", &log).boxed());
        let b = tree.add(Recorder::new("b", &log).boxed());
        let c = tree.add(Recorder::new("c", &log).boxed());
        assert_eq!(tree.ids(), vec![a, b, c]);
        assert!(tree.remove(b).is_some());
        assert_eq!(tree.ids(), vec![a, c]);
        assert!(!tree.contains(b));
        assert!(tree.remove(b).is_none());
    }

    #[test]
    fn single_child_fills_content() {
        let log = Log::default();
        let ui = FakeUi::new();
        let theme = Theme::default();
        let ctx = LayoutContext { theme: &theme, ui: &ui };
        let mut tree = WidgetTree::default();
        let id = tree.add(Recorder::new("a", &log).with_frame(rect(5, 5, 10, 10)).boxed());
        tree.layout(rect(0, 20, 300, 180), &ctx);
        assert!(rect_eq(&tree.get(id).unwrap().frame(), &rect(0, 20, 300, 180)));
        assert_eq!(log.take(), vec!["a:layout"]);
    }

    #[test]
    fn several_children_keep_their_frames() {
        let log = Log::default();
        let ui = FakeUi::new();
        let theme = Theme::default();
        let ctx = LayoutContext { theme: &theme, ui: &ui };
        let mut tree = WidgetTree::default();
        let a = tree.add(Recorder::new("a", &log).with_frame(rect(0, 0, 10, 10)).boxed());
        tree.add(Recorder::new("b", &log).with_frame(rect(20, 0, 10, 10)).boxed());
        tree.layout(rect(0, 0, 300, 200), &ctx);
        assert!(rect_eq(&tree.get(a).unwrap().frame(), &rect(0, 0, 10, 10)));
        assert_eq!(log.take(), vec!["a:layout", "b:layout"]);
    }

    #[test]
    fn preferred_size_is_extent_from_origin() {
        let log = Log::default();
        let ui = FakeUi::new();
        let theme = Theme::default();
        let ctx = LayoutContext { theme: &theme, ui: &ui };
        let mut tree = WidgetTree::default();
        tree.add(Recorder::new("a", &log).with_frame(rect(10, 10, 1, 1)).with_preferred(size(100, 20)).boxed());
        tree.add(Recorder::new("b", &log).with_frame(rect(0, 50, 1, 1)).with_preferred(size(40, 40)).boxed());
        let pref = tree.calc_preferred_size(&ctx);
        assert_eq!((pref.width, pref.height), (110, 90));
    }

    #[test]
    fn preferred_size_clips_above_and_left_of_origin() {
        let log = Log::default();
        let ui = FakeUi::new();
        let theme = Theme::default();
        let ctx = LayoutContext { theme: &theme, ui: &ui };
        let mut tree = WidgetTree::default();
        tree.add(Recorder::new("a", &log).with_frame(rect(-20, -5, 1, 1)).with_preferred(size(30, 30)).boxed());
        let pref = tree.calc_preferred_size(&ctx);
        assert_eq!((pref.width, pref.height), (10, 25));
    }

    #[test]
    fn hit_test_prefers_topmost_visible() {
        let log = Log::default();
        let mut tree = WidgetTree::default();
        let a = tree.add(Recorder::new("a", &log).with_frame(rect(0, 0, 100, 100)).boxed());
        let b = tree.add(Recorder::new("b", &log).with_frame(rect(50, 50, 100, 100)).boxed());
        let hidden = tree.add(Recorder::new("c", &log).with_frame(rect(0, 0, 200, 200)).hidden().boxed());
        assert_eq!(tree.hit_test(60, 60), Some(b));
        assert_eq!(tree.hit_test(10, 10), Some(a));
        // edges are inside
        assert_eq!(tree.hit_test(0, 0), Some(a));
        assert_eq!(tree.hit_test(150, 150), Some(b));
        assert_eq!(tree.hit_test(190, 190), None);
        assert!(tree.contains(hidden));
    }

    #[test]
    fn render_quality_reaches_nested_scenes() {
        let log = Log::default();
        let top_scene = SceneRecorder::new();
        let nested_scene = SceneRecorder::new();
        let mut tree = WidgetTree::default();
        tree.add(top_scene.boxed());
        tree.add(Recorder::new("panel", &log).with_child(Recorder::new("inner", &log).with_child(nested_scene.boxed()).boxed()).boxed());

        tree.set_render_quality(RenderQuality::Fast);
        assert_eq!(top_scene.quality(), RenderQuality::Fast);
        assert_eq!(nested_scene.quality(), RenderQuality::Fast);
        assert_eq!(nested_scene.changes(), 1);

        tree.set_render_quality(RenderQuality::Best);
        assert_eq!(nested_scene.quality(), RenderQuality::Best);
        assert_eq!(top_scene.changes(), 2);
    }

    #[test]
    fn draw_results_combine() {
        assert_eq!(DrawResult::None.combine(DrawResult::Redraw), DrawResult::Redraw);
        assert_eq!(DrawResult::Relayout.combine(DrawResult::Redraw), DrawResult::Relayout);
        assert_eq!(DrawResult::None.combine(DrawResult::None), DrawResult::None);
    }
}
