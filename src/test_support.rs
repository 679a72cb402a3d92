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
//! Test doubles shared by the unit tests of every module.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::*;

/// Shared, ordered record of calls.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
    pub fn push(&self, entry: impl Into<String>) { self.0.borrow_mut().push(entry.into()); }
    pub fn take(&self) -> Vec<String> { std::mem::take(&mut *self.0.borrow_mut()) }
    pub fn entries(&self) -> Vec<String> { self.0.borrow().clone() }
    pub fn count(&self, entry: &str) -> usize { self.0.borrow().iter().filter(|e| e.as_str() == entry).count() }
}

/// Widget recording every call it receives.
pub struct Recorder {
    name: String,
    log: Log,
    frame: Recti,
    preferred: Dimensioni,
    visible: bool,
    background: Option<Color>,
    children: Vec<Box<dyn Widget>>,
    draw_results: Rc<RefCell<Vec<DrawResult>>>,
    mouse_result: EventResult,
    tick_result: DrawResult,
}

impl Recorder {
    pub fn new(name: &str, log: &Log) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            frame: rect(0, 0, 0, 0),
            preferred: size(0, 0),
            visible: true,
            background: None,
            children: Vec::new(),
            draw_results: Rc::new(RefCell::new(Vec::new())),
            mouse_result: EventResult::Consumed,
            tick_result: DrawResult::None,
        }
    }
    pub fn with_frame(mut self, frame: Recti) -> Self {
        self.frame = frame;
        self
    }
    pub fn with_preferred(mut self, preferred: Dimensioni) -> Self {
        self.preferred = preferred;
        self
    }
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn with_child(mut self, child: Box<dyn Widget>) -> Self {
        self.children.push(child);
        self
    }
    /// Results returned by successive draws; `None` once exhausted.
    pub fn with_draw_results(self, results: &[DrawResult]) -> Self {
        *self.draw_results.borrow_mut() = results.to_vec();
        self
    }
    pub fn ignoring_mouse(mut self) -> Self {
        self.mouse_result = EventResult::Ignored;
        self
    }
    pub fn with_tick_result(mut self, result: DrawResult) -> Self {
        self.tick_result = result;
        self
    }
    pub fn boxed(self) -> Box<dyn Widget> { Box::new(self) }
}

impl Widget for Recorder {
    fn frame(&self) -> Recti { self.frame }
    fn set_frame(&mut self, frame: Recti) { self.frame = frame; }
    fn is_visible(&self) -> bool { self.visible }
    fn background_color(&self) -> Option<Color> { self.background }
    fn children(&self) -> &[Box<dyn Widget>] { &self.children }
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] { &mut self.children }
    fn calc_preferred_size(&self, _ctx: &LayoutContext<'_>) -> Dimensioni { self.preferred }
    fn layout(&mut self, ctx: &LayoutContext<'_>) {
        self.log.push(format!("{}:layout", self.name));
        for child in &mut self.children {
            child.layout(ctx);
        }
    }
    fn draw(&mut self, dc: &mut DrawContext<'_>) -> DrawResult {
        self.log.push(format!("{}:draw@{},{}", self.name, dc.ui_offset.x, dc.ui_offset.y));
        let mut results = self.draw_results.borrow_mut();
        if results.is_empty() { DrawResult::None } else { results.remove(0) }
    }
    fn mouse(&mut self, e: &MouseEvent) -> EventResult {
        self.log.push(format!("{}:mouse:{:?}", self.name, e.kind));
        self.mouse_result
    }
    fn key(&mut self, e: &KeyEvent) -> EventResult {
        self.log.push(format!("{}:key:{:?}:{}", self.name, e.kind, e.key.raw()));
        EventResult::Consumed
    }
    fn tick(&mut self, _e: &TickEvent) -> DrawResult {
        self.log.push(format!("{}:tick", self.name));
        self.tick_result
    }
}

#[derive(Clone)]
/// Scene view whose quality can be inspected after it moved into a tree.
pub struct SceneRecorder {
    quality: Rc<Cell<RenderQuality>>,
    changes: Rc<Cell<usize>>,
    frame: Recti,
}

impl SceneRecorder {
    pub fn new() -> Self { Self { quality: Rc::new(Cell::new(RenderQuality::Best)), changes: Rc::new(Cell::new(0)), frame: rect(0, 0, 0, 0) } }
    pub fn quality(&self) -> RenderQuality { self.quality.get() }
    pub fn changes(&self) -> usize { self.changes.get() }
    pub fn boxed(&self) -> Box<dyn Widget> { Box::new(self.clone()) }
}

impl SupportsRenderQuality for SceneRecorder {
    fn render_quality(&self) -> RenderQuality { self.quality.get() }
    fn set_render_quality(&mut self, quality: RenderQuality) {
        self.quality.set(quality);
        self.changes.set(self.changes.get() + 1);
    }
}

impl Widget for SceneRecorder {
    fn frame(&self) -> Recti { self.frame }
    fn set_frame(&mut self, frame: Recti) { self.frame = frame; }
    fn calc_preferred_size(&self, _ctx: &LayoutContext<'_>) -> Dimensioni { size(0, 0) }
    fn draw(&mut self, _dc: &mut DrawContext<'_>) -> DrawResult { DrawResult::None }
    fn render_quality_mut(&mut self) -> Option<&mut dyn SupportsRenderQuality> { Some(self) }
}

#[derive(Clone, Default)]
/// State of [`FakeUi`] observable from tests.
pub struct UiRecord {
    pub calls: Log,
    pub hosts: Rc<RefCell<Vec<(String, HostFlags, Option<Color>)>>>,
    pub popups: Rc<RefCell<Vec<Recti>>>,
    pub active_id: Rc<Cell<Option<Id>>>,
    pub font: Rc<RefCell<Option<FontBitmap>>>,
    pub shutdowns: Rc<Cell<usize>>,
}

/// Immediate-mode UI library double.
pub struct FakeUi {
    input: UiInput,
    style: UiStyle,
    pub record: UiRecord,
}

impl FakeUi {
    pub fn new() -> Self { Self { input: UiInput::default(), style: UiStyle::default(), record: UiRecord::default() } }
}

impl UiContext for FakeUi {
    fn input(&mut self) -> &mut UiInput { &mut self.input }
    fn style_mut(&mut self) -> &mut UiStyle { &mut self.style }
    fn load_font(&mut self, path: &str, _size_pixels: f32) -> Option<FontBitmap> {
        self.record.calls.push(format!("load_font:{}", path));
        self.record.font.borrow().clone()
    }
    fn new_frame(&mut self) { self.record.calls.push("new_frame"); }
    fn end_frame(&mut self) { self.record.calls.push("end_frame"); }
    fn render(&mut self) -> DrawData {
        self.record.calls.push("render");
        DrawData { display_size: self.input.display_size, lists: Vec::new() }
    }
    fn begin_host(&mut self, name: &str, _frame: Recti, flags: HostFlags, background: Option<Color>) {
        self.record.calls.push(format!("begin:{}", name));
        self.record.hosts.borrow_mut().push((name.to_string(), flags, background));
    }
    fn end_host(&mut self) { self.record.calls.push("end"); }
    fn push_dialog_border(&mut self, _width: f32, _rounding: f32) { self.record.calls.push("push_dialog_border"); }
    fn pop_dialog_border(&mut self) { self.record.calls.push("pop_dialog_border"); }
    fn popup_frames(&self) -> Vec<Recti> { self.record.popups.borrow().clone() }
    fn active_id(&self) -> Option<Id> { self.record.active_id.get() }
    fn text_size(&self, text: &str) -> Dimensioni { size(8 * text.chars().count() as i32, 16) }
    fn shutdown(&mut self) { self.record.shutdowns.set(self.record.shutdowns.get() + 1); }
}

#[derive(Clone)]
/// State of [`FakeNative`] observable and scriptable from tests.
pub struct NativeState {
    pub position: Vec2i,
    pub size: Dimensioni,
    pub scale: f32,
    pub cursor: (f64, f64),
    pub buttons: MouseButton,
    pub focused: bool,
    pub visible: bool,
    pub topmost: bool,
    pub title: String,
    pub monitor: Option<Dimensioni>,
    pub exposes: usize,
    pub raises: usize,
    pub size_changes: usize,
}

/// Native window double; the framebuffer is the OS size times the scale.
#[derive(Clone)]
pub struct FakeNative(pub Rc<RefCell<NativeState>>);

impl FakeNative {
    pub fn new(scale: f32) -> Self {
        Self(Rc::new(RefCell::new(NativeState {
            position: vec2(0, 0),
            size: size(0, 0),
            scale,
            cursor: (0.0, 0.0),
            buttons: MouseButton::NONE,
            focused: true,
            visible: false,
            topmost: false,
            title: String::new(),
            monitor: None,
            exposes: 0,
            raises: 0,
            size_changes: 0,
        })))
    }
    pub fn state(&self) -> std::cell::RefMut<'_, NativeState> { self.0.borrow_mut() }
}

impl NativeWindow for FakeNative {
    fn position(&self) -> Vec2i { self.0.borrow().position }
    fn set_position(&mut self, position: Vec2i) { self.0.borrow_mut().position = position; }
    fn size(&self) -> Dimensioni { self.0.borrow().size }
    fn set_size(&mut self, size: Dimensioni) {
        let mut s = self.0.borrow_mut();
        s.size = size;
        s.size_changes += 1;
    }
    fn framebuffer_size(&self) -> Dimensioni {
        let s = self.0.borrow();
        size((s.size.width as f32 * s.scale) as i32, (s.size.height as f32 * s.scale) as i32)
    }
    fn content_scale(&self) -> f32 { self.0.borrow().scale }
    fn cursor_pos(&self) -> (f64, f64) { self.0.borrow().cursor }
    fn is_button_pressed(&self, button: MouseButton) -> bool { self.0.borrow().buttons.contains(button) }
    fn is_focused(&self) -> bool { self.0.borrow().focused }
    fn is_visible(&self) -> bool { self.0.borrow().visible }
    fn set_visible(&mut self, visible: bool) { self.0.borrow_mut().visible = visible; }
    fn set_topmost(&mut self, topmost: bool) { self.0.borrow_mut().topmost = topmost; }
    fn set_title(&mut self, title: &str) { self.0.borrow_mut().title = title.to_string(); }
    fn raise(&mut self) { self.0.borrow_mut().raises += 1; }
    fn monitor_resolution(&self) -> Option<Dimensioni> { self.0.borrow().monitor }
    fn post_expose_event(&mut self) { self.0.borrow_mut().exposes += 1; }
}

/// Renderer double logging its calls.
pub struct FakeRenderer(pub Log);

impl Renderer for FakeRenderer {
    fn begin_frame(&mut self) { self.0.push("begin_frame"); }
    fn draw(&mut self) { self.0.push("draw"); }
    fn end_frame(&mut self) { self.0.push("end_frame"); }
    fn update_swap_chain(&mut self) { self.0.push("update_swap_chain"); }
    fn on_content_resized(&mut self, size: Dimensioni) { self.0.push(format!("content_resized:{}x{}", size.width, size.height)); }
}

/// UI-to-renderer bridge double.
pub struct FakeBridge(pub Log);

impl UiBridge for FakeBridge {
    fn update(&mut self, _data: &DrawData) { self.0.push("update"); }
    fn on_window_resized(&mut self, size: Dimensioni) { self.0.push(format!("resized:{}x{}", size.width, size.height)); }
    fn create_atlas_texture(&mut self, atlas: GlyphAtlas) -> TextureId {
        self.0.push(format!("atlas:{}x{}", atlas.width(), atlas.height()));
        TextureId(7)
    }
}

/// A window wired to doubles, with handles to inspect them.
pub struct Harness {
    pub window: Window,
    pub app: Rc<Application>,
    pub native: FakeNative,
    pub ui: UiRecord,
    pub renderer: Log,
    pub bridge: Log,
}

impl Harness {
    pub fn with_profile(config: WindowConfig, scale: f32, profile: PlatformProfile, app: Rc<Application>) -> Self {
        let native = FakeNative::new(scale);
        let ui = FakeUi::new();
        let record = ui.record.clone();
        let renderer = Log::default();
        let bridge = Log::default();
        let parts = WindowParts {
            native: Box::new(native.clone()),
            renderer: RendererHandle::new(FakeRenderer(renderer.clone())),
            ui: Box::new(ui),
            bridge: Box::new(FakeBridge(bridge.clone())),
        };
        let services: Rc<dyn AppServices> = app.clone();
        let window = Window::with_profile(&config, parts, services, profile);
        Self { window, app, native, ui: record, renderer, bridge }
    }

    /// 800x600 window at scale 1 on a non-mac profile, drawn once.
    pub fn new() -> Self {
        let config = WindowConfig::new("test").with_position(vec2(0, 0)).with_size(size(800, 600));
        let mut h = Self::with_profile(config, 1.0, PlatformProfile::for_platform(Platform::Linux), Rc::new(Application::default()));
        h.window.on_resize();
        h.window.on_draw();
        h.window.end_resize_streak();
        h.clear_logs();
        h
    }

    pub fn clear_logs(&self) {
        self.ui.calls.take();
        self.ui.hosts.borrow_mut().clear();
        self.renderer.take();
        self.bridge.take();
    }
}

/// Menu bar of fixed height that reports a scripted selection once.
pub struct FixedMenu {
    height: i32,
    pub next: Rc<Cell<Option<MenuItemId>>>,
    pub input_enabled: Rc<RefCell<Vec<bool>>>,
}

impl FixedMenu {
    pub fn new(height: i32) -> Self { Self { height, next: Rc::new(Cell::new(None)), input_enabled: Rc::new(RefCell::new(Vec::new())) } }
}

impl Menu for FixedMenu {
    fn calc_height(&self, _theme: &Theme, _ui: &dyn UiContext) -> i32 { self.height }
    fn draw_menu_bar(&mut self, _dc: &mut DrawContext<'_>, input_enabled: bool) -> Option<MenuItemId> {
        self.input_enabled.borrow_mut().push(input_enabled);
        self.next.take()
    }
}
