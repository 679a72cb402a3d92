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
use std::{path::Path, rc::Rc};

use tracing::{debug, warn};

use crate::{
    dialog_frame, rect, size, vec2, AppServices, ContextGuard, ContextId, DeferredQueues, Dialog, Dimensioni, DrainPoint, GlyphAtlas, KeyModifier,
    LayoutContext, MenuItemId, NativeWindow, PlatformProfile, Recti, RendererHandle, TextureId, Theme, UiBridge, UiContext, Vec2i, Widget,
    WidgetId, WidgetTree, WindowConfig, WindowFlags, WindowId,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Reference to a widget that can hold focus or the mouse grab.
pub enum WidgetRef {
    /// Top-level child of the window.
    Child(WidgetId),
    /// The dialog being shown.
    Dialog,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum LayoutState {
    NeedsLayout,
    LaidOut,
}

/// Collaborators a window is built from.
pub struct WindowParts {
    /// Native OS window.
    pub native: Box<dyn NativeWindow>,
    /// Renderer drawing into the native window.
    pub renderer: RendererHandle,
    /// Immediate-mode UI context owned by the window.
    pub ui: Box<dyn UiContext>,
    /// Uploads UI geometry to the renderer.
    pub bridge: Box<dyn UiBridge>,
}

type MenuHook = Box<dyn FnMut(&mut Window, MenuItemId)>;
type DropHook = Box<dyn FnMut(&mut Window, &Path)>;

/// One top-level OS window hosting a widget tree drawn through an immediate-mode UI.
///
/// Frames and sizes exposed by the window are in framebuffer pixels unless a method says it works
/// in OS units; the two differ by [`Window::scaling`].
pub struct Window {
    pub(crate) id: WindowId,
    pub(crate) services: Rc<dyn AppServices>,
    pub(crate) profile: PlatformProfile,
    pub(crate) context: ContextId,
    pub(crate) title: String,
    pub(crate) theme: Theme,
    pub(crate) ui_scaling: f32,
    pub(crate) last_render_time: f64,
    pub(crate) mouse_mods: KeyModifier,
    pub(crate) layout_state: LayoutState,
    pub(crate) is_resizing: bool,
    pub(crate) wants_auto_size_and_center: bool,
    pub(crate) tree: WidgetTree,
    pub(crate) dialog: Option<Box<Dialog>>,
    pub(crate) mouse_grabber: Option<WidgetRef>,
    pub(crate) focus: Option<WidgetRef>,
    pub(crate) deferred: DeferredQueues<Window>,
    pub(crate) menu_hook: Option<MenuHook>,
    pub(crate) drop_hook: Option<DropHook>,
    pub(crate) font_texture: Option<TextureId>,
    // dropped in this order, after the widgets
    pub(crate) ui: Box<dyn UiContext>,
    pub(crate) bridge: Box<dyn UiBridge>,
    pub(crate) renderer: RendererHandle,
    pub(crate) native: Box<dyn NativeWindow>,
}

impl Window {
    /// Creates a window using the profile of the current platform.
    pub fn new(config: &WindowConfig, parts: WindowParts, services: Rc<dyn AppServices>) -> Self {
        Self::with_profile(config, parts, services, PlatformProfile::current())
    }

    /// Creates a window with an explicit platform profile.
    pub fn with_profile(config: &WindowConfig, parts: WindowParts, services: Rc<dyn AppServices>, profile: PlatformProfile) -> Self {
        let WindowParts { mut native, renderer, mut ui, mut bridge } = parts;

        let requested = config.size.unwrap_or(size(0, 0));
        native.set_size(size(requested.width.max(10), requested.height.max(10)));
        if let Some(position) = config.position {
            native.set_position(position);
        }
        native.set_title(&config.title);
        native.set_topmost(config.flags.contains(WindowFlags::TOPMOST));

        let theme = services.theme().scaled(native.content_scale());
        let context = services.contexts().register();
        let id = services.register_window();

        let font_texture = {
            let _guard = services.contexts().activate(context);
            ui.style_mut().apply_theme(&theme);
            ui.input().install_key_map();
            upload_font_atlas(ui.as_mut(), bridge.as_mut(), &theme)
        };
        debug!(window = id.raw(), title = %config.title, "window created");

        Self {
            id,
            services,
            profile,
            context,
            title: config.title.clone(),
            theme,
            ui_scaling: 1.0,
            last_render_time: 0.0,
            mouse_mods: KeyModifier::NONE,
            layout_state: LayoutState::NeedsLayout,
            is_resizing: false,
            wants_auto_size_and_center: config.wants_auto_size_and_center(),
            tree: WidgetTree::default(),
            dialog: None,
            mouse_grabber: None,
            focus: None,
            deferred: DeferredQueues::default(),
            menu_hook: None,
            drop_hook: None,
            font_texture,
            ui,
            bridge,
            renderer,
            native,
        }
    }

    /// Identifier in the application registry.
    pub fn id(&self) -> WindowId { self.id }

    /// Title bar text.
    pub fn title(&self) -> &str { &self.title }

    /// Changes the title bar text.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.native.set_title(title);
    }

    /// Theme scaled for the window's display.
    pub fn theme(&self) -> &Theme { &self.theme }

    /// Renderer of the window.
    pub fn renderer(&self) -> RendererHandle { self.renderer.clone() }

    /// UI context of the window.
    pub fn ui(&mut self) -> &mut dyn UiContext { self.ui.as_mut() }

    /// Texture of the uploaded font atlas, if a font was loaded.
    pub fn font_texture(&self) -> Option<TextureId> { self.font_texture }

    /// Platform profile in use.
    pub fn profile(&self) -> &PlatformProfile { &self.profile }

    /// Position and size on screen, in OS units.
    pub fn os_frame(&self) -> Recti {
        let p = self.native.position();
        let s = self.native.size();
        rect(p.x, p.y, s.width, s.height)
    }

    /// Moves and resizes the window, in OS units.
    pub fn set_os_frame(&mut self, frame: Recti) {
        self.native.set_position(vec2(frame.x, frame.y));
        self.native.set_size(size(frame.width, frame.height));
    }

    /// Framebuffer size.
    pub fn size(&self) -> Dimensioni { self.native.framebuffer_size() }

    /// Resizes the window to `size` framebuffer pixels before the next frame.
    pub fn set_size(&mut self, size: Dimensioni) {
        self.deferred.push(DrainPoint::BeforeDraw, move |w: &mut Window| {
            let scaling = w.scaling();
            let os = crate::size((size.width as f32 / scaling) as i32, (size.height as f32 / scaling) as i32);
            w.native.set_size(os);
            w.on_resize();
        });
        self.post_redraw();
    }

    /// Resizes the window to its preferred size, measured during the next frame.
    pub fn size_to_fit(&mut self) {
        self.deferred.push(DrainPoint::DuringDraw, |w: &mut Window| {
            let preferred = w.calc_preferred_size();
            w.set_size(preferred);
        });
        self.post_redraw();
    }

    /// Framebuffer area below the menu bar.
    pub fn content_rect(&self) -> Recti {
        let size = self.size();
        let menu_height = match self.services.menubar() {
            Some(menu) => {
                let _guard = self.activate_context();
                menu.borrow().calc_height(&self.theme, self.ui.as_ref())
            }
            None => 0,
        };
        rect(0, menu_height, size.width, size.height - menu_height)
    }

    /// Framebuffer pixels per OS unit.
    pub fn scaling(&self) -> f32 { self.native.content_scale() }

    /// Converts a screen position to window coordinates, both in OS units.
    pub fn global_to_window_coord(&self, global_x: i32, global_y: i32) -> Vec2i {
        let p = self.native.position();
        vec2(global_x - p.x, global_y - p.y)
    }

    /// Returns `true` if the window is shown.
    pub fn is_visible(&self) -> bool { self.native.is_visible() }

    /// Shows or hides the window.
    pub fn show(&mut self, visible: bool) { self.native.set_visible(visible); }

    /// Asks the application to close the window.
    pub fn close(&mut self) { self.services.remove_window(self.id); }

    /// Brings the window to the front.
    pub fn raise_to_top(&mut self) { self.native.raise(); }

    /// Returns `true` if the window has keyboard focus.
    pub fn is_active_window(&self) -> bool { self.native.is_focused() }

    /// Requests a redraw from the event loop.
    pub fn post_redraw(&mut self) { self.native.post_expose_event(); }

    /// Forces a layout before the next frame is drawn.
    pub fn set_needs_layout(&mut self) { self.layout_state = LayoutState::NeedsLayout; }

    /// Returns `true` if a layout is pending.
    pub fn needs_layout(&self) -> bool { self.layout_state == LayoutState::NeedsLayout }

    /// Returns `true` during a resize streak.
    pub fn is_resizing(&self) -> bool { self.is_resizing }

    /// Modifiers currently held, as accumulated from input events.
    pub fn key_modifiers(&self) -> KeyModifier { self.mouse_mods }

    /// Widget receiving key events.
    pub fn focus_widget(&self) -> Option<WidgetRef> { self.focus }

    /// Moves keyboard focus.
    pub fn set_focus_widget(&mut self, widget: Option<WidgetRef>) { self.focus = widget; }

    /// Widget receiving every mouse event until the button is released.
    pub fn mouse_grabber(&self) -> Option<WidgetRef> { self.mouse_grabber }

    /// Top-level widgets.
    pub fn children(&self) -> &WidgetTree { &self.tree }

    /// Looks a top-level widget up.
    pub fn child_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> { self.tree.get_mut(id) }

    /// Adds a top-level widget above the existing ones.
    pub fn add_child(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = self.tree.add(widget);
        self.set_needs_layout();
        self.post_redraw();
        id
    }

    /// Removes a top-level widget, dropping any focus or grab it held.
    pub fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let removed = self.tree.remove(id)?;
        let target = Some(WidgetRef::Child(id));
        if self.focus == target {
            self.focus = None;
        }
        if self.mouse_grabber == target {
            self.mouse_grabber = None;
        }
        self.set_needs_layout();
        self.post_redraw();
        Some(removed)
    }

    /// Dialog being shown.
    pub fn dialog(&self) -> Option<&Dialog> { self.dialog.as_deref() }

    /// Shows `dialog` centered over the window, replacing any dialog already shown.
    pub fn show_dialog(&mut self, mut dialog: Dialog) {
        if self.dialog.is_some() {
            self.close_dialog();
        }
        let window_size = self.size();
        {
            let _guard = self.activate_context();
            dialog.on_will_show();
            let ctx = LayoutContext { theme: &self.theme, ui: self.ui.as_ref() };
            let current = dialog.frame();
            let frame = dialog_frame(window_size, size(current.width, current.height), dialog.calc_preferred_size(&ctx));
            dialog.set_frame(frame);
            dialog.layout(&ctx);
        }
        debug!(window = self.id.raw(), title = dialog.title(), "dialog shown");
        self.dialog = Some(Box::new(dialog));
        self.post_redraw();
    }

    /// Closes the dialog, if any, and returns it.
    pub fn close_dialog(&mut self) -> Option<Dialog> {
        let dialog = self.dialog.take()?;
        if self.focus == Some(WidgetRef::Dialog) {
            self.focus = None;
        }
        if self.mouse_grabber == Some(WidgetRef::Dialog) {
            self.mouse_grabber = None;
        }
        debug!(window = self.id.raw(), title = dialog.title(), "dialog closed");
        self.post_redraw();
        Some(*dialog)
    }

    /// Lays the children out in the content rectangle.
    pub fn layout(&mut self) {
        let content = self.content_rect();
        let _guard = self.activate_context();
        let ctx = LayoutContext { theme: &self.theme, ui: self.ui.as_ref() };
        self.tree.layout(content, &ctx);
    }

    /// Size covering every child at its preferred size, in framebuffer pixels.
    pub fn calc_preferred_size(&self) -> Dimensioni {
        let _guard = self.activate_context();
        let ctx = LayoutContext { theme: &self.theme, ui: self.ui.as_ref() };
        self.tree.calc_preferred_size(&ctx)
    }

    /// Queues a mutation for the next frame. Widgets use this to change the window from inside
    /// their own callbacks.
    pub fn defer<F: FnOnce(&mut Window) + 'static>(&mut self, point: DrainPoint, f: F) {
        self.deferred.push(point, f);
        self.post_redraw();
    }

    /// Installs the hook run when a menu item is selected.
    pub fn set_on_menu_item_selected(&mut self, f: impl FnMut(&mut Window, MenuItemId) + 'static) { self.menu_hook = Some(Box::new(f)); }

    /// Installs the hook run for each file dropped onto the window.
    pub fn set_on_drag_dropped(&mut self, f: impl FnMut(&mut Window, &Path) + 'static) { self.drop_hook = Some(Box::new(f)); }

    /// Makes the window's UI context current until the guard drops.
    pub fn activate_context(&self) -> ContextGuard { self.services.contexts().activate(self.context) }

    pub(crate) fn deferred_queues(&mut self) -> &mut DeferredQueues<Window> { &mut self.deferred }

    pub(crate) fn widget_mut(&mut self, target: WidgetRef) -> Option<&mut (dyn Widget + 'static)> {
        match target {
            WidgetRef::Child(id) => self.tree.get_mut(id),
            WidgetRef::Dialog => self.dialog.as_deref_mut().map(|d| d as &mut (dyn Widget + 'static)),
        }
    }

    pub(crate) fn menu_item_selected(&mut self, item: MenuItemId) {
        debug!(window = self.id.raw(), item = item.0, "menu item selected");
        if let Some(mut hook) = self.menu_hook.take() {
            hook(self, item);
            if self.menu_hook.is_none() {
                self.menu_hook = Some(hook);
            }
        }
    }

    pub(crate) fn drag_dropped(&mut self, path: &Path) {
        debug!(window = self.id.raw(), path = %path.display(), "file dropped");
        if let Some(mut hook) = self.drop_hook.take() {
            hook(self, path);
            if self.drop_hook.is_none() {
                self.drop_hook = Some(hook);
            }
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.mouse_grabber = None;
        self.focus = None;
        self.tree.clear();
        self.dialog = None;
        let _guard = self.activate_context();
        self.ui.shutdown();
    }
}

fn upload_font_atlas(ui: &mut dyn UiContext, bridge: &mut dyn UiBridge, theme: &Theme) -> Option<TextureId> {
    if theme.font_path.is_empty() {
        return None;
    }
    let Some(bitmap) = ui.load_font(&theme.font_path, theme.font_size as f32) else {
        warn!(path = %theme.font_path, "font could not be loaded, using the built-in font");
        return None;
    };
    match GlyphAtlas::from_bitmap(&bitmap) {
        Ok(atlas) => Some(bridge.create_atlas_texture(atlas)),
        Err(err) => {
            warn!(path = %theme.font_path, %err, "font atlas rejected");
            None
        }
    }
}
