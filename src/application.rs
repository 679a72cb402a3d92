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
use std::{
    cell::{Cell, RefCell},
    time::Instant,
};

use crate::{ContextSwitch, MenuHandle, Theme};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Identifier of a window registered with the application.
pub struct WindowId(u32);

impl WindowId {
    /// Returns the raw numeric value.
    pub fn raw(self) -> u32 { self.0 }
}

/// Process-wide services a window relies on.
pub trait AppServices {
    /// Monotonic time in seconds.
    fn now(&self) -> f64;
    /// Unscaled application theme.
    fn theme(&self) -> Theme;
    /// Application menu, if one is installed.
    fn menubar(&self) -> Option<MenuHandle>;
    /// UI context switch shared by all windows.
    fn contexts(&self) -> &ContextSwitch;
    /// Registers a new window.
    fn register_window(&self) -> WindowId;
    /// Unregisters a window after the user closed it.
    fn remove_window(&self, id: WindowId);
}

/// Default [`AppServices`]: a steady clock, a theme, an optional menu and the window registry.
pub struct Application {
    start: Instant,
    theme: Theme,
    menubar: RefCell<Option<MenuHandle>>,
    contexts: ContextSwitch,
    windows: RefCell<Vec<WindowId>>,
    last_window: Cell<u32>,
}

impl Application {
    /// Creates an application with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            start: Instant::now(),
            theme,
            menubar: RefCell::new(None),
            contexts: ContextSwitch::new(),
            windows: RefCell::new(Vec::new()),
            last_window: Cell::new(0),
        }
    }

    /// Installs or removes the application menu.
    pub fn set_menubar(&self, menu: Option<MenuHandle>) { *self.menubar.borrow_mut() = menu; }

    /// Windows currently registered.
    pub fn window_ids(&self) -> Vec<WindowId> { self.windows.borrow().clone() }

    /// The event loop keeps running while at least one window is open.
    pub fn is_running(&self) -> bool { !self.windows.borrow().is_empty() }
}

impl Default for Application {
    fn default() -> Self { Self::new(Theme::default()) }
}

impl AppServices for Application {
    fn now(&self) -> f64 { self.start.elapsed().as_secs_f64() }
    fn theme(&self) -> Theme { self.theme.clone() }
    fn menubar(&self) -> Option<MenuHandle> { self.menubar.borrow().clone() }
    fn contexts(&self) -> &ContextSwitch { &self.contexts }

    fn register_window(&self) -> WindowId {
        let id = WindowId(self.last_window.get() + 1);
        self.last_window.set(id.0);
        self.windows.borrow_mut().push(id);
        id
    }

    fn remove_window(&self, id: WindowId) {
        self.windows.borrow_mut().retain(|w| *w != id);
        tracing::debug!(window = id.raw(), "window removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_tracks_open_windows() {
        let app = Application::default();
        assert!(!app.is_running());
        let a = app.register_window();
        let b = app.register_window();
        assert_ne!(a, b);
        assert_eq!(app.window_ids(), vec![a, b]);
        app.remove_window(a);
        assert_eq!(app.window_ids(), vec![b]);
        app.remove_window(b);
        assert!(!app.is_running());
    }

    #[test]
    fn clock_is_monotonic() {
        let app = Application::default();
        let t0 = app.now();
        let t1 = app.now();
        assert!(t1 >= t0);
    }
}
