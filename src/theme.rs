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
use crate::{color, Color};

#[derive(Clone, Debug, PartialEq)]
/// Colors and metrics shared by every widget of a window.
pub struct Theme {
    /// Window background.
    pub background_color: Color,
    /// TrueType font used by the UI; empty keeps the UI library's built-in font.
    pub font_path: String,
    /// Font size in pixels; also the `em` unit.
    pub font_size: i32,
    /// Margin used by layouts.
    pub default_margin: i32,
    /// Spacing between layout cells.
    pub default_layout_spacing: i32,
    /// Default text color.
    pub text_color: Color,
    /// Width of control borders.
    pub border_width: i32,
    /// Rounding of control borders.
    pub border_radius: i32,
    /// Color of control borders.
    pub border_color: Color,
    /// Button background.
    pub button_color: Color,
    /// Button background while hovered.
    pub button_hover_color: Color,
    /// Button background while pressed.
    pub button_active_color: Color,
    /// Check mark of checkboxes.
    pub checkbox_check_color: Color,
    /// Combobox/frame background.
    pub combobox_background_color: Color,
    /// Combobox/frame background while hovered.
    pub combobox_hover_color: Color,
    /// Slider grab handle.
    pub slider_grab_color: Color,
    /// Inactive tab.
    pub tab_inactive_color: Color,
    /// Hovered tab.
    pub tab_hover_color: Color,
    /// Selected tab.
    pub tab_active_color: Color,
    /// Border width of dialogs.
    pub dialog_border_width: i32,
    /// Border rounding of dialogs.
    pub dialog_border_radius: i32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_color: color(45, 45, 45, 255),
            font_path: String::new(),
            font_size: 16,
            default_margin: 8,
            default_layout_spacing: 6,
            text_color: color(230, 230, 230, 255),
            border_width: 1,
            border_radius: 3,
            border_color: color(128, 128, 128, 255),
            button_color: color(102, 102, 102, 255),
            button_hover_color: color(128, 128, 128, 255),
            button_active_color: color(89, 89, 89, 255),
            checkbox_check_color: color(230, 230, 230, 255),
            combobox_background_color: color(102, 102, 102, 255),
            combobox_hover_color: color(128, 128, 128, 255),
            slider_grab_color: color(179, 179, 179, 255),
            tab_inactive_color: color(102, 102, 102, 255),
            tab_hover_color: color(128, 128, 128, 255),
            tab_active_color: color(153, 153, 153, 255),
            dialog_border_width: 1,
            dialog_border_radius: 10,
        }
    }
}

impl Theme {
    /// Returns a copy with the font size and spacing metrics scaled for a display scale factor.
    pub fn scaled(&self, scaling: f32) -> Self {
        let scale = |v: i32| (v as f32 * scaling) as i32;
        Self {
            font_size: scale(self.font_size),
            default_margin: scale(self.default_margin),
            default_layout_spacing: scale(self.default_layout_spacing),
            ..self.clone()
        }
    }
}

#[derive(PartialEq, Copy, Clone, Debug)]
#[repr(u32)]
/// Identifiers for the UI library colors the window configures.
pub enum StyleColor {
    /// Number of color entries in [`UiStyle::colors`].
    Max = 16,
    /// Active tab.
    TabActive = 15,
    /// Hovered tab.
    TabHovered = 14,
    /// Inactive tab.
    Tab = 13,
    /// Slider handle while dragged.
    SliderGrabActive = 12,
    /// Slider handle.
    SliderGrab = 11,
    /// Frame background while pressed.
    FrameBgActive = 10,
    /// Frame background while hovered.
    FrameBgHovered = 9,
    /// Frame background.
    FrameBg = 8,
    /// Check mark.
    CheckMark = 7,
    /// Button while pressed.
    ButtonActive = 6,
    /// Button while hovered.
    ButtonHovered = 5,
    /// Button.
    Button = 4,
    /// Borders.
    Border = 3,
    /// Text.
    Text = 2,
    /// Host window background.
    WindowBg = 1,
    /// Unused slot kept for table alignment.
    None = 0,
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Style state of the immediate-mode UI library that the window drives.
pub struct UiStyle {
    /// Padding inside host windows.
    pub window_padding: (f32, f32),
    /// Rounding of host windows.
    pub window_rounding: f32,
    /// Border width of host windows.
    pub window_border_size: f32,
    /// Border width of controls.
    pub frame_border_size: f32,
    /// Rounding of controls; scales with the display.
    pub frame_rounding: f32,
    /// Palette indexed by [`StyleColor`].
    pub colors: [Color; StyleColor::Max as usize],
}

impl Default for UiStyle {
    fn default() -> Self {
        Self {
            window_padding: (8.0, 8.0),
            window_rounding: 7.0,
            window_border_size: 1.0,
            frame_border_size: 0.0,
            frame_rounding: 0.0,
            colors: [Color::default(); StyleColor::Max as usize],
        }
    }
}

impl UiStyle {
    /// Configures borderless host windows and the palette from a theme.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.window_padding = (0.0, 0.0);
        self.window_rounding = 0.0;
        self.window_border_size = 0.0;
        self.frame_border_size = theme.border_width as f32;
        self.frame_rounding = theme.border_radius as f32;
        self.set_color(StyleColor::WindowBg, theme.background_color);
        self.set_color(StyleColor::Text, theme.text_color);
        self.set_color(StyleColor::Border, theme.border_color);
        self.set_color(StyleColor::Button, theme.button_color);
        self.set_color(StyleColor::ButtonHovered, theme.button_hover_color);
        self.set_color(StyleColor::ButtonActive, theme.button_active_color);
        self.set_color(StyleColor::CheckMark, theme.checkbox_check_color);
        self.set_color(StyleColor::FrameBg, theme.combobox_background_color);
        self.set_color(StyleColor::FrameBgHovered, theme.combobox_hover_color);
        self.set_color(StyleColor::FrameBgActive, theme.combobox_hover_color);
        self.set_color(StyleColor::SliderGrab, theme.slider_grab_color);
        self.set_color(StyleColor::SliderGrabActive, theme.slider_grab_color);
        self.set_color(StyleColor::Tab, theme.tab_inactive_color);
        self.set_color(StyleColor::TabHovered, theme.tab_hover_color);
        self.set_color(StyleColor::TabActive, theme.tab_active_color);
    }

    /// Multiplies the metrics that follow the display scale. Border widths stay thin on purpose.
    pub fn scale_metrics(&mut self, factor: f32) { self.frame_rounding *= factor; }

    /// Returns a palette entry.
    pub fn color(&self, id: StyleColor) -> Color { self.colors[id as usize] }

    /// Replaces a palette entry.
    pub fn set_color(&mut self, id: StyleColor, c: Color) { self.colors[id as usize] = c; }
}
