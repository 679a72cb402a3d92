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
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::{Dimensioni, DrawData};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle referencing a renderer-owned texture.
pub struct TextureId(pub u32);

impl TextureId {
    /// Returns the raw numeric identifier stored inside the handle.
    pub fn raw(self) -> u32 { self.0 }
}

/// Trait implemented by the engine that turns a window's scene and UI geometry into pixels.
pub trait Renderer {
    /// Starts a frame.
    fn begin_frame(&mut self);
    /// Submits the frame's views, the UI included.
    fn draw(&mut self);
    /// Presents the frame.
    fn end_frame(&mut self);
    /// Recreates the swap chain after the native surface changed size.
    fn update_swap_chain(&mut self);
    /// Notifies the renderer of the new content size in framebuffer pixels.
    fn on_content_resized(&mut self, size: Dimensioni);
}

/// Shared handle to the window's [`Renderer`]. Scene widgets clone it from the draw context.
#[derive(Clone)]
pub struct RendererHandle {
    handle: Arc<RwLock<dyn Renderer>>,
}

impl RendererHandle {
    /// Wraps a renderer inside an [`Arc<RwLock<...>>`] so it can be shared.
    pub fn new<R: Renderer + 'static>(renderer: R) -> Self {
        let handle: Arc<RwLock<dyn Renderer>> = Arc::new(RwLock::new(renderer));
        Self { handle }
    }

    /// Executes the provided closure with a mutable reference to the renderer.
    pub fn scope_mut<Res, F: FnOnce(&mut dyn Renderer) -> Res>(&mut self, f: F) -> Res {
        match self.handle.write() {
            Ok(mut guard) => f(&mut *guard),
            // a panic in another scope leaves the renderer usable
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }

    /// Runs one full render: begin, draw and end.
    pub fn render_frame(&mut self) {
        self.scope_mut(|r| {
            r.begin_frame();
            r.draw();
            r.end_frame();
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Raw font atlas bitmap produced by the UI library.
pub struct FontBitmap {
    /// Pixel bytes, row-major.
    pub pixels: Vec<u8>,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Bytes per pixel of `pixels`.
    pub bytes_per_pixel: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Reasons a font bitmap cannot become a glyph atlas.
pub enum AtlasError {
    /// Width or height is not positive.
    #[error("atlas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Reported width.
        width: i32,
        /// Reported height.
        height: i32,
    },
    /// Only one (alpha) or four (RGBA) bytes per pixel are accepted.
    #[error("unsupported atlas pixel size: {0} bytes")]
    UnsupportedPixelSize(i32),
    /// The pixel buffer does not match the dimensions.
    #[error("expected {expected} atlas bytes, received {actual}")]
    LengthMismatch {
        /// Bytes implied by the dimensions.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Glyph atlas in RGBA8888 ready for upload: white texels carrying the glyph coverage in alpha.
pub struct GlyphAtlas {
    width: i32,
    height: i32,
    rgba: Vec<u8>,
}

impl GlyphAtlas {
    /// Validates a raw bitmap and expands alpha-8 coverage to RGBA.
    pub fn from_bitmap(bitmap: &FontBitmap) -> Result<Self, AtlasError> {
        let FontBitmap { pixels, width, height, bytes_per_pixel } = bitmap;
        if *width <= 0 || *height <= 0 {
            return Err(AtlasError::InvalidDimensions { width: *width, height: *height });
        }
        if *bytes_per_pixel != 1 && *bytes_per_pixel != 4 {
            return Err(AtlasError::UnsupportedPixelSize(*bytes_per_pixel));
        }
        let expected = *width as usize * *height as usize * *bytes_per_pixel as usize;
        if pixels.len() != expected {
            return Err(AtlasError::LengthMismatch { expected, actual: pixels.len() });
        }
        let rgba = match *bytes_per_pixel {
            1 => {
                let mut rgba = Vec::with_capacity(pixels.len() * 4);
                for &a in pixels {
                    rgba.extend_from_slice(&[0xFF, 0xFF, 0xFF, a]);
                }
                rgba
            }
            _ => pixels.clone(),
        };
        Ok(Self { width: *width, height: *height, rgba })
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 { self.width }

    /// Height in pixels.
    pub fn height(&self) -> i32 { self.height }

    /// RGBA8888 pixel data.
    pub fn pixels(&self) -> &[u8] { &self.rgba }
}

/// Uploads the UI library's output to the renderer.
pub trait UiBridge {
    /// Receives the geometry of the latest UI frame.
    fn update(&mut self, data: &DrawData);
    /// Notifies the bridge that the framebuffer changed size.
    fn on_window_resized(&mut self, size: Dimensioni);
    /// Uploads the font atlas and returns its texture.
    fn create_atlas_texture(&mut self, atlas: GlyphAtlas) -> TextureId;
}
