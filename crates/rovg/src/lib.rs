#![deny(missing_docs)]
//! Safe Rust bindings for the OpenVG 1.1 vector graphics API.
//!
//! OpenVG is a Khronos specification for low-level, hardware-accelerable 2D
//! vector graphics. This crate loads a system OpenVG implementation at
//! runtime (see [VgConfig]) and wraps its C API in owned objects, typed
//! enums, and `Result`-returning calls.
//!
//! ```no_run
//! use rovg::{paint::PaintMode, path::PathSpec, Vg};
//!
//! # fn main() -> rovg::VgResult<()> {
//! let vg = Vg::load()?;
//! let ctx = vg.context();
//!
//! let path = vg.create_path(&PathSpec::default())?;
//! path.append_rect(10.0, 10.0, 100.0, 50.0)?;
//!
//! let paint = vg.create_paint()?;
//! paint.set_color([1.0, 0.25, 0.25, 1.0])?;
//! paint.set_as_fill()?;
//!
//! ctx.clear(rovg::Rect::new(0, 0, 640, 480))?;
//! path.draw(PaintMode::FILL)?;
//! vg.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! OpenVG itself has no notion of windows or surfaces; a context must be made
//! current on the calling thread through EGL (or a vendor equivalent) before
//! any call here will succeed. Calls made without one fail with
//! [VgError::NoContext].
//!
//! If you need the raw entry points instead, they live in the `rovg_sys`
//! crate.

use std::sync::Arc;

use rovg_sys::consts;

pub(crate) mod macros;

pub mod config;
pub mod context;
pub mod font;
pub mod image;
pub mod mask;
pub mod matrix;
pub mod paint;
pub mod path;
pub mod vgu;

mod error;
pub use error::*;

mod handle;
pub use handle::*;

pub use config::VgConfig;
pub use context::Context;
pub use font::Font;
pub use image::{Image, ImageFormat};
pub use mask::MaskLayer;
pub use matrix::{Angle, Matrix};
pub use paint::Paint;
pub use path::Path;

/// An axis-aligned rectangle in surface or image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Bottom edge (OpenVG surface coordinates grow upward).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Construct a rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

pub(crate) fn vg_bool(val: bool) -> rovg_sys::VGboolean {
    if val {
        consts::VG_TRUE
    } else {
        consts::VG_FALSE
    }
}

/// A loaded OpenVG implementation. The entry point of this crate.
///
/// `Vg` is a cheap clonable reference to the loaded library; every object
/// created through it keeps its own clone, so the library stays open for as
/// long as any handle is alive.
///
/// Note that OpenVG state (the context, the error trap, the current
/// matrices) is per-thread and lives in the implementation, not in this
/// type. Objects created here must be used on a thread with a current
/// context.
#[derive(Clone)]
pub struct Vg(Arc<rovg_sys::VgLib>);

impl Vg {
    /// Load the OpenVG implementation using the default [VgConfig].
    pub fn load() -> VgResult<Self> {
        Self::load_with(&VgConfig::default())
    }

    /// Load the OpenVG implementation described by `config`.
    ///
    /// Candidates are attempted in order; the error from the last failed
    /// candidate is returned if none of them loads.
    pub fn load_with(config: &VgConfig) -> VgResult<Self> {
        let mut last = None;
        for name in config.load_order() {
            match unsafe { rovg_sys::VgLib::load(&name, config.with_vgu) } {
                Ok(lib) => {
                    tracing::debug!(
                        library = ?name,
                        vgu = lib.vgu.is_some(),
                        "loaded OpenVG"
                    );
                    return Ok(Self(Arc::new(lib)));
                }
                Err(err) => {
                    tracing::debug!(
                        library = ?name,
                        %err,
                        "OpenVG candidate failed to load"
                    );
                    last = Some(err);
                }
            }
        }
        Err(match last {
            Some(err) => err.into(),
            None => VgError::data("no OpenVG library candidates to try"),
        })
    }

    /// Wrap an already-loaded library, e.g. one resolved by hand through
    /// `rovg_sys`.
    pub fn from_lib(lib: rovg_sys::VgLib) -> Self {
        Self(Arc::new(lib))
    }

    /// Access the context parameters and drawing-surface operations.
    pub fn context(&self) -> Context {
        Context::new(self.clone())
    }

    /// Create a path object per `spec`.
    pub fn create_path(&self, spec: &path::PathSpec) -> VgResult<Path> {
        Path::create(self, spec)
    }

    /// Create a paint object. Defaults to opaque black color paint.
    pub fn create_paint(&self) -> VgResult<Paint> {
        Paint::create(self)
    }

    /// Create an image object of `width` × `height` pixels in `format`.
    pub fn create_image(
        &self,
        format: ImageFormat,
        width: i32,
        height: i32,
        allowed_quality: context::ImageQuality,
    ) -> VgResult<Image> {
        Image::create(self, format, width, height, allowed_quality)
    }

    /// Create a font object sized for roughly `glyph_capacity_hint` glyphs.
    pub fn create_font(&self, glyph_capacity_hint: i32) -> VgResult<Font> {
        Font::create(self, glyph_capacity_hint)
    }

    /// Create a mask layer of `width` × `height` pixels.
    pub fn create_mask_layer(
        &self,
        width: i32,
        height: i32,
    ) -> VgResult<MaskLayer> {
        MaskLayer::create(self, width, height)
    }

    /// Force outstanding drawing requests to complete in finite time,
    /// without waiting for them.
    pub fn flush(&self) -> VgResult<()> {
        unsafe { (self.lib().vgFlush)() };
        self.check(())
    }

    /// Block until all outstanding drawing requests have completed.
    pub fn finish(&self) -> VgResult<()> {
        unsafe { (self.lib().vgFinish)() };
        self.check(())
    }

    /// The implementation vendor string, if the implementation provides one.
    pub fn vendor(&self) -> VgResult<Option<String>> {
        self.get_string(consts::VG_VENDOR)
    }

    /// The renderer string, if the implementation provides one.
    pub fn renderer(&self) -> VgResult<Option<String>> {
        self.get_string(consts::VG_RENDERER)
    }

    /// The OpenVG version string, if the implementation provides one.
    pub fn version(&self) -> VgResult<Option<String>> {
        self.get_string(consts::VG_VERSION)
    }

    /// The space-separated extension list, if the implementation provides
    /// one.
    pub fn extensions(&self) -> VgResult<Option<String>> {
        self.get_string(consts::VG_EXTENSIONS)
    }

    /// Whether drawing images of `format` is hardware accelerated.
    pub fn is_image_format_accelerated(
        &self,
        format: ImageFormat,
    ) -> VgResult<bool> {
        self.hardware_query(consts::VG_IMAGE_FORMAT_QUERY, format.raw() as i32)
    }

    /// Whether rendering paths of `datatype` is hardware accelerated.
    pub fn is_path_datatype_accelerated(
        &self,
        datatype: path::PathDatatype,
    ) -> VgResult<bool> {
        self.hardware_query(
            consts::VG_PATH_DATATYPE_QUERY,
            datatype.raw() as i32,
        )
    }

    /// Drain the error trap by hand.
    ///
    /// Every safe call already does this; the method exists for callers that
    /// mix in raw `rovg_sys` calls of their own.
    pub fn last_error(&self) -> Option<VgError> {
        VgError::from_code(unsafe { (self.lib().vgGetError)() })
    }

    fn get_string(&self, id: rovg_sys::VGenum) -> VgResult<Option<String>> {
        let ptr = unsafe { (self.lib().vgGetString)(id) };
        self.check(())?;
        if ptr.is_null() {
            return Ok(None);
        }
        let s = unsafe { std::ffi::CStr::from_ptr(ptr.cast()) };
        Ok(Some(s.to_string_lossy().into_owned()))
    }

    fn hardware_query(
        &self,
        key: rovg_sys::VGenum,
        setting: i32,
    ) -> VgResult<bool> {
        let result = unsafe { (self.lib().vgHardwareQuery)(key, setting) };
        self.check(result == consts::VG_HARDWARE_ACCELERATED)
    }

    pub(crate) fn lib(&self) -> &rovg_sys::VgLib {
        &self.0
    }

    /// Drain the error trap and wrap `out` accordingly. Called after every
    /// core native call made by this crate.
    pub(crate) fn check<T>(&self, out: T) -> VgResult<T> {
        match VgError::from_code(unsafe { (self.lib().vgGetError)() }) {
            None => Ok(out),
            Some(err) => Err(err),
        }
    }

    pub(crate) fn vgu_syms(&self) -> VgResult<rovg_sys::VguSyms> {
        self.lib().vgu.ok_or(VgError::VguUnavailable)
    }
}

impl std::fmt::Debug for Vg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vg")
            .field("vgu", &self.lib().vgu.is_some())
            .finish()
    }
}
