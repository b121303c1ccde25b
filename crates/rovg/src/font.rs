//! Font objects and glyph drawing.
//!
//! An OpenVG font is a dictionary from glyph indices to path or image
//! glyphs. Text layout (shaping, index mapping, kerning) happens outside
//! OpenVG; the implementation only draws the glyphs it is handed, advancing
//! the [glyph origin](crate::Context::glyph_origin) by each glyph's
//! escapement.

use std::marker::PhantomData;

use rovg_sys::consts;

use crate::{
    paint::PaintMode, vg_bool, FontHandle, Handle, Image, Path, Vg, VgError,
    VgResult,
};

/// An owned OpenVG font object.
///
/// Created through [Vg::create_font]; the native object is destroyed on
/// drop. Glyph definitions keep their path or image alive inside the
/// implementation, so dropping a [Path] or [Image] after
/// [Font::set_glyph_to_path] / [Font::set_glyph_to_image] is fine.
#[derive(Debug)]
pub struct Font {
    vg: Vg,
    handle: FontHandle,
    _not_send: PhantomData<*const ()>,
}

impl Font {
    pub(crate) fn create(
        vg: &Vg,
        glyph_capacity_hint: i32,
    ) -> VgResult<Self> {
        let raw = unsafe { (vg.lib().vgCreateFont)(glyph_capacity_hint) };
        vg.check(())?;
        let handle =
            Handle::new(raw).ok_or(VgError::CreationFailed { what: "font" })?;
        Ok(Self {
            vg: vg.clone(),
            handle: handle.into(),
            _not_send: PhantomData,
        })
    }

    /// The underlying handle.
    pub fn handle(&self) -> FontHandle {
        self.handle
    }

    /// The number of glyphs currently defined in this font.
    pub fn num_glyphs(&self) -> VgResult<i32> {
        let value = unsafe {
            (self.vg.lib().vgGetParameteri)(
                self.handle.raw(),
                consts::VG_FONT_NUM_GLYPHS,
            )
        };
        self.vg.check(value)
    }

    /// Define `glyph_index` as a path glyph.
    ///
    /// `origin` is the glyph origin within the path's coordinate system and
    /// `escapement` the advance to the next glyph origin. `hinted` marks
    /// paths with device-resolution hinting baked in, exempting them from
    /// auto-hinting at draw time.
    pub fn set_glyph_to_path(
        &self,
        glyph_index: u32,
        path: &Path,
        hinted: bool,
        origin: [f32; 2],
        escapement: [f32; 2],
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgSetGlyphToPath)(
                self.handle.raw(),
                glyph_index,
                path.handle().raw(),
                vg_bool(hinted),
                origin.as_ptr(),
                escapement.as_ptr(),
            )
        };
        self.vg.check(())
    }

    /// Define `glyph_index` as an image glyph.
    pub fn set_glyph_to_image(
        &self,
        glyph_index: u32,
        image: &Image,
        origin: [f32; 2],
        escapement: [f32; 2],
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgSetGlyphToImage)(
                self.handle.raw(),
                glyph_index,
                image.handle().raw(),
                origin.as_ptr(),
                escapement.as_ptr(),
            )
        };
        self.vg.check(())
    }

    /// Delete the definition of `glyph_index` from this font.
    pub fn clear_glyph(&self, glyph_index: u32) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgClearGlyph)(self.handle.raw(), glyph_index)
        };
        self.vg.check(())
    }

    /// Draw one glyph at the current glyph origin, advancing it by the
    /// glyph's escapement.
    pub fn draw_glyph(
        &self,
        glyph_index: u32,
        paint_modes: PaintMode,
        allow_auto_hinting: bool,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgDrawGlyph)(
                self.handle.raw(),
                glyph_index,
                paint_modes.bits(),
                vg_bool(allow_auto_hinting),
            )
        };
        self.vg.check(())
    }

    /// Draw a glyph run.
    ///
    /// `adjustments_x`/`adjustments_y`, when given, are per-glyph additions
    /// to the escapement (kerning et al) and must be exactly as long as
    /// `glyph_indices`.
    pub fn draw_glyphs(
        &self,
        glyph_indices: &[u32],
        adjustments_x: Option<&[f32]>,
        adjustments_y: Option<&[f32]>,
        paint_modes: PaintMode,
        allow_auto_hinting: bool,
    ) -> VgResult<()> {
        validate_adjustments(
            glyph_indices.len(),
            adjustments_x.map(<[f32]>::len),
            adjustments_y.map(<[f32]>::len),
        )?;
        if glyph_indices.is_empty() {
            return Ok(());
        }
        unsafe {
            (self.vg.lib().vgDrawGlyphs)(
                self.handle.raw(),
                glyph_indices.len() as i32,
                glyph_indices.as_ptr(),
                adjustments_x.map_or(std::ptr::null(), <[f32]>::as_ptr),
                adjustments_y.map_or(std::ptr::null(), <[f32]>::as_ptr),
                paint_modes.bits(),
                vg_bool(allow_auto_hinting),
            )
        };
        self.vg.check(())
    }
}

fn validate_adjustments(
    glyphs: usize,
    adjustments_x: Option<usize>,
    adjustments_y: Option<usize>,
) -> VgResult<()> {
    for (axis, len) in [("x", adjustments_x), ("y", adjustments_y)] {
        if let Some(len) = len {
            if len != glyphs {
                return Err(VgError::data(format!(
                    "{glyphs} glyph(s) but {len} {axis} adjustment(s)"
                )));
            }
        }
    }
    Ok(())
}

impl Drop for Font {
    fn drop(&mut self) {
        unsafe { (self.vg.lib().vgDestroyFont)(self.handle.raw()) };
        if let Some(err) = self.vg.last_error() {
            tracing::debug!(handle = %self.handle, %err, "vgDestroyFont failed");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn adjustment_lengths_must_match() {
        assert!(validate_adjustments(3, None, None).is_ok());
        assert!(validate_adjustments(3, Some(3), None).is_ok());
        assert!(validate_adjustments(3, Some(3), Some(3)).is_ok());
        assert!(validate_adjustments(3, Some(2), None).is_err());
        assert!(validate_adjustments(3, Some(3), Some(4)).is_err());
        assert!(validate_adjustments(0, Some(0), Some(0)).is_ok());
    }
}
