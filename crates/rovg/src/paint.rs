//! Paint objects: solid colors, gradients, and patterns.

use std::marker::PhantomData;

use rovg_sys::{consts, VGint};

use crate::{
    macros::imp_enum, vg_bool, Handle, Image, PaintHandle, Vg, VgError,
    VgResult,
};

bitflags::bitflags! {
    /// Which of stroking and filling an operation applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PaintMode: u32 {
        /// The stroke paint.
        const STROKE = consts::VG_STROKE_PATH;
        /// The fill paint.
        const FILL = consts::VG_FILL_PATH;
    }
}

imp_enum! {
    /// The kind of paint a paint object applies.
    PaintType: "VGPaintType" {
        /// A single solid color.
        Color = consts::VG_PAINT_TYPE_COLOR,
        /// A linear gradient between two points.
        LinearGradient = consts::VG_PAINT_TYPE_LINEAR_GRADIENT,
        /// A radial gradient around a center and focus.
        RadialGradient = consts::VG_PAINT_TYPE_RADIAL_GRADIENT,
        /// A tiled image pattern.
        Pattern = consts::VG_PAINT_TYPE_PATTERN,
    }
}

imp_enum! {
    /// What a gradient does beyond the ends of its color ramp.
    SpreadMode: "VGColorRampSpreadMode" {
        /// Extend the terminal stop colors.
        Pad = consts::VG_COLOR_RAMP_SPREAD_PAD,
        /// Repeat the ramp.
        Repeat = consts::VG_COLOR_RAMP_SPREAD_REPEAT,
        /// Repeat the ramp, reflecting every other copy.
        Reflect = consts::VG_COLOR_RAMP_SPREAD_REFLECT,
    }
}

imp_enum! {
    /// How pattern paint fills space outside its source image.
    TilingMode: "VGTilingMode" {
        /// Use the tile fill color.
        Fill = consts::VG_TILE_FILL,
        /// Extend the image's edge colors.
        Pad = consts::VG_TILE_PAD,
        /// Repeat the image.
        Repeat = consts::VG_TILE_REPEAT,
        /// Repeat the image, reflecting every other copy.
        Reflect = consts::VG_TILE_REFLECT,
    }
}

/// One stop of a gradient color ramp.
///
/// On the wire a stop is five floats: the offset in `[0, 1]` followed by the
/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, 0 at the start and 1 at the end.
    pub offset: f32,
    /// RGBA color at this stop.
    pub color: [f32; 4],
}

/// The geometry of a linear gradient, in paint coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    /// The gradient start point.
    pub start: (f32, f32),
    /// The gradient end point.
    pub end: (f32, f32),
}

/// The geometry of a radial gradient, in paint coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    /// The center of the gradient circle.
    pub center: (f32, f32),
    /// The focal point. Must lie within the circle.
    pub focus: (f32, f32),
    /// The circle radius. Must be positive.
    pub radius: f32,
}

/// Pack a float RGBA color into the `sRGBA_8888` integer layout used by the
/// non-parameter color fast path. Components are clamped to `[0, 1]`.
pub fn pack_rgba(rgba: [f32; 4]) -> u32 {
    let mut out = 0u32;
    for component in rgba {
        let byte = (component.clamp(0.0, 1.0) * 255.0).round() as u32;
        out = out << 8 | byte;
    }
    out
}

/// Unpack an `sRGBA_8888` integer color into float RGBA.
pub fn unpack_rgba(rgba: u32) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (i, component) in out.iter_mut().enumerate() {
        let byte = (rgba >> (24 - 8 * i)) & 0xFF;
        *component = byte as f32 / 255.0;
    }
    out
}

/// An owned OpenVG paint object.
///
/// A freshly created paint is opaque black color paint. A paint object does
/// nothing until it is [set as current](Paint::set_as) for filling,
/// stroking, or both; it stays current until replaced, independently of this
/// value's lifetime.
#[derive(Debug)]
pub struct Paint {
    vg: Vg,
    handle: PaintHandle,
    _not_send: PhantomData<*const ()>,
}

impl Paint {
    pub(crate) fn create(vg: &Vg) -> VgResult<Self> {
        let raw = unsafe { (vg.lib().vgCreatePaint)() };
        vg.check(())?;
        let handle = Handle::new(raw)
            .ok_or(VgError::CreationFailed { what: "paint" })?;
        Ok(Self {
            vg: vg.clone(),
            handle: handle.into(),
            _not_send: PhantomData,
        })
    }

    /// The underlying handle.
    pub fn handle(&self) -> PaintHandle {
        self.handle
    }

    /// Set this paint as current for the given modes.
    pub fn set_as(&self, modes: PaintMode) -> VgResult<()> {
        unsafe { (self.vg.lib().vgSetPaint)(self.handle.raw(), modes.bits()) };
        self.vg.check(())
    }

    /// Set this paint as the current fill paint.
    pub fn set_as_fill(&self) -> VgResult<()> {
        self.set_as(PaintMode::FILL)
    }

    /// Set this paint as the current stroke paint.
    pub fn set_as_stroke(&self) -> VgResult<()> {
        self.set_as(PaintMode::STROKE)
    }

    /// Whether this paint object is current for `mode`.
    ///
    /// `mode` must name exactly one paint mode. Handles are compared, so the
    /// answer is about this native object, not this particular Rust value.
    pub fn is_current(&self, mode: PaintMode) -> VgResult<bool> {
        let current = unsafe { (self.vg.lib().vgGetPaint)(mode.bits()) };
        self.vg.check(current == self.handle.raw())
    }

    /// The kind of paint this object applies.
    pub fn paint_type(&self) -> VgResult<PaintType> {
        PaintType::from_raw_checked(self.get_parami(consts::VG_PAINT_TYPE)? as u32)
    }

    /// Select the kind of paint this object applies.
    pub fn set_paint_type(&self, ty: PaintType) -> VgResult<()> {
        self.set_parami(consts::VG_PAINT_TYPE, ty.raw() as i32)
    }

    /// The solid paint color, RGBA.
    pub fn color(&self) -> VgResult<[f32; 4]> {
        self.get_paramfv_n(consts::VG_PAINT_COLOR)
    }

    /// Set the solid paint color, RGBA in `[0, 1]` per component.
    pub fn set_color(&self, rgba: [f32; 4]) -> VgResult<()> {
        self.set_paramfv(consts::VG_PAINT_COLOR, &rgba)
    }

    /// The solid paint color as packed `sRGBA_8888`.
    pub fn packed_color(&self) -> VgResult<u32> {
        let rgba = unsafe { (self.vg.lib().vgGetColor)(self.handle.raw()) };
        self.vg.check(rgba)
    }

    /// Set the solid paint color as packed `sRGBA_8888`. Equivalent to
    /// [Paint::set_color] with the unpacked components.
    pub fn set_packed_color(&self, rgba: u32) -> VgResult<()> {
        unsafe { (self.vg.lib().vgSetColor)(self.handle.raw(), rgba) };
        self.vg.check(())
    }

    /// The gradient color ramp stops.
    pub fn color_ramp_stops(&self) -> VgResult<Vec<GradientStop>> {
        let raw = self.get_paramfv(consts::VG_PAINT_COLOR_RAMP_STOPS)?;
        if raw.len() % 5 != 0 {
            return Err(VgError::data(format!(
                "color ramp stop vector of length {} is not a multiple of 5",
                raw.len()
            )));
        }
        Ok(raw
            .chunks_exact(5)
            .map(|c| GradientStop {
                offset: c[0],
                color: [c[1], c[2], c[3], c[4]],
            })
            .collect())
    }

    /// Replace the gradient color ramp stops.
    ///
    /// Stops beyond the implementation's
    /// [maximum](crate::Context::max_color_ramp_stops) are dropped by the
    /// implementation.
    pub fn set_color_ramp_stops(
        &self,
        stops: &[GradientStop],
    ) -> VgResult<()> {
        let mut raw = Vec::with_capacity(stops.len() * 5);
        for stop in stops {
            raw.push(stop.offset);
            raw.extend_from_slice(&stop.color);
        }
        self.set_paramfv(consts::VG_PAINT_COLOR_RAMP_STOPS, &raw)
    }

    /// What the gradient does beyond the ends of its color ramp.
    pub fn spread_mode(&self) -> VgResult<SpreadMode> {
        SpreadMode::from_raw_checked(
            self.get_parami(consts::VG_PAINT_COLOR_RAMP_SPREAD_MODE)? as u32,
        )
    }

    /// Set the color ramp spread mode.
    pub fn set_spread_mode(&self, mode: SpreadMode) -> VgResult<()> {
        self.set_parami(
            consts::VG_PAINT_COLOR_RAMP_SPREAD_MODE,
            mode.raw() as i32,
        )
    }

    /// Whether ramp stop colors are premultiplied by alpha.
    pub fn color_ramp_premultiplied(&self) -> VgResult<bool> {
        Ok(self.get_parami(consts::VG_PAINT_COLOR_RAMP_PREMULTIPLIED)? != 0)
    }

    /// Set whether ramp stop colors are premultiplied by alpha.
    pub fn set_color_ramp_premultiplied(
        &self,
        premultiplied: bool,
    ) -> VgResult<()> {
        self.set_parami(
            consts::VG_PAINT_COLOR_RAMP_PREMULTIPLIED,
            vg_bool(premultiplied) as i32,
        )
    }

    /// The linear gradient geometry.
    pub fn linear_gradient(&self) -> VgResult<LinearGradient> {
        let [x0, y0, x1, y1] =
            self.get_paramfv_n(consts::VG_PAINT_LINEAR_GRADIENT)?;
        Ok(LinearGradient {
            start: (x0, y0),
            end: (x1, y1),
        })
    }

    /// Set the linear gradient geometry.
    pub fn set_linear_gradient(
        &self,
        gradient: LinearGradient,
    ) -> VgResult<()> {
        let (x0, y0) = gradient.start;
        let (x1, y1) = gradient.end;
        self.set_paramfv(consts::VG_PAINT_LINEAR_GRADIENT, &[x0, y0, x1, y1])
    }

    /// The radial gradient geometry.
    pub fn radial_gradient(&self) -> VgResult<RadialGradient> {
        let [cx, cy, fx, fy, r] =
            self.get_paramfv_n(consts::VG_PAINT_RADIAL_GRADIENT)?;
        Ok(RadialGradient {
            center: (cx, cy),
            focus: (fx, fy),
            radius: r,
        })
    }

    /// Set the radial gradient geometry.
    pub fn set_radial_gradient(
        &self,
        gradient: RadialGradient,
    ) -> VgResult<()> {
        let (cx, cy) = gradient.center;
        let (fx, fy) = gradient.focus;
        self.set_paramfv(
            consts::VG_PAINT_RADIAL_GRADIENT,
            &[cx, cy, fx, fy, gradient.radius],
        )
    }

    /// Use `image` as the pattern for this paint.
    ///
    /// The image stays attached in the implementation until replaced, and
    /// cannot be used as a rendering target while attached.
    pub fn set_pattern(&self, image: &Image) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgPaintPattern)(
                self.handle.raw(),
                image.handle().raw(),
            )
        };
        self.vg.check(())
    }

    /// How pattern paint fills space outside its source image.
    pub fn tiling_mode(&self) -> VgResult<TilingMode> {
        TilingMode::from_raw_checked(
            self.get_parami(consts::VG_PAINT_PATTERN_TILING_MODE)? as u32,
        )
    }

    /// Set the pattern tiling mode.
    pub fn set_tiling_mode(&self, mode: TilingMode) -> VgResult<()> {
        self.set_parami(
            consts::VG_PAINT_PATTERN_TILING_MODE,
            mode.raw() as i32,
        )
    }

    fn get_parami(&self, param: VGint) -> VgResult<i32> {
        let value = unsafe {
            (self.vg.lib().vgGetParameteri)(self.handle.raw(), param)
        };
        self.vg.check(value)
    }

    fn set_parami(&self, param: VGint, value: i32) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgSetParameteri)(self.handle.raw(), param, value)
        };
        self.vg.check(())
    }

    fn get_paramfv(&self, param: VGint) -> VgResult<Vec<f32>> {
        let count = unsafe {
            (self.vg.lib().vgGetParameterVectorSize)(self.handle.raw(), param)
        };
        self.vg.check(())?;
        let mut out = vec![0.0f32; count.max(0) as usize];
        unsafe {
            (self.vg.lib().vgGetParameterfv)(
                self.handle.raw(),
                param,
                count,
                out.as_mut_ptr(),
            )
        };
        self.vg.check(out)
    }

    fn get_paramfv_n<const N: usize>(
        &self,
        param: VGint,
    ) -> VgResult<[f32; N]> {
        let mut out = [0.0f32; N];
        unsafe {
            (self.vg.lib().vgGetParameterfv)(
                self.handle.raw(),
                param,
                N as i32,
                out.as_mut_ptr(),
            )
        };
        self.vg.check(out)
    }

    fn set_paramfv(&self, param: VGint, values: &[f32]) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgSetParameterfv)(
                self.handle.raw(),
                param,
                values.len() as i32,
                values.as_ptr(),
            )
        };
        self.vg.check(())
    }
}

impl Drop for Paint {
    fn drop(&mut self) {
        unsafe { (self.vg.lib().vgDestroyPaint)(self.handle.raw()) };
        if let Some(err) = self.vg.last_error() {
            tracing::debug!(handle = %self.handle, %err, "vgDestroyPaint failed");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pack_rgba_fixtures() {
        const F: &[([f32; 4], u32)] = &[
            ([0.0, 0.0, 0.0, 0.0], 0x0000_0000),
            ([1.0, 1.0, 1.0, 1.0], 0xFFFF_FFFF),
            ([1.0, 0.0, 0.0, 1.0], 0xFF00_00FF),
            ([0.0, 1.0, 0.0, 0.0], 0x00FF_0000),
            // Out-of-range components clamp instead of wrapping.
            ([2.0, -1.0, 0.0, 1.0], 0xFF00_00FF),
        ];

        for (rgba, packed) in F.iter() {
            assert_eq!(*packed, pack_rgba(*rgba));
        }
    }

    #[test]
    fn unpack_then_pack_is_identity() {
        for packed in [0x0000_0000u32, 0xFFFF_FFFF, 0x8040_20FF, 0x0102_0304] {
            assert_eq!(packed, pack_rgba(unpack_rgba(packed)));
        }
    }

    #[test]
    fn paint_mode_bits_match_header() {
        assert_eq!(1, PaintMode::STROKE.bits());
        assert_eq!(2, PaintMode::FILL.bits());
        assert_eq!(3, (PaintMode::STROKE | PaintMode::FILL).bits());
    }

    #[test]
    fn paint_enum_fixtures() {
        assert_eq!(0x1B00, PaintType::Color.raw());
        assert_eq!(0x1B03, PaintType::Pattern.raw());
        assert_eq!(0x1C02, SpreadMode::Reflect.raw());
        assert_eq!(0x1D00, TilingMode::Fill.raw());
        assert_eq!(None, PaintType::from_raw(0x1B04));
    }
}
