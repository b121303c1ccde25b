//! Context parameters and drawing-surface operations.
//!
//! OpenVG keeps almost all of its mutable state in the current context:
//! stroke parameters, blend mode, scissoring, the clear color, and so on.
//! [Context] exposes that state as typed getters and setters. It holds no
//! native resource itself; all instances observe the same per-thread
//! context, and every accessor fails with
//! [VgError::NoContext](crate::VgError::NoContext) when none is current.

use rovg_sys::{consts, VGenum};

use crate::{
    image::{self, ImageFormat},
    macros::imp_enum,
    paint::PaintMode,
    vg_bool, Image, PaintHandle, Rect, Vg, VgError, VgResult,
};

imp_enum! {
    /// Which transform matrix the matrix operations manipulate.
    MatrixMode: "VGMatrixMode" {
        /// The path user-to-surface transform.
        PathUserToSurface = consts::VG_MATRIX_PATH_USER_TO_SURFACE,
        /// The image user-to-surface transform.
        ImageUserToSurface = consts::VG_MATRIX_IMAGE_USER_TO_SURFACE,
        /// The fill paint-to-user transform.
        FillPaintToUser = consts::VG_MATRIX_FILL_PAINT_TO_USER,
        /// The stroke paint-to-user transform.
        StrokePaintToUser = consts::VG_MATRIX_STROKE_PAINT_TO_USER,
        /// The glyph user-to-surface transform.
        GlyphUserToSurface = consts::VG_MATRIX_GLYPH_USER_TO_SURFACE,
    }
}

imp_enum! {
    /// How the interior of a path is determined.
    FillRule: "VGFillRule" {
        /// A point is inside if a ray from it crosses an odd number of edges.
        EvenOdd = consts::VG_EVEN_ODD,
        /// A point is inside if edge crossings sum to a nonzero winding.
        NonZero = consts::VG_NON_ZERO,
    }
}

imp_enum! {
    /// Overall rendering quality/speed trade-off.
    RenderingQuality: "VGRenderingQuality" {
        /// No antialiasing.
        NonAntialiased = consts::VG_RENDERING_QUALITY_NONANTIALIASED,
        /// Faster rendering, lower quality.
        Faster = consts::VG_RENDERING_QUALITY_FASTER,
        /// Higher quality rendering.
        Better = consts::VG_RENDERING_QUALITY_BETTER,
    }
}

imp_enum! {
    /// Pixel blending function.
    BlendMode: "VGBlendMode" {
        /// Source only.
        Src = consts::VG_BLEND_SRC,
        /// Source over destination (the default).
        SrcOver = consts::VG_BLEND_SRC_OVER,
        /// Destination over source.
        DstOver = consts::VG_BLEND_DST_OVER,
        /// Source where the destination is opaque.
        SrcIn = consts::VG_BLEND_SRC_IN,
        /// Destination where the source is opaque.
        DstIn = consts::VG_BLEND_DST_IN,
        /// Multiply source and destination.
        Multiply = consts::VG_BLEND_MULTIPLY,
        /// Inverted multiply.
        Screen = consts::VG_BLEND_SCREEN,
        /// The darker of source and destination.
        Darken = consts::VG_BLEND_DARKEN,
        /// The lighter of source and destination.
        Lighten = consts::VG_BLEND_LIGHTEN,
        /// Additive blending.
        Additive = consts::VG_BLEND_ADDITIVE,
    }
}

imp_enum! {
    /// How `vgDrawImage` combines the image with the current paint.
    ImageMode: "VGImageMode" {
        /// Draw the image as-is.
        Normal = consts::VG_DRAW_IMAGE_NORMAL,
        /// Multiply image and paint colors.
        Multiply = consts::VG_DRAW_IMAGE_MULTIPLY,
        /// Use the image as a stencil for the paint.
        Stencil = consts::VG_DRAW_IMAGE_STENCIL,
    }
}

imp_enum! {
    /// Stroke line-end cap style.
    CapStyle: "VGCapStyle" {
        /// Cut off at the endpoint.
        Butt = consts::VG_CAP_BUTT,
        /// Semicircular cap.
        Round = consts::VG_CAP_ROUND,
        /// Square cap extending half the line width.
        Square = consts::VG_CAP_SQUARE,
    }
}

imp_enum! {
    /// Stroke line-join style.
    JoinStyle: "VGJoinStyle" {
        /// Extend outer edges until they meet.
        Miter = consts::VG_JOIN_MITER,
        /// Round off the join.
        Round = consts::VG_JOIN_ROUND,
        /// Connect with a straight edge.
        Bevel = consts::VG_JOIN_BEVEL,
    }
}

imp_enum! {
    /// Physical subpixel layout of the display.
    PixelLayout: "VGPixelLayout" {
        /// Unknown or irrelevant layout.
        Unknown = consts::VG_PIXEL_LAYOUT_UNKNOWN,
        /// RGB columns.
        RgbVertical = consts::VG_PIXEL_LAYOUT_RGB_VERTICAL,
        /// BGR columns.
        BgrVertical = consts::VG_PIXEL_LAYOUT_BGR_VERTICAL,
        /// RGB rows.
        RgbHorizontal = consts::VG_PIXEL_LAYOUT_RGB_HORIZONTAL,
        /// BGR rows.
        BgrHorizontal = consts::VG_PIXEL_LAYOUT_BGR_HORIZONTAL,
    }
}

bitflags::bitflags! {
    /// Image quality levels, as a bit set.
    ///
    /// Image creation accepts any union of these as the allowed qualities;
    /// the `VG_IMAGE_QUALITY` context parameter takes exactly one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ImageQuality: u32 {
        /// No resampling.
        const NONANTIALIASED = consts::VG_IMAGE_QUALITY_NONANTIALIASED;
        /// Faster, lower-quality resampling.
        const FASTER = consts::VG_IMAGE_QUALITY_FASTER;
        /// Best available resampling.
        const BETTER = consts::VG_IMAGE_QUALITY_BETTER;
    }
}

bitflags::bitflags! {
    /// Color channels written by image filter operations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FilterChannelMask: u32 {
        /// Write the red channel.
        const RED = consts::VG_RED;
        /// Write the green channel.
        const GREEN = consts::VG_GREEN;
        /// Write the blue channel.
        const BLUE = consts::VG_BLUE;
        /// Write the alpha channel.
        const ALPHA = consts::VG_ALPHA;
    }
}

/// The OpenVG context parameters and drawing-surface operations.
///
/// Obtained from [Vg::context]. All instances alias the implementation's
/// per-thread context state; creating one is free.
#[derive(Debug, Clone)]
pub struct Context {
    pub(crate) vg: Vg,
}

impl Context {
    pub(crate) fn new(vg: Vg) -> Self {
        Self { vg }
    }

    /// The [Vg] this context came from.
    pub fn vg(&self) -> &Vg {
        &self.vg
    }

    // -- raw scalar/vector accessors -------------------------------------

    pub(crate) fn seti(&self, param: VGenum, value: i32) -> VgResult<()> {
        unsafe { (self.vg.lib().vgSeti)(param, value) };
        self.vg.check(())
    }

    pub(crate) fn setf(&self, param: VGenum, value: f32) -> VgResult<()> {
        unsafe { (self.vg.lib().vgSetf)(param, value) };
        self.vg.check(())
    }

    pub(crate) fn geti(&self, param: VGenum) -> VgResult<i32> {
        let value = unsafe { (self.vg.lib().vgGeti)(param) };
        self.vg.check(value)
    }

    pub(crate) fn getf(&self, param: VGenum) -> VgResult<f32> {
        let value = unsafe { (self.vg.lib().vgGetf)(param) };
        self.vg.check(value)
    }

    fn set_bool(&self, param: VGenum, value: bool) -> VgResult<()> {
        self.seti(param, vg_bool(value) as i32)
    }

    fn get_bool(&self, param: VGenum) -> VgResult<bool> {
        Ok(self.geti(param)? != 0)
    }

    fn setfv(&self, param: VGenum, values: &[f32]) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgSetfv)(
                param,
                values.len() as i32,
                values.as_ptr(),
            )
        };
        self.vg.check(())
    }

    fn setiv(&self, param: VGenum, values: &[i32]) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgSetiv)(
                param,
                values.len() as i32,
                values.as_ptr(),
            )
        };
        self.vg.check(())
    }

    fn getfv(&self, param: VGenum) -> VgResult<Vec<f32>> {
        let count = unsafe { (self.vg.lib().vgGetVectorSize)(param) };
        self.vg.check(())?;
        let mut out = vec![0.0f32; count.max(0) as usize];
        unsafe { (self.vg.lib().vgGetfv)(param, count, out.as_mut_ptr()) };
        self.vg.check(out)
    }

    fn getiv(&self, param: VGenum) -> VgResult<Vec<i32>> {
        let count = unsafe { (self.vg.lib().vgGetVectorSize)(param) };
        self.vg.check(())?;
        let mut out = vec![0i32; count.max(0) as usize];
        unsafe { (self.vg.lib().vgGetiv)(param, count, out.as_mut_ptr()) };
        self.vg.check(out)
    }

    fn getfv_n<const N: usize>(&self, param: VGenum) -> VgResult<[f32; N]> {
        let mut out = [0.0f32; N];
        unsafe {
            (self.vg.lib().vgGetfv)(param, N as i32, out.as_mut_ptr())
        };
        self.vg.check(out)
    }

    // -- mode settings ----------------------------------------------------

    /// Which matrix the matrix operations manipulate.
    pub fn matrix_mode(&self) -> VgResult<MatrixMode> {
        MatrixMode::from_raw_checked(self.geti(consts::VG_MATRIX_MODE)? as u32)
    }

    /// Select which matrix the matrix operations manipulate.
    pub fn set_matrix_mode(&self, mode: MatrixMode) -> VgResult<()> {
        self.seti(consts::VG_MATRIX_MODE, mode.raw() as i32)
    }

    /// The current path fill rule.
    pub fn fill_rule(&self) -> VgResult<FillRule> {
        FillRule::from_raw_checked(self.geti(consts::VG_FILL_RULE)? as u32)
    }

    /// Set the path fill rule.
    pub fn set_fill_rule(&self, rule: FillRule) -> VgResult<()> {
        self.seti(consts::VG_FILL_RULE, rule.raw() as i32)
    }

    /// The current image resampling quality.
    pub fn image_quality(&self) -> VgResult<ImageQuality> {
        let raw = self.geti(consts::VG_IMAGE_QUALITY)? as u32;
        ImageQuality::from_bits(raw).ok_or(VgError::UnexpectedEnum {
            kind: "VGImageQuality",
            value: raw,
        })
    }

    /// Set the image resampling quality. Exactly one level must be given.
    pub fn set_image_quality(&self, quality: ImageQuality) -> VgResult<()> {
        self.seti(consts::VG_IMAGE_QUALITY, quality.bits() as i32)
    }

    /// The current rendering quality.
    pub fn rendering_quality(&self) -> VgResult<RenderingQuality> {
        RenderingQuality::from_raw_checked(
            self.geti(consts::VG_RENDERING_QUALITY)? as u32,
        )
    }

    /// Set the rendering quality.
    pub fn set_rendering_quality(
        &self,
        quality: RenderingQuality,
    ) -> VgResult<()> {
        self.seti(consts::VG_RENDERING_QUALITY, quality.raw() as i32)
    }

    /// The current blend mode.
    pub fn blend_mode(&self) -> VgResult<BlendMode> {
        BlendMode::from_raw_checked(self.geti(consts::VG_BLEND_MODE)? as u32)
    }

    /// Set the blend mode.
    pub fn set_blend_mode(&self, mode: BlendMode) -> VgResult<()> {
        self.seti(consts::VG_BLEND_MODE, mode.raw() as i32)
    }

    /// The current image drawing mode.
    pub fn image_mode(&self) -> VgResult<ImageMode> {
        ImageMode::from_raw_checked(self.geti(consts::VG_IMAGE_MODE)? as u32)
    }

    /// Set the image drawing mode.
    pub fn set_image_mode(&self, mode: ImageMode) -> VgResult<()> {
        self.seti(consts::VG_IMAGE_MODE, mode.raw() as i32)
    }

    // -- scissoring -------------------------------------------------------

    /// The current scissor rectangles.
    pub fn scissor_rects(&self) -> VgResult<Vec<Rect>> {
        let raw = self.getiv(consts::VG_SCISSOR_RECTS)?;
        if raw.len() % 4 != 0 {
            return Err(VgError::data(format!(
                "scissor rect vector of length {} is not a multiple of 4",
                raw.len()
            )));
        }
        Ok(raw
            .chunks_exact(4)
            .map(|c| Rect::new(c[0], c[1], c[2], c[3]))
            .collect())
    }

    /// Replace the scissor rectangles.
    ///
    /// Rectangles beyond the implementation's [Context::max_scissor_rects]
    /// are ignored by the implementation.
    pub fn set_scissor_rects(&self, rects: &[Rect]) -> VgResult<()> {
        let mut raw = Vec::with_capacity(rects.len() * 4);
        for r in rects {
            raw.extend_from_slice(&[r.x, r.y, r.width, r.height]);
        }
        self.setiv(consts::VG_SCISSOR_RECTS, &raw)
    }

    /// Whether scissoring is enabled.
    pub fn scissoring(&self) -> VgResult<bool> {
        self.get_bool(consts::VG_SCISSORING)
    }

    /// Enable or disable scissoring.
    pub fn set_scissoring(&self, on: bool) -> VgResult<()> {
        self.set_bool(consts::VG_SCISSORING, on)
    }

    /// Whether alpha masking is enabled.
    pub fn masking(&self) -> VgResult<bool> {
        self.get_bool(consts::VG_MASKING)
    }

    /// Enable or disable alpha masking.
    pub fn set_masking(&self, on: bool) -> VgResult<()> {
        self.set_bool(consts::VG_MASKING, on)
    }

    // -- color transform --------------------------------------------------

    /// Whether the color transform is applied.
    pub fn color_transform(&self) -> VgResult<bool> {
        self.get_bool(consts::VG_COLOR_TRANSFORM)
    }

    /// Enable or disable the color transform.
    pub fn set_color_transform(&self, on: bool) -> VgResult<()> {
        self.set_bool(consts::VG_COLOR_TRANSFORM, on)
    }

    /// The color transform: four scale factors followed by four biases,
    /// in RGBA order.
    pub fn color_transform_values(&self) -> VgResult<[f32; 8]> {
        self.getfv_n(consts::VG_COLOR_TRANSFORM_VALUES)
    }

    /// Set the color transform values.
    pub fn set_color_transform_values(
        &self,
        values: [f32; 8],
    ) -> VgResult<()> {
        self.setfv(consts::VG_COLOR_TRANSFORM_VALUES, &values)
    }

    // -- stroke parameters ------------------------------------------------

    /// The stroke line width, in user units.
    pub fn stroke_line_width(&self) -> VgResult<f32> {
        self.getf(consts::VG_STROKE_LINE_WIDTH)
    }

    /// Set the stroke line width.
    pub fn set_stroke_line_width(&self, width: f32) -> VgResult<()> {
        self.setf(consts::VG_STROKE_LINE_WIDTH, width)
    }

    /// The stroke cap style.
    pub fn stroke_cap_style(&self) -> VgResult<CapStyle> {
        CapStyle::from_raw_checked(
            self.geti(consts::VG_STROKE_CAP_STYLE)? as u32
        )
    }

    /// Set the stroke cap style.
    pub fn set_stroke_cap_style(&self, style: CapStyle) -> VgResult<()> {
        self.seti(consts::VG_STROKE_CAP_STYLE, style.raw() as i32)
    }

    /// The stroke join style.
    pub fn stroke_join_style(&self) -> VgResult<JoinStyle> {
        JoinStyle::from_raw_checked(
            self.geti(consts::VG_STROKE_JOIN_STYLE)? as u32
        )
    }

    /// Set the stroke join style.
    pub fn set_stroke_join_style(&self, style: JoinStyle) -> VgResult<()> {
        self.seti(consts::VG_STROKE_JOIN_STYLE, style.raw() as i32)
    }

    /// The stroke miter limit.
    pub fn stroke_miter_limit(&self) -> VgResult<f32> {
        self.getf(consts::VG_STROKE_MITER_LIMIT)
    }

    /// Set the stroke miter limit.
    pub fn set_stroke_miter_limit(&self, limit: f32) -> VgResult<()> {
        self.setf(consts::VG_STROKE_MITER_LIMIT, limit)
    }

    /// The stroke dash pattern, as on/off lengths. Empty means solid.
    pub fn stroke_dash_pattern(&self) -> VgResult<Vec<f32>> {
        self.getfv(consts::VG_STROKE_DASH_PATTERN)
    }

    /// Set the stroke dash pattern. An empty slice disables dashing.
    pub fn set_stroke_dash_pattern(&self, pattern: &[f32]) -> VgResult<()> {
        self.setfv(consts::VG_STROKE_DASH_PATTERN, pattern)
    }

    /// The dash phase offset, in user units.
    pub fn stroke_dash_phase(&self) -> VgResult<f32> {
        self.getf(consts::VG_STROKE_DASH_PHASE)
    }

    /// Set the dash phase offset.
    pub fn set_stroke_dash_phase(&self, phase: f32) -> VgResult<()> {
        self.setf(consts::VG_STROKE_DASH_PHASE, phase)
    }

    /// Whether the dash pattern resets at each subpath.
    pub fn stroke_dash_phase_reset(&self) -> VgResult<bool> {
        self.get_bool(consts::VG_STROKE_DASH_PHASE_RESET)
    }

    /// Set whether the dash pattern resets at each subpath.
    pub fn set_stroke_dash_phase_reset(&self, reset: bool) -> VgResult<()> {
        self.set_bool(consts::VG_STROKE_DASH_PHASE_RESET, reset)
    }

    // -- colors -----------------------------------------------------------

    /// The color used for edge fill when tiling in pad mode, RGBA.
    pub fn tile_fill_color(&self) -> VgResult<[f32; 4]> {
        self.getfv_n(consts::VG_TILE_FILL_COLOR)
    }

    /// Set the tiling edge fill color.
    pub fn set_tile_fill_color(&self, rgba: [f32; 4]) -> VgResult<()> {
        self.setfv(consts::VG_TILE_FILL_COLOR, &rgba)
    }

    /// The color used by [Context::clear], RGBA.
    pub fn clear_color(&self) -> VgResult<[f32; 4]> {
        self.getfv_n(consts::VG_CLEAR_COLOR)
    }

    /// Set the clear color.
    pub fn set_clear_color(&self, rgba: [f32; 4]) -> VgResult<()> {
        self.setfv(consts::VG_CLEAR_COLOR, &rgba)
    }

    /// The glyph origin used by text drawing, in user units.
    pub fn glyph_origin(&self) -> VgResult<[f32; 2]> {
        self.getfv_n(consts::VG_GLYPH_ORIGIN)
    }

    /// Set the glyph origin. Updated by the implementation as glyphs draw.
    pub fn set_glyph_origin(&self, origin: [f32; 2]) -> VgResult<()> {
        self.setfv(consts::VG_GLYPH_ORIGIN, &origin)
    }

    // -- pixel layout and filters ----------------------------------------

    /// The assumed subpixel layout of the drawing surface.
    pub fn pixel_layout(&self) -> VgResult<PixelLayout> {
        PixelLayout::from_raw_checked(
            self.geti(consts::VG_PIXEL_LAYOUT)? as u32
        )
    }

    /// Hint the subpixel layout of the drawing surface.
    pub fn set_pixel_layout(&self, layout: PixelLayout) -> VgResult<()> {
        self.seti(consts::VG_PIXEL_LAYOUT, layout.raw() as i32)
    }

    /// The subpixel layout of the physical screen (read-only).
    pub fn screen_layout(&self) -> VgResult<PixelLayout> {
        PixelLayout::from_raw_checked(
            self.geti(consts::VG_SCREEN_LAYOUT)? as u32
        )
    }

    /// Whether image filters operate in a linear color space.
    pub fn filter_format_linear(&self) -> VgResult<bool> {
        self.get_bool(consts::VG_FILTER_FORMAT_LINEAR)
    }

    /// Set whether image filters operate in a linear color space.
    pub fn set_filter_format_linear(&self, linear: bool) -> VgResult<()> {
        self.set_bool(consts::VG_FILTER_FORMAT_LINEAR, linear)
    }

    /// Whether image filters operate on premultiplied alpha.
    pub fn filter_format_premultiplied(&self) -> VgResult<bool> {
        self.get_bool(consts::VG_FILTER_FORMAT_PREMULTIPLIED)
    }

    /// Set whether image filters operate on premultiplied alpha.
    pub fn set_filter_format_premultiplied(
        &self,
        premultiplied: bool,
    ) -> VgResult<()> {
        self.set_bool(consts::VG_FILTER_FORMAT_PREMULTIPLIED, premultiplied)
    }

    /// The channels image filters are allowed to write.
    pub fn filter_channel_mask(&self) -> VgResult<FilterChannelMask> {
        let raw = self.geti(consts::VG_FILTER_CHANNEL_MASK)? as u32;
        FilterChannelMask::from_bits(raw).ok_or(VgError::UnexpectedEnum {
            kind: "VGImageChannel",
            value: raw,
        })
    }

    /// Set the channels image filters are allowed to write.
    pub fn set_filter_channel_mask(
        &self,
        mask: FilterChannelMask,
    ) -> VgResult<()> {
        self.seti(consts::VG_FILTER_CHANNEL_MASK, mask.bits() as i32)
    }

    // -- implementation limits (read-only) --------------------------------

    /// Maximum number of scissor rectangles honored.
    pub fn max_scissor_rects(&self) -> VgResult<i32> {
        self.geti(consts::VG_MAX_SCISSOR_RECTS)
    }

    /// Maximum number of dash pattern entries honored.
    pub fn max_dash_count(&self) -> VgResult<i32> {
        self.geti(consts::VG_MAX_DASH_COUNT)
    }

    /// Maximum convolution kernel dimension.
    pub fn max_kernel_size(&self) -> VgResult<i32> {
        self.geti(consts::VG_MAX_KERNEL_SIZE)
    }

    /// Maximum separable convolution kernel dimension.
    pub fn max_separable_kernel_size(&self) -> VgResult<i32> {
        self.geti(consts::VG_MAX_SEPARABLE_KERNEL_SIZE)
    }

    /// Maximum number of gradient color ramp stops.
    pub fn max_color_ramp_stops(&self) -> VgResult<i32> {
        self.geti(consts::VG_MAX_COLOR_RAMP_STOPS)
    }

    /// Maximum image width, in pixels.
    pub fn max_image_width(&self) -> VgResult<i32> {
        self.geti(consts::VG_MAX_IMAGE_WIDTH)
    }

    /// Maximum image height, in pixels.
    pub fn max_image_height(&self) -> VgResult<i32> {
        self.geti(consts::VG_MAX_IMAGE_HEIGHT)
    }

    /// Maximum number of pixels in one image.
    pub fn max_image_pixels(&self) -> VgResult<i32> {
        self.geti(consts::VG_MAX_IMAGE_PIXELS)
    }

    /// Maximum number of bytes in one image.
    pub fn max_image_bytes(&self) -> VgResult<i32> {
        self.geti(consts::VG_MAX_IMAGE_BYTES)
    }

    /// Largest floating-point value the implementation accepts.
    pub fn max_float(&self) -> VgResult<f32> {
        self.getf(consts::VG_MAX_FLOAT)
    }

    /// Largest Gaussian blur standard deviation accepted.
    pub fn max_gaussian_std_deviation(&self) -> VgResult<f32> {
        self.getf(consts::VG_MAX_GAUSSIAN_STD_DEVIATION)
    }

    // -- drawing surface operations ---------------------------------------

    /// Fill `rect` with the current [clear color](Context::clear_color),
    /// ignoring blending and masking (but honoring scissoring).
    pub fn clear(&self, rect: Rect) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgClear)(rect.x, rect.y, rect.width, rect.height)
        };
        self.vg.check(())
    }

    /// Copy `src_rect` of `src` onto the surface at `(dx, dy)`, bypassing
    /// transforms and blending.
    pub fn set_pixels(
        &self,
        dx: i32,
        dy: i32,
        src: &Image,
        src_rect: Rect,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgSetPixels)(
                dx,
                dy,
                src.handle().raw(),
                src_rect.x,
                src_rect.y,
                src_rect.width,
                src_rect.height,
            )
        };
        self.vg.check(())
    }

    /// Write client-memory pixels directly onto the surface at `(dx, dy)`.
    ///
    /// `data` is validated against `stride`, `format`, and the region size
    /// before the native call.
    pub fn write_pixels(
        &self,
        data: &[u8],
        stride: i32,
        format: ImageFormat,
        dx: i32,
        dy: i32,
        width: i32,
        height: i32,
    ) -> VgResult<()> {
        let needed = image::required_bytes(format, stride, width, height)?;
        if data.len() < needed {
            return Err(VgError::data(format!(
                "pixel buffer holds {} bytes, region needs {needed}",
                data.len()
            )));
        }
        unsafe {
            (self.vg.lib().vgWritePixels)(
                data.as_ptr().cast(),
                stride,
                format.raw(),
                dx,
                dy,
                width,
                height,
            )
        };
        self.vg.check(())
    }

    /// Copy a surface region into `dst` at `(dx, dy)`.
    pub fn get_pixels(
        &self,
        dst: &Image,
        dx: i32,
        dy: i32,
        src_rect: Rect,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgGetPixels)(
                dst.handle().raw(),
                dx,
                dy,
                src_rect.x,
                src_rect.y,
                src_rect.width,
                src_rect.height,
            )
        };
        self.vg.check(())
    }

    /// Read a surface region into client memory.
    pub fn read_pixels(
        &self,
        data: &mut [u8],
        stride: i32,
        format: ImageFormat,
        src_rect: Rect,
    ) -> VgResult<()> {
        let needed = image::required_bytes(
            format,
            stride,
            src_rect.width,
            src_rect.height,
        )?;
        if data.len() < needed {
            return Err(VgError::data(format!(
                "pixel buffer holds {} bytes, region needs {needed}",
                data.len()
            )));
        }
        unsafe {
            (self.vg.lib().vgReadPixels)(
                data.as_mut_ptr().cast(),
                stride,
                format.raw(),
                src_rect.x,
                src_rect.y,
                src_rect.width,
                src_rect.height,
            )
        };
        self.vg.check(())
    }

    /// Copy one surface region onto another.
    pub fn copy_pixels(&self, dx: i32, dy: i32, src_rect: Rect) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgCopyPixels)(
                dx,
                dy,
                src_rect.x,
                src_rect.y,
                src_rect.width,
                src_rect.height,
            )
        };
        self.vg.check(())
    }

    /// The handle of the paint currently set for `mode`, if any.
    ///
    /// Compare against [Paint::handle](crate::Paint::handle) to find out
    /// whether a particular paint object is current. `mode` must name
    /// exactly one paint mode.
    pub fn current_paint(
        &self,
        mode: PaintMode,
    ) -> VgResult<Option<PaintHandle>> {
        let raw = unsafe { (self.vg.lib().vgGetPaint)(mode.bits()) };
        self.vg.check(())?;
        Ok(crate::Handle::new(raw).map(PaintHandle::from))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn enum_raw_fixtures() {
        const F: &[(u32, Option<MatrixMode>)] = &[
            (0x1400, Some(MatrixMode::PathUserToSurface)),
            (0x1404, Some(MatrixMode::GlyphUserToSurface)),
            (0x1405, None),
        ];
        for (raw, expected) in F.iter() {
            assert_eq!(*expected, MatrixMode::from_raw(*raw));
        }

        assert_eq!(0x1900, FillRule::EvenOdd.raw());
        assert_eq!(0x2001, BlendMode::SrcOver.raw());
        assert_eq!(0x1F02, ImageMode::Stencil.raw());
        assert_eq!(0x1702, CapStyle::Square.raw());
        assert_eq!(0x1801, JoinStyle::Round.raw());
        assert_eq!(0x1304, PixelLayout::BgrHorizontal.raw());
        assert_eq!(0x1202, RenderingQuality::Better.raw());
    }

    #[test]
    fn unexpected_enum_value_is_an_error() {
        let err = FillRule::from_raw_checked(0x9999).unwrap_err();
        assert_eq!(
            VgError::UnexpectedEnum {
                kind: "VGFillRule",
                value: 0x9999
            },
            err
        );
    }

    #[test]
    fn quality_bits_compose() {
        let q = ImageQuality::FASTER | ImageQuality::BETTER;
        assert_eq!(6, q.bits());
        assert_eq!(None, ImageQuality::from_bits(8));
    }

    #[test]
    fn channel_mask_bits() {
        assert_eq!(8, FilterChannelMask::RED.bits());
        assert_eq!(1, FilterChannelMask::ALPHA.bits());
        assert_eq!(0xF, FilterChannelMask::all().bits());
    }
}
