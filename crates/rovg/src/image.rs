//! Image objects, pixel transfer, and the image filter operations.

use std::marker::PhantomData;

use rovg_sys::{consts, VGint};

use crate::{
    context::ImageQuality, macros::imp_enum, paint::TilingMode, vg_bool,
    Handle, ImageHandle, Rect, Vg, VgError, VgResult,
};

imp_enum! {
    /// Pixel formats for images and client-memory pixel rectangles.
    ///
    /// The names follow the OpenVG convention: an `s`/`l` prefix for
    /// sRGB/linear color space, channel order, bits per channel, and a
    /// `_PRE` suffix for premultiplied alpha.
    ImageFormat: "VGImageFormat" {
        /// 32-bit sRGB, no alpha.
        SRgbx8888 = consts::VG_SRGBX_8888,
        /// 32-bit sRGB with alpha.
        SRgba8888 = consts::VG_SRGBA_8888,
        /// 32-bit sRGB, premultiplied alpha.
        SRgba8888Pre = consts::VG_SRGBA_8888_PRE,
        /// 16-bit sRGB 5-6-5.
        SRgb565 = consts::VG_SRGB_565,
        /// 16-bit sRGB 5-5-5-1.
        SRgba5551 = consts::VG_SRGBA_5551,
        /// 16-bit sRGB 4-4-4-4.
        SRgba4444 = consts::VG_SRGBA_4444,
        /// 8-bit sRGB luminance.
        SL8 = consts::VG_SL_8,
        /// 32-bit linear RGB, no alpha.
        LRgbx8888 = consts::VG_LRGBX_8888,
        /// 32-bit linear RGB with alpha.
        LRgba8888 = consts::VG_LRGBA_8888,
        /// 32-bit linear RGB, premultiplied alpha.
        LRgba8888Pre = consts::VG_LRGBA_8888_PRE,
        /// 8-bit linear luminance.
        LL8 = consts::VG_LL_8,
        /// 8-bit alpha only.
        A8 = consts::VG_A_8,
        /// 1-bit black and white.
        Bw1 = consts::VG_BW_1,
        /// 1-bit alpha only.
        A1 = consts::VG_A_1,
        /// 4-bit alpha only.
        A4 = consts::VG_A_4,
        /// 32-bit sRGB, alpha channel first, ignored.
        SXrgb8888 = consts::VG_SXRGB_8888,
        /// 32-bit sRGB, alpha channel first.
        SArgb8888 = consts::VG_SARGB_8888,
        /// 32-bit sRGB, alpha channel first, premultiplied.
        SArgb8888Pre = consts::VG_SARGB_8888_PRE,
        /// 16-bit sRGB 1-5-5-5, alpha first.
        SArgb1555 = consts::VG_SARGB_5551,
        /// 16-bit sRGB 4-4-4-4, alpha first.
        SArgb4444 = consts::VG_SARGB_4444,
        /// 32-bit linear RGB, alpha channel first, ignored.
        LXrgb8888 = consts::VG_LXRGB_8888,
        /// 32-bit linear RGB, alpha channel first.
        LArgb8888 = consts::VG_LARGB_8888,
        /// 32-bit linear RGB, alpha channel first, premultiplied.
        LArgb8888Pre = consts::VG_LARGB_8888_PRE,
        /// 32-bit sRGB, blue channel first, no alpha.
        SBgrx8888 = consts::VG_SBGRX_8888,
        /// 32-bit sRGB, blue channel first.
        SBgra8888 = consts::VG_SBGRA_8888,
        /// 32-bit sRGB, blue channel first, premultiplied.
        SBgra8888Pre = consts::VG_SBGRA_8888_PRE,
        /// 16-bit sRGB 5-6-5, blue first.
        SBgr565 = consts::VG_SBGR_565,
        /// 16-bit sRGB 5-5-5-1, blue first.
        SBgra5551 = consts::VG_SBGRA_5551,
        /// 16-bit sRGB 4-4-4-4, blue first.
        SBgra4444 = consts::VG_SBGRA_4444,
        /// 32-bit linear RGB, blue channel first, no alpha.
        LBgrx8888 = consts::VG_LBGRX_8888,
        /// 32-bit linear RGB, blue channel first.
        LBgra8888 = consts::VG_LBGRA_8888,
        /// 32-bit linear RGB, blue channel first, premultiplied.
        LBgra8888Pre = consts::VG_LBGRA_8888_PRE,
        /// 32-bit sRGB, alpha last reversed, ignored.
        SXbgr8888 = consts::VG_SXBGR_8888,
        /// 32-bit sRGB, fully reversed channel order.
        SAbgr8888 = consts::VG_SABGR_8888,
        /// 32-bit sRGB, fully reversed, premultiplied.
        SAbgr8888Pre = consts::VG_SABGR_8888_PRE,
        /// 16-bit sRGB 1-5-5-5, reversed.
        SAbgr1555 = consts::VG_SABGR_5551,
        /// 16-bit sRGB 4-4-4-4, reversed.
        SAbgr4444 = consts::VG_SABGR_4444,
        /// 32-bit linear RGB, alpha last reversed, ignored.
        LXbgr8888 = consts::VG_LXBGR_8888,
        /// 32-bit linear RGB, fully reversed channel order.
        LAbgr8888 = consts::VG_LABGR_8888,
        /// 32-bit linear RGB, fully reversed, premultiplied.
        LAbgr8888Pre = consts::VG_LABGR_8888_PRE,
    }
}

impl ImageFormat {
    /// Storage size of one pixel, in bits.
    pub fn bits_per_pixel(self) -> usize {
        use ImageFormat::*;
        match self {
            Bw1 | A1 => 1,
            A4 => 4,
            SL8 | LL8 | A8 => 8,
            SRgb565 | SRgba5551 | SRgba4444 | SArgb1555 | SArgb4444
            | SBgr565 | SBgra5551 | SBgra4444 | SAbgr1555 | SAbgr4444 => 16,
            _ => 32,
        }
    }
}

imp_enum! {
    /// A single color channel, for [Image::lookup_single].
    ImageChannel: "VGImageChannel" {
        /// The red channel.
        Red = consts::VG_RED,
        /// The green channel.
        Green = consts::VG_GREEN,
        /// The blue channel.
        Blue = consts::VG_BLUE,
        /// The alpha channel.
        Alpha = consts::VG_ALPHA,
    }
}

/// Bytes a pixel rectangle of `width` × `height` occupies in client memory
/// with rows `stride` bytes apart.
///
/// Used to validate caller buffers before handing their pointers to the
/// implementation.
pub(crate) fn required_bytes(
    format: ImageFormat,
    stride: i32,
    width: i32,
    height: i32,
) -> VgResult<usize> {
    if width < 0 || height < 0 {
        return Err(VgError::data(format!(
            "negative pixel rectangle {width}x{height}"
        )));
    }
    if stride < 0 {
        return Err(VgError::data(
            "negative strides are not supported by the checked pixel calls",
        ));
    }
    if width == 0 || height == 0 {
        return Ok(0);
    }
    let row_bytes = (width as usize * format.bits_per_pixel() + 7) / 8;
    if (stride as usize) < row_bytes {
        return Err(VgError::data(format!(
            "stride {stride} is shorter than a {width}-pixel row ({row_bytes} bytes)"
        )));
    }
    Ok(stride as usize * (height as usize - 1) + row_bytes)
}

/// An owned OpenVG image object.
///
/// Created through [Vg::create_image] or [Image::child]; the native object
/// is destroyed on drop. Destroying a parent while children exist is safe on
/// the native side: the pixel storage lives until the last related image is
/// gone.
#[derive(Debug)]
pub struct Image {
    vg: Vg,
    handle: ImageHandle,
    format: ImageFormat,
    width: i32,
    height: i32,
    _not_send: PhantomData<*const ()>,
}

impl Image {
    pub(crate) fn create(
        vg: &Vg,
        format: ImageFormat,
        width: i32,
        height: i32,
        allowed_quality: ImageQuality,
    ) -> VgResult<Self> {
        let raw = unsafe {
            (vg.lib().vgCreateImage)(
                format.raw(),
                width,
                height,
                allowed_quality.bits(),
            )
        };
        vg.check(())?;
        let handle = Handle::new(raw)
            .ok_or(VgError::CreationFailed { what: "image" })?;
        Ok(Self {
            vg: vg.clone(),
            handle: handle.into(),
            format,
            width,
            height,
            _not_send: PhantomData,
        })
    }

    /// Wrap a handle the implementation just returned, reading format and
    /// size back from its parameters.
    fn from_handle(vg: &Vg, handle: Handle) -> VgResult<Self> {
        let format_raw = unsafe {
            (vg.lib().vgGetParameteri)(handle.raw(), consts::VG_IMAGE_FORMAT)
        };
        vg.check(())?;
        let width = unsafe {
            (vg.lib().vgGetParameteri)(handle.raw(), consts::VG_IMAGE_WIDTH)
        };
        vg.check(())?;
        let height = unsafe {
            (vg.lib().vgGetParameteri)(handle.raw(), consts::VG_IMAGE_HEIGHT)
        };
        vg.check(())?;
        Ok(Self {
            vg: vg.clone(),
            handle: handle.into(),
            format: ImageFormat::from_raw_checked(format_raw as u32)?,
            width,
            height,
            _not_send: PhantomData,
        })
    }

    /// The underlying handle.
    pub fn handle(&self) -> ImageHandle {
        self.handle
    }

    /// The pixel format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Fill `rect` of this image with the current clear color.
    pub fn clear_region(&self, rect: Rect) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgClearImage)(
                self.handle.raw(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            )
        };
        self.vg.check(())
    }

    /// Write client-memory pixels into `rect` of this image.
    ///
    /// `data` rows are `stride` bytes apart and hold pixels of `format`
    /// (converted to the image's own format as needed). The buffer size is
    /// validated before the native call.
    pub fn set_sub_data(
        &self,
        data: &[u8],
        stride: i32,
        format: ImageFormat,
        rect: Rect,
    ) -> VgResult<()> {
        let needed =
            required_bytes(format, stride, rect.width, rect.height)?;
        if data.len() < needed {
            return Err(VgError::data(format!(
                "pixel buffer holds {} bytes, region needs {needed}",
                data.len()
            )));
        }
        unsafe {
            (self.vg.lib().vgImageSubData)(
                self.handle.raw(),
                data.as_ptr().cast(),
                stride,
                format.raw(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            )
        };
        self.vg.check(())
    }

    /// Read `rect` of this image into client memory as pixels of `format`.
    pub fn get_sub_data(
        &self,
        data: &mut [u8],
        stride: i32,
        format: ImageFormat,
        rect: Rect,
    ) -> VgResult<()> {
        let needed =
            required_bytes(format, stride, rect.width, rect.height)?;
        if data.len() < needed {
            return Err(VgError::data(format!(
                "pixel buffer holds {} bytes, region needs {needed}",
                data.len()
            )));
        }
        unsafe {
            (self.vg.lib().vgGetImageSubData)(
                self.handle.raw(),
                data.as_mut_ptr().cast(),
                stride,
                format.raw(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            )
        };
        self.vg.check(())
    }

    /// Create a child image sharing this image's storage over `rect`.
    pub fn child(&self, rect: Rect) -> VgResult<Image> {
        let raw = unsafe {
            (self.vg.lib().vgChildImage)(
                self.handle.raw(),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            )
        };
        self.vg.check(())?;
        let handle = Handle::new(raw)
            .ok_or(VgError::CreationFailed { what: "child image" })?;
        Self::from_handle(&self.vg, handle)
    }

    /// The closest ancestor of this image still alive (or this image's own
    /// handle if it has none).
    pub fn parent_handle(&self) -> VgResult<ImageHandle> {
        let raw = unsafe { (self.vg.lib().vgGetParent)(self.handle.raw()) };
        self.vg.check(())?;
        Handle::new(raw)
            .map(ImageHandle::from)
            .ok_or(VgError::CreationFailed { what: "parent image" })
    }

    /// Copy a rectangle from `src` into this image, with optional
    /// dithering.
    pub fn copy_from(
        &self,
        dx: i32,
        dy: i32,
        src: &Image,
        src_rect: Rect,
        dither: bool,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgCopyImage)(
                self.handle.raw(),
                dx,
                dy,
                src.handle.raw(),
                src_rect.x,
                src_rect.y,
                src_rect.width,
                src_rect.height,
                vg_bool(dither),
            )
        };
        self.vg.check(())
    }

    /// Draw this image through the image-user-to-surface transform.
    pub fn draw(&self) -> VgResult<()> {
        unsafe { (self.vg.lib().vgDrawImage)(self.handle.raw()) };
        self.vg.check(())
    }

    // -- image filters (this image is the destination) --------------------

    /// Apply a 4×5 color transform matrix to `src`, writing into this
    /// image.
    ///
    /// `matrix` is 20 values in column-major order: four rows of output
    /// weights followed by the bias column.
    pub fn color_matrix(&self, src: &Image, matrix: &[f32; 20]) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgColorMatrix)(
                self.handle.raw(),
                src.handle.raw(),
                matrix.as_ptr(),
            )
        };
        self.vg.check(())
    }

    /// Convolve `src` with a `kernel_width` × `kernel_height` kernel,
    /// writing into this image.
    ///
    /// `kernel` is laid out column-major and must hold exactly
    /// `kernel_width * kernel_height` entries.
    #[allow(clippy::too_many_arguments)]
    pub fn convolve(
        &self,
        src: &Image,
        kernel_width: i32,
        kernel_height: i32,
        shift_x: i32,
        shift_y: i32,
        kernel: &[i16],
        scale: f32,
        bias: f32,
        tiling_mode: TilingMode,
    ) -> VgResult<()> {
        if kernel_width <= 0 || kernel_height <= 0 {
            return Err(VgError::data(format!(
                "non-positive kernel dimensions {kernel_width}x{kernel_height}"
            )));
        }
        if kernel.len() != (kernel_width as usize) * (kernel_height as usize) {
            return Err(VgError::data(format!(
                "{kernel_width}x{kernel_height} kernel needs {} entries, got {}",
                kernel_width * kernel_height,
                kernel.len()
            )));
        }
        unsafe {
            (self.vg.lib().vgConvolve)(
                self.handle.raw(),
                src.handle.raw(),
                kernel_width,
                kernel_height,
                shift_x,
                shift_y,
                kernel.as_ptr(),
                scale,
                bias,
                tiling_mode.raw(),
            )
        };
        self.vg.check(())
    }

    /// Convolve `src` with a separable kernel (one horizontal and one
    /// vertical vector), writing into this image.
    #[allow(clippy::too_many_arguments)]
    pub fn separable_convolve(
        &self,
        src: &Image,
        kernel_x: &[i16],
        kernel_y: &[i16],
        shift_x: i32,
        shift_y: i32,
        scale: f32,
        bias: f32,
        tiling_mode: TilingMode,
    ) -> VgResult<()> {
        if kernel_x.is_empty() || kernel_y.is_empty() {
            return Err(VgError::data("separable kernel vectors must be non-empty"));
        }
        unsafe {
            (self.vg.lib().vgSeparableConvolve)(
                self.handle.raw(),
                src.handle.raw(),
                kernel_x.len() as i32,
                kernel_y.len() as i32,
                shift_x,
                shift_y,
                kernel_x.as_ptr(),
                kernel_y.as_ptr(),
                scale,
                bias,
                tiling_mode.raw(),
            )
        };
        self.vg.check(())
    }

    /// Gaussian-blur `src` into this image.
    ///
    /// Both standard deviations must be positive.
    pub fn gaussian_blur(
        &self,
        src: &Image,
        std_deviation_x: f32,
        std_deviation_y: f32,
        tiling_mode: TilingMode,
    ) -> VgResult<()> {
        if std_deviation_x <= 0.0 || std_deviation_y <= 0.0 {
            return Err(VgError::data(format!(
                "non-positive blur deviation ({std_deviation_x}, {std_deviation_y})"
            )));
        }
        unsafe {
            (self.vg.lib().vgGaussianBlur)(
                self.handle.raw(),
                src.handle.raw(),
                std_deviation_x,
                std_deviation_y,
                tiling_mode.raw(),
            )
        };
        self.vg.check(())
    }

    /// Remap each channel of `src` through its own 256-entry table, writing
    /// into this image.
    pub fn lookup(
        &self,
        src: &Image,
        red: &[u8; 256],
        green: &[u8; 256],
        blue: &[u8; 256],
        alpha: &[u8; 256],
        output_linear: bool,
        output_premultiplied: bool,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgLookup)(
                self.handle.raw(),
                src.handle.raw(),
                red.as_ptr(),
                green.as_ptr(),
                blue.as_ptr(),
                alpha.as_ptr(),
                vg_bool(output_linear),
                vg_bool(output_premultiplied),
            )
        };
        self.vg.check(())
    }

    /// Remap one channel of `src` through a 256-entry table of packed RGBA
    /// values, writing into this image.
    pub fn lookup_single(
        &self,
        src: &Image,
        table: &[u32; 256],
        source_channel: ImageChannel,
        output_linear: bool,
        output_premultiplied: bool,
    ) -> VgResult<()> {
        unsafe {
            (self.vg.lib().vgLookupSingle)(
                self.handle.raw(),
                src.handle.raw(),
                table.as_ptr(),
                source_channel.raw(),
                vg_bool(output_linear),
                vg_bool(output_premultiplied),
            )
        };
        self.vg.check(())
    }

    /// The pixel format as stored by the implementation.
    pub fn queried_format(&self) -> VgResult<ImageFormat> {
        let raw = self.get_parami(consts::VG_IMAGE_FORMAT)?;
        ImageFormat::from_raw_checked(raw as u32)
    }

    fn get_parami(&self, param: VGint) -> VgResult<i32> {
        let value = unsafe {
            (self.vg.lib().vgGetParameteri)(self.handle.raw(), param)
        };
        self.vg.check(value)
    }
}

impl Drop for Image {
    fn drop(&mut self) {
        unsafe { (self.vg.lib().vgDestroyImage)(self.handle.raw()) };
        if let Some(err) = self.vg.last_error() {
            tracing::debug!(handle = %self.handle, %err, "vgDestroyImage failed");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_value_fixtures() {
        const F: &[(ImageFormat, u32)] = &[
            (ImageFormat::SRgbx8888, 0),
            (ImageFormat::A4, 14),
            (ImageFormat::SXrgb8888, 64),
            (ImageFormat::LArgb8888Pre, 73),
            (ImageFormat::SBgrx8888, 128),
            (ImageFormat::LBgra8888Pre, 136),
            (ImageFormat::SXbgr8888, 192),
            (ImageFormat::LAbgr8888Pre, 201),
        ];

        for (format, raw) in F.iter() {
            assert_eq!(*raw, format.raw());
            assert_eq!(Some(*format), ImageFormat::from_raw(*raw));
        }

        // Gaps in the numeric table stay unmapped.
        assert_eq!(None, ImageFormat::from_raw(15));
        assert_eq!(None, ImageFormat::from_raw(67));
        assert_eq!(None, ImageFormat::from_raw(195));
    }

    #[test]
    fn bits_per_pixel_fixtures() {
        assert_eq!(32, ImageFormat::SRgba8888.bits_per_pixel());
        assert_eq!(16, ImageFormat::SRgb565.bits_per_pixel());
        assert_eq!(8, ImageFormat::A8.bits_per_pixel());
        assert_eq!(4, ImageFormat::A4.bits_per_pixel());
        assert_eq!(1, ImageFormat::Bw1.bits_per_pixel());
        assert_eq!(1, ImageFormat::A1.bits_per_pixel());
    }

    #[test]
    fn required_bytes_math() {
        // 10x4 of 32-bit pixels, tightly packed.
        assert_eq!(
            Ok(160),
            required_bytes(ImageFormat::SRgba8888, 40, 10, 4)
        );
        // Padded stride only pads between rows, not after the last.
        assert_eq!(
            Ok(64 * 3 + 40),
            required_bytes(ImageFormat::SRgba8888, 64, 10, 4)
        );
        // 1-bit rows round up to whole bytes.
        assert_eq!(Ok(2), required_bytes(ImageFormat::Bw1, 2, 10, 1));
        // Empty regions need nothing.
        assert_eq!(Ok(0), required_bytes(ImageFormat::SRgba8888, 0, 0, 7));
        // A stride shorter than a row is rejected.
        assert!(required_bytes(ImageFormat::SRgba8888, 39, 10, 4).is_err());
        // Negative dimensions are rejected.
        assert!(required_bytes(ImageFormat::A8, 8, -1, 4).is_err());
    }

    #[test]
    fn channel_values() {
        assert_eq!(8, ImageChannel::Red.raw());
        assert_eq!(4, ImageChannel::Green.raw());
        assert_eq!(2, ImageChannel::Blue.raw());
        assert_eq!(1, ImageChannel::Alpha.raw());
    }
}
