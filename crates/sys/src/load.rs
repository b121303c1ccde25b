//! Runtime symbol resolution for the OpenVG shared library.

#![allow(non_snake_case)]

use std::ffi::c_void;

use crate::types::*;

/// The OpenVG library could not be loaded or is missing symbols.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The shared library itself could not be opened.
    #[error("failed to open OpenVG library {name:?}: {source}")]
    Library {
        /// The path or soname that was attempted.
        name: String,
        /// The underlying dlopen failure.
        #[source]
        source: libloading::Error,
    },

    /// A required symbol was not exported by the library.
    #[error("OpenVG library is missing symbol `{name}`: {source}")]
    Symbol {
        /// The C name of the missing symbol.
        name: &'static str,
        /// The underlying dlsym failure.
        #[source]
        source: libloading::Error,
    },
}

/// Copy one symbol out of the library as a bare function pointer.
///
/// # Safety
///
/// `T` must be the exact `unsafe extern "C" fn` type of the named export,
/// and the returned pointer must not outlive the library.
unsafe fn resolve<T: Copy>(
    lib: &libloading::Library,
    name: &'static str,
) -> Result<T, LoadError> {
    match unsafe { lib.get::<T>(name.as_bytes()) } {
        Ok(sym) => Ok(*sym),
        Err(source) => Err(LoadError::Symbol {
            name: name.trim_end_matches('\0'),
            source,
        }),
    }
}

/// Declare a table of `unsafe extern "C"` function pointers together with a
/// `resolve` constructor that looks every one of them up by its C name.
macro_rules! symbol_table {
    (
        $(#[$smeta:meta])*
        pub struct $table:ident {
            $(
                $(#[$fmeta:meta])*
                fn $fname:ident($($arg:ident: $aty:ty),* $(,)?) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$smeta])*
        #[derive(Clone, Copy)]
        pub struct $table {
            $(
                $(#[$fmeta])*
                pub $fname: unsafe extern "C" fn($($aty),*) $(-> $ret)?,
            )*
        }

        impl $table {
            /// Resolve every symbol in this table from `lib`.
            ///
            /// # Safety
            ///
            /// `lib` must export each symbol with the declared signature.
            pub unsafe fn resolve(
                lib: &libloading::Library,
            ) -> Result<Self, LoadError> {
                Ok(Self {
                    $(
                        $fname: unsafe {
                            resolve::<unsafe extern "C" fn($($aty),*) $(-> $ret)?>(
                                lib,
                                concat!(stringify!($fname), "\0"),
                            )?
                        },
                    )*
                })
            }
        }

        impl std::fmt::Debug for $table {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($table)).finish()
            }
        }
    };
}

symbol_table! {
    /// Every core OpenVG 1.1 entry point, by its order in the specification.
    ///
    /// All of these are mandatory; resolution fails if any is absent.
    pub struct CoreSyms {
        /// `VGErrorCode vgGetError(void)` (4.1)
        fn vgGetError() -> VGenum;
        /// `void vgFlush(void)` (4.3)
        fn vgFlush();
        /// `void vgFinish(void)` (4.3)
        fn vgFinish();

        /// `void vgSetf(VGParamType paramType, VGfloat value)` (5.2)
        fn vgSetf(param_type: VGenum, value: VGfloat);
        /// `void vgSeti(VGParamType paramType, VGint value)` (5.2)
        fn vgSeti(param_type: VGenum, value: VGint);
        /// `void vgSetfv(VGParamType paramType, VGint count, const VGfloat *values)` (5.2)
        fn vgSetfv(param_type: VGenum, count: VGint, values: *const VGfloat);
        /// `void vgSetiv(VGParamType paramType, VGint count, const VGint *values)` (5.2)
        fn vgSetiv(param_type: VGenum, count: VGint, values: *const VGint);
        /// `VGfloat vgGetf(VGParamType paramType)` (5.2)
        fn vgGetf(param_type: VGenum) -> VGfloat;
        /// `VGint vgGeti(VGParamType paramType)` (5.2)
        fn vgGeti(param_type: VGenum) -> VGint;
        /// `VGint vgGetVectorSize(VGParamType paramType)` (5.2)
        fn vgGetVectorSize(param_type: VGenum) -> VGint;
        /// `void vgGetfv(VGParamType paramType, VGint count, VGfloat *values)` (5.2)
        fn vgGetfv(param_type: VGenum, count: VGint, values: *mut VGfloat);
        /// `void vgGetiv(VGParamType paramType, VGint count, VGint *values)` (5.2)
        fn vgGetiv(param_type: VGenum, count: VGint, values: *mut VGint);

        /// `void vgSetParameterf(VGHandle object, VGint paramType, VGfloat value)` (5.3)
        fn vgSetParameterf(object: VGHandle, param_type: VGint, value: VGfloat);
        /// `void vgSetParameteri(VGHandle object, VGint paramType, VGint value)` (5.3)
        fn vgSetParameteri(object: VGHandle, param_type: VGint, value: VGint);
        /// `void vgSetParameterfv(VGHandle object, VGint paramType, VGint count, const VGfloat *values)` (5.3)
        fn vgSetParameterfv(object: VGHandle, param_type: VGint, count: VGint, values: *const VGfloat);
        /// `void vgSetParameteriv(VGHandle object, VGint paramType, VGint count, const VGint *values)` (5.3)
        fn vgSetParameteriv(object: VGHandle, param_type: VGint, count: VGint, values: *const VGint);
        /// `VGfloat vgGetParameterf(VGHandle object, VGint paramType)` (5.3)
        fn vgGetParameterf(object: VGHandle, param_type: VGint) -> VGfloat;
        /// `VGint vgGetParameteri(VGHandle object, VGint paramType)` (5.3)
        fn vgGetParameteri(object: VGHandle, param_type: VGint) -> VGint;
        /// `VGint vgGetParameterVectorSize(VGHandle object, VGint paramType)` (5.3)
        fn vgGetParameterVectorSize(object: VGHandle, param_type: VGint) -> VGint;
        /// `void vgGetParameterfv(VGHandle object, VGint paramType, VGint count, VGfloat *values)` (5.3)
        fn vgGetParameterfv(object: VGHandle, param_type: VGint, count: VGint, values: *mut VGfloat);
        /// `void vgGetParameteriv(VGHandle object, VGint paramType, VGint count, VGint *values)` (5.3)
        fn vgGetParameteriv(object: VGHandle, param_type: VGint, count: VGint, values: *mut VGint);

        /// `void vgLoadIdentity(void)` (6.6)
        fn vgLoadIdentity();
        /// `void vgLoadMatrix(const VGfloat *m)` (6.6)
        fn vgLoadMatrix(m: *const VGfloat);
        /// `void vgGetMatrix(VGfloat *m)` (6.6)
        fn vgGetMatrix(m: *mut VGfloat);
        /// `void vgMultMatrix(const VGfloat *m)` (6.6)
        fn vgMultMatrix(m: *const VGfloat);
        /// `void vgTranslate(VGfloat tx, VGfloat ty)` (6.6)
        fn vgTranslate(tx: VGfloat, ty: VGfloat);
        /// `void vgScale(VGfloat sx, VGfloat sy)` (6.6)
        fn vgScale(sx: VGfloat, sy: VGfloat);
        /// `void vgShear(VGfloat shx, VGfloat shy)` (6.6)
        fn vgShear(shx: VGfloat, shy: VGfloat);
        /// `void vgRotate(VGfloat angle)` (6.6)
        fn vgRotate(angle: VGfloat);

        /// `void vgMask(VGHandle mask, VGMaskOperation operation, VGint x, VGint y, VGint width, VGint height)` (7.2)
        fn vgMask(mask: VGHandle, operation: VGenum, x: VGint, y: VGint, width: VGint, height: VGint);
        /// `void vgRenderToMask(VGPath path, VGbitfield paintModes, VGMaskOperation operation)` (7.2)
        fn vgRenderToMask(path: VGPath, paint_modes: VGbitfield, operation: VGenum);
        /// `VGMaskLayer vgCreateMaskLayer(VGint width, VGint height)` (7.2)
        fn vgCreateMaskLayer(width: VGint, height: VGint) -> VGMaskLayer;
        /// `void vgDestroyMaskLayer(VGMaskLayer maskLayer)` (7.2)
        fn vgDestroyMaskLayer(mask_layer: VGMaskLayer);
        /// `void vgFillMaskLayer(VGMaskLayer maskLayer, VGint x, VGint y, VGint width, VGint height, VGfloat value)` (7.2)
        fn vgFillMaskLayer(mask_layer: VGMaskLayer, x: VGint, y: VGint, width: VGint, height: VGint, value: VGfloat);
        /// `void vgCopyMask(VGMaskLayer maskLayer, VGint dx, VGint dy, VGint sx, VGint sy, VGint width, VGint height)` (7.2)
        fn vgCopyMask(mask_layer: VGMaskLayer, dx: VGint, dy: VGint, sx: VGint, sy: VGint, width: VGint, height: VGint);
        /// `void vgClear(VGint x, VGint y, VGint width, VGint height)` (7.3)
        fn vgClear(x: VGint, y: VGint, width: VGint, height: VGint);

        /// `VGPath vgCreatePath(VGint pathFormat, VGPathDatatype datatype, VGfloat scale, VGfloat bias, VGint segmentCapacityHint, VGint coordCapacityHint, VGbitfield capabilities)` (8.6.2)
        fn vgCreatePath(path_format: VGint, datatype: VGenum, scale: VGfloat, bias: VGfloat, segment_capacity_hint: VGint, coord_capacity_hint: VGint, capabilities: VGbitfield) -> VGPath;
        /// `void vgClearPath(VGPath path, VGbitfield capabilities)` (8.6.2)
        fn vgClearPath(path: VGPath, capabilities: VGbitfield);
        /// `void vgDestroyPath(VGPath path)` (8.6.2)
        fn vgDestroyPath(path: VGPath);
        /// `VGbitfield vgGetPathCapabilities(VGPath path)` (8.6.4)
        fn vgGetPathCapabilities(path: VGPath) -> VGbitfield;
        /// `void vgRemovePathCapabilities(VGPath path, VGbitfield capabilities)` (8.6.4)
        fn vgRemovePathCapabilities(path: VGPath, capabilities: VGbitfield);
        /// `void vgAppendPath(VGPath dstPath, VGPath srcPath)` (8.6.5)
        fn vgAppendPath(dst_path: VGPath, src_path: VGPath);
        /// `void vgAppendPathData(VGPath dstPath, VGint numSegments, const VGubyte *pathSegments, const void *pathData)` (8.6.6)
        fn vgAppendPathData(dst_path: VGPath, num_segments: VGint, path_segments: *const VGubyte, path_data: *const c_void);
        /// `void vgModifyPathCoords(VGPath dstPath, VGint startIndex, VGint numSegments, const void *pathData)` (8.6.7)
        fn vgModifyPathCoords(dst_path: VGPath, start_index: VGint, num_segments: VGint, path_data: *const c_void);
        /// `void vgTransformPath(VGPath dstPath, VGPath srcPath)` (8.6.8)
        fn vgTransformPath(dst_path: VGPath, src_path: VGPath);
        /// `VGboolean vgInterpolatePath(VGPath dstPath, VGPath startPath, VGPath endPath, VGfloat amount)` (8.6.9)
        fn vgInterpolatePath(dst_path: VGPath, start_path: VGPath, end_path: VGPath, amount: VGfloat) -> VGboolean;
        /// `VGfloat vgPathLength(VGPath path, VGint startSegment, VGint numSegments)` (8.6.10)
        fn vgPathLength(path: VGPath, start_segment: VGint, num_segments: VGint) -> VGfloat;
        /// `void vgPointAlongPath(VGPath path, VGint startSegment, VGint numSegments, VGfloat distance, VGfloat *x, VGfloat *y, VGfloat *tangentX, VGfloat *tangentY)` (8.6.11)
        fn vgPointAlongPath(path: VGPath, start_segment: VGint, num_segments: VGint, distance: VGfloat, x: *mut VGfloat, y: *mut VGfloat, tangent_x: *mut VGfloat, tangent_y: *mut VGfloat);
        /// `void vgPathBounds(VGPath path, VGfloat *minX, VGfloat *minY, VGfloat *width, VGfloat *height)` (8.6.12)
        fn vgPathBounds(path: VGPath, min_x: *mut VGfloat, min_y: *mut VGfloat, width: *mut VGfloat, height: *mut VGfloat);
        /// `void vgPathTransformedBounds(VGPath path, VGfloat *minX, VGfloat *minY, VGfloat *width, VGfloat *height)` (8.6.12)
        fn vgPathTransformedBounds(path: VGPath, min_x: *mut VGfloat, min_y: *mut VGfloat, width: *mut VGfloat, height: *mut VGfloat);
        /// `void vgDrawPath(VGPath path, VGbitfield paintModes)` (8.8)
        fn vgDrawPath(path: VGPath, paint_modes: VGbitfield);

        /// `VGPaint vgCreatePaint(void)` (9.1.1)
        fn vgCreatePaint() -> VGPaint;
        /// `void vgDestroyPaint(VGPaint paint)` (9.1.1)
        fn vgDestroyPaint(paint: VGPaint);
        /// `void vgSetPaint(VGPaint paint, VGbitfield paintModes)` (9.1.2)
        fn vgSetPaint(paint: VGPaint, paint_modes: VGbitfield);
        /// `VGPaint vgGetPaint(VGPaintMode paintMode)` (9.1.2)
        fn vgGetPaint(paint_mode: VGenum) -> VGPaint;
        /// `void vgSetColor(VGPaint paint, VGuint rgba)` (9.2)
        fn vgSetColor(paint: VGPaint, rgba: VGuint);
        /// `VGuint vgGetColor(VGPaint paint)` (9.2)
        fn vgGetColor(paint: VGPaint) -> VGuint;
        /// `void vgPaintPattern(VGPaint paint, VGImage pattern)` (9.4)
        fn vgPaintPattern(paint: VGPaint, pattern: VGImage);

        /// `VGImage vgCreateImage(VGImageFormat format, VGint width, VGint height, VGbitfield allowedQuality)` (10.3)
        fn vgCreateImage(format: VGenum, width: VGint, height: VGint, allowed_quality: VGbitfield) -> VGImage;
        /// `void vgDestroyImage(VGImage image)` (10.3)
        fn vgDestroyImage(image: VGImage);
        /// `void vgClearImage(VGImage image, VGint x, VGint y, VGint width, VGint height)` (10.5)
        fn vgClearImage(image: VGImage, x: VGint, y: VGint, width: VGint, height: VGint);
        /// `void vgImageSubData(VGImage image, const void *data, VGint dataStride, VGImageFormat dataFormat, VGint x, VGint y, VGint width, VGint height)` (10.5)
        fn vgImageSubData(image: VGImage, data: *const c_void, data_stride: VGint, data_format: VGenum, x: VGint, y: VGint, width: VGint, height: VGint);
        /// `void vgGetImageSubData(VGImage image, void *data, VGint dataStride, VGImageFormat dataFormat, VGint x, VGint y, VGint width, VGint height)` (10.5)
        fn vgGetImageSubData(image: VGImage, data: *mut c_void, data_stride: VGint, data_format: VGenum, x: VGint, y: VGint, width: VGint, height: VGint);
        /// `VGImage vgChildImage(VGImage parent, VGint x, VGint y, VGint width, VGint height)` (10.6)
        fn vgChildImage(parent: VGImage, x: VGint, y: VGint, width: VGint, height: VGint) -> VGImage;
        /// `VGImage vgGetParent(VGImage image)` (10.6)
        fn vgGetParent(image: VGImage) -> VGImage;
        /// `void vgCopyImage(VGImage dst, VGint dx, VGint dy, VGImage src, VGint sx, VGint sy, VGint width, VGint height, VGboolean dither)` (10.7)
        fn vgCopyImage(dst: VGImage, dx: VGint, dy: VGint, src: VGImage, sx: VGint, sy: VGint, width: VGint, height: VGint, dither: VGboolean);
        /// `void vgDrawImage(VGImage image)` (10.8)
        fn vgDrawImage(image: VGImage);
        /// `void vgSetPixels(VGint dx, VGint dy, VGImage src, VGint sx, VGint sy, VGint width, VGint height)` (10.9.1)
        fn vgSetPixels(dx: VGint, dy: VGint, src: VGImage, sx: VGint, sy: VGint, width: VGint, height: VGint);
        /// `void vgWritePixels(const void *data, VGint dataStride, VGImageFormat dataFormat, VGint dx, VGint dy, VGint width, VGint height)` (10.9.1)
        fn vgWritePixels(data: *const c_void, data_stride: VGint, data_format: VGenum, dx: VGint, dy: VGint, width: VGint, height: VGint);
        /// `void vgGetPixels(VGImage dst, VGint dx, VGint dy, VGint sx, VGint sy, VGint width, VGint height)` (10.9.2)
        fn vgGetPixels(dst: VGImage, dx: VGint, dy: VGint, sx: VGint, sy: VGint, width: VGint, height: VGint);
        /// `void vgReadPixels(void *data, VGint dataStride, VGImageFormat dataFormat, VGint sx, VGint sy, VGint width, VGint height)` (10.9.2)
        fn vgReadPixels(data: *mut c_void, data_stride: VGint, data_format: VGenum, sx: VGint, sy: VGint, width: VGint, height: VGint);
        /// `void vgCopyPixels(VGint dx, VGint dy, VGint sx, VGint sy, VGint width, VGint height)` (10.10)
        fn vgCopyPixels(dx: VGint, dy: VGint, sx: VGint, sy: VGint, width: VGint, height: VGint);

        /// `VGFont vgCreateFont(VGint glyphCapacityHint)` (11.4.2)
        fn vgCreateFont(glyph_capacity_hint: VGint) -> VGFont;
        /// `void vgDestroyFont(VGFont font)` (11.4.2)
        fn vgDestroyFont(font: VGFont);
        /// `void vgSetGlyphToPath(VGFont font, VGuint glyphIndex, VGPath path, VGboolean isHinted, const VGfloat glyphOrigin[2], const VGfloat escapement[2])` (11.4.4)
        fn vgSetGlyphToPath(font: VGFont, glyph_index: VGuint, path: VGPath, is_hinted: VGboolean, glyph_origin: *const VGfloat, escapement: *const VGfloat);
        /// `void vgSetGlyphToImage(VGFont font, VGuint glyphIndex, VGImage image, const VGfloat glyphOrigin[2], const VGfloat escapement[2])` (11.4.4)
        fn vgSetGlyphToImage(font: VGFont, glyph_index: VGuint, image: VGImage, glyph_origin: *const VGfloat, escapement: *const VGfloat);
        /// `void vgClearGlyph(VGFont font, VGuint glyphIndex)` (11.4.4)
        fn vgClearGlyph(font: VGFont, glyph_index: VGuint);
        /// `void vgDrawGlyph(VGFont font, VGuint glyphIndex, VGbitfield paintModes, VGboolean allowAutoHinting)` (11.5)
        fn vgDrawGlyph(font: VGFont, glyph_index: VGuint, paint_modes: VGbitfield, allow_auto_hinting: VGboolean);
        /// `void vgDrawGlyphs(VGFont font, VGint glyphCount, const VGuint *glyphIndices, const VGfloat *adjustmentsX, const VGfloat *adjustmentsY, VGbitfield paintModes, VGboolean allowAutoHinting)` (11.5)
        fn vgDrawGlyphs(font: VGFont, glyph_count: VGint, glyph_indices: *const VGuint, adjustments_x: *const VGfloat, adjustments_y: *const VGfloat, paint_modes: VGbitfield, allow_auto_hinting: VGboolean);

        /// `void vgColorMatrix(VGImage dst, VGImage src, const VGfloat *matrix)` (12.3)
        fn vgColorMatrix(dst: VGImage, src: VGImage, matrix: *const VGfloat);
        /// `void vgConvolve(VGImage dst, VGImage src, VGint kernelWidth, VGint kernelHeight, VGint shiftX, VGint shiftY, const VGshort *kernel, VGfloat scale, VGfloat bias, VGTilingMode tilingMode)` (12.4)
        fn vgConvolve(dst: VGImage, src: VGImage, kernel_width: VGint, kernel_height: VGint, shift_x: VGint, shift_y: VGint, kernel: *const VGshort, scale: VGfloat, bias: VGfloat, tiling_mode: VGenum);
        /// `void vgSeparableConvolve(VGImage dst, VGImage src, VGint kernelWidth, VGint kernelHeight, VGint shiftX, VGint shiftY, const VGshort *kernelX, const VGshort *kernelY, VGfloat scale, VGfloat bias, VGTilingMode tilingMode)` (12.4)
        fn vgSeparableConvolve(dst: VGImage, src: VGImage, kernel_width: VGint, kernel_height: VGint, shift_x: VGint, shift_y: VGint, kernel_x: *const VGshort, kernel_y: *const VGshort, scale: VGfloat, bias: VGfloat, tiling_mode: VGenum);
        /// `void vgGaussianBlur(VGImage dst, VGImage src, VGfloat stdDeviationX, VGfloat stdDeviationY, VGTilingMode tilingMode)` (12.4)
        fn vgGaussianBlur(dst: VGImage, src: VGImage, std_deviation_x: VGfloat, std_deviation_y: VGfloat, tiling_mode: VGenum);
        /// `void vgLookup(VGImage dst, VGImage src, const VGubyte *redLUT, const VGubyte *greenLUT, const VGubyte *blueLUT, const VGubyte *alphaLUT, VGboolean outputLinear, VGboolean outputPremultiplied)` (12.5)
        fn vgLookup(dst: VGImage, src: VGImage, red_lut: *const VGubyte, green_lut: *const VGubyte, blue_lut: *const VGubyte, alpha_lut: *const VGubyte, output_linear: VGboolean, output_premultiplied: VGboolean);
        /// `void vgLookupSingle(VGImage dst, VGImage src, const VGuint *lookupTable, VGImageChannel sourceChannel, VGboolean outputLinear, VGboolean outputPremultiplied)` (12.5)
        fn vgLookupSingle(dst: VGImage, src: VGImage, lookup_table: *const VGuint, source_channel: VGenum, output_linear: VGboolean, output_premultiplied: VGboolean);

        /// `VGHardwareQueryResult vgHardwareQuery(VGHardwareQueryType key, VGint setting)` (14.3)
        fn vgHardwareQuery(key: VGenum, setting: VGint) -> VGenum;
        /// `const VGubyte *vgGetString(VGStringID name)` (15.3)
        fn vgGetString(name: VGenum) -> *const VGubyte;
    }
}

symbol_table! {
    /// The VGU 1.1 utility entry points (17).
    ///
    /// VGU is optional for OpenVG implementations, so these are resolved on a
    /// best-effort basis and kept separate from [CoreSyms].
    pub struct VguSyms {
        /// `VGUErrorCode vguLine(VGPath path, VGfloat x0, VGfloat y0, VGfloat x1, VGfloat y1)` (17.1)
        fn vguLine(path: VGPath, x0: VGfloat, y0: VGfloat, x1: VGfloat, y1: VGfloat) -> VGenum;
        /// `VGUErrorCode vguPolygon(VGPath path, const VGfloat *points, VGint count, VGboolean closed)` (17.1)
        fn vguPolygon(path: VGPath, points: *const VGfloat, count: VGint, closed: VGboolean) -> VGenum;
        /// `VGUErrorCode vguRect(VGPath path, VGfloat x, VGfloat y, VGfloat width, VGfloat height)` (17.1)
        fn vguRect(path: VGPath, x: VGfloat, y: VGfloat, width: VGfloat, height: VGfloat) -> VGenum;
        /// `VGUErrorCode vguRoundRect(VGPath path, VGfloat x, VGfloat y, VGfloat width, VGfloat height, VGfloat arcWidth, VGfloat arcHeight)` (17.1)
        fn vguRoundRect(path: VGPath, x: VGfloat, y: VGfloat, width: VGfloat, height: VGfloat, arc_width: VGfloat, arc_height: VGfloat) -> VGenum;
        /// `VGUErrorCode vguEllipse(VGPath path, VGfloat cx, VGfloat cy, VGfloat width, VGfloat height)` (17.1)
        fn vguEllipse(path: VGPath, cx: VGfloat, cy: VGfloat, width: VGfloat, height: VGfloat) -> VGenum;
        /// `VGUErrorCode vguArc(VGPath path, VGfloat x, VGfloat y, VGfloat width, VGfloat height, VGfloat startAngle, VGfloat angleExtent, VGUArcType arcType)` (17.1)
        fn vguArc(path: VGPath, x: VGfloat, y: VGfloat, width: VGfloat, height: VGfloat, start_angle: VGfloat, angle_extent: VGfloat, arc_type: VGenum) -> VGenum;
        /// `VGUErrorCode vguComputeWarpQuadToSquare(VGfloat sx0, VGfloat sy0, VGfloat sx1, VGfloat sy1, VGfloat sx2, VGfloat sy2, VGfloat sx3, VGfloat sy3, VGfloat *matrix)` (17.2)
        fn vguComputeWarpQuadToSquare(sx0: VGfloat, sy0: VGfloat, sx1: VGfloat, sy1: VGfloat, sx2: VGfloat, sy2: VGfloat, sx3: VGfloat, sy3: VGfloat, matrix: *mut VGfloat) -> VGenum;
        /// `VGUErrorCode vguComputeWarpSquareToQuad(VGfloat dx0, VGfloat dy0, VGfloat dx1, VGfloat dy1, VGfloat dx2, VGfloat dy2, VGfloat dx3, VGfloat dy3, VGfloat *matrix)` (17.2)
        fn vguComputeWarpSquareToQuad(dx0: VGfloat, dy0: VGfloat, dx1: VGfloat, dy1: VGfloat, dx2: VGfloat, dy2: VGfloat, dx3: VGfloat, dy3: VGfloat, matrix: *mut VGfloat) -> VGenum;
        /// `VGUErrorCode vguComputeWarpQuadToQuad(VGfloat dx0, VGfloat dy0, VGfloat dx1, VGfloat dy1, VGfloat dx2, VGfloat dy2, VGfloat dx3, VGfloat dy3, VGfloat sx0, VGfloat sy0, VGfloat sx1, VGfloat sy1, VGfloat sx2, VGfloat sy2, VGfloat sx3, VGfloat sy3, VGfloat *matrix)` (17.2)
        fn vguComputeWarpQuadToQuad(dx0: VGfloat, dy0: VGfloat, dx1: VGfloat, dy1: VGfloat, dx2: VGfloat, dy2: VGfloat, dx3: VGfloat, dy3: VGfloat, sx0: VGfloat, sy0: VGfloat, sx1: VGfloat, sy1: VGfloat, sx2: VGfloat, sy2: VGfloat, sx3: VGfloat, sy3: VGfloat, matrix: *mut VGfloat) -> VGenum;
    }
}

/// A loaded OpenVG library: the open library handle plus every resolved
/// symbol.
///
/// The symbol pointers remain valid for as long as this value lives; the
/// library is only closed when it is dropped. `VgLib` dereferences to
/// [CoreSyms], so core entry points can be called directly:
///
/// ```ignore
/// let lib = unsafe { VgLib::load("libOpenVG.so.1", true) }?;
/// let err = unsafe { (lib.vgGetError)() };
/// ```
pub struct VgLib {
    core: CoreSyms,
    /// The VGU symbol table, if VGU was requested and is exported.
    pub vgu: Option<VguSyms>,
    _lib: libloading::Library,
}

impl VgLib {
    /// Open the shared library at `name` (a path or plain soname) and
    /// resolve the OpenVG 1.1 symbol tables from it.
    ///
    /// When `with_vgu` is set, the VGU symbols are also resolved; a library
    /// that does not export them still loads, with [VgLib::vgu] left `None`.
    ///
    /// # Safety
    ///
    /// Loading a shared library runs its initialization code, and the
    /// resolved symbols are trusted to have the OpenVG 1.1 signatures.
    /// `name` must refer to a genuine OpenVG implementation.
    pub unsafe fn load(
        name: impl AsRef<std::ffi::OsStr>,
        with_vgu: bool,
    ) -> Result<Self, LoadError> {
        let name = name.as_ref();
        let lib = unsafe { libloading::Library::new(name) }.map_err(|source| {
            LoadError::Library {
                name: name.to_string_lossy().into_owned(),
                source,
            }
        })?;
        let core = unsafe { CoreSyms::resolve(&lib)? };
        let vgu = if with_vgu {
            unsafe { VguSyms::resolve(&lib) }.ok()
        } else {
            None
        };
        Ok(Self {
            core,
            vgu,
            _lib: lib,
        })
    }
}

impl std::ops::Deref for VgLib {
    type Target = CoreSyms;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl std::fmt::Debug for VgLib {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VgLib")
            .field("vgu", &self.vgu.is_some())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn load_reports_missing_library() {
        let err = unsafe { VgLib::load("libNoSuchOpenVG-rovg-test.so.99", true) }
            .expect_err("bogus soname must not load");
        match err {
            LoadError::Library { name, .. } => {
                assert_eq!(name, "libNoSuchOpenVG-rovg-test.so.99");
            }
            other => panic!("expected Library error, got {other:?}"),
        }
    }
}
