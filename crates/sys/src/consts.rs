//! Numeric constants for the OpenVG 1.1 and VGU 1.1 enumerations.
//!
//! Values are grouped by the section of the OpenVG 1.1 specification that
//! defines them. Only the constants belonging to the core API and the VGU
//! utility library appear here; extension constants do not.

use crate::types::{VGbitfield, VGenum, VGfloat, VGHandle, VGint, VGubyte};

/// The OpenVG version wrapped by this crate.
pub const OPENVG_VERSION: (u32, u32) = (1, 1);

/// A handle value that never refers to a live object.
pub const VG_INVALID_HANDLE: VGHandle = 0;

/// `VGboolean` false.
pub const VG_FALSE: VGenum = 0;
/// `VGboolean` true.
pub const VG_TRUE: VGenum = 1;

/// The largest `VGfloat` OpenVG is required to accept (4.2).
pub const VG_MAX_FLOAT_MINIMUM: VGfloat = 1e10;

// ---------------------------------------------------------------- 4.1 errors

/// No error has occurred since the last call to `vgGetError`.
pub const VG_NO_ERROR: VGenum = 0;
/// An invalid handle was supplied.
pub const VG_BAD_HANDLE_ERROR: VGenum = 0x1000;
/// An argument was invalid.
pub const VG_ILLEGAL_ARGUMENT_ERROR: VGenum = 0x1001;
/// The implementation could not allocate the required memory.
pub const VG_OUT_OF_MEMORY_ERROR: VGenum = 0x1002;
/// A required path capability was not enabled on the path.
pub const VG_PATH_CAPABILITY_ERROR: VGenum = 0x1003;
/// The implementation does not support the given image format.
pub const VG_UNSUPPORTED_IMAGE_FORMAT_ERROR: VGenum = 0x1004;
/// The implementation does not support the given path format.
pub const VG_UNSUPPORTED_PATH_FORMAT_ERROR: VGenum = 0x1005;
/// The image is currently in use as a rendering target.
pub const VG_IMAGE_IN_USE_ERROR: VGenum = 0x1006;
/// No OpenVG context is current on this thread.
pub const VG_NO_CONTEXT_ERROR: VGenum = 0x1007;

// -------------------------------------------- 5.2 context parameter types

/// `VG_MATRIX_MODE`
pub const VG_MATRIX_MODE: VGenum = 0x1100;
/// `VG_FILL_RULE`
pub const VG_FILL_RULE: VGenum = 0x1101;
/// `VG_IMAGE_QUALITY`
pub const VG_IMAGE_QUALITY: VGenum = 0x1102;
/// `VG_RENDERING_QUALITY`
pub const VG_RENDERING_QUALITY: VGenum = 0x1103;
/// `VG_BLEND_MODE`
pub const VG_BLEND_MODE: VGenum = 0x1104;
/// `VG_IMAGE_MODE`
pub const VG_IMAGE_MODE: VGenum = 0x1105;
/// `VG_SCISSOR_RECTS` (vector of 4-integer rectangles)
pub const VG_SCISSOR_RECTS: VGenum = 0x1106;
/// `VG_COLOR_TRANSFORM`
pub const VG_COLOR_TRANSFORM: VGenum = 0x1170;
/// `VG_COLOR_TRANSFORM_VALUES` (vector of 8 floats)
pub const VG_COLOR_TRANSFORM_VALUES: VGenum = 0x1171;
/// `VG_STROKE_LINE_WIDTH`
pub const VG_STROKE_LINE_WIDTH: VGenum = 0x1110;
/// `VG_STROKE_CAP_STYLE`
pub const VG_STROKE_CAP_STYLE: VGenum = 0x1111;
/// `VG_STROKE_JOIN_STYLE`
pub const VG_STROKE_JOIN_STYLE: VGenum = 0x1112;
/// `VG_STROKE_MITER_LIMIT`
pub const VG_STROKE_MITER_LIMIT: VGenum = 0x1113;
/// `VG_STROKE_DASH_PATTERN` (vector of floats)
pub const VG_STROKE_DASH_PATTERN: VGenum = 0x1114;
/// `VG_STROKE_DASH_PHASE`
pub const VG_STROKE_DASH_PHASE: VGenum = 0x1115;
/// `VG_STROKE_DASH_PHASE_RESET`
pub const VG_STROKE_DASH_PHASE_RESET: VGenum = 0x1116;
/// `VG_TILE_FILL_COLOR` (vector of 4 floats)
pub const VG_TILE_FILL_COLOR: VGenum = 0x1120;
/// `VG_CLEAR_COLOR` (vector of 4 floats)
pub const VG_CLEAR_COLOR: VGenum = 0x1121;
/// `VG_GLYPH_ORIGIN` (vector of 2 floats)
pub const VG_GLYPH_ORIGIN: VGenum = 0x1122;
/// `VG_MASKING`
pub const VG_MASKING: VGenum = 0x1130;
/// `VG_SCISSORING`
pub const VG_SCISSORING: VGenum = 0x1131;
/// `VG_PIXEL_LAYOUT`
pub const VG_PIXEL_LAYOUT: VGenum = 0x1140;
/// `VG_SCREEN_LAYOUT` (read-only)
pub const VG_SCREEN_LAYOUT: VGenum = 0x1141;
/// `VG_FILTER_FORMAT_LINEAR`
pub const VG_FILTER_FORMAT_LINEAR: VGenum = 0x1150;
/// `VG_FILTER_FORMAT_PREMULTIPLIED`
pub const VG_FILTER_FORMAT_PREMULTIPLIED: VGenum = 0x1151;
/// `VG_FILTER_CHANNEL_MASK`
pub const VG_FILTER_CHANNEL_MASK: VGenum = 0x1152;

/// `VG_MAX_SCISSOR_RECTS` (read-only)
pub const VG_MAX_SCISSOR_RECTS: VGenum = 0x1160;
/// `VG_MAX_DASH_COUNT` (read-only)
pub const VG_MAX_DASH_COUNT: VGenum = 0x1161;
/// `VG_MAX_KERNEL_SIZE` (read-only)
pub const VG_MAX_KERNEL_SIZE: VGenum = 0x1162;
/// `VG_MAX_SEPARABLE_KERNEL_SIZE` (read-only)
pub const VG_MAX_SEPARABLE_KERNEL_SIZE: VGenum = 0x1163;
/// `VG_MAX_COLOR_RAMP_STOPS` (read-only)
pub const VG_MAX_COLOR_RAMP_STOPS: VGenum = 0x1164;
/// `VG_MAX_IMAGE_WIDTH` (read-only)
pub const VG_MAX_IMAGE_WIDTH: VGenum = 0x1165;
/// `VG_MAX_IMAGE_HEIGHT` (read-only)
pub const VG_MAX_IMAGE_HEIGHT: VGenum = 0x1166;
/// `VG_MAX_IMAGE_PIXELS` (read-only)
pub const VG_MAX_IMAGE_PIXELS: VGenum = 0x1167;
/// `VG_MAX_IMAGE_BYTES` (read-only)
pub const VG_MAX_IMAGE_BYTES: VGenum = 0x1168;
/// `VG_MAX_FLOAT` (read-only)
pub const VG_MAX_FLOAT: VGenum = 0x1169;
/// `VG_MAX_GAUSSIAN_STD_DEVIATION` (read-only)
pub const VG_MAX_GAUSSIAN_STD_DEVIATION: VGenum = 0x116A;

// ------------------------------------------------------- 6.6 matrix modes

/// `VG_MATRIX_PATH_USER_TO_SURFACE`
pub const VG_MATRIX_PATH_USER_TO_SURFACE: VGenum = 0x1400;
/// `VG_MATRIX_IMAGE_USER_TO_SURFACE`
pub const VG_MATRIX_IMAGE_USER_TO_SURFACE: VGenum = 0x1401;
/// `VG_MATRIX_FILL_PAINT_TO_USER`
pub const VG_MATRIX_FILL_PAINT_TO_USER: VGenum = 0x1402;
/// `VG_MATRIX_STROKE_PAINT_TO_USER`
pub const VG_MATRIX_STROKE_PAINT_TO_USER: VGenum = 0x1403;
/// `VG_MATRIX_GLYPH_USER_TO_SURFACE`
pub const VG_MATRIX_GLYPH_USER_TO_SURFACE: VGenum = 0x1404;

// ---------------------------------------------------- 7.2 mask operations

/// `VG_CLEAR_MASK`
pub const VG_CLEAR_MASK: VGenum = 0x1500;
/// `VG_FILL_MASK`
pub const VG_FILL_MASK: VGenum = 0x1501;
/// `VG_SET_MASK`
pub const VG_SET_MASK: VGenum = 0x1502;
/// `VG_UNION_MASK`
pub const VG_UNION_MASK: VGenum = 0x1503;
/// `VG_INTERSECT_MASK`
pub const VG_INTERSECT_MASK: VGenum = 0x1504;
/// `VG_SUBTRACT_MASK`
pub const VG_SUBTRACT_MASK: VGenum = 0x1505;

// --------------------------------------------------------------- 8.5 paths

/// The only path format defined by OpenVG 1.1.
pub const VG_PATH_FORMAT_STANDARD: VGint = 0;

/// `VG_PATH_DATATYPE_S_8`
pub const VG_PATH_DATATYPE_S_8: VGenum = 0;
/// `VG_PATH_DATATYPE_S_16`
pub const VG_PATH_DATATYPE_S_16: VGenum = 1;
/// `VG_PATH_DATATYPE_S_32`
pub const VG_PATH_DATATYPE_S_32: VGenum = 2;
/// `VG_PATH_DATATYPE_F`
pub const VG_PATH_DATATYPE_F: VGenum = 3;

/// `VG_ABSOLUTE`: segment coordinates are absolute.
pub const VG_ABSOLUTE: VGubyte = 0;
/// `VG_RELATIVE`: segment coordinates are relative to the current point.
pub const VG_RELATIVE: VGubyte = 1;

/// `VG_CLOSE_PATH`
pub const VG_CLOSE_PATH: VGubyte = 0 << 1;
/// `VG_MOVE_TO`
pub const VG_MOVE_TO: VGubyte = 1 << 1;
/// `VG_LINE_TO`
pub const VG_LINE_TO: VGubyte = 2 << 1;
/// `VG_HLINE_TO`
pub const VG_HLINE_TO: VGubyte = 3 << 1;
/// `VG_VLINE_TO`
pub const VG_VLINE_TO: VGubyte = 4 << 1;
/// `VG_QUAD_TO`
pub const VG_QUAD_TO: VGubyte = 5 << 1;
/// `VG_CUBIC_TO`
pub const VG_CUBIC_TO: VGubyte = 6 << 1;
/// `VG_SQUAD_TO`
pub const VG_SQUAD_TO: VGubyte = 7 << 1;
/// `VG_SCUBIC_TO`
pub const VG_SCUBIC_TO: VGubyte = 8 << 1;
/// `VG_SCCWARC_TO`
pub const VG_SCCWARC_TO: VGubyte = 9 << 1;
/// `VG_SCWARC_TO`
pub const VG_SCWARC_TO: VGubyte = 10 << 1;
/// `VG_LCCWARC_TO`
pub const VG_LCCWARC_TO: VGubyte = 11 << 1;
/// `VG_LCWARC_TO`
pub const VG_LCWARC_TO: VGubyte = 12 << 1;

/// `VG_PATH_CAPABILITY_APPEND_FROM`
pub const VG_PATH_CAPABILITY_APPEND_FROM: VGbitfield = 1 << 0;
/// `VG_PATH_CAPABILITY_APPEND_TO`
pub const VG_PATH_CAPABILITY_APPEND_TO: VGbitfield = 1 << 1;
/// `VG_PATH_CAPABILITY_MODIFY`
pub const VG_PATH_CAPABILITY_MODIFY: VGbitfield = 1 << 2;
/// `VG_PATH_CAPABILITY_TRANSFORM_FROM`
pub const VG_PATH_CAPABILITY_TRANSFORM_FROM: VGbitfield = 1 << 3;
/// `VG_PATH_CAPABILITY_TRANSFORM_TO`
pub const VG_PATH_CAPABILITY_TRANSFORM_TO: VGbitfield = 1 << 4;
/// `VG_PATH_CAPABILITY_INTERPOLATE_FROM`
pub const VG_PATH_CAPABILITY_INTERPOLATE_FROM: VGbitfield = 1 << 5;
/// `VG_PATH_CAPABILITY_INTERPOLATE_TO`
pub const VG_PATH_CAPABILITY_INTERPOLATE_TO: VGbitfield = 1 << 6;
/// `VG_PATH_CAPABILITY_PATH_LENGTH`
pub const VG_PATH_CAPABILITY_PATH_LENGTH: VGbitfield = 1 << 7;
/// `VG_PATH_CAPABILITY_POINT_ALONG_PATH`
pub const VG_PATH_CAPABILITY_POINT_ALONG_PATH: VGbitfield = 1 << 8;
/// `VG_PATH_CAPABILITY_TANGENT_ALONG_PATH`
pub const VG_PATH_CAPABILITY_TANGENT_ALONG_PATH: VGbitfield = 1 << 9;
/// `VG_PATH_CAPABILITY_PATH_BOUNDS`
pub const VG_PATH_CAPABILITY_PATH_BOUNDS: VGbitfield = 1 << 10;
/// `VG_PATH_CAPABILITY_PATH_TRANSFORMED_BOUNDS`
pub const VG_PATH_CAPABILITY_PATH_TRANSFORMED_BOUNDS: VGbitfield = 1 << 11;
/// `VG_PATH_CAPABILITY_ALL`
pub const VG_PATH_CAPABILITY_ALL: VGbitfield = (1 << 12) - 1;

/// `VG_PATH_FORMAT` parameter
pub const VG_PATH_FORMAT: VGint = 0x1600;
/// `VG_PATH_DATATYPE` parameter
pub const VG_PATH_DATATYPE: VGint = 0x1601;
/// `VG_PATH_SCALE` parameter
pub const VG_PATH_SCALE: VGint = 0x1602;
/// `VG_PATH_BIAS` parameter
pub const VG_PATH_BIAS: VGint = 0x1603;
/// `VG_PATH_NUM_SEGMENTS` parameter
pub const VG_PATH_NUM_SEGMENTS: VGint = 0x1604;
/// `VG_PATH_NUM_COORDS` parameter
pub const VG_PATH_NUM_COORDS: VGint = 0x1605;

// ----------------------------------------------- 8.7 fill rules, 8.8 modes

/// `VG_EVEN_ODD`
pub const VG_EVEN_ODD: VGenum = 0x1900;
/// `VG_NON_ZERO`
pub const VG_NON_ZERO: VGenum = 0x1901;

/// `VG_STROKE_PATH`
pub const VG_STROKE_PATH: VGbitfield = 1 << 0;
/// `VG_FILL_PATH`
pub const VG_FILL_PATH: VGbitfield = 1 << 1;

/// `VG_CAP_BUTT`
pub const VG_CAP_BUTT: VGenum = 0x1700;
/// `VG_CAP_ROUND`
pub const VG_CAP_ROUND: VGenum = 0x1701;
/// `VG_CAP_SQUARE`
pub const VG_CAP_SQUARE: VGenum = 0x1702;

/// `VG_JOIN_MITER`
pub const VG_JOIN_MITER: VGenum = 0x1800;
/// `VG_JOIN_ROUND`
pub const VG_JOIN_ROUND: VGenum = 0x1801;
/// `VG_JOIN_BEVEL`
pub const VG_JOIN_BEVEL: VGenum = 0x1802;

// -------------------------------------------------------------- 9 paint

/// `VG_PAINT_TYPE` parameter
pub const VG_PAINT_TYPE: VGint = 0x1A00;
/// `VG_PAINT_COLOR` parameter (vector of 4 floats)
pub const VG_PAINT_COLOR: VGint = 0x1A01;
/// `VG_PAINT_COLOR_RAMP_SPREAD_MODE` parameter
pub const VG_PAINT_COLOR_RAMP_SPREAD_MODE: VGint = 0x1A02;
/// `VG_PAINT_COLOR_RAMP_STOPS` parameter (vector of 5-float stops)
pub const VG_PAINT_COLOR_RAMP_STOPS: VGint = 0x1A03;
/// `VG_PAINT_LINEAR_GRADIENT` parameter (vector of 4 floats)
pub const VG_PAINT_LINEAR_GRADIENT: VGint = 0x1A04;
/// `VG_PAINT_RADIAL_GRADIENT` parameter (vector of 5 floats)
pub const VG_PAINT_RADIAL_GRADIENT: VGint = 0x1A05;
/// `VG_PAINT_PATTERN_TILING_MODE` parameter
pub const VG_PAINT_PATTERN_TILING_MODE: VGint = 0x1A06;
/// `VG_PAINT_COLOR_RAMP_PREMULTIPLIED` parameter
pub const VG_PAINT_COLOR_RAMP_PREMULTIPLIED: VGint = 0x1A07;

/// `VG_PAINT_TYPE_COLOR`
pub const VG_PAINT_TYPE_COLOR: VGenum = 0x1B00;
/// `VG_PAINT_TYPE_LINEAR_GRADIENT`
pub const VG_PAINT_TYPE_LINEAR_GRADIENT: VGenum = 0x1B01;
/// `VG_PAINT_TYPE_RADIAL_GRADIENT`
pub const VG_PAINT_TYPE_RADIAL_GRADIENT: VGenum = 0x1B02;
/// `VG_PAINT_TYPE_PATTERN`
pub const VG_PAINT_TYPE_PATTERN: VGenum = 0x1B03;

/// `VG_COLOR_RAMP_SPREAD_PAD`
pub const VG_COLOR_RAMP_SPREAD_PAD: VGenum = 0x1C00;
/// `VG_COLOR_RAMP_SPREAD_REPEAT`
pub const VG_COLOR_RAMP_SPREAD_REPEAT: VGenum = 0x1C01;
/// `VG_COLOR_RAMP_SPREAD_REFLECT`
pub const VG_COLOR_RAMP_SPREAD_REFLECT: VGenum = 0x1C02;

/// `VG_TILE_FILL`
pub const VG_TILE_FILL: VGenum = 0x1D00;
/// `VG_TILE_PAD`
pub const VG_TILE_PAD: VGenum = 0x1D01;
/// `VG_TILE_REPEAT`
pub const VG_TILE_REPEAT: VGenum = 0x1D02;
/// `VG_TILE_REFLECT`
pub const VG_TILE_REFLECT: VGenum = 0x1D03;

// -------------------------------------------------------------- 10 images

/// `VG_sRGBX_8888`
pub const VG_SRGBX_8888: VGenum = 0;
/// `VG_sRGBA_8888`
pub const VG_SRGBA_8888: VGenum = 1;
/// `VG_sRGBA_8888_PRE`
pub const VG_SRGBA_8888_PRE: VGenum = 2;
/// `VG_sRGB_565`
pub const VG_SRGB_565: VGenum = 3;
/// `VG_sRGBA_5551`
pub const VG_SRGBA_5551: VGenum = 4;
/// `VG_sRGBA_4444`
pub const VG_SRGBA_4444: VGenum = 5;
/// `VG_sL_8`
pub const VG_SL_8: VGenum = 6;
/// `VG_lRGBX_8888`
pub const VG_LRGBX_8888: VGenum = 7;
/// `VG_lRGBA_8888`
pub const VG_LRGBA_8888: VGenum = 8;
/// `VG_lRGBA_8888_PRE`
pub const VG_LRGBA_8888_PRE: VGenum = 9;
/// `VG_lL_8`
pub const VG_LL_8: VGenum = 10;
/// `VG_A_8`
pub const VG_A_8: VGenum = 11;
/// `VG_BW_1`
pub const VG_BW_1: VGenum = 12;
/// `VG_A_1`
pub const VG_A_1: VGenum = 13;
/// `VG_A_4`
pub const VG_A_4: VGenum = 14;
/// `VG_sXRGB_8888`
pub const VG_SXRGB_8888: VGenum = 64;
/// `VG_sARGB_8888`
pub const VG_SARGB_8888: VGenum = 65;
/// `VG_sARGB_8888_PRE`
pub const VG_SARGB_8888_PRE: VGenum = 66;
/// `VG_sARGB_5551`
pub const VG_SARGB_5551: VGenum = 68;
/// `VG_sARGB_4444`
pub const VG_SARGB_4444: VGenum = 69;
/// `VG_lXRGB_8888`
pub const VG_LXRGB_8888: VGenum = 71;
/// `VG_lARGB_8888`
pub const VG_LARGB_8888: VGenum = 72;
/// `VG_lARGB_8888_PRE`
pub const VG_LARGB_8888_PRE: VGenum = 73;
/// `VG_sBGRX_8888`
pub const VG_SBGRX_8888: VGenum = 128;
/// `VG_sBGRA_8888`
pub const VG_SBGRA_8888: VGenum = 129;
/// `VG_sBGRA_8888_PRE`
pub const VG_SBGRA_8888_PRE: VGenum = 130;
/// `VG_sBGR_565`
pub const VG_SBGR_565: VGenum = 131;
/// `VG_sBGRA_5551`
pub const VG_SBGRA_5551: VGenum = 132;
/// `VG_sBGRA_4444`
pub const VG_SBGRA_4444: VGenum = 133;
/// `VG_lBGRX_8888`
pub const VG_LBGRX_8888: VGenum = 134;
/// `VG_lBGRA_8888`
pub const VG_LBGRA_8888: VGenum = 135;
/// `VG_lBGRA_8888_PRE`
pub const VG_LBGRA_8888_PRE: VGenum = 136;
/// `VG_sXBGR_8888`
pub const VG_SXBGR_8888: VGenum = 192;
/// `VG_sABGR_8888`
pub const VG_SABGR_8888: VGenum = 193;
/// `VG_sABGR_8888_PRE`
pub const VG_SABGR_8888_PRE: VGenum = 194;
/// `VG_sABGR_5551`
pub const VG_SABGR_5551: VGenum = 196;
/// `VG_sABGR_4444`
pub const VG_SABGR_4444: VGenum = 197;
/// `VG_lXBGR_8888`
pub const VG_LXBGR_8888: VGenum = 199;
/// `VG_lABGR_8888`
pub const VG_LABGR_8888: VGenum = 200;
/// `VG_lABGR_8888_PRE`
pub const VG_LABGR_8888_PRE: VGenum = 201;

/// `VG_IMAGE_QUALITY_NONANTIALIASED`
pub const VG_IMAGE_QUALITY_NONANTIALIASED: VGbitfield = 1 << 0;
/// `VG_IMAGE_QUALITY_FASTER`
pub const VG_IMAGE_QUALITY_FASTER: VGbitfield = 1 << 1;
/// `VG_IMAGE_QUALITY_BETTER`
pub const VG_IMAGE_QUALITY_BETTER: VGbitfield = 1 << 2;

/// `VG_IMAGE_FORMAT` parameter
pub const VG_IMAGE_FORMAT: VGint = 0x1E00;
/// `VG_IMAGE_WIDTH` parameter
pub const VG_IMAGE_WIDTH: VGint = 0x1E01;
/// `VG_IMAGE_HEIGHT` parameter
pub const VG_IMAGE_HEIGHT: VGint = 0x1E02;

/// `VG_DRAW_IMAGE_NORMAL`
pub const VG_DRAW_IMAGE_NORMAL: VGenum = 0x1F00;
/// `VG_DRAW_IMAGE_MULTIPLY`
pub const VG_DRAW_IMAGE_MULTIPLY: VGenum = 0x1F01;
/// `VG_DRAW_IMAGE_STENCIL`
pub const VG_DRAW_IMAGE_STENCIL: VGenum = 0x1F02;

// ------------------------------------------------------------- 11 text

/// `VG_FONT_NUM_GLYPHS` parameter
pub const VG_FONT_NUM_GLYPHS: VGint = 0x2F00;

// ------------------------------------------------------- 12 image filters

/// `VG_RED` channel bit
pub const VG_RED: VGbitfield = 1 << 3;
/// `VG_GREEN` channel bit
pub const VG_GREEN: VGbitfield = 1 << 2;
/// `VG_BLUE` channel bit
pub const VG_BLUE: VGbitfield = 1 << 1;
/// `VG_ALPHA` channel bit
pub const VG_ALPHA: VGbitfield = 1 << 0;

// ----------------------------------------------- misc context enumerations

/// `VG_RENDERING_QUALITY_NONANTIALIASED`
pub const VG_RENDERING_QUALITY_NONANTIALIASED: VGenum = 0x1200;
/// `VG_RENDERING_QUALITY_FASTER`
pub const VG_RENDERING_QUALITY_FASTER: VGenum = 0x1201;
/// `VG_RENDERING_QUALITY_BETTER`
pub const VG_RENDERING_QUALITY_BETTER: VGenum = 0x1202;

/// `VG_PIXEL_LAYOUT_UNKNOWN`
pub const VG_PIXEL_LAYOUT_UNKNOWN: VGenum = 0x1300;
/// `VG_PIXEL_LAYOUT_RGB_VERTICAL`
pub const VG_PIXEL_LAYOUT_RGB_VERTICAL: VGenum = 0x1301;
/// `VG_PIXEL_LAYOUT_BGR_VERTICAL`
pub const VG_PIXEL_LAYOUT_BGR_VERTICAL: VGenum = 0x1302;
/// `VG_PIXEL_LAYOUT_RGB_HORIZONTAL`
pub const VG_PIXEL_LAYOUT_RGB_HORIZONTAL: VGenum = 0x1303;
/// `VG_PIXEL_LAYOUT_BGR_HORIZONTAL`
pub const VG_PIXEL_LAYOUT_BGR_HORIZONTAL: VGenum = 0x1304;

/// `VG_BLEND_SRC`
pub const VG_BLEND_SRC: VGenum = 0x2000;
/// `VG_BLEND_SRC_OVER`
pub const VG_BLEND_SRC_OVER: VGenum = 0x2001;
/// `VG_BLEND_DST_OVER`
pub const VG_BLEND_DST_OVER: VGenum = 0x2002;
/// `VG_BLEND_SRC_IN`
pub const VG_BLEND_SRC_IN: VGenum = 0x2003;
/// `VG_BLEND_DST_IN`
pub const VG_BLEND_DST_IN: VGenum = 0x2004;
/// `VG_BLEND_MULTIPLY`
pub const VG_BLEND_MULTIPLY: VGenum = 0x2005;
/// `VG_BLEND_SCREEN`
pub const VG_BLEND_SCREEN: VGenum = 0x2006;
/// `VG_BLEND_DARKEN`
pub const VG_BLEND_DARKEN: VGenum = 0x2007;
/// `VG_BLEND_LIGHTEN`
pub const VG_BLEND_LIGHTEN: VGenum = 0x2008;
/// `VG_BLEND_ADDITIVE`
pub const VG_BLEND_ADDITIVE: VGenum = 0x2009;

// ------------------------------------------- 14 queries, 15 strings

/// `VG_IMAGE_FORMAT_QUERY`
pub const VG_IMAGE_FORMAT_QUERY: VGenum = 0x2100;
/// `VG_PATH_DATATYPE_QUERY`
pub const VG_PATH_DATATYPE_QUERY: VGenum = 0x2101;

/// `VG_HARDWARE_ACCELERATED`
pub const VG_HARDWARE_ACCELERATED: VGenum = 0x2200;
/// `VG_HARDWARE_UNACCELERATED`
pub const VG_HARDWARE_UNACCELERATED: VGenum = 0x2201;

/// `VG_VENDOR`
pub const VG_VENDOR: VGenum = 0x2300;
/// `VG_RENDERER`
pub const VG_RENDERER: VGenum = 0x2301;
/// `VG_VERSION`
pub const VG_VERSION: VGenum = 0x2302;
/// `VG_EXTENSIONS`
pub const VG_EXTENSIONS: VGenum = 0x2303;

// ------------------------------------------------------------------- VGU

/// `VGU_NO_ERROR`
pub const VGU_NO_ERROR: VGenum = 0;
/// `VGU_BAD_HANDLE_ERROR`
pub const VGU_BAD_HANDLE_ERROR: VGenum = 0xF000;
/// `VGU_ILLEGAL_ARGUMENT_ERROR`
pub const VGU_ILLEGAL_ARGUMENT_ERROR: VGenum = 0xF001;
/// `VGU_OUT_OF_MEMORY_ERROR`
pub const VGU_OUT_OF_MEMORY_ERROR: VGenum = 0xF002;
/// `VGU_PATH_CAPABILITY_ERROR`
pub const VGU_PATH_CAPABILITY_ERROR: VGenum = 0xF003;
/// `VGU_BAD_WARP_ERROR`
pub const VGU_BAD_WARP_ERROR: VGenum = 0xF004;

/// `VGU_ARC_OPEN`
pub const VGU_ARC_OPEN: VGenum = 0xF100;
/// `VGU_ARC_CHORD`
pub const VGU_ARC_CHORD: VGenum = 0xF101;
/// `VGU_ARC_PIE`
pub const VGU_ARC_PIE: VGenum = 0xF102;
