//! C scalar and handle type aliases for the OpenVG 1.1 API.

#![allow(non_camel_case_types)]

/// `VGfloat`: a 32-bit IEEE float.
pub type VGfloat = f32;
/// `VGbyte`: a signed 8-bit integer.
pub type VGbyte = i8;
/// `VGubyte`: an unsigned 8-bit integer.
pub type VGubyte = u8;
/// `VGshort`: a signed 16-bit integer.
pub type VGshort = i16;
/// `VGint`: a signed 32-bit integer.
pub type VGint = i32;
/// `VGuint`: an unsigned 32-bit integer.
pub type VGuint = u32;
/// `VGbitfield`: an unsigned 32-bit bit mask.
pub type VGbitfield = u32;
/// `VGboolean`: an enum with the values [VG_FALSE](crate::consts::VG_FALSE)
/// and [VG_TRUE](crate::consts::VG_TRUE).
pub type VGboolean = u32;
/// Any of the OpenVG enumerated types (error codes, parameter types,
/// parameter values). All are represented as 32-bit integers on the wire.
pub type VGenum = u32;

/// `VGHandle`: an opaque reference to an OpenVG object.
///
/// The value [VG_INVALID_HANDLE](crate::consts::VG_INVALID_HANDLE) never
/// refers to a live object.
pub type VGHandle = u32;

/// `VGPath`: a handle referring to a path object.
pub type VGPath = VGHandle;
/// `VGPaint`: a handle referring to a paint object.
pub type VGPaint = VGHandle;
/// `VGImage`: a handle referring to an image object.
pub type VGImage = VGHandle;
/// `VGMaskLayer`: a handle referring to a mask layer object.
pub type VGMaskLayer = VGHandle;
/// `VGFont`: a handle referring to a font object.
pub type VGFont = VGHandle;
