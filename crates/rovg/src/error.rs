//! OpenVG error types.
//!
//! Core OpenVG reports errors through a per-context trap that latches the
//! first error raised since the last `vgGetError` call. Every safe wrapper in
//! this crate drains that trap after the native call it makes, so errors are
//! attributed to the call that raised them. The VGU utility library instead
//! returns a status code directly; both models converge on [VgError].

use std::sync::Arc;

use rovg_sys::{consts, LoadError, VGenum};

/// Result type used throughout this crate.
pub type VgResult<T> = Result<T, VgError>;

/// Any error produced by the OpenVG implementation or by this binding's own
/// argument validation.
///
/// The type is `Clone` so results can be stored and replayed cheaply; the one
/// non-trivial payload ([VgError::Load]) is behind an [Arc] for that reason.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum VgError {
    /// An invalid handle was supplied to an OpenVG function.
    #[error("an invalid handle was supplied")]
    BadHandle,

    /// An OpenVG function was given an invalid argument.
    #[error("an argument was out of range or otherwise invalid")]
    IllegalArgument,

    /// The implementation could not allocate the required memory.
    #[error("the OpenVG implementation is out of memory")]
    OutOfMemory,

    /// A required path capability is not enabled on the path.
    #[error("a required path capability is not enabled on the path")]
    PathCapability,

    /// The implementation does not support the given image format.
    #[error("the image format is not supported by the implementation")]
    UnsupportedImageFormat,

    /// The implementation does not support the given path format.
    #[error("the path format is not supported by the implementation")]
    UnsupportedPathFormat,

    /// The image is currently in use as a rendering target.
    #[error("the image is in use as a rendering target")]
    ImageInUse,

    /// No OpenVG context is current on the calling thread.
    #[error("no OpenVG context is current on the calling thread")]
    NoContext,

    /// The warp points supplied to a VGU warp computation are degenerate.
    #[error("the warp points are degenerate")]
    BadWarp,

    /// The loaded OpenVG library does not export the VGU utility symbols.
    #[error("the OpenVG implementation does not provide VGU")]
    VguUnavailable,

    /// A creation call returned the invalid handle without latching an error.
    #[error("{what} creation returned an invalid handle")]
    CreationFailed {
        /// The kind of object that failed to come into existence.
        what: &'static str,
    },

    /// The implementation reported an error code outside OpenVG 1.1.
    #[error("unknown OpenVG error code {0:#06x}")]
    Unknown(VGenum),

    /// The implementation returned an enum value outside OpenVG 1.1.
    #[error("unexpected {kind} value {value:#x} from the implementation")]
    UnexpectedEnum {
        /// The enumeration the value failed to fit.
        kind: &'static str,
        /// The raw value as returned.
        value: VGenum,
    },

    /// This binding rejected an argument before any native call was made.
    #[error("invalid argument: {0}")]
    InvalidData(Arc<str>),

    /// The OpenVG shared library could not be loaded.
    #[error("failed to load the OpenVG library: {0}")]
    Load(Arc<LoadError>),
}

impl VgError {
    /// Translate a code from the `vgGetError` trap.
    ///
    /// `VG_NO_ERROR` maps to `None`. Codes outside the specification still
    /// surface, as [VgError::Unknown].
    pub fn from_code(code: VGenum) -> Option<Self> {
        match code {
            consts::VG_NO_ERROR => None,
            consts::VG_BAD_HANDLE_ERROR => Some(Self::BadHandle),
            consts::VG_ILLEGAL_ARGUMENT_ERROR => Some(Self::IllegalArgument),
            consts::VG_OUT_OF_MEMORY_ERROR => Some(Self::OutOfMemory),
            consts::VG_PATH_CAPABILITY_ERROR => Some(Self::PathCapability),
            consts::VG_UNSUPPORTED_IMAGE_FORMAT_ERROR => {
                Some(Self::UnsupportedImageFormat)
            }
            consts::VG_UNSUPPORTED_PATH_FORMAT_ERROR => {
                Some(Self::UnsupportedPathFormat)
            }
            consts::VG_IMAGE_IN_USE_ERROR => Some(Self::ImageInUse),
            consts::VG_NO_CONTEXT_ERROR => Some(Self::NoContext),
            other => Some(Self::Unknown(other)),
        }
    }

    /// Translate a status returned by a VGU function.
    ///
    /// VGU reports through return values rather than the error trap, and has
    /// its own code space (including [VgError::BadWarp]).
    pub fn from_vgu_code(code: VGenum) -> Option<Self> {
        match code {
            consts::VGU_NO_ERROR => None,
            consts::VGU_BAD_HANDLE_ERROR => Some(Self::BadHandle),
            consts::VGU_ILLEGAL_ARGUMENT_ERROR => Some(Self::IllegalArgument),
            consts::VGU_OUT_OF_MEMORY_ERROR => Some(Self::OutOfMemory),
            consts::VGU_PATH_CAPABILITY_ERROR => Some(Self::PathCapability),
            consts::VGU_BAD_WARP_ERROR => Some(Self::BadWarp),
            other => Some(Self::Unknown(other)),
        }
    }

    /// Construct an [VgError::InvalidData] from anything displayable.
    pub(crate) fn data<M: std::fmt::Display>(msg: M) -> Self {
        Self::InvalidData(msg.to_string().into_boxed_str().into())
    }
}

impl From<LoadError> for VgError {
    fn from(err: LoadError) -> Self {
        Self::Load(Arc::new(err))
    }
}

// Hand-rolled because `LoadError` (and the dlopen error inside it) has no
// equality; two `Load` errors are equal only if they share the same source.
impl PartialEq for VgError {
    fn eq(&self, other: &Self) -> bool {
        use VgError::*;
        match (self, other) {
            (BadHandle, BadHandle)
            | (IllegalArgument, IllegalArgument)
            | (OutOfMemory, OutOfMemory)
            | (PathCapability, PathCapability)
            | (UnsupportedImageFormat, UnsupportedImageFormat)
            | (UnsupportedPathFormat, UnsupportedPathFormat)
            | (ImageInUse, ImageInUse)
            | (NoContext, NoContext)
            | (BadWarp, BadWarp)
            | (VguUnavailable, VguUnavailable) => true,
            (CreationFailed { what: a }, CreationFailed { what: b }) => a == b,
            (Unknown(a), Unknown(b)) => a == b,
            (
                UnexpectedEnum { kind: a, value: av },
                UnexpectedEnum { kind: b, value: bv },
            ) => a == b && av == bv,
            (InvalidData(a), InvalidData(b)) => a == b,
            (Load(a), Load(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn core_code_fixtures() {
        const F: &[(VGenum, VgError)] = &[
            (0x1000, VgError::BadHandle),
            (0x1001, VgError::IllegalArgument),
            (0x1002, VgError::OutOfMemory),
            (0x1003, VgError::PathCapability),
            (0x1004, VgError::UnsupportedImageFormat),
            (0x1005, VgError::UnsupportedPathFormat),
            (0x1006, VgError::ImageInUse),
            (0x1007, VgError::NoContext),
        ];

        assert_eq!(None, VgError::from_code(0));
        for (code, expected) in F.iter() {
            assert_eq!(Some(expected.clone()), VgError::from_code(*code));
        }
    }

    #[test]
    fn vgu_code_fixtures() {
        const F: &[(VGenum, VgError)] = &[
            (0xF000, VgError::BadHandle),
            (0xF001, VgError::IllegalArgument),
            (0xF002, VgError::OutOfMemory),
            (0xF003, VgError::PathCapability),
            (0xF004, VgError::BadWarp),
        ];

        assert_eq!(None, VgError::from_vgu_code(0));
        for (code, expected) in F.iter() {
            assert_eq!(Some(expected.clone()), VgError::from_vgu_code(*code));
        }
    }

    #[test]
    fn unknown_codes_are_not_dropped() {
        assert_eq!(Some(VgError::Unknown(0x1234)), VgError::from_code(0x1234));
        assert_eq!(
            Some(VgError::Unknown(0xF0FF)),
            VgError::from_vgu_code(0xF0FF)
        );
    }
}
