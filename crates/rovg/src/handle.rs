//! Typed wrappers over the opaque `VGHandle` values OpenVG hands out.
//!
//! OpenVG uses one integer handle space for five kinds of object. The
//! wrappers here keep those kinds apart at the type level so a paint handle
//! cannot be fed to a path call by accident. They are plain copies of the
//! raw value; ownership (and destruction) lives with the object types in the
//! sibling modules.

use rovg_sys::{consts, VGHandle};

macro_rules! imp_deref {
    ($i:ty, $t:ty) => {
        impl std::ops::Deref for $i {
            type Target = $t;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

macro_rules! imp_from {
    ($a:ty, $b:ty, $i:ident => $e:expr) => {
        impl From<$b> for $a {
            fn from($i: $b) -> Self {
                $e
            }
        }
    };
}

/// Base handle newtype. You probably want one of the typed wrappers such as
/// [PathHandle] or [PaintHandle].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(VGHandle);

impl Handle {
    /// Wrap a raw handle, rejecting `VG_INVALID_HANDLE`.
    pub fn new(raw: VGHandle) -> Option<Self> {
        (raw != consts::VG_INVALID_HANDLE).then_some(Self(raw))
    }

    /// The raw value, for handing back to a native call.
    pub fn raw(self) -> VGHandle {
        self.0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

macro_rules! imp_handle {
    ($(#[$m:meta])* $name:ident) => {
        $(#[$m])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) Handle);

        imp_deref!($name, Handle);
        imp_from!($name, Handle, h => $name(h));

        impl std::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

imp_handle! {
    /// A handle referring to a path object.
    PathHandle
}

imp_handle! {
    /// A handle referring to a paint object.
    PaintHandle
}

imp_handle! {
    /// A handle referring to an image object.
    ImageHandle
}

imp_handle! {
    /// A handle referring to a mask layer object.
    MaskLayerHandle
}

imp_handle! {
    /// A handle referring to a font object.
    FontHandle
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invalid_handle_is_rejected() {
        assert_eq!(None, Handle::new(consts::VG_INVALID_HANDLE));
        assert!(Handle::new(1).is_some());
    }

    #[test]
    fn typed_handles_round_trip_raw() {
        let h = Handle::new(0xbeef).unwrap();
        let p = PathHandle::from(h);
        assert_eq!(0xbeef, p.raw());
        assert_eq!("0x0000beef", p.to_string());
    }
}
