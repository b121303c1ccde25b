//! Helper macro shared by the typed wrapper modules.

/// Define a field-less enum over a set of OpenVG constants, with raw
/// conversions in both directions. Values coming back from the
/// implementation go through `from_raw_checked`, which turns an
/// out-of-range value into [VgError::UnexpectedEnum](crate::VgError).
macro_rules! imp_enum {
    (
        $(#[$m:meta])*
        $name:ident: $kind:literal {
            $(
                $(#[$vm:meta])*
                $variant:ident = $value:path,
            )*
        }
    ) => {
        $(#[$m])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $(
                $(#[$vm])*
                $variant = $value,
            )*
        }

        impl $name {
            /// The raw OpenVG enum value.
            pub fn raw(self) -> rovg_sys::VGenum {
                self as rovg_sys::VGenum
            }

            /// Translate a raw OpenVG enum value, if it is in range.
            pub fn from_raw(raw: rovg_sys::VGenum) -> Option<Self> {
                match raw {
                    $( $value => Some(Self::$variant), )*
                    _ => None,
                }
            }

            pub(crate) fn from_raw_checked(
                raw: rovg_sys::VGenum,
            ) -> crate::VgResult<Self> {
                Self::from_raw(raw).ok_or(crate::VgError::UnexpectedEnum {
                    kind: $kind,
                    value: raw,
                })
            }
        }
    };
}

pub(crate) use imp_enum;
