//! Locating the OpenVG shared library.
//!
//! OpenVG implementations ship under a handful of sonames depending on the
//! platform and vendor. [VgConfig] describes where to look; it is plain
//! serde-friendly data so it can live in an application's configuration file.
//! Deserialization is lenient: missing properties fall back to the platform
//! defaults.

use std::path::PathBuf;

/// Environment variable that overrides library discovery entirely.
///
/// When set, its value is the only library path attempted.
pub const LIBRARY_ENV_VAR: &str = "ROVG_OPENVG_LIB";

/// Where, and how, to load the OpenVG implementation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VgConfig {
    /// Explicit path to the OpenVG shared library.
    ///
    /// When set, the candidate sonames are not consulted.
    ///
    /// Default: unset.
    pub library: Option<PathBuf>,

    /// Sonames tried in order when no explicit library is given.
    ///
    /// Default: the conventional names for the current platform.
    pub candidates: Vec<String>,

    /// Whether to resolve the optional VGU utility symbols as well.
    ///
    /// Default: true. An implementation without VGU still loads; the VGU
    /// entry points then fail with
    /// [VgError::VguUnavailable](crate::VgError::VguUnavailable).
    pub with_vgu: bool,
}

impl Default for VgConfig {
    fn default() -> Self {
        Self {
            library: None,
            candidates: default_candidates(),
            with_vgu: true,
        }
    }
}

impl VgConfig {
    /// The library names to attempt, in order.
    ///
    /// [LIBRARY_ENV_VAR] beats everything; an explicit [VgConfig::library]
    /// beats the candidate list.
    pub(crate) fn load_order(&self) -> Vec<std::ffi::OsString> {
        if let Some(path) = std::env::var_os(LIBRARY_ENV_VAR) {
            return vec![path];
        }
        if let Some(library) = &self.library {
            return vec![library.clone().into_os_string()];
        }
        self.candidates.iter().map(Into::into).collect()
    }
}

fn default_candidates() -> Vec<String> {
    let names: &[&str] = if cfg!(target_os = "windows") {
        &["libOpenVG.dll", "OpenVG.dll"]
    } else if cfg!(target_os = "macos") {
        &["libOpenVG.dylib"]
    } else {
        &["libOpenVG.so.1", "libOpenVG.so"]
    };
    names.iter().map(|n| (*n).to_string()).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_has_candidates() {
        let config = VgConfig::default();
        assert!(config.library.is_none());
        assert!(!config.candidates.is_empty());
        assert!(config.with_vgu);
    }

    #[test]
    fn lenient_deserialization() {
        // A config file that only pins the library path.
        let config: VgConfig =
            serde_json::from_str(r#"{ "library": "/opt/vg/libOpenVG.so" }"#)
                .unwrap();
        assert_eq!(
            Some(PathBuf::from("/opt/vg/libOpenVG.so")),
            config.library
        );
        assert_eq!(VgConfig::default().candidates, config.candidates);
        assert!(config.with_vgu);

        // And one that disables VGU only.
        let config: VgConfig =
            serde_json::from_str(r#"{ "withVgu": false }"#).unwrap();
        assert!(!config.with_vgu);
    }

    #[test]
    fn explicit_library_wins_over_candidates() {
        let config = VgConfig {
            library: Some(PathBuf::from("/tmp/libMyVG.so")),
            ..Default::default()
        };
        assert_eq!(
            vec![std::ffi::OsString::from("/tmp/libMyVG.so")],
            config.load_order()
        );
    }
}
