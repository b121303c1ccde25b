//! Loader behavior that can be exercised without an OpenVG implementation
//! installed.

use rovg::{config::LIBRARY_ENV_VAR, Vg, VgConfig, VgError};

/// Enable tracing with the RUST_LOG environment variable.
fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::DEBUG.into())
                .from_env_lossy(),
        )
        .try_init();
}

// One test body: the env override mutates process state, so the scenarios
// run in sequence instead of racing in parallel test threads.
#[test]
fn load_failure_paths() {
    enable_tracing();

    // An explicit library path that does not exist.
    let config = VgConfig {
        library: Some("/no/such/dir/libOpenVG-missing.so".into()),
        ..Default::default()
    };
    match Vg::load_with(&config) {
        Err(VgError::Load(err)) => {
            assert!(
                err.to_string().contains("libOpenVG-missing.so"),
                "load error should name the library: {err}"
            );
        }
        Err(other) => panic!("expected a load error, got {other}"),
        Ok(_) => panic!("a nonexistent library must not load"),
    }

    // Bogus candidate sonames: the last failure is reported.
    let config = VgConfig {
        candidates: vec![
            "libOpenVG-first-bogus.so".into(),
            "libOpenVG-second-bogus.so".into(),
        ],
        ..Default::default()
    };
    match Vg::load_with(&config) {
        Err(VgError::Load(err)) => {
            assert!(err.to_string().contains("libOpenVG-second-bogus.so"));
        }
        other => panic!("expected a load error, got {other:?}"),
    }

    // An empty candidate list is rejected outright.
    let config = VgConfig {
        candidates: vec![],
        ..Default::default()
    };
    assert!(matches!(
        Vg::load_with(&config),
        Err(VgError::InvalidData(_))
    ));

    // The environment variable beats the config.
    std::env::set_var(LIBRARY_ENV_VAR, "/no/such/dir/libOpenVG-env.so");
    let config = VgConfig {
        library: Some("/no/such/dir/libOpenVG-ignored.so".into()),
        ..Default::default()
    };
    match Vg::load_with(&config) {
        Err(VgError::Load(err)) => {
            let msg = err.to_string();
            assert!(msg.contains("libOpenVG-env.so"), "got: {msg}");
        }
        other => panic!("expected a load error, got {other:?}"),
    }
    std::env::remove_var(LIBRARY_ENV_VAR);
}
