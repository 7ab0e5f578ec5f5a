#![allow(dead_code, unused_imports)]

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use initsys::test_utils::{Call, RecordingRunner};

/// Templates shipped with the crate.
pub fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("initscripts")
}

/// Writes a minimal template for every init system into `dir`.
pub fn write_templates(dir: &Path) {
    fs::create_dir_all(dir).expect("failed to create template dir");
    for name in ["systemd", "rhel6", "upstart", "sysvinit", "debian"] {
        fs::write(
            dir.join(format!("service.{name}")),
            format!("# {name}\nDAEMON=__SYSBINDIR__/pmtr\nPATH=__SYSBINDIR__:/bin\n"),
        )
        .expect("failed to write template");
    }
}
