//! Constants shared by the detector, template renderer and executor.
//!
//! Every filesystem location initsys probes lives here so the probing code
//! never hardcodes a path.

// ============================================================================
// Daemon
// ============================================================================

/// Name of the daemon whose service definition is managed.
pub const DAEMON_NAME: &str = "pmtr";

/// Marker replaced with the resolved binary directory in every template.
pub const BINDIR_PLACEHOLDER: &str = "__SYSBINDIR__";

/// Prefix of template file names; the init system name is appended.
pub const TEMPLATE_PREFIX: &str = "service.";

/// Value accepted by `--bindir`, `--initsys` and `--install-service` to
/// request detection.
pub const AUTO: &str = "auto";

// ============================================================================
// Binary directory probing
// ============================================================================

/// Directories searched, in order, for the daemon executable.
pub const BINDIR_CANDIDATES: &[&str] = &["/bin", "/usr/bin", "/sbin", "/usr/sbin", "/usr/local/bin"];

// ============================================================================
// Init system probing
// ============================================================================

/// Symlink that points into systemd on systemd hosts.
pub const SBIN_INIT: &str = "/sbin/init";

/// Directory present on upstart hosts.
pub const UPSTART_DIR: &str = "/usr/lib/upstart";

/// Release file present on RHEL and derivatives.
pub const REDHAT_RELEASE: &str = "/etc/redhat-release";

/// Release file present on Debian and derivatives.
pub const DEBIAN_VERSION: &str = "/etc/debian_version";

/// Release file of distributions that resemble RHEL (e.g. Amazon Linux).
pub const SYSTEM_RELEASE: &str = "/etc/system-release";

/// Legacy service configuration tool.
pub const CHKCONFIG: &str = "/sbin/chkconfig";

/// Traditional init script directory.
pub const INIT_D: &str = "/etc/init.d";
