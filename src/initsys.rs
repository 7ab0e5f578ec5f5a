//! Supported init systems and the commands/paths each one needs.
use std::fmt;

use strum_macros::{AsRefStr, EnumString};

use crate::constants::TEMPLATE_PREFIX;

/// Everything platform specific about one init system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Registers the service to run at boot.
    pub enable: &'static str,
    /// Unregisters the service.
    pub disable: &'static str,
    /// Starts the service now.
    pub start: &'static str,
    /// Stops the service now.
    pub stop: &'static str,
    /// Where the service definition is written.
    pub service_path: &'static str,
    /// File mode of the written service definition.
    pub mode: u32,
}

const SYSTEMD: Profile = Profile {
    enable: "systemctl enable pmtr.service",
    disable: "systemctl disable pmtr.service",
    start: "systemctl start pmtr.service",
    stop: "systemctl stop pmtr.service",
    service_path: "/etc/systemd/system/pmtr.service",
    mode: 0o644,
};

const RHEL6: Profile = Profile {
    enable: "chkconfig --add pmtr",
    disable: "chkconfig --del pmtr",
    start: "service pmtr start",
    stop: "service pmtr stop",
    service_path: "/etc/rc.d/init.d/pmtr",
    mode: 0o755,
};

const UPSTART: Profile = Profile {
    enable: "initctl reload-configuration",
    disable: "initctl reload-configuration",
    start: "initctl start pmtr",
    stop: "initctl stop pmtr",
    service_path: "/etc/init/pmtr.conf",
    mode: 0o644,
};

const SYSVINIT: Profile = Profile {
    enable: "chkconfig --add pmtr",
    disable: "chkconfig --del pmtr",
    start: "/etc/init.d/pmtr start",
    stop: "/etc/init.d/pmtr stop",
    service_path: "/etc/init.d/pmtr",
    mode: 0o755,
};

const DEBIAN: Profile = Profile {
    enable: "update-rc.d pmtr defaults",
    disable: "update-rc.d -f pmtr remove",
    start: "service pmtr start",
    stop: "service pmtr stop",
    service_path: "/etc/init.d/pmtr",
    mode: 0o755,
};

/// Init systems initsys knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum InitSystem {
    /// systemd units under `/etc/systemd/system`.
    Systemd,
    /// RHEL 6 style init scripts managed by chkconfig/service.
    Rhel6,
    /// Upstart jobs under `/etc/init`.
    Upstart,
    /// Plain System V init scripts.
    Sysvinit,
    /// Debian init scripts managed by update-rc.d.
    Debian,
}

impl InitSystem {
    /// Every supported init system.
    pub const ALL: [InitSystem; 5] = [
        InitSystem::Systemd,
        InitSystem::Rhel6,
        InitSystem::Upstart,
        InitSystem::Sysvinit,
        InitSystem::Debian,
    ];

    /// Commands and file placement for this init system.
    pub const fn profile(self) -> &'static Profile {
        match self {
            InitSystem::Systemd => &SYSTEMD,
            InitSystem::Rhel6 => &RHEL6,
            InitSystem::Upstart => &UPSTART,
            InitSystem::Sysvinit => &SYSVINIT,
            InitSystem::Debian => &DEBIAN,
        }
    }

    /// File name of the template used for this init system.
    pub fn template_name(self) -> String {
        format!("{TEMPLATE_PREFIX}{}", self.as_ref())
    }
}

impl fmt::Display for InitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
