use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/infoscreen/config.toml";

/// Dashboard configuration. Every key in the file is optional; a missing or
/// unreadable file yields the defaults so the appliance still comes up.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds between full repaints.
    pub reload_secs: u64,
    /// Offer the `n` key to expand the interface table.
    pub allow_more: bool,
    pub appliance: String,
    pub description: String,
    pub show_ipv4: bool,
    pub show_ipv6: bool,
    pub contact: ContactInfo,
    pub logo: LogoConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ContactInfo {
    pub provider: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.provider.is_empty()
            && self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct LogoConfig {
    pub path: Option<PathBuf>,
    /// Marker character replaced by red styling in the logo text.
    pub red: char,
    /// Marker character replaced by white styling.
    pub black: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reload_secs: 60,
            allow_more: true,
            appliance: String::new(),
            description: String::new(),
            show_ipv4: true,
            show_ipv6: true,
            contact: ContactInfo::default(),
            logo: LogoConfig {
                path: None,
                red: 'r',
                black: 'b',
            },
        }
    }
}

impl Config {
    /// Best-effort load: parse failures are logged and fall back to the
    /// defaults rather than aborting an unattended screen.
    pub fn load(path: &Path) -> Self {
        let mut out = Self::default();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), "config not readable, using defaults: {e}");
                return out;
            }
        };

        let file = match toml::from_str::<ConfigFile>(&raw) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), "config not parseable, using defaults: {e}");
                return out;
            }
        };

        if let Some(general) = file.general {
            apply(&mut out.reload_secs, general.reload);
            apply(&mut out.allow_more, general.allow_more);
            apply(&mut out.appliance, general.appliance);
            apply(&mut out.description, general.description);
        }
        if let Some(network) = file.network {
            apply(&mut out.show_ipv4, network.ipv4);
            apply(&mut out.show_ipv6, network.ipv6);
        }
        if let Some(contact) = file.contact {
            apply(&mut out.contact.provider, contact.provider);
            apply(&mut out.contact.name, contact.name);
            apply(&mut out.contact.email, contact.email);
            apply(&mut out.contact.phone, contact.phone);
        }
        if let Some(logo) = file.logo {
            out.logo.path = logo.path.map(PathBuf::from);
            apply_marker(&mut out.logo.red, logo.red);
            apply_marker(&mut out.logo.black, logo.black);
        }

        out
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    general: Option<GeneralSection>,
    network: Option<NetworkSection>,
    contact: Option<ContactSection>,
    logo: Option<LogoSection>,
}

#[derive(Debug, Default, Deserialize)]
struct GeneralSection {
    reload: Option<u64>,
    allow_more: Option<bool>,
    appliance: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NetworkSection {
    ipv4: Option<bool>,
    ipv6: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct ContactSection {
    provider: Option<String>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LogoSection {
    path: Option<String>,
    red: Option<String>,
    black: Option<String>,
}

fn apply<V>(target: &mut V, value: Option<V>) {
    if let Some(v) = value {
        *target = v;
    }
}

fn apply_marker(target: &mut char, value: Option<String>) {
    let Some(raw) = value else {
        return;
    };
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let Some(c) = chars.next() else {
        return;
    };
    if chars.next().is_some() {
        return;
    }
    *target = c;
}
