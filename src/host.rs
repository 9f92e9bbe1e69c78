use std::{fs, path::Path, process::Command};

use tracing::debug;

/// Hostname as reported by the kernel, or a placeholder when even that
/// fails.
pub fn hostname() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// One SSH host key fingerprint for the dashboard's identity block.
#[derive(Debug, Clone)]
pub struct HostKey {
    /// Key algorithm, e.g. "ED25519".
    pub algorithm: String,
    pub fingerprint: String,
}

/// Fingerprints of the host's SSH public keys via `ssh-keygen -lf`.
///
/// Display-only convenience: any failure (no /etc/ssh, no ssh-keygen,
/// unreadable key) just shrinks the list.
pub fn ssh_fingerprints() -> Vec<HostKey> {
    collect_fingerprints(Path::new("/etc/ssh"))
}

fn collect_fingerprints(dir: &Path) -> Vec<HostKey> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut keys = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.starts_with("ssh_host_") || !file_name.ends_with("_key.pub") {
            continue;
        }

        let Ok(out) = Command::new("ssh-keygen")
            .arg("-lf")
            .arg(entry.path())
            .output()
        else {
            debug!("ssh-keygen not available, skipping host key fingerprints");
            return Vec::new();
        };
        if !out.status.success() {
            continue;
        }

        let text = String::from_utf8_lossy(&out.stdout);
        if let Some(key) = parse_keygen_line(text.trim()) {
            keys.push(key);
        }
    }

    keys.sort_by(|a, b| a.algorithm.cmp(&b.algorithm));
    keys
}

/// `ssh-keygen -lf` prints "<bits> <fingerprint> <comment> (<ALGO>)".
fn parse_keygen_line(line: &str) -> Option<HostKey> {
    let mut fields = line.split_whitespace();
    fields.next()?;
    let fingerprint = fields.next()?.to_string();
    let algorithm = fields
        .next_back()?
        .trim_start_matches('(')
        .trim_end_matches(')')
        .to_string();
    if algorithm.is_empty() {
        return None;
    }
    Some(HostKey {
        algorithm,
        fingerprint,
    })
}
