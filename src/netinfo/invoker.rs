use std::process::Command;

use tracing::debug;

use super::NetinfoError;

/// Narrow seam around the external tool so the parser and repository can be
/// exercised against canned output in tests.
pub trait ToolInvoker {
    fn invoke(&self) -> Result<String, NetinfoError>;
}

/// Runs `ip addr` and captures its stdout. Blocking; no timeout — a hung
/// tool blocks the caller.
pub struct IpTool;

impl ToolInvoker for IpTool {
    fn invoke(&self) -> Result<String, NetinfoError> {
        debug!("running ip addr");
        let out = Command::new("ip")
            .arg("addr")
            .output()
            .map_err(|e| NetinfoError::ExternalTool(format!("failed to run ip: {e}")))?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            return Err(NetinfoError::ExternalTool(if stderr.is_empty() {
                format!("ip addr exited with {}", out.status)
            } else {
                stderr
            }));
        }

        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}
