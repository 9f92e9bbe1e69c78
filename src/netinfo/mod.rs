//! Network interface enumeration and classification.
//!
//! The host's interfaces are discovered once per process by running the OS
//! network tool and parsing its text output. All later queries are answered
//! from the cache owned by [`InterfaceRepository`].

mod invoker;
mod parser;
mod repository;

pub use invoker::{IpTool, ToolInvoker};
pub use parser::parse_ip_output;
pub use repository::InterfaceRepository;

use thiserror::Error;

/// One network adapter as reported by the OS network tool.
///
/// The name is fixed at construction; the remaining fields are filled in
/// while the record's block of tool output is being consumed and are not
/// touched afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    /// Link type as reported ("loopback", "ether", ...). Empty until the
    /// `link/` line of the record has been seen.
    pub kind: String,
    /// Empty for interface types without one.
    pub hardware_address: String,
    /// Verbatim address tokens in source order, prefix suffix included.
    pub ipv4_addresses: Vec<String>,
    pub ipv6_addresses: Vec<String>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: String::new(),
            hardware_address: String::new(),
            ipv4_addresses: Vec::new(),
            ipv6_addresses: Vec::new(),
        }
    }

    /// Loopback interfaces are excluded from every "active" view.
    pub fn is_loopback(&self) -> bool {
        self.kind == "loopback"
    }
}

#[derive(Debug, Error)]
pub enum NetinfoError {
    /// The network tool was missing, not executable, or exited non-zero.
    #[error("network tool failed: {0}")]
    ExternalTool(String),
    /// The tool output did not match the expected shape.
    #[error("unexpected tool output at line {line}: {text:?}")]
    Parse { line: usize, text: String },
}
