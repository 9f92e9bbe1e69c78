use tracing::debug;

use super::invoker::{IpTool, ToolInvoker};
use super::{Interface, NetinfoError, parser};

/// Process-wide cache of discovered interfaces.
///
/// Enumeration runs the external tool at most once for the life of the
/// repository; every later query is answered from the cache. A failed
/// enumeration leaves the cache empty so the next query retries cleanly.
pub struct InterfaceRepository<T = IpTool> {
    invoker: T,
    /// `None` until the first successful enumeration.
    interfaces: Option<Vec<Interface>>,
    /// Outer `None` = not yet computed; `Some(None)` = computed, host has
    /// no non-loopback interface (a valid terminal state).
    first_active: Option<Option<usize>>,
}

impl InterfaceRepository<IpTool> {
    pub fn new() -> Self {
        Self::with_invoker(IpTool)
    }
}

impl Default for InterfaceRepository<IpTool> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ToolInvoker> InterfaceRepository<T> {
    pub fn with_invoker(invoker: T) -> Self {
        Self {
            invoker,
            interfaces: None,
            first_active: None,
        }
    }

    /// Discovery-ordered list of every interface on the host.
    pub fn enumerate(&mut self) -> Result<&[Interface], NetinfoError> {
        if self.interfaces.is_none() {
            let text = self.invoker.invoke()?;
            let parsed = parser::parse_ip_output(&text)?;
            debug!(count = parsed.len(), "enumerated network interfaces");
            self.interfaces = Some(parsed);
        }
        Ok(self.interfaces.as_deref().unwrap_or(&[]))
    }

    /// First interface in discovery order whose kind is not "loopback".
    /// The scan result is cached, including the none-found case.
    pub fn get_first_active_interface(&mut self) -> Result<Option<&Interface>, NetinfoError> {
        if self.first_active.is_none() {
            let position = self.enumerate()?.iter().position(|i| !i.is_loopback());
            self.first_active = Some(position);
        }
        Ok(self
            .first_active
            .flatten()
            .and_then(|i| self.interfaces.as_deref().unwrap_or(&[]).get(i)))
    }

    /// Number of non-loopback interfaces. Recomputed from the cache on
    /// every call.
    pub fn count_active(&mut self) -> Result<usize, NetinfoError> {
        Ok(self
            .enumerate()?
            .iter()
            .filter(|i| !i.is_loopback())
            .count())
    }

    /// Discovery-ordered view of the non-loopback interfaces. Empty when
    /// the host has none, which is a state and not an error.
    pub fn get_active_interfaces(&mut self) -> Result<Vec<&Interface>, NetinfoError> {
        Ok(self
            .enumerate()?
            .iter()
            .filter(|i| !i.is_loopback())
            .collect())
    }
}
