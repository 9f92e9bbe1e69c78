use crate::{
    config::Config,
    host::{self, HostKey},
    logo::{self, Logo},
    netinfo::{Interface, InterfaceRepository, IpTool, ToolInvoker},
};
use ratatui::widgets::TableState;
use tracing::warn;

/// Point-in-time view of the interface repository for the render pass.
#[derive(Debug, Clone, Default)]
pub struct NetworkSummary {
    pub count_active: usize,
    pub first_active: Option<Interface>,
    pub active: Vec<Interface>,
    pub error: Option<String>,
}

pub struct App<T = IpTool> {
    pub running: bool,
    pub config: Config,

    pub hostname: String,
    pub host_keys: Vec<HostKey>,
    pub logo: Option<Logo>,

    pub network: NetworkSummary,
    /// `n` key: expanded table of all active interfaces.
    pub show_interface_table: bool,
    pub interface_table_state: TableState,

    repository: InterfaceRepository<T>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_repository(config, InterfaceRepository::new())
    }
}

impl<T: ToolInvoker> App<T> {
    pub fn with_repository(config: Config, repository: InterfaceRepository<T>) -> Self {
        let logo = config.logo.path.as_deref().and_then(|path| {
            match logo::load(path, config.logo.red, config.logo.black) {
                Ok(logo) => Some(logo),
                Err(e) => {
                    warn!("logo disabled: {e:#}");
                    None
                }
            }
        });

        let mut app = Self {
            running: true,
            hostname: host::hostname(),
            host_keys: host::ssh_fingerprints(),
            logo,
            network: NetworkSummary::default(),
            show_interface_table: false,
            interface_table_state: TableState::default(),
            repository,
            config,
        };
        app.refresh_network();
        app
    }

    /// One repaint cycle. The repository only reaches for the external tool
    /// while its cache is unpopulated, so after the first successful
    /// enumeration this is an in-memory recomputation; after a failed one it
    /// doubles as the retry.
    pub fn tick(&mut self) {
        self.refresh_network();
    }

    pub fn refresh(&mut self) {
        self.refresh_network();
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Whether the footer should advertise the `n` key.
    pub fn more_available(&self) -> bool {
        self.config.allow_more && self.network.count_active > 1
    }

    pub fn toggle_interface_table(&mut self) {
        if !self.more_available() {
            return;
        }
        self.show_interface_table = !self.show_interface_table;
        if self.show_interface_table {
            select_first_if_any(&mut self.interface_table_state, self.network.active.len());
        }
    }

    pub fn select_next(&mut self) {
        if self.show_interface_table {
            select_next_in_state(&mut self.interface_table_state, self.network.active.len());
        }
    }

    pub fn select_prev(&mut self) {
        if self.show_interface_table {
            select_prev_in_state(&mut self.interface_table_state, self.network.active.len());
        }
    }

    pub fn selected_interface(&self) -> Option<&Interface> {
        self.interface_table_state
            .selected()
            .and_then(|i| self.network.active.get(i))
    }

    fn refresh_network(&mut self) {
        self.network = match summarize(&mut self.repository) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("interface enumeration failed: {e}");
                NetworkSummary {
                    error: Some(e.to_string()),
                    ..NetworkSummary::default()
                }
            }
        };
        clamp_selected(&mut self.interface_table_state, self.network.active.len());
    }
}

fn summarize<T: ToolInvoker>(
    repository: &mut InterfaceRepository<T>,
) -> Result<NetworkSummary, crate::netinfo::NetinfoError> {
    let count_active = repository.count_active()?;
    let first_active = repository.get_first_active_interface()?.cloned();
    let active = repository
        .get_active_interfaces()?
        .into_iter()
        .cloned()
        .collect();

    Ok(NetworkSummary {
        count_active,
        first_active,
        active,
        error: None,
    })
}

fn select_first_if_any(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
    } else if state.selected().is_none() {
        state.select(Some(0));
    }
}

fn select_next_in_state(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) => (i + 1).min(len - 1),
        None => 0,
    };
    state.select(Some(i));
}

fn select_prev_in_state(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) => i.saturating_sub(1),
        None => 0,
    };
    state.select(Some(i));
}

fn clamp_selected(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    if let Some(idx) = state.selected() {
        state.select(Some(idx.min(len - 1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netinfo::NetinfoError;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StubTool {
        output: &'static str,
        calls: Rc<Cell<usize>>,
    }

    impl ToolInvoker for StubTool {
        fn invoke(&self) -> Result<String, NetinfoError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.output.to_string())
        }
    }

    fn app_with(output: &'static str) -> (App<StubTool>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let repo = InterfaceRepository::with_invoker(StubTool {
            output,
            calls: Rc::clone(&calls),
        });
        (App::with_repository(Config::default(), repo), calls)
    }

    const TWO_ACTIVE: &str = "\
1: lo: <LOOPBACK>
    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00
2: eth0: <UP>
    link/ether aa:aa:aa:aa:aa:aa brd ff:ff:ff:ff:ff:ff
    inet 10.0.0.5/24 scope global eth0
3: eth1: <UP>
    link/ether bb:bb:bb:bb:bb:bb brd ff:ff:ff:ff:ff:ff
";

    #[test]
    fn summary_reflects_the_repository() {
        let (app, _) = app_with(TWO_ACTIVE);
        assert_eq!(app.network.count_active, 2);
        assert_eq!(app.network.first_active.as_ref().unwrap().name, "eth0");
        assert_eq!(app.network.active.len(), 2);
        assert!(app.network.error.is_none());
    }

    #[test]
    fn ticks_reuse_the_enumeration_cache() {
        let (mut app, calls) = app_with(TWO_ACTIVE);
        app.tick();
        app.tick();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn interface_table_toggle_respects_allow_more() {
        let (mut app, _) = app_with(TWO_ACTIVE);
        assert!(app.more_available());
        app.toggle_interface_table();
        assert!(app.show_interface_table);
        assert_eq!(app.interface_table_state.selected(), Some(0));

        app.show_interface_table = false;
        app.config.allow_more = false;
        app.toggle_interface_table();
        assert!(!app.show_interface_table);
    }

    #[test]
    fn selection_moves_within_active_interfaces() {
        let (mut app, _) = app_with(TWO_ACTIVE);
        app.toggle_interface_table();
        app.select_next();
        assert_eq!(app.selected_interface().unwrap().name, "eth1");
        app.select_next();
        assert_eq!(app.selected_interface().unwrap().name, "eth1");
        app.select_prev();
        assert_eq!(app.selected_interface().unwrap().name, "eth0");
    }

    #[test]
    fn loopback_only_host_reports_zero_without_error() {
        let (app, _) = app_with(
            "1: lo: <LOOPBACK>\n    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00\n",
        );
        assert_eq!(app.network.count_active, 0);
        assert!(app.network.first_active.is_none());
        assert!(app.network.error.is_none());
        assert!(!app.more_available());
    }

    struct FailingTool;

    impl ToolInvoker for FailingTool {
        fn invoke(&self) -> Result<String, NetinfoError> {
            Err(NetinfoError::ExternalTool("ip: not found".to_string()))
        }
    }

    #[test]
    fn enumeration_failure_surfaces_in_the_summary() {
        let repo = InterfaceRepository::with_invoker(FailingTool);
        let app = App::with_repository(Config::default(), repo);
        assert!(app.network.error.is_some());
        assert_eq!(app.network.count_active, 0);
    }
}
