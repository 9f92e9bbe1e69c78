use crate::{app::App, netinfo::ToolInvoker};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_events<T: ToolInvoker>(key_event: KeyEvent, app: &mut App<T>) -> Result<()> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => app.quit(),

        KeyCode::Char('n') => app.toggle_interface_table(),
        KeyCode::Char('r') => app.refresh(),

        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::netinfo::{InterfaceRepository, NetinfoError, ToolInvoker};

    struct EmptyTool;

    impl ToolInvoker for EmptyTool {
        fn invoke(&self) -> Result<String, NetinfoError> {
            Ok(String::new())
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_and_esc_quit() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let repo = InterfaceRepository::with_invoker(EmptyTool);
            let mut app = App::with_repository(Config::default(), repo);
            handle_key_events(key(code), &mut app).unwrap();
            assert!(!app.running);
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let repo = InterfaceRepository::with_invoker(EmptyTool);
        let mut app = App::with_repository(Config::default(), repo);
        handle_key_events(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
        )
        .unwrap();
        assert!(!app.running);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let repo = InterfaceRepository::with_invoker(EmptyTool);
        let mut app = App::with_repository(Config::default(), repo);
        handle_key_events(key(KeyCode::Char('x')), &mut app).unwrap();
        assert!(app.running);
    }
}
