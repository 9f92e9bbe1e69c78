use crate::{
    app::App,
    ui::{components, network},
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

pub fn render(app: &mut App, frame: &mut Frame) {
    const MIN_W: u16 = 80;
    const MIN_H: u16 = 24;

    let area = frame.area();
    if area.width < MIN_W || area.height < MIN_H {
        components::render_too_small(frame, area, MIN_W, MIN_H);
        return;
    }

    // Logo fills the bottom of the screen by its own line count, capped so
    // the info blocks always keep room.
    let logo_height = app
        .logo
        .as_ref()
        .map(|l| l.line_count.min(area.height / 3))
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),           // host identity
            Constraint::Min(12),             // info row
            Constraint::Length(logo_height), // logo
        ])
        .margin(1)
        .split(area);

    render_header(app, frame, chunks[0]);

    let info = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    network::render(app, frame, info[0]);
    render_side(app, frame, info[1]);

    if let Some(logo) = &app.logo {
        let p = Paragraph::new(logo.text.clone());
        frame.render_widget(p, chunks[2]);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let block = components::titled_block("infoscreen");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if !app.config.appliance.is_empty() {
        lines.push(Line::from(
            Span::from(app.config.appliance.clone())
                .fg(Color::Cyan)
                .bold(),
        ));
    }
    if !app.config.description.is_empty() {
        lines.push(Line::from(app.config.description.clone()));
    }
    lines.push(components::dotted_field("Host name", &app.hostname));

    let p = Paragraph::new(Text::from(lines)).wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(p, inner);
}

fn render_side(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_contact(app, frame, chunks[0]);
    render_host_keys(app, frame, chunks[1]);
}

fn render_contact(app: &App, frame: &mut Frame, area: Rect) {
    let block = components::titled_block("Contact");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let contact = &app.config.contact;
    let text = if contact.is_empty() {
        Text::from("No contact information configured.")
    } else {
        let mut lines = Vec::new();
        if !contact.provider.is_empty() {
            lines.push(components::dotted_field("Provider", &contact.provider));
        }
        if !contact.name.is_empty() {
            lines.push(components::dotted_field("Contact", &contact.name));
        }
        if !contact.email.is_empty() {
            lines.push(components::dotted_field("E-mail", &contact.email));
        }
        if !contact.phone.is_empty() {
            lines.push(components::dotted_field("Phone", &contact.phone));
        }
        Text::from(lines)
    };

    let p = Paragraph::new(text).wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(p, inner);
}

fn render_host_keys(app: &App, frame: &mut Frame, area: Rect) {
    let block = components::titled_block("SSH host keys");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if app.host_keys.is_empty() {
        Text::from("-")
    } else {
        let lines: Vec<Line> = app
            .host_keys
            .iter()
            .map(|key| {
                Line::from(vec![
                    Span::from(format!("{:<8} ", key.algorithm)).bold(),
                    Span::from(key.fingerprint.clone()),
                ])
            })
            .collect();
        Text::from(lines)
    };

    let p = Paragraph::new(text).wrap(ratatui::widgets::Wrap { trim: false });
    frame.render_widget(p, inner);
}
