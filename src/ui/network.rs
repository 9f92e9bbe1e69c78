use crate::{app::App, ui::components};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, Table},
};

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    if app.show_interface_table {
        render_interface_table(app, frame, area);
    } else {
        render_summary(app, frame, area);
    }
}

/// The default network block: interface count plus the details of the first
/// active interface, mirroring what an operator wants at a glance.
fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let block = components::titled_block("Network");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    if let Some(err) = &app.network.error {
        lines.push(Line::from(
            Span::from(format!("Interface enumeration failed: {err}")).fg(Color::Red),
        ));
        let p = Paragraph::new(Text::from(lines)).wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(p, inner);
        return;
    }

    lines.push(components::dotted_field(
        "Network interfaces",
        &app.network.count_active.to_string(),
    ));

    if app.network.count_active == 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(
            Span::from("No network interfaces found.").fg(Color::Red),
        ));
        let p = Paragraph::new(Text::from(lines)).wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(p, inner);
        return;
    }

    if app.more_available() {
        lines.push(Line::from(vec![
            Span::from("Press "),
            Span::from("n").fg(Color::Yellow).bold(),
            Span::from(" for more network interfaces."),
        ]));
    }
    lines.push(Line::from(""));

    if let Some(first) = &app.network.first_active {
        lines.push(components::dotted_field("First interface", &first.name));
        lines.push(components::dotted_field(
            "Hardware address",
            &first.hardware_address,
        ));
        lines.push(components::dotted_field("Interface type", &first.kind));

        if app.config.show_ipv4 {
            push_address_list(&mut lines, "IPv4 address(es)", &first.ipv4_addresses);
        }
        if app.config.show_ipv6 {
            push_address_list(&mut lines, "IPv6 address(es)", &first.ipv6_addresses);
        }
    }

    let p = Paragraph::new(Text::from(lines)).wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(p, inner);
}

fn push_address_list(lines: &mut Vec<Line<'static>>, label: &str, addresses: &[String]) {
    match addresses.split_first() {
        None => lines.push(components::dotted_field(label, "-")),
        Some((head, rest)) => {
            lines.push(components::dotted_field(label, head));
            let indent = " ".repeat(components::dotted_label(label).chars().count());
            for addr in rest {
                lines.push(Line::from(format!("{indent}{addr}")));
            }
        }
    }
}

/// Expanded `n` view: every active interface in discovery order.
fn render_interface_table(app: &mut App, frame: &mut Frame, area: Rect) {
    let rows: Vec<Row> = app
        .network
        .active
        .iter()
        .map(|iface| {
            Row::new(vec![
                Cell::from(iface.name.clone()),
                Cell::from(iface.kind.clone()),
                Cell::from(iface.hardware_address.clone()),
                Cell::from(
                    iface
                        .ipv4_addresses
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "-".into()),
                ),
                Cell::from(
                    iface
                        .ipv6_addresses
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "-".into()),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(19),
            Constraint::Length(20),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new(vec!["Iface", "Type", "HW address", "IPv4", "IPv6"])
            .style(Style::default().fg(Color::Yellow).bold())
            .bottom_margin(1),
    )
    .block(components::titled_block("Network interfaces (n to close)"))
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_stateful_widget(table, area, &mut app.interface_table_state);
}
