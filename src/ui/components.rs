use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Label column width of the dotted field lines, matching the
/// "Host name .......... : value" look of classic appliance consoles.
const LABEL_WIDTH: usize = 20;

pub fn dotted_field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::from(dotted_label(label)).bold(),
        Span::from(value.to_string()),
    ])
}

pub fn dotted_label(label: &str) -> String {
    let mut out = String::from(label);
    out.push(' ');
    while out.chars().count() < LABEL_WIDTH {
        out.push('.');
    }
    out.push_str(" : ");
    out
}

pub fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(Color::Green))
}

pub fn render_too_small(frame: &mut Frame, area: Rect, min_w: u16, min_h: u16) {
    let block = Block::default()
        .title(" infoscreen ")
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let msg = format!(
        "Terminal is too small.\n\nMinimum size: {}x{}\nCurrent size:  {}x{}",
        min_w, min_h, area.width, area.height
    );

    let p = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(p, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_padded_to_a_fixed_column() {
        assert_eq!(dotted_label("Host name"), "Host name .......... : ");
        assert_eq!(dotted_label("Interface type"), "Interface type ..... : ");
    }

    #[test]
    fn long_labels_are_not_truncated() {
        let label = dotted_label("A rather long field label");
        assert!(label.starts_with("A rather long field label"));
        assert!(label.ends_with(" : "));
    }
}
