use anyhow::{Context, Result};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span, Text},
};
use std::{fs, path::Path};

/// ASCII-art logo with its color markers resolved to styled text.
#[derive(Debug, Clone)]
pub struct Logo {
    pub text: Text<'static>,
    pub line_count: u16,
}

/// Reads the logo file and substitutes the configured marker characters
/// with red/white styling. A marker switches the color for everything that
/// follows it, across line breaks, until the next marker.
pub fn load(path: &Path, red: char, black: char) -> Result<Logo> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read logo file {}", path.display()))?;
    Ok(render(&raw, red, black))
}

fn render(raw: &str, red: char, black: char) -> Logo {
    let mut color = Color::White;
    let mut lines = Vec::new();

    for line in raw.lines() {
        let mut spans = Vec::new();
        let mut buf = String::new();

        for ch in line.chars() {
            if ch == red || ch == black {
                if !buf.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut buf),
                        Style::default().fg(color),
                    ));
                }
                color = if ch == red { Color::Red } else { Color::White };
            } else {
                buf.push(ch);
            }
        }
        if !buf.is_empty() {
            spans.push(Span::styled(buf, Style::default().fg(color)));
        }

        lines.push(Line::from(spans));
    }

    Logo {
        line_count: lines.len() as u16,
        text: Text::from(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_split_lines_into_colored_spans() {
        let logo = render("b##r@@\nb--", 'r', 'b');
        assert_eq!(logo.line_count, 2);

        let first = &logo.text.lines[0];
        assert_eq!(first.spans.len(), 2);
        assert_eq!(first.spans[0].content, "##");
        assert_eq!(first.spans[0].style.fg, Some(Color::White));
        assert_eq!(first.spans[1].content, "@@");
        assert_eq!(first.spans[1].style.fg, Some(Color::Red));
    }

    #[test]
    fn color_persists_across_line_breaks() {
        let logo = render("r##\n##", 'r', 'b');
        let second = &logo.text.lines[1];
        assert_eq!(second.spans[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn markerless_text_is_plain_white() {
        let logo = render("hello\nworld", 'r', 'b');
        assert_eq!(logo.line_count, 2);
        assert_eq!(logo.text.lines[0].spans[0].style.fg, Some(Color::White));
    }

    #[test]
    fn load_reports_a_missing_file() {
        assert!(load(Path::new("/nonexistent/logo.txt"), 'r', 'b').is_err());
    }
}
