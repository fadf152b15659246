use crate::app::App;
use ratatui::layout::Margin;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help(app: &App, f: &mut Frame<'_>) {
    let palette = app.palette();
    let area = f.area().inner(Margin::new(2, 1));

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let key = |k: &'static str| {
        Span::styled(
            format!("  {k}"),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    let label = |text: &'static str| Span::styled(text, Style::default().fg(palette.text));

    let help_text = vec![
        TextLine::from(Span::styled(
            "European Alternatives Directory",
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Browse European alternatives to well-known products. Filter the"),
        TextLine::from("directory by category, by country, or by free-text search; the"),
        TextLine::from("three filters are mutually exclusive and the newest one wins."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Directory:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![key("Tab"), label(" - Cycle between categories, countries and results")]),
        TextLine::from(vec![key("↑/↓"), label(" - Move within the focused panel")]),
        TextLine::from(vec![key("Enter"), label(" - Apply the highlighted filter / open an entry")]),
        TextLine::from(vec![key("/"), label(" - Focus the search field (typing filters live)")]),
        TextLine::from(vec![key("Esc"), label(" - Clear the filter and show everything")]),
        TextLine::from(vec![key("s"), label(" - Show or hide the sidebar")]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Map:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![key("m"), label(" - Toggle the Europe map")]),
        TextLine::from(vec![key("←/→"), label(" - Cycle through country markers")]),
        TextLine::from(vec![key("Enter"), label(" - List the entries behind a marker")]),
        TextLine::from("  Each entry is plotted in its first listed country; marker size"),
        TextLine::from("  grows with the number of entries."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Everywhere:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![key("t"), label(" - Toggle the light/dark theme (remembered)")]),
        TextLine::from(vec![key("F1"), label(" - Toggle this help screen")]),
        TextLine::from(vec![key("q"), label(" - Quit")]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(palette.accent),
        )),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}
