use crate::app::App;
use crate::domain::{favicon_url, flag_image_url, region_code};
use crate::ui::widgets::badges::{country_tags, logo_badge};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_details(app: &App, f: &mut Frame<'_>) {
    let palette = app.palette();
    let area = f.area().inner(Margin::new(2, 1));

    let Some(record) = app.detail_record() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(format!(" Alternative #{}: {} ", record.id, record.name))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let label_style = Style::default().fg(palette.muted);
    let value_style = Style::default().fg(palette.text);

    let flag_urls = record
        .countries
        .iter()
        .map(|country| flag_image_url(region_code(country), 24, 18))
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        TextLine::from(Span::styled(
            logo_badge(record),
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Category: ", label_style),
            Span::styled(&record.category, value_style),
        ]),
        TextLine::from(vec![
            Span::styled("Replaces: ", label_style),
            Span::styled(
                &record.alternative_to,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(""),
        TextLine::from(Span::styled(&record.description, value_style)),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Made in: ", label_style),
            Span::styled(country_tags(&record.countries), value_style),
        ]),
        TextLine::from(vec![
            Span::styled("Visit: ", label_style),
            Span::styled(&record.link, Style::default().fg(palette.accent)),
        ]),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Logo image: ", label_style),
            Span::styled(favicon_url(&record.hostname(), 128), label_style),
        ]),
        TextLine::from(vec![
            Span::styled("Flag images: ", label_style),
            Span::styled(flag_urls, label_style),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, chunks[0]);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(palette.muted);
    let help = TextLine::from(vec![
        Span::styled("ESC", key_style),
        Span::styled(": Back   ", label_style),
        Span::styled("↑/↓", key_style),
        Span::styled(": Previous/Next   ", label_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", label_style),
    ]);

    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), chunks[1]);
}
