use crate::app::App;
use crate::domain::flag_badge;
use crate::ui::widgets::atlas::render_europe_map;
use crate::ui::widgets::badges::{logo_badge, results_count_label};
use crate::ui::widgets::popup::{centered_box, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_map(app: &App, f: &mut Frame<'_>) {
    let palette = app.palette();
    let area = f.area().inner(Margin::new(2, 1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Map canvas
            Constraint::Length(3), // Selected-country info
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area);

    let map_block = Block::default()
        .title(" Made in Europe ")
        .title_style(
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.title));
    let map_inner = map_block.inner(chunks[0]);
    f.render_widget(map_block, chunks[0]);

    if app.markers.is_empty() {
        let paragraph = Paragraph::new("No countries to plot")
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted));
        f.render_widget(paragraph, map_inner);
    } else {
        render_europe_map(
            f,
            map_inner,
            &app.markers,
            app.selected_marker_index,
            palette,
            app.animation_counter,
        );
    }

    render_marker_info(app, f, chunks[1]);
    render_shortcuts(app, f, chunks[2]);

    if app.marker_popup_open {
        render_marker_popup(app, f);
    }
}

fn render_marker_info(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let palette = app.palette();
    let block = Block::default()
        .title(" Country ")
        .title_style(Style::default().fg(palette.border))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let content = app.selected_marker().map_or_else(
        || TextLine::from(Span::styled("—", Style::default().fg(palette.muted))),
        |marker| {
            TextLine::from(vec![
                Span::styled(
                    flag_badge(&marker.country),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" — {}", results_count_label(marker.count())),
                    Style::default().fg(palette.muted),
                ),
            ])
        },
    );

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let palette = app.palette();
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(palette.muted);

    let shortcuts = TextLine::from(vec![
        Span::styled("←/→", key_style),
        Span::styled(": Country | ", label_style),
        Span::styled("Enter", key_style),
        Span::styled(": Members | ", label_style),
        Span::styled("t", key_style),
        Span::styled(": Theme | ", label_style),
        Span::styled("Esc", key_style),
        Span::styled(": Directory | ", label_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", label_style),
    ]);

    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        area,
    );
}

/// The marker popup: every member of the selected country's group,
/// not just the deduplicated view.
fn render_marker_popup(app: &App, f: &mut Frame<'_>) {
    let palette = app.palette();
    let Some(marker) = app.selected_marker() else {
        return;
    };

    #[allow(clippy::cast_possible_truncation)]
    let height = (marker.count() as u16).saturating_add(4).min(20);
    let popup_area = centered_box(56, height, f.area());

    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(format!(
            " {} ({}) ",
            flag_badge(&marker.country),
            marker.count()
        ))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));

    let mut lines: Vec<TextLine<'_>> = marker
        .members
        .iter()
        .enumerate()
        .filter_map(|(i, &record_index)| {
            let record = app.records.get(record_index)?;
            let is_selected = i == app.popup_member_index;
            let style = if is_selected {
                Style::default()
                    .fg(palette.highlight_fg)
                    .bg(palette.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            let prefix = if is_selected { ">" } else { " " };

            Some(TextLine::from(Span::styled(
                format!("{prefix} {} — {}", logo_badge(record), record.category),
                style,
            )))
        })
        .collect();

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Enter: Details   Esc: Close",
        Style::default().fg(palette.muted),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);
}
