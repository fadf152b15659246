use crate::app::state::PanelFocus;
use crate::app::App;
use crate::domain::{flag_badge, Palette, ALL_CATEGORY};
use crate::filter::ActiveFilter;
use crate::ui::widgets::atlas::render_mini_map;
use crate::ui::widgets::badges::{country_tags, results_count_label};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

pub fn render_directory(app: &App, f: &mut Frame<'_>) {
    let palette = app.palette();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title area
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Content area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title_section(app, f, main_layout[0], palette);
    render_search_bar(app, f, main_layout[1], palette);
    render_content_section(app, f, main_layout[2], palette);
    render_status_section(app, f, main_layout[3], palette);
    render_shortcuts(f, main_layout[4], palette);
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let title_block = Block::default()
        .title("== European Alternatives ==")
        .title_style(
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.title));

    f.render_widget(title_block, area);

    let title_inner = area.inner(Margin::new(1, 1));
    let title_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(title_inner);

    let summary = format!(
        "{} products across {} countries",
        app.records.len(),
        app.countries.len()
    );

    let title_paragraph = Paragraph::new(Text::from(vec![
        TextLine::from(vec![
            Span::styled(
                "European ",
                Style::default()
                    .fg(palette.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Alternatives",
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(Span::styled(summary, Style::default().fg(palette.muted))),
        TextLine::from(vec![
            Span::styled(
                format!("Theme: {}", app.theme.as_str()),
                Style::default().fg(palette.muted),
            ),
            Span::styled("  t: ", Style::default().fg(palette.accent)),
            Span::styled(
                app.theme.toggle_label(),
                Style::default().fg(palette.muted),
            ),
        ]),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title_paragraph, title_chunks[0]);

    render_mini_map(f, title_chunks[1], palette);
}

fn render_search_bar(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let focused = app.focus == PanelFocus::Search;

    let border = if focused { palette.accent } else { palette.border };
    let block = Block::default()
        .title(" Search ")
        .title_style(Style::default().fg(border))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    // Blinking cursor while the field owns the keyboard.
    let cursor = if focused {
        if (app.animation_counter * 2.0).sin() > 0.0 {
            "█"
        } else {
            " "
        }
    } else {
        ""
    };

    let content = Span::styled(
        format!("> {}{cursor}", app.search_input),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    );

    f.render_widget(Paragraph::new(TextLine::from(content)).block(block), area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    if app.sidebar_visible {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(20)])
            .split(area);

        render_sidebar(app, f, chunks[0], palette);
        render_results(app, f, chunks[1], palette);
    } else {
        render_results(app, f, area, palette);
    }
}

fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_category_list(app, f, chunks[0], palette);
    render_country_list(app, f, chunks[1], palette);
}

fn sidebar_line_style(
    palette: Palette,
    is_cursor: bool,
    is_active: bool,
) -> Style {
    if is_cursor {
        Style::default()
            .fg(palette.highlight_fg)
            .bg(palette.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else if is_active {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    }
}

fn render_category_list(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let focused = app.focus == PanelFocus::Categories;
    let border = if focused { palette.accent } else { palette.border };
    let block = Block::default()
        .title(" Categories ")
        .title_style(Style::default().fg(border))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let max_visible = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(app.categories.len(), max_visible, app.selected_category_index);

    let lines: Vec<TextLine<'_>> = app
        .categories
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible)
        .map(|(i, entry)| {
            let is_cursor = focused && i == app.selected_category_index;
            let is_active = match &app.active_filter {
                ActiveFilter::All => entry == ALL_CATEGORY,
                ActiveFilter::Category(category) => entry == category,
                _ => false,
            };
            let prefix = if is_cursor { ">" } else { " " };

            TextLine::from(Span::styled(
                format!("{prefix} {entry}"),
                sidebar_line_style(palette, is_cursor, is_active),
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_country_list(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let focused = app.focus == PanelFocus::Countries;
    let border = if focused { palette.accent } else { palette.border };
    let block = Block::default()
        .title(" Countries ")
        .title_style(Style::default().fg(border))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let max_visible = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(app.countries.len(), max_visible, app.selected_country_index);

    let lines: Vec<TextLine<'_>> = app
        .countries
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible)
        .map(|(i, country)| {
            let is_cursor = focused && i == app.selected_country_index;
            let is_active = matches!(&app.active_filter,
                ActiveFilter::Country(active) if active == country);
            let prefix = if is_cursor { ">" } else { " " };

            TextLine::from(Span::styled(
                format!("{prefix} {}", flag_badge(country)),
                sidebar_line_style(palette, is_cursor, is_active),
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_results(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let focused = app.focus == PanelFocus::Results;
    let border = if focused { palette.accent } else { palette.border };

    let total_rows = app.visible_len();

    if total_rows == 0 {
        // One full-width placeholder, never a card.
        let block = Block::default()
            .title(format!(
                " {} — {} ",
                app.results_title(),
                results_count_label(0)
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let paragraph = Paragraph::new("No results found matching your criteria.")
            .block(block)
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Category"),
        Cell::from("Replaces"),
        Cell::from("Made in"),
    ])
    .style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let max_visible_rows = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_result_index);

    let rows = (offset..total_rows.min(offset + max_visible_rows)).filter_map(|position| {
        let record = app.visible_record(position)?;
        let is_selected = focused && position == app.selected_result_index;
        let style = if is_selected {
            Style::default()
                .bg(palette.highlight_bg)
                .fg(palette.highlight_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };

        Some(
            Row::new(vec![
                Cell::from(record.name.clone()),
                Cell::from(record.category.clone()),
                Cell::from(record.alternative_to.clone()),
                Cell::from(country_tags(&record.countries)),
            ])
            .style(style),
        )
    });

    let widths = [
        Constraint::Length(20),
        Constraint::Length(22),
        Constraint::Length(16),
        Constraint::Min(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    " {} — {} ({} of {}) ",
                    app.results_title(),
                    results_count_label(total_rows),
                    app.selected_result_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(palette.border))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    let content = if app.status_message.is_empty() {
        Span::styled(
            "Tab: switch panel   Enter: apply filter / open entry   /: search",
            Style::default().fg(palette.muted),
        )
    } else {
        Span::styled(&app.status_message, Style::default().fg(palette.accent))
    };

    f.render_widget(
        Paragraph::new(TextLine::from(content))
            .block(status_block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect, palette: Palette) {
    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(palette.muted);

    let shortcuts = TextLine::from(vec![
        Span::styled("Tab", key_style),
        Span::styled(": Panels | ", label_style),
        Span::styled("/", key_style),
        Span::styled(": Search | ", label_style),
        Span::styled("m", key_style),
        Span::styled(": Map | ", label_style),
        Span::styled("t", key_style),
        Span::styled(": Theme | ", label_style),
        Span::styled("s", key_style),
        Span::styled(": Sidebar | ", label_style),
        Span::styled("F1", key_style),
        Span::styled(": Help | ", label_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", label_style),
    ]);

    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        area,
    );
}
