use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Wrap,
    },
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

mod animation;
use animation::{advance_pulse, PulseMode};

#[derive(serde::Deserialize)]
struct DirectoryExport {
    theme: String,
    total: usize,
    categories: Vec<CategoryEntry>,
    countries: Vec<CountryEntry>,
    markers: Vec<MarkerEntry>,
    records: Vec<DirectoryRecord>,
}

#[derive(serde::Deserialize, Clone)]
struct CategoryEntry {
    name: String,
    count: usize,
}

#[derive(serde::Deserialize, Clone)]
struct CountryEntry {
    name: String,
    code: String,
    count: usize,
}

#[derive(serde::Deserialize, Clone)]
struct MarkerEntry {
    country: String,
    count: usize,
    lat: f64,
    lon: f64,
}

#[derive(serde::Deserialize, Clone)]
#[allow(dead_code)]
struct DirectoryRecord {
    id: i64,
    name: String,
    category: String,
    countries: Vec<String>,
    alternative_to: String,
    description: String,
    link: String,
    hostname: String,
    logo_url: String,
    flag_codes: Vec<String>,
}

const LON_BOUNDS: [f64; 2] = [-27.0, 47.0];
const LAT_BOUNDS: [f64; 2] = [33.0, 72.0];
const ACCENT: Color = Color::Rgb(0, 0, 238);

fn main() -> io::Result<()> {
    let data = Rc::new(RefCell::new(None::<DirectoryExport>));
    let tab_index = Rc::new(RefCell::new(0_usize));
    let row_offset = Rc::new(RefCell::new(0_usize));
    let pulse = Rc::new(RefCell::new((0.0_f64, None::<f64>)));

    spawn_local(fetch_directory(data.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let tab_index = tab_index.clone();
        let row_offset = row_offset.clone();
        move |event| match event.code {
            ratzilla::event::KeyCode::Left => {
                let mut index = tab_index.borrow_mut();
                *index = if *index == 0 { 2 } else { *index - 1 };
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Right => {
                let mut index = tab_index.borrow_mut();
                *index = (*index + 1) % 3;
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Up => {
                let mut offset = row_offset.borrow_mut();
                *offset = offset.saturating_sub(1);
            }
            ratzilla::event::KeyCode::Down => {
                let mut offset = row_offset.borrow_mut();
                *offset = (*offset + 1).min(2000);
            }
            ratzilla::event::KeyCode::Char('1') => {
                *tab_index.borrow_mut() = 0;
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Char('2') => {
                *tab_index.borrow_mut() = 1;
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Char('3') => {
                *tab_index.borrow_mut() = 2;
                *row_offset.borrow_mut() = 0;
            }
            _ => {}
        }
    });

    terminal.draw_web(move |f| {
        let now_seconds = web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now() / 1000.0);
        let (counter, last_tick) = *pulse.borrow();
        let advanced = advance_pulse(counter, last_tick, now_seconds, PulseMode::Running);
        *pulse.borrow_mut() = advanced;

        let area = f.area();
        let block = Block::default()
            .title("European Alternatives")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        let data = data.borrow();
        if let Some(export) = data.as_ref() {
            let index = *tab_index.borrow();
            let row_offset = *row_offset.borrow();
            render_dashboard(export, index, row_offset, advanced.0, f, inner);
        } else {
            let paragraph = Paragraph::new(Text::from(TextLine::from("Loading euroalt.json...")))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
    });

    Ok(())
}

fn render_dashboard(
    export: &DirectoryExport,
    tab_index: usize,
    row_offset: usize,
    pulse: f64,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(12),
            Constraint::Length(10),
        ])
        .split(area);

    render_header(export, f, main_layout[0]);
    render_gap(f, main_layout[1]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(main_layout[2]);

    render_map_panel(export, pulse, f, content[0]);
    render_category_chart(export, f, content[1]);

    render_footer(export, tab_index, row_offset, f, main_layout[3]);
}

fn render_header(export: &DirectoryExport, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![Span::styled(
        format!(
            "Alternatives: {}  Categories: {}  Countries: {}  Theme: {}",
            export.total,
            export.categories.len(),
            export.countries.len(),
            export.theme
        ),
        Style::default().fg(Color::White),
    )]);

    let block = Block::default()
        .title("Overview")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(line))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_gap(f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new("")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

fn render_map_panel(
    export: &DirectoryExport,
    pulse: f64,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("Made in Europe")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if export.markers.is_empty() {
        let paragraph = Paragraph::new("No countries to plot")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let land_color = if export.theme == "dark" {
        Color::DarkGray
    } else {
        Color::Gray
    };
    let breath = pulse.sin().mul_add(0.05, 1.0);

    f.render_widget(
        ratzilla::ratatui::widgets::canvas::Canvas::default()
            .marker(ratzilla::ratatui::symbols::Marker::Braille)
            .paint(|ctx| {
                ctx.draw(&ratzilla::ratatui::widgets::canvas::Map {
                    resolution: ratzilla::ratatui::widgets::canvas::MapResolution::High,
                    color: land_color,
                });

                for marker in &export.markers {
                    #[allow(clippy::cast_precision_loss)]
                    let radius = 0.22_f64.mul_add(marker.count as f64, 0.9).min(3.5);
                    ctx.draw(&ratzilla::ratatui::widgets::canvas::Circle {
                        x: marker.lon,
                        y: marker.lat,
                        radius: radius * breath,
                        color: ACCENT,
                    });
                }

                ctx.layer();
                for marker in &export.markers {
                    ctx.print(
                        marker.lon,
                        marker.lat,
                        TextLine::styled(
                            marker.count.to_string(),
                            Style::default().fg(Color::White),
                        ),
                    );
                }
            })
            .x_bounds(LON_BOUNDS)
            .y_bounds(LAT_BOUNDS),
        inner,
    );
}

fn render_category_chart(
    export: &DirectoryExport,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("By Category")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if export.categories.is_empty() {
        let paragraph = Paragraph::new("No categories")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let chart_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let mut top: Vec<&CategoryEntry> = export.categories.iter().collect();
    top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    top.truncate(6);

    let bars: Vec<Bar<'_>> = top
        .iter()
        .map(|entry| {
            Bar::default()
                .value(entry.count as u64)
                .label(TextLine::from(entry.name.clone()))
                .style(Style::default().fg(ACCENT))
                .value_style(Style::default().fg(Color::White))
        })
        .collect();

    let max_value = top.iter().map(|entry| entry.count as u64).max().unwrap_or(1);

    let chart = BarChart::default()
        .block(Block::default())
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(6);

    f.render_widget(chart, chart_split[0]);

    let total = export.total.max(1);
    let mut legend_lines = vec![
        TextLine::from(Span::styled("Legend", Style::default().fg(Color::Gray))),
        TextLine::from(""),
    ];
    for entry in &top {
        #[allow(clippy::cast_precision_loss)]
        let percent = (entry.count as f64 / total as f64) * 100.0;
        legend_lines.push(TextLine::from(vec![
            Span::styled("■ ", Style::default().fg(ACCENT).add_modifier(Modifier::DIM)),
            Span::styled(
                entry.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::DIM),
            ),
            Span::styled(
                format!("  {} ({percent:.1}%)", entry.count),
                Style::default().fg(Color::White).add_modifier(Modifier::DIM),
            ),
        ]));
    }

    let legend = Paragraph::new(Text::from(legend_lines))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(legend, chart_split[1]);
}

fn render_footer(
    export: &DirectoryExport,
    tab_index: usize,
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let tabs = ["All alternatives", "Categories", "Countries"];
    let tab_titles = tabs
        .iter()
        .map(|title| TextLine::from(*title))
        .collect::<Vec<_>>();

    let info = TextLine::from(vec![
        Span::styled("Tables", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::raw(format!(
            "{} alternatives • {} countries",
            export.total,
            export.countries.len()
        )),
        Span::raw("  "),
        Span::styled("Tab/1-3", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("Arrows", Style::default().fg(Color::Gray)),
    ]);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let tabs = ratzilla::ratatui::widgets::Tabs::new(tab_titles)
        .select(tab_index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    let info_paragraph = Paragraph::new(Text::from(info)).alignment(Alignment::Center);
    f.render_widget(info_paragraph, layout[0]);
    f.render_widget(tabs, layout[1]);
    render_gap(f, layout[2]);

    let table_area = layout[3];

    match tab_index {
        0 => render_record_rows(&export.records, row_offset, f, table_area),
        1 => render_category_rows(&export.categories, row_offset, f, table_area),
        2 => render_country_rows(&export.countries, row_offset, f, table_area),
        _ => {}
    }
}

fn render_record_rows(
    records: &[DirectoryRecord],
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    if records.is_empty() {
        let paragraph = Paragraph::new("No alternatives available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Category"),
        Cell::from("Replaces"),
        Cell::from("Made in"),
        Cell::from("Host"),
    ])
    .style(
        Style::default()
            .fg(ACCENT)
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    let rows = std::iter::once(Row::new(vec![
        Cell::from(" "),
        Cell::from(" "),
        Cell::from(" "),
        Cell::from(" "),
        Cell::from(" "),
    ]))
    .chain(records.iter().skip(row_offset).take(18).map(|record| {
        Row::new(vec![
            Cell::from(record.name.clone()),
            Cell::from(record.category.clone()),
            Cell::from(record.alternative_to.clone()),
            Cell::from(record.countries.join(" / ")),
            Cell::from(record.hostname.clone()),
        ])
        .style(Style::default().fg(Color::White))
    }));

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(20),
            Constraint::Length(16),
            Constraint::Length(20),
            Constraint::Length(18),
        ],
    )
    .header(header)
    .column_spacing(1);

    f.render_widget(table, area);
    render_scrollbar(records.len(), row_offset, f, area);
}

fn render_category_rows(
    categories: &[CategoryEntry],
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let header = Row::new(vec![Cell::from("Category"), Cell::from("Count")]).style(
        Style::default()
            .fg(ACCENT)
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    let rows = std::iter::once(Row::new(vec![Cell::from(" "), Cell::from(" ")])).chain(
        categories.iter().skip(row_offset).take(18).map(|entry| {
            Row::new(vec![
                Cell::from(entry.name.clone()),
                Cell::from(entry.count.to_string()),
            ])
            .style(Style::default().fg(Color::White))
        }),
    );

    let table = Table::new(rows, [Constraint::Length(28), Constraint::Length(8)])
        .header(header)
        .column_spacing(1);

    f.render_widget(table, area);
    render_scrollbar(categories.len(), row_offset, f, area);
}

fn render_country_rows(
    countries: &[CountryEntry],
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let header = Row::new(vec![
        Cell::from("Country"),
        Cell::from("Code"),
        Cell::from("Count"),
    ])
    .style(
        Style::default()
            .fg(ACCENT)
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    let rows = std::iter::once(Row::new(vec![
        Cell::from(" "),
        Cell::from(" "),
        Cell::from(" "),
    ]))
    .chain(countries.iter().skip(row_offset).take(18).map(|entry| {
        Row::new(vec![
            Cell::from(entry.name.clone()),
            Cell::from(entry.code.clone()),
            Cell::from(entry.count.to_string()),
        ])
        .style(Style::default().fg(Color::White))
    }));

    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .column_spacing(1);

    f.render_widget(table, area);
    render_scrollbar(countries.len(), row_offset, f, area);
}

fn render_scrollbar(
    total: usize,
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let mut scrollbar_state = ScrollbarState::new(total)
        .position(row_offset)
        .viewport_content_length(18.min(area.height.saturating_sub(1) as usize));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(ACCENT));
    let scroll_area = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    f.render_stateful_widget(scrollbar, scroll_area, &mut scrollbar_state);
}

async fn fetch_directory(store: Rc<RefCell<Option<DirectoryExport>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init("euroalt.json", &opts) else {
        return;
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        return;
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        web_sys::console::error_1(&"Failed to read response".into());
        return;
    };

    let Ok(body_promise) = response.json() else {
        web_sys::console::error_1(&"Failed to read euroalt.json body".into());
        return;
    };

    let Ok(json) = wasm_bindgen_futures::JsFuture::from(body_promise).await else {
        web_sys::console::error_1(&"Failed to read euroalt.json body".into());
        return;
    };

    let data = match serde_wasm_bindgen::from_value::<DirectoryExport>(json) {
        Ok(data) => data,
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to parse euroalt.json: {error}").into());
            return;
        }
    };

    *store.borrow_mut() = Some(data);
}
