use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker as CanvasMarker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution};
use ratatui::Frame;

use crate::atlas::{marker_radius, Marker, LAT_BOUNDS, LON_BOUNDS};
use crate::domain::Palette;

/// Europe coastline with one sized circle per primary country. The
/// view is fixed; markers never refit the bounds.
pub fn render_europe_map(
    f: &mut Frame<'_>,
    area: Rect,
    markers: &[Marker],
    selected: usize,
    palette: Palette,
    animation: f64,
) {
    if area.width < 8 || area.height < 6 {
        return;
    }

    f.render_widget(
        Canvas::default()
            .marker(CanvasMarker::Braille)
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: palette.map_land,
                });

                for (index, marker) in markers.iter().enumerate() {
                    let is_selected = index == selected;
                    // Only the selected marker pulses.
                    let pulse = if is_selected {
                        (animation * 3.0).sin().mul_add(0.15, 1.0)
                    } else {
                        1.0
                    };
                    let color = if is_selected {
                        palette.marker_selected
                    } else {
                        palette.marker
                    };

                    ctx.draw(&Circle {
                        x: marker.lon,
                        y: marker.lat,
                        radius: marker_radius(marker.count()) * pulse,
                        color,
                    });
                }

                // Counts on a second layer so they sit above the circles.
                ctx.layer();
                for (index, marker) in markers.iter().enumerate() {
                    let style = if index == selected {
                        Style::default()
                            .fg(palette.marker_selected)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(palette.text)
                    };
                    ctx.print(
                        marker.lon,
                        marker.lat,
                        TextLine::styled(marker.count().to_string(), style),
                    );
                }
            })
            .x_bounds(LON_BOUNDS)
            .y_bounds(LAT_BOUNDS),
        area,
    );
}

/// Decorative coastline for the directory title area.
pub fn render_mini_map(f: &mut Frame<'_>, area: Rect, palette: Palette) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    f.render_widget(
        Canvas::default()
            .marker(CanvasMarker::Braille)
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::Low,
                    color: palette.map_land,
                });
            })
            .x_bounds(LON_BOUNDS)
            .y_bounds(LAT_BOUNDS),
        area,
    );
}
