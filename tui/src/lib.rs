//! TUI rendering for Lootdrop using ratatui.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use lootdrop_engine::{App, CardState, ContentBundle, HeroAction, InputMode, Item, View};
use lootdrop_types::FINAL_PRICE_LABEL;

/// Cards per row in the selection grid.
pub const GRID_COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 6;
const HERO_HEIGHT: u16 = 6;
const PROGRESS_BAR_WIDTH: usize = 30;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let content = app.content();

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // View
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    match app.view() {
        View::Catalog => draw_catalog(frame, app, chunks[1], &palette, &glyphs),
        View::Cart => draw_cart(frame, app, chunks[1], &palette, &glyphs),
    }
    draw_status_bar(frame, app, chunks[2], &palette);

    if app.toast_visible() {
        draw_toast(frame, content, &palette, &glyphs);
    }

    if let Some(remaining) = app.checkout_countdown() {
        draw_confirm_modal(frame, content, remaining, &palette);
    }
}

// ============================================================================
// Header
// ============================================================================

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let content = app.content();
    let nav_style = |view: View| {
        if app.view() == view {
            styles::nav_active(palette)
        } else {
            Style::default().fg(palette.text_secondary)
        }
    };

    let mut left = vec![
        Span::styled(format!(" {} ", content.brand), styles::brand(palette)),
        Span::styled(glyphs.separator, Style::default().fg(palette.bg_border)),
        Span::styled(format!(" {} ", content.nav_home), nav_style(View::Catalog)),
        Span::raw(" "),
        Span::styled(
            format!(" {} {} ", glyphs.cart, content.nav_cart),
            nav_style(View::Cart),
        ),
    ];
    let count = app.cart().len();
    if count > 0 {
        left.push(Span::styled(format!(" {count} "), styles::badge(palette)));
    }

    let mut right: Vec<Span> = Vec::new();
    for (i, language) in lootdrop_engine::Language::all().iter().enumerate() {
        if i > 0 {
            right.push(Span::styled("/", Style::default().fg(palette.text_muted)));
        }
        let style = if *language == app.language() {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted)
        };
        right.push(Span::styled(language.switch_label(), style));
    }
    right.push(Span::raw(" "));

    let used = spans_width(&left) + spans_width(&right);
    let gap = usize::from(area.width).saturating_sub(used);
    left.push(Span::raw(" ".repeat(gap)));
    left.extend(right);

    frame.render_widget(
        Paragraph::new(Line::from(left)).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(Span::width).sum()
}

// ============================================================================
// Catalog view
// ============================================================================

fn draw_catalog(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let content = app.content();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(2), // Selection title + pro tip
            Constraint::Length(1), // Search
            Constraint::Min(1),    // Grid
            Constraint::Length(1), // Footer
        ])
        .split(area);

    // Hero
    let hero_button = match app.hero_action() {
        HeroAction::GoToCart => content.go_to_cart_button,
        HeroAction::BrowseSelection => content.get_brainrots_button,
    };
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            content.hero_title,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            content.hero_description,
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {hero_button} "), styles::button(palette)),
            Span::styled("  g", styles::key_highlight(palette)),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(palette.bg_panel)),
    );
    frame.render_widget(hero, chunks[0]);

    // Selection heading
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            content.selection_title,
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} ", content.pro_tip_label),
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(content.pro_tip_text, styles::key_hint(palette)),
        ]),
    ]);
    frame.render_widget(heading, chunks[1]);

    draw_search(frame, app, chunks[2], palette, glyphs);

    let items = app.visible_items();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                content.search_not_found,
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            chunks[3],
        );
    } else {
        draw_grid(frame, app, &items, chunks[3], palette, glyphs);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(content.footer_text, styles::key_hint(palette)))
            .alignment(Alignment::Center),
        chunks[4],
    );
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let content = app.content();
    let query = app.search_query();
    let searching = app.input_mode() == InputMode::Search;

    let mut spans = vec![Span::styled(
        format!("{} ", glyphs.search),
        Style::default().fg(palette.accent),
    )];
    if query.is_empty() && !searching {
        spans.push(Span::styled(
            content.search_placeholder,
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            query.to_string(),
            Style::default().fg(palette.text_primary),
        ));
    }
    if searching {
        spans.push(Span::styled(glyphs.cursor, Style::default().fg(palette.accent)));
    }

    let style = if searching {
        Style::default().bg(palette.bg_highlight)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
}

fn draw_grid(
    frame: &mut Frame,
    app: &App,
    items: &[&Item],
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let selected = app.catalog_selection().unwrap_or(0);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = selected / GRID_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in rows.iter().enumerate() {
        let row = first_row + row_offset;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);
        for (col, card_area) in columns.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            let Some(item) = items.get(index) else {
                return;
            };
            draw_card(frame, app, item, index == selected, *card_area, palette, glyphs);
        }
    }
}

fn draw_card(
    frame: &mut Frame,
    app: &App,
    item: &Item,
    selected: bool,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let content = app.content();
    let tag_color = palette.tag(item.color_tag());
    let inner_width = usize::from(area.width.saturating_sub(4));

    let (action, action_style) = match app.card_state(item) {
        CardState::InCart => (
            format!("{} {}", glyphs.check, content.added_to_cart),
            Style::default().fg(palette.success),
        ),
        CardState::CartFull => (
            format!("{} {}", glyphs.blocked, content.cart_limit_reached),
            styles::button_disabled(palette),
        ),
        CardState::Available => (format!(" {} ", content.add_to_cart), styles::button(palette)),
    };

    let name_style = Style::default()
        .fg(palette.text_primary)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(item.name.as_str(), inner_width),
            name_style,
        )),
        Line::from(Span::styled(item.rarity.label(), Style::default().fg(tag_color))),
        Line::from(vec![
            Span::styled(item.list_price(), styles::struck_price(palette)),
            Span::raw(" "),
            Span::styled(FINAL_PRICE_LABEL, styles::final_price(palette)),
        ]),
        Line::from(Span::styled(
            truncate_to_width(&action, inner_width),
            action_style,
        )),
    ];

    let (border_type, border_style) = if selected {
        (
            BorderType::Thick,
            Style::default().fg(tag_color).add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Rounded, Style::default().fg(palette.bg_border))
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel));
    if selected {
        block = block.title(Span::styled(glyphs.selected, Style::default().fg(tag_color)));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn truncate_to_width(raw: &str, max: usize) -> String {
    if raw.width() <= max {
        return raw.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in raw.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 3 > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

// ============================================================================
// Cart view
// ============================================================================

fn draw_cart(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let content = app.content();

    if app.provisioning().is_some() {
        draw_console(frame, app, area, palette, glyphs);
        return;
    }

    if app.cart().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                content.empty_cart_title,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                content.empty_cart_text,
                Style::default().fg(palette.text_muted),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let selected = app.cart_selection();
    let mut lines = Vec::with_capacity(app.cart().len() * 2);
    for (index, item) in app.cart().items().iter().enumerate() {
        let is_selected = selected == Some(index);
        let marker = if is_selected { glyphs.selected } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
            Span::styled(
                item.name.to_string(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                item.rarity.label(),
                Style::default().fg(palette.tag(item.color_tag())),
            ),
            Span::raw("  "),
            Span::styled(item.list_price(), styles::struck_price(palette)),
            Span::raw(" "),
            Span::styled(FINAL_PRICE_LABEL, styles::final_price(palette)),
        ]));
        if is_selected {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled("d", styles::key_highlight(palette)),
                Span::styled(format!(" {}", content.remove_item), styles::key_hint(palette)),
            ]));
        }
    }

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.bg_border))
            .style(Style::default().bg(palette.bg_panel))
            .title(Span::styled(
                format!(" {} ", content.cart_title),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(list, chunks[0]);

    let checkout = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", content.checkout_label(app.cart().len())),
            styles::button(palette),
        ),
        Span::styled("  Enter", styles::key_highlight(palette)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(checkout, chunks[1]);
}

fn draw_confirm_modal(frame: &mut Frame, content: &ContentBundle, remaining: u32, palette: &Palette) {
    let body: Vec<Span> = content
        .modal_segments()
        .into_iter()
        .map(|(segment, highlighted)| {
            if highlighted {
                Span::styled(segment, styles::highlight_term(palette))
            } else {
                Span::styled(segment, Style::default().fg(palette.text_primary))
            }
        })
        .collect();

    let (confirm_label, confirm_style) = if remaining > 0 {
        (
            content.countdown_label(remaining),
            styles::button_disabled(palette),
        )
    } else {
        (content.modal_button.to_string(), styles::button(palette))
    };

    let lines = vec![
        Line::from(body),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {confirm_label} "), confirm_style),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", content.modal_cancel),
                Style::default().fg(palette.text_secondary),
            ),
        ]),
        Line::from(vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" / ", styles::key_hint(palette)),
            Span::styled("Esc", styles::key_highlight(palette)),
        ]),
    ];

    let area = frame.area();
    let width = 64.min(area.width.saturating_sub(4));
    let height = 12.min(area.height.saturating_sub(2));
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.warning))
        .style(Style::default().bg(palette.bg_popup))
        .padding(Padding::uniform(1))
        .title(Span::styled(
            format!(" {} ", content.modal_title),
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        rect,
    );
}

// ============================================================================
// Provisioning console
// ============================================================================

fn draw_console(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let Some(session) = app.provisioning() else {
        return;
    };
    let content = app.content();
    let success_height = if session.succeeded() { 5 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(success_height),
        ])
        .split(area);

    let prompt_style = Style::default().fg(palette.green);
    let text_style = Style::default().fg(palette.text_primary);
    let mut lines: Vec<Line> = session
        .emitted_lines()
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(format!("{} ", glyphs.prompt), prompt_style),
                Span::styled(line.clone(), text_style),
            ])
        })
        .collect();
    if session.show_cursor() {
        let cursor = if app.cursor_blink_on() { glyphs.cursor } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.prompt), prompt_style),
            Span::styled(cursor, Style::default().fg(palette.accent)),
        ]));
    }

    // Keep the newest lines in view.
    let inner_height = usize::from(chunks[0].height.saturating_sub(2));
    let scroll = lines.len().saturating_sub(inner_height);
    let console = Paragraph::new(lines)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border))
                .style(Style::default().bg(palette.bg_dark))
                .title(Span::styled(
                    format!(" {} ", content.console_window_title),
                    Style::default().fg(palette.text_secondary),
                )),
        );
    frame.render_widget(console, chunks[0]);

    let percent = session.progress_percent();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(progress_bar(percent, glyphs), Style::default().fg(palette.green)),
            Span::styled(format!(" {percent:>3}%"), Style::default().fg(palette.text_secondary)),
        ])),
        chunks[1],
    );

    if session.succeeded() {
        let success = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                content.transfer_success_title,
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                content.transfer_success_text,
                Style::default().fg(palette.text_secondary),
            )),
            Line::from(vec![
                Span::styled(format!(" {} ", content.join_server_button), styles::button(palette)),
                Span::styled("  o", styles::key_highlight(palette)),
            ]),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(success, chunks[2]);
    }
}

fn progress_bar(percent: u8, glyphs: &Glyphs) -> String {
    let filled = PROGRESS_BAR_WIDTH * usize::from(percent.min(100)) / 100;
    format!(
        "{}{}",
        glyphs.bar_full.repeat(filled),
        glyphs.bar_empty.repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

// ============================================================================
// Overlays and status
// ============================================================================

fn draw_toast(frame: &mut Frame, content: &ContentBundle, palette: &Palette, glyphs: &Glyphs) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.check), Style::default().fg(palette.success)),
            Span::styled(content.toast_item_added, Style::default().fg(palette.text_primary)),
        ]),
        Line::from(vec![
            Span::styled("t", styles::key_highlight(palette)),
            Span::styled(format!(" {}  ", content.toast_go_to_cart), styles::key_hint(palette)),
            Span::styled("x", styles::key_highlight(palette)),
        ]),
    ];

    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .and_then(|w| u16::try_from(w).ok())
        .unwrap_or(20)
        .saturating_add(4);
    let area = frame.area();
    let width = width.min(area.width);
    let height = 4.min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.success))
        .style(Style::default().bg(palette.bg_popup))
        .padding(Padding::horizontal(1));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let line = if let Some(status) = app.status_message() {
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(palette.accent),
        ))
    } else {
        let hints: &[(&str, &str)] = match app.input_mode() {
            InputMode::Browse => &[
                ("←→↑↓", "move"),
                ("Enter", "add"),
                ("/", "search"),
                ("c", "cart"),
                ("L", "language"),
                ("q", "quit"),
            ],
            InputMode::Search => &[("Enter", "done"), ("Esc", "clear")],
            InputMode::Cart => &[
                ("↑↓", "move"),
                ("d", "remove"),
                ("Enter", "checkout"),
                ("Esc", "home"),
                ("q", "quit"),
            ],
            InputMode::Confirm => &[("Enter", "confirm"), ("Esc", "cancel")],
            InputMode::Console => &[("o", "join"), ("Esc", "home"), ("q", "quit")],
        };
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::key_highlight(palette)));
            spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use lootdrop_engine::{Catalog, ItemName, Language, UiOptions, WorkflowSettings};

    fn app(language: Language) -> App {
        App::new(
            WorkflowSettings::default(),
            Catalog::builtin(),
            language,
            UiOptions {
                ascii_only: true,
                ..UiOptions::default()
            },
        )
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add(app: &mut App, name: &str) {
        assert!(app.add_to_cart(&ItemName::new(name).expect("non-empty")));
    }

    #[test]
    fn catalog_shows_cards_and_prices() {
        let app = app(Language::En);
        let screen = render(&app, 120, 40);
        assert!(screen.contains("La Grande Combinasion"));
        assert!(screen.contains("249.99$"));
        assert!(screen.contains(FINAL_PRICE_LABEL));
        assert!(screen.contains("Get Brainrots"));
    }

    #[test]
    fn badge_and_card_states_follow_cart() {
        let mut app = app(Language::En);
        add(&mut app, "La Grande Combinasion");
        let content = app.content();
        let screen = render(&app, 120, 40);
        assert!(screen.contains(" 1 "));
        assert!(screen.contains(content.added_to_cart));
        assert!(screen.contains(content.go_to_cart_button));
        assert!(screen.contains(content.toast_item_added));
    }

    #[test]
    fn search_without_hits_shows_not_found() {
        let mut app = app(Language::En);
        app.begin_search();
        for c in "zzz".chars() {
            app.search_push(c);
        }
        let screen = render(&app, 120, 40);
        assert!(screen.contains(app.content().search_not_found));
    }

    #[test]
    fn empty_cart_screen() {
        let mut app = app(Language::En);
        app.go_to_cart();
        let screen = render(&app, 100, 30);
        assert!(screen.contains(app.content().empty_cart_title));
    }

    #[test]
    fn cart_lists_items_with_plural_checkout() {
        let mut app = app(Language::En);
        add(&mut app, "Frigo Camelo");
        add(&mut app, "Odin Din Din Dun");
        app.dismiss_toast();
        app.go_to_cart();
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Frigo Camelo"));
        assert!(screen.contains("Odin Din Din Dun"));
        assert!(screen.contains(&app.content().checkout_label(2)));
    }

    #[test]
    fn modal_shows_countdown_then_confirm_label() {
        let mut app = app(Language::En);
        add(&mut app, "Frigo Camelo");
        app.dismiss_toast();
        app.go_to_cart();
        app.request_checkout();
        let content = app.content();
        let screen = render(&app, 100, 30);
        assert!(screen.contains(&content.countdown_label(5)));

        app.advance(Duration::from_secs(5));
        let screen = render(&app, 100, 30);
        assert!(screen.contains(content.modal_button));
    }

    #[test]
    fn console_shows_lines_and_success() {
        let mut app = app(Language::En);
        add(&mut app, "Frigo Camelo");
        app.dismiss_toast();
        app.go_to_cart();
        app.request_checkout();
        app.advance(Duration::from_secs(5));
        app.confirm_checkout();
        app.advance(Duration::from_millis(400));

        let content = app.content();
        let first = app.provisioning().expect("running").emitted_lines()[0].clone();
        let screen = render(&app, 100, 30);
        assert!(screen.contains(&format!("> {first}")));
        assert!(screen.contains(content.console_window_title));
        assert!(!screen.contains(content.transfer_success_title));

        app.advance(Duration::from_secs(10));
        let screen = render(&app, 100, 30);
        assert!(screen.contains(content.transfer_success_title));
        assert!(screen.contains(content.join_server_button));
        assert!(screen.contains("100%"));
    }

    #[test]
    fn status_line_replaces_hints() {
        let mut app = app(Language::En);
        app.push_status("copied!");
        let screen = render(&app, 100, 30);
        assert!(screen.contains("copied!"));
    }

    #[test]
    fn progress_bar_scales() {
        let g = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        assert_eq!(progress_bar(0, &g), "-".repeat(PROGRESS_BAR_WIDTH));
        assert_eq!(progress_bar(100, &g), "#".repeat(PROGRESS_BAR_WIDTH));
        assert_eq!(progress_bar(50, &g).matches('#').count(), PROGRESS_BAR_WIDTH / 2);
    }

    #[test]
    fn truncation_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("La Vacca Saturno Saturnita", 12);
        assert!(cut.width() <= 12);
        assert!(cut.ends_with("..."));
    }
}
