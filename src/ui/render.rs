use crate::catalog::live_filter;
use crate::ui::app::{App, Focus, LoginField, Screen};
use crate::ui::layout::{centered_rect_by_size, layout_regions, products_regions};
use crate::ui::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    draw_header(frame, app, palette, header);
    match app.screen() {
        Screen::Login => draw_login(frame, app, palette, body),
        Screen::Products => draw_products(frame, app, palette, body),
        Screen::Details => draw_details(frame, app, palette, body),
    }
    draw_footer(frame, app, palette, footer);
    draw_toast(frame, app, palette, area);
    draw_alert(frame, app, palette, body);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    if area.height == 0 {
        return;
    }

    let title = match app.screen() {
        Screen::Login => "vitrine · sign in",
        Screen::Products => "vitrine · products",
        Screen::Details => "vitrine · details",
    };
    let stats = match app.screen() {
        Screen::Login => app.strategy().label().to_string(),
        _ => {
            let catalog = app.catalog();
            let shown = live_filter(&catalog.items, app.search_text()).len();
            let total = catalog
                .total
                .map(|total| total.to_string())
                .unwrap_or_else(|| "?".to_string());
            format!(
                "{shown}/{} shown · total {total} · {} theme",
                catalog.items.len(),
                app.theme().label()
            )
        }
    };

    let pad = (area.width as usize).saturating_sub(title.chars().count() + stats.chars().count());
    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(stats, Style::default().fg(palette.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_login(frame: &mut Frame<'_>, app: &App, palette: &Palette, body: Rect) {
    let form = app.login_form();
    let strategy = app.strategy();
    let session = app.session_view();

    let box_area = centered_rect_by_size(body, 44, 9);
    let block = Block::default()
        .title(strategy.label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let field_style = |field: LoginField| {
        if form.field == field {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.dim)
        }
    };
    let identity_prefix = format!("{}: ", strategy.identity_label());
    let masked = "*".repeat(form.password.chars().count());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(identity_prefix.clone(), field_style(LoginField::Identity)),
            Span::styled(form.identity.clone(), Style::default().fg(palette.text)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Password: ", field_style(LoginField::Password)),
            Span::styled(masked, Style::default().fg(palette.text)),
        ]),
        Line::from(""),
    ];
    if session.loading {
        lines.push(Line::from(Span::styled(
            "Logging in...",
            Style::default().fg(palette.dim),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter to sign in, Tab to switch fields",
            Style::default().fg(palette.dim),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    if !session.loading && !app.has_alert() && inner.width > 0 && inner.height > 0 {
        let (prefix, value, row) = match form.field {
            LoginField::Identity => (
                identity_prefix.chars().count(),
                form.identity.chars().count(),
                0u16,
            ),
            LoginField::Password => ("Password: ".chars().count(), form.password.chars().count(), 2),
        };
        if row < inner.height {
            let x = inner.x
                + (prefix + value).min(inner.width.saturating_sub(1) as usize) as u16;
            frame.set_cursor_position((x, inner.y + row));
        }
    }
}

fn draw_products(frame: &mut Frame<'_>, app: &App, palette: &Palette, body: Rect) {
    let (search_area, list_area) = products_regions(body);
    let catalog = app.catalog();
    let text = app.search_text();
    let focused = app.focus() == Focus::Search;

    let search_border = if focused { palette.accent } else { palette.border };
    let search_block = Block::default()
        .title("Search")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(search_border));
    let search_inner = search_block.inner(search_area);
    frame.render_widget(search_block, search_area);

    let search_line = if text.is_empty() && !focused {
        Line::from(Span::styled(
            "Search products",
            Style::default().fg(palette.dim),
        ))
    } else {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(palette.text),
        ))
    };
    frame.render_widget(Paragraph::new(search_line), search_inner);
    if focused && search_inner.width > 0 && search_inner.height > 0 {
        let x = search_inner.x
            + text
                .chars()
                .count()
                .min(search_inner.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position((x, search_inner.y));
    }

    let displayed = live_filter(&catalog.items, text);
    let row_width = list_area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = displayed
        .iter()
        .map(|product| {
            let price = format!("${:.2}", product.price);
            let title = truncate_to(
                &product.title,
                row_width.saturating_sub(price.chars().count() + 1),
            );
            let pad = row_width.saturating_sub(title.chars().count() + price.chars().count());
            ListItem::new(Line::from(vec![
                Span::styled(title, Style::default().fg(palette.text)),
                Span::raw(" ".repeat(pad)),
                Span::styled(price, Style::default().fg(palette.price)),
            ]))
        })
        .collect();

    let list_title = if catalog.loading {
        "Products (loading...)"
    } else {
        "Products"
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(list_title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .highlight_style(Style::default().bg(palette.highlight));
    let selected = if displayed.is_empty() {
        None
    } else {
        Some(app.selection().min(displayed.len() - 1))
    };
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, list_area, &mut list_state);

    if displayed.is_empty() && !catalog.loading {
        let message = if catalog.items.is_empty() {
            "No products loaded"
        } else {
            "No titles match the filter"
        };
        let message_area = centered_rect_by_size(list_area, message.chars().count() as u16, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(palette.dim),
            ))),
            message_area,
        );
    }
}

fn draw_details(frame: &mut Frame<'_>, app: &App, palette: &Palette, body: Rect) {
    let Some(product) = app.details_product() else {
        return;
    };

    let block = Block::default()
        .title("Product")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let mut lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("${:.2}", product.price),
            Style::default().fg(palette.price),
        )),
        Line::from(""),
    ];
    if !product.description.is_empty() {
        lines.push(Line::from(Span::styled(
            product.description.clone(),
            Style::default().fg(palette.text),
        )));
        lines.push(Line::from(""));
    }
    if !product.thumbnail.is_empty() {
        lines.push(Line::from(Span::styled(
            product.thumbnail.clone(),
            Style::default().fg(palette.dim),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    if area.height == 0 {
        return;
    }

    let hints = match (app.screen(), app.focus()) {
        (Screen::Login, _) => "Enter sign in · Tab fields · Ctrl+Q quit",
        (Screen::Products, Focus::Search) => "Enter submit · Esc back to list · Ctrl+Q quit",
        (Screen::Products, Focus::List) => {
            "/ search · Enter details · r refresh · t theme · Ctrl+L logout · Ctrl+Q quit"
        }
        (Screen::Details, _) => "Esc back · t theme · Ctrl+L logout · Ctrl+Q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(palette.dim),
        ))),
        area,
    );
}

fn draw_toast(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let Some(message) = app.toast() else {
        return;
    };
    if area.height < 2 || area.width == 0 {
        return;
    }

    let width = (message.chars().count() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + 1,
        width,
        height: 1,
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  {message}  "),
            Style::default().fg(Color::White).bg(palette.overlay),
        ))),
        rect,
    );
}

fn draw_alert(frame: &mut Frame<'_>, app: &App, palette: &Palette, body: Rect) {
    let Some(alert) = app.session_view().alert else {
        return;
    };

    let width = (alert.chars().count() as u16 + 4).max(30).min(body.width.max(1));
    let area = centered_rect_by_size(body, width, 5);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.error));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(alert, Style::default().fg(palette.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Esc/Enter to dismiss",
            Style::default().fg(palette.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn truncate_to(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}
