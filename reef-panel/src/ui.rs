//! Render pass
//!
//! Pure state → frame. Nothing here mutates the view-model.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use shared::{OrderType, SearchType};

use crate::app::{App, FieldId, Screen};
use crate::status::StatusLevel;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(12),
        Constraint::Length(1),
        Constraint::Length(7),
    ])
    .split(frame.area());

    draw_tabs(frame, app, chunks[0]);
    match app.screen {
        Screen::Order => draw_order_screen(frame, app, chunks[1]),
        Screen::Dishes => draw_dishes_screen(frame, app, chunks[1]),
        Screen::Orders => draw_orders_screen(frame, app, chunks[1]),
    }
    draw_status(frame, app, chunks[2]);
    draw_log(frame, app, chunks[3]);

    if let Some(pending) = &app.panel.state.pending {
        draw_modal(frame, pending.prompt(), "(y 确认 / n 取消)");
    } else if let Some(alert) = &app.panel.state.alert {
        draw_modal(frame, alert, "(按任意键继续)");
    }
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles = Screen::ALL.iter().map(|s| s.title());
    let tabs = Tabs::new(titles)
        .select(app.screen_index())
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Reef 餐厅面板 (1/2/3 切换, q 退出) "),
        );
    frame.render_widget(tabs, area);
}

/// The value cell of a field line, reflecting focus and the open editor.
fn value_span<'a>(app: &'a App, field: FieldId) -> Span<'a> {
    let focused = app.focused() == field;
    if focused {
        if let Some(input) = &app.editing {
            return Span::styled(
                format!("{}▌", input.value()),
                Style::default().fg(Color::Yellow),
            );
        }
    }
    let value = app.field_value(field).unwrap_or_default();
    let style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    Span::styled(if value.is_empty() { " " } else { value }.to_string(), style)
}

fn field_line<'a>(app: &'a App, label: &'a str, field: FieldId) -> Line<'a> {
    Line::from(vec![Span::raw(format!("{label}: ")), value_span(app, field)])
}

fn button_line<'a>(app: &'a App, label: &'a str, field: FieldId) -> Line<'a> {
    let style = if app.focused() == field {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(format!("[ {label} ]"), style))
}

fn checkbox_line<'a>(app: &'a App, label: &'a str, checked: bool, field: FieldId) -> Line<'a> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if app.focused() == field {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(mark, style),
        Span::raw(format!(" {label} (空格切换)")),
    ])
}

fn draw_order_screen(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::horizontal([Constraint::Length(46), Constraint::Min(30)]).split(area);
    let left = Layout::vertical([Constraint::Length(9), Constraint::Min(4)]).split(cols[0]);

    let order = &app.panel.state.order;
    let active = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let inactive = Style::default();
    let mut lines = vec![Line::from(vec![
        Span::raw("点餐方式: "),
        Span::styled(
            "到店(d)",
            if order.order_type == OrderType::DineIn { active } else { inactive },
        ),
        Span::raw("  "),
        Span::styled(
            "外卖(t)",
            if order.order_type == OrderType::Takeout { active } else { inactive },
        ),
    ])];
    match order.order_type {
        OrderType::DineIn => {
            lines.push(field_line(app, "餐桌号", FieldId::TableNum));
            lines.push(checkbox_line(app, "包厢费", order.has_room_fee, FieldId::RoomFee));
        }
        OrderType::Takeout => {
            lines.push(field_line(app, "送餐时间", FieldId::TakeoutTime));
            lines.push(field_line(app, "送餐地址", FieldId::TakeoutAddress));
        }
    }
    lines.push(field_line(app, "手机号", FieldId::Phone));
    lines.push(Line::raw(""));
    lines.push(button_line(app, "提交订单", FieldId::SubmitOrder));

    let form = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" 订单 "));
    frame.render_widget(form, left[0]);

    let result = &app.panel.state.order_result;
    let result_text = if result.visible { result.text.as_str() } else { "" };
    let result_pane = Paragraph::new(result_text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" 下单结果 "));
    frame.render_widget(result_pane, left[1]);

    let mut menu_lines = Vec::new();
    for (idx, row) in order.rows.iter().enumerate() {
        menu_lines.push(Line::from(vec![
            Span::raw(format!("{:<12} ¥{:<8.2} 数量: ", row.dish.name, row.dish.final_price)),
            value_span(app, FieldId::Quantity(idx)),
        ]));
    }
    if menu_lines.is_empty() {
        menu_lines.push(Line::raw("菜单为空（后端未返回菜品）"));
    }
    let menu = Paragraph::new(menu_lines)
        .block(Block::default().borders(Borders::ALL).title(" 菜单 "));
    frame.render_widget(menu, cols[1]);
}

fn draw_dishes_screen(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .split(area);

    let add = Paragraph::new(vec![
        field_line(app, "名称", FieldId::AddName),
        field_line(app, "价格", FieldId::AddPrice),
        field_line(app, "折扣", FieldId::AddDiscount),
        button_line(app, "添加", FieldId::AddButton),
    ])
    .block(Block::default().borders(Borders::ALL).title(" 添加菜品 "));
    frame.render_widget(add, rows[0]);

    let update = Paragraph::new(vec![
        field_line(app, "菜品ID", FieldId::UpdateId),
        field_line(app, "新名称", FieldId::UpdateName),
        field_line(app, "新价格", FieldId::UpdatePrice),
        field_line(app, "新折扣", FieldId::UpdateDiscount),
        button_line(app, "修改", FieldId::UpdateButton),
    ])
    .block(Block::default().borders(Borders::ALL).title(" 修改菜品 "));
    frame.render_widget(update, rows[1]);

    let delete = Paragraph::new(vec![
        field_line(app, "菜品ID", FieldId::DeleteId),
        button_line(app, "删除", FieldId::DeleteButton),
    ])
    .block(Block::default().borders(Borders::ALL).title(" 删除菜品 "));
    frame.render_widget(delete, rows[2]);
}

fn draw_orders_screen(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(5),
        Constraint::Min(6),
        Constraint::Length(6),
        Constraint::Length(4),
    ])
    .split(area);

    let form = &app.panel.state.orders;
    let search_type = match form.search_type {
        SearchType::OrderNo => "订单号",
        SearchType::Phone => "手机号",
    };
    let search = Paragraph::new(vec![
        Line::raw(format!("搜索类型(s): {search_type}")),
        field_line(app, "关键词", FieldId::SearchKeyword),
        button_line(app, "搜索", FieldId::SearchButton),
    ])
    .block(Block::default().borders(Borders::ALL).title(" 订单搜索 "));
    frame.render_widget(search, rows[0]);

    let result = &app.panel.state.search_result;
    let result_text = if result.visible { result.text.as_str() } else { "" };
    let result_pane = Paragraph::new(result_text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" 搜索结果 "));
    frame.render_widget(result_pane, rows[1]);

    let edit = Paragraph::new(vec![
        field_line(app, "订单编号", FieldId::EditOrderNo),
        Line::raw(format!("修改字段(f): {}", form.edit_field.as_str())),
        field_line(app, "新值", FieldId::EditValue),
        button_line(app, "修改订单", FieldId::EditButton),
    ])
    .block(Block::default().borders(Borders::ALL).title(" 修改订单 "));
    frame.render_widget(edit, rows[2]);

    let delete = Paragraph::new(vec![
        field_line(app, "订单编号", FieldId::DeleteOrderNo),
        button_line(app, "删除订单", FieldId::DeleteOrderButton),
    ])
    .block(Block::default().borders(Borders::ALL).title(" 删除订单 "));
    frame.render_widget(delete, rows[3]);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let Some((text, level)) = app.panel.state.status.current() else {
        return;
    };
    let color = match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Error => Color::Red,
    };
    let status = Paragraph::new(text).style(Style::default().fg(color));
    frame.render_widget(status, area);
}

fn draw_log(frame: &mut Frame, app: &App, area: Rect) {
    let log = TuiLoggerWidget::default()
        .block(Block::default().borders(Borders::ALL).title(" 日志 "))
        .output_separator(' ')
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Green))
        .state(&app.logger_state);
    frame.render_widget(log, area);
}

fn draw_modal(frame: &mut Frame, text: &str, hint: &str) {
    let area = centered_rect(50, 5, frame.area());
    frame.render_widget(Clear, area);
    let body = Paragraph::new(vec![Line::raw(text), Line::raw(""), Line::raw(hint)])
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" 提示 "));
    frame.render_widget(body, area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}
