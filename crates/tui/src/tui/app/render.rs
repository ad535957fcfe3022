use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::core::{OverlayState, RegistryKind};
use crate::model::TaskStatus;
use crate::tui::constants::{
    APP_VERSION, EMPTY_TEXT, EMPTY_TITLE, HINT_DASHBOARD, HINT_FORM, HINT_PLAY_PAUSE,
};
use crate::tui::form::{FormAction, FormRow};
use crate::tui::helpers::{
    accent_title, button, centered_rect, status_color, BG_ACCENT, BG_BASE, BG_PANEL, FG_FOCUS,
};

use super::{App, DashboardFocus};

const FORM_LABEL_WIDTH: u16 = 18;

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_metrics(f, chunks[1]);
        self.draw_toolbar(f, chunks[2]);
        self.draw_tasks(f, chunks[3]);
        self.draw_footer(f, chunks[4]);

        if self.board.overlay_state().is_open() {
            self.draw_form(f, size);
        }
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" FocusBoard v{} ", APP_VERSION),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("— task board"),
            Span::raw("  "),
            Span::styled(
                format!("{}", self.config.data_dir().display()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(BG_BASE)),
            area,
        );
    }

    fn draw_metrics(&self, f: &mut Frame<'_>, area: Rect) {
        let stats = self.board.stats();
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Min(20),
            ])
            .split(area);

        let metrics = [
            ("Total", stats.total, Color::White),
            ("Pending", stats.pending, Color::Yellow),
            ("Done", stats.done, Color::Green),
        ];
        for (idx, (label, value, color)) in metrics.into_iter().enumerate() {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(accent_title(label))
                .border_style(Style::default().fg(Color::DarkGray))
                .style(Style::default().bg(BG_PANEL));
            let paragraph = Paragraph::new(Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(paragraph, cols[idx]);
        }

        let percent = stats.progress_percent().min(100);
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(accent_title("Progress"))
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(BG_PANEL)),
            )
            .gauge_style(Style::default().fg(Color::Green).bg(BG_ACCENT))
            .percent(percent)
            .label(format!("{}% done", percent));
        f.render_widget(gauge, cols[3]);
    }

    fn draw_toolbar(&self, f: &mut Frame<'_>, area: Rect) {
        let interactive = self.board.is_dashboard_interactive();
        let line = Line::from(vec![
            Span::raw(" "),
            button(
                "+ New task",
                interactive && self.focus == DashboardFocus::NewTask,
                false,
            ),
            Span::raw("  "),
            button(
                "Clear completed",
                interactive && self.focus == DashboardFocus::ClearCompleted,
                false,
            ),
            Span::raw("   "),
            Span::styled(HINT_PLAY_PAUSE, Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(BG_BASE)),
            area,
        );
    }

    fn draw_tasks(&mut self, f: &mut Frame<'_>, area: Rect) {
        let stats = self.board.stats();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(&format!("Tasks • {} pending", stats.pending)))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));

        if self.board.tasks().is_empty() {
            let inner = block.inner(area);
            f.render_widget(block, area);
            if inner.width == 0 || inner.height == 0 {
                return;
            }
            let lines = vec![
                Line::from(Span::styled(
                    EMPTY_TITLE,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(EMPTY_TEXT, Style::default().fg(Color::Gray))),
            ];
            let content = centered_rect(inner.width.min(60), 3, inner);
            let paragraph = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center);
            f.render_widget(paragraph, content);
            return;
        }

        let interactive = self.board.is_dashboard_interactive();
        let header = Row::new(vec![
            Cell::from("Task"),
            Cell::from("Category"),
            Cell::from("Responsible"),
            Cell::from("Status"),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .board
            .tasks()
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let card_focused = interactive && self.focus == DashboardFocus::Card(idx);
                let status_focused = interactive && self.focus == DashboardFocus::Status(idx);
                let name_style = if card_focused {
                    Style::default().fg(FG_FOCUS).add_modifier(Modifier::BOLD)
                } else if task.status.is_done() {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                let status_style = if status_focused {
                    Style::default()
                        .fg(BG_BASE)
                        .bg(FG_FOCUS)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(status_color(task.status))
                };
                Row::new(vec![
                    Cell::from(task.name.clone()).style(name_style),
                    Cell::from(task.category.clone()),
                    Cell::from(task.responsible.clone()),
                    Cell::from(format!(" {} ", task.status.label())).style(status_style),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(45),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Length(14),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_symbol("▶ ");

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.style())])
        } else {
            Line::from(vec![Span::raw("Ready")])
        };
        f.render_widget(Paragraph::new(status_line), lines[0]);

        let help = if self.board.is_dashboard_interactive() {
            HINT_DASHBOARD
        } else {
            HINT_FORM
        };
        let help_line = Line::from(vec![Span::styled(
            help,
            Style::default().fg(Color::DarkGray),
        )]);
        f.render_widget(Paragraph::new(help_line), lines[1]);
    }

    fn draw_form(&self, f: &mut Frame<'_>, area: Rect) {
        let draft = match self.board.draft() {
            Some(draft) => draft,
            None => return,
        };
        let editing = self.is_editing();
        let title = match self.board.overlay_state() {
            OverlayState::EditOpen(id) => format!("Edit task #{}", id),
            _ => String::from("New task"),
        };

        let popup = centered_rect(area.width.saturating_sub(8).min(90), 20, area);
        f.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(&title))
            .border_style(Style::default().fg(FG_FOCUS))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let mut lines: Vec<Line> = Vec::new();
        let mut cursor = None;
        for row in FormRow::ALL {
            let focused = self.form.row == row;
            let mut spans = vec![Span::styled(
                format!("{:<width$}", row.title(), width = FORM_LABEL_WIDTH as usize),
                label_style(focused),
            )];
            match row {
                FormRow::Name | FormRow::NewCategory | FormRow::NewResponsible => {
                    if let Some(buffer) = self.buffer(row) {
                        spans.push(Span::styled(
                            format!("{} ", buffer.as_str()),
                            text_style(focused),
                        ));
                        if focused {
                            cursor = Some((buffer.cursor_col() as u16, lines.len() as u16));
                        }
                        if focused && row != FormRow::Name {
                            spans.push(Span::styled(
                                " Enter: add ",
                                Style::default().fg(Color::DarkGray),
                            ));
                        }
                    }
                }
                FormRow::Status => {
                    for (idx, status) in TaskStatus::ALL.iter().enumerate() {
                        spans.push(button(
                            status.label(),
                            focused && self.form.column == idx,
                            draft.status == *status,
                        ));
                        spans.push(Span::raw(" "));
                    }
                }
                FormRow::Category | FormRow::Responsible => {
                    let kind = if row == FormRow::Category {
                        RegistryKind::Category
                    } else {
                        RegistryKind::Responsible
                    };
                    let selected = draft.selected(kind);
                    for (idx, entry) in self.board.registry(kind).entries().iter().enumerate() {
                        spans.push(button(
                            entry,
                            focused && self.form.column == idx,
                            entry == selected,
                        ));
                        spans.push(Span::raw(" "));
                    }
                }
                FormRow::Actions => {
                    for (idx, action) in FormAction::available(editing).iter().enumerate() {
                        spans.push(button(
                            action.label(editing),
                            focused && self.form.column == idx,
                            false,
                        ));
                        spans.push(Span::raw("  "));
                    }
                }
            }
            if row == FormRow::Actions {
                lines.push(Line::default());
                if let Some(error) = &draft.error {
                    lines.push(Line::from(Span::styled(
                        format!("⚠️  {}", error),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )));
                }
            }
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

        if let Some((col, row)) = cursor {
            let x = inner.x + FORM_LABEL_WIDTH + col;
            let y = inner.y + row;
            if x < inner.x + inner.width && y < inner.y + inner.height {
                f.set_cursor(x, y);
            }
        }
    }
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FG_FOCUS).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn text_style(focused: bool) -> Style {
    let style = Style::default().fg(Color::White).bg(BG_ACCENT);
    if focused {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}
