use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, ToSpan},
    widgets::{Block, Clear, List, ListItem, Paragraph, Wrap},
};
use tui_input::Input;

use crate::{
    app::{App, FocusedInput},
    keymap::Screen,
    models::PALETTE,
    view::NoteCard,
};

const PLACEHOLDER: &str = "Notes you add appear here";

impl App {
    pub fn draw(&self, frame: &mut Frame) {
        self.render_board(frame);
        match self.screen {
            Screen::List => {}
            Screen::Form => self.render_form(frame, "Take a note..."),
            Screen::Detail => self.render_form(frame, "Edit note"),
            Screen::ColorPicker => self.render_color_picker(frame),
        }
    }

    fn render_board(&self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(30), Constraint::Min(1)])
            .split(frame.area());

        let inner_list_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
            .split(layout[0]);

        let block = Block::bordered()
            .title("My Notes")
            .border_set(border::THICK);

        let board = self.store.board();
        if board.show_placeholder() {
            let placeholder = Paragraph::new(PLACEHOLDER)
                .wrap(Wrap { trim: true })
                .centered()
                .dark_gray()
                .block(block);
            frame.render_widget(placeholder, inner_list_layout[0]);
        } else {
            let items = board.cards.iter().enumerate().map(|(i, card)| {
                let item = ListItem::new(Line::from(card_label(card)))
                    .style(card_style(card))
                    .bold();

                if i == self.selected {
                    item.reversed()
                } else {
                    item
                }
            });
            frame.render_widget(List::new(items).block(block), inner_list_layout[0]);
        }

        let note_details = board.cards.get(self.selected).map(|card| {
            let mut details = Block::bordered().style(card_style(card));
            if let Some(title) = &card.title {
                details = details.title(title.as_str().bold());
            }
            Paragraph::new(card.text.as_str())
                .wrap(Wrap { trim: false })
                .block(details)
        });

        let help_message = Line::from_iter([
            "q".bold().yellow(),
            " exit, ".to_span(),
            "a".bold().yellow(),
            " add, ".to_span(),
            "e".bold().yellow(),
            " edit, ".to_span(),
            "c".bold().yellow(),
            " color, ".to_span(),
            "d".bold().red(),
            " delete".to_span(),
        ])
        .centered();

        frame.render_widget(help_message, inner_list_layout[1]);
        frame.render_widget(note_details, layout[1]);
    }

    fn render_form(&self, frame: &mut Frame, heading: &str) {
        let area = popup_area(frame.area(), 70, 9);
        frame.render_widget(Clear, area);

        let outer = Block::bordered().title(heading.bold());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(inner);

        let help_message = Line::from_iter([
            "Esc".bold().yellow(),
            " close, ".to_span(),
            "Ctrl+S".bold().yellow(),
            " save, ".to_span(),
            "Ctrl+X".bold().red(),
            " discard, ".to_span(),
            "Tab".bold().yellow(),
            " switch".to_span(),
        ])
        .centered();

        let title_focused = self.form.focused == FocusedInput::Title;
        self.render_input(frame, &self.form.title, "Title", layout[0], title_focused);
        self.render_input(frame, &self.form.text, "Text", layout[1], !title_focused);
        frame.render_widget(help_message, layout[2]);
    }

    fn render_input(&self, frame: &mut Frame, input: &Input, label: &str, area: Rect, focused: bool) {
        let width = area.width.max(3) - 3;
        let scroll = input.visual_scroll(width as usize);
        let mut block = Block::bordered().title(label);
        let mut paragraph = Paragraph::new(input.value()).scroll((0, scroll as u16));

        if focused {
            block = block.border_style(Style::new().yellow());
            let x = input.visual_cursor().max(scroll) - scroll + 1;
            frame.set_cursor_position((area.x + x as u16, area.y + 1));
        } else {
            paragraph = paragraph.dark_gray();
        }

        frame.render_widget(paragraph.block(block), area);
    }

    fn render_color_picker(&self, frame: &mut Frame) {
        let area = popup_area(frame.area(), 24, PALETTE.len() as u16 + 2);
        frame.render_widget(Clear, area);

        let items = PALETTE.iter().enumerate().map(|(i, (name, color))| {
            let line = Line::from_iter(["  ".to_span().bg(*color), " ".to_span(), name.to_span()]);
            let item = ListItem::new(line);
            if i == self.palette_cursor {
                item.bold().reversed()
            } else {
                item
            }
        });

        let block = Block::bordered()
            .title("Color")
            .border_set(border::ROUNDED);
        frame.render_widget(List::new(items).block(block), area);
    }
}

fn card_label(card: &NoteCard) -> &str {
    match &card.title {
        Some(title) => title.as_str(),
        None => card.text.lines().next().unwrap_or_default(),
    }
}

fn card_style(card: &NoteCard) -> Style {
    match card.background {
        Color::Reset => Style::default(),
        bg => Style::new().bg(bg).fg(Color::Black),
    }
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
