use crate::models::CATEGORIES;
use crate::options::{OptionsField, OptionsForm};
use crate::ui::layout::calculate_options_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key_span(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn field_lines(label: &str, value: String, focused: bool) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    vec![
        Line::from(Span::styled(label.to_string(), label_style)),
        Line::from(Span::styled(format!("  ◀ {} ▶", value), value_style)),
        Line::from(""),
    ]
}

pub fn draw_options(f: &mut Frame, form: &OptionsForm) {
    let layout = calculate_options_chunks(f.area());

    let title = Paragraph::new("Trivia Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let high_score = Paragraph::new(format!("★ Highest Score : {} ★", form.high_score))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(high_score, layout.high_score_area);

    let count_value = if form.count_input.is_empty() {
        format!("{} (default)", form.count_label())
    } else {
        form.count_label()
    };

    let mut lines = Vec::new();
    lines.extend(field_lines(
        "Number of Questions (2-50)",
        count_value,
        form.focused == OptionsField::Count,
    ));
    lines.extend(field_lines(
        "Category",
        CATEGORIES[form.category_index].1.to_string(),
        form.focused == OptionsField::Category,
    ));
    lines.extend(field_lines(
        "Difficulty",
        form.difficulty().label().to_string(),
        form.focused == OptionsField::Difficulty,
    ));
    lines.extend(field_lines(
        "Type",
        form.question_type().label().to_string(),
        form.focused == OptionsField::Type,
    ));

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let form_widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Quiz Options"),
    );
    f.render_widget(form_widget, layout.form_area);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Field  "),
        key_span("←/→"),
        Span::from(" Change  "),
        key_span("0-9"),
        Span::from(" Count  "),
        key_span("Enter"),
        Span::from(" Start Quiz  "),
        key_span("Esc/Ctrl+C"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_draw_options_shows_high_score_and_defaults() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let form = OptionsForm::new(7);
        terminal.draw(|f| draw_options(f, &form)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Highest Score : 7"));
        assert!(text.contains("5 (default)"));
        assert!(text.contains("Any Category"));
        assert!(text.contains("Any Difficulty"));
        assert!(text.contains("Any Type"));
    }

    #[test]
    fn test_draw_options_shows_error() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut form = OptionsForm::new(0);
        form.count_input = "abc".to_string();
        form.error = form.submit().err();
        terminal.draw(|f| draw_options(f, &form)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("whole number between 2 and 50"));
    }
}
