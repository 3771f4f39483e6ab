use crate::models::{Phase, QuizSession};
use crate::scoring::{all_answered, is_win};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{scroll_to_show, wrap_to_width};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Indent for answer lines under a prompt.
const ANSWER_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMark {
    Plain,
    Selected,
    Correct,
    Incorrect,
}

/// How an answer is shown. Correctness is only revealed once completed.
pub fn answer_mark(session: &QuizSession, question: usize, answer: &str) -> AnswerMark {
    let selected = session
        .selected_answers
        .get(&question)
        .is_some_and(|s| s == answer);

    if session.phase != Phase::Completed {
        return if selected {
            AnswerMark::Selected
        } else {
            AnswerMark::Plain
        };
    }

    let correct = session.questions[question].correct_answer == answer;
    match (selected, correct) {
        (_, true) => AnswerMark::Correct,
        (true, false) => AnswerMark::Incorrect,
        (false, false) => AnswerMark::Plain,
    }
}

fn mark_style(mark: AnswerMark) -> Style {
    match mark {
        AnswerMark::Plain => Style::default(),
        AnswerMark::Selected => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        AnswerMark::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        AnswerMark::Incorrect => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
    }
}

fn key_span(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    let progress = match session.phase {
        Phase::InProgress | Phase::Completed => format!(
            "Question {} / {} - {}",
            session.current_question + 1,
            session.questions.len(),
            session.params.category.label()
        ),
        _ => session.params.category.label().to_string(),
    };
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    match session.phase {
        Phase::Loading => draw_centered(
            f,
            layout.body_area,
            "Loading questions...",
            Style::default().fg(Color::Cyan),
        ),
        Phase::Error => draw_centered(
            f,
            layout.body_area,
            session.error_message.as_deref().unwrap_or_default(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Phase::InProgress | Phase::Completed => draw_questions(f, layout.body_area, session),
    }

    let status = status_line(session);
    let status_widget = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_widget, layout.status_area);

    let help = Paragraph::new(help_line(session))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_centered(f: &mut Frame, area: Rect, message: &str, style: Style) {
    let top_padding = area.height.saturating_sub(3) / 2;
    let mut text = Text::default();
    for _ in 0..top_padding {
        text.push_line(Line::from(""));
    }
    text.push_line(Line::from(Span::styled(message.to_string(), style)));

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

/// Lines for one question: the wrapped prompt, one wrapped answer per
/// line, then a blank spacer.
fn question_lines(session: &QuizSession, index: usize, width: usize) -> Vec<Line<'static>> {
    let question = &session.questions[index];
    let focused = index == session.current_question;
    let prompt_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines: Vec<Line<'static>> =
        wrap_to_width(&format!("{}. {}", index + 1, question.prompt), width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, prompt_style)))
            .collect();

    let answer_width = width.saturating_sub(ANSWER_INDENT.len());
    for (j, answer) in question.answers.iter().enumerate() {
        let mut style = mark_style(answer_mark(session, index, answer));
        if focused && j == session.current_answer {
            style = style.add_modifier(Modifier::REVERSED);
        }
        for part in wrap_to_width(&format!("[{}]", answer), answer_width) {
            lines.push(Line::from(vec![
                Span::from(ANSWER_INDENT),
                Span::styled(part, style),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines
}

fn draw_questions(f: &mut Frame, area: Rect, session: &QuizSession) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = area.height.saturating_sub(2) as usize;

    let mut text = Text::default();
    let mut focused_start = 0;
    let mut focused_height = 0;
    for i in 0..session.questions.len() {
        let lines = question_lines(session, i, inner_width);
        if i == session.current_question {
            focused_start = text.lines.len();
            focused_height = lines.len();
        }
        text.lines.extend(lines);
    }

    let scroll = scroll_to_show(0, focused_start, focused_height, visible);

    let widget = Paragraph::new(text)
        .scroll((scroll as u16, 0))
        .block(Block::default().borders(Borders::ALL).title("Questions"));
    f.render_widget(widget, area);
}

pub fn status_line(session: &QuizSession) -> Line<'static> {
    match session.phase {
        Phase::Loading => Line::from("Fetching a fresh question set..."),
        Phase::Error => Line::from("Press b to go back to the options"),
        Phase::InProgress => {
            let answered = session.selected_answers.len();
            let total = session.questions.len();
            if all_answered(session) {
                Line::from(Span::styled(
                    format!("All {} answered - press s to submit", total),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("Answered {} / {}", answered, total))
            }
        }
        Phase::Completed => {
            let (score, total) = session.final_score().unwrap_or((0, 0));
            let face = if is_win(score, total) { "😄" } else { "😢" };
            Line::from(Span::styled(
                format!("You scored {}/{} correct answers {}", score, total, face),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        }
    }
}

fn help_line(session: &QuizSession) -> Line<'static> {
    let mut spans = Vec::new();
    match session.phase {
        Phase::InProgress => {
            spans.extend([
                key_span("↑/↓"),
                Span::from(" Question  "),
                key_span("←/→"),
                Span::from(" Answer  "),
                key_span("Enter"),
                Span::from(" Pick  "),
            ]);
            if session.can_submit() {
                spans.extend([key_span("s"), Span::from(" Submit  ")]);
            }
            spans.extend([key_span("b/Esc"), Span::from(" Options  ")]);
        }
        Phase::Completed => {
            spans.extend([
                key_span("↑/↓"),
                Span::from(" Review  "),
                key_span("r"),
                Span::from(" Restart Game  "),
                key_span("b/Esc"),
                Span::from(" Back to Options  "),
            ]);
        }
        Phase::Loading | Phase::Error => {
            spans.extend([key_span("b/Esc"), Span::from(" Back to Options  ")]);
        }
    }
    spans.extend([key_span("Ctrl+C"), Span::from(" Exit")]);
    Line::from(spans)
}
