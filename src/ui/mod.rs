pub mod confetti;
pub mod layout;
mod options;
mod quiz;

pub use confetti::draw_confetti;
pub use layout::{calculate_options_chunks, calculate_quiz_chunks};
pub use options::draw_options;
pub use quiz::{answer_mark, draw_quiz, status_line, AnswerMark};

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
