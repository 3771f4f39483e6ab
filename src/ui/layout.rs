use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct OptionsLayout {
    pub title_area: Rect,
    pub high_score_area: Rect,
    pub form_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_options_chunks(area: Rect) -> OptionsLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    OptionsLayout {
        title_area: chunks[0],
        high_score_area: chunks[1],
        form_area: chunks[2],
        help_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_quiz_chunks(area);

        // Margin 1 leaves 98 rows; 9 go to the fixed rows.
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.status_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.body_area.height, 89);
    }

    #[test]
    fn test_options_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_options_chunks(area);

        assert_eq!(layout.title_area.height, 3);
        assert_eq!(layout.high_score_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.form_area.height, 38 - 9);
    }
}
