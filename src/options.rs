use crate::models::{
    Difficulty, QuestionType, QuizParameters, CATEGORIES, DEFAULT_QUESTIONS, MAX_QUESTIONS,
    MIN_QUESTIONS,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("Number of questions must be a whole number between 2 and 50, got {0:?}")]
    InvalidCount(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsField {
    Count,
    Category,
    Difficulty,
    Type,
}

impl OptionsField {
    const ORDER: [OptionsField; 4] = [
        OptionsField::Count,
        OptionsField::Category,
        OptionsField::Difficulty,
        OptionsField::Type,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1).min(Self::ORDER.len() - 1)]
    }

    fn previous(&self) -> Self {
        Self::ORDER[self.position().saturating_sub(1)]
    }
}

#[derive(Debug, PartialEq)]
pub enum OptionsAction {
    None,
    Start(QuizParameters),
    Quit,
}

#[derive(Debug)]
pub struct OptionsForm {
    pub count_input: String,
    pub category_index: usize,
    pub difficulty_index: usize,
    pub type_index: usize,
    pub focused: OptionsField,
    pub high_score: u32,
    pub error: Option<OptionsError>,
}

impl OptionsForm {
    pub fn new(high_score: u32) -> Self {
        Self {
            count_input: String::new(),
            category_index: 0,
            difficulty_index: 0,
            type_index: 0,
            focused: OptionsField::Count,
            high_score,
            error: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::ALL[self.difficulty_index]
    }

    pub fn question_type(&self) -> QuestionType {
        QuestionType::ALL[self.type_index]
    }

    /// Count as the label shows it: the typed value, or the default.
    pub fn count_label(&self) -> String {
        if self.count_input.trim().is_empty() {
            DEFAULT_QUESTIONS.to_string()
        } else {
            self.count_input.trim().to_string()
        }
    }

    pub fn submit(&self) -> Result<QuizParameters, OptionsError> {
        Ok(QuizParameters {
            count: normalize_count(&self.count_input)?,
            category: CATEGORIES[self.category_index].0,
            difficulty: self.difficulty(),
            question_type: self.question_type(),
        })
    }

    fn step_count(&mut self, delta: i16) {
        let current = normalize_count(&self.count_input).unwrap_or(DEFAULT_QUESTIONS) as i16;
        let stepped = (current + delta).clamp(MIN_QUESTIONS as i16, MAX_QUESTIONS as i16);
        self.count_input = stepped.to_string();
    }

    fn cycle(&mut self, forward: bool) {
        fn step(index: &mut usize, len: usize, forward: bool) {
            *index = if forward {
                (*index + 1) % len
            } else {
                (*index + len - 1) % len
            };
        }

        match self.focused {
            OptionsField::Count => self.step_count(if forward { 1 } else { -1 }),
            OptionsField::Category => step(&mut self.category_index, CATEGORIES.len(), forward),
            OptionsField::Difficulty => {
                step(&mut self.difficulty_index, Difficulty::ALL.len(), forward)
            }
            OptionsField::Type => step(&mut self.type_index, QuestionType::ALL.len(), forward),
        }
    }
}

/// Blank means the default of 5; anything else must parse and is clamped
/// into the allowed range.
pub fn normalize_count(raw: &str) -> Result<u8, OptionsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_QUESTIONS);
    }

    let value: u64 = trimmed
        .parse()
        .map_err(|_| OptionsError::InvalidCount(trimmed.to_string()))?;

    Ok(value.clamp(MIN_QUESTIONS as u64, MAX_QUESTIONS as u64) as u8)
}

pub fn handle_options_input(form: &mut OptionsForm, key: KeyEvent) -> OptionsAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return OptionsAction::Quit;
    }

    match key.code {
        KeyCode::Esc => return OptionsAction::Quit,
        KeyCode::Up => form.focused = form.focused.previous(),
        KeyCode::Down | KeyCode::Tab => form.focused = form.focused.next(),
        KeyCode::Left => form.cycle(false),
        KeyCode::Right => form.cycle(true),
        KeyCode::Backspace if form.focused == OptionsField::Count => {
            form.count_input.pop();
        }
        KeyCode::Char(c) if form.focused == OptionsField::Count && c.is_ascii_digit() => {
            if form.count_input.len() < 2 {
                form.count_input.push(c);
            }
        }
        KeyCode::Enter => match form.submit() {
            Ok(params) => {
                form.error = None;
                return OptionsAction::Start(params);
            }
            Err(e) => form.error = Some(e),
        },
        _ => {}
    }

    OptionsAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn press(form: &mut OptionsForm, code: KeyCode) -> OptionsAction {
        handle_options_input(form, KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_normalize_blank_defaults_to_five() {
        assert_eq!(normalize_count(""), Ok(5));
        assert_eq!(normalize_count("   "), Ok(5));
        assert_eq!(normalize_count("\t"), Ok(5));
    }

    #[test]
    fn test_normalize_clamps_to_range() {
        assert_eq!(normalize_count("0"), Ok(2));
        assert_eq!(normalize_count("1"), Ok(2));
        assert_eq!(normalize_count(" 12 "), Ok(12));
        assert_eq!(normalize_count("50"), Ok(50));
        assert_eq!(normalize_count("99"), Ok(50));
        assert_eq!(normalize_count("99999999999999"), Ok(50));
    }

    #[test]
    fn test_normalize_rejects_non_numeric() {
        assert!(matches!(
            normalize_count("ten"),
            Err(OptionsError::InvalidCount(_))
        ));
        assert!(normalize_count("-3").is_err());
    }

    #[test]
    fn test_default_submit() {
        let form = OptionsForm::new(0);
        assert_eq!(form.submit().unwrap(), QuizParameters::default());
    }

    #[test]
    fn test_submit_count_always_in_range() {
        for input in ["", "0", "2", "7", "50", "51", "   "] {
            let mut form = OptionsForm::new(0);
            form.count_input = input.to_string();
            let count = form.submit().unwrap().count;
            assert!((MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count), "{input}");
        }
    }

    #[test]
    fn test_enter_starts_with_normalized_count() {
        let mut form = OptionsForm::new(0);
        let action = press(&mut form, KeyCode::Enter);
        assert_eq!(action, OptionsAction::Start(QuizParameters::default()));
        assert!(form.count_input.is_empty());
        assert_eq!(form.count_label(), "5");
    }

    #[test]
    fn test_enter_keeps_typed_count_as_entered() {
        let mut form = OptionsForm::new(0);
        press(&mut form, KeyCode::Char('9'));
        press(&mut form, KeyCode::Char('9'));
        let action = press(&mut form, KeyCode::Enter);

        let OptionsAction::Start(params) = action else {
            panic!("expected a start action, got {action:?}");
        };
        assert_eq!(params.count, MAX_QUESTIONS);
        assert_eq!(form.count_input, "99");
    }

    #[test]
    fn test_typing_count() {
        let mut form = OptionsForm::new(0);
        press(&mut form, KeyCode::Char('1'));
        press(&mut form, KeyCode::Char('x'));
        press(&mut form, KeyCode::Char('2'));
        press(&mut form, KeyCode::Char('3'));
        assert_eq!(form.count_input, "12");

        press(&mut form, KeyCode::Backspace);
        assert_eq!(form.count_input, "1");

        match press(&mut form, KeyCode::Enter) {
            OptionsAction::Start(params) => assert_eq!(params.count, 2),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_arrows_step_count_within_bounds() {
        let mut form = OptionsForm::new(0);
        press(&mut form, KeyCode::Right);
        assert_eq!(form.count_input, "6");

        for _ in 0..10 {
            press(&mut form, KeyCode::Left);
        }
        assert_eq!(form.count_input, "2");

        form.count_input = "49".to_string();
        press(&mut form, KeyCode::Right);
        press(&mut form, KeyCode::Right);
        assert_eq!(form.count_input, "50");
    }

    #[test]
    fn test_field_navigation_and_cycling() {
        let mut form = OptionsForm::new(0);
        press(&mut form, KeyCode::Down);
        assert_eq!(form.focused, OptionsField::Category);
        press(&mut form, KeyCode::Left);
        assert_eq!(form.category_index, CATEGORIES.len() - 1);
        press(&mut form, KeyCode::Right);
        press(&mut form, KeyCode::Right);
        assert_eq!(form.category_index, 1);

        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Right);
        assert_eq!(form.difficulty(), Difficulty::Easy);

        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Right);
        assert_eq!(form.question_type(), QuestionType::Multiple);

        press(&mut form, KeyCode::Down);
        assert_eq!(form.focused, OptionsField::Type);

        let params = form.submit().unwrap();
        assert_eq!(params.category, Category::Id(9));
        assert_eq!(params.difficulty, Difficulty::Easy);
        assert_eq!(params.question_type, QuestionType::Multiple);
    }

    #[test]
    fn test_digits_ignored_outside_count_field() {
        let mut form = OptionsForm::new(0);
        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Char('7'));
        assert!(form.count_input.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut form = OptionsForm::new(0);
        assert_eq!(press(&mut form, KeyCode::Esc), OptionsAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_options_input(&mut form, ctrl_c), OptionsAction::Quit);
    }

    #[test]
    fn test_count_label() {
        let mut form = OptionsForm::new(0);
        assert_eq!(form.count_label(), "5");
        form.count_input = "17".to_string();
        assert_eq!(form.count_label(), "17");
    }
}
