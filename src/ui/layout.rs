use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub help_area: Rect,
}

/// `options_height` is computed by the quiz screen from the fitted option
/// controls, so the stack of controls gets exactly the rows it needs.
pub fn calculate_quiz_chunks(area: Rect, options_height: u16) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(options_height),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        options_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        help_area: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_quiz_chunks(area, 20);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.options_area.height, 20);
        assert_eq!(layout.feedback_area.height, 1);
        assert_eq!(layout.help_area.height, 3);
        // question takes whatever the fixed chunks leave: 98 - 3 - 20 - 1 - 3
        assert_eq!(layout.question_area.height, 71);
    }

    #[test]
    fn test_quiz_layout_question_area_never_collapses() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = calculate_quiz_chunks(area, 16);
        assert!(layout.question_area.height >= 1);
    }

    #[test]
    fn test_summary_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_summary_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.content_area.height, 92);
    }
}
