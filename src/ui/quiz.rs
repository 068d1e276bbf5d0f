use crate::config::Config;
use crate::fitter::{CellFont, fit, wrap_words};
use crate::models::{Feedback, Label};
use crate::session::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// An answer control after fitting: the wrapped label lines at the chosen
/// size, and the column budget the pixel budget buys at that size.
struct OptionControl {
    label: Label,
    lines: Vec<String>,
    inner_cols: u16,
}

impl OptionControl {
    fn fitted(label: Label, option_text: &str, config: &Config) -> Self {
        let text = format!("{}: {}", label, option_text);
        let size = fit(
            &CellFont,
            &text,
            config.max_answer_width_px,
            config.base_font_size,
            config.min_font_size,
        );
        let lines = wrap_words(&CellFont, &text, size, config.max_answer_width_px);
        let inner_cols = (config.max_answer_width_px / CellFont::advance(size))
            .min(u32::from(u16::MAX - 2)) as u16;
        Self {
            label,
            lines,
            inner_cols,
        }
    }

    fn height(&self) -> u16 {
        self.lines.len().max(1) as u16 + 2
    }
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession, config: &Config) {
    let Some(question) = session.current() else {
        return;
    };

    let controls: Vec<OptionControl> = Label::ALL
        .iter()
        .map(|&label| OptionControl::fitted(label, question.option(label), config))
        .collect();
    let options_height: u16 = controls.iter().map(OptionControl::height).sum();
    let layout = calculate_quiz_chunks(f.area(), options_height);

    let progress = format!("Question {} / {}", session.position() + 1, session.total());
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let prompt = Paragraph::new(question.prompt.as_str())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.question_area);

    let constraints: Vec<Constraint> = controls
        .iter()
        .map(|control| Constraint::Length(control.height()))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(layout.options_area);

    for (control, row) in controls.iter().zip(rows.iter()) {
        let width = (control.inner_cols + 2).min(row.width);
        let control_area = Rect {
            x: row.x + (row.width - width) / 2,
            width,
            ..*row
        };
        let body = Paragraph::new(control.lines.join("\n"))
            .style(control_style(session.feedback(), control.label))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(body, control_area);
    }

    let feedback_line = match session.feedback() {
        Some(feedback) if feedback.correct => Line::from(Span::styled(
            "Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Some(feedback) => Line::from(Span::styled(
            format!("Wrong! Correct answer: {}", feedback.answer),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };
    let feedback = Paragraph::new(feedback_line).alignment(Alignment::Center);
    f.render_widget(feedback, layout.feedback_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "a-d",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Answer  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

/// While feedback is showing, the right answer goes green, a wrong
/// submission goes red, and the remaining controls dim out. The same
/// label can be both submitted and right, in which case green wins.
fn control_style(feedback: Option<Feedback>, label: Label) -> Style {
    let Some(feedback) = feedback else {
        return Style::default();
    };
    if label == feedback.answer {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if label == feedback.submitted {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    }
}
