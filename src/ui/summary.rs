use crate::session::QuizSession;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new("Quiz Complete")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut summary_text = Text::default();
    if let Some(report) = session.report() {
        summary_text.push_line(Line::from(Span::styled(
            format!(
                "You answered {} of {} questions correctly.",
                report.score, report.total
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        summary_text.push_line(Line::from(""));
    }

    for (i, (question, result)) in session
        .questions()
        .iter()
        .zip(session.results())
        .enumerate()
    {
        let mark = if result.correct { "[✓]" } else { "[ ]" };
        summary_text.push_line(Line::from(format!(
            "{} {}. {}",
            mark,
            i + 1,
            truncate_string(&question.prompt, 60)
        )));
        if !result.correct {
            summary_text.push_line(Line::from(format!(
                "    answered {}, correct {}",
                result.submitted, result.answer
            )));
        }
    }

    let summary = Paragraph::new(summary_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit  "),
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
