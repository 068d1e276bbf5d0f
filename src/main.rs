use choice_quiz::config::{Config, USAGE};
use choice_quiz::logger;
use choice_quiz::models::Phase;
use choice_quiz::session::{InputOutcome, QuizSession, handle_quiz_input};
use choice_quiz::store::load_questions;
use choice_quiz::ui::{draw_quiz, draw_summary};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::env;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{USAGE}");
        return Ok(());
    }
    let config = match Config::from_args(args.into_iter()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    logger::init();

    let questions = load_questions(&config.source);

    let session = match config.seed {
        Some(seed) => QuizSession::new(questions, &mut StdRng::seed_from_u64(seed)),
        None => QuizSession::new(questions, &mut rand::thread_rng()),
    };
    let Some(mut session) = session else {
        eprintln!(
            "No questions found in {}. Check the CSV file.",
            config.source.display()
        );
        std::process::exit(1);
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut QuizSession,
    config: &Config,
) -> io::Result<()> {
    // Deadline for the pending auto-advance while feedback is on screen.
    // Dropping it (on quit) cancels the transition; there is no way for it
    // to fire against a torn-down session.
    let mut pending_advance: Option<Instant> = None;

    loop {
        terminal.draw(|f| match session.phase() {
            Phase::Finished => draw_summary(f, session),
            _ => draw_quiz(f, session, config),
        })?;

        let timeout = match pending_advance {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => Duration::from_millis(250),
        };

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            match session.phase() {
                Phase::Finished => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                },
                _ => match handle_quiz_input(session, key) {
                    InputOutcome::Submitted => {
                        pending_advance = Some(
                            Instant::now() + Duration::from_millis(config.feedback_delay_ms),
                        );
                    }
                    InputOutcome::QuitRequested => return Ok(()),
                    InputOutcome::Ignored => {}
                },
            }
        }

        if let Some(deadline) = pending_advance
            && Instant::now() >= deadline
        {
            pending_advance = None;
            session.advance();
        }
    }
}
