pub mod config;
pub mod fitter;
pub mod logger;
pub mod models;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use config::{Config, USAGE};
pub use fitter::{CellFont, FontMetrics, fit, wrap_words, wrapped_width};
pub use models::{Feedback, FinalReport, Label, Phase, Question};
pub use session::{InputOutcome, QuizSession, handle_quiz_input};
pub use store::{load_questions, parse_record};
pub use ui::{draw_quiz, draw_summary};
pub use utils::truncate_string;
