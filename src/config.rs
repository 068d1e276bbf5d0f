use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_SOURCE: &str = "questions.csv";

pub const USAGE: &str = "usage: choice-quiz [QUESTIONS.csv] [options]

options:
  --delay-ms <n>           feedback display time before auto-advance (default 1500)
  --max-answer-width <px>  pixel budget for answer controls (default 500)
  --seed <n>               fixed shuffle seed for a reproducible run
  -h, --help               show this help";

/// Runtime knobs. Everything has a default; the CLI only overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: PathBuf,
    pub max_answer_width_px: u32,
    pub base_font_size: u16,
    pub min_font_size: u16,
    pub feedback_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            max_answer_width_px: 500,
            base_font_size: 16,
            min_font_size: 10,
            feedback_delay_ms: 1500,
            seed: None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    InvalidValue { flag: &'static str, raw: String },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::InvalidValue { flag, raw } => {
                write!(f, "invalid {flag} value: {raw}")
            }
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl Config {
    /// Parse program arguments (without the binary name). A bare argument
    /// is the question source path; the last one wins.
    pub fn from_args<I>(mut args: I) -> Result<Config, ArgsError>
    where
        I: Iterator<Item = String>,
    {
        let mut config = Config::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--delay-ms" => {
                    config.feedback_delay_ms = parse_value(&mut args, "--delay-ms")?;
                }
                "--max-answer-width" => {
                    config.max_answer_width_px = parse_value(&mut args, "--max-answer-width")?;
                }
                "--seed" => {
                    config.seed = Some(parse_value(&mut args, "--seed")?);
                }
                flag if flag.starts_with('-') => {
                    return Err(ArgsError::UnknownArg(arg));
                }
                _ => {
                    config.source = PathBuf::from(arg);
                }
            }
        }
        Ok(config)
    }
}

fn parse_value<T, I>(args: &mut I, flag: &'static str) -> Result<T, ArgsError>
where
    T: FromStr,
    I: Iterator<Item = String>,
{
    let raw = args.next().ok_or(ArgsError::MissingValue { flag })?;
    raw.parse()
        .map_err(|_| ArgsError::InvalidValue { flag, raw })
}
