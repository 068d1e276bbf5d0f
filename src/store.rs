use crate::logger;
use crate::models::{Label, Question};
use std::fs;
use std::path::Path;

/// Read the question source. Each line is one record:
/// `prompt,optionA,optionB,optionC,optionD,correctLabel`.
/// Malformed records are dropped, and an unreadable file yields an empty
/// set (the failure goes to the debug log), so the caller has a single
/// "no questions" condition to check before starting the quiz.
pub fn load_questions(path: &Path) -> Vec<Question> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            logger::log(&format!("could not read {}: {}", path.display(), err));
            return Vec::new();
        }
    };
    let mut questions = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match question_from_record(parse_record(line)) {
            Some(question) => questions.push(question),
            None => logger::log(&format!("dropped malformed record: {}", line)),
        }
    }

    logger::log(&format!(
        "loaded {} questions from {}",
        questions.len(),
        path.display()
    ));
    questions
}

fn question_from_record(fields: Vec<String>) -> Option<Question> {
    let [prompt, a, b, c, d, label]: [String; 6] = fields.try_into().ok()?;
    let correct = Label::parse(&label)?;
    Some(Question::new(prompt, [a, b, c, d], correct))
}

/// Split one CSV line into fields. Fields may be wrapped in double quotes
/// to protect embedded commas; a doubled quote inside a quoted field is a
/// literal quote.
pub fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_record_simple() {
        let fields = parse_record("What is 2+2?,Four,Five,Six,Seven,A");
        assert_eq!(fields, ["What is 2+2?", "Four", "Five", "Six", "Seven", "A"]);
    }

    #[test]
    fn test_parse_record_with_quotes() {
        let fields = parse_record("\"What is 2+2?\",\"Four\",Five,Six,Seven,A");
        assert_eq!(fields[0], "What is 2+2?");
        assert_eq!(fields[1], "Four");
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_parse_record_with_commas_in_field() {
        let fields = parse_record("\"In a CSV, what does a comma do?\",\"It separates fields, mostly\",B,C,D,b");
        assert_eq!(fields[0], "In a CSV, what does a comma do?");
        assert_eq!(fields[1], "It separates fields, mostly");
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_parse_record_with_escaped_quotes() {
        let fields = parse_record("\"What is \"\"quoted\"\"?\",\"An answer with \"\"quotes\"\"\"");
        assert_eq!(fields[0], "What is \"quoted\"?");
        assert_eq!(fields[1], "An answer with \"quotes\"");
    }

    #[test]
    fn test_parse_record_empty_fields() {
        let fields = parse_record(",,,,,");
        assert_eq!(fields, ["", "", "", "", "", ""]);
    }

    #[test]
    fn test_question_from_record_well_formed() {
        let fields = parse_record("Capital of France?,Paris,Rome,Berlin,Madrid,A");
        let question = question_from_record(fields).unwrap();
        assert_eq!(question.prompt, "Capital of France?");
        assert_eq!(question.option(Label::A), "Paris");
        assert_eq!(question.option(Label::D), "Madrid");
        assert_eq!(question.correct, Label::A);
    }

    #[test]
    fn test_question_from_record_normalizes_label() {
        let fields = parse_record("Q?,w,x,y,z,\"b \"");
        let question = question_from_record(fields).unwrap();
        assert_eq!(question.correct, Label::B);
    }

    #[test]
    fn test_question_from_record_wrong_field_count() {
        assert!(question_from_record(parse_record("Q?,w,x,y,A")).is_none());
        assert!(question_from_record(parse_record("Q?,w,x,y,z,extra,A")).is_none());
    }

    #[test]
    fn test_question_from_record_bad_label() {
        assert!(question_from_record(parse_record("Q?,w,x,y,z,E")).is_none());
        assert!(question_from_record(parse_record("Q?,w,x,y,z,AB")).is_none());
        assert!(question_from_record(parse_record("Q?,w,x,y,z,")).is_none());
    }

    #[test]
    fn test_load_questions_skips_malformed_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Q1?,a1,b1,c1,d1,A").unwrap();
        writeln!(file, "Q2?,a2,b2,c2,D").unwrap();
        writeln!(file, "Q3?,a3,b3,c3,d3,c").unwrap();
        writeln!(file, "Q4?,a4,b4,c4,d4,B").unwrap();
        file.flush().unwrap();

        let questions = load_questions(file.path());
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].prompt, "Q1?");
        assert_eq!(questions[1].correct, Label::C);
        assert_eq!(questions[2].correct, Label::B);
    }

    #[test]
    fn test_load_questions_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Q1?,a,b,c,d,A").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Q2?,a,b,c,d,B").unwrap();
        file.flush().unwrap();

        let questions = load_questions(file.path());
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_load_questions_empty_option_text_is_kept() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Q1?,,b,c,d,A").unwrap();
        file.flush().unwrap();

        let questions = load_questions(file.path());
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].option(Label::A), "");
        assert_eq!(questions[0].option(Label::B), "b");
    }

    #[test]
    fn test_load_questions_missing_file_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let questions = load_questions(&dir.path().join("nope.csv"));
        assert!(questions.is_empty());
    }

    #[test]
    fn test_load_questions_empty_file_yields_empty_set() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let questions = load_questions(file.path());
        assert!(questions.is_empty());
    }
}
