use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use geoquiz::{start_quiz, Catalog, Continent, QuizMode, QuizScope};

const USAGE: &str = "\
usage: geoquiz <mode> [scope]

modes:  capital-to-country | country-to-capital | flag-to-country | map-to-country
scope:  all (default), a continent (e.g. Europa, Oseania),
        or a comma-separated list of country codes (e.g. NO,SE,DK)";

/// Case-forgiving continent lookup; the library parser is tag-exact.
fn parse_continent(arg: &str) -> Option<Continent> {
    let wanted = arg.to_lowercase();
    Continent::ALL
        .into_iter()
        .find(|c| c.to_string().to_lowercase() == wanted)
}

fn parse_scope(arg: &str) -> QuizScope {
    if arg.eq_ignore_ascii_case("all") {
        return QuizScope::All;
    }
    if let Some(continent) = parse_continent(arg) {
        return QuizScope::Continent(continent);
    }
    QuizScope::Practice(
        arg.split(',')
            .map(|code| code.trim().to_uppercase())
            .filter(|code| !code.is_empty())
            .collect(),
    )
}

fn read_line(stdin: &io::Stdin) -> Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Keeps asking until the user types a number in `1..=max`. `None` on EOF.
fn read_choice(stdin: &io::Stdin, max: usize) -> Result<Option<usize>> {
    loop {
        let Some(line) = read_line(stdin)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
            _ => println!("Svar med et tall fra 1 til {max}."),
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut args = std::env::args().skip(1);
    let mode_tag = args.next().with_context(|| USAGE.to_owned())?;
    let mode = QuizMode::from_tag(&mode_tag)
        .with_context(|| format!("unknown mode {mode_tag:?}\n\n{USAGE}"))?;
    let scope = args.next().as_deref().map_or(QuizScope::All, parse_scope);

    let catalog = Catalog::builtin();
    let mut session = start_quiz(mode, &scope, catalog);
    if session.total_questions() == 0 {
        bail!("the chosen scope has no countries to quiz on");
    }
    log::info!("quiz started: {} questions", session.total_questions());

    let stdin = io::stdin();
    loop {
        while !session.is_complete() {
            let Some(question) = session.current_question() else {
                break;
            };
            println!();
            println!(
                "Spørsmål {}/{}: {}",
                session.question_number(),
                session.total_questions(),
                question.prompt
            );
            println!("  {}", question.display_value);
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}) {option}", i + 1);
            }

            let options = question.options.clone();
            let Some(choice) = read_choice(&stdin, options.len())? else {
                return Ok(());
            };
            session.answer(&options[choice - 1]);

            match session.is_correct() {
                Some(true) => println!("Riktig!"),
                _ => {
                    let correct = session
                        .current_question()
                        .map(|q| q.correct_answer.as_str())
                        .unwrap_or_default();
                    println!("Feil! Riktig svar: {correct}");
                }
            }
            session.next_question();
        }

        println!();
        println!(
            "Ferdig! Du fikk {} av {} riktige.",
            session.score(),
            session.total_questions()
        );
        println!("Spille igjen? (j/n)");
        match read_line(&stdin)? {
            Some(line) if line.eq_ignore_ascii_case("j") => {
                session.restart(&mut rand::thread_rng());
            }
            _ => return Ok(()),
        }
    }
}
