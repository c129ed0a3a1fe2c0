use std::io::{self, BufRead, Write};

use astrologer::client::api::{ApiError, HttpApi};
use astrologer::client::form::{BirthField, FormError};
use astrologer::client::session::{Outcome, Session};
use astrologer::client::view;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("{0}")]
    Flow(String),
    #[error("stdin read failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "astro", about = "Terminal front end for the AI Astrologer API")]
struct Cli {
    #[arg(long, env = "ASTRO_BASE_URL", default_value = "http://127.0.0.1:8002")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the backend's health endpoint.
    Ping,
    /// Generate a horoscope from birth details.
    Horoscope(BirthArgs),
    /// Generate a horoscope, then ask the AI astrologer a question.
    Ask {
        #[arg(long)]
        question: String,
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Line-oriented session over stdin.
    Interactive,
}

#[derive(Args, Debug)]
struct BirthArgs {
    #[arg(long)]
    name: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// HH:MM
    #[arg(long)]
    time: String,
    #[arg(long)]
    place: String,
}

impl BirthArgs {
    fn fill(self, session: &mut Session) {
        session.form.set(BirthField::Name, self.name);
        session.form.set(BirthField::DateOfBirth, self.date);
        session.form.set(BirthField::TimeOfBirth, self.time);
        session.form.set(BirthField::PlaceOfBirth, self.place);
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let api = HttpApi::new(&cli.base_url)?;

    match cli.command {
        Command::Ping => run_ping(&api).await,
        Command::Horoscope(birth) => {
            let mut session = Session::new();
            birth.fill(&mut session);
            let outcome = session.generate_horoscope(&api).await;
            print!("{}", view::render(&session));
            settle(&session, outcome)
        }
        Command::Ask { question, birth } => {
            let mut session = Session::new();
            birth.fill(&mut session);
            let outcome = session.generate_horoscope(&api).await;
            if outcome == Some(Outcome::Success) {
                session.set_question(question);
                let outcome = session.ask_ai_question(&api).await;
                print!("{}", view::render(&session));
                return settle(&session, outcome);
            }
            print!("{}", view::render(&session));
            settle(&session, outcome)
        }
        Command::Interactive => run_interactive(&api).await,
    }
}

async fn run_ping(api: &HttpApi) -> Result<(), CliError> {
    let health = api.health().await?;
    println!("{}", serde_json::to_string_pretty(&health)?);
    Ok(())
}

/// Map the last flow result to the process exit status.
fn settle(session: &Session, outcome: Option<Outcome>) -> Result<(), CliError> {
    match outcome {
        Some(Outcome::Success) => Ok(()),
        Some(Outcome::Failure) | None => Err(CliError::Flow(
            session.error_message().unwrap_or("request was not sent").to_owned(),
        )),
    }
}

const HELP: &str = "commands: set <field> <value> | generate | ask <question> | show | quit\n\
                    fields: name, dateOfBirth, timeOfBirth, placeOfBirth";

async fn run_interactive(api: &HttpApi) -> Result<(), CliError> {
    let mut session = Session::new();
    let mut last = None;
    println!("{HELP}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let (command, rest) = line.trim_start().split_once(' ').unwrap_or((line.trim(), ""));

        match command {
            "" => {}
            "quit" | "exit" => break,
            "show" => print!("{}", view::render(&session)),
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                match session.form.set_by_name(field, value) {
                    Ok(()) => print!("{}", view::render(&session)),
                    Err(e) => eprintln!("{e}"),
                }
            }
            "generate" => {
                if let Some(outcome) = session.generate_horoscope(api).await {
                    last = Some(outcome);
                } else if session.error().is_some() {
                    last = Some(Outcome::Failure);
                }
                print!("{}", view::render(&session));
            }
            "ask" => {
                session.set_question(rest);
                if let Some(outcome) = session.ask_ai_question(api).await {
                    last = Some(outcome);
                } else if session.error().is_some() {
                    last = Some(Outcome::Failure);
                }
                print!("{}", view::render(&session));
            }
            other => eprintln!("unknown command `{other}`\n{HELP}"),
        }
    }

    match last {
        Some(Outcome::Failure) => settle(&session, last),
        _ => Ok(()),
    }
}
