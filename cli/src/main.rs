use std::{io, process::ExitCode};

use anyhow::Error;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use trit_core::{Config, Op, Trit, TruthTable};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Output::Text)]
    output: Output,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply an operator to one or two values
    Eval {
        #[arg(ignore_case = true)]
        op: Op,
        #[arg(allow_hyphen_values = true)]
        operands: Vec<Trit>,
    },
    /// Print the truth table of an operator
    Table {
        #[arg(ignore_case = true)]
        op: Op,
    },
    /// True if every value is True
    All(Reduction),
    /// True if some value is True
    Any(Reduction),
    /// True if no value is True
    None(Reduction),
    /// True if no value is Unknown
    Known(Reduction),
    /// Draw random values
    Random {
        /// Percentage chance of Unknown; repeated weights are summed
        #[arg(short, long)]
        weight: Vec<u8>,
        /// Number of values to draw
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
}

#[derive(clap::Args, Debug)]
struct Reduction {
    /// Number of parallel tasks
    #[arg(long)]
    tasks: Option<usize>,
    /// Minimum number of values per task before fanning out
    #[arg(long, value_name = "N")]
    min_load: Option<usize>,
    #[arg(allow_hyphen_values = true)]
    values: Vec<Trit>,
}

impl Reduction {
    fn config(&self) -> Config {
        let mut config = Config::global();
        if let Some(tasks) = self.tasks {
            config = config.with_tasks(tasks);
        }
        if let Some(min_load) = self.min_load {
            config = config.with_min_load(min_load);
        }
        debug!(tasks = config.tasks(), min_load = config.min_load(), "reduction config");
        config
    }
}

#[derive(Serialize)]
struct Row {
    inputs: Vec<Trit>,
    output: Trit,
}

fn emit<T: Serialize + ?Sized>(output: Output, value: &T, text: &str) -> Result<(), Error> {
    match output {
        Output::Text => println!("{text}"),
        Output::Json => println!("{}", serde_json::to_string_pretty(value)?),
        Output::Yaml => serde_norway::to_writer(io::stdout().lock(), value)?,
    }
    Ok(())
}

fn eval(output: Output, op: Op, operands: &[Trit]) -> Result<(), Error> {
    let result = match (op, operands) {
        (Op::Unary(op), &[a]) => op.apply(a),
        (Op::Binary(op), &[a, b]) => op.apply(a, b),
        _ => {
            return Err(Error::msg(format!(
                "{op} takes {} operand(s), got {}",
                op.arity(),
                operands.len()
            )));
        }
    };
    emit(output, &result, &result.to_string())
}

fn table(output: Output, op: Op) -> Result<(), Error> {
    let table = TruthTable::new(op);
    let rows: Vec<Row> = table
        .rows()
        .into_iter()
        .map(|(inputs, output)| Row { inputs, output })
        .collect();
    emit(output, &rows, &table.to_string())
}

fn random(output: Output, weights: &[u8], count: usize) -> Result<(), Error> {
    let values: Vec<Trit> = (0..count).map(|_| Trit::random(weights)).collect();
    let text = values
        .iter()
        .map(Trit::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    emit(output, &values, &text)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode, Error> {
    init_tracing();
    let args = Args::parse();
    let output = args.output;

    match args.command {
        Command::Eval { op, operands } => eval(output, op, &operands)?,
        Command::Table { op } => table(output, op)?,
        Command::All(r) => {
            let result = r.config().all(&r.values);
            emit(output, &result, &result.to_string())?;
        }
        Command::Any(r) => {
            let result = r.config().any(&r.values);
            emit(output, &result, &result.to_string())?;
        }
        Command::None(r) => {
            let result = r.config().none(&r.values);
            emit(output, &result, &result.to_string())?;
        }
        Command::Known(r) => {
            let result = r.config().known(&r.values);
            emit(output, &result, &result.to_string())?;
        }
        Command::Random { weight, count } => random(output, &weight, count)?,
    }

    Ok(ExitCode::SUCCESS)
}
