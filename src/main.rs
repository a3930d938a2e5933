use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use gate_eval::{display, import, DuplicatePolicy, EvalError, EvalOptions, EvalOrder};

#[derive(Parser)]
#[command(name = "gate-eval")]
#[command(about = "Settle a combinational logic circuit described in json")]
struct Cli {
    /// Circuit description file
    file: PathBuf,

    /// Order gates are settled in
    #[arg(long, value_enum, default_value = "ascending-id")]
    order: Order,

    /// What to do when an id is used twice
    #[arg(long, value_enum, default_value = "first-wins")]
    duplicates: Duplicates,

    /// Print the truth table over every input assignment instead of a single evaluation
    #[arg(long)]
    table: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    AscendingId,
    Topological,
}

#[derive(Clone, Copy, ValueEnum)]
enum Duplicates {
    FirstWins,
    Reject,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = EvalOptions {
        order: match cli.order {
            Order::AscendingId => EvalOrder::AscendingId,
            Order::Topological => EvalOrder::Topological,
        },
        duplicates: match cli.duplicates {
            Duplicates::FirstWins => DuplicatePolicy::FirstWins,
            Duplicates::Reject => DuplicatePolicy::Reject,
        },
    };

    let circuit = import::load(&cli.file)?;

    let rendered = if cli.table {
        circuit.table(&options).map(|rows| display::truth_table(&circuit, &rows))
    } else {
        circuit.evaluate(&options).map(|evaluation| display::report(&evaluation))
    };

    match rendered {
        Ok(rendered) => {
            print!("{rendered}");
            Ok(())
        }
        Err(errors) => fail(&errors),
    }
}

fn fail(errors: &[EvalError]) -> Result<()> {
    for error in errors {
        log::error!("{error}");
    }
    anyhow::bail!("circuit could not be settled ({} error{})", errors.len(), if errors.len() == 1 { "" } else { "s" })
}
