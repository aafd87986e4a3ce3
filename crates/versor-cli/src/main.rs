use clap::Parser;

use versor_core::{meaningful_line_count, powers, Phrase, Quaternion, VersorError};

#[derive(Parser)]
#[command(
    name = "versor",
    about = "Versor toolkit CLI",
    long_about = "Quaternion arithmetic with canonical rendering, phrase chains,\nand small sequence utilities.",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Combine quaternions and print the canonical rendering
    Quat {
        /// Left operand as comma-separated coefficients, e.g. "1,2,0,-1"
        lhs: String,
        /// Operation: add, mul, conj, norm
        #[arg(long, default_value = "mul")]
        op: String,
        /// Right operand (required for add and mul)
        #[arg(long)]
        rhs: Option<String>,
    },
    /// Chain words and print the joined phrase
    Say {
        /// Words to accumulate, in order
        words: Vec<String>,
    },
    /// Print successive powers of a base up to a limit
    Powers {
        /// Base of the sequence
        #[arg(long)]
        base: u64,
        /// Inclusive upper limit
        #[arg(long)]
        limit: u64,
    },
    /// Count meaningful lines in a file (skips blanks and # comments)
    CountLines {
        /// Path to the file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quat { lhs, op, rhs } => cmd_quat(&lhs, &op, rhs.as_deref()),
        Commands::Say { words } => cmd_say(&words),
        Commands::Powers { base, limit } => cmd_powers(base, limit),
        Commands::CountLines { path } => cmd_count_lines(&path),
    };

    if let Err(msg) = result {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}

fn cmd_quat(lhs: &str, op: &str, rhs: Option<&str>) -> Result<(), String> {
    let lhs: Quaternion = lhs.parse().map_err(|e: VersorError| e.to_string())?;

    let parse_rhs = |rhs: Option<&str>| -> Result<Quaternion, String> {
        let raw = rhs.ok_or_else(|| format!("operation '{}' needs --rhs", op))?;
        raw.parse().map_err(|e: VersorError| e.to_string())
    };

    match op {
        "add" => println!("{}", lhs + parse_rhs(rhs)?),
        "mul" => println!("{}", lhs * parse_rhs(rhs)?),
        "conj" => println!("{}", lhs.conjugate()),
        "norm" => println!("{}", lhs.norm()),
        other => {
            return Err(format!(
                "unknown operation '{}' (expected add, mul, conj, norm)",
                other
            ));
        }
    }
    Ok(())
}

fn cmd_say(words: &[String]) -> Result<(), String> {
    let mut chain = Phrase::new();
    for word in words {
        chain = chain.and(word.as_str());
    }
    println!("{}", chain.phrase());
    Ok(())
}

fn cmd_powers(base: u64, limit: u64) -> Result<(), String> {
    let sequence: Vec<String> = powers(base, limit).map(|v| v.to_string()).collect();
    println!("{}", sequence.join(" "));
    Ok(())
}

fn cmd_count_lines(path: &str) -> Result<(), String> {
    let count = meaningful_line_count(path).map_err(|e| e.to_string())?;
    println!("{}", count);
    Ok(())
}
