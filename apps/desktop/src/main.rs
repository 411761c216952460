use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use client_core::{load_settings, CalculatorClient, Outcome};
use shared::domain::Operation;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OperationArg {
    CombinedWith,
    Either,
}

impl From<OperationArg> for Operation {
    fn from(value: OperationArg) -> Self {
        match value {
            OperationArg::CombinedWith => Operation::CombinedWith,
            OperationArg::Either => Operation::Either,
        }
    }
}

/// Submit one probability calculation and print the result.
#[derive(Parser, Debug)]
struct Args {
    /// Probability A, a decimal in [0, 1].
    #[arg(long, short = 'a', default_value = "", allow_hyphen_values = true)]
    probability_a: String,
    /// Probability B, a decimal in [0, 1].
    #[arg(long, short = 'b', default_value = "", allow_hyphen_values = true)]
    probability_b: String,
    #[arg(long, value_enum, default_value_t = OperationArg::CombinedWith)]
    operation: OperationArg,
    /// Overrides CALCULATOR_API_URL and calculator.toml.
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .with_api_url_override(args.api_url.as_deref())
        .context("invalid --api-url")?;
    let client = CalculatorClient::from_settings(&settings).context("failed to build HTTP client")?;

    let mut form = client.new_form();
    form.set_probability_a(args.probability_a);
    form.set_probability_b(args.probability_b);
    form.select_operation(args.operation.into());

    match client.submit(&mut form).await {
        Outcome::Success(summary) => {
            println!("{}", summary.formula());
            println!("{}", summary.formatted_result());
            Ok(())
        }
        Outcome::Failure(err) => bail!("{err}"),
        other => bail!("calculation did not finish (state: {other:?})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_operation_in_kebab_case() {
        let args = Args::try_parse_from([
            "desktop",
            "-a",
            "0.5",
            "-b",
            "0.25",
            "--operation",
            "either",
        ])
        .expect("args");
        assert_eq!(Operation::from(args.operation), Operation::Either);
        assert_eq!(args.probability_a, "0.5");
        assert_eq!(args.probability_b, "0.25");
    }

    #[test]
    fn defaults_to_combined_with_and_empty_inputs() {
        let args = Args::try_parse_from(["desktop", "--operation", "combined-with"]).expect("args");
        assert_eq!(Operation::from(args.operation), Operation::CombinedWith);
        assert!(args.probability_a.is_empty());
        assert!(args.api_url.is_none());
    }

    #[test]
    fn accepts_negative_values_for_validation_downstream() {
        let args = Args::try_parse_from(["desktop", "-a", "-0.5", "-b", "0.1"]).expect("args");
        assert_eq!(args.probability_a, "-0.5");
    }
}
