use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use payment_gateway::application::processor::PaymentProcessor;
use payment_gateway::application::registry::GatewayRegistry;
use payment_gateway::domain::amount::Amount;
use payment_gateway::logging::init_logging;
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// Amount to charge, e.g. 100.0
    #[arg(required_unless_present = "list_gateways")]
    amount: Option<String>,

    /// Gateway key to process the payment with
    #[arg(long, default_value = "basic")]
    gateway: String,

    /// Print the receipt as JSON
    #[arg(long)]
    json: bool,

    /// Print the available gateway keys and exit
    #[arg(long)]
    list_gateways: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let registry = GatewayRegistry::with_defaults();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_gateways {
        for key in registry.keys() {
            writeln!(out, "{key}").into_diagnostic()?;
        }
        return Ok(());
    }

    let amount: Amount = cli
        .amount
        .as_deref()
        .ok_or_else(|| miette!("an amount is required"))?
        .parse()
        .into_diagnostic()?;

    let gateway = registry.get(&cli.gateway).into_diagnostic()?;
    let processor = PaymentProcessor::new(gateway);
    let receipt = processor.process_payment(amount).into_diagnostic()?;

    if cli.json {
        serde_json::to_writer(&mut out, &receipt).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
    } else {
        writeln!(out, "{receipt}").into_diagnostic()?;
    }

    Ok(())
}
