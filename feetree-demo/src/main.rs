use feetree::{Fee, FeeLedger, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut ledger = FeeLedger::new();
    for fee in [
        Fee::new(1, 101, 500.0),
        Fee::new(2, 102, 250.0),
        Fee::new(3, 103, 400.0),
    ] {
        ledger.record(fee)?;
    }

    // One line per fee, `id student_id amount`, ascending by id.
    for fee in ledger.fees() {
        println!("{fee}");
    }

    ledger.update_payment(2, 250.0)?;
    ledger.update_payment(3, 150.0)?;

    println!();
    println!("=== FEE CLEARANCE REPORT ===");
    for entry in ledger.clearance_report() {
        println!("{entry}");
    }

    if let Some(status) = ledger.status(2) {
        tracing::info!(id = 2, ?status, "fee status");
    }

    let debugger = ledger.debugger();
    debugger.validate()?;
    tracing::info!(
        fees = ledger.len(),
        height = debugger.height(),
        rotations = debugger.rotations().total(),
        "fee ledger ready"
    );
    tracing::debug!("index layout:\n{:?}", debugger);
    Ok(())
}
