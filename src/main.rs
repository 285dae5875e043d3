use autoverify::core::batch::DocumentUpload;
use autoverify::domain::model::{AggregateVerdict, VerificationReport};
use autoverify::domain::ports::ConfigProvider;
use autoverify::utils::{logger, validation::Validate};
use autoverify::{BatchInput, CliConfig, NhtsaClient, ScanClient, VerificationEngine};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();
    config.resolve_secrets();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut input = BatchInput::new();
    for vin in &config.vins {
        input.push_vin(vin.clone());
    }
    for path in &config.documents {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        input.push_document(DocumentUpload::new(name, bytes));
    }

    let batch = input.collect();

    // No network call is issued for an all-blank submission.
    if batch.is_empty() {
        println!("Nothing to verify: enter a VIN or upload a driver's license.");
        return Ok(());
    }

    tracing::info!(
        "starting batch: {} VIN(s), {} document(s)",
        batch.vins.len(),
        batch.documents.len()
    );

    let http = reqwest::Client::new();
    let registry = NhtsaClient::new(http.clone(), config.registry_endpoint());
    let verifier = ScanClient::new(
        http,
        config.scan_endpoint(),
        config.api_key(),
        config.profile_id(),
    );

    let engine = VerificationEngine::new(registry, verifier);
    let report = engine.run(batch).await;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

fn render_report(report: &VerificationReport) {
    if !report.vin_results.is_empty() {
        println!("🔍 VIN details:");
        for result in &report.vin_results {
            if result.found {
                let a = &result.attributes;
                println!("  {}:", result.vin);
                println!("    Make:         {}", a.make);
                println!("    Model:        {}", a.model);
                println!("    Model Year:   {}", a.model_year);
                println!("    Trim:         {}", a.trim);
                println!("    Body Class:   {}", a.body_class);
                println!("    Fuel Type:    {}", a.fuel_type);
                println!("    Vehicle Type: {}", a.vehicle_type);
            } else {
                println!("  {}: ❌ invalid VIN or no data found", result.vin);
            }
        }
    }

    if !report.license_results.is_empty() {
        println!("🆔 Driver's license verification:");
        for result in &report.license_results {
            println!("  {} ({}):", result.full_name, result.document_number);
            println!("    Date of birth: {}", result.date_of_birth);
            println!("    Expiry:        {}", result.expiry);
            println!("    Address:       {}", result.address);
            println!("    Decision:      {}", result.decision);
        }

        let warnings = report.warning_rows();
        if !warnings.is_empty() {
            println!("⚠️  Warnings:");
            for (document, warning) in warnings {
                println!(
                    "  🔸 [{}] {} (Confidence: {}, Decision: {})",
                    document, warning.description, warning.confidence, warning.decision
                );
            }
        }
    }

    if !report.failures.is_empty() {
        println!("❌ Failed items:");
        for failure in &report.failures {
            println!("  {}: {}", failure.item, failure.message);
        }
    }

    match report.verdict {
        Some(AggregateVerdict::AllPassed) => println!("✅ License verification PASSED!"),
        Some(AggregateVerdict::SomeNeedReview) => {
            println!("🔍 License requires MANUAL REVIEW.")
        }
        Some(AggregateVerdict::SomeRejected) => {
            println!("❌ License verification was REJECTED.")
        }
        None => {}
    }
}
