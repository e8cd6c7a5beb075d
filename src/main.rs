use clap::Parser;
use rupiah_fmt::adapters::memory::{MemoryDocument, MemoryField};
use rupiah_fmt::config::cli::Command;
use rupiah_fmt::core::{binder, format, guard};
use rupiah_fmt::domain::model::{RawAmount, WithdrawalDecision};
use rupiah_fmt::utils::logger;
use rupiah_fmt::utils::validation::{validate_path, Validate};
use rupiah_fmt::{CliConfig, Document, PageConfig, TextField};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match &config.command {
        Command::Format { amount } => {
            println!(
                "{}",
                format::apply_prefix(&format::format_grouped(RawAmount(*amount)))
            );
        }
        Command::Extract { text } => {
            println!("{}", format::extract_raw_amount(text));
        }
        Command::Render { page, json } => {
            render_page(&config, page, *json)?;
        }
        Command::Simulate { keys } => {
            simulate_typing(&config, keys);
        }
        Command::Guard { saldo } => match guard::check_withdrawal(saldo.as_deref()) {
            WithdrawalDecision::Allow(amount) => {
                println!(
                    "✅ penarikan diizinkan (saldo {})",
                    format::apply_prefix(&format::format_grouped(amount))
                );
            }
            WithdrawalDecision::Block(warning) => {
                println!("⚠️ {}: {}", warning.title, warning.message);
            }
        },
    }

    Ok(())
}

fn render_page(config: &CliConfig, page_path: &str, json: bool) -> rupiah_fmt::Result<()> {
    validate_path("page", page_path)?;
    let page = PageConfig::from_file(page_path)?;
    tracing::info!("Rendering page '{}' ({} fields)", page.page.name, page.fields.len());

    let mut doc = page.build_document();
    let bindings = binder::initialize(&mut doc, config);

    tracing::info!(
        "Bound {} masked and {} display fields",
        bindings.masked_ids().len(),
        bindings.display_ids().len()
    );

    if json {
        let fields: Vec<serde_json::Value> = doc
            .ids()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "text": doc.text_of(id).unwrap_or_default(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        let ids: Vec<String> = doc.ids().map(str::to_string).collect();
        for id in ids {
            println!("{}: {}", id, doc.text_of(&id).unwrap_or_default());
        }
    }

    Ok(())
}

fn simulate_typing(config: &CliConfig, keys: &str) {
    let mut doc = MemoryDocument::new();
    doc.insert("field", MemoryField::new(&[config.input_marker.as_str()], ""));
    let bindings = binder::initialize(&mut doc, config);

    for key in keys.chars() {
        let typed = format!("{}{}", doc.text_of("field").unwrap_or_default(), key);
        if let Some(field) = doc.field_mut("field") {
            field.set_text(&typed);
        }
        bindings.on_input(&mut doc, "field");
        println!(
            "type '{}' -> \"{}\"",
            key,
            doc.text_of("field").unwrap_or_default()
        );
    }

    bindings.on_blur(&mut doc, "field");
    println!("blur -> \"{}\"", doc.text_of("field").unwrap_or_default());
}
