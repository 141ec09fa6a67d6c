use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use tracing::{info, info_span};

use pareto_core::SynthesisPipeline;
use pareto_ingest::{load_price_catalog, load_rank_catalog};
use pareto_map::{DefaultPriceEstimator, normalize};
use pareto_output::{OutputFormat, write_outputs};
use pareto_cli::config::{FlagOverrides, resolve_options};

use crate::cli::{NormalizeArgs, OutputFormatArg, SynthesizeArgs};
use crate::summary::apply_table_style;
use crate::types::SynthesisReport;

pub fn run_synthesize(args: &SynthesizeArgs) -> Result<SynthesisReport> {
    let span = info_span!("synthesize", ranks = %args.ranks.display());
    let _guard = span.enter();
    let started = Instant::now();

    let flags = FlagOverrides {
        min_score: args.min_score,
        include_free: args.include_free,
        exclude_default_estimates: args.exclude_default_estimates,
        fuzzy_threshold: args.fuzzy_threshold,
        family_bonus: args.family_bonus,
        version_bonus: args.version_bonus,
    };
    let options = resolve_options(args.config.as_deref(), &flags)?;
    let pipeline = SynthesisPipeline::new(options).context("invalid synthesis options")?;

    let ranks = load_rank_catalog(&args.ranks).context("load rank catalog")?;
    let prices = load_price_catalog(&args.prices).context("load price catalog")?;
    let output = pipeline.run(&ranks, &prices);

    let written = if args.dry_run {
        info!("dry run, no files written");
        None
    } else {
        let format = match args.format {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Js => OutputFormat::Js,
        };
        let written = write_outputs(
            &args.output_dir,
            format,
            &output.resolved,
            &output.debug,
            Local::now().naive_local(),
        )
        .context("write outputs")?;
        Some(written)
    };

    info!(
        resolved = output.resolved.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "synthesis complete"
    );
    Ok(SynthesisReport {
        output,
        output_dir: args.output_dir.clone(),
        written,
    })
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Normalized"]);
    apply_table_style(&mut table);
    for name in &args.names {
        table.add_row(vec![name.clone(), normalize(name)]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_families() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Family", "Provider", "Keywords", "Rule", "Price"]);
    apply_table_style(&mut table);
    for family in DefaultPriceEstimator::new().families() {
        let keywords = family.keywords.join(", ");
        for rule in &family.rules {
            table.add_row(vec![
                family.id.to_string(),
                family.provider.to_string(),
                keywords.clone(),
                format!("{} /{}/", rule.description, rule.pattern.as_str()),
                format!("{:.2}", rule.price),
            ]);
        }
        table.add_row(vec![
            family.id.to_string(),
            family.provider.to_string(),
            keywords,
            "default".to_string(),
            format!("{:.2}", family.default_price),
        ]);
    }
    println!("{table}");
    Ok(())
}
