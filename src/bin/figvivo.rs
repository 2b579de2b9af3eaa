//! `figvivo`: harvest Figshare works and write them as VIVO RDF.
//!
//! **Usage:**
//! ```text
//! figvivo (--institution <ID> | --tag <TAG> | --article <ID>) --output <PATH>
//!         [--format nt|ttl|rdf|jsonld] [--key-policy doi|id] [--dedupe-doi]
//!         [--event <KEY> [--event-label <LABEL>]] [--config <PATH>]
//!         [--base-uri <URI>] [--page-size <N>] [--aggregation] [--parallel]
//!         [--log-level <LEVEL>]
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use figvivo::vivo::{EventContext, MappingConfig, Namespaces, RdfFormat, WorkKeyPolicy};
use figvivo::{logging, write_graph, FigshareClient, HarvestOptions, Harvester};
use tracing::info;

/// Harvest Figshare works into a VIVO-compatible RDF graph.
#[derive(Parser)]
#[command(name = "figvivo", version, about)]
#[command(group(ArgGroup::new("query").required(true).args(["institution", "tag", "article"])))]
struct Cli {
    /// Harvest every work of this institution id.
    #[arg(long)]
    institution: Option<String>,

    /// Harvest works carrying exactly this tag.
    #[arg(long)]
    tag: Option<String>,

    /// Harvest a single article by id.
    #[arg(long)]
    article: Option<String>,

    /// Output file.
    #[arg(short, long)]
    output: PathBuf,

    /// Output format (nt, ttl, rdf, jsonld). Defaults to the configured format.
    #[arg(short, long)]
    format: Option<RdfFormat>,

    /// Work URI policy: `doi` (version-free DOI) or `id` (source id).
    #[arg(long)]
    key_policy: Option<WorkKeyPolicy>,

    /// Drop later works whose version-free DOI was already seen. Implied
    /// by the `doi` key policy.
    #[arg(long)]
    dedupe_doi: bool,

    /// Attach every work to this event key.
    #[arg(long)]
    event: Option<String>,

    /// Label for the event.
    #[arg(long, requires = "event")]
    event_label: Option<String>,

    /// JSON mapping configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URI for all minted entities.
    #[arg(long)]
    base_uri: Option<String>,

    /// Listing page size.
    #[arg(long, default_value_t = figvivo::figshare::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Describe each work as an OAI-ORE aggregation of its files.
    #[arg(long)]
    aggregation: bool,

    /// Map records on all cores.
    #[arg(long)]
    parallel: bool,

    /// Logging level (error, warn, info, debug, trace).
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn mapping_config(&self) -> Result<MappingConfig> {
        let mut config = match &self.config {
            Some(path) => MappingConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => MappingConfig::default(),
        };
        if let Some(policy) = self.key_policy {
            config = config.with_work_key(policy);
        }
        if self.aggregation {
            config = config.with_aggregation(true);
        }
        if let Some(format) = self.format {
            config = config.with_output_format(format);
        }
        if let Some(base) = &self.base_uri {
            config = config.with_namespaces(Namespaces::with_base(base));
        }
        if let Some(key) = &self.event {
            let mut event = EventContext::new(key);
            if let Some(label) = &self.event_label {
                event = event.with_label(label);
            }
            config = config.with_event(event);
        }
        Ok(config)
    }

    fn harvest_options(&self) -> Result<HarvestOptions> {
        let options = match (&self.institution, &self.tag, &self.article) {
            (Some(id), _, _) => HarvestOptions::institution(id),
            (_, Some(tag), _) => HarvestOptions::tagged(tag),
            (_, _, Some(id)) => HarvestOptions::article(id),
            (None, None, None) => bail!("one of --institution, --tag or --article is required"),
        };
        Ok(options
            .with_doi_dedup(self.dedupe_doi)
            .with_parallel(self.parallel))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let config = cli.mapping_config()?;
    let options = cli.harvest_options()?;
    let client = FigshareClient::new()?.with_page_size(cli.page_size);

    let (graph, report) = Harvester::new(&client, &config)
        .run(&options)
        .context("harvest failed")?;

    write_graph(&graph, &cli.output, config.output_format)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    info!(?report, "done");
    Ok(())
}
