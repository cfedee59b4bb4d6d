use clap::{Args, Parser, Subcommand};
use log::info;

mod params;
mod render;
mod rspec;
mod topology;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "powder-oai-profile")]
#[command(about = "OAI 5G dense-deployment RSpec generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bind parameters, build the topology and emit the request document.
    Generate(GenerateArgs),
    /// Print the parameter definitions as JSON.
    Params,
}

#[derive(Args)]
struct GenerateArgs {
    /// Parameter values as JSON, keyed by portal parameter name.
    #[arg(long)]
    params: Option<String>,

    /// Dense site radio to allocate (repeatable); replaces the file's list.
    #[arg(long = "dense-radio")]
    dense_radios: Vec<String>,

    /// COTS UE node type (repeatable); replaces the file's list.
    #[arg(long = "ue")]
    ues: Vec<String>,

    #[arg(long)]
    oai_ran_commit_hash: Option<String>,

    #[arg(long)]
    oai_cn_commit_hash: Option<String>,

    #[arg(long)]
    sdr_compute_image: Option<String>,

    #[arg(long)]
    cn_nodetype: Option<String>,

    /// Transmit range in MHz as MIN:MAX (repeatable); replaces the file's list.
    #[arg(long = "freq-range", value_parser = params::parse_freq_range)]
    freq_ranges: Vec<params::RawFreqRange>,

    /// Request no spectrum at all.
    #[arg(long, conflicts_with = "freq_ranges")]
    no_freq_ranges: bool,

    #[arg(long, value_enum, default_value_t = render::OutputFormat::Rspec)]
    format: render::OutputFormat,

    /// Output file; stdout when omitted.
    #[arg(short = 'o', long)]
    out: Option<String>,
}

impl GenerateArgs {
    /// Params file (if any) with command-line values layered on top.
    fn raw_parameters(&self) -> Result<params::RawParameters> {
        let mut raw = match &self.params {
            Some(path) => params::RawParameters::from_json_file(path)?,
            None => params::RawParameters::default(),
        };

        if !self.dense_radios.is_empty() {
            raw.dense_radios = self
                .dense_radios
                .iter()
                .map(|d| params::RawDevice { device: d.clone() })
                .collect();
        }
        if !self.ues.is_empty() {
            raw.ues = self
                .ues
                .iter()
                .map(|d| params::RawDevice { device: d.clone() })
                .collect();
        }
        if let Some(h) = &self.oai_ran_commit_hash {
            raw.oai_ran_commit_hash = h.clone();
        }
        if let Some(h) = &self.oai_cn_commit_hash {
            raw.oai_cn_commit_hash = h.clone();
        }
        if let Some(img) = &self.sdr_compute_image {
            raw.sdr_compute_image = img.clone();
        }
        if let Some(t) = &self.cn_nodetype {
            raw.cn_nodetype = Some(t.clone());
        }
        if self.no_freq_ranges {
            raw.freq_ranges = Some(vec![]);
        } else if !self.freq_ranges.is_empty() {
            raw.freq_ranges = Some(self.freq_ranges.clone());
        }

        Ok(raw)
    }
}

/// Warn and above unless `RUST_LOG` says otherwise.
fn logger(rust_log: Option<String>) -> (impl log::Log, log::LevelFilter) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Warn);
    if let Some(spec) = rust_log {
        builder.parse_filters(&spec);
    }
    let logger = builder.build();
    let filter = logger.filter();
    (logger, filter)
}

fn main() -> Result<()> {
    let (logger, filter) = logger(std::env::var("RUST_LOG").ok());
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(filter);
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Generate(args) => {
            // 1) Bind + verify parameters.
            let params = args.raw_parameters()?.bind()?;

            // 2) Build topology.
            let request = topology::build_request(&params);
            info!(
                "built {} node(s), {} link(s), {} spectrum request(s)",
                request.nodes.len(),
                request.links.len(),
                request.spectrum.len()
            );

            // 3) Render.
            let doc = render::render(&request, args.format)?;
            match &args.out {
                Some(out) => {
                    std::fs::write(out, doc)?;
                    println!("Wrote {}", out);
                }
                None => print!("{}", doc),
            }
        }
        Commands::Params => {
            println!("{}", serde_json::to_string_pretty(&params::definitions())?);
        }
    }

    Ok(())
}
