use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use variant_venn::input::genes::{builtin_universe, load_gene_universe};
use variant_venn::input::mutations::{MutationKind, detect_kind, gene_of};
use variant_venn::input::{InputError, LoadOptions, SetSource, load_input};
use variant_venn::logging::init_logging;
use variant_venn::pipeline::stage4_report::{ReportError, ReportInput, write_reports};
use variant_venn::{UnknownCategoryPolicy, VennError, group_by_category, partition};

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Venn(#[from] VennError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Parser)]
#[command(name = "variant-venn", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Partition mutation lists by exact membership and write reports.
    Compare(CompareArgs),
}

#[derive(Debug, Clone, Args)]
struct CompareArgs {
    /// Input set as LABEL=PATH, or PATH labelled by its file stem. Repeat 2+ times.
    #[arg(long = "set", value_name = "LABEL=PATH", required = true)]
    sets: Vec<String>,
    /// Output directory.
    #[arg(long, value_name = "DIR")]
    out: PathBuf,
    /// Gene universe file, one gene per line. Defaults to the SARS-CoV-2 genes.
    #[arg(long, value_name = "PATH", conflicts_with = "no_genes")]
    genes: Option<PathBuf>,
    /// Skip per-gene grouping.
    #[arg(long)]
    no_genes: bool,
    /// What to do with mutations whose gene is not in the universe.
    #[arg(long, value_enum, default_value_t = UnknownGeneArg::Error)]
    on_unknown_gene: UnknownGeneArg,
    /// Skip records whose proportion column is below this value.
    #[arg(long, value_name = "F")]
    min_proportion: Option<f64>,
    /// Mutation kind of the inputs.
    #[arg(long, value_enum, default_value_t = KindArg::Auto)]
    kind: KindArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnknownGeneArg {
    Error,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Auto,
    AminoAcid,
    Nucleotide,
}

#[derive(Debug, Clone)]
enum GeneSource {
    Builtin,
    File(PathBuf),
    Disabled,
}

#[derive(Debug, Clone)]
struct RunConfig {
    sources: Vec<SetSource>,
    out_dir: PathBuf,
    genes: GeneSource,
    unknown_gene: UnknownCategoryPolicy,
    load: LoadOptions,
    kind: Option<MutationKind>,
}

impl RunConfig {
    fn from_args(args: CompareArgs) -> Result<Self> {
        let sources = args
            .sets
            .iter()
            .map(|s| SetSource::parse(s))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if sources.len() < 2 {
            return Err(VennError::InvalidArity {
                found: sources.len(),
            }
            .into());
        }
        if let Some(min) = args.min_proportion {
            if !min.is_finite() || min < 0.0 {
                return Err(InputError::InvalidInput(format!(
                    "--min-proportion must be a non-negative number, got {min}"
                ))
                .into());
            }
        }
        let genes = match (args.no_genes, args.genes) {
            (true, _) => GeneSource::Disabled,
            (false, Some(path)) => GeneSource::File(path),
            (false, None) => GeneSource::Builtin,
        };
        Ok(Self {
            sources,
            out_dir: args.out,
            genes,
            unknown_gene: match args.on_unknown_gene {
                UnknownGeneArg::Error => UnknownCategoryPolicy::Error,
                UnknownGeneArg::Drop => UnknownCategoryPolicy::Drop,
            },
            load: LoadOptions {
                min_proportion: args.min_proportion,
            },
            kind: match args.kind {
                KindArg::Auto => None,
                KindArg::AminoAcid => Some(MutationKind::AminoAcid),
                KindArg::Nucleotide => Some(MutationKind::Nucleotide),
            },
        })
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compare(args) => compare(RunConfig::from_args(args)?),
    }
}

fn compare(config: RunConfig) -> Result<()> {
    let sets = load_input(&config.sources, &config.load)?;
    let kind = match config.kind {
        Some(kind) => kind,
        None => detect_kind(&sets)?,
    };

    let result = partition(&sets)?;
    tracing::info!(
        n_sets = result.arity(),
        n_union = result.len(),
        n_classes = result.classes().len(),
        kind = kind.as_str(),
        "partitioned mutation sets"
    );

    let universe = match (&config.genes, kind) {
        (GeneSource::Disabled, _) => None,
        (_, MutationKind::Nucleotide) => {
            tracing::info!("nucleotide mutations carry no gene prefix; skipping gene grouping");
            None
        }
        (GeneSource::Builtin, MutationKind::AminoAcid) => Some(builtin_universe()),
        (GeneSource::File(path), MutationKind::AminoAcid) => Some(load_gene_universe(path)?),
    };

    let grouped = match &universe {
        Some(universe) => Some(group_by_category(
            &result,
            |m| gene_of(m).to_string(),
            universe,
            config.unknown_gene,
        )?),
        None => None,
    };

    let input = ReportInput {
        sources: &config.sources,
        sets: &sets,
        partition: &result,
        grouped: grouped.as_ref(),
        kind,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &config.out_dir)?;

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
