//! xweat CLI
//!
//! # Usage
//!
//! ```bash
//! # Single test, exact permutation test
//! xweat run --embeddings wiki.vec \
//!     --targets-1 flowers.txt --targets-2 insects.txt \
//!     --attributes-1 pleasant.txt --attributes-2 unpleasant.txt
//!
//! # Sampled p-value with CSLS
//! xweat run ... --similarity csls --permutations 10000 --seed 42
//!
//! # Every test of a suite file
//! xweat suite --embeddings wiki.vec --suite german.yaml --lower --output-dir results
//!
//! # Vocabulary coverage of a suite
//! xweat oov --embeddings wiki.vec --suite german.yaml
//!
//! # Keep only the embeddings a suite needs
//! xweat trim --embeddings wiki.vec --suite german.yaml --output wiki_trimmed.vec
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use xweat::config::{Preset, SuiteFileV1, WeatConfig};
use xweat::features::similarity::SimilarityKind;
use xweat::infrastructure::{VecLoader, VecWriter, WordFilter, WordListLoader};
use xweat::pipeline::{SuiteRunner, TestOrchestrator};
use xweat::report::{JsonReporter, MarkdownReporter, SuiteReport, TerminalReporter, TestReport};
use xweat::shared::models::{InMemoryEmbeddingStore, WeatWordSets};

#[derive(Parser)]
#[command(name = "xweat")]
#[command(about = "Word Embedding Association Test with permutation significance", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one test from four word-list files
    Run {
        /// Embedding file (.vec)
        #[arg(short, long)]
        embeddings: PathBuf,

        /// First target word list
        #[arg(long)]
        targets_1: PathBuf,

        /// Second target word list
        #[arg(long)]
        targets_2: PathBuf,

        /// First attribute word list
        #[arg(long)]
        attributes_1: PathBuf,

        /// Second attribute word list
        #[arg(long)]
        attributes_2: PathBuf,

        /// Similarity metric: cosine, euclidean, csls
        #[arg(short, long, default_value = "cosine")]
        similarity: SimilarityKind,

        /// Base preset: exact, fast, balanced, thorough
        #[arg(long, default_value = "exact")]
        preset: String,

        /// Sampled partitions (overrides the preset)
        #[arg(short, long)]
        permutations: Option<usize>,

        /// Sampler seed
        #[arg(long)]
        seed: Option<u64>,

        /// CSLS neighbourhood size
        #[arg(long, default_value = "10")]
        csls_k: usize,

        /// Lower-case all word lists
        #[arg(long)]
        lower: bool,

        /// Evaluate permutations in parallel
        #[arg(long)]
        parallel: bool,

        /// Test id used in the report
        #[arg(long, default_value = "weat")]
        id: String,

        /// Write the result as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run every test of a suite file
    Suite {
        /// Embedding file (.vec)
        #[arg(short, long)]
        embeddings: PathBuf,

        /// Suite file (YAML)
        #[arg(long)]
        suite: PathBuf,

        /// Lower-case all word lists
        #[arg(long)]
        lower: bool,

        /// Output directory for results.json and report.md
        #[arg(short, long, default_value = "weat_results")]
        output_dir: PathBuf,
    },

    /// Report out-of-vocabulary words per suite test
    Oov {
        /// Embedding file (.vec)
        #[arg(short, long)]
        embeddings: PathBuf,

        /// Suite file (YAML)
        #[arg(long)]
        suite: PathBuf,

        /// Lower-case all word lists
        #[arg(long)]
        lower: bool,
    },

    /// Write only the embeddings a suite uses
    Trim {
        /// Embedding file (.vec)
        #[arg(short, long)]
        embeddings: PathBuf,

        /// Suite file (YAML)
        #[arg(long)]
        suite: PathBuf,

        /// Match words case-insensitively
        #[arg(long)]
        lower: bool,

        /// Trimmed embedding file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    xweat::init_rayon();

    match cli.command {
        Commands::Run {
            embeddings,
            targets_1,
            targets_2,
            attributes_1,
            attributes_2,
            similarity,
            preset,
            permutations,
            seed,
            csls_k,
            lower,
            parallel,
            id,
            output,
        } => {
            let preset = Preset::from_str(&preset)?;
            let mut config = WeatConfig::preset(preset)
                .similarity(similarity)
                .csls_k(csls_k)
                .parallel(parallel);
            if permutations.is_some() {
                config = config.permutations(permutations);
            }
            if let Some(seed) = seed {
                config = config.seed(seed);
            }

            let [t1, t2, a1, a2] = [&targets_1, &targets_2, &attributes_1, &attributes_2].map(|path| {
                WordListLoader::load(path).with_context(|| format!("reading {}", path.display()))
            });
            let mut sets = WeatWordSets::new(t1?, t2?, a1?, a2?);
            if lower {
                sets = sets.lowercased();
            }

            run_single(&embeddings, &sets, config, id, lower, output.as_deref())?;
        }
        Commands::Suite {
            embeddings,
            suite,
            lower,
            output_dir,
        } => {
            run_suite(&embeddings, &suite, lower, &output_dir)?;
        }
        Commands::Oov {
            embeddings,
            suite,
            lower,
        } => {
            let (suite_file, runner) = load_suite(&suite, lower)?;
            let store = load_store(&embeddings, suite_words(&suite_file, &runner), lower)?;
            let reports = runner.oov_reports(&suite_file, &store)?;
            TerminalReporter::print_oov(&reports);
        }
        Commands::Trim {
            embeddings,
            suite,
            lower,
            output,
        } => {
            let (suite_file, runner) = load_suite(&suite, lower)?;
            let store = load_store(&embeddings, suite_words(&suite_file, &runner), lower)?;
            VecWriter::save(&store, &output)
                .with_context(|| format!("writing {}", output.display()))?;
            info!("Wrote {} embeddings to {}", store.words().count(), output.display());
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_single(
    embeddings: &Path,
    sets: &WeatWordSets,
    config: WeatConfig,
    id: String,
    lower: bool,
    output: Option<&Path>,
) -> Result<()> {
    let store = load_store(embeddings, sets.iter_words().map(str::to_string).collect(), lower)?;
    let outcome = TestOrchestrator::new(config.clone()).run(sets, &store)?;

    let report = TestReport {
        test_id: id,
        embeddings: embeddings.display().to_string(),
        config,
        outcome,
    };
    TerminalReporter::print(&report);

    if let Some(path) = output {
        JsonReporter::save_test(&report, path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Result written to {}", path.display());
    }
    Ok(())
}

fn run_suite(embeddings: &Path, suite: &Path, lower: bool, output_dir: &Path) -> Result<()> {
    let (suite_file, runner) = load_suite(suite, lower)?;
    let store = load_store(embeddings, suite_words(&suite_file, &runner), lower)?;

    let rows = runner.run(&suite_file, &store);
    let report = SuiteReport {
        suite: suite.display().to_string(),
        embeddings: embeddings.display().to_string(),
        config: suite_file.config()?,
        rows,
    };
    TerminalReporter::print_suite(&report);

    let json = JsonReporter::save(&report, output_dir)?;
    let md = MarkdownReporter::save(&report, output_dir)?;
    info!("Results written to {} and {}", json.display(), md.display());
    Ok(())
}

fn load_suite(path: &Path, lower: bool) -> Result<(SuiteFileV1, SuiteRunner)> {
    let suite = SuiteFileV1::from_yaml(path)
        .with_context(|| format!("loading suite {}", path.display()))?;
    let runner = SuiteRunner::for_suite(&suite, path)?.lower(lower);
    Ok((suite, runner))
}

/// Every word of every loadable case; unreadable cases fail later, per row
fn suite_words(suite: &SuiteFileV1, runner: &SuiteRunner) -> Vec<String> {
    suite
        .tests
        .iter()
        .filter_map(|case| runner.word_sets(case).ok())
        .flat_map(|sets| sets.iter_words().map(str::to_string).collect::<Vec<_>>())
        .collect()
}

fn load_store(path: &Path, words: Vec<String>, lower: bool) -> Result<InMemoryEmbeddingStore> {
    VecLoader::new()
        .with_filter(WordFilter::new(words, lower))
        .load(path)
        .with_context(|| format!("loading embeddings {}", path.display()))
}
