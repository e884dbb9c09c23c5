//! seqjaccard --fasta [-f] file --ngram [-n] k [--out [-o] file] [--format tsv|json] [--threads [-t] nb] [--dump-params dir]
//!
//! Computes the jaccard index between the kmer sets of all pairs of sequences of a fasta file.
//!
//! --fasta : fasta file (possibly compressed) containing the sequences. Mandatory.
//!
//! --ngram : kmer size, in unicode code points. Default is 2. A value less than 1 gives a null jaccard index for all pairs.
//!
//! --out : file to write results in. Default is stdout.
//!
//! --format : tsv (default) gives lines s1 s2 jaccard_index with a header. json gives one json object per line.
//!
//! --threads : number of threads used to compute kmer sets. Default is the number of cpus.
//!
//! --dump-params : directory where run parameters are dumped in parameters.json
//!
//! Pairs are dumped in the order of sequences in the file. Before the first pair involving a sequence whose content
//! was not yet met, the comparison of the sequence with itself is dumped.

use clap::{value_parser, Arg, ArgAction, Command};

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::SystemTime;

use anyhow::Context;
use cpu_time::ProcessTime;

// for logging (debug mostly, switched at compile time in cargo.toml)
use env_logger::Builder;

use seqjaccard::answer::{JsonSink, ResultSink, TsvSink};
use seqjaccard::jaccard::{compare_collection, SeenContent};
use seqjaccard::utils::*;

// install a logger facility
fn init_log() -> u64 {
    Builder::from_default_env().init();
    log::debug!("logger initialized");
    1
}

fn build_command() -> Command {
    Command::new("seqjaccard")
        .version("0.1.0")
        .about("calculate jaccard index between kmer sets of sequences of a fasta file")
        .arg(
            Arg::new("fasta")
                .short('f')
                .long("fasta")
                .value_name("FASTA")
                .help("Sequences in fasta format")
                .required(true)
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("ngram")
                .short('n')
                .long("ngram")
                .value_name("NGRAM")
                .help("N-gram size for jaccard index calculation")
                .action(ArgAction::Set)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .default_value("2"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .value_name("OUTPUT")
                .help("Output file, default is stdout")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .action(ArgAction::Set)
                .value_parser(["tsv", "json"])
                .default_value("tsv"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of threads for kmer set computation")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("dump_params")
                .long("dump-params")
                .value_name("DIR")
                .help("Directory where parameters.json is dumped")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf)),
        )
} // end of build_command

fn run_with_sink(
    collection: &SequenceCollection,
    params: &JaccardParams,
    sink: &mut dyn ResultSink,
) -> anyhow::Result<()> {
    let mut seen = SeenContent::new();
    let stats = compare_collection(collection, params, &mut seen, sink)
        .context("comparison of sequences failed")?;
    log::info!(
        "nb cross comparisons : {}, nb self comparisons : {}, nb distinct contents : {}",
        stats.nb_cross,
        stats.nb_self,
        seen.nb_contents()
    );
    Ok(())
}

fn run(fasta: &Path, params: &JaccardParams, output: &OutputParams) -> anyhow::Result<()> {
    let start_t = SystemTime::now();
    let cpu_start = ProcessTime::now();
    //
    let collection =
        read_sequences(fasta).with_context(|| format!("reading sequences from {:?}", fasta))?;
    //
    match (output.get_path(), output.get_format()) {
        (Some(path), format) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {:?}", path))?;
            let writer = BufWriter::new(file);
            match format {
                OutputFormat::Tsv => run_with_sink(&collection, params, &mut TsvSink::new(writer))?,
                OutputFormat::Json => {
                    run_with_sink(&collection, params, &mut JsonSink::new(writer))?
                }
            }
        }
        (None, format) => {
            let writer = BufWriter::new(io::stdout().lock());
            match format {
                OutputFormat::Tsv => run_with_sink(&collection, params, &mut TsvSink::new(writer))?,
                OutputFormat::Json => {
                    run_with_sink(&collection, params, &mut JsonSink::new(writer))?
                }
            }
        }
    }
    //
    let elapsed_t = start_t.elapsed().map(|d| d.as_secs_f32()).unwrap_or(0.);
    log::info!(
        "seqjaccard done in system time(s) : {}, cpu time(s) : {}",
        elapsed_t,
        cpu_start.elapsed().as_secs_f32()
    );
    Ok(())
} // end of run

fn main() -> anyhow::Result<()> {
    let _ = init_log();
    //
    let matches = build_command().get_matches();
    //
    let fasta = matches.get_one::<PathBuf>("fasta").context("--fasta is mandatory")?.clone();
    let ngram = *matches.get_one::<i64>("ngram").context("no ngram value")?;
    let params = JaccardParams::from_arg(ngram);
    let format_str = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("tsv");
    let format = OutputFormat::from_str(format_str)
        .with_context(|| format!("unknown format {}", format_str))?;
    let output = OutputParams::new(matches.get_one::<PathBuf>("out").cloned(), format);
    log::info!("fasta file {:?}, ngram {}, output {:?}", fasta, params.get_ngram(), output);
    //
    if let Some(nb_threads) = matches.get_one::<usize>("threads") {
        rayon::ThreadPoolBuilder::new()
            .num_threads(*nb_threads)
            .build_global()
            .context("cannot set number of threads")?;
        log::info!("nb threads : {}", nb_threads);
    }
    if let Some(dir) = matches.get_one::<PathBuf>("dump_params") {
        params.dump_json(dir).context("dumping parameters")?;
    }
    //
    if let Err(e) = run(&fasta, &params, &output) {
        log::error!("seqjaccard failed : {:#}", e);
        eprintln!("error : {:#}", e);
        std::process::exit(1);
    }
    Ok(())
} // end of main

//=========================================================

// end of mod tests
