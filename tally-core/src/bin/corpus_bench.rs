//! Corpus Benchmarking Tool
//!
//! This binary measures the word-frequency pipeline on large text files, like
//! book dumps or log corpora, and prints the ranked result at the end. It's
//! designed to give realistic throughput numbers for production-like inputs.
//!
//! ## What It Benchmarks
//!
//! The tool measures three stages of the pipeline:
//!
//! 1. **Normalization**: Lowercasing and folding separators to spaces
//! 2. **Tokenization**: Splitting normalized text into qualifying tokens
//! 3. **Full Analysis**: Normalize + count + rank, via the engine
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: words of at least 4 characters, top 3
//! ./target/release/corpus_bench /path/to/corpus.txt
//!
//! # Custom knobs: minimum length 5, top 20
//! ./target/release/corpus_bench /path/to/corpus.txt 5 20
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Full analysis ===
//! --------------------------------
//! Stage       : Analyze
//! Elapsed     : 0.412 s
//! Throughput  : 231.09 MiB/s
//! Tokens      : 14_892_341
//! Tokens/sec  : 36_146_458
//! --------------------------------
//! ```
//!
//! ## Tips for Accurate Results
//!
//! - Build with `--release`
//! - Use a large input file (100MB+) for stable measurements
//! - Consider `taskset` to pin to a specific CPU core
//! - Disable turbo boost and frequency scaling for consistent numbers

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use tally_core::analyzer::normalizer::WordNormalizer;
use tally_core::analyzer::tokenizer::Tokenizer;
use tally_core::{AnalyzerConfig, Tally};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [min_len] [limit]");
        std::process::exit(1);
    }

    let path = &args[1];

    let min_word_len = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(AnalyzerConfig::DEFAULT_MIN_WORD_LEN);
    let limit = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(AnalyzerConfig::DEFAULT_LIMIT);
    let config = AnalyzerConfig::new(min_word_len, limit);

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = std::str::from_utf8(&bytes).expect("input must be valid UTF-8");

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Config:    min_len={}, limit={}\n", min_word_len, limit);

    bench_normalize(input);
    bench_tokenize(input, min_word_len);
    bench_analyze(input, config);
    show_result(input, config);

    Ok(())
}

fn bench_normalize(input: &str) {
    let normalizer = WordNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| {
        normalizer.normalize_into(input, &mut out);
    });

    let elapsed = measure(|| {
        normalizer.normalize_into(input, &mut out);
    });

    print_perf("Normalize", input.len(), elapsed, 0);
}

fn bench_tokenize(input: &str, min_word_len: usize) {
    let normalizer = WordNormalizer::new();
    let tokenizer = Tokenizer::new(min_word_len);
    let normalized = normalizer.normalize(input);

    println!("=== Tokenize (pre-normalized input) ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(&normalized, |_t, _p| {
            sink += 1;
        });
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(&normalized, |_t, _p| {
            local += 1;
        });
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", normalized.len(), elapsed, tokens);
}

fn bench_analyze(input: &str, config: AnalyzerConfig) {
    let engine = Tally::with_config(config);
    let mut norm_buf = String::with_capacity(input.len());
    let mut out = Vec::new();

    println!("=== Full analysis ===");

    warmup(|| {
        engine.analyze_into(input, &mut norm_buf, &mut out);
        std::hint::black_box(out.len());
    });

    let elapsed = measure(|| {
        engine.analyze_into(input, &mut norm_buf, &mut out);
        std::hint::black_box(out.len());
    });

    print_perf("Analyze", input.len(), elapsed, 0);
}

fn show_result(input: &str, config: AnalyzerConfig) {
    let engine = Tally::with_config(config);
    let (top, stats) = engine.analyze_with_stats(input);

    println!("=== Result ===");
    println!("{}", stats);
    for entry in &top {
        println!("{}", entry);
    }
    println!();
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Stage       : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.2} MiB/s", mib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = b as f64;
    let mut unit = 0usize;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", b)
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut groups: Vec<String> = digits
        .as_bytes()
        .rchunks(3)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();
    groups.reverse();
    groups.join("_")
}
