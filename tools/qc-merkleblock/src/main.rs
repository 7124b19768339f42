//! QC-MerkleBlock: build and inspect merkle block proofs from the command line.

mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qc_merkle_block::{
    parse_txid, Block, BlockHeader, BloomMatch, ExactSetMatch, Hash, MerkleBlockApi,
    MerkleBlockBuilder, MerkleBlockConfig, TxBloomFilter, TxMatcher,
};

use report::{BuildReport, InspectReport};

/// QC-MerkleBlock: partial Merkle tree proofs for SPV clients
#[derive(Parser, Debug)]
#[command(name = "qc-merkleblock")]
#[command(about = "Build and inspect merkle block proofs")]
struct Args {
    /// JSON configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a proof for the matching transactions of a block
    Build {
        /// Block header, 80 bytes hex
        #[arg(long)]
        header: String,

        /// File with one display-order txid per line, in block order
        #[arg(long)]
        txids: PathBuf,

        /// Reveal this txid (repeatable)
        #[arg(long = "target", conflicts_with = "bloom")]
        targets: Vec<String>,

        /// Insert this txid into a bloom filter and reveal what it matches (repeatable)
        #[arg(long)]
        bloom: Vec<String>,

        /// Bloom filter false positive rate
        #[arg(long, default_value = "0.000001")]
        fpr: f64,

        /// Bloom filter tweak
        #[arg(long, default_value = "0")]
        tweak: u32,
    },

    /// Decode a proof and list the transactions it reveals
    Inspect {
        /// Encoded proof, hex
        #[arg(long)]
        proof: String,

        /// Reject proofs with identical sibling subtrees
        #[arg(long)]
        harden: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(args.config.as_deref())?;

    let output = match args.command {
        Command::Build {
            header,
            txids,
            targets,
            bloom,
            fpr,
            tweak,
        } => {
            let block = load_block(&header, &txids)?;
            let matcher = if bloom.is_empty() {
                TxMatcher::ExactSet(ExactSetMatch::new(parse_txids(&targets)?))
            } else {
                let mut filter = TxBloomFilter::new(bloom.len(), tweak, fpr);
                for hash in parse_txids(&bloom)? {
                    filter.insert_hash(&hash);
                }
                TxMatcher::Bloom(BloomMatch::new(filter))
            };
            serde_json::to_string_pretty(&build(config, &block, &matcher)?)?
        }
        Command::Inspect { proof, harden } => {
            let config = MerkleBlockConfig {
                reject_duplicate_subtrees: config.reject_duplicate_subtrees || harden,
                ..config
            };
            serde_json::to_string_pretty(&inspect(config, &proof)?)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn build(
    config: MerkleBlockConfig,
    block: &Block,
    matcher: &TxMatcher<TxBloomFilter>,
) -> Result<BuildReport> {
    let builder = MerkleBlockBuilder::new(config)?;
    let result = builder.build_proof(block, matcher)?;
    let encoded = builder.encode_proof(&result.proof);

    tracing::info!(
        "Built proof: {} of {} transactions matched, {} bytes",
        result.matched_positions.len(),
        block.transaction_count(),
        encoded.len()
    );

    Ok(BuildReport::new(&result, &encoded, &block.tx_hashes))
}

fn inspect(config: MerkleBlockConfig, proof_hex: &str) -> Result<InspectReport> {
    let builder = MerkleBlockBuilder::new(config)?;
    let bytes = hex::decode(proof_hex.trim()).context("proof is not valid hex")?;
    let proof = builder.decode_proof(&bytes)?;
    let extracted = builder.extract_matches(&proof)?;

    let report = InspectReport::new(&proof, extracted);
    if !report.header_root_matches {
        tracing::warn!("Proof root does not match the header merkle root");
    }
    Ok(report)
}

fn load_config(path: Option<&Path>) -> Result<MerkleBlockConfig> {
    let Some(path) = path else {
        return Ok(MerkleBlockConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: MerkleBlockConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn load_block(header_hex: &str, txids_path: &Path) -> Result<Block> {
    let header_bytes = hex::decode(header_hex.trim()).context("header is not valid hex")?;
    let header = BlockHeader::from_slice(&header_bytes)?;

    let raw = fs::read_to_string(txids_path)
        .with_context(|| format!("reading txids {}", txids_path.display()))?;
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let tx_hashes = parse_txids(&lines)?;
    if tx_hashes.is_empty() {
        bail!("{} lists no transactions", txids_path.display());
    }

    Ok(Block::new(header, tx_hashes))
}

fn parse_txids<S: AsRef<str>>(txids: &[S]) -> Result<Vec<Hash>> {
    txids
        .iter()
        .map(|s| {
            let s = s.as_ref();
            parse_txid(s).with_context(|| format!("invalid txid {}", s))
        })
        .collect()
}
