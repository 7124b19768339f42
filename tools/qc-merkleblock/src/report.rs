//! JSON reports printed by the CLI.

use serde::Serialize;

use qc_merkle_block::{txid_hex, BuildResult, ExtractedMatches, Hash, MerkleBlockProof};

/// Output of `build`.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    /// Encoded proof, hex.
    pub proof: String,
    pub matched_positions: Vec<usize>,
    /// Matched txids in display order.
    pub matched_txids: Vec<String>,
}

impl BuildReport {
    pub fn new(result: &BuildResult, encoded: &[u8], leaves: &[Hash]) -> Self {
        let matched_txids = result
            .matched_positions
            .iter()
            .filter_map(|&pos| leaves.get(pos))
            .map(txid_hex)
            .collect();
        Self {
            proof: hex::encode(encoded),
            matched_positions: result.matched_positions.clone(),
            matched_txids,
        }
    }
}

/// Output of `inspect`.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub block_hash: String,
    pub total_transactions: u32,
    /// Root recomputed from the proof, display order.
    pub merkle_root: String,
    pub header_root_matches: bool,
    pub matched_positions: Vec<usize>,
    pub matched_txids: Vec<String>,
}

impl InspectReport {
    pub fn new(proof: &MerkleBlockProof, extracted: ExtractedMatches) -> Self {
        Self {
            block_hash: txid_hex(&proof.header.block_hash()),
            total_transactions: proof.total_transactions,
            merkle_root: txid_hex(&extracted.root),
            header_root_matches: extracted.root == proof.header.merkle_root(),
            matched_positions: extracted.matched_positions,
            matched_txids: extracted.matched_hashes.iter().map(txid_hex).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_merkle_block::{new_merkle_block_with_txn_set, Block, BlockHeader, HEADER_SIZE};

    fn make_block() -> Block {
        let txs: Vec<Hash> = (1..=3u8).map(|n| [n; 32]).collect();
        let mut raw = [0u8; HEADER_SIZE];
        if let Some(root) = qc_merkle_block::compute_merkle_root(&txs) {
            raw[36..68].copy_from_slice(&root);
        }
        Block::new(BlockHeader::from_bytes(raw), txs)
    }

    #[test]
    fn test_build_report_lists_display_txids() {
        let block = make_block();
        let result = new_merkle_block_with_txn_set(&block, &[[2u8; 32]]).unwrap();
        let report = BuildReport::new(&result, &[0xab], &block.tx_hashes);

        assert_eq!(report.proof, "ab");
        assert_eq!(report.matched_positions, vec![1]);
        assert_eq!(report.matched_txids, vec!["02".repeat(32)]);
    }

    #[test]
    fn test_inspect_report_checks_header_root() {
        let block = make_block();
        let result = new_merkle_block_with_txn_set(&block, &[[3u8; 32]]).unwrap();
        let extracted = result.proof.extract_matches(false).unwrap();
        let report = InspectReport::new(&result.proof, extracted);

        assert!(report.header_root_matches);
        assert_eq!(report.total_transactions, 3);
        assert_eq!(report.matched_positions, vec![2]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["matched_txids"][0], "03".repeat(32));
    }
}
