//! # Reference Vector Tests
//!
//! Proofs built from real block data must match known-good encodings
//! byte for byte, and decode back to the same matches.

use qc_merkle_block::{
    decode_proof, encode_proof, new_merkle_block_with_filter, new_merkle_block_with_txn_set,
    parse_txid, txid_hex, Block, BlockHeader, Hash, TxBloomFilter,
};

// =============================================================================
// FIXTURES
// =============================================================================

/// A block reduced to its header and display-order txids.
struct Vector {
    header: &'static str,
    txids: &'static [&'static str],
    targets: &'static [&'static str],
    encoded: &'static str,
    matched: &'static [usize],
}

const BLOCK_1253848: Vector = Vector {
    header: concat!(
        "00000020c2981857b4516c746e24199820dd2309818a058ce5371a27be000000",
        "0000000091bfb84d0fce1e261d97c86d84c44ff66aab3a610e68ac1cf0987315",
        "9ed1ce9a56ae825b1013041a21aebff3",
    ),
    txids: &[
        "6c1752bb659814596c801b814bb2666891b00b8c7dfa6a9c07c32ae8c1be1ca2",
        "1776cf90f8b95467536bbfcb120eff10f1f5cdeeca7a4d1973a9ebc11d5053da",
        "bfc591e1471b1f247258b5274a845e666e5bc9b918a154e1cf4c6211b640711d",
        "8f4dbab4cef6da1314000951c18460387f2c526adc97db188503b7923a034648",
        "781e5a4c6b1b87954691bf26b88dc1fe1015af15c4704f02a7c08eefcf4f09f9",
        "3c5b34c7d422a28507fb670a5ea42c551b5cc6120c28e2cfd912ee09b81d437d",
    ],
    targets: &[
        "bfc591e1471b1f247258b5274a845e666e5bc9b918a154e1cf4c6211b640711d",
        "8f4dbab4cef6da1314000951c18460387f2c526adc97db188503b7923a034648",
    ],
    encoded: concat!(
        "00000020c2981857b4516c746e24199820dd2309818a058ce5371a27be000000",
        "0000000091bfb84d0fce1e261d97c86d84c44ff66aab3a610e68ac1cf0987315",
        "9ed1ce9a56ae825b1013041a21aebff3060000000411303ed124cfa04609d672",
        "8e78ae56ac913a166da35ae1338d268a05004f82741d7140b611624ccfe154a1",
        "18b9c95b6e665e844a27b55872241f1b47e191c5bf4846033a92b7038518db97",
        "dc6a522c7f386084c15109001413daf6ceb4ba4d8fea3c13cb09d08cfa3e43a6",
        "a40d3d01602835093c48d414bcce0777267b8190fc013b",
    ),
    matched: &[2, 3],
};

const BLOCK_1268825: Vector = Vector {
    header: concat!(
        "00e0002075dbd04988a32f7fe6346a7908f04d0aca6f3cad22c6c138fe020000",
        "000000000679e44eddbcd820b33c4a287f66df403163576c02c05be6bb509aac",
        "a224dfc68ff7f25be142031ad3c64058",
    ),
    txids: &[
        "bcc404bbf93050adc9c5d014ef8cc391e32f7c8a4f72e87e7db064d920054369",
        "650394f9753a3c2b138ef1ee5d98feebc7c37fe83464dc2b83773c1e6808316b",
    ],
    targets: &[
        "650394f9753a3c2b138ef1ee5d98feebc7c37fe83464dc2b83773c1e6808316b",
    ],
    encoded: concat!(
        "00e0002075dbd04988a32f7fe6346a7908f04d0aca6f3cad22c6c138fe020000",
        "000000000679e44eddbcd820b33c4a287f66df403163576c02c05be6bb509aac",
        "a224dfc68ff7f25be142031ad3c64058020000000269430520d964b07d7ee872",
        "4f8a7c2fe391c38cef14d0c5c9ad5030f9bb04c4bc6b3108681e3c77832bdc64",
        "34e87fc3c7ebfe985deef18e132b3c3a75f99403650105",
    ),
    matched: &[1],
};

const BLOCK_1268830: Vector = Vector {
    header: concat!(
        "000000209fb15bb4903b1b2ca439b082e76d05ffb4edc95ffaf9864e73010000",
        "000000007c8ffd4aa7d4bb1ac7021d9823b4d4a11e11c7a404a7185d898c43ea",
        "bebc8ecdaa04f35bffff001d36d97a58",
    ),
    txids: &[
        "c9b5f17d01104d35f7daa5010aec9bdf9ba6717ef8ab472e937ecc73b019a83b",
        "00c412161f5d61796048eff1b9cc6976395023578c96393f74215df863931aa5",
        "0ea54593df07295cff857103163ae3d8c5ad80adadd5d8347ebd7a278bef33e7",
        "3e16266bd3eb6be74aa3e75e18fa9f96f8b85f0b4055c839642842cccb8fe14c",
        "412dda450285ff13e1384346658e25174f73fb11c300537f290acd7a5d229b2b",
        "506f9c2e56a0de8a84cab28da5be434a4ce8affd66d02429a7f39c61d7dbe989",
        "88270d5c51ae90d5ceed4c73ac21c1183274d1d1f772ab64f4eba0ec3a60870e",
        "aeb1f9d6885aedf2da78e39bee2df14cd456ad6dd0474c6f1048b819cd1ec62b",
        "b66c92b01cd81737a4ddf5888fe3366f1cd2ddeea1c523b1610d402735de6eb6",
        "da7dd7ea3fad9528160893b44d2e03d380a237e8fabf7490f3784d34e2ec62da",
        "e9efd3fe18dc6bfffdc25092e99856c6333e6b542c9376c48e687ea8ca21374f",
    ],
    targets: &[
        "c9b5f17d01104d35f7daa5010aec9bdf9ba6717ef8ab472e937ecc73b019a83b",
        "00c412161f5d61796048eff1b9cc6976395023578c96393f74215df863931aa5",
        "0ea54593df07295cff857103163ae3d8c5ad80adadd5d8347ebd7a278bef33e7",
        "412dda450285ff13e1384346658e25174f73fb11c300537f290acd7a5d229b2b",
        "506f9c2e56a0de8a84cab28da5be434a4ce8affd66d02429a7f39c61d7dbe989",
        "aeb1f9d6885aedf2da78e39bee2df14cd456ad6dd0474c6f1048b819cd1ec62b",
        "b66c92b01cd81737a4ddf5888fe3366f1cd2ddeea1c523b1610d402735de6eb6",
        "e9efd3fe18dc6bfffdc25092e99856c6333e6b542c9376c48e687ea8ca21374f",
    ],
    encoded: concat!(
        "000000209fb15bb4903b1b2ca439b082e76d05ffb4edc95ffaf9864e73010000",
        "000000007c8ffd4aa7d4bb1ac7021d9823b4d4a11e11c7a404a7185d898c43ea",
        "bebc8ecdaa04f35bffff001d36d97a580b0000000b3ba819b073cc7e932e47ab",
        "f87e71a69bdf9bec0a01a5daf7354d10017df1b5c9a51a9363f85d21743f3996",
        "8c572350397669ccb9f1ef486079615d1f1612c400e733ef8b277abd7e34d8d5",
        "adad80adc5d8e33a16037185ff5c2907df9345a50e4ce18fcbcc42286439c855",
        "400b5fb8f8969ffa185ee7a34ae76bebd36b26163e2b9b225d7acd0a297f5300",
        "c311fb734f17258e65464338e113ff850245da2d4189e9dbd7619cf3a72924d0",
        "66fdafe84c4a43bea58db2ca848adea0562e9c6f500e87603aeca0ebf464ab72",
        "f7d1d1743218c121ac734cedced590ae515c0d27882bc61ecd19b848106f4c47",
        "d06dad56d44cf12dee9be378daf2ed5a88d6f9b1aeb66ede3527400d61b123c5",
        "a1eeddd21c6f36e38f88f5dda43717d81cb0926cb6da62ece2344d78f39074bf",
        "fae837a280d3032e4db49308162895ad3fead77dda4f3721caa87e688ec47693",
        "2c546b3e33c65698e99250c2fdff6bdc18fed3efe903ffbe6f",
    ),
    matched: &[0, 1, 2, 4, 5, 7, 8, 10],
};

const COINBASE_ONLY_HEADER: &str = concat!(
    "0100000079cda856b143d9db2c1caff01d1aecc8630d30625d10e8b4b8b00000",
    "00000000b50cc069d6a3e33e3ff84a5c41d9d3febe7c770fdcc96b2c3ff60abe",
    "184f196367291b4d4c86041b8fa45d63",
);

const COINBASE_ONLY_ENCODED: &str = concat!(
    "0100000079cda856b143d9db2c1caff01d1aecc8630d30625d10e8b4b8b00000",
    "00000000b50cc069d6a3e33e3ff84a5c41d9d3febe7c770fdcc96b2c3ff60abe",
    "184f196367291b4d4c86041b8fa45d630100000001b50cc069d6a3e33e3ff84a",
    "5c41d9d3febe7c770fdcc96b2c3ff60abe184f19630101",
);

// =============================================================================
// TEST HELPERS
// =============================================================================

fn parse_all(txids: &[&str]) -> Vec<Hash> {
    txids.iter().map(|s| parse_txid(s).unwrap()).collect()
}

fn header_from_hex(s: &str) -> BlockHeader {
    BlockHeader::from_slice(&hex::decode(s).unwrap()).unwrap()
}

fn block_from(vector: &Vector) -> Block {
    Block::new(header_from_hex(vector.header), parse_all(vector.txids))
}

fn check_vector(vector: &Vector) {
    let block = block_from(vector);
    assert_eq!(block.compute_merkle_root(), Some(block.header.merkle_root()));

    let targets = parse_all(vector.targets);
    let result = new_merkle_block_with_txn_set(&block, &targets).unwrap();

    assert_eq!(result.matched_positions, vector.matched);
    assert_eq!(hex::encode(encode_proof(&result.proof)), vector.encoded);

    let decoded = decode_proof(&hex::decode(vector.encoded).unwrap()).unwrap();
    assert_eq!(decoded, result.proof);

    let extracted = decoded.extract_matches(false).unwrap();
    assert_eq!(extracted.root, block.header.merkle_root());
    assert_eq!(extracted.matched_positions, vector.matched);
    let revealed: Vec<String> = extracted.matched_hashes.iter().map(txid_hex).collect();
    assert_eq!(revealed, vector.targets);
}

// =============================================================================
// EXACT TARGET SET
// =============================================================================

#[test]
fn test_block_1253848_two_adjacent_matches() {
    check_vector(&BLOCK_1253848);
}

#[test]
fn test_block_1268825_second_of_two() {
    check_vector(&BLOCK_1268825);
}

#[test]
fn test_block_1268830_most_transactions_matched() {
    check_vector(&BLOCK_1268830);
}

#[test]
fn test_targets_from_another_block_are_ignored() {
    let block = block_from(&BLOCK_1268825);
    let targets = parse_all(&[
        "650394f9753a3c2b138ef1ee5d98feebc7c37fe83464dc2b83773c1e6808316b",
        // belongs to block 1268830
        "b66c92b01cd81737a4ddf5888fe3366f1cd2ddeea1c523b1610d402735de6eb6",
    ]);

    let result = new_merkle_block_with_txn_set(&block, &targets).unwrap();
    assert_eq!(result.matched_positions.len(), 1);
    assert_eq!(hex::encode(encode_proof(&result.proof)), BLOCK_1268825.encoded);
}

// =============================================================================
// BLOOM FILTER
// =============================================================================

#[test]
fn test_coinbase_only_block_with_filter() {
    let header = header_from_hex(COINBASE_ONLY_HEADER);
    // single transaction: the coinbase txid is the merkle root
    let block = Block::new(header, vec![header.merkle_root()]);

    let mut filter = TxBloomFilter::new(10, 0, 0.000001);
    filter.insert_hash(
        &parse_txid("63194f18be0af63f2c6bc9dc0f777cbefed3d9415c4af83f3ee3a3d669c00cb5").unwrap(),
    );

    let result = new_merkle_block_with_filter(&block, &filter).unwrap();
    assert_eq!(result.matched_positions, vec![0]);
    assert_eq!(hex::encode(encode_proof(&result.proof)), COINBASE_ONLY_ENCODED);
    assert!(result.proof.verify_against_header().unwrap());
}

#[test]
fn test_filter_without_matches_reveals_only_root() {
    let header = header_from_hex(COINBASE_ONLY_HEADER);
    let block = Block::new(header, vec![header.merkle_root()]);

    let mut filter = TxBloomFilter::new(10, 0, 0.000001);
    filter.insert(b"nothing in this block");

    let result = new_merkle_block_with_filter(&block, &filter).unwrap();
    assert!(result.matched_positions.is_empty());
    assert_eq!(result.proof.hashes, vec![header.merkle_root()]);
    assert_eq!(result.proof.flags, vec![0x00]);
}

// =============================================================================
// TAMPERING
// =============================================================================

#[test]
fn test_tampered_hash_breaks_header_root() {
    let mut bytes = hex::decode(BLOCK_1253848.encoded).unwrap();
    // first hash starts after header (80), count (4) and compact size (1)
    bytes[85] ^= 0x01;

    let proof = decode_proof(&bytes).unwrap();
    assert!(!proof.verify_against_header().unwrap());
}

#[test]
fn test_truncated_reference_encoding_rejected() {
    let bytes = hex::decode(BLOCK_1268830.encoded).unwrap();
    assert!(decode_proof(&bytes[..bytes.len() - 1]).is_err());
}
