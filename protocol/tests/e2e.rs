//! End-to-end integration tests for the Nyzo client library.
//!
//! These tests run the full path a wallet takes: key strings in, a signed
//! `tx__` string out, and a receiver decoding and verifying it. Every vector
//! here is fixed, so a change to any byte layout or to the codec shows up as
//! a string mismatch.

use nyzo_protocol::amount::{display_amount, micronyzos_from_str};
use nyzo_protocol::config::GENESIS_BLOCK_HASH;
use nyzo_protocol::encoding::{decode_strict, NyzoStringPayload};
use nyzo_protocol::identity::{
    is_valid_private_key, is_valid_public_identifier, public_identifier_for_private_key,
    PrefilledData, PrivateSeed, PublicIdentifier,
};
use nyzo_protocol::sender_data::parse_sender_data;
use nyzo_protocol::transaction::{verify_transaction, Transaction, TransactionError};

// RFC 8032, section 7.1, TEST 1 and TEST 2.
const SEED_1: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
const KEY_1: &str = "key_89TyJqVM_mGxLFha.9bJbch4itmGvR9G6o0ZI0ctIE.x4IUN1UTB";
const ID_1: &str = "id__8durD062JgHVTkM~S-CB1RFeWobRUHpA9r-26DAV1T4rm386SsPW";
const KEY_2: &str = "key_84Rd29JF_XsrEss3hLNhjx.szA6wdrLD9dHc.LTfLasZJ_iYjqYT";
const ID_2: &str = "id__83T05-fFgWCrBItaGSSswIQtD2RfbJinAc3dmw4H.6pcpinVaiNb";

/// Seed 1 pays seed 2 1.5 nyzos with "hello nyzo", anchored on genesis.
const SIGNED_TX: &str = "tx__G080006bR~mF000000005Ldxfk0oN~y3zmHiKNHEjhK~M9Qpbc-LP9rcNcTm-iISqxN\
0000000002KurD062JgHVTkM~S-CB1RFeWobRUHpA9r-26DAV1T4r2DyCs6PM86XXvD-fdoT2ZByCBuMfzTVPuVFrUtzCLrM4\
HIgbJP0t0vuFQotEsjxfuB9CDEw~dN6Pjj33d-LpzfKIGXXhSvemd3p2f1qddBac";
const SIGNED_TX_SIGNATURE: &str = "0f357d42ee486591dbcf8b5df1777a1ad9c8a5b9abc4aab40bb3101c01e768c9\
77276d380f7642659a77fe3701b14d30c337cb9888fb6ba79e51d1e395343602";

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn seed(key: &str) -> PrivateSeed {
    PrivateSeed::from_nyzo_string(key)
        .expect("no hard error")
        .expect("valid key string")
}

fn identifier(id: &str) -> PublicIdentifier {
    PublicIdentifier::from_nyzo_string(id)
        .expect("no hard error")
        .expect("valid id string")
}

/// Builds the transaction behind `SIGNED_TX`.
fn build_reference_transaction() -> Transaction {
    let mut tx = Transaction::new();
    tx.set_timestamp(1_700_000_000_000);
    tx.set_amount(micronyzos_from_str("1.5").unwrap());
    tx.set_recipient_identifier(identifier(ID_2).as_bytes()).unwrap();
    tx.set_previous_hash_height(10);
    tx.set_previous_block_hash(&GENESIS_BLOCK_HASH).unwrap();
    tx.set_sender_data(&parse_sender_data("hello nyzo"));
    tx.sign(&seed(KEY_1).seed()).unwrap();
    tx
}

// ---------------------------------------------------------------------------
// Key strings
// ---------------------------------------------------------------------------

#[test]
fn rfc8032_seeds_produce_documented_strings() {
    let first = PrivateSeed::from_slice(&hex::decode(SEED_1).unwrap()).unwrap();
    assert_eq!(first.to_nyzo_string().unwrap(), KEY_1);
    assert_eq!(first.public_identifier().to_nyzo_string().unwrap(), ID_1);

    assert_eq!(public_identifier_for_private_key(KEY_2).as_deref(), Some(ID_2));
}

#[test]
fn wallet_validators() {
    for key in [KEY_1, KEY_2] {
        assert!(is_valid_private_key(key));
        assert!(!is_valid_public_identifier(key));
    }
    for id in [ID_1, ID_2] {
        assert!(is_valid_public_identifier(id));
        assert!(!is_valid_private_key(id));
    }
    assert!(!is_valid_public_identifier(SIGNED_TX));
}

#[test]
fn mistyped_identifier_is_not_an_identifier() {
    let dropped = &ID_1[..ID_1.len() - 1];
    let extra = format!("{ID_1}a");

    assert_eq!(PublicIdentifier::from_nyzo_string(dropped).unwrap(), None);
    assert_eq!(PublicIdentifier::from_nyzo_string(&extra).unwrap(), None);
    assert!(!is_valid_public_identifier(dropped));
    assert!(!is_valid_public_identifier(&extra));
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[test]
fn signed_transaction_matches_reference_string() {
    let tx = build_reference_transaction();
    assert_eq!(hex::encode(tx.signature()), SIGNED_TX_SIGNATURE);
    assert_eq!(tx.get_bytes(false).len(), 164);
    assert_eq!(tx.to_nyzo_string().unwrap(), SIGNED_TX);
}

#[test]
fn receiver_decodes_and_verifies_reference_string() {
    let mut tx = Transaction::from_nyzo_string(SIGNED_TX).unwrap().unwrap();

    assert_eq!(tx.timestamp(), 1_700_000_000_000);
    assert_eq!(display_amount(tx.amount()), "∩1.500000");
    assert_eq!(tx.recipient().to_string(), ID_2);
    assert_eq!(tx.sender().to_string(), ID_1);
    assert_eq!(tx.previous_hash_height(), 10);
    assert_eq!(tx.sender_data(), b"hello nyzo");
    assert_eq!(hex::encode(tx.signature()), SIGNED_TX_SIGNATURE);

    // The storage form carries the height only; the receiver supplies the
    // hash of the block at that height.
    assert!(matches!(
        verify_transaction(&tx),
        Err(TransactionError::InvalidSignature { .. })
    ));
    tx.set_previous_block_hash(&GENESIS_BLOCK_HASH).unwrap();
    assert_eq!(verify_transaction(&tx), Ok(()));
}

#[test]
fn full_roundtrip_reproduces_every_field() {
    let tx = build_reference_transaction();
    let parsed = Transaction::from_bytes(&tx.get_bytes(false)).unwrap();

    assert_eq!(parsed.tx_type(), tx.tx_type());
    assert_eq!(parsed.timestamp(), tx.timestamp());
    assert_eq!(parsed.amount(), tx.amount());
    assert_eq!(parsed.recipient_identifier(), tx.recipient_identifier());
    assert_eq!(parsed.previous_hash_height(), tx.previous_hash_height());
    assert_eq!(parsed.sender_identifier(), tx.sender_identifier());
    assert_eq!(parsed.sender_data(), tx.sender_data());
    assert_eq!(parsed.signature(), tx.signature());
}

#[test]
fn tampered_transaction_string_is_rejected() {
    // Flip one character in the middle of the amount field.
    let mut chars: Vec<char> = SIGNED_TX.chars().collect();
    chars[20] = if chars[20] == 'a' { 'b' } else { 'a' };
    let tampered: String = chars.into_iter().collect();
    assert_eq!(Transaction::from_nyzo_string(&tampered).unwrap(), None);
}

#[test]
fn sender_data_commitment_changes_signature() {
    let mut a = build_reference_transaction();
    let mut b = build_reference_transaction();
    a.set_sender_data(b"invoice-0001");
    b.set_sender_data(b"invoice-0002");
    a.sign(&seed(KEY_1).seed()).unwrap();
    b.sign(&seed(KEY_1).seed()).unwrap();

    assert_ne!(a.get_bytes(true), b.get_bytes(true));
    assert_ne!(a.signature(), b.signature());
}

#[test]
fn sender_data_truncates_to_32_bytes() {
    let long: Vec<u8> = (1..=64).collect();
    let short: Vec<u8> = (1..=31).collect();
    let mut tx = Transaction::new();

    tx.set_sender_data(&long);
    assert_eq!(tx.sender_data(), &long[..32]);

    tx.set_sender_data(&short);
    assert_eq!(tx.sender_data(), &short[..]);
}

// ---------------------------------------------------------------------------
// Prefilled data
// ---------------------------------------------------------------------------

#[test]
fn prefilled_data_vectors() {
    let receiver = identifier(ID_2);

    let bare = PrefilledData::new(receiver, b"", 0);
    assert_eq!(
        bare.to_nyzo_string().unwrap(),
        "pre_8jT05-fFgWCrBItaGSSswIQtD2RfbJinAc3dmw4H.6pc07JqeM67"
    );

    let full = PrefilledData::new(receiver, b"hello nyzo", 1_500_000);
    let text = full.to_nyzo_string().unwrap();
    assert_eq!(
        text,
        "pre_cRT05-fFgWCrBItaGSSswIQtD2RfbJinAc3dmw4H.6pczDyCs6PM86XXvD-0000001sApdRiW3uU"
    );

    let decoded = PrefilledData::from_nyzo_string(&text).unwrap().unwrap();
    assert_eq!(decoded.receiver().to_string(), ID_2);
    assert_eq!(decoded.sender_data(), b"hello nyzo");
    assert_eq!(decoded.amount(), Some(1_500_000));
}

#[test]
fn strict_decode_gives_raw_content() {
    let content = decode_strict(ID_1).unwrap();
    assert_eq!(hex::encode(content), identifier(ID_1).to_hex());
}
