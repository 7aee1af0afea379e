// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Nyzo Command-Line Tool
//!
//! Entry point for the `nyzo` binary. Parses arguments, initializes logging
//! and dispatches to a subcommand. Each subcommand renders its output as a
//! `String` that `main` prints, so the handlers stay testable.

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;

use nyzo_protocol::amount::{display_amount, micronyzos_from_str, validate_micronyzos};
use nyzo_protocol::config::GENESIS_BLOCK_HASH;
use nyzo_protocol::encoding::{decode_strict, detect_prefix, encode, NyzoStringPayload, NyzoStringPrefix};
use nyzo_protocol::identity::{PrefilledData, PrivateSeed, PublicIdentifier};
use nyzo_protocol::sender_data::{normalized_sender_data_string, parse_sender_data};
use nyzo_protocol::transaction::Transaction;

use cli::{Commands, NyzoCli};

fn main() -> Result<()> {
    let cli = NyzoCli::parse();
    logging::init_logging(cli.log_level.as_deref(), cli.log_format);

    let output = match cli.command {
        Commands::Keygen => keygen(),
        Commands::Identifier(args) => identifier(&args),
        Commands::Encode(args) => encode_content(&args),
        Commands::Decode(args) => decode_string(&args),
        Commands::Prefill(args) => prefill(&args),
        Commands::Send(args) => send(&args, chrono::Utc::now().timestamp_millis()),
        Commands::Inspect(args) => inspect(&args),
        Commands::Version => Ok(version()),
    }?;

    println!("{output}");
    Ok(())
}

fn keygen() -> Result<String> {
    let seed = PrivateSeed::generate();
    let identifier = seed.public_identifier();
    tracing::info!(%identifier, "generated new private seed");

    Ok(format!(
        "private key: {}\nidentifier:  {}",
        seed.to_nyzo_string().context("failed to encode private key")?,
        identifier
    ))
}

fn identifier(args: &cli::IdentifierArgs) -> Result<String> {
    Ok(parse_private_key(&args.key)?.public_identifier().to_string())
}

fn encode_content(args: &cli::EncodeArgs) -> Result<String> {
    let content = hex::decode(args.content.trim()).context("content is not valid hex")?;
    encode(args.prefix, &content)
        .with_context(|| format!("failed to encode {} bytes as {}", content.len(), args.prefix))
}

fn decode_string(args: &cli::DecodeArgs) -> Result<String> {
    let content = decode_strict(&args.text).context("not a valid nyzo string")?;
    let prefix = detect_prefix(&args.text)
        .map(|prefix| prefix.as_str().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    Ok(format!(
        "prefix:  {prefix}\nlength:  {}\ncontent: {}",
        content.len(),
        hex::encode(&content)
    ))
}

fn prefill(args: &cli::PrefillArgs) -> Result<String> {
    let receiver = parse_identifier(&args.receiver)?;
    let amount = match &args.amount {
        Some(text) => parse_amount(text)?,
        None => 0,
    };
    let data = PrefilledData::new(receiver, &parse_sender_data(&args.sender_data), amount);
    data.to_nyzo_string()
        .context("failed to encode prefilled data")
}

fn send(args: &cli::SendArgs, now_millis: i64) -> Result<String> {
    let seed = parse_private_key(&args.key)?;

    // A prefilled-data string supplies defaults for everything but the key.
    let (receiver, mut sender_data, mut amount) = match detect_prefix(&args.receiver) {
        Some(NyzoStringPrefix::PrefilledData) => {
            let prefilled = PrefilledData::from_nyzo_string(&args.receiver)
                .context("failed to decode prefilled data")?
                .context("not a valid prefilled-data string")?;
            let amount = prefilled
                .amount()
                .map(validate_micronyzos)
                .transpose()
                .context("prefilled-data amount not allowed")?;
            (*prefilled.receiver(), prefilled.sender_data().to_vec(), amount)
        }
        _ => (parse_identifier(&args.receiver)?, Vec::new(), None),
    };
    if let Some(text) = &args.sender_data {
        sender_data = parse_sender_data(text);
    }
    if let Some(text) = &args.amount {
        amount = Some(parse_amount(text)?);
    }
    let Some(amount) = amount else {
        bail!("--amount is required unless the receiver string carries one");
    };

    let mut tx = Transaction::new();
    tx.set_timestamp(args.timestamp.unwrap_or(now_millis));
    tx.set_amount(amount);
    tx.set_recipient_identifier(receiver.as_bytes())?;
    tx.set_previous_hash_height(args.previous_height);
    tx.set_previous_block_hash(&parse_block_hash(args.previous_block_hash.as_deref())?)
        .context("previous block hash must be 32 bytes")?;
    tx.set_sender_data(&sender_data);
    tx.sign(&seed.seed()).context("failed to sign transaction")?;

    tracing::info!(
        sender = %tx.sender(),
        recipient = %receiver,
        amount = %display_amount(amount),
        "signed transaction"
    );

    tx.to_nyzo_string().context("failed to encode transaction")
}

fn inspect(args: &cli::InspectArgs) -> Result<String> {
    let mut tx = Transaction::from_nyzo_string(&args.text)
        .context("failed to decode transaction")?
        .context("not a valid transaction string")?;
    tx.set_previous_block_hash(&parse_block_hash(args.previous_block_hash.as_deref())?)
        .context("previous block hash must be 32 bytes")?;

    let report = json!({
        "type": tx.tx_type(),
        "timestamp": tx.timestamp(),
        "timestamp_utc": tx.timestamp_utc().map(|t| t.to_rfc3339()),
        "amount": tx.amount(),
        "amount_display": display_amount(tx.amount()),
        "recipient": tx.recipient(),
        "sender": tx.sender(),
        "previous_hash_height": tx.previous_hash_height(),
        "previous_block_hash": hex::encode(tx.previous_block_hash()),
        "sender_data": normalized_sender_data_string(tx.sender_data()),
        "sender_data_text": std::str::from_utf8(tx.sender_data()).ok(),
        "signature": hex::encode(tx.signature()),
        "signature_valid": tx.verify_signature(),
    });

    serde_json::to_string_pretty(&report).context("failed to render transaction")
}

fn version() -> String {
    format!("nyzo {}", env!("CARGO_PKG_VERSION"))
}

// ---------------------------------------------------------------------------
// Argument parsing helpers
// ---------------------------------------------------------------------------

fn parse_private_key(text: &str) -> Result<PrivateSeed> {
    PrivateSeed::from_nyzo_string(text.trim())
        .context("failed to decode private key")?
        .context("not a valid private key string")
}

fn parse_identifier(text: &str) -> Result<PublicIdentifier> {
    PublicIdentifier::from_nyzo_string(text.trim())
        .context("failed to decode identifier")?
        .context("not a valid public identifier string")
}

fn parse_amount(text: &str) -> Result<i64> {
    let micronyzos = micronyzos_from_str(text)
        .with_context(|| format!("invalid amount {text:?}"))?;
    validate_micronyzos(micronyzos).with_context(|| format!("amount {text:?} not allowed"))
}

fn parse_block_hash(text: Option<&str>) -> Result<Vec<u8>> {
    match text {
        Some(text) => hex::decode(text.trim()).context("previous block hash is not valid hex"),
        None => Ok(GENESIS_BLOCK_HASH.to_vec()),
    }
}
