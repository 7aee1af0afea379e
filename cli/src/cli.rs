//! # CLI Interface
//!
//! Command-line argument structure for `nyzo`, built with `clap` derive.
//! Every subcommand is a pure transformation: strings and hex in, strings
//! or JSON out on stdout.

use clap::{Args, Parser, Subcommand};

use nyzo_protocol::encoding::NyzoStringPrefix;

use crate::logging::LogFormat;

/// Nyzo string and transaction tool.
///
/// Generates keys, converts between Nyzo strings and raw bytes, and builds
/// signed transactions offline. Nothing is sent over the network.
#[derive(Parser, Debug)]
#[command(name = "nyzo", about = "Nyzo string and transaction tool", version, propagate_version = true)]
pub struct NyzoCli {
    /// Log output format.
    #[arg(long, global = true, env = "NYZO_LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,

    /// Log filter directives, e.g. `debug` or `nyzo_protocol=trace`.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, global = true, env = "NYZO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random private seed and print its key and identifier.
    Keygen,
    /// Print the public identifier for a private key string.
    Identifier(IdentifierArgs),
    /// Frame hex content as a Nyzo string.
    Encode(EncodeArgs),
    /// Unframe any Nyzo string and print its prefix and content.
    Decode(DecodeArgs),
    /// Build a prefilled-data (`pre_`) string for a payment request.
    Prefill(PrefillArgs),
    /// Build and sign a transaction, printing its `tx__` string.
    Send(SendArgs),
    /// Decode a `tx__` string and print its fields as JSON.
    Inspect(InspectArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for `identifier`.
#[derive(Args, Debug)]
pub struct IdentifierArgs {
    /// Private key string (`key_...`).
    #[arg(env = "NYZO_PRIVATE_KEY", hide_env_values = true)]
    pub key: String,
}

/// Arguments for `encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Prefix to frame with: key, id, pre, tx, pay or sig.
    #[arg(long, short)]
    pub prefix: NyzoStringPrefix,

    /// Content as hex, at most 255 bytes.
    pub content: String,
}

/// Arguments for `decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Any Nyzo string.
    pub text: String,
}

/// Arguments for `prefill`.
#[derive(Args, Debug)]
pub struct PrefillArgs {
    /// Receiver identifier (`id__...`).
    pub receiver: String,

    /// Sender data: plain text or a normalized `X(...)` string.
    #[arg(long, default_value = "")]
    pub sender_data: String,

    /// Requested amount in nyzos, e.g. `1.5`.
    #[arg(long)]
    pub amount: Option<String>,
}

/// Arguments for `send`.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Sender private key string (`key_...`).
    #[arg(long, env = "NYZO_PRIVATE_KEY", hide_env_values = true)]
    pub key: String,

    /// Receiver identifier (`id__...`) or prefilled-data string (`pre_...`).
    pub receiver: String,

    /// Amount in nyzos, e.g. `1.5`. Required unless the receiver is a
    /// `pre_` string carrying an amount.
    #[arg(long)]
    pub amount: Option<String>,

    /// Sender data: plain text or a normalized `X(...)` string.
    #[arg(long)]
    pub sender_data: Option<String>,

    /// Height of the block the transaction is anchored to.
    #[arg(long, default_value_t = 0)]
    pub previous_height: i64,

    /// Hash (hex) of the block at `--previous-height`. Defaults to genesis.
    #[arg(long)]
    pub previous_block_hash: Option<String>,

    /// Timestamp in milliseconds since the Unix epoch. Defaults to now.
    #[arg(long)]
    pub timestamp: Option<i64>,
}

/// Arguments for `inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Transaction string (`tx__...`).
    pub text: String,

    /// Hash (hex) of the anchor block, used to check the signature.
    /// Defaults to genesis.
    #[arg(long)]
    pub previous_block_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        NyzoCli::command().debug_assert();
    }

    #[test]
    fn parses_send_with_defaults() {
        let cli = NyzoCli::try_parse_from([
            "nyzo",
            "send",
            "--key",
            "key_89TyJqVM_mGxLFha.9bJbch4itmGvR9G6o0ZI0ctIE.x4IUN1UTB",
            "id__83T05-fFgWCrBItaGSSswIQtD2RfbJinAc3dmw4H.6pcpinVaiNb",
            "--amount",
            "1.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Send(args) => {
                assert_eq!(args.amount.as_deref(), Some("1.5"));
                assert_eq!(args.previous_height, 0);
                assert!(args.previous_block_hash.is_none());
                assert!(args.timestamp.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn encode_accepts_short_and_full_prefixes() {
        for (flag, expected) in [("tx", NyzoStringPrefix::Transaction), ("id__", NyzoStringPrefix::PublicIdentifier)] {
            let cli = NyzoCli::try_parse_from(["nyzo", "encode", "--prefix", flag, "00"]).unwrap();
            match cli.command {
                Commands::Encode(args) => assert_eq!(args.prefix, expected),
                other => panic!("unexpected command {other:?}"),
            }
        }
        assert!(NyzoCli::try_parse_from(["nyzo", "encode", "--prefix", "xyz", "00"]).is_err());
    }

    #[test]
    fn log_format_is_global() {
        let cli = NyzoCli::try_parse_from(["nyzo", "keygen", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
