use bytes::Bytes;
use pathwire_codec::config::{ConfigError, SubnetConfig};
use pathwire_codec::error::{DecodeError, FrameError};
use pathwire_codec::message::MessageEnvelope;
use pathwire_core::base58::{decode_uint, encode_bytes, encode_uint};
use pathwire_core::error::Base58Error;
use thiserror::Error;
use tracing::{debug, info};

use crate::{Base58Commands, Commands};

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("invalid hex in {what}: {source}")]
    Hex {
        what: &'static str,
        #[source]
        source: hex::FromHexError,
    },
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Base58(#[from] Base58Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn parse_hex(what: &'static str, input: &str) -> Result<Vec<u8>, CliError> {
    hex::decode(input.trim()).map_err(|source| CliError::Hex { what, source })
}

pub(crate) fn run(command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Encode {
            msg_type,
            sender,
            timestamp,
            sizeless,
            hex_payload,
            payload,
        } => {
            let msg_type = parse_hex("message type", &msg_type)?;
            let payload = payload
                .iter()
                .map(|field| {
                    if hex_payload {
                        parse_hex("payload", field).map(Bytes::from)
                    } else {
                        Ok(Bytes::from(field.clone()))
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            encode(msg_type, sender, payload, timestamp, sizeless)
        }
        Commands::Decode { sizeless, message } => {
            let wire = parse_hex("message", &message)?;
            decode(&wire, sizeless)
        }
        Commands::SubnetId {
            config,
            subnet,
            encryption,
            major,
            minor,
        } => {
            let mut cfg = match config {
                Some(path) => {
                    info!("loading subnet config from {}", path.display());
                    SubnetConfig::load(path)?
                }
                None => SubnetConfig::default(),
            };
            if let Some(subnet) = subnet {
                cfg.subnet = subnet;
            }
            if let Some(encryption) = encryption {
                cfg.encryption = encryption;
            }
            if let Some(major) = major {
                cfg.version.major = major;
            }
            if let Some(minor) = minor {
                cfg.version.minor = minor;
            }
            Ok(cfg.into_subnet().id().to_string())
        }
        Commands::Base58 { action } => match action {
            Base58Commands::EncodeInt { value } => Ok(encode_uint(value)),
            Base58Commands::DecodeInt { text } => Ok(decode_uint(&text)?.to_string()),
            Base58Commands::EncodeHex { hex, min_digits } => {
                let bytes = parse_hex("input", &hex)?;
                Ok(encode_bytes(&bytes, min_digits))
            }
        },
    }
}

fn encode(
    msg_type: Vec<u8>,
    sender: String,
    payload: Vec<Bytes>,
    timestamp: Option<u64>,
    sizeless: bool,
) -> Result<String, CliError> {
    let msg = match timestamp {
        Some(ts) => MessageEnvelope::with_timestamp(msg_type, sender, payload, ts),
        None => MessageEnvelope::new(msg_type, sender, payload),
    };
    debug!(
        timestamp = msg.timestamp(),
        fields = msg.payload().len(),
        "encoding message"
    );
    let wire = if sizeless {
        msg.base_string()?
    } else {
        msg.serialize()?
    };
    Ok(hex::encode(wire))
}

fn decode(wire: &[u8], sizeless: bool) -> Result<String, CliError> {
    let msg = MessageEnvelope::deserialize(wire, sizeless)?;
    let mut lines = vec![
        format!("type: {}", hex::encode(msg.msg_type())),
        format!("sender: {}", String::from_utf8_lossy(msg.sender())),
        format!("id: {}", String::from_utf8_lossy(msg.id())),
        format!("timestamp: {} ({})", msg.timestamp(), msg.time_58()),
    ];
    lines.extend(
        msg.payload()
            .iter()
            .enumerate()
            .map(|(i, field)| format!("payload[{i}]: {}", hex::encode(field))),
    );
    Ok(lines.join("\n"))
}
