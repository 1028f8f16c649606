use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use pathwire_core::base58::{decode_uint_bytes, encode_uint};
use pathwire_core::identity::message_id;
use tracing::{debug, trace};

use crate::compression::{negotiate, Decompress, Identity};
use crate::error::{DecodeError, FrameError};
use crate::frame::{encode_fields, encode_fields_sizeless, split_fields, strip_size_header, LEN_PREFIX};

/// Number of packets preceding the payload: type, sender, id, timestamp.
pub const HEADER_PACKETS: usize = 4;

/// Current UTC time in whole seconds.
pub fn now_utc() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// A pathfinding message: routing flag, sender, timestamp, and payload fields.
///
/// Envelopes are immutable. The id and the serialized form are computed on
/// first access and stored, so they can never go stale.
#[derive(Debug, Clone)]
pub struct MessageEnvelope {
    msg_type: Bytes,
    sender: Bytes,
    timestamp: u64,
    payload: Vec<Bytes>,
    /// Local metadata; never hashed nor written to the wire.
    compression: Vec<Bytes>,
    id: OnceLock<Bytes>,
    serialized: OnceLock<Bytes>,
}

impl MessageEnvelope {
    /// Builds a message stamped with the current time.
    pub fn new<P>(msg_type: impl Into<Bytes>, sender: impl Into<Bytes>, payload: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Bytes>,
    {
        Self::with_timestamp(msg_type, sender, payload, now_utc())
    }

    /// Builds a message with an explicit timestamp.
    pub fn with_timestamp<P>(
        msg_type: impl Into<Bytes>,
        sender: impl Into<Bytes>,
        payload: P,
        timestamp: u64,
    ) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Bytes>,
    {
        Self {
            msg_type: msg_type.into(),
            sender: sender.into(),
            timestamp,
            payload: payload.into_iter().map(Into::into).collect(),
            compression: Vec::new(),
            id: OnceLock::new(),
            serialized: OnceLock::new(),
        }
    }

    /// Builds a message stamped with the current time that may be compressed
    /// with any of `compression`, in order of preference.
    pub fn with_compression<P, C>(
        msg_type: impl Into<Bytes>,
        sender: impl Into<Bytes>,
        payload: P,
        compression: C,
    ) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Bytes>,
        C: IntoIterator,
        C::Item: Into<Bytes>,
    {
        let mut msg = Self::new(msg_type, sender, payload);
        msg.compression = compression.into_iter().map(Into::into).collect();
        msg
    }

    pub fn msg_type(&self) -> &Bytes {
        &self.msg_type
    }

    pub fn sender(&self) -> &Bytes {
        &self.sender
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn payload(&self) -> &[Bytes] {
        &self.payload
    }

    pub fn compression(&self) -> &[Bytes] {
        &self.compression
    }

    /// First method of this message's compression list that `supported`
    /// also offers.
    pub fn compression_used(&self, supported: &[Bytes]) -> Option<&Bytes> {
        negotiate(&self.compression, supported)
    }

    /// Timestamp rendered in base-58, as carried on the wire.
    pub fn time_58(&self) -> String {
        encode_uint(self.timestamp)
    }

    /// Message id, derived from payload and timestamp only.
    pub fn id(&self) -> &Bytes {
        self.id.get_or_init(|| {
            trace!(
                fields = self.payload.len(),
                timestamp = self.timestamp,
                "computing message id"
            );
            Bytes::from(message_id(&self.payload, self.timestamp))
        })
    }

    /// The id if it has already been computed or verified.
    pub fn cached_id(&self) -> Option<&Bytes> {
        self.id.get()
    }

    /// Packets in wire order: type, sender, id, base-58 timestamp, payload.
    pub fn packets(&self) -> Vec<Bytes> {
        let mut packets = Vec::with_capacity(HEADER_PACKETS + self.payload.len());
        packets.push(self.msg_type.clone());
        packets.push(self.sender.clone());
        packets.push(self.id().clone());
        packets.push(Bytes::from(self.time_58()));
        packets.extend(self.payload.iter().cloned());
        packets
    }

    /// Framed packets without the outer size header.
    pub fn base_string(&self) -> Result<Bytes, FrameError> {
        encode_fields_sizeless(&self.packets())
    }

    /// Full wire form, including the 4-byte size header.
    ///
    /// Fails only when a packet is longer than a 4-byte prefix can describe.
    pub fn serialize(&self) -> Result<Bytes, FrameError> {
        if let Some(serialized) = self.serialized.get() {
            return Ok(serialized.clone());
        }
        let encoded = encode_fields(&self.packets())?;
        Ok(self.serialized.get_or_init(|| encoded).clone())
    }

    /// Length of the framed packets, excluding the size header.
    pub fn length(&self) -> usize {
        self.packets()
            .iter()
            .map(|packet| LEN_PREFIX + packet.len())
            .sum()
    }

    /// The 4-byte size header that precedes the framed packets.
    pub fn header(&self) -> Result<[u8; 4], FrameError> {
        let len = self.length();
        let len = u32::try_from(len).map_err(|_| FrameError::Overflow { len })?;
        Ok(len.to_be_bytes())
    }

    /// Parses and verifies a serialized message.
    pub fn deserialize(buffer: &[u8], sizeless: bool) -> Result<Self, DecodeError> {
        Self::deserialize_with(buffer, sizeless, &[], &Identity)
    }

    /// Parses and verifies a serialized message that may be compressed.
    ///
    /// The size header (unless `sizeless`) describes the bytes as received.
    /// `decompressor` runs on the remaining body before frames are split, and
    /// only with the methods of `compression` it supports, in `compression`'s
    /// order; with none in common the body is read as is. The returned
    /// envelope carries `compression` as its method list.
    pub fn deserialize_with(
        buffer: &[u8],
        sizeless: bool,
        compression: &[Bytes],
        decompressor: &dyn Decompress,
    ) -> Result<Self, DecodeError> {
        let body = if sizeless {
            buffer
        } else {
            strip_size_header(buffer).map_err(|err| {
                debug!(len = buffer.len(), error = %err, "rejecting message with bad size header");
                err
            })?
        };

        let mut body = Bytes::copy_from_slice(body);
        let usable = usable_methods(compression, decompressor.supported());
        if !usable.is_empty() {
            body = decompressor.decompress(body, &usable)?;
        } else if !compression.is_empty() {
            debug!(
                offered = compression.len(),
                "no offered compression method is supported; reading body as is"
            );
        }

        let mut fields = split_fields(body).map_err(|err| {
            debug!(error = %err, "rejecting message with malformed frames");
            err
        })?;
        if fields.len() < HEADER_PACKETS {
            debug!(found = fields.len(), "rejecting message with too few packets");
            return Err(DecodeError::TooFewFields {
                found: fields.len(),
            });
        }

        let payload = fields.split_off(HEADER_PACKETS);
        let [msg_type, sender, claimed_id, time_58]: [Bytes; HEADER_PACKETS] = fields
            .try_into()
            .map_err(|rest: Vec<Bytes>| DecodeError::TooFewFields { found: rest.len() })?;

        let timestamp = decode_uint_bytes(&time_58)?;
        let computed = message_id(&payload, timestamp);
        if computed.as_bytes() != claimed_id.as_ref() {
            let claimed = String::from_utf8_lossy(&claimed_id).into_owned();
            debug!(%claimed, %computed, "rejecting message with mismatched id");
            return Err(DecodeError::IdentityMismatch { claimed, computed });
        }

        Ok(Self {
            msg_type,
            sender,
            timestamp,
            payload,
            compression: compression.to_vec(),
            id: OnceLock::from(claimed_id),
            serialized: OnceLock::new(),
        })
    }
}

/// Entries of `offered` that `supported` also lists, in `offered`'s order.
fn usable_methods(offered: &[Bytes], supported: &[Bytes]) -> Vec<Bytes> {
    offered
        .iter()
        .filter(|method| supported.contains(method))
        .cloned()
        .collect()
}

impl PartialEq for MessageEnvelope {
    fn eq(&self, other: &Self) -> bool {
        self.msg_type == other.msg_type
            && self.sender == other.sender
            && self.timestamp == other.timestamp
            && self.payload == other.payload
            && self.compression == other.compression
    }
}

impl Eq for MessageEnvelope {}
