//! Transport layer: XML wire-format details (packet serialization, response parsing).

mod packet;
mod response;

pub use packet::{PACKET_FIELD, encode_packet};
pub use response::decode_response;

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("failed to write request packet: {0}")]
    Write(#[from] std::io::Error),

    #[error("request packet is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid XML response: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("response root <{root}> has no <data> element")]
    MissingData { root: String },
}
