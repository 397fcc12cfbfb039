// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1

mod error;
mod header;
mod name;
mod question;
mod resource_record;
mod unpack;

pub use error::WireError;
pub use header::Header;
pub use name::{render_text, Name, MAX_NAME_LEN};
pub use question::Question;
pub use resource_record::{RecordData, ResourceRecord};
pub use unpack::Unpacker;

pub const CLASS_IN: u16 = 1;

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_SOA: u16 = 6;
pub const TYPE_PTR: u16 = 12;
pub const TYPE_MX: u16 = 15;
pub const TYPE_TXT: u16 = 16;
pub const TYPE_AAAA: u16 = 28;

/// Encode one query message: a header with RD set and a single IN question.
pub fn encode_query(domain: &str, qtype: u16, id: u16) -> std::io::Result<Vec<u8>> {
    let mut bytes: Vec<u8> = vec![];
    Header::query(id).to_bytes(&mut bytes)?;
    Question::new(domain, qtype).to_bytes(&mut bytes)?;

    Ok(bytes)
}
