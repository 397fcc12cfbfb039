use byteorder::{WriteBytesExt, BE};

use crate::unpack::Unpacker;
use crate::WireError;

// 12 bytes
#[derive(Debug)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Header for an outgoing single-question query.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: 0x0100, // rd = 1, let the server recurse
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> std::io::Result<()> {
        bytes.write_u16::<BE>(self.id)?;
        bytes.write_u16::<BE>(self.flags)?;
        bytes.write_u16::<BE>(self.qdcount)?;
        bytes.write_u16::<BE>(self.ancount)?;
        bytes.write_u16::<BE>(self.nscount)?;
        bytes.write_u16::<BE>(self.arcount)?;

        Ok(())
    }

    pub fn parse(up: &mut Unpacker) -> Result<Self, WireError> {
        Ok(Self {
            id: up.read_u16()?,
            flags: up.read_u16()?,
            qdcount: up.read_u16()?,
            ancount: up.read_u16()?,
            nscount: up.read_u16()?,
            arcount: up.read_u16()?,
        })
    }
}
