use byteorder::{WriteBytesExt, BE};

use crate::name::Name;
use crate::unpack::Unpacker;
use crate::{WireError, CLASS_IN};

#[derive(Debug)]
pub struct Question {
    pub name: Name,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(domain: &str, qtype: u16) -> Self {
        Self {
            name: Name::from_dotted(domain),
            qtype,
            qclass: CLASS_IN,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> std::io::Result<()> {
        self.name.to_bytes(bytes);
        bytes.write_u16::<BE>(self.qtype)?;
        bytes.write_u16::<BE>(self.qclass)?;

        Ok(())
    }

    pub fn parse(up: &mut Unpacker) -> Result<Self, WireError> {
        Ok(Self {
            name: up.read_name()?,
            qtype: up.read_u16()?,
            qclass: up.read_u16()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TYPE_TXT;

    #[test]
    fn question_round_trips() {
        let mut bytes: Vec<u8> = vec![];
        Question::new("example.com", TYPE_TXT).to_bytes(&mut bytes).unwrap();

        let q = Question::parse(&mut Unpacker::new(&bytes)).unwrap();

        assert_eq!(q.name.to_dotted(), "example.com.");
        assert_eq!(q.qtype, TYPE_TXT);
        assert_eq!(q.qclass, CLASS_IN);
    }
}
