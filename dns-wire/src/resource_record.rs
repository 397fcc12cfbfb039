use std::net::{Ipv4Addr, Ipv6Addr};

use crate::name::Name;
use crate::unpack::Unpacker;
use crate::{WireError, CLASS_IN, TYPE_A, TYPE_AAAA, TYPE_CNAME, TYPE_MX, TYPE_NS, TYPE_PTR, TYPE_SOA};

/// Payload of one resource record, keyed by the decoded type code.
///
/// `Other` borrows the answer buffer instead of copying; it is only valid
/// for the decode pass that produced it. A and AAAA decode an address only
/// for class IN, any other class falls through to `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData<'a> {
    Cname(Name),
    Mx { preference: u16, exchange: Name },
    Ns(Name),
    Ptr(Name),
    Soa {
        mname: Name,
        rname: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Other(&'a [u8]),
}

#[derive(Debug)]
pub struct ResourceRecord<'a> {
    pub name: Name,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub data: RecordData<'a>,
}

impl<'a> ResourceRecord<'a> {
    pub fn parse(up: &mut Unpacker<'a>) -> Result<Self, WireError> {
        let name = up.read_name()?;
        let rtype = up.read_u16()?;
        let rclass = up.read_u16()?;
        let ttl = up.read_u32()?;
        let rdlength = up.read_u16()? as usize;

        if up.remaining() < rdlength {
            return Err(WireError::Truncated);
        }

        let data_start = up.offset();
        let data = match rtype {
            TYPE_CNAME => RecordData::Cname(up.read_name()?),
            TYPE_MX => RecordData::Mx {
                preference: up.read_u16()?,
                exchange: up.read_name()?,
            },
            TYPE_NS => RecordData::Ns(up.read_name()?),
            TYPE_PTR => RecordData::Ptr(up.read_name()?),
            TYPE_SOA => RecordData::Soa {
                mname: up.read_name()?,
                rname: up.read_name()?,
                serial: up.read_u32()?,
                refresh: up.read_u32()?,
                retry: up.read_u32()?,
                expire: up.read_u32()?,
                minimum: up.read_u32()?,
            },
            TYPE_A if rclass == CLASS_IN => RecordData::A(up.read_ipv4()?),
            TYPE_AAAA if rclass == CLASS_IN => RecordData::Aaaa(up.read_ipv6()?),
            _ => RecordData::Other(up.read(rdlength)?),
        };

        // the payload must use exactly the advertised rdlength
        if up.offset() - data_start != rdlength {
            return Err(WireError::LengthMismatch);
        }

        Ok(Self {
            name,
            rtype,
            rclass,
            ttl,
            data,
        })
    }
}
