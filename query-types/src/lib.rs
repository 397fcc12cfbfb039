use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QType {
    Txt,
    Mx,
    A,
    Aaaa,
}

impl QType {
    /// RFC 1035 / RFC 3596 type codes.
    pub fn code(self) -> u16 {
        match self {
            QType::A => 1,
            QType::Mx => 15,
            QType::Txt => 16,
            QType::Aaaa => 28,
        }
    }
}

impl fmt::Display for QType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            QType::Txt => "TXT",
            QType::Mx => "MX",
            QType::A => "A",
            QType::Aaaa => "AAAA",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NameQuery {
    pub name: String,
    pub q_type: QType,
}

impl NameQuery {
    pub fn new(name: &str, q_type: QType) -> Self {
        Self {
            name: String::from(name),
            q_type,
        }
    }
}

/// What to do with each answer record of a pending query.
///
/// A pending query carries one of these tags instead of a function
/// pointer, so the recursive fan-out stays a queue of (query, handler)
/// pairs rather than a call stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Handler {
    /// Walk the SPF policy in a TXT answer.
    SpfTxt,
    /// Chase an MX exchange down to its addresses.
    MailExchanger,
    /// Emit an IPv4 address.
    Address4,
    /// Emit an IPv6 address.
    Address6,
}
