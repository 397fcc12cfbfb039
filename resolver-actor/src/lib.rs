mod actor;
mod error;
mod resolve;
mod walker;

pub use actor::{Actor, ActorHandle};
pub use error::LookupError;
pub use resolve::{Transport, UdpTransport};
