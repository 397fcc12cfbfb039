use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::mpsc;

use dns_wire::{Header, Question, RecordData, ResourceRecord, Unpacker};
use query_types::{Handler, NameQuery, QType};

use crate::resolve::Transport;
use crate::walker::{self, Mechanism};
use crate::LookupError;

enum ActorMessage {
    Lookup {
        query: NameQuery,
        handler: Handler,
    },
    Answer {
        query: NameQuery,
        handler: Handler,
        outcome: Result<Bytes, LookupError>,
    },
}

/// Owns every pending query. Answers re-enter through the same mailbox,
/// so handler runs are strictly sequential and lookups submitted by a
/// handler are just more queue entries, not a deeper call stack.
///
/// There is no memo of names already queried and no depth bound: a policy
/// graph with shared or cyclic include/redirect edges is re-resolved edge
/// by edge, exactly as encountered. Known limitation, inherited behavior.
pub struct Actor {
    receiver: mpsc::UnboundedReceiver<ActorMessage>,
    self_handle: ActorHandle,

    transport: Arc<dyn Transport>,
    sink: mpsc::UnboundedSender<String>,
    pending: usize,
}

impl Actor {
    pub fn new(
        transport: Arc<dyn Transport>,
        sink: mpsc::UnboundedSender<String>,
    ) -> (ActorHandle, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = ActorHandle { sender };
        let actor = Self {
            receiver,
            self_handle: handle.clone(),
            transport,
            sink,
            pending: 0,
        };

        (handle, actor)
    }

    /// Process messages until no query remains pending.
    ///
    /// The only error is a failed submission: the environment itself
    /// cannot resolve, so the whole run is abandoned.
    pub async fn run(mut self) -> Result<(), LookupError> {
        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg)?;
            if self.pending == 0 {
                break;
            }
        }

        Ok(())
    }

    fn handle_message(&mut self, msg: ActorMessage) -> Result<(), LookupError> {
        match msg {
            ActorMessage::Lookup { query, handler } => {
                self.lookup(query, handler);
                Ok(())
            }
            ActorMessage::Answer {
                query,
                handler,
                outcome,
            } => {
                self.pending -= 1;
                match outcome {
                    Ok(bytes) => {
                        self.dispatch_answer(&bytes, handler);
                        Ok(())
                    }
                    // a negative answer is an empty one
                    Err(LookupError::NoData) => Ok(()),
                    Err(e @ LookupError::Submit(_)) => Err(e),
                    Err(e) => {
                        // best effort: a failed branch yields no addresses
                        tracing::debug!("{} lookup of {} failed: {}", query.q_type, query.name, e);
                        Ok(())
                    }
                }
            }
        }
    }

    fn lookup(&mut self, query: NameQuery, handler: Handler) {
        tracing::debug!("DNS query, {:?}", query);
        self.pending += 1;

        let transport = Arc::clone(&self.transport);
        let self_handle = self.self_handle.clone();
        tokio::spawn(async move {
            let outcome = transport.lookup(query.name.as_str(), query.q_type).await;
            self_handle.deliver(query, handler, outcome);
        });
    }

    fn dispatch_answer(&mut self, answer: &[u8], handler: Handler) {
        let mut up = Unpacker::new(answer);

        let header = match Header::parse(&mut up) {
            Ok(h) => h,
            Err(e) => {
                tracing::debug!("unusable answer: {}", e);
                return;
            }
        };
        // one question went out, one comes back; nothing behind a question
        // that fails to parse can be positioned
        if Question::parse(&mut up).is_err() {
            return;
        }

        for _ in 0..header.ancount {
            match ResourceRecord::parse(&mut up) {
                Ok(record) => self.dispatch_record(&record, handler),
                Err(e) => {
                    tracing::debug!("bad record in answer: {}", e);
                    break;
                }
            }
        }
    }

    /// Run one decoded record through its continuation. Records whose
    /// payload does not match the continuation's expected shape are
    /// dropped here, which also keeps non-IN addresses (decoded opaque)
    /// out of the output.
    fn dispatch_record(&mut self, record: &ResourceRecord, handler: Handler) {
        match handler {
            Handler::SpfTxt => self.walk_policy(record),
            Handler::MailExchanger => {
                if let RecordData::Mx { exchange, .. } = &record.data {
                    let host = strip_rendered_dot(exchange.to_dotted());
                    self.lookup(NameQuery::new(&host, QType::A), Handler::Address4);
                    self.lookup(NameQuery::new(&host, QType::Aaaa), Handler::Address6);
                }
            }
            Handler::Address4 => {
                if let RecordData::A(addr) = &record.data {
                    self.emit(addr.to_string());
                }
            }
            Handler::Address6 => {
                if let RecordData::Aaaa(addr) = &record.data {
                    self.emit(addr.to_string());
                }
            }
        }
    }

    fn walk_policy(&mut self, record: &ResourceRecord) {
        let raw = match &record.data {
            RecordData::Other(raw) => *raw,
            _ => return,
        };

        let text = strip_rendered_dot(dns_wire::render_text(raw));
        let mechanisms = match walker::spf_mechanisms(&text) {
            Some(mechanisms) => mechanisms,
            None => return,
        };

        for mechanism in mechanisms {
            match mechanism {
                Mechanism::Ip4(addr) | Mechanism::Ip6(addr) => self.emit(addr.to_string()),
                Mechanism::Include(name) | Mechanism::Redirect(name) => {
                    self.lookup(NameQuery::new(name, QType::Txt), Handler::SpfTxt);
                }
                Mechanism::Mx => {
                    let owner = pop_terminator(record.name.to_dotted());
                    self.lookup(NameQuery::new(&owner, QType::Mx), Handler::MailExchanger);
                }
                Mechanism::A => {
                    let owner = pop_terminator(record.name.to_dotted());
                    self.lookup(NameQuery::new(&owner, QType::A), Handler::Address4);
                    self.lookup(NameQuery::new(&owner, QType::Aaaa), Handler::Address6);
                }
            }
        }
    }

    fn emit(&self, address: String) {
        let _ = self.sink.send(address);
    }
}

#[derive(Clone)]
pub struct ActorHandle {
    sender: mpsc::UnboundedSender<ActorMessage>,
}

impl ActorHandle {
    /// Submit a lookup. Answers flow back into the actor, never to the
    /// caller; submission itself cannot block.
    pub fn lookup(&self, query: NameQuery, handler: Handler) {
        let _ = self.sender.send(ActorMessage::Lookup { query, handler });
    }

    fn deliver(&self, query: NameQuery, handler: Handler, outcome: Result<Bytes, LookupError>) {
        let _ = self.sender.send(ActorMessage::Answer {
            query,
            handler,
            outcome,
        });
    }
}

/// Undo the fully-qualified rendering: drop the dot the renderer appends,
/// then one literal trailing dot if the data itself ended with one.
fn strip_rendered_dot(mut text: String) -> String {
    text.pop();
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Owner names only lose the rendered terminator.
fn pop_terminator(mut name: String) -> String {
    name.pop();
    name
}
