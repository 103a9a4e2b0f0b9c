#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::{Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Sections of one scripted reply.
#[derive(Clone, Default)]
pub struct ScriptedReply {
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
}

impl ScriptedReply {
    pub fn answer(answers: Vec<Record>) -> Self {
        Self {
            answers,
            ..Self::default()
        }
    }

    pub fn referral(authority: Vec<Record>, additional: Vec<Record>) -> Self {
        Self {
            answers: Vec::new(),
            authority,
            additional,
        }
    }

    fn to_bytes(&self, query: &Message) -> Option<Vec<u8>> {
        let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
        for question in query.queries() {
            response.add_query(question.clone());
        }
        for record in &self.answers {
            response.add_answer(record.clone());
        }
        for record in &self.authority {
            response.add_name_server(record.clone());
        }
        for record in &self.additional {
            response.add_additional(record.clone());
        }

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        response.emit(&mut encoder).ok()?;
        Some(buf)
    }
}

type Handler = Box<dyn Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync>;

/// UDP nameserver on a loopback address. Queries with no scripted reply
/// are dropped, so the client sees a timeout.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Serves `zone`, keyed by (absolute owner name, query type).
    pub async fn start(
        addr: SocketAddr,
        zone: HashMap<(String, RecordType), ScriptedReply>,
    ) -> Result<Self, std::io::Error> {
        Self::start_with(
            addr,
            Box::new(move |bytes: &[u8]| {
                let query = Message::from_vec(bytes).ok()?;
                let question = query.queries().first()?;
                let key = (question.name().to_ascii(), question.query_type());
                zone.get(&key)?.to_bytes(&query)
            }),
        )
        .await
    }

    /// Replies with whatever `handler` returns for the raw query bytes.
    pub async fn start_with(addr: SocketAddr, handler: Handler) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;
        let received = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = handler(&buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of datagrams received so far.
    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
