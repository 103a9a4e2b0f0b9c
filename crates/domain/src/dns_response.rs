use super::ResourceRecord;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A decoded nameserver reply, reduced to its three record sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsResponse {
    pub answers: Vec<ResourceRecord>,

    pub authority: Vec<ResourceRecord>,

    pub additional: Vec<ResourceRecord>,
}

impl DnsResponse {
    pub fn new(
        answers: Vec<ResourceRecord>,
        authority: Vec<ResourceRecord>,
        additional: Vec<ResourceRecord>,
    ) -> Self {
        Self {
            answers,
            authority,
            additional,
        }
    }

    pub fn answer(answers: Vec<ResourceRecord>) -> Self {
        Self {
            answers,
            ..Self::default()
        }
    }

    pub fn referral(authority: Vec<ResourceRecord>, additional: Vec<ResourceRecord>) -> Self {
        Self {
            answers: Vec::new(),
            authority,
            additional,
        }
    }

    /// IPv4 glue from the additional section, in section order.
    pub fn glue_addresses(&self) -> Vec<Ipv4Addr> {
        self.additional.iter().filter_map(|r| r.ipv4()).collect()
    }
}
