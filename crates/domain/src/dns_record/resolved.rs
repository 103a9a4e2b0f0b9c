use super::{RecordData, RecordType, ResourceRecord};
use crate::domain_name::presentation_name;
use serde::Serialize;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A record reshaped for output. Names carry no trailing root dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedRecord {
    Cname {
        alias: String,
        name: String,
    },
    A {
        name: String,
        address: Ipv4Addr,
    },
    Aaaa {
        name: String,
        address: Ipv6Addr,
    },
    Mx {
        name: String,
        preference: u16,
        exchange: String,
    },
}

impl ResolvedRecord {
    /// Reshapes an answer record if, and only if, its type code equals
    /// `wanted`. CNAME entries take `queried_name` as the alias.
    pub fn from_answer(
        record: &ResourceRecord,
        wanted: RecordType,
        queried_name: &str,
    ) -> Option<Self> {
        if !record.is_type(wanted) {
            return None;
        }

        let owner = presentation_name(&record.name).to_string();
        match &record.data {
            RecordData::CNAME(target) => Some(ResolvedRecord::Cname {
                alias: queried_name.to_string(),
                name: presentation_name(target).to_string(),
            }),
            RecordData::A(address) => Some(ResolvedRecord::A {
                name: owner,
                address: *address,
            }),
            RecordData::AAAA(address) => Some(ResolvedRecord::Aaaa {
                name: owner,
                address: *address,
            }),
            RecordData::MX {
                preference,
                exchange,
            } => Some(ResolvedRecord::Mx {
                name: owner,
                preference: *preference,
                exchange: presentation_name(exchange).to_string(),
            }),
            RecordData::NS(_) | RecordData::Other { .. } => None,
        }
    }
}
