#![allow(dead_code)]
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

pub fn a_record(owner: &str, ip: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip.parse().unwrap())))
}

pub fn aaaa_record(owner: &str, ip: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::AAAA(AAAA(ip.parse().unwrap())))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

/// CNAME whose target is built label by label, for bytes the textual
/// parsers refuse.
pub fn cname_record_to(owner: &str, target: Name) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(target)))
}

pub fn ns_record(zone: &str, host: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(host))))
}

pub fn mx_record(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::MX(MX::new(preference, name(exchange))))
}

pub fn txt_record(owner: &str, text: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::TXT(TXT::new(vec![text.to_string()])))
}
