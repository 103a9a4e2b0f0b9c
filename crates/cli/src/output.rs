use rootwalk_domain::{CollectedResult, ResolvedRecord};

/// One `host`-style line per record, grouped CNAME, A, AAAA, MX.
pub fn host_lines(result: &CollectedResult) -> Vec<String> {
    result
        .iter()
        .flat_map(|(_, records)| records.iter().map(host_line))
        .collect()
}

fn host_line(record: &ResolvedRecord) -> String {
    match record {
        ResolvedRecord::Cname { alias, name } => format!("{} is an alias for {}", alias, name),
        ResolvedRecord::A { name, address } => format!("{} has address {}", name, address),
        ResolvedRecord::Aaaa { name, address } => {
            format!("{} has IPv6 address {}", name, address)
        }
        ResolvedRecord::Mx {
            name,
            preference,
            exchange,
        } => format!("{} mail is handled by {} {}", name, preference, exchange),
    }
}

/// Single-line JSON object: the queried name plus records keyed by type tag.
pub fn json_line(name: &str, result: &CollectedResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(&serde_json::json!({
        "name": name,
        "records": result,
    }))
}
