//! rootwalk infrastructure: wire codec, UDP transport and result cache
pub mod dns;
