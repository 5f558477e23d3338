use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{RData, Record};
use rootwalk_domain::{DnsResponse, DomainError, RecordData, ResourceRecord, ResponseStatus};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode wire bytes into the three-section view the resolver walks.
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Message is a query, not a response".to_string(),
            ));
        }

        let status = Self::rcode_to_status(message.response_code());
        let answers: Vec<ResourceRecord> = message.answers().iter().map(Self::convert).collect();
        let authority: Vec<ResourceRecord> =
            message.name_servers().iter().map(Self::convert).collect();
        let additional: Vec<ResourceRecord> =
            message.additionals().iter().map(Self::convert).collect();

        debug!(
            rcode = %status,
            answers = answers.len(),
            authority = authority.len(),
            additional = additional.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            status,
            answers,
            authority,
            additional,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> ResponseStatus {
        match rcode {
            ResponseCode::NoError => ResponseStatus::NoError,
            ResponseCode::FormErr => ResponseStatus::FormErr,
            ResponseCode::ServFail => ResponseStatus::ServFail,
            ResponseCode::NXDomain => ResponseStatus::NxDomain,
            ResponseCode::NotImp => ResponseStatus::NotImp,
            ResponseCode::Refused => ResponseStatus::Refused,
            other => ResponseStatus::Other(u16::from(other)),
        }
    }

    /// Names are kept in their ASCII (punycode) form, as they appear on the
    /// wire.
    fn convert(record: &Record) -> ResourceRecord {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(canonical) => RecordData::CNAME(canonical.0.to_ascii()),
            RData::NS(ns) => RecordData::NS(ns.0.to_ascii()),
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: mx.exchange().to_ascii(),
            },
            RData::SOA(_) => RecordData::SOA,
            _ => RecordData::Other,
        };

        ResourceRecord::new(record.name().to_ascii(), data)
    }
}
