//! Mapping between `rootwalk_domain::RecordType` and `hickory_proto::rr::RecordType`

use rootwalk_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Maps the domain record types onto hickory's for outgoing questions
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::AAAA => HickoryRecordType::AAAA,
        }
    }
}
