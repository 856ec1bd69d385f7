//! Synthesized replies for queries that are not relayed upstream.
//!
//! Every reply keeps the request's id, op code, RD bit and question section so the
//! client can correlate it with the query it sent.

use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::Ipv4Addr;

/// TTL of every synthesized answer.
pub const SINKHOLE_TTL: u32 = 1;

pub struct ResponseSynthesizer;

impl ResponseSynthesizer {
    /// NOERROR with a single A record pointing at `address`.
    pub fn blocked_a(request: &Message, address: Ipv4Addr) -> Message {
        let mut reply = Self::reply_to(request, ResponseCode::NoError);
        reply.add_answer(Record::from_rdata(
            Self::question_name(request),
            SINKHOLE_TTL,
            RData::A(A(address)),
        ));
        reply
    }

    /// NOERROR with a single AAAA record carrying no address.
    pub fn suppressed_aaaa(request: &Message) -> Message {
        let mut reply = Self::reply_to(request, ResponseCode::NoError);
        reply.add_answer(Record::with(
            Self::question_name(request),
            RecordType::AAAA,
            SINKHOLE_TTL,
        ));
        reply
    }

    pub fn server_failure(request: &Message) -> Message {
        Self::reply_to(request, ResponseCode::ServFail)
    }

    pub fn format_error(id: u16) -> Message {
        let mut reply = Message::new();
        reply
            .set_id(id)
            .set_message_type(MessageType::Response)
            .set_response_code(ResponseCode::FormErr);
        reply
    }

    fn reply_to(request: &Message, code: ResponseCode) -> Message {
        let mut reply = Message::new();
        reply
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .set_checking_disabled(request.checking_disabled())
            .set_response_code(code);
        reply.add_queries(request.queries().iter().cloned());
        reply
    }

    fn question_name(request: &Message) -> Name {
        request
            .queries()
            .first()
            .map(|q| q.name().clone())
            .unwrap_or_else(Name::root)
    }
}
