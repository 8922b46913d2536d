//! End-to-end purchase flow tests against the public crate API.
//!
//! Uses recording gateways sharing one call ledger, so both the payloads and
//! the relative ordering of the two outbound calls can be asserted.

use async_trait::async_trait;
use cinema_tickets::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum GatewayCall {
    Charge { account_id: i64, amount: u64 },
    Reserve { account_id: i64, seat_count: u64 },
}

#[derive(Default)]
struct CallLedger {
    calls: Mutex<Vec<GatewayCall>>,
}

impl CallLedger {
    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }
}

struct RecordingPaymentGateway(Arc<CallLedger>);

#[async_trait]
impl PaymentGateway for RecordingPaymentGateway {
    async fn charge_account(&self, account_id: i64, amount: u64) {
        self.0.record(GatewayCall::Charge { account_id, amount });
    }
}

struct RecordingSeatReservation(Arc<CallLedger>);

#[async_trait]
impl SeatReservationService for RecordingSeatReservation {
    async fn reserve_seats(&self, account_id: i64, seat_count: u64) {
        self.0.record(GatewayCall::Reserve {
            account_id,
            seat_count,
        });
    }
}

fn recording_service() -> (
    TicketPurchaseService<RecordingPaymentGateway, RecordingSeatReservation>,
    Arc<CallLedger>,
) {
    let ledger = Arc::new(CallLedger::default());
    let service = TicketPurchaseService::new(
        Arc::new(RecordingPaymentGateway(Arc::clone(&ledger))),
        Arc::new(RecordingSeatReservation(Arc::clone(&ledger))),
    );
    (service, ledger)
}

#[tokio::test]
async fn test_successful_purchase_charges_before_reserving() {
    let (service, ledger) = recording_service();

    let requests = [
        TicketTypeRequest::new(TicketType::Adult, 1),
        TicketTypeRequest::new(TicketType::Infant, 1),
        TicketTypeRequest::new(TicketType::Child, 1),
    ];

    service.purchase_tickets(5, &requests).await.unwrap();

    assert_eq!(
        ledger.calls(),
        vec![
            GatewayCall::Charge {
                account_id: 5,
                amount: 30
            },
            GatewayCall::Reserve {
                account_id: 5,
                seat_count: 3
            },
        ]
    );
}

#[tokio::test]
async fn test_each_purchase_call_is_independent() {
    let (service, ledger) = recording_service();

    let requests = [TicketTypeRequest::new(TicketType::Adult, 2)];
    service.purchase_tickets(1, &requests).await.unwrap();
    service.purchase_tickets(2, &requests).await.unwrap();

    // No state leaks between calls: each purchase produces its own pair of
    // calls with its own totals.
    assert_eq!(
        ledger.calls(),
        vec![
            GatewayCall::Charge {
                account_id: 1,
                amount: 40
            },
            GatewayCall::Reserve {
                account_id: 1,
                seat_count: 2
            },
            GatewayCall::Charge {
                account_id: 2,
                amount: 40
            },
            GatewayCall::Reserve {
                account_id: 2,
                seat_count: 2
            },
        ]
    );
}

#[tokio::test]
async fn test_rejected_purchase_makes_no_outbound_calls() {
    let (service, ledger) = recording_service();

    let cases: Vec<(i64, Vec<TicketTypeRequest>, &str)> = vec![
        (0, vec![TicketTypeRequest::new(TicketType::Adult, 1)], "invalid_account"),
        (
            5,
            vec![
                TicketTypeRequest::new(TicketType::Adult, 1),
                TicketTypeRequest::new(TicketType::Child, 0),
            ],
            "invalid_ticket_request",
        ),
        (5, vec![TicketTypeRequest::new(TicketType::Adult, 21)], "too_many_tickets"),
        (5, vec![TicketTypeRequest::new(TicketType::Child, 1)], "no_adult_ticket"),
        (5, vec![], "no_adult_ticket"),
        (
            5,
            vec![
                TicketTypeRequest::new(TicketType::Adult, 2),
                TicketTypeRequest::new(TicketType::Infant, 3),
            ],
            "too_many_infants",
        ),
    ];

    for (account_id, requests, expected_kind) in cases {
        let err = service
            .purchase_tickets(account_id, &requests)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), expected_kind);
    }

    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn test_split_requests_aggregate_into_single_calls() {
    let (service, ledger) = recording_service();

    let requests = [
        TicketTypeRequest::new(TicketType::Adult, 2),
        TicketTypeRequest::new(TicketType::Adult, 3),
    ];

    service.purchase_tickets(9, &requests).await.unwrap();

    assert_eq!(
        ledger.calls(),
        vec![
            GatewayCall::Charge {
                account_id: 9,
                amount: 100
            },
            GatewayCall::Reserve {
                account_id: 9,
                seat_count: 5
            },
        ]
    );
}
