//! Full submission lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the submission
//! controller over real HTTP using ureq. Validates that request building,
//! response classification, and the state machine work end-to-end with the
//! actual server, including the error paths a unit test can only simulate.

use std::net::SocketAddr;

use bond_core::{
    BondCalculationRequest, BondService, BondStatus, ClientError, Frequency, HttpMethod,
    HttpRequest, HttpResponse, SubmissionController, SubmissionState, SubmitOutcome,
    TransportFailure,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// classify statuses itself. Transport-level failures are mapped onto
/// `TransportFailure` for the core to classify as well.
fn execute(req: HttpRequest) -> Result<HttpResponse, TransportFailure> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    };

    let mut response = match result {
        Ok(response) => response,
        Err(ureq::Error::ConnectionFailed) | Err(ureq::Error::Io(_)) => {
            return Err(TransportFailure::ConnectionFailed)
        }
        Err(other) => return Err(TransportFailure::Other(other.to_string())),
    };

    let status = response.status().as_u16();
    let status_text = response
        .status()
        .canonical_reason()
        .unwrap_or_default()
        .to_string();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        status_text,
        headers: Vec::new(),
        body,
    })
}

fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn spec_request() -> BondCalculationRequest {
    BondCalculationRequest {
        face_value: 1000.0,
        coupon_rate: 5.0,
        market_price: 950.0,
        years_to_maturity: 5.0,
        frequency: Frequency::SemiAnnual,
    }
}

#[test]
fn submission_lifecycle() {
    // Step 1: start mock server on a random port.
    let addr = start_mock_server();
    let base_url = format!("http://{addr}");
    let service = BondService::new(&base_url);
    let mut controller = SubmissionController::new(BondService::new(&base_url));

    // Step 2: local validation gate — nothing goes on the wire.
    let mut invalid = spec_request();
    invalid.market_price = 0.0;
    let outcome = controller.submit(invalid);
    assert!(matches!(outcome, SubmitOutcome::Rejected));
    assert_eq!(controller.field_errors().len(), 1);

    // Step 3: happy path through the controller.
    let SubmitOutcome::Dispatched(req) = controller.submit(spec_request()) else {
        panic!("expected a dispatched request");
    };
    assert!(controller.is_loading());
    controller.complete(execute(req).unwrap());

    let result = controller.result().expect("expected a stored result");
    assert_eq!(result.status, BondStatus::Discount);
    assert!((result.yield_to_maturity - 6.15).abs() < 0.01);
    assert_eq!(result.cashflows.len(), 10);
    for (index, row) in result.cashflows.iter().enumerate() {
        assert_eq!(row.period, index as u32 + 1);
    }
    assert!(result.total_interest() > 0.0);
    assert!(controller.error_message().is_none());

    // Step 4: a server-side semantic rejection classifies as Validation.
    // (Built through the service directly, past the local validation gate.)
    let mut out_of_range = spec_request();
    out_of_range.face_value = -10.0;
    let req = service.build_calculate(&out_of_range).unwrap();
    let err = service.parse_calculate(execute(req).unwrap()).unwrap_err();
    assert_eq!(
        err,
        ClientError::Validation {
            message: "faceValue must be greater than 0".to_string()
        }
    );

    // Step 5: an unknown endpoint classifies as a 404 Api error.
    let mut req = service.build_calculate(&spec_request()).unwrap();
    req.url = format!("{base_url}/bond/cashflow-schedule");
    let err = service.parse_calculate(execute(req).unwrap()).unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(matches!(
        err,
        ClientError::Api { message, .. } if message == "Resource not found"
    ));

    // Step 6: resubmission after a settled attempt starts over and succeeds.
    let SubmitOutcome::Dispatched(req) = controller.submit(spec_request()) else {
        panic!("expected resubmission to dispatch");
    };
    controller.complete(execute(req).unwrap());
    assert!(matches!(controller.state(), SubmissionState::Success(_)));
}

#[test]
fn connection_refused_surfaces_the_fixed_network_message() {
    // Grab a port with nothing listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut controller = SubmissionController::new(BondService::new(&format!("http://{addr}")));
    let SubmitOutcome::Dispatched(req) = controller.submit(spec_request()) else {
        panic!("expected a dispatched request");
    };

    let failure = execute(req).expect_err("expected the transport to fail");
    controller.fail(failure);
    assert_eq!(
        controller.error_message(),
        Some(
            "Network Error: Unable to connect to the server. \
             Please check your internet connection."
        )
    );
}
