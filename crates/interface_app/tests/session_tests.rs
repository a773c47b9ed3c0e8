//! End-to-end session tests
//!
//! A session is driven the way the statement form drives it, then exported
//! through the real HTTP adapter against a local rendering stub.

use std::sync::Arc;

use domain_export::{
    DirectorySink, EndpointPolicy, ExportError, ExportPipeline, ExportState, HttpRenderAdapter,
    HttpRenderConfig, MemorySink, MockOutcome, MockRenderPort,
};
use domain_statement::{DeductionEdit, DeductionField, InfoField, TripEdit, TripField, YtdField};
use interface_app::{AppConfig, StatementSession};
use rust_decimal_macros::dec;
use test_utils::{
    assert_unchanged_except, RenderStub, StatementFixtures, StatementPart, StubResponse, STUB_PDF,
};

fn http_session(stub: &RenderStub) -> StatementSession {
    let config = AppConfig {
        renderer_base_url: stub.base_url().to_string(),
        timeout_secs: 5,
        ..AppConfig::default()
    };
    let adapter = HttpRenderAdapter::new(config.render_config()).unwrap();
    let pipeline = ExportPipeline::new(Arc::new(adapter), config.endpoint_policy());
    StatementSession::with_document(StatementFixtures::seed(), Arc::new(pipeline))
}

mod editing {
    use super::*;

    fn mock_session() -> StatementSession {
        let port = Arc::new(MockRenderPort::new());
        StatementSession::with_document(
            StatementFixtures::seed(),
            Arc::new(ExportPipeline::new(port, EndpointPolicy::default())),
        )
    }

    #[test]
    fn test_add_trip_then_remove_first_deduction() {
        let mut session = mock_session();
        let seed = session.document().clone();
        assert_eq!(seed.trips.len(), 1);
        assert_eq!(seed.deductions.len(), 1);

        session.add_trip();
        session.remove_deduction(0);

        assert_eq!(session.document().trips.len(), 2);
        assert_eq!(session.document().deductions.len(), 0);
        assert_unchanged_except(
            &seed,
            session.document(),
            &[StatementPart::Trips, StatementPart::Deductions],
        );
    }

    #[test]
    fn test_form_text_drives_the_session() {
        let mut session = mock_session();

        session.add_trip();
        for (field, raw) in [
            ("trip_number", "1743657426.00"),
            ("quantity", "1,000"),
            ("rate", " 0.25 "),
            ("amount", "250"),
        ] {
            let field: TripField = field.parse().unwrap();
            session.update_trip(1, TripEdit::from_input(field, raw)).unwrap();
        }
        session.add_deduction();
        session
            .update_deduction(1, DeductionEdit::from_input(DeductionField::Amount, "-12.5"))
            .unwrap();
        session.set_ytd_field(YtdField::Net, "n/a");

        let doc = session.document();
        assert_eq!(doc.trips[1].trip_number, "1743657426.00");
        assert_eq!(doc.trips[1].quantity, dec!(0));
        assert_eq!(doc.trips[1].rate, dec!(0.25));
        assert_eq!(doc.ytd.net, dec!(0));

        let summary = session.summary();
        assert_eq!(summary.trips_total, dec!(850.00));
        assert_eq!(summary.deductions_total, dec!(-50.00));
        assert_eq!(summary.check_amount, dec!(800.00));
        assert_eq!(summary.mismatches.len(), 1);
    }
}

mod export {
    use super::*;

    #[tokio::test]
    async fn test_primary_fails_secondary_delivers() {
        let stub = RenderStub::spawn(vec![
            ("/api/index.py", StubResponse::status(500)),
            ("/api", StubResponse::pdf()),
        ])
        .await;
        let session = http_session(&stub);
        let sink = MemorySink::new();

        let receipt = session.export_to(&sink).await.unwrap();

        assert_eq!(session.export_state(), ExportState::Idle);
        assert_eq!(receipt.filename, "statement_196_12-12-2025.pdf");
        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(&delivered[0].bytes[..], STUB_PDF);
        assert_eq!(delivered[0].endpoint, "/api");
        assert_eq!(stub.posted_paths(), vec!["/api/index.py", "/api"]);
    }

    #[tokio::test]
    async fn test_both_fail_nothing_delivered() {
        let stub = RenderStub::spawn(vec![
            ("/api/index.py", StubResponse::status(500)),
            ("/api", StubResponse::status(502)),
        ])
        .await;
        let session = http_session(&stub);
        let before = session.document().clone();
        let dir = tempfile::tempdir().unwrap();

        let error = session
            .export_to(&DirectorySink::new(dir.path()))
            .await
            .unwrap_err();

        assert!(matches!(error, ExportError::GenerationFailed { .. }));
        assert_eq!(error.user_message(), "Error generating PDF. Please check the logs.");
        assert_eq!(session.export_state(), ExportState::Idle);
        assert_eq!(session.document(), &before);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_export_reflects_latest_edits() {
        let stub = RenderStub::spawn(vec![("/api/index.py", StubResponse::pdf())]).await;
        let mut session = http_session(&stub);
        session.set_info_field(InfoField::TruckNumber, "210");

        let dir = tempfile::tempdir().unwrap();
        let receipt = session
            .export_to(&DirectorySink::new(dir.path()))
            .await
            .unwrap();

        assert_eq!(receipt.filename, "statement_210_12-12-2025.pdf");
        assert_eq!(std::fs::read(dir.path().join(&receipt.filename)).unwrap(), STUB_PDF);

        let sent = &stub.hits()[0];
        assert_eq!(sent.json()["statement_info"]["truck_number"], "210");
    }

    #[tokio::test]
    async fn test_mock_renderer_sees_serialized_session() {
        let port = Arc::new(MockRenderPort::new().with_outcome("/api/index.py", MockOutcome::pdf()));
        let session = StatementSession::with_document(
            StatementFixtures::busy_week(),
            Arc::new(ExportPipeline::new(port.clone(), EndpointPolicy::default())),
        );

        session.export().await.unwrap();

        let calls = port.calls().await;
        let sent: serde_json::Value = serde_json::from_slice(&calls[0].body).unwrap();
        assert_eq!(sent["trips"].as_array().unwrap().len(), 3);
        assert_eq!(sent["deductions"][0]["amount"], -37.5);
    }
}

mod configuration {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_config_feeds_adapter_and_policy() {
        let config = AppConfig {
            renderer_base_url: "http://render.internal:8000".to_string(),
            primary_endpoint: "/render".to_string(),
            fallback_endpoint: "/render-legacy".to_string(),
            timeout_secs: 12,
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());

        let adapter = HttpRenderAdapter::new(config.render_config()).unwrap();
        assert_eq!(adapter.url_for("/render"), "http://render.internal:8000/render");
        assert_eq!(adapter.config().health_endpoint, "/render");
        assert_eq!(config.endpoint_policy().endpoints(), ["/render", "/render-legacy"]);
    }

    #[test]
    fn test_default_render_config_matches_adapter_default() {
        let from_app = AppConfig::default().render_config();
        let adapter_default = HttpRenderConfig::default();
        assert_eq!(from_app.base_url, adapter_default.base_url);
        assert_eq!(from_app.timeout_secs, adapter_default.timeout_secs);
        assert_eq!(from_app.health_endpoint, adapter_default.health_endpoint);
    }
}
