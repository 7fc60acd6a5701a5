use std::net::IpAddr;

use async_trait::async_trait;

use dentlead_core::lead::LeadMetadata;
use dentlead_core::locale::HOME_DIAL_CODE;
use dentlead_ports::inbound::{IntakeOutcome, IntakeRejection, LeadIntake};
use dentlead_ports::outbound::LeadSink;
use dentlead_ports::types::{ContactSubmission, InitialDialCode};

use crate::form::{ContactFormController, SubmitOutcome, SUBMIT_ERROR_KEY};
use crate::inference::DialCodeInference;

/// Server-side entry point: replays a posted form through a fresh controller.
pub struct LeadIntakeService<S>
where
    S: LeadSink + Clone,
{
    sink: S,
    inference: DialCodeInference,
    metadata: LeadMetadata,
}

impl<S> LeadIntakeService<S>
where
    S: LeadSink + Clone,
{
    pub fn new(sink: S, inference: DialCodeInference, metadata: LeadMetadata) -> Self {
        Self {
            sink,
            inference,
            metadata,
        }
    }
}

#[async_trait]
impl<S> LeadIntake for LeadIntakeService<S>
where
    S: LeadSink + Clone,
{
    async fn initial_dial_code(
        &self,
        page_path: &str,
        client_ip: Option<IpAddr>,
    ) -> InitialDialCode {
        self.inference
            .infer(page_path, client_ip, HOME_DIAL_CODE)
            .await
    }

    async fn submit(
        &self,
        page_path: &str,
        client_ip: Option<IpAddr>,
        form: ContactSubmission,
    ) -> IntakeOutcome {
        let mut ctl =
            ContactFormController::new(self.sink.clone(), page_path, self.metadata.clone());
        // A posted dial code means the page already ran inference; don't look up again.
        match form.dial_code.as_deref() {
            Some(code) => {
                if let Err(e) = ctl.change_dial_code(code) {
                    tracing::debug!(error = %e, "dial code refused");
                    return IntakeOutcome::Rejected(IntakeRejection::UnknownDialCode(code.into()));
                }
                if self.inference.records_client_ip() {
                    ctl.set_client_ip(client_ip);
                }
            }
            None => ctl.mount(&self.inference, client_ip).await,
        }
        ctl.set_name(form.name);
        ctl.set_email(form.email);
        ctl.edit_local_number(&form.phone);

        match ctl.submit().await {
            SubmitOutcome::Submitted(receipt) => IntakeOutcome::Accepted(receipt),
            SubmitOutcome::Rejected(rejection) => {
                IntakeOutcome::Rejected(IntakeRejection::Invalid {
                    error_key: rejection.translation_key(),
                })
            }
            SubmitOutcome::Failed => IntakeOutcome::Failed {
                error_key: SUBMIT_ERROR_KEY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dentlead_core::lead::LeadPayload;
    use dentlead_ports::error::PortError;
    use dentlead_ports::outbound::GeoLocator;
    use dentlead_ports::types::GeoLocation;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockSink {
        sent: Arc<Mutex<Vec<LeadPayload>>>,
        down: bool,
    }

    #[async_trait]
    impl LeadSink for MockSink {
        async fn submit(&self, payload: &LeadPayload) -> Result<(), PortError> {
            if self.down {
                return Err(PortError::Transport("connection refused".into()));
            }
            self.sent.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingGeo {
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl GeoLocator for CountingGeo {
        async fn locate(&self, ip: Option<IpAddr>) -> Result<Option<GeoLocation>, PortError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(Some(GeoLocation {
                dial_code: "+49".into(),
                ip: ip.map(|ip| ip.to_string()).unwrap_or_default(),
            }))
        }
    }

    fn geo_service(sink: MockSink, geo: Arc<CountingGeo>) -> LeadIntakeService<MockSink> {
        LeadIntakeService::new(sink, DialCodeInference::GeoIp(geo), LeadMetadata::default())
    }

    fn service(sink: MockSink) -> LeadIntakeService<MockSink> {
        LeadIntakeService::new(sink, DialCodeInference::Slug, LeadMetadata::default())
    }

    fn submission(dial_code: Option<&str>, phone: &str) -> ContactSubmission {
        ContactSubmission {
            name: "Hans Müller".into(),
            dial_code: dial_code.map(Into::into),
            phone: phone.into(),
            email: "hans@example.de".into(),
        }
    }

    #[tokio::test]
    async fn missing_dial_code_uses_page_slug() {
        let sink = MockSink::default();
        let svc = service(sink.clone());

        let outcome = svc
            .submit("/zahnimplantat-in-der-turkei", None, submission(None, "15123456789"))
            .await;

        assert!(matches!(outcome, IntakeOutcome::Accepted(_)));
        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent[0].phone, "+4915123456789");
        assert_eq!(sent[0].language, "DE");
    }

    #[tokio::test]
    async fn explicit_dial_code_wins() {
        let sink = MockSink::default();
        let svc = service(sink.clone());

        let outcome = svc
            .submit(
                "/zahnimplantat-in-der-turkei",
                None,
                submission(Some("+90"), "5321234567"),
            )
            .await;

        match outcome {
            IntakeOutcome::Accepted(receipt) => {
                assert_eq!(receipt.redirect, "/zahnimplantat-in-der-turkei/thank-you")
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(sink.sent.lock().unwrap()[0].phone, "+905321234567");
    }

    #[tokio::test]
    async fn invalid_phone_is_rejected_with_key() {
        let sink = MockSink::default();
        let svc = service(sink.clone());

        let outcome = svc
            .submit("/", None, submission(Some("+90"), "05321234567"))
            .await;

        assert_eq!(
            outcome,
            IntakeOutcome::Rejected(IntakeRejection::Invalid {
                error_key: "phoneValidation.invalidPrefix"
            })
        );
        assert!(sink.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_dial_code_is_rejected() {
        let svc = service(MockSink::default());
        let outcome = svc
            .submit("/", None, submission(Some("+999"), "12345"))
            .await;
        assert_eq!(
            outcome,
            IntakeOutcome::Rejected(IntakeRejection::UnknownDialCode("+999".into()))
        );
    }

    #[tokio::test]
    async fn blank_email_is_rejected() {
        let svc = service(MockSink::default());
        let mut form = submission(Some("+44"), "7911123456");
        form.email = "  ".into();

        let outcome = svc.submit("/", None, form).await;

        assert_eq!(
            outcome,
            IntakeOutcome::Rejected(IntakeRejection::Invalid {
                error_key: "contactForm.required"
            })
        );
    }

    #[tokio::test]
    async fn crm_outage_reports_failure() {
        let svc = service(MockSink {
            down: true,
            ..Default::default()
        });
        let outcome = svc
            .submit("/", None, submission(Some("+44"), "7911123456"))
            .await;
        assert_eq!(
            outcome,
            IntakeOutcome::Failed {
                error_key: "contactForm.submitError"
            }
        );
    }

    #[tokio::test]
    async fn initial_dial_code_defaults_to_home_country() {
        let svc = service(MockSink::default());
        let initial = svc.initial_dial_code("/unknown-page", None).await;
        assert_eq!(initial.dial_code, "+90");
        let initial = svc.initial_dial_code("/dis-implanti-turkiye", None).await;
        assert_eq!(initial.dial_code, "+90");
        let initial = svc.initial_dial_code("/dental-implant-in-turkey", None).await;
        assert_eq!(initial.dial_code, "+44");
    }

    #[tokio::test]
    async fn page_load_and_submit_share_one_geo_lookup() {
        let sink = MockSink::default();
        let geo = Arc::new(CountingGeo::default());
        let svc = geo_service(sink.clone(), geo.clone());
        let visitor: IpAddr = "198.51.100.7".parse().unwrap();

        let initial = svc.initial_dial_code("/x", Some(visitor)).await;
        assert_eq!(initial.dial_code, "+49");
        let outcome = svc
            .submit(
                "/x",
                Some(visitor),
                submission(Some(initial.dial_code.as_str()), "15123456789"),
            )
            .await;

        assert!(matches!(outcome, IntakeOutcome::Accepted(_)));
        assert_eq!(geo.lookups.load(Ordering::SeqCst), 1);
        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent[0].phone, "+4915123456789");
        assert_eq!(sent[0].ip.as_deref(), Some("198.51.100.7"));
    }

    #[tokio::test]
    async fn submit_without_dial_code_looks_up_once() {
        let sink = MockSink::default();
        let geo = Arc::new(CountingGeo::default());
        let svc = geo_service(sink.clone(), geo.clone());

        let outcome = svc
            .submit(
                "/x",
                Some("198.51.100.7".parse().unwrap()),
                submission(None, "15123456789"),
            )
            .await;

        assert!(matches!(outcome, IntakeOutcome::Accepted(_)));
        assert_eq!(geo.lookups.load(Ordering::SeqCst), 1);
        assert_eq!(sink.sent.lock().unwrap()[0].ip.as_deref(), Some("198.51.100.7"));
    }

    #[tokio::test]
    async fn slug_strategy_leaves_ip_out_of_payload() {
        let sink = MockSink::default();
        let svc = service(sink.clone());

        svc.submit(
            "/",
            Some("198.51.100.7".parse().unwrap()),
            submission(Some("+90"), "5321234567"),
        )
        .await;

        assert_eq!(sink.sent.lock().unwrap()[0].ip, None);
    }
}
