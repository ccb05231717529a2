use crate::mailer::Mailer;

use super::dto::BookSessionRequest;

pub const ADMIN_SUBJECT: &str = "New Session Booking";
pub const USER_SUBJECT: &str = "Kyros - Your Session is Booked!";

/// Sends the admin copy, then the confirmation to the address given in
/// the booking payload. An admin-send failure stops the sequence before
/// the user email is attempted.
pub async fn send_booking_emails(
    mailer: &dyn Mailer,
    admin_address: &str,
    req: &BookSessionRequest,
) -> anyhow::Result<()> {
    mailer
        .send_html(admin_address, ADMIN_SUBJECT, admin_body(req))
        .await?;
    mailer
        .send_html(&req.user_email, USER_SUBJECT, user_body(req))
        .await?;
    Ok(())
}

/// Admin copy with the full booking payload.
pub fn admin_body(req: &BookSessionRequest) -> String {
    format!(
        "<h3>New Career Session Booking</h3>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Phone:</strong> {}</p>\
         <p><strong>Date:</strong> {}</p>\
         <p><strong>Time:</strong> {}</p>\
         <p><strong>Topic:</strong> {}</p>\
         <p><strong>Notes:</strong> {}</p>",
        req.user_name,
        req.user_email,
        req.phone,
        req.date,
        req.time,
        req.topic,
        req.notes.as_deref().unwrap_or("None"),
    )
}

/// Confirmation sent to the address given in the booking payload.
pub fn user_body(req: &BookSessionRequest) -> String {
    format!(
        "<h2>Hi {},</h2>\
         <p>Thank you for booking a career coaching session with Kyros.</p>\
         <ul>\
         <li><strong>Date:</strong> {}</li>\
         <li><strong>Time:</strong> {}</li>\
         <li><strong>Topic:</strong> {}</li>\
         <li><strong>Notes:</strong> {}</li>\
         </ul>\
         <p>Warm regards,<br>Kyros Team</p>",
        req.user_name,
        req.date,
        req.time,
        req.topic,
        req.notes.as_deref().unwrap_or("None"),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    fn sample(notes: Option<&str>) -> BookSessionRequest {
        BookSessionRequest {
            user_name: "Jordan Lee".into(),
            user_email: "jordan@example.com".into(),
            phone: "+1 555 0100".into(),
            date: "2026-09-15".into(),
            time: "14:30".into(),
            topic: "Career change".into(),
            notes: notes.map(Into::into),
        }
    }

    #[derive(Default)]
    struct CapturingMailer {
        sent: Mutex<Vec<(String, String)>>,
        fail_from_attempt: Option<usize>,
    }

    #[async_trait]
    impl Mailer for CapturingMailer {
        async fn send_html(&self, to: &str, subject: &str, _html: String) -> anyhow::Result<()> {
            let mut sent = self.sent.lock().unwrap();
            let attempt = sent.len() + 1;
            sent.push((to.to_string(), subject.to_string()));
            if self.fail_from_attempt.is_some_and(|n| attempt >= n) {
                anyhow::bail!("smtp refused");
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn sends_admin_copy_then_user_confirmation() {
        let mailer = CapturingMailer::default();
        send_booking_emails(&mailer, "admin@kyros.test", &sample(None))
            .await
            .expect("both sends succeed");

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], ("admin@kyros.test".into(), ADMIN_SUBJECT.into()));
        assert_eq!(sent[1], ("jordan@example.com".into(), USER_SUBJECT.into()));
    }

    #[tokio::test]
    async fn admin_send_failure_stops_before_user_email() {
        let mailer = CapturingMailer {
            fail_from_attempt: Some(1),
            ..Default::default()
        };
        let err = send_booking_emails(&mailer, "admin@kyros.test", &sample(None))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("smtp refused"));
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn user_send_failure_surfaces_after_both_attempts() {
        let mailer = CapturingMailer {
            fail_from_attempt: Some(2),
            ..Default::default()
        };
        let err = send_booking_emails(&mailer, "admin@kyros.test", &sample(None))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("smtp refused"));
        assert_eq!(mailer.sent.lock().unwrap().len(), 2);
    }

    #[test]
    fn admin_body_contains_every_field() {
        let body = admin_body(&sample(Some("prefers afternoons")));
        for needle in [
            "Jordan Lee",
            "jordan@example.com",
            "+1 555 0100",
            "2026-09-15",
            "14:30",
            "Career change",
            "prefers afternoons",
        ] {
            assert!(body.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn user_body_defaults_missing_notes_to_none() {
        let body = user_body(&sample(None));
        assert!(body.contains("Hi Jordan Lee"));
        assert!(body.contains("<strong>Notes:</strong> None"));
    }
}
