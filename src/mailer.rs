use async_trait::async_trait;
use chrono::NaiveDate;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::auth::Secret;
use crate::error::Result;

const ATTACHMENT_NAME: &str = "cc_line_report.pdf";
const BODY_TEXT: &str = "Attached is the automated CC Line daily performance report.";

/// Delivery settings, resolved once at startup and passed in explicitly.
#[derive(Debug)]
pub struct MailConfig {
    pub sender: String,
    pub password: Secret,
    pub recipient: String,
    pub relay_host: String,
    pub relay_port: u16,
}

#[async_trait]
pub trait Deliver {
    async fn deliver(&self, report: Vec<u8>, reference: NaiveDate) -> Result<()>;
}

pub struct SmtpMailer {
    config: MailConfig,
}

impl SmtpMailer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, report: Vec<u8>, reference: NaiveDate) -> Result<Message> {
        let attachment = Attachment::new(ATTACHMENT_NAME.to_string())
            .body(report, ContentType::parse("application/pdf")?);

        let message = Message::builder()
            .from(self.config.sender.parse()?)
            .to(self.config.recipient.parse()?)
            .subject(format!("CC Line Daily Report - {reference}"))
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(BODY_TEXT.to_string()))
                    .singlepart(attachment),
            )?;

        Ok(message)
    }
}

#[async_trait]
impl Deliver for SmtpMailer {
    /// Single best-effort attempt over an implicit-TLS SMTP session.
    /// Every failure propagates; there is no retry or queuing.
    async fn deliver(&self, report: Vec<u8>, reference: NaiveDate) -> Result<()> {
        let message = self.build_message(report, reference)?;

        let credentials = Credentials::new(
            self.config.sender.clone(),
            self.config.password.as_str().to_owned(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.relay_host)?
            .port(self.config.relay_port)
            .credentials(credentials)
            .build();

        transport.send(message).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn config() -> MailConfig {
        MailConfig {
            sender: "line@example.com".to_string(),
            password: Secret::from("app_password"),
            recipient: "supervisor@example.com".to_string(),
            relay_host: "smtp.example.com".to_string(),
            relay_port: 465,
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
    }

    #[test]
    fn test_build_message_sets_dated_subject() {
        let mailer = SmtpMailer::new(config());

        let message = mailer.build_message(b"%PDF-1.3".to_vec(), reference()).unwrap();

        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("Subject: CC Line Daily Report - 2025-03-31"));
    }

    #[test]
    fn test_build_message_attaches_pdf() {
        let mailer = SmtpMailer::new(config());

        let message = mailer.build_message(b"%PDF-1.3".to_vec(), reference()).unwrap();

        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("application/pdf"));
        assert!(formatted.contains(ATTACHMENT_NAME));
    }

    #[test]
    fn test_build_message_rejects_invalid_sender() {
        let mut bad = config();
        bad.sender = "not an address".to_string();
        let mailer = SmtpMailer::new(bad);

        let result = mailer.build_message(Vec::new(), reference());

        assert!(matches!(result, Err(ReportError::Address(_))));
    }
}
