use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{debug, info};

use crate::auth::Secret;
use crate::error::{ReportError, Result};
use crate::insights;
use crate::kpi;
use crate::mailer::{Deliver, MailConfig, SmtpMailer};
use crate::report;
use crate::selection::select_day;
use crate::source::{DataSource, SyntheticSource};

/// Days of line history the synthetic source spans, ending on the
/// reference date.
const HISTORY_DAYS: u64 = 30;

#[derive(Parser)]
#[command(name = "linepulse")]
#[command(author, version, about = "Daily Production Line KPI Reports", long_about = None)]
pub struct Cli {
    /// Sender mailbox address
    #[arg(long, env = "EMAIL_USER")]
    email_user: String,

    /// Sender mailbox password or app token
    #[arg(long, env = "EMAIL_PASS", hide_env_values = true)]
    email_pass: String,

    /// Recipient mailbox address
    #[arg(long, env = "EMAIL_TO")]
    email_to: String,

    /// SMTP relay host
    #[arg(long, default_value = "smtp.gmail.com")]
    relay: String,

    /// SMTP relay port (implicit TLS)
    #[arg(long, default_value_t = 465)]
    port: u16,

    /// Reference date for the report (defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        let reference = self.date.unwrap_or_else(|| Local::now().date_naive());
        info!("Generating daily production report for {reference}");

        let source = SyntheticSource::trailing_days(reference, HISTORY_DAYS);
        let records = source.collect();
        info!("Collected {} production records", records.len());

        let selection = select_day(&records, reference)?;
        let summary = kpi::aggregate(&selection).ok_or(ReportError::NoData)?;
        debug!("KPI summary: {}", serde_json::to_string(&summary)?);

        let findings = insights::generate(&summary);
        let pdf = report::render(&summary, &findings, reference)?;
        info!("Rendered report PDF ({} bytes)", pdf.len());

        let config = MailConfig {
            sender: self.email_user.clone(),
            password: Secret::from(self.email_pass.as_str()),
            recipient: self.email_to.clone(),
            relay_host: self.relay.clone(),
            relay_port: self.port,
        };
        SmtpMailer::new(config).deliver(pdf, reference).await?;

        println!("Email with PDF report sent.");
        Ok(())
    }
}
