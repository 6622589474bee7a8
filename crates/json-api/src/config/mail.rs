//! Mail Gateway Config

use clap::Args;
use vend_app::mail::MailGatewayConfig;

/// Outbound mail gateway settings.
#[derive(Debug, Args)]
pub struct MailConfig {
    /// Mail gateway base address
    #[arg(long, env = "MAIL_GATEWAY_ADDR", default_value = "http://localhost:8025")]
    pub mail_gateway_addr: String,

    /// Mail gateway bearer token
    #[arg(long, env = "MAIL_GATEWAY_TOKEN", default_value = "")]
    pub mail_gateway_token: String,

    /// Sender address for outgoing mail
    #[arg(long, env = "MAIL_FROM", default_value = "noreply@example.com")]
    pub mail_from: String,

    /// Recipient for admin alert mail
    #[arg(long, env = "ADMIN_EMAIL", default_value = "admin@example.com")]
    pub admin_email: String,
}

impl MailConfig {
    /// Convert into the app-crate gateway configuration.
    #[must_use]
    pub fn gateway_config(&self) -> MailGatewayConfig {
        MailGatewayConfig {
            addr: self.mail_gateway_addr.clone(),
            token: self.mail_gateway_token.clone(),
            from: self.mail_from.clone(),
            admin_email: self.admin_email.clone(),
        }
    }
}
