//! `scrollfolio verify-email` — Check SMTP credentials and send a test email.

use scrollfolio_contact::SmtpMailer;
use scrollfolio_core::{MailError, Mailer, OutgoingEmail};
use std::path::Path;

pub async fn run(config_path: Option<&Path>, no_send: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;
    let (Some(user), Some(owner)) = (config.mail.username.clone(), config.mail.owner()) else {
        return Err("Missing GMAIL_USER or GMAIL_PASS (environment or .env.local)".into());
    };
    let owner = owner.to_string();

    println!("Checking configuration for user: {user}");
    let mailer = SmtpMailer::from_config(&config.mail)?;

    println!("Attempting to verify connection...");
    match mailer.verify().await {
        Ok(true) => println!("✅ Connection verified successfully!"),
        Ok(false) => return Err(format!("{} rejected the connection", mailer.name()).into()),
        Err(e) => {
            print_hint(&e);
            return Err(e.into());
        }
    }

    if no_send {
        return Ok(());
    }

    println!("Attempting to send test email...");
    let email = OutgoingEmail {
        from_name: String::new(),
        from_address: user,
        to: owner,
        reply_to: None,
        subject: "Test Email from Scrollfolio".into(),
        text: format!(
            "If you receive this, your email configuration works! ({})",
            chrono::Utc::now().to_rfc3339()
        ),
        html: None,
    };
    if let Err(e) = mailer.send(&email).await {
        print_hint(&e);
        return Err(e.into());
    }
    println!("✅ Test email sent successfully!");

    Ok(())
}

fn print_hint(e: &MailError) {
    println!("❌ Error: {e}");
    if matches!(e, MailError::AuthenticationFailed(_)) {
        println!("Hint: Check your App Password. It might be invalid or 2FA is needed.");
    }
}
