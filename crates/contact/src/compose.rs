//! Turns a contact submission into the email delivered to the owner.

use crate::submission::ContactSubmission;
use scrollfolio_core::OutgoingEmail;

/// Build the owner notification for `submission`.
///
/// The relay account is both the authenticated sender and the recipient;
/// the visitor's address goes into Reply-To so answering reaches them.
pub fn compose_email(submission: &ContactSubmission, relay_account: &str, owner: &str) -> OutgoingEmail {
    let name = submission.name.trim();
    let email = submission.email.trim();
    let message = submission.message.trim();

    OutgoingEmail {
        from_name: name.to_string(),
        from_address: relay_account.to_string(),
        to: owner.to_string(),
        reply_to: Some(email.to_string()),
        subject: format!("New Message from {name} (Portfolio)"),
        text: message.to_string(),
        html: Some(render_html(name, email, message)),
    }
}

fn render_html(name: &str, email: &str, message: &str) -> String {
    let body = escape_html(message).replace("\r\n", "\n").replace('\n', "<br>");
    format!(
        r#"<div style="font-family: Arial, sans-serif; padding: 20px; color: #333;">
    <h2 style="color: #000;">New Contact Form Submission</h2>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <hr style="border: 1px solid #eee; margin: 20px 0;" />
    <p><strong>Message:</strong></p>
    <p style="background: #f9f9f9; padding: 15px; border-radius: 5px;">{body}</p>
</div>"#,
        name = escape_html(name),
        email = escape_html(email),
    )
}

/// Minimal HTML text escaping for visitor-supplied strings.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
