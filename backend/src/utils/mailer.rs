use serde_json::json;

pub struct MailerConfig {
    pub api_key: String,
    pub from_address: String,
    pub inbox_address: String,
}

impl MailerConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("RESEND_API_KEY")
                .expect("RESEND_API_KEY must be set"),
            from_address: std::env::var("CONTACT_FROM_ADDRESS")
                .unwrap_or_else(|_| "ScalpSense <onboarding@resend.dev>".to_string()),
            inbox_address: std::env::var("CONTACT_INBOX_ADDRESS")
                .expect("CONTACT_INBOX_ADDRESS must be set"),
        }
    }
}

pub async fn send_email(
    config: &MailerConfig,
    to: &str,
    subject: &str,
    html: &str,
) -> Result<(), String> {
    let client = reqwest::Client::new();
    let response = client
        .post("https://api.resend.com/emails")
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("Content-Type", "application/json")
        .json(&json!({
            "from": config.from_address,
            "to": [to],
            "subject": subject,
            "html": html,
        }))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.status().is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("Resend API error: {}", error_text));
    }

    Ok(())
}

pub fn owner_notification_html(name: &str, email: &str, subject: &str, message: &str) -> String {
    format!(
        r#"<h2>New Contact Form Submission</h2>
<p><strong>From:</strong> {} ({})</p>
<p><strong>Subject:</strong> {}</p>
<hr />
<h3>Message:</h3>
<p>{}</p>
<hr />
<p style="color: #666; font-size: 12px;">This message was sent via the ScalpSense contact form.</p>"#,
        name,
        email,
        subject,
        message.replace('\n', "<br>")
    )
}

pub fn confirmation_html(name: &str, message: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
<h1 style="color: #10b981;">Thank you for contacting ScalpSense!</h1>
<p>Hi {},</p>
<p>We've received your message and will get back to you within 24 hours.</p>
<div style="background: #f3f4f6; padding: 16px; border-radius: 8px; margin: 20px 0;">
<p style="margin: 0;"><strong>Your message:</strong></p>
<p style="color: #666;">{}</p>
</div>
<p>Best regards,<br>The ScalpSense Team</p>
</div>"#,
        name,
        message.replace('\n', "<br>")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_html_carries_sender_and_breaks_lines() {
        let html = owner_notification_html("Sam", "sam@example.com", "Billing", "line one\nline two");
        assert!(html.contains("Sam (sam@example.com)"));
        assert!(html.contains("line one<br>line two"));
    }

    #[test]
    fn confirmation_html_greets_by_name() {
        let html = confirmation_html("Sam", "hello");
        assert!(html.contains("Hi Sam,"));
        assert!(html.contains("hello"));
    }
}
