use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::Contact;

/// Everything but ASCII alphanumerics and `_ . - ~ /` is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Build a `mailto:` link addressed to `recipients` with the visitor's
/// message and a reply-to line in the body.
///
/// Recipients are listed once each, in first-seen order.
pub fn build_mailto<S: AsRef<str>>(subject: &str, message: &str, sender_address: &str, recipients: &[S]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(recipients.len());
    for recipient in recipients {
        let recipient = recipient.as_ref().trim();
        if !recipient.is_empty() && !seen.contains(&recipient) {
            seen.push(recipient);
        }
    }

    let body = format!("{}\n\nReply to: {}", message, sender_address);
    format!(
        "mailto:{}?subject={}&body={}",
        seen.join(","),
        utf8_percent_encode(subject, QUERY_VALUE),
        utf8_percent_encode(&body, QUERY_VALUE)
    )
}

/// Email addresses of the selected seniors.
pub fn recipient_emails(contacts: &[Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.email.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(link: &str) -> &str {
        link.split_once('?').map(|(_, q)| q).unwrap_or_default()
    }

    #[test]
    fn starts_with_scheme_and_lists_recipients() {
        let link = build_mailto("Hi", "msg", "me@x.com", &["a@x.com", "b@x.com"]);
        assert!(link.starts_with("mailto:a@x.com,b@x.com?subject=Hi&body="));
    }

    #[test]
    fn duplicate_recipients_listed_once() {
        let link = build_mailto("Hi", "msg", "me@x.com", &["a@x.com", "b@x.com", "a@x.com"]);
        let addresses = link.trim_start_matches("mailto:").split('?').next().unwrap();
        assert_eq!(addresses, "a@x.com,b@x.com");
    }

    #[test]
    fn body_reserved_characters_are_escaped() {
        let link = build_mailto("Talk to your senior from BITS", "a=b & c", "me@x.com", &["a@x.com"]);
        let query = query(&link);
        assert_eq!(query.matches('&').count(), 1, "only the subject/body separator is a raw &");
        assert_eq!(query.matches('=').count(), 2, "only the two parameter assignments are raw =");
        assert!(!query.contains(' '));
        assert!(link.contains("subject=Talk%20to%20your%20senior%20from%20BITS"));
        assert!(link.contains("body=a%3Db%20%26%20c%0A%0AReply%20to%3A%20me%40x.com"));
    }

    #[test]
    fn safe_characters_pass_through() {
        let link = build_mailto("s", "see https://x.org/a_b-c.d~e", "", &["a@x.com"]);
        assert!(link.contains("https%3A//x.org/a_b-c.d~e"));
    }

    #[test]
    fn no_recipients_still_builds_a_link() {
        let link = build_mailto::<&str>("s", "m", "me@x.com", &[]);
        assert!(link.starts_with("mailto:?subject=s&body="));
    }
}
