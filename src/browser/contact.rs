use super::Session;
use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
    static ref PHONE_REGEX: Regex =
        Regex::new(r"[\+]?[(]?[0-9]{3}[)]?[-\s\.]?[0-9]{3}[-\s\.]?[0-9]{4,6}").unwrap();
}

/// Open the creator page and collect its link, email and phone number.
pub async fn get_contact_info<S: Session + ?Sized>(
    session: &S,
    creator_url: &str,
) -> Result<Vec<String>> {
    session.goto(creator_url).await?;
    let header = session.creator_header().await?;

    let contact_info = contact_entries(&header.bio, header.link.as_deref());
    debug!(creator_url = %creator_url, found = contact_info.len(), "Extracted contact info");

    Ok(contact_info)
}

/// Link first, then the first email and the first phone number found in the bio.
pub fn contact_entries(bio: &str, link: Option<&str>) -> Vec<String> {
    let mut contact_info = Vec::new();

    if let Some(link) = link {
        contact_info.push(link.to_string());
    }
    if let Some(email) = EMAIL_REGEX.find(bio) {
        contact_info.push(email.as_str().to_string());
    }
    if let Some(phone) = PHONE_REGEX.find(bio) {
        contact_info.push(phone.as_str().to_string());
    }

    contact_info
}
