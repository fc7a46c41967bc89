//! WhatsApp deep links for consultation requests.

use super::TherapistRecord;

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Consultation request pre-filled in the chat.
pub fn booking_message(therapist: &TherapistRecord) -> String {
    format!(
        "Hi Dr. {}, I would like to book a consultation for my child. \
         I found your profile on the Therapist Discovery Platform.",
        therapist.name
    )
}

/// Builds `https://wa.me/<digits>?text=<message>` for a therapist.
///
/// Every non-digit character is removed from the contact handle.
pub fn booking_link(therapist: &TherapistRecord) -> String {
    let digits: String = therapist
        .contact_handle
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        digits,
        urlencoding::encode(&booking_message(therapist))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::DisorderFocus;
    use crate::domain::foundation::{Rating, TherapistId};

    fn therapist() -> TherapistRecord {
        TherapistRecord {
            id: TherapistId::new(1),
            name: "Priya Sharma".to_string(),
            specialization: "Pediatric Psychologist".to_string(),
            disorder_focus: DisorderFocus::Adhd,
            location: "Mumbai, 400001".to_string(),
            languages: vec!["English".to_string()],
            fee: "₹1500 per session".to_string(),
            rating: Rating::try_new(4.8).unwrap(),
            contact_handle: "+91 98765-43210".to_string(),
        }
    }

    #[test]
    fn link_strips_non_digits_from_handle() {
        let link = booking_link(&therapist());
        assert!(link.starts_with("https://wa.me/919876543210?text="));
    }

    #[test]
    fn message_is_url_encoded() {
        let link = booking_link(&therapist());
        assert!(link.contains("Hi%20Dr.%20Priya%20Sharma%2C%20I%20would%20like"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn message_names_the_therapist() {
        assert_eq!(
            booking_message(&therapist()),
            "Hi Dr. Priya Sharma, I would like to book a consultation for my child. \
             I found your profile on the Therapist Discovery Platform."
        );
    }
}
