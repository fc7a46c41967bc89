//! Compiled-in records served when every other source is unavailable.

use crate::domain::community::{Category, CommunityFeed, CommunityPost};
use crate::domain::directory::{DisorderFocus, TherapistRecord};
use crate::domain::foundation::{PostId, Rating, TherapistId};

/// Name of the terminal stage in logs and load outcomes.
pub const BUILTIN_SOURCE: &str = "built-in";

/// Therapists shown when neither the API nor the snapshot can be reached.
pub fn therapists() -> Vec<TherapistRecord> {
    vec![
        TherapistRecord {
            id: TherapistId::new(1),
            name: "Dr. Priya Sharma".to_string(),
            specialization: "Pediatric Psychologist".to_string(),
            disorder_focus: DisorderFocus::Adhd,
            location: "Mumbai, 400001".to_string(),
            languages: vec!["English".to_string(), "Hindi".to_string()],
            fee: "₹1500 per session".to_string(),
            rating: Rating::try_new(4.8).unwrap_or_default(),
            contact_handle: "+91 9876543210".to_string(),
        },
        TherapistRecord {
            id: TherapistId::new(2),
            name: "Dr. Rajesh Kumar".to_string(),
            specialization: "Speech Therapist".to_string(),
            disorder_focus: DisorderFocus::SpeechDelay,
            location: "Delhi, 110001".to_string(),
            languages: vec![
                "English".to_string(),
                "Hindi".to_string(),
                "Punjabi".to_string(),
            ],
            fee: "₹1200 per session".to_string(),
            rating: Rating::try_new(4.6).unwrap_or_default(),
            contact_handle: "+91 9876543211".to_string(),
        },
    ]
}

/// Community posts shown when the snapshot cannot be read, already partitioned.
pub fn community() -> CommunityFeed {
    CommunityFeed::new()
        .with_partition(
            Category::CurrentlyDealing,
            vec![
                CommunityPost::reconstitute(
                    PostId::new(1),
                    "Need advice for ADHD management",
                    "My 7-year-old was recently diagnosed with ADHD. Looking for practical tips from other parents.",
                    "Parent123",
                    "2 hours ago",
                    5,
                    12,
                ),
                CommunityPost::reconstitute(
                    PostId::new(2),
                    "Speech therapy progress sharing",
                    "Wanted to share our 6-month journey with speech therapy. Happy to answer questions!",
                    "MomOfTwo",
                    "1 day ago",
                    8,
                    24,
                ),
            ],
        )
        .with_partition(
            Category::AlreadySolved,
            vec![CommunityPost::reconstitute(
                PostId::new(3),
                "Successfully managed autism spectrum challenges",
                "After 2 years of therapy, my child has made incredible progress. Here's what worked for us.",
                "ProudDad",
                "3 days ago",
                15,
                45,
            )],
        )
}
