//! Static phishing-spotting tips shown alongside the quiz.

/// General advice, independent of any particular sample.
pub const TIPS: [&str; 4] = [
    "Hover links before clicking; watch for mismatched domains.",
    "Check the sender domain and display name for spoofing.",
    "Look for urgency, threats, or password reset bait.",
    "Grammar and formatting oddities often signal phishing.",
];
