// src/types/response.rs

use serde::{Deserialize, Serialize};

use crate::types::profile::Profile;

/// Coarse confidence label over how complete a parsed profile is.
///
/// Consumers needing parity must reproduce this classification exactly:
/// High Quality requires name, email, at least one experience entry and at
/// least one technical skill; Partial requires name or email; anything else
/// is Basic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionQuality {
    #[serde(rename = "High Quality")]
    HighQuality,
    Partial,
    Basic,
}

impl ExtractionQuality {
    pub fn classify(profile: &Profile) -> Self {
        let has_name = profile.personal_info.name.is_some();
        let has_email = profile.personal_info.email.is_some();

        if has_name
            && has_email
            && !profile.experience.is_empty()
            && !profile.skills.technical.is_empty()
        {
            ExtractionQuality::HighQuality
        } else if has_name || has_email {
            ExtractionQuality::Partial
        } else {
            ExtractionQuality::Basic
        }
    }
}

/// Envelope handed to downstream consumers: the profile plus the quality
/// label and the filename it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub extraction_quality: ExtractionQuality,
    pub profile: Profile,
}

impl ExtractionResponse {
    pub fn success(filename: String, profile: Profile) -> Self {
        let extraction_quality = ExtractionQuality::classify(&profile);
        Self {
            success: true,
            message: "Resume processed successfully".to_string(),
            filename,
            extraction_quality,
            profile,
        }
    }
}
