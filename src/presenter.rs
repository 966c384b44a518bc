//! Maps session state onto the visible UI regions.

use crate::diagnosis::{DiagnosisRecord, Severity};
use crate::session::Session;

/// Color bucket for confidence and severity indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Mid,
    Poor,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "tone-good",
            Self::Mid => "tone-mid",
            Self::Poor => "tone-poor",
        }
    }
}

/// Bucket a confidence percentage. Thresholds sit at 90 and 70.
pub fn confidence_tone(confidence: f32) -> Tone {
    if confidence >= 90.0 {
        Tone::Good
    } else if confidence >= 70.0 {
        Tone::Mid
    } else {
        Tone::Poor
    }
}

impl Severity {
    pub fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Good,
            Self::Medium => Tone::Mid,
            Self::High => Tone::Poor,
        }
    }
}

pub fn format_confidence(confidence: f32) -> String {
    format!("{}%", confidence)
}

/// Content of the upload panel.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadRegion {
    DropZone,
    /// Preview of the uploaded image (data URI)
    Preview(String),
}

/// Which regions are visible for a given session.
#[derive(Debug, Clone, PartialEq)]
pub struct Regions {
    pub upload: UploadRegion,
    pub loading: bool,
    /// Detection result and plant info, shown together
    pub result: Option<&'static DiagnosisRecord>,
    /// "Ready to Analyze" hint
    pub placeholder: bool,
}

pub fn regions(session: &Session) -> Regions {
    let loading = session.is_analyzing();
    let result = session.prediction().filter(|_| !loading);
    let upload = match session.uploaded_image() {
        Some(uri) => UploadRegion::Preview(uri.to_string()),
        None => UploadRegion::DropZone,
    };
    let placeholder = upload == UploadRegion::DropZone && !loading && result.is_none();

    Regions {
        upload,
        loading,
        result,
        placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::CATALOG;

    #[test]
    fn test_confidence_tone_buckets() {
        assert_eq!(confidence_tone(96.8), Tone::Good);
        assert_eq!(confidence_tone(94.2), Tone::Good);
        assert_eq!(confidence_tone(87.6), Tone::Mid);
        assert_eq!(confidence_tone(42.0), Tone::Poor);
    }

    #[test]
    fn test_confidence_tone_boundaries() {
        assert_eq!(confidence_tone(90.0), Tone::Good);
        assert_eq!(confidence_tone(89.9), Tone::Mid);
        assert_eq!(confidence_tone(70.0), Tone::Mid);
        assert_eq!(confidence_tone(69.9), Tone::Poor);
    }

    #[test]
    fn test_severity_tone() {
        assert_eq!(Severity::Low.tone().css_class(), "tone-good");
        assert_eq!(Severity::Medium.tone().css_class(), "tone-mid");
        assert_eq!(Severity::High.tone().css_class(), "tone-poor");
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(94.2), "94.2%");
        assert_eq!(format_confidence(87.6), "87.6%");
        assert_eq!(format_confidence(100.0), "100%");
    }

    #[test]
    fn test_regions_idle() {
        let r = regions(&Session::new());
        assert_eq!(r.upload, UploadRegion::DropZone);
        assert!(!r.loading);
        assert!(r.result.is_none());
        assert!(r.placeholder);
    }

    #[test]
    fn test_regions_analyzing() {
        let mut session = Session::new();
        session.begin_analysis("data:image/png;base64,AA==".to_string());
        let r = regions(&session);
        assert_eq!(r.upload, UploadRegion::Preview("data:image/png;base64,AA==".to_string()));
        assert!(r.loading);
        assert!(r.result.is_none());
        assert!(!r.placeholder);
    }

    #[test]
    fn test_regions_done() {
        let mut session = Session::new();
        let request = session.begin_analysis("data:image/png;base64,AA==".to_string());
        session.complete(request, &CATALOG[1]).unwrap();
        let r = regions(&session);
        assert!(!r.loading);
        assert_eq!(r.result.map(|rec| rec.plant_info.common_name), Some("Aloe Vera"));
        assert!(!r.placeholder);
    }
}
