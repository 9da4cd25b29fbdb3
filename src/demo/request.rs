use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One fixed phrase to be rendered as a sample audio file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoRequest {
    /// Output file stem, unique within the list.
    pub id: String,
    /// Shown in progress output only.
    pub description: String,
    pub text: String,
    pub language_code: String,
}

impl DemoRequest {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
        language_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            text: text.into(),
            language_code: language_code.into(),
        }
    }
}

/// Translated turns of the three demo conversations, in playback order.
pub static DEMO_REQUESTS: Lazy<Vec<DemoRequest>> = Lazy::new(|| {
    vec![
        // Plumber issue: Odia worker, Kannada employer
        DemoRequest::new(
            "demo1_turn1",
            "Worker tells employer about leak (heard in Kannada)",
            "ಸಾರ್, ಬಾತ್ರೂಮ್ ಪೈಪ್ ಲೀಕ್ ಆಗ್ತಿದೆ. ಇವತ್ತೇ ಸರಿ ಮಾಡಿದ್ರೆ ಒಳ್ಳೆಯದು.",
            "kn-IN",
        ),
        DemoRequest::new(
            "demo1_turn2",
            "Employer replies (heard in Odia)",
            "ଠିକ୍ ଅଛି, ପ୍ଲମ୍ବର୍ କୁ ଡାକୁଛି। ସନ୍ଧ୍ୟାରେ ଆସିବ।",
            "od-IN",
        ),
        // Doctor visit: Bengali patient, Tamil doctor
        DemoRequest::new(
            "demo2_turn1",
            "Patient describes pain (heard in Tamil)",
            "டாக்டர், என் வயிற்றில் மிகவும் வலி. மூன்று நாளாக இருக்கு.",
            "ta-IN",
        ),
        DemoRequest::new(
            "demo2_turn2",
            "Doctor gives advice (heard in Bengali)",
            "খাবার ঠিকমতো খাচ্ছেন? জল বেশি করে খান। কাল আবার আসুন।",
            "bn-IN",
        ),
        // Wage negotiation: Hindi worker, Malayalam employer
        DemoRequest::new(
            "demo3_turn1",
            "Worker asks about wages (heard in Malayalam)",
            "ചേട്ടാ, ഇന്നത്തെ കൂലി എത്രയാ? ഇന്നലെ ആറുനൂറ് രൂപ പറഞ്ഞിരുന്നല്ലോ.",
            "ml-IN",
        ),
        DemoRequest::new(
            "demo3_turn2",
            "Employer offers rate (heard in Hindi)",
            "आज ₹650 दूँगा। ओवरटाइम हुआ तो ₹800.",
            "hi-IN",
        ),
    ]
});

/// Look up demo records by id, keeping the order of `ids`.
///
/// Returns the matches and the ids that are not in the list.
pub fn select_demos<'a>(ids: &'a [String]) -> (Vec<DemoRequest>, Vec<&'a str>) {
    let mut selected = Vec::new();
    let mut unknown = Vec::new();

    for id in ids {
        match DEMO_REQUESTS.iter().find(|demo| &demo.id == id) {
            Some(demo) => selected.push(demo.clone()),
            None => unknown.push(id.as_str()),
        }
    }

    (selected, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::validation::{validate_language_code, validate_tts_text};
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_are_unique() {
        let ids: HashSet<&str> = DEMO_REQUESTS.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), DEMO_REQUESTS.len());
        assert_eq!(DEMO_REQUESTS.len(), 6);
    }

    #[test]
    fn test_demo_order() {
        let ids: Vec<&str> = DEMO_REQUESTS.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "demo1_turn1",
                "demo1_turn2",
                "demo2_turn1",
                "demo2_turn2",
                "demo3_turn1",
                "demo3_turn2"
            ]
        );
    }

    #[test]
    fn test_demos_pass_validation() {
        for demo in DEMO_REQUESTS.iter() {
            assert!(validate_tts_text(&demo.text).is_ok(), "{}", demo.id);
            assert!(validate_language_code(&demo.language_code).is_ok(), "{}", demo.id);
        }
    }

    #[test]
    fn test_select_demos() {
        let ids = vec![
            "demo2_turn2".to_string(),
            "nope".to_string(),
            "demo1_turn1".to_string(),
        ];
        let (selected, unknown) = select_demos(&ids);

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, "demo2_turn2");
        assert_eq!(selected[1].id, "demo1_turn1");
        assert_eq!(unknown, vec!["nope"]);
    }
}
