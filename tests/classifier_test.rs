use proptest::prelude::*;
use sms_triage::classifier::Classifier;
use sms_triage::models::MessageCategory;

fn classifier() -> Classifier {
    Classifier::new().expect("Failed to create classifier")
}

#[test]
fn test_trai_suffix_letters_map_to_categories() {
    let classifier = classifier();

    assert_eq!(classifier.classify_address("XY-HEAD-P"), MessageCategory::Promotional);
    assert_eq!(classifier.classify_address("XY-HEAD-T"), MessageCategory::Transactional);
    assert_eq!(classifier.classify_address("XY-HEAD-S"), MessageCategory::Service);
    assert_eq!(classifier.classify_address("XY-HEAD-G"), MessageCategory::Government);

    // Unmapped suffix letter stays Unknown
    assert_eq!(classifier.classify_address("XY-HEAD-X"), MessageCategory::Unknown);
}

#[test]
fn test_trai_matching_is_case_folded() {
    let classifier = classifier();
    assert_eq!(classifier.classify_address("vm-hdfcbk-t"), MessageCategory::Transactional);
    assert_eq!(classifier.classify_address("  VM-HDFCBK-T  "), MessageCategory::Transactional);
}

#[test]
fn test_header_without_suffix_defers_to_content() {
    let classifier = classifier();
    assert_eq!(classifier.classify_address("XY-HEAD"), MessageCategory::Unknown);

    let bodies = vec!["Rs 500 debited from a/c via upi".to_string()];
    assert_eq!(classifier.classify("XY-HEAD", &bodies), MessageCategory::Transactional);
}

#[test]
fn test_phone_number_shapes() {
    let classifier = classifier();

    assert_eq!(classifier.classify_address("9876543210"), MessageCategory::Personal);
    assert_eq!(classifier.classify_address("+919876543210"), MessageCategory::Personal);
    assert_eq!(classifier.classify_address("+1 (555) 010-4477"), MessageCategory::Personal);
    assert_eq!(classifier.classify_address("56789"), MessageCategory::Service);
}

#[test]
fn test_garbage_input_is_unknown() {
    let classifier = classifier();

    assert_eq!(classifier.classify_address(""), MessageCategory::Unknown);
    assert_eq!(classifier.classify_address("\t \n"), MessageCategory::Unknown);
    assert_eq!(classifier.classify_address("not-a-sender-id"), MessageCategory::Unknown);
    // 9 digits sits between the short-code and phone-number ranges
    assert_eq!(classifier.classify_address("123456789"), MessageCategory::Unknown);
}

#[test]
fn test_content_inference_per_category() {
    let classifier = classifier();

    let promo = vec!["Mega sale! Extra discount with coupon code".to_string()];
    assert_eq!(classifier.infer_from_content(&promo), MessageCategory::Promotional);

    let trans = vec!["Rs 500 debited from a/c via upi".to_string()];
    assert_eq!(classifier.infer_from_content(&trans), MessageCategory::Transactional);

    let service = vec!["Reminder: delivery of your order is tomorrow".to_string()];
    assert_eq!(classifier.infer_from_content(&service), MessageCategory::Service);

    let govt = vec!["Govt of India: aadhaar update camp this week".to_string()];
    assert_eq!(classifier.infer_from_content(&govt), MessageCategory::Government);
}

#[test]
fn test_content_inference_tie_precedence() {
    let classifier = classifier();

    // Promotional beats transactional on a 1-1 tie
    let bodies = vec!["special offer on your next payment".to_string()];
    assert_eq!(classifier.infer_from_content(&bodies), MessageCategory::Promotional);

    // Transactional beats service on a 1-1 tie
    let bodies = vec!["payment reminder".to_string()];
    assert_eq!(classifier.infer_from_content(&bodies), MessageCategory::Transactional);

    // Service beats government on a 1-1 tie
    let bodies = vec!["your ticket for the tax hearing".to_string()];
    assert_eq!(classifier.infer_from_content(&bodies), MessageCategory::Service);
}

#[test]
fn test_content_inference_defaults() {
    let classifier = classifier();

    // No samples at all
    assert_eq!(classifier.infer_from_content(&[]), MessageCategory::Service);

    // Samples with no keyword hits
    let bodies = vec!["see you at dinner tonight".to_string()];
    assert_eq!(classifier.infer_from_content(&bodies), MessageCategory::Service);
}

#[test]
fn test_content_inference_respects_sample_size() {
    let classifier = Classifier::with_sample_size(1).expect("Failed to create classifier");

    // Only the first (newest) body is sampled; the promotional one is ignored
    let bodies = vec![
        "see you at dinner tonight".to_string(),
        "mega sale with extra discount".to_string(),
    ];
    assert_eq!(classifier.infer_from_content(&bodies), MessageCategory::Service);
}

proptest! {
    #[test]
    fn classify_address_never_panics(address in ".*") {
        let classifier = Classifier::new().expect("Failed to create classifier");
        let _ = classifier.classify_address(&address);
    }

    #[test]
    fn digit_only_addresses_follow_length_rules(digits in "[0-9]{3,15}") {
        let classifier = Classifier::new().expect("Failed to create classifier");
        let expected = match digits.len() {
            10..=15 => MessageCategory::Personal,
            3..=8 => MessageCategory::Service,
            _ => MessageCategory::Unknown,
        };
        prop_assert_eq!(classifier.classify_address(&digits), expected);
    }

    #[test]
    fn inference_never_returns_unknown(bodies in proptest::collection::vec(".*", 0..6)) {
        let classifier = Classifier::new().expect("Failed to create classifier");
        let category = classifier.infer_from_content(&bodies);
        prop_assert_ne!(category, MessageCategory::Unknown);
        prop_assert_ne!(category, MessageCategory::Personal);
    }
}
