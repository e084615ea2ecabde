use typefinder::{match_type_string, TypeCount, TypeExtractor, TypeMatcher, TypeVocabulary, NO_MATCH};
use typefinder::config::TypeFinderConfig;
use typefinder::parser::{normalize_name, LatinParser};
use typefinder::utils::string::contains_phrase;

const REGISTRY: &[&str] = &[
    "Kibera Health Centre",
    "Mbale Health Centre II",
    "Jinja Health Centre",
    "Gulu Referral Hospital",
    "Lira Referral Hospital",
    "Kisumu District Hospital",
    "Nakuru District Hospital",
    "Embu District Hospital",
    "Mathare Clinic",
    "Kawangware Clinic",
    "St. Luke's Mission Hospital",
    "Bondo Mission Hospital",
];

#[test]
fn specific_types_beat_their_sub_phrases() {
    let vocabulary = TypeVocabulary::from_phrases(["district hospital", "hospital"]);
    assert_eq!(match_type_string("abc district hospital xyz", &vocabulary), Some("district hospital"));
    assert_eq!(match_type_string("abc referral hospital", &vocabulary), Some("hospital"));
    assert_eq!(match_type_string("abc clinic", &vocabulary), None);
}

#[test]
fn counted_vocabularies_sort_by_specificity() {
    let vocabulary = TypeVocabulary::from_counts(&[
        TypeCount::new("hospital", 50),
        TypeCount::new("mission hospital", 4),
    ]);
    let matcher = TypeMatcher::with_defaults(vocabulary);
    assert_eq!(matcher.match_name("Bondo Mission Hospital"), Some("mission hospital"));
    assert_eq!(matcher.match_name("Gulu Hospital"), Some("hospital"));
    assert_eq!(matcher.match_name("Mathare Clinic").unwrap_or(NO_MATCH), "no match");
}

#[test]
fn extracted_types_match_back_onto_their_names() {
    let types = TypeExtractor::new_with_defaults().unwrap().extract(REGISTRY.iter().copied()).unwrap();
    assert!(!types.is_empty());

    let matcher = TypeMatcher::with_defaults(TypeVocabulary::from_extracted(&types));
    for raw in REGISTRY {
        let cleaned = normalize_name(raw);
        let contains_any = types.iter().any(|t| contains_phrase(&cleaned, &t.phrase));
        let matched = matcher.match_name(raw);
        assert_eq!(contains_any, matched.is_some(), "{}", raw);
        if let Some(found) = matched {
            assert!(contains_phrase(&cleaned, found));
        }
    }
}

#[test]
fn match_names_preserves_input_order() {
    let matcher = TypeMatcher::with_defaults(TypeVocabulary::from_phrases(["clinic", "health centre"]));
    let matched = matcher.match_names(["Mathare Clinic", "Gulu Hospital", "Jinja Health Centre"]);
    assert_eq!(matched, vec![Some("clinic"), None, Some("health centre")]);
}

#[test]
fn matcher_cleans_names_with_the_extraction_settings() {
    let config = TypeFinderConfig::from_ini_str("[text_processing]\nfold_accents = false\n").unwrap();
    let parser_config = config.parser.clone();
    let names = ["Centre Médical Kibera", "Centre Médical Gulu", "Centre Médical Jinja"];
    let types = TypeExtractor::new(config).unwrap().extract(names).unwrap();
    assert_eq!(types[0].phrase, "centre mdical");

    let vocabulary = TypeVocabulary::from_extracted(&types);
    let matcher = TypeMatcher::new(LatinParser::new(parser_config), vocabulary.clone());
    assert_eq!(matcher.match_name("Centre Médical Embu"), Some("centre mdical"));

    let folding = TypeMatcher::with_defaults(vocabulary);
    assert_eq!(folding.match_name("Centre Médical Embu"), None);
}
