use player_domain::error::DomainError;
use player_macros::domain_enum;

#[domain_enum]
enum Color {
    Red,
    DarkBlue,
}

fn main() {
    assert_eq!(Color::VARIANTS.len(), 2);
    assert_eq!(Color::DarkBlue.as_str(), "DARK_BLUE");
    assert_eq!(Color::Red.to_string(), "RED");
    assert_eq!("DARK_BLUE".parse::<Color>().unwrap(), Color::DarkBlue);

    match "red".parse::<Color>() {
        Err(DomainError::UnknownVariant { kind, value }) => {
            assert_eq!(kind, "Color");
            assert_eq!(value, "red");
        }
        other => panic!("unexpected {other:?}"),
    }

    let json = serde_json::to_string(&Color::DarkBlue).unwrap();
    assert_eq!(json, "\"DARK_BLUE\"");
    assert!(serde_json::from_str::<Color>("\"GREEN\"").is_err());
}
