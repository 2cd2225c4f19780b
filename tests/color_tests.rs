use illumine::utils::color::Color;

#[test]
fn test_palette_hex_codes() {
    assert_eq!(Color::White.hex(), "#FFFFFF");
    assert_eq!(Color::Red.hex(), "#FF5C5C");
    assert_eq!(Color::Amber.hex(), "#FFD700");
    assert_eq!(Color::Blue.hex(), "#5C96FF");
}

#[test]
fn test_parse_names() {
    assert_eq!("white".parse::<Color>().unwrap(), Color::White);
    assert_eq!("RED".parse::<Color>().unwrap(), Color::Red);
    assert_eq!("Amber".parse::<Color>().unwrap(), Color::Amber);
    assert_eq!("yellow".parse::<Color>().unwrap(), Color::Amber);
    assert_eq!(" blue ".parse::<Color>().unwrap(), Color::Blue);
}

#[test]
fn test_parse_hex() {
    assert_eq!("#ff5c5c".parse::<Color>().unwrap(), Color::Red);
    assert_eq!("5C96FF".parse::<Color>().unwrap(), Color::Blue);
    assert_eq!(Color::from_hex("#FFFFFF"), Some(Color::White));
}

#[test]
fn test_parse_rejects_unknown() {
    assert!("green".parse::<Color>().is_err());
    assert!("#00FF00".parse::<Color>().is_err());
    assert!("".parse::<Color>().is_err());
}

#[test]
fn test_alpha_suffix() {
    assert_eq!(Color::Amber.with_alpha("22"), "#FFD70022");
}

#[test]
fn test_display_roundtrips_through_parse() {
    for color in Color::ALL {
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }
}
