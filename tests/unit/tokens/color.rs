use super::*;

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(parse_hex("#fff").unwrap(), Rgba8::opaque(255, 255, 255));
    assert_eq!(parse_hex("#3B82F6").unwrap(), Rgba8::opaque(0x3b, 0x82, 0xf6));
    let c = parse_hex("#0000ff80").unwrap();
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 0x80);
    assert!(parse_hex("#12345").is_err());
    assert!(parse_hex("#zzzzzz").is_err());
}

#[test]
fn classifies_functions_gradients_and_keywords() {
    assert_eq!(classify("rgba(0,0,0,0.5)"), ColorKind::Function);
    assert_eq!(classify("HSL(200, 50%, 50%)"), ColorKind::Function);
    assert_eq!(
        classify("linear-gradient(135deg, #fff 0%, #000 100%)"),
        ColorKind::Gradient
    );
    assert_eq!(
        classify("transparent"),
        ColorKind::Keyword(Rgba8::transparent())
    );
    assert_eq!(classify("blue-ish"), ColorKind::Invalid);
    assert!(is_hex("#abc"));
    assert!(!is_hex("gradient"));
    assert!(is_gradient("radial-gradient(#fff, #000)"));
}

#[test]
fn alpha_functions_are_not_hex() {
    assert!(is_alpha_function("rgba(15, 23, 42, 0.1)"));
    assert!(!is_alpha_function("#0F172A"));
    assert!(!is_alpha_function("linear-gradient(90deg, #fff, #000)"));
}
