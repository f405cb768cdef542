use yt_share_agent::prompt::{
    MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, build_promo_prompt, sanitize_field,
};

#[test]
fn test_prompt_embeds_title_and_description() {
    let prompt = build_promo_prompt("Rust en 10 minutos", Some("Aprende ownership"));

    assert!(prompt.contains("Título del vídeo: \"Rust en 10 minutos\""));
    assert!(prompt.contains("Descripción: \"Aprende ownership\""));
}

#[test]
fn test_prompt_without_description() {
    let prompt = build_promo_prompt("Rust en 10 minutos", None);
    assert!(prompt.contains("Descripción: \"\""));
}

#[test]
fn test_prompt_keeps_link_out() {
    let prompt = build_promo_prompt("T", Some("d"));

    assert!(prompt.contains("el enlace lo añadiremos después"));
    assert!(prompt.contains("máximo 3"));
    assert!(prompt.contains("llamado a la acción"));
    assert!(!prompt.contains("http"));
}

#[test]
fn test_sanitize_field_strips_control_chars() {
    let input = "Title with \u{007F} control \u{0000} chars\nsecond line";
    assert_eq!(
        sanitize_field(input, 100),
        "Title with  control  chars\nsecond line"
    );
}

#[test]
fn test_prompt_truncates_long_fields() {
    let long_description = "d".repeat(MAX_DESCRIPTION_LEN + 50);
    let long_title = "t".repeat(MAX_TITLE_LEN + 50);
    let prompt = build_promo_prompt(&long_title, Some(&long_description));

    assert!(prompt.contains(&"d".repeat(MAX_DESCRIPTION_LEN)));
    assert!(!prompt.contains(&"d".repeat(MAX_DESCRIPTION_LEN + 1)));
    assert!(!prompt.contains(&"t".repeat(MAX_TITLE_LEN + 1)));
}
