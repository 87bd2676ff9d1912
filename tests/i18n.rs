//! 언어 결정 순서와 TOML 언어팩 테스트.
use std::fs;

use rtfc_cost_calculator::i18n::{keys, resolve_language, Translator};

#[test]
fn cli_language_wins_over_config() {
    assert_eq!(resolve_language("ko", Some("en")), "ko-kr");
    assert_eq!(resolve_language("EN", Some("ko")), "en-gb");
    assert_eq!(resolve_language("ko_KR", None), "ko-kr");
}

#[test]
fn auto_falls_through_to_config() {
    assert_eq!(resolve_language("auto", Some("en")), "en-gb");
    assert_eq!(resolve_language("", Some("ko")), "ko-kr");
    assert_eq!(resolve_language("auto", Some("en-us")), "en-us");
}

#[test]
fn resolved_code_selects_builtin_table() {
    let ko = Translator::new(&resolve_language("ko", None));
    assert_eq!(ko.language_code(), "ko");
    assert_eq!(ko.t(keys::TABLE_PER_RTFC), "RTFC당 펜스");
    let en = Translator::new("en-gb");
    assert_eq!(en.language_code(), "en");
    assert_eq!(en.t(keys::TABLE_PER_RTFC), "pence / RTFC");
}

#[test]
fn unknown_key_falls_back_to_key() {
    let tr = Translator::new("ko");
    assert_eq!(tr.t("no.such.key"), "no.such.key");
}

#[test]
fn pack_overrides_builtin_strings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("en.toml"),
        "[report]\nheading = \"BASE\"\n\n[table]\nbase = \"ppl\"\n",
    )
    .unwrap();
    let pack = dir.path().to_str().unwrap();

    // en-gb.toml이 없으면 기본 코드 en.toml을 쓴다
    let tr = Translator::new_with_pack("en-gb", Some(pack));
    assert_eq!(tr.t(keys::REPORT_HEADING), "BASE");
    assert_eq!(tr.t(keys::TABLE_BASE), "ppl");
    // 언어팩에 없는 키는 내장 문자열
    assert_eq!(tr.t(keys::TABLE_TOTAL), "pence / litre total");
}

#[test]
fn full_code_pack_is_preferred() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.toml"), "[report]\nheading = \"BASE\"\n").unwrap();
    fs::write(dir.path().join("en-gb.toml"), "[report]\nheading = \"FULL\"\n").unwrap();
    let tr = Translator::new_with_pack("en-gb", Some(dir.path().to_str().unwrap()));
    assert_eq!(tr.t(keys::REPORT_HEADING), "FULL");
}

#[test]
fn malformed_pack_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.toml"), "[report\nheading = ").unwrap();
    let tr = Translator::new_with_pack("en-gb", Some(dir.path().to_str().unwrap()));
    assert_eq!(tr.t(keys::REPORT_HEADING), "### Walk-through");
}

#[test]
fn missing_pack_dir_uses_builtin_strings() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let tr = Translator::new_with_pack("ko-kr", Some(missing.to_str().unwrap()));
    assert_eq!(tr.t(keys::REPORT_HEADING), "### 계산 과정");
}
