use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const PIN_PROMPT: &str = "pin.prompt";
    pub const PIN_INCORRECT: &str = "pin.incorrect";
    pub const PIN_INCOMPLETE: &str = "pin.incomplete";
    pub const PIN_UNLOCKED: &str = "pin.unlocked";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_PROMPT_FUEL: &str = "calc.prompt_fuel";
    pub const CALC_KEEP_DEFAULT: &str = "calc.keep_default";
    pub const CALC_PROMPT_PRICE: &str = "calc.prompt_price";
    pub const CALC_PROMPT_UNIT: &str = "calc.prompt_unit";
    pub const CALC_PROMPT_CURRENCY: &str = "calc.prompt_currency";
    pub const CALC_PROMPT_DENSITY: &str = "calc.prompt_density";
    pub const CALC_PROMPT_MULTIPLIER: &str = "calc.prompt_multiplier";
    pub const CALC_PROMPT_ENERGY_RATIO: &str = "calc.prompt_energy_ratio";
    pub const CALC_PROMPT_SHIP_VALUE: &str = "calc.prompt_ship_value";
    pub const CALC_PROMPT_SHIP_UNIT: &str = "calc.prompt_ship_unit";
    pub const CALC_PROMPT_SHIP_CURRENCY: &str = "calc.prompt_ship_currency";
    pub const CALC_FAILED: &str = "calc.failed";

    pub const CATALOG_HEADING: &str = "catalog.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_FX: &str = "settings.current_fx";
    pub const SETTINGS_PROMPT_FX: &str = "settings.prompt_fx";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_UNKNOWN_TAG: &str = "error.unknown_tag";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_INTRO: &str = "report.intro";
    pub const REPORT_FX: &str = "report.fx";
    pub const REPORT_UNIT: &str = "report.unit";
    pub const REPORT_ENERGY_ADJUSTED: &str = "report.energy_adjusted";
    pub const REPORT_SHIPPING: &str = "report.shipping";
    pub const REPORT_SPLIT: &str = "report.split";
    pub const REPORT_RTFC_ONE: &str = "report.rtfc_one";
    pub const REPORT_RTFC_MANY: &str = "report.rtfc_many";

    pub const TABLE_BASE: &str = "table.base";
    pub const TABLE_SHIPPING: &str = "table.shipping";
    pub const TABLE_TOTAL: &str = "table.total";
    pub const TABLE_PER_RTFC: &str = "table.per_rtfc";
    pub const TABLE_RTFCS_PER_LITRE: &str = "table.rtfcs_per_litre";

    pub const GUI_SIDEBAR_FX: &str = "gui.sidebar_fx";
    pub const GUI_FX_LABEL: &str = "gui.fx_label";
    pub const GUI_FUEL: &str = "gui.fuel";
    pub const GUI_PRICE: &str = "gui.price";
    pub const GUI_DENSITY: &str = "gui.density";
    pub const GUI_UNIT: &str = "gui.unit";
    pub const GUI_CURRENCY: &str = "gui.currency";
    pub const GUI_MULTIPLIER: &str = "gui.multiplier";
    pub const GUI_ENERGY_RATIO: &str = "gui.energy_ratio";
    pub const GUI_SHIP_VALUE: &str = "gui.ship_value";
    pub const GUI_SHIP_UNIT: &str = "gui.ship_unit";
    pub const GUI_SHIP_CURRENCY: &str = "gui.ship_currency";
    pub const GUI_LANGUAGE: &str = "gui.language";
    pub const GUI_SAVE_SETTINGS: &str = "gui.save_settings";
    pub const GUI_LOCK: &str = "gui.lock";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            log::info!("language pack loaded for {lang_code}");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩이 내장 문자열보다 우선한다.
    /// 한국어 번역이 없으면 영어 문자열로, 그마저 없으면 키 자체로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let builtin = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or(key).to_string()
    }

    /// `{name}` 자리표시자를 채운 번역 문자열.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// 템플릿의 `{key}`를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-gb".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-gb" | "en-uk" => Some("en-gb".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-gb".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-gb".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-gb)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = match toml::from_str(src) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("ignoring malformed language pack: {e}");
            return None;
        }
    };
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        APP_TITLE => "RTFC Cost-per-Certificate Calculator",

        PIN_PROMPT => "Enter 4-digit PIN: ",
        PIN_INCORRECT => "Incorrect PIN. Try again.",
        PIN_INCOMPLETE => "The PIN has 4 digits.",
        PIN_UNLOCKED => "Unlocked.",

        MAIN_MENU_TITLE => "\n=== RTFC Cost-per-Certificate Calculator ===",
        MAIN_MENU_CALCULATE => "1) Calculate cost per certificate",
        MAIN_MENU_CATALOG => "2) Fuel catalog",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",

        CALC_HEADING => "\n-- Cost per certificate --",
        CALC_PROMPT_FUEL => "Fuel number",
        CALC_KEEP_DEFAULT => "(Enter = {default})",
        CALC_PROMPT_PRICE => "Price",
        CALC_PROMPT_UNIT => "Unit [USD/m3, USD/t, GBP/m3, GBP/t]",
        CALC_PROMPT_CURRENCY => "Currency [USD, GBP]",
        CALC_PROMPT_DENSITY => "Density (t / m³)",
        CALC_PROMPT_MULTIPLIER => "RTFC multiplier [1, 2]",
        CALC_PROMPT_ENERGY_RATIO => "Energy ratio",
        CALC_PROMPT_SHIP_VALUE => "Shipping premium",
        CALC_PROMPT_SHIP_UNIT => "Ship unit [per m3, per tonne]",
        CALC_PROMPT_SHIP_CURRENCY => "Ship currency [USD, GBP]",
        CALC_FAILED => "Calculation failed: {error}",

        CATALOG_HEADING => "\n-- Fuel catalog --",

        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_FX => "Current FX: USD per GBP = {fx}",
        SETTINGS_PROMPT_FX => "New USD per GBP (Enter to keep): ",
        SETTINGS_CURRENT_LANGUAGE => "Current language: {lang}",
        SETTINGS_PROMPT_LANGUAGE => "Language [en, ko] (Enter to keep): ",
        SETTINGS_INVALID => "Invalid value, unchanged.",
        SETTINGS_SAVED => "Settings saved.",

        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_UNKNOWN_TAG => "Unrecognised value: {value}",

        REPORT_HEADING => "### Walk-through",
        REPORT_INTRO => "For {fuel}, if the indicative quote is {price} {unit} priced in {currency}:",
        REPORT_FX => "* FX conversion – using £1 = ${fx}, that equals £{gbp} per {basis}.",
        REPORT_UNIT => "* Unit conversion – on a litre basis one litre costs {ppl} p{energy_note}.",
        REPORT_ENERGY_ADJUSTED => " (energy-adjusted)",
        REPORT_SHIPPING => "* Shipping premium – adding {ship} p per litre for freight/storage brings the total to {total} p.",
        REPORT_SPLIT => "* Certificate split – this pathway earns {multiplier} {rtfc} per litre, so the all-in cost is {per_cert} pence per certificate.",
        REPORT_RTFC_ONE => "RTFC",
        REPORT_RTFC_MANY => "RTFCs",

        TABLE_BASE => "pence / litre (base)",
        TABLE_SHIPPING => "shipping p/l",
        TABLE_TOTAL => "pence / litre total",
        TABLE_PER_RTFC => "pence / RTFC",
        TABLE_RTFCS_PER_LITRE => "RTFCs per litre",

        GUI_SIDEBAR_FX => "Market FX",
        GUI_FX_LABEL => "USD per GBP",
        GUI_FUEL => "Fuel",
        GUI_PRICE => "Price",
        GUI_DENSITY => "Density (t / m³)",
        GUI_UNIT => "Unit",
        GUI_CURRENCY => "Currency",
        GUI_MULTIPLIER => "RTFC multiplier",
        GUI_ENERGY_RATIO => "Energy ratio",
        GUI_SHIP_VALUE => "Shipping premium",
        GUI_SHIP_UNIT => "Ship unit",
        GUI_SHIP_CURRENCY => "Ship currency",
        GUI_LANGUAGE => "Language",
        GUI_SAVE_SETTINGS => "Save settings",
        GUI_LOCK => "Lock",
        _ => return None,
    };
    Some(s)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "RTFC 인증서 단가 계산기",

        PIN_PROMPT => "4자리 PIN 입력: ",
        PIN_INCORRECT => "PIN이 올바르지 않습니다. 다시 시도하세요.",
        PIN_INCOMPLETE => "PIN은 4자리입니다.",
        PIN_UNLOCKED => "잠금이 해제되었습니다.",

        MAIN_MENU_TITLE => "\n=== RTFC 인증서 단가 계산기 ===",
        MAIN_MENU_CALCULATE => "1) 인증서 단가 계산",
        MAIN_MENU_CATALOG => "2) 연료 카탈로그",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",

        CALC_HEADING => "\n-- 인증서 단가 --",
        CALC_PROMPT_FUEL => "연료 번호",
        CALC_KEEP_DEFAULT => "(엔터 = {default})",
        CALC_PROMPT_PRICE => "시세",
        CALC_PROMPT_UNIT => "단위 [USD/m3, USD/t, GBP/m3, GBP/t]",
        CALC_PROMPT_CURRENCY => "통화 [USD, GBP]",
        CALC_PROMPT_DENSITY => "밀도 (t / m³)",
        CALC_PROMPT_MULTIPLIER => "RTFC 배수 [1, 2]",
        CALC_PROMPT_ENERGY_RATIO => "에너지 비율",
        CALC_PROMPT_SHIP_VALUE => "운송 프리미엄",
        CALC_PROMPT_SHIP_UNIT => "운송 단위 [per m3, per tonne]",
        CALC_PROMPT_SHIP_CURRENCY => "운송 통화 [USD, GBP]",
        CALC_FAILED => "계산 실패: {error}",

        CATALOG_HEADING => "\n-- 연료 카탈로그 --",

        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_FX => "현재 환율: USD per GBP = {fx}",
        SETTINGS_PROMPT_FX => "새 USD per GBP (유지하려면 엔터): ",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어: {lang}",
        SETTINGS_PROMPT_LANGUAGE => "언어 [en, ko] (유지하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 값이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",

        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_UNKNOWN_TAG => "알 수 없는 값: {value}",

        REPORT_HEADING => "### 계산 과정",
        REPORT_INTRO => "{fuel}의 참고 시세가 {currency} 기준 {price} {unit}이면:",
        REPORT_FX => "* 환율 환산 – £1 = ${fx} 적용 시 {basis}당 £{gbp}입니다.",
        REPORT_UNIT => "* 단위 환산 – 리터 기준으로 1리터에 {ppl} p{energy_note}입니다.",
        REPORT_ENERGY_ADJUSTED => " (에너지 보정)",
        REPORT_SHIPPING => "* 운송 프리미엄 – 운송/저장비로 리터당 {ship} p를 더하면 합계 {total} p입니다.",
        REPORT_SPLIT => "* 인증서 배분 – 이 경로는 리터당 {rtfc} {multiplier}장을 받으므로 인증서 1장당 총비용은 {per_cert} 펜스입니다.",
        REPORT_RTFC_ONE => "RTFC",
        REPORT_RTFC_MANY => "RTFC",

        TABLE_BASE => "리터당 펜스 (기본)",
        TABLE_SHIPPING => "운송 p/l",
        TABLE_TOTAL => "리터당 펜스 합계",
        TABLE_PER_RTFC => "RTFC당 펜스",
        TABLE_RTFCS_PER_LITRE => "리터당 RTFC",

        GUI_SIDEBAR_FX => "시장 환율",
        GUI_FX_LABEL => "USD per GBP",
        GUI_FUEL => "연료",
        GUI_PRICE => "시세",
        GUI_DENSITY => "밀도 (t / m³)",
        GUI_UNIT => "단위",
        GUI_CURRENCY => "통화",
        GUI_MULTIPLIER => "RTFC 배수",
        GUI_ENERGY_RATIO => "에너지 비율",
        GUI_SHIP_VALUE => "운송 프리미엄",
        GUI_SHIP_UNIT => "운송 단위",
        GUI_SHIP_CURRENCY => "운송 통화",
        GUI_LANGUAGE => "언어",
        GUI_SAVE_SETTINGS => "설정 저장",
        GUI_LOCK => "잠금",
        _ => return None,
    };
    Some(s)
}
