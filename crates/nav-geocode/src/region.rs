//! Region name → two-letter code.
//!
//! Geocoders return full state names ("São Paulo"), the postal directory
//! returns codes ("SP").  Places always carry the code.

/// Folded (lower-case, unaccented) state name → code.
const REGIONS: &[(&str, &str)] = &[
    ("acre",                "AC"),
    ("alagoas",             "AL"),
    ("amapa",               "AP"),
    ("amazonas",            "AM"),
    ("bahia",               "BA"),
    ("ceara",               "CE"),
    ("distrito federal",    "DF"),
    ("espirito santo",      "ES"),
    ("goias",               "GO"),
    ("maranhao",            "MA"),
    ("mato grosso",         "MT"),
    ("mato grosso do sul",  "MS"),
    ("minas gerais",        "MG"),
    ("para",                "PA"),
    ("paraiba",             "PB"),
    ("parana",              "PR"),
    ("pernambuco",          "PE"),
    ("piaui",               "PI"),
    ("rio de janeiro",      "RJ"),
    ("rio grande do norte", "RN"),
    ("rio grande do sul",   "RS"),
    ("rondonia",            "RO"),
    ("roraima",             "RR"),
    ("santa catarina",      "SC"),
    ("sao paulo",           "SP"),
    ("sergipe",             "SE"),
    ("tocantins",           "TO"),
];

/// Map a region name to its two-letter code.
///
/// - values of at most two characters pass through unchanged;
/// - known names match case- and accent-insensitively;
/// - anything else maps to `fallback`.
pub fn region_code(name: &str, fallback: &str) -> String {
    let name = name.trim();
    if name.chars().count() <= 2 {
        return name.to_string();
    }
    let folded = fold(name);
    REGIONS
        .iter()
        .find(|(full, _)| *full == folded)
        .map_or_else(|| fallback.to_string(), |(_, code)| code.to_string())
}

/// Lower-case and strip the Portuguese diacritics.
fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë'       => 'e',
            'í' | 'ì' | 'î' | 'ï'       => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü'       => 'u',
            'ç'                         => 'c',
            other                       => other,
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
