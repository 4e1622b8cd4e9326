//! Transliteration of extended-Latin characters to ASCII.
//!
//! Lookup only. Characters outside the table are passed through unchanged
//! and left for the slug whitelist to drop.

/// ASCII replacement for one character, if it has one
#[must_use]
pub const fn transliterate(c: char) -> Option<&'static str> {
    let ascii = match c {
        'ß' => "sz",
        'ä' | 'æ' => "ae",
        'à' | 'á' | 'â' | 'ã' | 'å' => "a",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' | 'ņ' | 'ň' | 'ŉ' | 'ŋ' => "n",
        'ö' => "oe",
        'ò' | 'ó' | 'ô' | 'õ' | 'ø' | 'ō' | 'ő' | 'ǒ' | 'ȱ' => "o",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ü' => "ue",
        'ù' | 'ú' | 'û' | 'ů' | 'ũ' | 'ŭ' | 'ű' | 'ų' => "u",
        _ => return None,
    };
    Some(ascii)
}

/// Apply [`transliterate`] to every character of `input`
#[must_use]
pub fn fold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match transliterate(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}
