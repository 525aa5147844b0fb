use rand::Rng;
use rand::seq::SliceRandom;

/// Glyphs a food pellet may be shown as on terminals that handle UTF-8
pub const FOOD_GLYPHS: [char; 15] = [
    '🍒', '🍍', '🍑', '🍇', '🍏', '🍌', '🍫', '🍭', '🍕', '🍩', '🍗', '🍖', '🍬', '🍤', '🍪',
];

/// Shown when the locale does not advertise UTF-8
pub const FALLBACK_FOOD_GLYPH: char = '@';

/// Whether a `LANG`-style locale string advertises UTF-8
pub fn has_unicode_support(lang: Option<&str>) -> bool {
    lang.is_some_and(|lang| lang.contains("UTF-8"))
}

/// Pick a food glyph for the given locale
pub fn food_glyph<R: Rng + ?Sized>(rng: &mut R, lang: Option<&str>) -> char {
    if !has_unicode_support(lang) {
        return FALLBACK_FOOD_GLYPH;
    }
    FOOD_GLYPHS
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_FOOD_GLYPH)
}

/// Pick a food glyph using the process `LANG`
pub fn food_glyph_from_env<R: Rng + ?Sized>(rng: &mut R) -> char {
    let lang = std::env::var("LANG").ok();
    food_glyph(rng, lang.as_deref())
}
