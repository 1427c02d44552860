use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

/// A single kana glyph with its romanization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Kana {
    pub glyph: &'static str,
    pub romaji: &'static str,
    pub script: Script,
}

const fn h(glyph: &'static str, romaji: &'static str) -> Kana {
    Kana {
        glyph,
        romaji,
        script: Script::Hiragana,
    }
}

const fn k(glyph: &'static str, romaji: &'static str) -> Kana {
    Kana {
        glyph,
        romaji,
        script: Script::Katakana,
    }
}

const HIRAGANA: [Kana; 46] = [
    h("あ", "a"),
    h("い", "i"),
    h("う", "u"),
    h("え", "e"),
    h("お", "o"),
    h("か", "ka"),
    h("き", "ki"),
    h("く", "ku"),
    h("け", "ke"),
    h("こ", "ko"),
    h("さ", "sa"),
    h("し", "shi"),
    h("す", "su"),
    h("せ", "se"),
    h("そ", "so"),
    h("た", "ta"),
    h("ち", "chi"),
    h("つ", "tsu"),
    h("て", "te"),
    h("と", "to"),
    h("な", "na"),
    h("に", "ni"),
    h("ぬ", "nu"),
    h("ね", "ne"),
    h("の", "no"),
    h("は", "ha"),
    h("ひ", "hi"),
    h("ふ", "fu"),
    h("へ", "he"),
    h("ほ", "ho"),
    h("ま", "ma"),
    h("み", "mi"),
    h("む", "mu"),
    h("め", "me"),
    h("も", "mo"),
    h("や", "ya"),
    h("ゆ", "yu"),
    h("よ", "yo"),
    h("ら", "ra"),
    h("り", "ri"),
    h("る", "ru"),
    h("れ", "re"),
    h("ろ", "ro"),
    h("わ", "wa"),
    h("を", "wo"),
    h("ん", "n"),
];

const KATAKANA: [Kana; 46] = [
    k("ア", "a"),
    k("イ", "i"),
    k("ウ", "u"),
    k("エ", "e"),
    k("オ", "o"),
    k("カ", "ka"),
    k("キ", "ki"),
    k("ク", "ku"),
    k("ケ", "ke"),
    k("コ", "ko"),
    k("サ", "sa"),
    k("シ", "shi"),
    k("ス", "su"),
    k("セ", "se"),
    k("ソ", "so"),
    k("タ", "ta"),
    k("チ", "chi"),
    k("ツ", "tsu"),
    k("テ", "te"),
    k("ト", "to"),
    k("ナ", "na"),
    k("ニ", "ni"),
    k("ヌ", "nu"),
    k("ネ", "ne"),
    k("ノ", "no"),
    k("ハ", "ha"),
    k("ヒ", "hi"),
    k("フ", "fu"),
    k("ヘ", "he"),
    k("ホ", "ho"),
    k("マ", "ma"),
    k("ミ", "mi"),
    k("ム", "mu"),
    k("メ", "me"),
    k("モ", "mo"),
    k("ヤ", "ya"),
    k("ユ", "yu"),
    k("ヨ", "yo"),
    k("ラ", "ra"),
    k("リ", "ri"),
    k("ル", "ru"),
    k("レ", "re"),
    k("ロ", "ro"),
    k("ワ", "wa"),
    k("ヲ", "wo"),
    k("ン", "n"),
];

const ALL_KANA: [Kana; 92] = {
    let mut out = [HIRAGANA[0]; 92];
    let mut i = 0;
    while i < 46 {
        out[i] = HIRAGANA[i];
        out[46 + i] = KATAKANA[i];
        i += 1;
    }
    out
};

/// Basic hiragana in gojūon order.
#[must_use]
pub fn hiragana_only() -> &'static [Kana] {
    &HIRAGANA
}

/// Basic katakana in gojūon order.
#[must_use]
pub fn katakana_only() -> &'static [Kana] {
    &KATAKANA
}

/// Hiragana followed by katakana.
#[must_use]
pub fn all_kana() -> &'static [Kana] {
    &ALL_KANA
}

/// Uniform pick from `all_kana`.
pub fn random_kana<R: Rng + ?Sized>(rng: &mut R) -> Kana {
    // Tables are non-empty consts.
    all_kana().choose(rng).copied().unwrap_or(HIRAGANA[0])
}
