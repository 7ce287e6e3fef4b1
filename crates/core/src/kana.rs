//! Kana catalog - static glyph/romaji tables and subset selection
//!
//! Tables are grouped per script into plain, dakuten (゛) and handakuten (゜)
//! forms. Selection only concatenates tables, so the result is deterministic.

use crate::types::KanaScript;

/// A kana glyph and its romanized form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kana {
    pub glyph: &'static str,
    pub romaji: &'static str,
}

const fn k(glyph: &'static str, romaji: &'static str) -> Kana {
    Kana { glyph, romaji }
}

#[rustfmt::skip]
pub const PLAIN_HIRAGANA: &[Kana] = &[
    k("あ", "a"), k("い", "i"), k("う", "u"), k("え", "e"), k("お", "o"),
    k("か", "ka"), k("き", "ki"), k("く", "ku"), k("け", "ke"), k("こ", "ko"),
    k("さ", "sa"), k("し", "shi"), k("す", "su"), k("せ", "se"), k("そ", "so"),
    k("た", "ta"), k("ち", "chi"), k("つ", "tsu"), k("て", "te"), k("と", "to"),
    k("な", "na"), k("に", "ni"), k("ぬ", "nu"), k("ね", "ne"), k("の", "no"),
    k("は", "ha"), k("ひ", "hi"), k("ふ", "fu"), k("へ", "he"), k("ほ", "ho"),
    k("ま", "ma"), k("み", "mi"), k("む", "mu"), k("め", "me"), k("も", "mo"),
    k("や", "ya"), k("ゆ", "yu"), k("よ", "yo"),
    k("ら", "ra"), k("り", "ri"), k("る", "ru"), k("れ", "re"), k("ろ", "ro"),
    k("わ", "wa"), k("を", "wo"), k("ん", "n"),
];

#[rustfmt::skip]
pub const DAKUTEN_HIRAGANA: &[Kana] = &[
    k("が", "ga"), k("ぎ", "gi"), k("ぐ", "gu"), k("げ", "ge"), k("ご", "go"),
    k("ざ", "za"), k("じ", "ji"), k("ず", "zu"), k("ぜ", "ze"), k("ぞ", "zo"),
    k("だ", "da"), k("ぢ", "di"), k("づ", "du"), k("で", "de"), k("ど", "do"),
    k("ば", "ba"), k("び", "bi"), k("ぶ", "bu"), k("べ", "be"), k("ぼ", "bo"),
];

#[rustfmt::skip]
pub const HANDAKUTEN_HIRAGANA: &[Kana] = &[
    k("ぱ", "pa"), k("ぴ", "pi"), k("ぷ", "pu"), k("ぺ", "pe"), k("ぽ", "po"),
];

#[rustfmt::skip]
pub const PLAIN_KATAKANA: &[Kana] = &[
    k("ア", "a"), k("イ", "i"), k("ウ", "u"), k("エ", "e"), k("オ", "o"),
    k("カ", "ka"), k("キ", "ki"), k("ク", "ku"), k("ケ", "ke"), k("コ", "ko"),
    k("サ", "sa"), k("シ", "shi"), k("ス", "su"), k("セ", "se"), k("ソ", "so"),
    k("タ", "ta"), k("チ", "chi"), k("ツ", "tsu"), k("テ", "te"), k("ト", "to"),
    k("ナ", "na"), k("ニ", "ni"), k("ヌ", "nu"), k("ネ", "ne"), k("ノ", "no"),
    k("ハ", "ha"), k("ヒ", "hi"), k("フ", "fu"), k("ヘ", "he"), k("ホ", "ho"),
    k("マ", "ma"), k("ミ", "mi"), k("ム", "mu"), k("メ", "me"), k("モ", "mo"),
    k("ヤ", "ya"), k("ユ", "yu"), k("ヨ", "yo"),
    k("ラ", "ra"), k("リ", "ri"), k("ル", "ru"), k("レ", "re"), k("ロ", "ro"),
    k("ワ", "wa"), k("ヲ", "wo"), k("ン", "n"),
];

#[rustfmt::skip]
pub const DAKUTEN_KATAKANA: &[Kana] = &[
    k("ガ", "ga"), k("ギ", "gi"), k("グ", "gu"), k("ゲ", "ge"), k("ゴ", "go"),
    k("ザ", "za"), k("ジ", "ji"), k("ズ", "zu"), k("ゼ", "ze"), k("ゾ", "zo"),
    k("ダ", "da"), k("ヂ", "di"), k("ヅ", "du"), k("デ", "de"), k("ド", "do"),
    k("バ", "ba"), k("ビ", "bi"), k("ブ", "bu"), k("ベ", "be"), k("ボ", "bo"),
    k("ヴ", "vu"),
];

#[rustfmt::skip]
pub const HANDAKUTEN_KATAKANA: &[Kana] = &[
    k("パ", "pa"), k("ピ", "pi"), k("プ", "pu"), k("ペ", "pe"), k("ポ", "po"),
];

/// Build the active kana set for a script and voiced-variant setting.
///
/// `Both` without voiced forms is exactly the plain hiragana table followed by
/// the plain katakana table.
///
/// # Examples
///
/// ```
/// use kana_drop_core::kana::{select_set, PLAIN_HIRAGANA};
/// use kana_drop_core::types::KanaScript;
///
/// assert_eq!(select_set(KanaScript::Hiragana, false), PLAIN_HIRAGANA.to_vec());
/// assert_eq!(select_set(KanaScript::Both, false).len(), 92);
/// ```
pub fn select_set(script: KanaScript, include_voiced: bool) -> Vec<Kana> {
    let mut tables: Vec<&[Kana]> = Vec::with_capacity(6);

    if matches!(script, KanaScript::Hiragana | KanaScript::Both) {
        tables.push(PLAIN_HIRAGANA);
        if include_voiced {
            tables.push(DAKUTEN_HIRAGANA);
            tables.push(HANDAKUTEN_HIRAGANA);
        }
    }
    if matches!(script, KanaScript::Katakana | KanaScript::Both) {
        tables.push(PLAIN_KATAKANA);
        if include_voiced {
            tables.push(DAKUTEN_KATAKANA);
            tables.push(HANDAKUTEN_KATAKANA);
        }
    }

    tables.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(PLAIN_HIRAGANA.len(), 46);
        assert_eq!(PLAIN_KATAKANA.len(), 46);
        assert_eq!(DAKUTEN_HIRAGANA.len() + HANDAKUTEN_HIRAGANA.len(), 25);
        assert_eq!(DAKUTEN_KATAKANA.len() + HANDAKUTEN_KATAKANA.len(), 26);
    }

    #[test]
    fn romaji_is_lowercase_ascii() {
        for kana in select_set(KanaScript::Both, true) {
            assert!(!kana.romaji.is_empty());
            assert!(
                kana.romaji.bytes().all(|b| b.is_ascii_lowercase()),
                "bad romaji for {}: {}",
                kana.glyph,
                kana.romaji
            );
            assert_eq!(kana.glyph.chars().count(), 1);
        }
    }

    #[test]
    fn single_script_with_voiced() {
        let set = select_set(KanaScript::Katakana, true);
        assert_eq!(set.len(), 72);
        assert_eq!(set[0], k("ア", "a"));
        assert!(set.contains(&k("ヴ", "vu")));
        assert!(!set.iter().any(|kana| kana.glyph == "あ"));
    }

    #[test]
    fn both_plain_is_exact_union() {
        let set = select_set(KanaScript::Both, false);
        let expected: Vec<Kana> = PLAIN_HIRAGANA
            .iter()
            .chain(PLAIN_KATAKANA.iter())
            .copied()
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn both_voiced_includes_everything() {
        assert_eq!(select_set(KanaScript::Both, true).len(), 46 + 25 + 46 + 26);
    }

    #[test]
    fn selection_is_deterministic() {
        assert_eq!(
            select_set(KanaScript::Hiragana, true),
            select_set(KanaScript::Hiragana, true)
        );
    }
}
