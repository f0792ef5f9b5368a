use super::*;
use crate::kana::TABLE;

fn to_hiragana(s: &str) -> String {
    convert(s, CharType::Romaji, CharType::Hiragana, ConvertFlags::NONE)
}

fn to_katakana(s: &str) -> String {
    convert(s, CharType::Romaji, CharType::Katakana, ConvertFlags::NONE)
}

fn to_romaji(s: &str, from: CharType) -> String {
    convert(s, from, CharType::Romaji, ConvertFlags::NONE)
}

#[test]
fn basic_syllables() {
    assert_eq!(to_hiragana("aoi"), "あおい");
    assert_eq!(to_hiragana("kanji"), "かんじ");
    assert_eq!(to_katakana("kanji"), "カンジ");
    assert_eq!(to_hiragana("nihon"), "にほん");
}

#[test]
fn longest_match_wins() {
    assert_eq!(to_hiragana("shita"), "した");
    assert_eq!(to_hiragana("kya"), "きゃ");
    assert_eq!(to_hiragana("kiya"), "きや");
    assert_eq!(to_hiragana("nya"), "にゃ");
    assert_eq!(to_hiragana("nka"), "んか");
}

#[test]
fn variant_spellings_accepted() {
    assert_eq!(to_hiragana("si"), "し");
    assert_eq!(to_hiragana("tu"), "つ");
    assert_eq!(to_hiragana("sya"), "しゃ");
    assert_eq!(to_hiragana("xtu"), "っ");
}

#[test]
fn sokuon() {
    assert_eq!(to_hiragana("kko"), "っこ");
    assert_eq!(to_hiragana("matcha"), "まっちゃ");
    assert_eq!(to_hiragana("kitte"), "きって");
    assert_eq!(to_katakana("kappu"), "カップ");
    assert_eq!(to_romaji("まっちゃ", CharType::Hiragana), "matcha");
    assert_eq!(to_romaji("きって", CharType::Hiragana), "kitte");
    assert_eq!(to_romaji("カップ", CharType::Katakana), "kappu");
}

#[test]
fn syllabic_n_with_separator() {
    assert_eq!(to_hiragana("kon'ya"), "こんや");
    assert_eq!(to_hiragana("konya"), "こにゃ");
}

#[test]
fn long_vowels() {
    assert_eq!(to_katakana("rāmen"), "ラーメン");
    assert_eq!(to_hiragana("rāmen"), "らーめん");
    assert_eq!(
        convert(
            "rāmen",
            CharType::Romaji,
            CharType::Hiragana,
            ConvertFlags::NO_PROLONG_MARK
        ),
        "らあめん"
    );
    assert_eq!(to_romaji("ラーメン", CharType::Katakana), "rāmen");
    assert_eq!(to_romaji("らーめん", CharType::Hiragana), "rāmen");
    assert_eq!(to_hiragana("kōhī"), "こーひー");
}

#[test]
fn spaces() {
    assert_eq!(to_hiragana("akai kitsune"), "あかい　きつね");
    assert_eq!(
        convert(
            "akai kitsune",
            CharType::Romaji,
            CharType::Hiragana,
            ConvertFlags::REMOVE_SPACES
        ),
        "あかいきつね"
    );
    assert_eq!(to_romaji("あかい　きつね", CharType::Hiragana), "akai kitsune");
}

#[test]
fn hepburn_and_kunrei_output() {
    assert_eq!(to_hiragana("tsuduki"), "つづき");
    assert_eq!(
        convert(
            "tsuduki",
            CharType::Romaji,
            CharType::Hiragana,
            ConvertFlags::HEPBURN
        ),
        "つづき"
    );
    assert_eq!(to_romaji("つづき", CharType::Hiragana), "tsuduki");
    assert_eq!(
        convert(
            "つづき",
            CharType::Hiragana,
            CharType::Romaji,
            ConvertFlags::HEPBURN
        ),
        "tsuzuki"
    );
    assert_eq!(to_hiragana("shitsu"), "しつ");
    assert_eq!(to_romaji("しつ", CharType::Hiragana), "shitsu");
    assert_eq!(
        convert(
            "しつ",
            CharType::Hiragana,
            CharType::Romaji,
            ConvertFlags::KUNREI
        ),
        "situ"
    );
    assert_eq!(
        convert(
            "を",
            CharType::Hiragana,
            CharType::Romaji,
            ConvertFlags::HEPBURN
        ),
        "o"
    );
}

#[test]
fn kana_to_kana() {
    assert_eq!(
        convert(
            "ひらがな",
            CharType::Hiragana,
            CharType::Katakana,
            ConvertFlags::NONE
        ),
        "ヒラガナ"
    );
    assert_eq!(
        convert(
            "ラーメン",
            CharType::Katakana,
            CharType::Hiragana,
            ConvertFlags::NONE
        ),
        "らーめん"
    );
    assert_eq!(
        convert(
            "きゃっか",
            CharType::Hiragana,
            CharType::Katakana,
            ConvertFlags::NONE
        ),
        "キャッカ"
    );
}

#[test]
fn iteration_marks() {
    assert_eq!(to_romaji("こゝろ", CharType::Hiragana), "kokoro");
    assert_eq!(to_romaji("たゞ", CharType::Hiragana), "tada");
    assert_eq!(
        convert(
            "こゝろ",
            CharType::Hiragana,
            CharType::Katakana,
            ConvertFlags::NONE
        ),
        "コヽロ"
    );
    assert_eq!(
        convert(
            "バナヽ",
            CharType::Katakana,
            CharType::Hiragana,
            ConvertFlags::NONE
        ),
        "ばなゝ"
    );
}

#[test]
fn unmatched_input_passes_through() {
    assert_eq!(to_hiragana("qqq"), "っっq");
    assert_eq!(to_romaji("漢字です", CharType::Hiragana), "漢字desu");
    assert_eq!(to_hiragana("abc"), "あbc");
}

#[test]
fn punctuation_widens_and_narrows() {
    assert_eq!(to_hiragana("desu."), "です。");
    assert_eq!(to_hiragana("hai, iie!"), "はい、　いいえ！");
    assert_eq!(to_romaji("です。", CharType::Hiragana), "desu.");
    assert_eq!(to_hiragana("ra-men"), "らーめん");
    assert_eq!(
        convert(
            "rāmen desu.",
            CharType::Romaji,
            CharType::Hiragana,
            ConvertFlags::REMOVE_SPACES | ConvertFlags::NO_PROLONG_MARK
        ),
        "らあめんです。"
    );
}

#[test]
fn same_type_is_identity() {
    assert_eq!(
        convert("text", CharType::Romaji, CharType::Romaji, ConvertFlags::NONE),
        "text"
    );
}

#[test]
fn round_trip_every_plain_entry() {
    for kana in &TABLE {
        let romaji = kana.romaji();
        let hiragana = to_hiragana(romaji);
        assert_eq!(hiragana, kana.hiragana(), "romaji {romaji}");
        assert_eq!(
            to_romaji(&hiragana, CharType::Hiragana),
            romaji,
            "hiragana {hiragana}"
        );
        assert_eq!(
            convert(
                kana.hiragana(),
                CharType::Hiragana,
                CharType::Katakana,
                ConvertFlags::NONE
            ),
            kana.katakana()
        );
        assert_eq!(
            convert(
                kana.katakana(),
                CharType::Katakana,
                CharType::Hiragana,
                ConvertFlags::NONE
            ),
            kana.hiragana()
        );
    }
}
