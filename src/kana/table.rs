//! The full kana table: 86 monographs and 106 digraphs.
//!
//! Rōmaji spellings follow wāpuro conventions so that every entry has a
//! unique primary spelling (ち is "chi" with "ti" as a variant, ゐ is
//! "wyi", small kana use an "l" prefix with "x" variants). Entries whose
//! standard Hepburn or Kunrei-shiki spelling differs from the primary one
//! carry overrides; for most Kunrei forms the first variant doubles as the
//! Kunrei spelling.

use super::Kana;

#[rustfmt::skip]
pub static TABLE: [Kana; 192] = [
    // vowels
    Kana::new("a", "あ", "ア"),
    Kana::new("i", "い", "イ"),
    Kana::new("u", "う", "ウ"),
    Kana::new("e", "え", "エ"),
    Kana::new("o", "お", "オ"),
    // k
    Kana::new("ka", "か", "カ"),
    Kana::new("ki", "き", "キ"),
    Kana::new("ku", "く", "ク"),
    Kana::new("ke", "け", "ケ"),
    Kana::new("ko", "こ", "コ"),
    Kana::new("ga", "が", "ガ"),
    Kana::new("gi", "ぎ", "ギ"),
    Kana::new("gu", "ぐ", "グ"),
    Kana::new("ge", "げ", "ゲ"),
    Kana::new("go", "ご", "ゴ"),
    // s
    Kana::new("sa", "さ", "サ"),
    Kana::new("shi", "し", "シ").with_kunrei_variants(&["si"]),
    Kana::new("su", "す", "ス"),
    Kana::new("se", "せ", "セ"),
    Kana::new("so", "そ", "ソ"),
    Kana::new("za", "ざ", "ザ"),
    Kana::new("ji", "じ", "ジ").with_kunrei_variants(&["zi"]),
    Kana::new("zu", "ず", "ズ"),
    Kana::new("ze", "ぜ", "ゼ"),
    Kana::new("zo", "ぞ", "ゾ"),
    // t
    Kana::new("ta", "た", "タ"),
    Kana::new("chi", "ち", "チ").with_kunrei_variants(&["ti"]),
    Kana::new("tsu", "つ", "ツ").with_kunrei_variants(&["tu"]),
    Kana::new("te", "て", "テ"),
    Kana::new("to", "と", "ト"),
    Kana::new("da", "だ", "ダ"),
    Kana::new("di", "ぢ", "ヂ").with_hepburn("ji").with_kunrei("zi"),
    Kana::new("du", "づ", "ヅ").with_hepburn("zu").with_kunrei("zu"),
    Kana::new("de", "で", "デ"),
    Kana::new("do", "ど", "ド"),
    // n
    Kana::new("na", "な", "ナ"),
    Kana::new("ni", "に", "ニ"),
    Kana::new("nu", "ぬ", "ヌ"),
    Kana::new("ne", "ね", "ネ"),
    Kana::new("no", "の", "ノ"),
    // h
    Kana::new("ha", "は", "ハ"),
    Kana::new("hi", "ひ", "ヒ"),
    Kana::new("fu", "ふ", "フ").with_kunrei_variants(&["hu"]),
    Kana::new("he", "へ", "ヘ"),
    Kana::new("ho", "ほ", "ホ"),
    Kana::new("ba", "ば", "バ"),
    Kana::new("bi", "び", "ビ"),
    Kana::new("bu", "ぶ", "ブ"),
    Kana::new("be", "べ", "ベ"),
    Kana::new("bo", "ぼ", "ボ"),
    Kana::new("pa", "ぱ", "パ"),
    Kana::new("pi", "ぴ", "ピ"),
    Kana::new("pu", "ぷ", "プ"),
    Kana::new("pe", "ぺ", "ペ"),
    Kana::new("po", "ぽ", "ポ"),
    // m
    Kana::new("ma", "ま", "マ"),
    Kana::new("mi", "み", "ミ"),
    Kana::new("mu", "む", "ム"),
    Kana::new("me", "め", "メ"),
    Kana::new("mo", "も", "モ"),
    // y
    Kana::new("ya", "や", "ヤ"),
    Kana::new("yu", "ゆ", "ユ"),
    Kana::new("yo", "よ", "ヨ"),
    // r
    Kana::new("ra", "ら", "ラ"),
    Kana::new("ri", "り", "リ"),
    Kana::new("ru", "る", "ル"),
    Kana::new("re", "れ", "レ"),
    Kana::new("ro", "ろ", "ロ"),
    // w
    Kana::new("wa", "わ", "ワ"),
    Kana::new("wo", "を", "ヲ").with_hepburn("o").with_kunrei("o"),
    // syllabic n
    Kana::new("n", "ん", "ン"),
    // vu and the archaic w-row
    Kana::new("vu", "ゔ", "ヴ"),
    Kana::new("wyi", "ゐ", "ヰ"),
    Kana::new("wye", "ゑ", "ヱ"),
    // small kana
    Kana::new("la", "ぁ", "ァ").with_variants(&["xa"]),
    Kana::new("li", "ぃ", "ィ").with_variants(&["xi"]),
    Kana::new("lu", "ぅ", "ゥ").with_variants(&["xu"]),
    Kana::new("le", "ぇ", "ェ").with_variants(&["xe"]),
    Kana::new("lo", "ぉ", "ォ").with_variants(&["xo"]),
    Kana::new("lya", "ゃ", "ャ").with_variants(&["xya"]),
    Kana::new("lyu", "ゅ", "ュ").with_variants(&["xyu"]),
    Kana::new("lyo", "ょ", "ョ").with_variants(&["xyo"]),
    Kana::new("ltu", "っ", "ッ").with_variants(&["xtu"]),
    Kana::new("lwa", "ゎ", "ヮ").with_variants(&["xwa"]),
    Kana::new("lka", "ゕ", "ヵ").with_variants(&["xka"]),
    Kana::new("lke", "ゖ", "ヶ").with_variants(&["xke"]),
    // digraphs: k row
    Kana::new("kya", "きゃ", "キャ"),
    Kana::new("kyi", "きぃ", "キィ"),
    Kana::new("kyu", "きゅ", "キュ"),
    Kana::new("kye", "きぇ", "キェ"),
    Kana::new("kyo", "きょ", "キョ"),
    Kana::new("gya", "ぎゃ", "ギャ"),
    Kana::new("gyi", "ぎぃ", "ギィ"),
    Kana::new("gyu", "ぎゅ", "ギュ"),
    Kana::new("gye", "ぎぇ", "ギェ"),
    Kana::new("gyo", "ぎょ", "ギョ"),
    // s row
    Kana::new("sha", "しゃ", "シャ").with_kunrei_variants(&["sya"]),
    Kana::new("syi", "しぃ", "シィ"),
    Kana::new("shu", "しゅ", "シュ").with_kunrei_variants(&["syu"]),
    Kana::new("she", "しぇ", "シェ").with_kunrei_variants(&["sye"]),
    Kana::new("sho", "しょ", "ショ").with_kunrei_variants(&["syo"]),
    Kana::new("ja", "じゃ", "ジャ").with_kunrei_variants(&["zya", "jya"]),
    Kana::new("zyi", "じぃ", "ジィ"),
    Kana::new("ju", "じゅ", "ジュ").with_kunrei_variants(&["zyu", "jyu"]),
    Kana::new("je", "じぇ", "ジェ").with_kunrei_variants(&["zye", "jye"]),
    Kana::new("jo", "じょ", "ジョ").with_kunrei_variants(&["zyo", "jyo"]),
    // t row
    Kana::new("cha", "ちゃ", "チャ").with_kunrei_variants(&["tya"]),
    Kana::new("tyi", "ちぃ", "チィ"),
    Kana::new("chu", "ちゅ", "チュ").with_kunrei_variants(&["tyu"]),
    Kana::new("che", "ちぇ", "チェ").with_kunrei_variants(&["tye"]),
    Kana::new("cho", "ちょ", "チョ").with_kunrei_variants(&["tyo"]),
    Kana::new("dya", "ぢゃ", "ヂャ").with_hepburn("ja").with_kunrei("zya"),
    Kana::new("dyi", "ぢぃ", "ヂィ"),
    Kana::new("dyu", "ぢゅ", "ヂュ").with_hepburn("ju").with_kunrei("zyu"),
    Kana::new("dye", "ぢぇ", "ヂェ"),
    Kana::new("dyo", "ぢょ", "ヂョ").with_hepburn("jo").with_kunrei("zyo"),
    // n row
    Kana::new("nya", "にゃ", "ニャ"),
    Kana::new("nyi", "にぃ", "ニィ"),
    Kana::new("nyu", "にゅ", "ニュ"),
    Kana::new("nye", "にぇ", "ニェ"),
    Kana::new("nyo", "にょ", "ニョ"),
    // h row
    Kana::new("hya", "ひゃ", "ヒャ"),
    Kana::new("hyi", "ひぃ", "ヒィ"),
    Kana::new("hyu", "ひゅ", "ヒュ"),
    Kana::new("hye", "ひぇ", "ヒェ"),
    Kana::new("hyo", "ひょ", "ヒョ"),
    Kana::new("bya", "びゃ", "ビャ"),
    Kana::new("byi", "びぃ", "ビィ"),
    Kana::new("byu", "びゅ", "ビュ"),
    Kana::new("bye", "びぇ", "ビェ"),
    Kana::new("byo", "びょ", "ビョ"),
    Kana::new("pya", "ぴゃ", "ピャ"),
    Kana::new("pyi", "ぴぃ", "ピィ"),
    Kana::new("pyu", "ぴゅ", "ピュ"),
    Kana::new("pye", "ぴぇ", "ピェ"),
    Kana::new("pyo", "ぴょ", "ピョ"),
    // m row
    Kana::new("mya", "みゃ", "ミャ"),
    Kana::new("myi", "みぃ", "ミィ"),
    Kana::new("myu", "みゅ", "ミュ"),
    Kana::new("mye", "みぇ", "ミェ"),
    Kana::new("myo", "みょ", "ミョ"),
    // r row
    Kana::new("rya", "りゃ", "リャ"),
    Kana::new("ryi", "りぃ", "リィ"),
    Kana::new("ryu", "りゅ", "リュ"),
    Kana::new("rye", "りぇ", "リェ"),
    Kana::new("ryo", "りょ", "リョ"),
    // v row
    Kana::new("va", "ゔぁ", "ヴァ"),
    Kana::new("vi", "ゔぃ", "ヴィ"),
    Kana::new("ve", "ゔぇ", "ヴェ"),
    Kana::new("vo", "ゔぉ", "ヴォ"),
    Kana::new("vya", "ゔゃ", "ヴャ"),
    Kana::new("vyu", "ゔゅ", "ヴュ"),
    Kana::new("vyo", "ゔょ", "ヴョ"),
    // f row
    Kana::new("fa", "ふぁ", "ファ").with_variants(&["fwa"]),
    Kana::new("fi", "ふぃ", "フィ"),
    Kana::new("fe", "ふぇ", "フェ"),
    Kana::new("fo", "ふぉ", "フォ"),
    Kana::new("fya", "ふゃ", "フャ"),
    Kana::new("fyu", "ふゅ", "フュ"),
    Kana::new("fyo", "ふょ", "フョ"),
    // ts row
    Kana::new("tsa", "つぁ", "ツァ"),
    Kana::new("tsi", "つぃ", "ツィ"),
    Kana::new("tse", "つぇ", "ツェ"),
    Kana::new("tso", "つぉ", "ツォ"),
    // th/dh rows (てぃ style loanword sounds)
    Kana::new("tha", "てゃ", "テャ"),
    Kana::new("thi", "てぃ", "ティ"),
    Kana::new("thu", "てゅ", "テュ"),
    Kana::new("tho", "てょ", "テョ"),
    Kana::new("dha", "でゃ", "デャ"),
    Kana::new("dhi", "でぃ", "ディ"),
    Kana::new("dhu", "でゅ", "デュ"),
    Kana::new("dho", "でょ", "デョ"),
    Kana::new("twu", "とぅ", "トゥ"),
    Kana::new("dwu", "どぅ", "ドゥ"),
    // w row
    Kana::new("wi", "うぃ", "ウィ"),
    Kana::new("we", "うぇ", "ウェ"),
    Kana::new("who", "うぉ", "ウォ"),
    Kana::new("ye", "いぇ", "イェ"),
    // q row
    Kana::new("qa", "くぁ", "クァ").with_variants(&["kwa"]),
    Kana::new("qi", "くぃ", "クィ"),
    Kana::new("qe", "くぇ", "クェ"),
    Kana::new("qo", "くぉ", "クォ"),
    Kana::new("qwa", "くゎ", "クヮ"),
    Kana::new("qyu", "くゅ", "クュ"),
    // gw row
    Kana::new("gwa", "ぐぁ", "グァ"),
    Kana::new("gwi", "ぐぃ", "グィ"),
    Kana::new("gwe", "ぐぇ", "グェ"),
    Kana::new("gwo", "ぐぉ", "グォ"),
    // sw row
    Kana::new("swa", "すぁ", "スァ"),
    Kana::new("swi", "すぃ", "スィ"),
    Kana::new("swe", "すぇ", "スェ"),
    Kana::new("swo", "すぉ", "スォ"),
];
