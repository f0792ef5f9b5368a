//! End-to-end tests for loading a data directory into kanji, group and
//! jukugo data.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use kanka::group::{GroupData, PatternType};
use kanka::kanji::{Grade, JinmeiReason, JlptLevel, KanjiData, KanjiType, KenteiKyu};

const UCD_HEADER: &str = "Code\tName\tBlock\tVersion\tRadical\tStrokes\tVStrokes\tPinyin\tMorohashi\tNelson\tSources\tJSource\tJoyo\tJinmei\tLinkCodes\tLinkNames\tLinkType\tLinkedReadings\tMeaning\tOn\tKun";

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// A small but complete data directory covering every kanji type.
fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();

    write(
        path,
        "radicals.txt",
        "Number\tName\tLongName\tReading\n\
         1\t一\t一部（いちぶ）\tイチ\n\
         2\t人 亻\t人部（じんぶ）\tジン ひと\n\
         3\t口\t口部（こうぶ）\tコウ くち\n\
         4\t水 氵\t水部（すいぶ）\tスイ みず\n",
    );

    let ucd_rows = [
        "4E00\t一\tCJK\t1.1\t1\t1\t\tyī\t1\t1\tGHJKTV\tJ0-306C\tY\tN\t\t\t\tN\tone\tICHI\thito",
        "5B66\t学\tCJK\t1.1\t2\t8\t\txué\t6974\t1271\tGJK\t\tY\tN\t\t\t\tN\tlearning\tGAKU\tmanabu",
        "5B78\t學\tCJK\t1.1\t2\t16\t\txué\t7033\t\tGJKT\t\tN\tN\t5B66\t学\tSimplified\tY\tlearning\tGAKU\tmanabu",
        "4E98\t亘\tCJK\t1.1\t1\t6\t\tgèn\t90\t\tGJK\t\tN\tY\t\t\t\tN\tspan\tKAN\twataru",
        "9038\t逸\tCJK\t1.1\t4\t11\t\tyì\t38965P\t4745\tGJK\tJ0-306F\tY\tN\t\t\t\tN\tflee\tITSU\tSORERU",
        "FA67\t\u{fa67}\tCJK_Compat_Ideographs\t3.2\t4\t12\t\tyì\t\t\tJK\t\tN\tY\t9038\t逸\tJinmei\tY\tflee\tITSU\tSORERU",
        "8666\t蝦\tCJK\t1.1\t3\t15\t\txiā\t33386\t\tGJKT\t\tN\tN\t\t\t\tN\tshrimp\tKA\tebi",
        "9803\t頃\tCJK\t1.1\t2\t11\t\tqǐng\t43338\t\tGJK\t\tN\tN\t\t\t\tN\tmoment\tKEI\tkoro",
        "4E3C\t丼\tCJK\t1.1\t1\t5\t\tdǎn\t101\t\tGJKT\t\tN\tN\t\t\t\tN\tbowl of food\tTON DON\tdonburi",
        "5F41\t彁\tCJK\t1.1\t3\t9\t\t\t\t\tJ\t\tN\tN\t\t\t\tN\t\t\t",
    ];
    write(path, "ucd.txt", &format!("{UCD_HEADER}\n{}\n", ucd_rows.join("\n")));

    write(
        path,
        "jouyou.txt",
        "Number\tName\tRadical\tOldNames\tYear\tStrokes\tGrade\tMeaning\tReading\n\
         1\t一\t一\t\t\t1\t1\tone\tイチ、ひと\n\
         2\t学\t人\t學\t1946\t8\t1\tlearning\tガク、まなぶ\n\
         3\t逸\t水\t\t2010\t11\tS\tflee\tイツ、それる\n",
    );

    write(
        path,
        "jinmei.txt",
        "Number\tName\tRadical\tOldNames\tYear\tReason\tReading\n\
         1\t亘\t一\t\t1951\tNames\tコウ、わたる\n",
    );

    write(path, "linked-jinmei.txt", "逸 逸\u{fe01}\n");

    write(
        path,
        "extra.txt",
        "Number\tName\tRadical\tStrokes\tMeaning\tReading\n\
         1\t蝦\t口\t15\tshrimp\tエビ\n",
    );

    write(path, "frequency.txt", "学\n一\n頃\n");
    write(path, "frequency-readings.txt", "Name\tReading\n頃\tころ\n");

    let jlpt = path.join("jlpt");
    fs::create_dir(&jlpt).unwrap();
    write(&jlpt, "n5.txt", "一 学\n");
    write(&jlpt, "n4.txt", "");
    write(&jlpt, "n3.txt", "");
    write(&jlpt, "n2.txt", "");
    write(&jlpt, "n1.txt", "亘\n");

    let kentei = path.join("kentei");
    fs::create_dir(&kentei).unwrap();
    write(&kentei, "k10.txt", "一 学\n");
    for name in ["k9", "k8", "k7", "k6", "k5", "k4", "k3", "kj2", "k2", "kj1"] {
        write(&kentei, &format!("{name}.txt"), "");
    }
    write(&kentei, "k1.txt", "丼 蝦 逸\n");

    write(
        path,
        "meaning-groups.txt",
        "Number\tName\tMembers\n1\t学校\t一 学\n",
    );
    write(
        path,
        "pattern-groups.txt",
        "Number\tName\tMembers\n\
         1\t一：イチ\t丼\n\
         2\t：ガク\t学 蝦\n\
         3\tワ\t亘 學\n",
    );

    dir
}

#[test]
fn loads_every_kanji_type() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    assert_eq!(data.len(), 10);
    assert_eq!(data.list(KanjiType::Jouyou).len(), 3);
    assert_eq!(data.list(KanjiType::Jinmei).len(), 1);
    assert_eq!(data.list(KanjiType::LinkedJinmei).len(), 1);
    assert_eq!(data.list(KanjiType::LinkedOld).len(), 1);
    assert_eq!(data.list(KanjiType::Frequency).len(), 1);
    assert_eq!(data.list(KanjiType::Extra).len(), 1);
    assert_eq!(data.list(KanjiType::Kentei).len(), 1);
    assert_eq!(data.list(KanjiType::Ucd).len(), 1);
}

#[test]
fn jouyou_fields() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    let gaku = data.find("学").unwrap();
    assert_eq!(gaku.kanji_type(), KanjiType::Jouyou);
    assert_eq!(gaku.grade(), Some(Grade::G1));
    assert_eq!(gaku.level(), Some(JlptLevel::N5));
    assert_eq!(gaku.kyu(), Some(KenteiKyu::K10));
    assert_eq!(gaku.frequency(), Some(1));
    assert_eq!(gaku.year(), Some(1946));
    assert_eq!(gaku.old_names(), ["學"]);
    assert_eq!(gaku.meaning(), "learning");
    assert_eq!(gaku.reading(), "ガク、まなぶ");
    assert_eq!(gaku.radical().name(), "人");
    assert_eq!(gaku.strokes().value(), 8);
    assert_eq!(gaku.morohashi().to_string(), "6974");
    assert_eq!(gaku.nelson_ids(), [1271]);
    assert_eq!(gaku.pinyin(), "xué");
    // 逸 came from the jouyou file too, with a secondary-school grade
    let itsu = data.find("逸").unwrap();
    assert_eq!(itsu.grade(), Some(Grade::S));
    assert_eq!(itsu.kyu(), Some(KenteiKyu::K1));
    assert_eq!(itsu.frequency(), None);
    // every jouyou kanji carries a grade
    assert!(data
        .list(KanjiType::Jouyou)
        .iter()
        .all(|k| k.grade().is_some()));
}

#[test]
fn jinmei_fields_come_from_file_and_ucd() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    let kou = data.find("亘").unwrap();
    assert_eq!(kou.kanji_type(), KanjiType::Jinmei);
    assert_eq!(kou.reason(), Some(JinmeiReason::Names));
    assert_eq!(kou.year(), Some(1951));
    assert_eq!(kou.level(), Some(JlptLevel::N1));
    // strokes and meaning are not in jinmei.txt, they come from UCD
    assert_eq!(kou.strokes().value(), 6);
    assert_eq!(kou.meaning(), "span");
    assert_eq!(kou.reading(), "コウ、わたる");
    assert!(data
        .list(KanjiType::Jinmei)
        .iter()
        .all(|k| k.reason().is_some()));
}

#[test]
fn linked_jinmei_points_at_official_kanji() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    let variant = data.find("逸\u{fe01}").unwrap();
    assert_eq!(variant.kanji_type(), KanjiType::LinkedJinmei);
    assert_eq!(variant.compat_name(), Some("逸"));
    let link = variant.link().unwrap();
    assert_eq!(link.name(), "逸");
    assert_eq!(link.kanji_type(), KanjiType::Jouyou);
    // meaning and reading are inherited through the link
    assert_eq!(variant.meaning(), "flee");
    assert_eq!(variant.reading(), "イツ、それる");
    assert_eq!(variant.new_name(), Some("逸"));
    assert!(variant.linked_readings());
    // the variation-selector form resolves through UCD's variant maps
    assert_eq!(variant.strokes().value(), 12);
}

#[test]
fn linked_old_synthesized_from_old_names() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    let old = data.find("學").unwrap();
    assert_eq!(old.kanji_type(), KanjiType::LinkedOld);
    let link = old.link().unwrap();
    assert_eq!(link.name(), "学");
    assert_eq!(link.kanji_type(), KanjiType::Jouyou);
    assert_eq!(old.meaning(), "learning");
    assert_eq!(old.reading(), "ガク、まなぶ");
    assert_eq!(old.new_name(), Some("学"));
    assert_eq!(old.strokes().value(), 16);
}

#[test]
fn frequency_kanji_uses_reading_overrides() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    let koro = data.find("頃").unwrap();
    assert_eq!(koro.kanji_type(), KanjiType::Frequency);
    assert_eq!(koro.frequency(), Some(3));
    assert_eq!(koro.reading(), "ころ");
    assert_eq!(koro.meaning(), "moment");
}

#[test]
fn kentei_kanji_reading_synthesized_from_ucd() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    let don = data.find("丼").unwrap();
    assert_eq!(don.kanji_type(), KanjiType::Kentei);
    assert_eq!(don.kyu(), Some(KenteiKyu::K1));
    assert_eq!(don.frequency(), None);
    // on readings become katakana, kun readings hiragana
    assert_eq!(don.reading(), "トン、ドン、どんぶり");
}

#[test]
fn ucd_fallback_covers_the_rest() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    let ka = data.find("彁").unwrap();
    assert_eq!(ka.kanji_type(), KanjiType::Ucd);
    assert_eq!(ka.reading(), "");
    assert_eq!(ka.kyu(), None);
}

#[test]
fn indexes() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    assert_eq!(data.find_by_frequency(1).unwrap().name(), "学");
    assert_eq!(data.find_by_frequency(2).unwrap().name(), "一");
    assert_eq!(data.find_by_frequency(3).unwrap().name(), "頃");
    assert!(data.find_by_frequency(4).is_none());
    assert!(data.find_by_frequency(0).is_none());
    let freq: Vec<_> = data.frequency_list().iter().map(|k| k.name()).collect();
    assert_eq!(freq, ["学", "一", "頃"]);
    assert_eq!(data.level_list(JlptLevel::N5).len(), 2);
    assert_eq!(data.level_list(JlptLevel::N4).len(), 0);
    assert_eq!(data.grade_list(Grade::G1).len(), 2);
    assert_eq!(data.grade_list(Grade::S).len(), 1);
    assert_eq!(data.kyu_list(KenteiKyu::K1).len(), 3);
    assert_eq!(data.kyu_list(KenteiKyu::K10).len(), 2);
    // frequency ranks always fit the documented bound
    assert!(data
        .frequency_list()
        .iter()
        .all(|k| k.frequency().is_some_and(|f| (1..=2501).contains(&f))));
}

#[test]
fn level_and_kyu_lookups() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    assert_eq!(data.level("一"), Some(JlptLevel::N5));
    assert_eq!(data.level("丼"), None);
    assert_eq!(data.kyu("蝦"), Some(KenteiKyu::K1));
    assert_eq!(data.frequency("学"), Some(1));
    assert_eq!(data.frequency("丼"), None);
}

#[test]
fn extra_kanji_fields() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    let ebi = data.find("蝦").unwrap();
    assert_eq!(ebi.kanji_type(), KanjiType::Extra);
    assert_eq!(ebi.meaning(), "shrimp");
    assert_eq!(ebi.reading(), "エビ");
    assert_eq!(ebi.kyu(), Some(KenteiKyu::K1));
    assert_eq!(ebi.strokes().value(), 15);
}

#[test]
fn bad_radical_reference_names_row_and_column() {
    let dir = data_dir();
    write(
        dir.path(),
        "jouyou.txt",
        "Number\tName\tRadical\tOldNames\tYear\tStrokes\tGrade\tMeaning\tReading\n\
         1\t一\t火\t\t\t1\t1\tone\tイチ、ひと\n",
    );
    let err = KanjiData::load(dir.path()).unwrap_err().to_string();
    assert!(err.contains("non-existing radical"), "{err}");
    assert!(err.contains("row: 1"), "{err}");
    assert!(err.contains("column: 'Radical'"), "{err}");
    assert!(err.contains("value: '火'"), "{err}");
}

#[test]
fn linked_jinmei_target_must_be_official() {
    let dir = data_dir();
    write(dir.path(), "linked-jinmei.txt", "蝦 逸\u{fe01}\n");
    let err = KanjiData::load(dir.path()).unwrap_err().to_string();
    assert!(err.contains("link target '蝦' not found"), "{err}");
    // a target that exists but is itself a linked kanji is rejected
    let dir = data_dir();
    write(
        dir.path(),
        "linked-jinmei.txt",
        "逸 逸\u{fe01}\n逸\u{fe01} 彁\n",
    );
    let err = KanjiData::load(dir.path()).unwrap_err().to_string();
    assert!(err.contains("wanted type 'Jouyou' or 'Jinmei'"), "{err}");
    assert!(err.contains("got 'LinkedJinmei'"), "{err}");
}

#[test]
fn duplicate_names_across_files_are_rejected() {
    let dir = data_dir();
    write(
        dir.path(),
        "extra.txt",
        "Number\tName\tRadical\tStrokes\tMeaning\tReading\n\
         1\t一\t一\t1\tone\tイチ\n",
    );
    let err = KanjiData::load(dir.path()).unwrap_err().to_string();
    assert!(err.contains("duplicate kanji '一'"), "{err}");
}

#[test]
fn frequency_list_is_capped() {
    let dir = data_dir();
    let mut contents = String::new();
    let mut count = 0;
    for c in (0x3400u32..).filter_map(char::from_u32) {
        contents.push(c);
        contents.push('\n');
        count += 1;
        if count == 2502 {
            break;
        }
    }
    write(dir.path(), "frequency.txt", &contents);
    let err = KanjiData::load(dir.path()).unwrap_err().to_string();
    assert!(err.contains("frequency list exceeds 2501"), "{err}");
}

#[test]
fn groups_load_and_index() {
    let dir = data_dir();
    let data = KanjiData::load(dir.path()).unwrap();
    let groups = GroupData::load(dir.path(), &data).unwrap();
    assert_eq!(groups.meaning_groups().len(), 1);
    assert_eq!(groups.pattern_groups().len(), 3);

    let meaning = &groups.meaning_groups()[0];
    assert_eq!(meaning.number(), 1);
    assert_eq!(meaning.name(), "学校");
    assert_eq!(meaning.members().len(), 2);
    assert!(meaning.pattern_type().is_none());
    assert_eq!(groups.meaning_groups_for("一").len(), 1);
    assert!(groups.meaning_groups_for("亘").is_empty());

    // the family group's parent is prepended to its members
    let family = &groups.pattern_groups()[0];
    assert_eq!(family.pattern_type(), Some(PatternType::Family));
    let names: Vec<_> = family.members().iter().map(|k| k.name()).collect();
    assert_eq!(names, ["一", "丼"]);
    assert_eq!(
        groups.pattern_groups()[1].pattern_type(),
        Some(PatternType::Peer)
    );
    assert_eq!(
        groups.pattern_groups()[2].pattern_type(),
        Some(PatternType::Reading)
    );

    // a kanji is in at most one pattern group
    assert_eq!(groups.pattern_group_for("丼").unwrap().number(), 1);
    assert_eq!(groups.pattern_group_for("学").unwrap().number(), 2);
    assert!(groups.pattern_group_for("頃").is_none());
}

#[test]
fn pattern_overlap_keeps_first_group() {
    let dir = data_dir();
    write(
        dir.path(),
        "pattern-groups.txt",
        "Number\tName\tMembers\n1\tア\t一 学\n2\tイ\t学 丼\n",
    );
    let data = KanjiData::load(dir.path()).unwrap();
    let groups = GroupData::load(dir.path(), &data).unwrap();
    // the duplicate membership is logged and ignored
    assert_eq!(groups.pattern_group_for("学").unwrap().number(), 1);
    assert_eq!(groups.pattern_group_for("丼").unwrap().number(), 2);
}

#[test]
fn unknown_group_members_are_dropped() {
    let dir = data_dir();
    write(
        dir.path(),
        "meaning-groups.txt",
        "Number\tName\tMembers\n1\t学校\t一 学 火\n",
    );
    let data = KanjiData::load(dir.path()).unwrap();
    let groups = GroupData::load(dir.path(), &data).unwrap();
    assert_eq!(groups.meaning_groups()[0].members().len(), 2);
}

#[test]
fn group_needs_enough_members() {
    let dir = data_dir();
    write(
        dir.path(),
        "meaning-groups.txt",
        "Number\tName\tMembers\n1\t学校\t一 火\n",
    );
    let data = KanjiData::load(dir.path()).unwrap();
    let err = GroupData::load(dir.path(), &data).unwrap_err().to_string();
    assert!(err.contains("at least 2 valid members"), "{err}");
}
