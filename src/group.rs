//! Meaning and pattern groups of kanji.
//!
//! Meaning groups bundle kanji by topic (animals, colors, …) and a kanji
//! may appear in many of them. Pattern groups bundle kanji by shared
//! phonetic component and are exclusive: a kanji belongs to at most one
//! pattern group.

use core::fmt;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::column_file::{Column, ColumnFile};
use crate::error::Result;
use crate::kanji::{Kanji, KanjiData};
use crate::list_file;

pub const MIN_MEMBERS: usize = 2;
pub const MAX_MEMBERS: usize = 58;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Meaning,
    Pattern,
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupType::Meaning => "Meaning",
            GroupType::Pattern => "Pattern",
        })
    }
}

/// How a pattern group is organized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternType {
    /// The first member is a parent contained in all the others
    /// (太 → 太, 駄, 汰).
    Family,
    /// Members share a common component that isn't a member itself.
    Peer,
    /// Catch-all grouping by reading for kanji without a clear component.
    Reading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    Meaning,
    Pattern(PatternType),
}

#[derive(Debug)]
pub struct Group {
    number: u16,
    name: String,
    members: Vec<Arc<Kanji>>,
    kind: GroupKind,
}

impl Group {
    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Arc<Kanji>] {
        &self.members
    }

    pub fn group_type(&self) -> GroupType {
        match self.kind {
            GroupKind::Meaning => GroupType::Meaning,
            GroupKind::Pattern(_) => GroupType::Pattern,
        }
    }

    pub fn pattern_type(&self) -> Option<PatternType> {
        match self.kind {
            GroupKind::Meaning => None,
            GroupKind::Pattern(p) => Some(p),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.number, self.name)
    }
}

/// All groups plus the member indexes.
#[derive(Debug, Default)]
pub struct GroupData {
    meaning_groups: Vec<Arc<Group>>,
    pattern_groups: Vec<Arc<Group>>,
    /// a kanji may be in any number of meaning groups
    meaning_map: HashMap<String, Vec<Arc<Group>>>,
    /// but in at most one pattern group
    pattern_map: HashMap<String, Arc<Group>>,
}

impl GroupData {
    /// Load `meaning-groups.txt` and `pattern-groups.txt`, resolving
    /// members against already-loaded kanji data.
    pub fn load(dir: &Path, data: &KanjiData) -> Result<Self> {
        let mut groups = GroupData::default();
        groups.load_file(
            &list_file::get_file(dir, "meaning-groups")?,
            GroupType::Meaning,
            data,
        )?;
        groups.load_file(
            &list_file::get_file(dir, "pattern-groups")?,
            GroupType::Pattern,
            data,
        )?;
        Ok(groups)
    }

    pub fn meaning_groups(&self) -> &[Arc<Group>] {
        &self.meaning_groups
    }

    pub fn pattern_groups(&self) -> &[Arc<Group>] {
        &self.pattern_groups
    }

    /// Meaning groups containing `name`.
    pub fn meaning_groups_for(&self, name: &str) -> &[Arc<Group>] {
        self.meaning_map.get(name).map_or(&[], Vec::as_slice)
    }

    /// The single pattern group containing `name`, if any.
    pub fn pattern_group_for(&self, name: &str) -> Option<&Arc<Group>> {
        self.pattern_map.get(name)
    }

    fn load_file(&mut self, path: &Path, group_type: GroupType, data: &KanjiData) -> Result<()> {
        let number_col = Column::new("Number");
        let name_col = Column::new("Name");
        let members_col = Column::new("Members");
        let columns = [number_col.clone(), name_col.clone(), members_col.clone()];
        let mut file = ColumnFile::new(path, &columns)?;
        while file.next_row()? {
            let number = file.get_u16(&number_col)?;
            let name = file.get(&name_col)?.to_owned();
            let mut member_names: Vec<String> = Vec::new();
            let kind = match group_type {
                GroupType::Meaning => {
                    if name.is_empty() {
                        return Err(file.error("meaning group must have a name"));
                    }
                    GroupKind::Meaning
                }
                GroupType::Pattern => GroupKind::Pattern(pattern_type(&name, &mut member_names)),
            };
            member_names.extend(
                file.get(&members_col)?
                    .split(' ')
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned),
            );
            let mut members = Vec::new();
            for member in &member_names {
                if members.iter().any(|k: &Arc<Kanji>| k.name() == member.as_str()) {
                    return Err(file.value_error("duplicate group member", &name_col, member));
                }
                match data.find(member) {
                    Some(kanji) => members.push(kanji.clone()),
                    None => warn!(group = number, member = %member, "failed to find member"),
                }
            }
            if members.len() < MIN_MEMBERS {
                return Err(file.error(&format!(
                    "group {number} needs at least {MIN_MEMBERS} valid members"
                )));
            }
            if members.len() > MAX_MEMBERS {
                return Err(file.error(&format!(
                    "group {number} exceeds {MAX_MEMBERS} members"
                )));
            }
            let group = Arc::new(Group {
                number,
                name,
                members,
                kind,
            });
            for member in group.members() {
                self.index_member(member.name(), &group);
            }
            match group_type {
                GroupType::Meaning => self.meaning_groups.push(group),
                GroupType::Pattern => self.pattern_groups.push(group),
            }
        }
        Ok(())
    }

    fn index_member(&mut self, name: &str, group: &Arc<Group>) {
        match group.kind {
            GroupKind::Meaning => self
                .meaning_map
                .entry(name.to_owned())
                .or_default()
                .push(group.clone()),
            GroupKind::Pattern(_) => {
                if let Some(existing) = self.pattern_map.get(name) {
                    warn!(
                        member = name,
                        group = group.number(),
                        existing = existing.number(),
                        "already in another pattern group"
                    );
                } else {
                    self.pattern_map.insert(name.to_owned(), group.clone());
                }
            }
        }
    }
}

/// Decide the pattern type from the group name: a leading `：` marks a
/// peer group, `X：...` with a parent kanji X marks a family group (and X
/// joins the members), anything else groups by reading.
fn pattern_type(name: &str, member_names: &mut Vec<String>) -> PatternType {
    if name.starts_with('：') {
        return PatternType::Peer;
    }
    if let Some((parent, _)) = name.split_once('：') {
        if crate::block::is_kanji(parent, true) {
            member_names.push(parent.to_owned());
            return PatternType::Family;
        }
    }
    PatternType::Reading
}
