/// Fate of one old-string character slot relative to the new string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffKind {
    Same,
    #[default]
    Add,
    Delete,
    Move,
    MoveAndAdd,
    Replace,
}

/// One alignment record per old-string position, ordered by position.
///
/// `move_offset` is destination index minus source index in the new string,
/// meaningful only for `Move`/`MoveAndAdd`. `skip` marks a slot whose new
/// character already arrives via another record's move, so the new-character
/// pass must not render it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffRecord {
    pub kind: DiffKind,
    pub move_offset: isize,
    pub skip: bool,
}

/// Aligns `old` against `new`, producing `max(|old|, |new|)` records.
///
/// Greedy first-match scan: each old character claims the leftmost unclaimed
/// equal character in the new string. This can misalign on repeated
/// characters; the instability is accepted in exchange for a predictable,
/// order-stable result.
pub fn align(old: &str, new: &str) -> Vec<DiffRecord> {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();
    let new_len = new_chars.len() as isize;
    let max_len = old_chars.len().max(new_chars.len());

    let mut records = vec![DiffRecord::default(); max_len];
    let mut consumed = vec![false; new_chars.len()];

    for (i, record) in records.iter_mut().enumerate() {
        // Slots past the old string stay `Add`; the new-character pass
        // downstream draws them.
        let Some(&ch) = old_chars.get(i) else {
            continue;
        };

        let found = new_chars
            .iter()
            .enumerate()
            .find(|&(j, &nc)| !consumed[j] && nc == ch)
            .map(|(j, _)| j);

        match found {
            Some(j) => {
                consumed[j] = true;

                if j == i {
                    record.kind = DiffKind::Same;
                } else {
                    record.move_offset = j as isize - i as isize;
                    record.kind = if (i as isize) <= new_len - 1 {
                        // The vacated slot also receives a newly appearing
                        // character.
                        DiffKind::MoveAndAdd
                    } else {
                        DiffKind::Move
                    };
                }
            }

            None => {
                // Deletions are only inferred at the tail; anywhere else an
                // unmatched character is replaced in place.
                record.kind = if (i as isize) < new_len - 1 {
                    DiffKind::Replace
                } else {
                    DiffKind::Delete
                };
            }
        }
    }

    for i in 0..records.len() {
        if matches!(records[i].kind, DiffKind::Move | DiffKind::MoveAndAdd) {
            let dest = (i as isize + records[i].move_offset) as usize;
            records[dest].skip = true;
        }
    }

    records
}
