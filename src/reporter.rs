use std::io::{self, Write};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::grouper::RarityGroups;
use crate::rarity;

pub const HEADER: &str = "== Unique Rare Types with One Random ID Each ==";

/// The identifier picked for one rarity label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub rare: String,
    pub count: usize, // identifiers in the group
    pub example_id: Value,
}

/// One uniform pick per label, labels ascending.
pub fn sample<R: Rng + ?Sized>(groups: &RarityGroups, rng: &mut R) -> Vec<Sample> {
    groups
        .iter()
        .filter_map(|(label, ids)| {
            ids.choose(&mut *rng).map(|id| Sample {
                rare: label.to_owned(),
                count: ids.len(),
                example_id: id.clone(),
            })
        })
        .collect()
}

/// Identifiers print the same way rarity labels do.
pub fn display_id(id: &Value) -> String {
    rarity::label_of(id)
}

pub fn write_report<W: Write>(out: &mut W, samples: &[Sample]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for s in samples {
        writeln!(out, "🔹 {}: ID {}", s.rare, display_id(&s.example_id))?;
    }
    writeln!(out)?;
    writeln!(out, "✅ Total Unique Rare Types: {}", samples.len())?;
    out.flush()
}

/// Sample every group and print the report to `out`.
pub fn report<R, W>(groups: &RarityGroups, rng: &mut R, out: &mut W) -> io::Result<Vec<Sample>>
where
    R: Rng + ?Sized,
    W: Write,
{
    let samples = sample(groups, rng);
    write_report(out, &samples)?;
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouper::group_by_rarity;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn gold_silver() -> RarityGroups {
        let recs = vec![
            json!({"Rare": "Silver", "Id": 3}),
            json!({"Rare": "Gold", "Id": 1}),
            json!({"Rare": "Gold", "Id": 2}),
            json!({"Id": 4}),
        ];
        group_by_rarity(&recs, false)
    }

    #[test]
    fn report_lines_are_sorted_and_counted() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buf = Vec::new();
        let samples = report(&gold_silver(), &mut rng, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], HEADER);
        assert!(lines[1] == "🔹 Gold: ID 1" || lines[1] == "🔹 Gold: ID 2");
        assert_eq!(lines[2], "🔹 Silver: ID 3");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "✅ Total Unique Rare Types: 2");
        assert_eq!(lines.len(), 5);

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].count, 2);
    }

    #[test]
    fn empty_groups_report_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut buf = Vec::new();
        let samples = report(&RarityGroups::default(), &mut rng, &mut buf).unwrap();
        assert!(samples.is_empty());
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("{HEADER}\n\n✅ Total Unique Rare Types: 0\n"));
    }

    #[test]
    fn same_seed_same_picks() {
        let recs: Vec<Value> = (0..50).map(|i| json!({"Rare": "Blue", "Id": i})).collect();
        let groups = group_by_rarity(&recs, false);
        let a = sample(&groups, &mut StdRng::seed_from_u64(42));
        let b = sample(&groups, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_member_can_be_picked() {
        let recs: Vec<Value> = (0..4).map(|i| json!({"Rare": "Green", "Id": i})).collect();
        let groups = group_by_rarity(&recs, false);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let s = sample(&groups, &mut rng);
            seen[s[0].example_id.as_u64().unwrap() as usize] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn ids_render_like_their_source() {
        assert_eq!(display_id(&json!("sword_01")), "sword_01");
        assert_eq!(display_id(&json!(1001)), "1001");
        assert_eq!(display_id(&json!(1.5)), "1.5");
        assert_eq!(display_id(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(display_id(&json!(false)), "False");
    }

    #[test]
    fn boolean_rarity_sorts_capitalised() {
        let recs = vec![
            json!({"Rare": true, "Id": false}),
            json!({"Rare": 7, "Id": 1}),
            json!({"Rare": "gold", "Id": 2}),
        ];
        let groups = group_by_rarity(&recs, false);
        let mut buf = Vec::new();
        report(&groups, &mut StdRng::seed_from_u64(3), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().skip(1).take(3).collect();
        assert_eq!(lines, vec!["🔹 7: ID 1", "🔹 True: ID False", "🔹 gold: ID 2"]);
    }
}
