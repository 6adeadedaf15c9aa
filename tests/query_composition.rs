// tests/query_composition.rs
use std::collections::HashSet;

use pocket_objections::dataset::Entry;
use pocket_objections::query::{query, Filter, MatchMode};

fn corpus() -> Vec<Entry> {
    let cats = ["Pricing", "Timing", "Spouse", ""];
    let tags = [
        vec!["leads".to_string()],
        vec!["roi".to_string(), "Leads".to_string()],
        vec![],
        vec!["timing".to_string(), "pricing".to_string()],
        vec!["ROI".to_string()],
    ];
    (0..60)
        .map(|i| {
            Entry::new(
                &format!("Objection {i} {}", if i % 3 == 0 { "price" } else { "later" }),
                &format!("Answer {i}"),
                cats[i % cats.len()],
                tags[i % tags.len()].clone(),
            )
        })
        .collect()
}

fn ids(v: &[&Entry]) -> HashSet<String> {
    v.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn combined_filter_is_intersection_of_single_filters() {
    let es = corpus();
    let terms = ["", "price", "LATER"];
    let topic_sets: [&[&str]; 3] = [&[], &["pricing"], &["leads", "roi"]];
    let modes = [MatchMode::Any, MatchMode::All];
    let categories = [None, Some("Pricing"), Some("Spouse")];
    let tags = [None, Some("roi"), Some("LEADS")];

    for term in terms {
        for topics in topic_sets {
            for mode in modes {
                for cat in categories {
                    for tag in tags {
                        let combined = Filter {
                            term: term.to_string(),
                            topics: topics.iter().map(|t| t.to_string()).collect(),
                            match_mode: mode,
                            category: cat.map(String::from),
                            tag: tag.map(String::from),
                        };
                        let singles = [
                            Filter { term: combined.term.clone(), ..Filter::default() },
                            Filter { topics: combined.topics.clone(), match_mode: mode, ..Filter::default() },
                            Filter { category: combined.category.clone(), ..Filter::default() },
                            Filter { tag: combined.tag.clone(), ..Filter::default() },
                        ];
                        let mut expected = ids(&query(&es, &Filter::default()));
                        for f in &singles {
                            let part = ids(&query(&es, f));
                            expected.retain(|id| part.contains(id));
                        }
                        let got = query(&es, &combined);
                        assert_eq!(ids(&got), expected, "{combined:?}");

                        // original order is kept
                        let pos: Vec<usize> = got
                            .iter()
                            .map(|e| es.iter().position(|x| x.id == e.id).unwrap())
                            .collect();
                        assert!(pos.windows(2).all(|w| w[0] < w[1]));
                    }
                }
            }
        }
    }
}

#[test]
fn any_versus_all() {
    let es = vec![Entry::new("q", "a", "Pricing", vec!["leads".into()])];
    let mut f = Filter { topics: vec!["pricing".into(), "timing".into()], ..Filter::default() };
    assert_eq!(query(&es, &f).len(), 1);
    f.match_mode = MatchMode::All;
    assert!(query(&es, &f).is_empty());
}

#[test]
fn ids_are_stable_and_distinct_at_scale() {
    let entries: Vec<Entry> = (0..10_000)
        .map(|i| Entry::new(&format!("Objection number {i}"), &format!("Rebuttal {}", i * 7), "", vec![]))
        .collect();
    let unique: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(unique.len(), entries.len());

    let again = Entry::new("Objection number 42", "Rebuttal 294", "", vec![]);
    assert_eq!(again.id, entries[42].id);
}

#[test]
fn identical_pairs_share_an_id() {
    let a = Entry::new("Too expensive", "It pays.", "Pricing", vec![]);
    let b = Entry::new("Too expensive", "It pays.", "Other", vec!["x".into()]);
    assert_eq!(a.id, b.id);
}
